//! Polar representation of the 2D pane's tracked point.
//!
//! `(r, θ)` with `r` the distance from the origin and `θ` the azimuth
//! from the +x axis, wrapped into the caller's [`AngleDomain`]. The
//! converter never validates: a negative `r` simply reflects through
//! the origin on the way back to Cartesian, and NaN/±∞ components pass
//! through.

use super::angle::AngleDomain;
use super::cartesian::Point2;

/// Polar coordinates for the 2D pane
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polar {
    /// Radial distance from the origin
    pub r: f64,
    /// Azimuth in radians from the +x axis
    pub theta: f64,
}

impl Polar {
    /// Creates polar coordinates from raw components
    ///
    /// No wrapping or validation happens here; `theta` is stored as
    /// given. Use [`AngleDomain::normalize`] first if you need it
    /// in-domain.
    pub fn new(r: f64, theta: f64) -> Self {
        Polar { r, theta }
    }

    /// Converts a Cartesian point to polar coordinates
    ///
    /// `r` is `hypot(x, y)`; `theta` is `atan2(y, x)` wrapped into
    /// `domain`. The origin maps to `{ r: 0, theta: 0 }` since
    /// `atan2(0, 0)` is zero and wrapping keeps it there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::angle::AngleDomain;
    /// use axiscope::coordinates::cartesian::Point2;
    /// use axiscope::coordinates::polar::Polar;
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// let polar = Polar::from_cartesian(Point2::new(1.0, 1.0), AngleDomain::ZeroToTwoPi);
    /// assert!((polar.r - 2.0_f64.sqrt()).abs() < 1e-15);
    /// assert!((polar.theta - FRAC_PI_4).abs() < 1e-15);
    /// ```
    pub fn from_cartesian(point: Point2, domain: AngleDomain) -> Self {
        Polar {
            r: point.magnitude(),
            theta: domain.normalize(point.y.atan2(point.x)),
        }
    }

    /// Converts back to a Cartesian point
    ///
    /// `x = r·cos θ`, `y = r·sin θ`. Accepts any `r` and `theta`,
    /// including out-of-domain angles and negative radii.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::polar::Polar;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let point = Polar::new(2.0, FRAC_PI_2).to_cartesian();
    /// assert!(point.x.abs() < 1e-15);
    /// assert!((point.y - 2.0).abs() < 1e-15);
    /// ```
    pub fn to_cartesian(&self) -> Point2 {
        Point2::new(self.r * self.theta.cos(), self.r * self.theta.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    const TAU: f64 = 2.0 * PI;

    #[test]
    fn test_cardinal_directions() {
        // Case 1: +x axis
        let east = Polar::from_cartesian(Point2::new(1.0, 0.0), AngleDomain::ZeroToTwoPi);
        assert_relative_eq!(east.r, 1.0, epsilon = 1e-15);
        assert_relative_eq!(east.theta, 0.0, epsilon = 1e-15);

        // Case 2: +y axis
        let north = Polar::from_cartesian(Point2::new(0.0, 1.0), AngleDomain::ZeroToTwoPi);
        assert_relative_eq!(north.theta, FRAC_PI_2, epsilon = 1e-15);

        // Case 3: -x axis, same angle in both domains
        let west = Polar::from_cartesian(Point2::new(-1.0, 0.0), AngleDomain::ZeroToTwoPi);
        assert_relative_eq!(west.theta, PI, epsilon = 1e-15);
        let west_signed = Polar::from_cartesian(Point2::new(-1.0, 0.0), AngleDomain::NegPiToPi);
        assert_relative_eq!(west_signed.theta, PI, epsilon = 1e-15);

        // Case 4: -y axis, where the two domains disagree
        let south = Polar::from_cartesian(Point2::new(0.0, -1.0), AngleDomain::ZeroToTwoPi);
        assert_relative_eq!(south.theta, 3.0 * FRAC_PI_2, epsilon = 1e-12);
        let south_signed = Polar::from_cartesian(Point2::new(0.0, -1.0), AngleDomain::NegPiToPi);
        assert_relative_eq!(south_signed.theta, -FRAC_PI_2, epsilon = 1e-15);
    }

    #[test]
    fn test_origin_is_zero_zero() {
        for domain in [AngleDomain::ZeroToTwoPi, AngleDomain::NegPiToPi] {
            let origin = Polar::from_cartesian(Point2::new(0.0, 0.0), domain);
            assert_eq!(origin.r, 0.0);
            assert_eq!(origin.theta, 0.0);
        }
    }

    #[test]
    fn test_cartesian_round_trip() {
        let mut rng = StdRng::seed_from_u64(424242); // Fixed seed for reproducibility
        for i in 0..100 {
            let point = Point2::new(rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0));
            for domain in [AngleDomain::ZeroToTwoPi, AngleDomain::NegPiToPi] {
                let back = Polar::from_cartesian(point, domain).to_cartesian();
                println!("Test {}: ({:.6}, {:.6}) -> ({:.6}, {:.6})", i, point.x, point.y, back.x, back.y);
                assert_relative_eq!(point.x, back.x, epsilon = 1e-9);
                assert_relative_eq!(point.y, back.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_polar_round_trip_in_domain() {
        let mut rng = StdRng::seed_from_u64(900913);
        for _ in 0..100 {
            let original = Polar::new(rng.gen_range(0.01..100.0), rng.gen_range(0.01..TAU - 0.01));
            let round_trip =
                Polar::from_cartesian(original.to_cartesian(), AngleDomain::ZeroToTwoPi);
            assert_relative_eq!(original.r, round_trip.r, epsilon = 1e-9);
            // Compare the direction rather than the raw angle so the wrap
            // seam cannot flip a comparison
            assert_relative_eq!(original.theta.cos(), round_trip.theta.cos(), epsilon = 1e-9);
            assert_relative_eq!(original.theta.sin(), round_trip.theta.sin(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_negative_radius_reflects() {
        let reflected = Polar::new(-2.0, 0.0).to_cartesian();
        assert_relative_eq!(reflected.x, -2.0, epsilon = 1e-15);
        assert_relative_eq!(reflected.y, 0.0, epsilon = 1e-15);

        // Reading it back gives the canonical form of the same point
        let canonical = Polar::from_cartesian(reflected, AngleDomain::ZeroToTwoPi);
        assert_relative_eq!(canonical.r, 2.0, epsilon = 1e-15);
        assert_relative_eq!(canonical.theta, PI, epsilon = 1e-15);
    }

    #[test]
    fn test_non_finite_propagates() {
        let from_nan = Polar::from_cartesian(Point2::new(f64::NAN, 1.0), AngleDomain::ZeroToTwoPi);
        assert!(from_nan.r.is_nan());
        assert!(from_nan.theta.is_nan());

        let to_nan = Polar::new(f64::NAN, 0.0).to_cartesian();
        assert!(to_nan.x.is_nan());

        let from_inf =
            Polar::from_cartesian(Point2::new(f64::INFINITY, 1.0), AngleDomain::NegPiToPi);
        assert!(from_inf.r.is_infinite());
        assert_relative_eq!(from_inf.theta, 0.0, epsilon = 1e-15);
    }
}
