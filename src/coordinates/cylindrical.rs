//! Cylindrical representation of the 3D pane's tracked point.
//!
//! `(r, θ, height)`: the polar pair measured in the xy-plane plus the
//! vertical offset along z. Because the world is z-up (see
//! [`cartesian`](super::cartesian)), the third component is named
//! `height` rather than `y`; it maps 1:1 onto [`Point3::z`] in both
//! conversion directions. Some textbooks write this component as `y`
//! because their 2D vertical axis is `y`; this crate reserves `y` for
//! the Cartesian depth axis.

use super::angle::AngleDomain;
use super::cartesian::Point3;
use super::SpatialFrame;

/// Cylindrical coordinates for the 3D pane
///
/// The radius/azimuth pair is exactly the 2D polar conversion applied to
/// `(x, y)`; `height` carries `z` through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cylindrical {
    /// Distance from the z-axis in the xy-plane
    pub r: f64,
    /// Azimuth in radians from the +x axis
    pub theta: f64,
    /// Vertical offset, identical to `Point3::z`
    pub height: f64,
}

impl Cylindrical {
    /// Creates cylindrical coordinates from raw components
    pub fn new(r: f64, theta: f64, height: f64) -> Self {
        Cylindrical { r, theta, height }
    }
}

impl SpatialFrame for Cylindrical {
    /// Converts a Cartesian point to cylindrical coordinates
    ///
    /// Points on the z-axis degenerate to `{ r: 0, theta: 0 }` with the
    /// height preserved.
    fn from_cartesian(point: Point3, domain: AngleDomain) -> Self {
        Cylindrical {
            r: point.xy_radius(),
            theta: domain.normalize(point.y.atan2(point.x)),
            height: point.z,
        }
    }

    /// Converts back to a Cartesian point
    ///
    /// `x = r·cos θ`, `y = r·sin θ`, `z = height`.
    fn to_cartesian(&self) -> Point3 {
        Point3::new(
            self.r * self.theta.cos(),
            self.r * self.theta.sin(),
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_height_carries_z_exactly() {
        let point = Point3::new(2.0, 2.0, -3.25);
        let cylindrical = Cylindrical::from_cartesian(point, AngleDomain::ZeroToTwoPi);
        assert_eq!(cylindrical.height, -3.25);
        assert_relative_eq!(cylindrical.r, 8.0_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(cylindrical.theta, FRAC_PI_4, epsilon = 1e-15);

        let back = cylindrical.to_cartesian();
        assert_eq!(back.z, -3.25);
    }

    #[test]
    fn test_z_axis_degenerates_to_zero_angle() {
        for z in [-2.0, 0.0, 5.5] {
            let on_axis = Cylindrical::from_cartesian(Point3::new(0.0, 0.0, z), AngleDomain::NegPiToPi);
            assert_eq!(on_axis.r, 0.0);
            assert_eq!(on_axis.theta, 0.0);
            assert_eq!(on_axis.height, z);
        }
    }

    #[test]
    fn test_cartesian_round_trip() {
        let mut rng = StdRng::seed_from_u64(424242); // Fixed seed for reproducibility
        for i in 0..100 {
            let point = Point3::new(
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
            );
            for domain in [AngleDomain::ZeroToTwoPi, AngleDomain::NegPiToPi] {
                let back = Cylindrical::from_cartesian(point, domain).to_cartesian();
                println!(
                    "Test {}: ({:.6}, {:.6}, {:.6}) -> ({:.6}, {:.6}, {:.6})",
                    i, point.x, point.y, point.z, back.x, back.y, back.z
                );
                assert_relative_eq!(point.x, back.x, epsilon = 1e-9);
                assert_relative_eq!(point.y, back.y, epsilon = 1e-9);
                assert_relative_eq!(point.z, back.z, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_cylindrical_round_trip_in_domain() {
        let mut rng = StdRng::seed_from_u64(555555);
        for _ in 0..100 {
            let original = Cylindrical::new(
                rng.gen_range(0.01..100.0),
                rng.gen_range(-3.1..3.1),
                rng.gen_range(-50.0..50.0),
            );
            let round_trip =
                Cylindrical::from_cartesian(original.to_cartesian(), AngleDomain::NegPiToPi);
            assert_relative_eq!(original.r, round_trip.r, epsilon = 1e-9);
            assert_relative_eq!(original.theta, round_trip.theta, epsilon = 1e-9);
            assert_relative_eq!(original.height, round_trip.height, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_radial_distance_matches_magnitude() {
        let point = Point3::new(2.0, 2.0, 1.0);
        let cylindrical = Cylindrical::from_cartesian(point, AngleDomain::ZeroToTwoPi);
        assert_relative_eq!(cylindrical.radial_distance(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_propagates() {
        let from_nan =
            Cylindrical::from_cartesian(Point3::new(f64::NAN, 0.0, 1.0), AngleDomain::ZeroToTwoPi);
        assert!(from_nan.r.is_nan());
        assert!(from_nan.theta.is_nan());
        assert_eq!(from_nan.height, 1.0);

        let to_nan = Cylindrical::new(1.0, f64::INFINITY, 0.0).to_cartesian();
        assert!(to_nan.x.is_nan());
        assert!(to_nan.y.is_nan());
    }
}
