pub mod angle;
pub mod cartesian;
pub mod cylindrical;
pub mod polar;
pub mod spherical;

pub use angle::AngleDomain;
pub use cartesian::{Point2, Point3};
pub use cylindrical::Cylindrical;
pub use polar::Polar;
pub use spherical::Spherical;

// Shared surface of the 3D coordinate representations
pub trait SpatialFrame: Sized {
    fn from_cartesian(point: Point3, domain: AngleDomain) -> Self;
    fn to_cartesian(&self) -> Point3;

    /// Distance from the origin, measured through the Cartesian image
    fn radial_distance(&self) -> f64 {
        self.to_cartesian().magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_frames_agree_on_the_same_point() {
        let point = Point3::new(2.0, 2.0, 1.0);

        let cylindrical = Cylindrical::from_cartesian(point, AngleDomain::ZeroToTwoPi);
        let spherical = Spherical::from_cartesian(point, AngleDomain::ZeroToTwoPi);

        // Same azimuth regardless of representation
        assert_relative_eq!(cylindrical.theta, spherical.theta, epsilon = 1e-15);
        assert_relative_eq!(cylindrical.theta, FRAC_PI_4, epsilon = 1e-15);

        // Same distance from the origin through either frame
        assert_relative_eq!(cylindrical.radial_distance(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(spherical.radial_distance(), 3.0, epsilon = 1e-12);

        // Both reconstruct the same Cartesian point
        let via_cylindrical = cylindrical.to_cartesian();
        let via_spherical = spherical.to_cartesian();
        assert_relative_eq!(via_cylindrical.x, via_spherical.x, epsilon = 1e-12);
        assert_relative_eq!(via_cylindrical.y, via_spherical.y, epsilon = 1e-12);
        assert_relative_eq!(via_cylindrical.z, via_spherical.z, epsilon = 1e-12);
    }

    #[test]
    fn test_polar_matches_cylindrical_slice() {
        // The 2D conversion is exactly the cylindrical conversion at height 0
        let flat = Point2::new(-1.5, 2.5);
        let lifted = Point3::new(flat.x, flat.y, 0.0);

        let polar = Polar::from_cartesian(flat, AngleDomain::NegPiToPi);
        let cylindrical = Cylindrical::from_cartesian(lifted, AngleDomain::NegPiToPi);

        assert_eq!(polar.r, cylindrical.r);
        assert_eq!(polar.theta, cylindrical.theta);
        assert_eq!(cylindrical.height, 0.0);
    }
}
