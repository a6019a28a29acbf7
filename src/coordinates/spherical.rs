//! Spherical representation of the 3D pane's tracked point.
//!
//! `(ρ, θ, φ)` with `ρ` the distance from the origin, `θ` the azimuth
//! from the +x axis in the xy-plane, and `φ` the polar angle measured
//! down from the +z axis. `φ = 0` points straight up, `φ = π/2` lies in
//! the xy-plane, `φ = π` points straight down.
//!
//! The converter is deliberately permissive: `φ` outside `[0, π]` and
//! negative `ρ` still compute through [`to_cartesian`](SpatialFrame::to_cartesian)
//! (they land on the mirrored point), and reading such a point back
//! yields its canonical form. Guarding inputs is the widget layer's
//! job, not the kernel's.

use super::angle::AngleDomain;
use super::cartesian::Point3;
use super::SpatialFrame;

/// Spherical coordinates for the 3D pane
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spherical {
    /// Distance from the origin
    pub rho: f64,
    /// Azimuth in radians from the +x axis
    pub theta: f64,
    /// Polar angle in radians from the +z axis
    pub phi: f64,
}

impl Spherical {
    /// Creates spherical coordinates from raw components
    pub fn new(rho: f64, theta: f64, phi: f64) -> Self {
        Spherical { rho, theta, phi }
    }
}

impl SpatialFrame for Spherical {
    /// Converts a Cartesian point to spherical coordinates
    ///
    /// `ρ = sqrt(x² + y² + z²)`, `θ` as in the 2D polar case, and
    /// `φ = acos(z / ρ)` when `ρ > 0`. The zero vector degenerates to
    /// `{ rho: 0, theta: 0, phi: 0 }`.
    fn from_cartesian(point: Point3, domain: AngleDomain) -> Self {
        let rho = point.magnitude();
        let phi = if rho > 0.0 { (point.z / rho).acos() } else { 0.0 };
        Spherical {
            rho,
            theta: domain.normalize(point.y.atan2(point.x)),
            phi,
        }
    }

    /// Converts back to a Cartesian point
    ///
    /// `x = ρ·sin φ·cos θ`, `y = ρ·sin φ·sin θ`, `z = ρ·cos φ`.
    fn to_cartesian(&self) -> Point3 {
        let sin_phi = self.phi.sin();
        Point3::new(
            self.rho * sin_phi * self.theta.cos(),
            self.rho * sin_phi * self.theta.sin(),
            self.rho * self.phi.cos(),
        )
    }
}
