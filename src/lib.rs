//! Axiscope: coordinate-system geometry for interactive 2D/3D visualizers
//!
//! This crate is the math layer behind an educational axis visualizer:
//! angle-domain normalization, conversions between Cartesian, polar,
//! cylindrical, and spherical coordinates, a perspective projector for
//! the 3D pane, and wireframe sampling for the overlay shapes. The
//! [`scene::Scene`] struct ties the pieces together as the state a
//! widget layer renders from.
//!
//! The world is z-up: x and y span the ground plane and z is height.
//! Conversions hand back exactly what the math produces, degenerate
//! inputs included, so readouts stay honest while a point is dragged
//! through the origin.
//!
//! ```rust
//! use axiscope::{AngleDomain, Point3, SpatialFrame, Spherical};
//!
//! let point = Point3::new(2.0, 2.0, 1.0);
//! let spherical = Spherical::from_cartesian(point, AngleDomain::ZeroToTwoPi);
//! assert_eq!(spherical.rho, 3.0);
//! ```

use crate::constants::{MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE};
use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod projection;
pub mod scene;
pub mod wireframe;

// Re-export commonly used types
pub use coordinates::{AngleDomain, Cylindrical, Point2, Point3, Polar, SpatialFrame, Spherical};
pub use projection::{project, Camera, Perspective, Viewport};
pub use scene::{Scene, ShapeOverlay, ViewMode};
pub use wireframe::{Cylinder, Sphere};

/// Main error type for the axiscope library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxiscopeError {
    #[error(
        "camera distance {distance} is outside the safe range [{}, {}]",
        MIN_CAMERA_DISTANCE,
        MAX_CAMERA_DISTANCE
    )]
    CameraDistance { distance: f64 },
}

/// Result type for axiscope operations
pub type Result<T> = std::result::Result<T, AxiscopeError>;
