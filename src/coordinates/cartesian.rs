//! # Cartesian Point Module
//!
//! This module provides the plain Cartesian point types that every other
//! representation converts through. The 2D pane tracks a [`Point2`], the
//! 3D pane tracks a [`Point3`].
//!
//! ## Coordinate System Convention
//!
//! The 3D world is right-handed with **z pointing up**:
//!
//! - **X-axis**: Points right across the screen
//! - **Y-axis**: Points into the scene (depth)
//! - **Z-axis**: Points up (height)
//!
//! The cylindrical and spherical representations measure their vertical
//! component against `z`, and the camera projector remaps `z` onto the
//! screen-vertical axis. Keeping "which axis is up" in one place avoids
//! the classic y-up/z-up mixups when wiring a frontend.
//!
//! ## Internal Storage
//!
//! Components are stored as `f64` exactly as given. No normalization, no
//! validation: NaN and ±∞ components flow through conversions and
//! projection untouched.
//!
//! ## Examples
//!
//! ```rust
//! use axiscope::coordinates::cartesian::{Point2, Point3};
//!
//! let flat = Point2::new(3.0, 4.0);
//! assert_eq!(flat.magnitude(), 5.0);
//!
//! // One unit off the ground, sqrt(8) out from the z-axis
//! let raised = Point3::new(2.0, 2.0, 1.0);
//! assert_eq!(raised.magnitude(), 3.0);
//! assert!((raised.xy_radius() - 8.0_f64.sqrt()).abs() < 1e-15);
//! ```

use nalgebra::Vector3;

/// Two-dimensional Cartesian point
///
/// The tracked point of the 2D pane. `x` is rightward, `y` is upward in
/// that pane (the pane has no depth axis).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point2 {
    /// X-component (rightward)
    pub x: f64,
    /// Y-component (upward in the 2D pane)
    pub y: f64,
}

impl Point2 {
    /// Creates a new 2D point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::cartesian::Point2;
    ///
    /// let point = Point2::new(2.0, 3.0);
    /// assert_eq!(point.x, 2.0);
    /// assert_eq!(point.y, 3.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Distance from the origin
    ///
    /// Computed with `hypot`, which stays accurate when one component
    /// dwarfs the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::cartesian::Point2;
    ///
    /// assert_eq!(Point2::new(3.0, 4.0).magnitude(), 5.0);
    /// assert_eq!(Point2::new(0.0, 0.0).magnitude(), 0.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Three-dimensional Cartesian point
///
/// The tracked point of the 3D pane and the output format of the
/// wireframe samplers.
///
/// # Coordinate System
///
/// - **X**: Rightward
/// - **Y**: Into the scene (depth)
/// - **Z**: Up (height)
///
/// Note that `z`, not `y`, is the vertical axis; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    /// X-component (rightward)
    pub x: f64,
    /// Y-component (depth)
    pub y: f64,
    /// Z-component (height)
    pub z: f64,
}

impl Point3 {
    /// Creates a new 3D point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::cartesian::Point3;
    ///
    /// let point = Point3::new(2.0, 2.0, 1.0);
    /// assert_eq!(point.z, 1.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// Distance from the origin
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::cartesian::Point3;
    ///
    /// assert_eq!(Point3::new(2.0, 2.0, 1.0).magnitude(), 3.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance from the z-axis in the xy-plane
    ///
    /// This is the `r` of the cylindrical representation and the rim
    /// radius of a cylinder through this point. Computed with `hypot`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::cartesian::Point3;
    ///
    /// let point = Point3::new(3.0, 4.0, 7.0);
    /// assert_eq!(point.xy_radius(), 5.0);
    /// ```
    pub fn xy_radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::cartesian::Point3;
    ///
    /// let vec = Point3::new(1.0, 2.0, 3.0).to_vector3();
    /// assert_eq!(vec.y, 2.0);
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::coordinates::cartesian::Point3;
    /// use nalgebra::Vector3;
    ///
    /// let point = Point3::from_vector3(Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(point, Point3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Point3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Point2 {
    type Output = Point2;

    fn add(self, other: Point2) -> Point2 {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Point2 {
    type Output = Point2;

    fn sub(self, other: Point2) -> Point2 {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f64> for Point2 {
    type Output = Point2;

    fn mul(self, scalar: f64) -> Point2 {
        Point2 {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl std::ops::Add for Point3 {
    type Output = Point3;

    fn add(self, other: Point3) -> Point3 {
        Point3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Point3 {
    type Output = Point3;

    fn sub(self, other: Point3) -> Point3 {
        Point3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, scalar: f64) -> Point3 {
        Point3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Point3 {
    type Output = Point3;

    fn div(self, scalar: f64) -> Point3 {
        Point3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}
