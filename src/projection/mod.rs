//! Perspective projection of world points onto the viewport.
//!
//! The 3D pane draws everything through one fixed pipeline:
//!
//! 1. **Axis reassignment.** The world is z-up but the camera basis is
//!    y-up, so a world point `(x, y, z)` enters the camera as
//!    `(x, z, y)`: height becomes camera-vertical, depth becomes
//!    camera-forward.
//! 2. **Pitch, then yaw.** Rotate about the camera x-axis by
//!    [`Camera::angle_x`], then about the camera y-axis by
//!    [`Camera::angle_y`]. The yaw leaves the camera-vertical component
//!    untouched, so the screen row comes straight out of the pitch.
//! 3. **Perspective divide.** `scale = distance / (distance + depth)`.
//!    The divide is deliberately unguarded: a point at
//!    `depth == -distance` produces ±∞/NaN pixel coordinates, which the
//!    caller receives as-is. Keeping [`Camera::distance`] inside its
//!    validated range makes that unreachable for points near the grid.
//! 4. **Viewport mapping.** The origin lands on the viewport center and
//!    one world unit spans [`PIXELS_PER_UNIT`] pixels at scale 1.0, with
//!    the screen y-axis flipped (pixels grow downward).
//!
//! ```rust
//! use axiscope::projection::{project, Camera, Viewport};
//! use axiscope::coordinates::cartesian::Point3;
//!
//! // The origin hits the viewport center for every pose
//! let center = project(Point3::new(0.0, 0.0, 0.0), Camera::default(), Viewport::square(600.0));
//! assert_eq!((center.x, center.y), (300.0, 300.0));
//! ```

use crate::constants::{
    DEFAULT_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE, MAX_PITCH, MIN_CAMERA_DISTANCE, PIXELS_PER_UNIT,
};
use crate::coordinates::cartesian::{Point2, Point3};
use crate::{AxiscopeError, Result};
use nalgebra::{Rotation3, Vector3};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI};
use std::str::FromStr;

/// Camera pose for the 3D pane
///
/// `angle_x` pitches the scene about the camera's x-axis, `angle_y` yaws
/// it about the vertical, and `distance` sets how far the eye sits from
/// the origin.
///
/// Construction goes through [`Camera::new`] (validating) or
/// [`Camera::clamped`] (saturating), both of which keep `distance`
/// inside `[MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE]` so the
/// perspective divide cannot blow up on points near the grid. The
/// fields stay public for ergonomic access; code that writes them
/// directly takes over that guarantee. Angles are never validated:
/// live drag values, including accumulated multi-turn yaw, are fine.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Camera {
    /// Pitch about the x-axis, in radians
    pub angle_x: f64,
    /// Yaw about the y-axis, in radians
    pub angle_y: f64,
    /// Eye distance from the origin, in world units
    pub distance: f64,
}

impl Camera {
    /// Creates a camera, rejecting a distance outside the safe range
    ///
    /// # Errors
    ///
    /// Returns [`AxiscopeError::CameraDistance`] when `distance` is not
    /// finite or lies outside `[MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::projection::Camera;
    ///
    /// assert!(Camera::new(0.5, 0.8, 10.0).is_ok());
    /// assert!(Camera::new(0.0, 0.0, 0.0).is_err());
    /// assert!(Camera::new(0.0, 0.0, f64::NAN).is_err());
    /// ```
    pub fn new(angle_x: f64, angle_y: f64, distance: f64) -> Result<Self> {
        if !distance.is_finite()
            || !(MIN_CAMERA_DISTANCE..=MAX_CAMERA_DISTANCE).contains(&distance)
        {
            return Err(AxiscopeError::CameraDistance { distance });
        }
        Ok(Camera {
            angle_x,
            angle_y,
            distance,
        })
    }

    /// Creates a camera, saturating the distance into the safe range
    ///
    /// `f64::max` drops a NaN operand, so a non-finite distance lands on
    /// the near bound rather than poisoning the pose.
    pub fn clamped(angle_x: f64, angle_y: f64, distance: f64) -> Self {
        Camera {
            angle_x,
            angle_y,
            distance: distance.max(MIN_CAMERA_DISTANCE).min(MAX_CAMERA_DISTANCE),
        }
    }

    /// Returns the pose after an orbit step
    ///
    /// `delta_yaw` accumulates freely; the pitch is held inside
    /// `[-MAX_PITCH, MAX_PITCH]` so the camera never flips over the top
    /// of the scene.
    pub fn orbited(self, delta_yaw: f64, delta_pitch: f64) -> Self {
        Camera {
            angle_x: (self.angle_x + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH),
            angle_y: self.angle_y + delta_yaw,
            distance: self.distance,
        }
    }

    /// Returns the pose after a zoom step, saturating at the range ends
    pub fn zoomed(self, delta: f64) -> Self {
        Camera {
            angle_x: self.angle_x,
            angle_y: self.angle_y,
            distance: (self.distance + delta)
                .max(MIN_CAMERA_DISTANCE)
                .min(MAX_CAMERA_DISTANCE),
        }
    }
}

impl Default for Camera {
    /// The free-orbit starting pose
    fn default() -> Self {
        Perspective::Free.camera()
    }
}

/// Named camera poses offered by the view buttons
///
/// Every preset except [`Perspective::Free`] pins the camera to an axis
/// or a corner; `Free` is the only pose the orbit gesture may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    Free,
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
    Isometric,
}

impl Perspective {
    /// The camera pose this preset snaps to
    pub fn camera(self) -> Camera {
        let (angle_x, angle_y, distance) = match self {
            Perspective::Free => (0.5, 0.8, DEFAULT_CAMERA_DISTANCE),
            Perspective::Front => (0.0, 0.0, DEFAULT_CAMERA_DISTANCE),
            Perspective::Back => (0.0, PI, DEFAULT_CAMERA_DISTANCE),
            Perspective::Left => (0.0, -FRAC_PI_2, DEFAULT_CAMERA_DISTANCE),
            Perspective::Right => (0.0, FRAC_PI_2, DEFAULT_CAMERA_DISTANCE),
            Perspective::Top => (FRAC_PI_2, 0.0, DEFAULT_CAMERA_DISTANCE),
            Perspective::Bottom => (-FRAC_PI_2, 0.0, DEFAULT_CAMERA_DISTANCE),
            Perspective::Isometric => (FRAC_PI_6, FRAC_PI_4, 12.0),
        };
        Camera {
            angle_x,
            angle_y,
            distance,
        }
    }

    /// Human-readable button label
    pub fn label(self) -> &'static str {
        match self {
            Perspective::Free => "Free View",
            Perspective::Front => "Front (XY)",
            Perspective::Back => "Back",
            Perspective::Left => "Left (YZ)",
            Perspective::Right => "Right (YZ)",
            Perspective::Top => "Top (XZ)",
            Perspective::Bottom => "Bottom",
            Perspective::Isometric => "Isometric",
        }
    }

    /// All presets, in button order
    pub const ALL: [Perspective; 8] = [
        Perspective::Free,
        Perspective::Front,
        Perspective::Back,
        Perspective::Left,
        Perspective::Right,
        Perspective::Top,
        Perspective::Bottom,
        Perspective::Isometric,
    ];
}

impl FromStr for Perspective {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Ok(Perspective::Free),
            "front" => Ok(Perspective::Front),
            "back" => Ok(Perspective::Back),
            "left" => Ok(Perspective::Left),
            "right" => Ok(Perspective::Right),
            "top" => Ok(Perspective::Top),
            "bottom" => Ok(Perspective::Bottom),
            "isometric" => Ok(Perspective::Isometric),
            other => Err(format!("unknown perspective '{}'", other)),
        }
    }
}

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    /// Square viewport, the shape the canvas slider produces
    pub fn square(size: f64) -> Self {
        Viewport {
            width: size,
            height: size,
        }
    }

    /// Pixel coordinates of the viewport center
    pub fn center(&self) -> Point2 {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Projects a world point onto the viewport
///
/// Runs the fixed pipeline described in the module docs: axis
/// reassignment, pitch then yaw, perspective divide, viewport mapping.
/// Non-finite inputs and divide blowups propagate into the returned
/// pixel coordinates; nothing panics and nothing is clamped here.
///
/// # Examples
///
/// ```rust
/// use axiscope::projection::{project, Camera, Viewport};
/// use axiscope::coordinates::cartesian::Point3;
///
/// // Head-on camera: one unit along +x lands PIXELS_PER_UNIT right of center
/// let camera = Camera::new(0.0, 0.0, 10.0).unwrap();
/// let screen = project(Point3::new(1.0, 0.0, 0.0), camera, Viewport::square(600.0));
/// assert_eq!((screen.x, screen.y), (350.0, 300.0));
/// ```
pub fn project(point: Point3, camera: Camera, viewport: Viewport) -> Point2 {
    // World is z-up; the camera basis is y-up with z pointing into the scene
    let world = Vector3::new(point.x, point.z, point.y);

    let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), camera.angle_x);
    let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), camera.angle_y);
    let rotated = yaw * (pitch * world);

    // Unguarded on purpose: rotated.z == -distance yields non-finite output
    let scale = camera.distance / (camera.distance + rotated.z);

    let center = viewport.center();
    Point2::new(
        center.x + rotated.x * scale * PIXELS_PER_UNIT,
        center.y - rotated.y * scale * PIXELS_PER_UNIT,
    )
}
