//! Constants shared by the geometry kernel and its frontends

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Projection
/// Screen pixels per world unit at scale factor 1.0
pub const PIXELS_PER_UNIT: f64 = 50.0;

// Camera
/// Closest the camera may sit to the origin, in world units
pub const MIN_CAMERA_DISTANCE: f64 = 5.0;
/// Farthest the camera may sit from the origin, in world units
pub const MAX_CAMERA_DISTANCE: f64 = 30.0;
/// Camera distance used by most view presets
pub const DEFAULT_CAMERA_DISTANCE: f64 = 10.0;
/// Pitch limit so the camera never flips over the poles
pub const MAX_PITCH: f64 = PI / 2.0;
/// Yaw radians applied per pixel of horizontal pointer drag
pub const DRAG_ORBIT_RATE: f64 = 0.01;
/// Distance units applied per unit of wheel scroll
pub const WHEEL_ZOOM_RATE: f64 = 0.01;

// Viewport
/// Smallest selectable square canvas edge, in pixels
pub const MIN_CANVAS_SIZE: u32 = 300;
/// Largest selectable square canvas edge, in pixels
pub const MAX_CANVAS_SIZE: u32 = 1200;
/// Canvas size slider step, in pixels
pub const CANVAS_SIZE_STEP: u32 = 50;
/// Canvas edge used when nothing else is configured
pub const DEFAULT_CANVAS_SIZE: u32 = 600;

// Scene geometry
/// Half extent of the reference grid and the axis lines, in world units
pub const AXIS_LENGTH: f64 = 5.0;

// Wireframe sampling
/// Rim subdivisions used for cylinder overlays
pub const DEFAULT_CYLINDER_SEGMENTS: usize = 32;
/// Latitude/longitude subdivisions used for sphere overlays
pub const DEFAULT_SPHERE_SEGMENTS: usize = 16;
