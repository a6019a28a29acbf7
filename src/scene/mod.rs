//! Application state shared by the visualizer panes.
//!
//! [`Scene`] is the single source of truth a widget layer reads from and
//! writes through: the tracked 2D and 3D points, the active angle
//! domain, the camera pose, the overlay shape, and the canvas size.
//! State that carries an invariant stays behind a method. The camera
//! only moves through orbit and zoom steps that respect its pose
//! limits, the canvas size only changes through the snapping setter,
//! and the tracked points go through setters so the chain toggle can
//! keep the 2D and 3D panes in sync. Free toggles such as the angle
//! domain or the overlay shape are plain public fields.
//!
//! ```rust
//! use axiscope::scene::Scene;
//! use axiscope::coordinates::cartesian::Point2;
//!
//! let mut scene = Scene::new();
//! scene.chain_points = true;
//! scene.set_point2(Point2::new(4.0, 5.0));
//! // The 3D point follows in x and y but keeps its height
//! assert_eq!((scene.point3().x, scene.point3().y, scene.point3().z), (4.0, 5.0, 1.0));
//! ```

use crate::constants::{
    CANVAS_SIZE_STEP, DEFAULT_CANVAS_SIZE, DRAG_ORBIT_RATE, MAX_CANVAS_SIZE, MIN_CANVAS_SIZE,
    WHEEL_ZOOM_RATE,
};
use crate::coordinates::{
    AngleDomain, Cylindrical, Point2, Point3, Polar, SpatialFrame, Spherical,
};
use crate::projection::{project, Camera, Perspective, Viewport};
use crate::wireframe::{Cylinder, Sphere};
use std::str::FromStr;

/// Which panes the widget layer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ViewMode {
    /// Only the 2D pane
    #[serde(rename = "2d")]
    Planar,
    /// Only the 3D pane
    #[serde(rename = "3d")]
    Spatial,
    /// Both panes side by side
    #[serde(rename = "both")]
    Both,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Both
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "2d" => Ok(ViewMode::Planar),
            "3d" => Ok(ViewMode::Spatial),
            "both" => Ok(ViewMode::Both),
            other => Err(format!("unknown view mode '{}'", other)),
        }
    }
}

/// Reference shape drawn around the tracked 3D point
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeOverlay {
    None,
    Cylinder,
    Sphere,
}

impl Default for ShapeOverlay {
    fn default() -> Self {
        ShapeOverlay::None
    }
}

impl FromStr for ShapeOverlay {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ShapeOverlay::None),
            "cylinder" => Ok(ShapeOverlay::Cylinder),
            "sphere" => Ok(ShapeOverlay::Sphere),
            other => Err(format!("unknown shape '{}'", other)),
        }
    }
}

/// Complete visualizer state
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Which panes to draw
    pub view_mode: ViewMode,
    /// Overlay shape around the tracked 3D point
    pub shape: ShapeOverlay,
    /// Angle domain used by every angular readout
    pub angle_domain: AngleDomain,
    /// When set, edits to either tracked point update the other
    pub chain_points: bool,
    perspective: Perspective,
    point2: Point2,
    point3: Point3,
    camera: Camera,
    canvas_size: u32,
}

impl Scene {
    /// The state the visualizer opens with
    pub fn new() -> Self {
        Scene {
            view_mode: ViewMode::Both,
            shape: ShapeOverlay::None,
            angle_domain: AngleDomain::ZeroToTwoPi,
            chain_points: false,
            perspective: Perspective::Free,
            point2: Point2::new(2.0, 3.0),
            point3: Point3::new(2.0, 2.0, 1.0),
            camera: Camera::default(),
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }

    pub fn point2(&self) -> Point2 {
        self.point2
    }

    pub fn point3(&self) -> Point3 {
        self.point3
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    /// Polar readout of the tracked 2D point in the active domain
    pub fn polar(&self) -> Polar {
        Polar::from_cartesian(self.point2, self.angle_domain)
    }

    /// Cylindrical readout of the tracked 3D point in the active domain
    pub fn cylindrical(&self) -> Cylindrical {
        Cylindrical::from_cartesian(self.point3, self.angle_domain)
    }

    /// Spherical readout of the tracked 3D point in the active domain
    pub fn spherical(&self) -> Spherical {
        Spherical::from_cartesian(self.point3, self.angle_domain)
    }

    /// Moves the tracked 2D point
    ///
    /// With [`Scene::chain_points`] set, the 3D point follows in x and y
    /// and keeps its height.
    pub fn set_point2(&mut self, point: Point2) {
        self.point2 = point;
        if self.chain_points {
            self.point3.x = point.x;
            self.point3.y = point.y;
        }
    }

    /// Moves the tracked 3D point
    ///
    /// With [`Scene::chain_points`] set, the 2D point follows the x and
    /// y components.
    pub fn set_point3(&mut self, point: Point3) {
        self.point3 = point;
        if self.chain_points {
            self.point2 = Point2::new(point.x, point.y);
        }
    }

    /// Moves the tracked 2D point by its polar readout
    pub fn set_polar(&mut self, coords: Polar) {
        self.set_point2(coords.to_cartesian());
    }

    /// Moves the tracked 3D point by its cylindrical readout
    pub fn set_cylindrical(&mut self, coords: Cylindrical) {
        self.set_point3(coords.to_cartesian());
    }

    /// Moves the tracked 3D point by its spherical readout
    pub fn set_spherical(&mut self, coords: Spherical) {
        self.set_point3(coords.to_cartesian());
    }

    /// Puts both tracked points back on the unit diagonal
    pub fn reset_points(&mut self) {
        self.point2 = Point2::new(1.0, 1.0);
        self.point3 = Point3::new(1.0, 1.0, 1.0);
    }

    /// Snaps the camera to a preset pose
    pub fn set_perspective(&mut self, perspective: Perspective) {
        self.perspective = perspective;
        self.camera = perspective.camera();
    }

    /// Orbits the camera, if the free pose is active
    ///
    /// Preset poses are pinned; an orbit gesture in one is dropped.
    pub fn orbit_camera(&mut self, delta_yaw: f64, delta_pitch: f64) {
        if self.perspective == Perspective::Free {
            self.camera = self.camera.orbited(delta_yaw, delta_pitch);
        } else {
            log::debug!(
                "orbit ignored while the {} pose is pinned",
                self.perspective.label()
            );
        }
    }

    /// Zooms the camera; allowed in every pose
    pub fn zoom_camera(&mut self, delta: f64) {
        self.camera = self.camera.zoomed(delta);
    }

    /// Applies a pointer drag of `(dx, dy)` pixels as an orbit step
    ///
    /// Dragging right yaws positive, dragging down pitches negative.
    pub fn drag_orbit(&mut self, dx: f64, dy: f64) {
        self.orbit_camera(dx * DRAG_ORBIT_RATE, -dy * DRAG_ORBIT_RATE);
    }

    /// Applies a wheel delta as a zoom step
    pub fn wheel_zoom(&mut self, delta: f64) {
        self.zoom_camera(delta * WHEEL_ZOOM_RATE);
    }

    /// Resizes the canvas, snapping to the slider grid
    ///
    /// The requested size rounds to the nearest [`CANVAS_SIZE_STEP`] and
    /// clamps into `[MIN_CANVAS_SIZE, MAX_CANVAS_SIZE]`.
    pub fn set_canvas_size(&mut self, pixels: u32) {
        let snapped =
            pixels.saturating_add(CANVAS_SIZE_STEP / 2) / CANVAS_SIZE_STEP * CANVAS_SIZE_STEP;
        self.canvas_size = snapped.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        if self.canvas_size != pixels {
            log::debug!("canvas size {} snapped to {}", pixels, self.canvas_size);
        }
    }

    /// The square viewport the 3D pane renders into
    pub fn viewport(&self) -> Viewport {
        Viewport::square(self.canvas_size as f64)
    }

    /// Screen position of the tracked 3D point under the current camera
    pub fn project_point(&self) -> Point2 {
        project(self.point3, self.camera, self.viewport())
    }

    /// Sample vertices of the active overlay shape, world coordinates
    pub fn overlay_points(&self) -> Vec<Point3> {
        match self.shape {
            ShapeOverlay::None => Vec::new(),
            ShapeOverlay::Cylinder => Cylinder::through(self.point3).points(),
            ShapeOverlay::Sphere => Sphere::through(self.point3).points(),
        }
    }

    /// Index pairs into [`Scene::overlay_points`] for the active shape
    pub fn overlay_edges(&self) -> Vec<(usize, usize)> {
        match self.shape {
            ShapeOverlay::None => Vec::new(),
            ShapeOverlay::Cylinder => Cylinder::through(self.point3).edges(),
            ShapeOverlay::Sphere => Sphere::through(self.point3).edges(),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}
