//! Wireframe sampling for the overlay shapes.
//!
//! The visualizer draws a cylinder or sphere around the tracked point as
//! a set of sample vertices plus index pairs into that set. Sampling and
//! connectivity are split so the caller can project the points once and
//! then draw every edge from the projected buffer.
//!
//! Both shapes close their rings by sampling the seam angle twice: index
//! `0` and index `segments` land on the same position, which keeps the
//! edge list free of modular wraparound.

use crate::constants::{DEFAULT_CYLINDER_SEGMENTS, DEFAULT_SPHERE_SEGMENTS, TAU};
use crate::coordinates::cartesian::Point3;
use std::f64::consts::{FRAC_PI_2, PI};

/// Upright cylinder, sampled as two rings of `segments + 1` vertices
///
/// The axis runs parallel to world z. Vertices interleave top and bottom:
/// even indices walk the top ring, odd indices the bottom ring, so the
/// wall edge at step `i` is simply `(2i, 2i + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cylinder {
    /// Ring radius, in world units
    pub radius: f64,
    /// Axial extent, in world units
    pub height: f64,
    /// Angular steps per ring
    pub segments: usize,
    /// Height of the bottom ring
    pub base_z: f64,
}

impl Cylinder {
    /// Cylinder standing on the xy-plane
    pub fn new(radius: f64, height: f64) -> Self {
        Cylinder {
            radius,
            height,
            segments: DEFAULT_CYLINDER_SEGMENTS,
            base_z: 0.0,
        }
    }

    /// The cylinder whose wall passes through `point`
    ///
    /// The radius comes from the point's distance to the z-axis and the
    /// shape spans from the xy-plane to the point's height. Points below
    /// the plane grow the cylinder downward instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axiscope::wireframe::Cylinder;
    /// use axiscope::coordinates::cartesian::Point3;
    ///
    /// let shape = Cylinder::through(Point3::new(2.0, 2.0, 1.0));
    /// assert!((shape.radius - 8f64.sqrt()).abs() < 1e-12);
    /// assert_eq!((shape.height, shape.base_z), (1.0, 0.0));
    /// ```
    pub fn through(point: Point3) -> Self {
        Cylinder {
            radius: point.xy_radius(),
            height: point.z.abs(),
            segments: DEFAULT_CYLINDER_SEGMENTS,
            base_z: point.z.min(0.0),
        }
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_base_z(mut self, base_z: f64) -> Self {
        self.base_z = base_z;
        self
    }

    /// Samples both rings, seam vertex repeated, top before bottom
    pub fn points(&self) -> Vec<Point3> {
        let mut points = Vec::with_capacity(2 * (self.segments + 1));
        for i in 0..=self.segments {
            let angle = i as f64 / self.segments as f64 * TAU;
            let (sin, cos) = angle.sin_cos();
            let x = cos * self.radius;
            let y = sin * self.radius;
            points.push(Point3::new(x, y, self.base_z + self.height));
            points.push(Point3::new(x, y, self.base_z));
        }
        points
    }

    /// Index pairs into [`Cylinder::points`]: top arc, bottom arc, wall
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let count = 2 * (self.segments + 1);
        let mut edges = Vec::with_capacity(3 * self.segments);
        for i in (0..count - 2).step_by(2) {
            edges.push((i, i + 2));
            edges.push((i + 1, i + 3));
            edges.push((i, i + 1));
        }
        edges
    }
}

/// Sphere centered on the origin, sampled on a latitude/longitude grid
///
/// Rows run south pole to north pole, `segments + 1` rows of
/// `segments + 1` vertices each. Row 0 collapses onto the south pole and
/// the last row onto the north pole; the middle row is the equator when
/// `segments` is even.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sphere {
    /// Radius, in world units
    pub radius: f64,
    /// Grid steps along both latitude and longitude
    pub segments: usize,
}

impl Sphere {
    pub fn new(radius: f64) -> Self {
        Sphere {
            radius,
            segments: DEFAULT_SPHERE_SEGMENTS,
        }
    }

    /// The sphere whose surface passes through `point`
    pub fn through(point: Point3) -> Self {
        Sphere {
            radius: point.magnitude(),
            segments: DEFAULT_SPHERE_SEGMENTS,
        }
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Samples the grid row-major, south pole first
    pub fn points(&self) -> Vec<Point3> {
        let mut points = Vec::with_capacity((self.segments + 1) * (self.segments + 1));
        for i in 0..=self.segments {
            let lat = i as f64 / self.segments as f64 * PI - FRAC_PI_2;
            let (sin_lat, cos_lat) = lat.sin_cos();
            for j in 0..=self.segments {
                let lon = j as f64 / self.segments as f64 * TAU;
                let (sin_lon, cos_lon) = lon.sin_cos();
                points.push(Point3::new(
                    cos_lon * cos_lat * self.radius,
                    sin_lon * cos_lat * self.radius,
                    sin_lat * self.radius,
                ));
            }
        }
        points
    }

    /// Flat index of the grid vertex at `(row, col)`
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * (self.segments + 1) + col
    }

    /// Index pairs into [`Sphere::points`]: parallels first, then meridians
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(2 * self.segments * (self.segments + 1));
        for i in 0..=self.segments {
            for j in 0..self.segments {
                edges.push((self.index(i, j), self.index(i, j + 1)));
            }
        }
        for i in 0..self.segments {
            for j in 0..=self.segments {
                edges.push((self.index(i, j), self.index(i + 1, j)));
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(32)]
    #[case(16)]
    #[case(3)]
    #[case(1)]
    fn test_cylinder_sample_counts(#[case] segments: usize) {
        let shape = Cylinder::new(1.0, 2.0).with_segments(segments);
        assert_eq!(shape.points().len(), 2 * (segments + 1));
        assert_eq!(shape.edges().len(), 3 * segments);
    }

    #[test]
    fn test_cylinder_interleaves_top_and_bottom() {
        let shape = Cylinder::new(2.0, 3.0).with_segments(8).with_base_z(-1.0);
        let points = shape.points();

        for pair in points.chunks(2) {
            // Top vertex precedes its bottom twin at the same angle
            assert_eq!(pair[0].z, 2.0);
            assert_eq!(pair[1].z, -1.0);
            assert_eq!(pair[0].x, pair[1].x);
            assert_eq!(pair[0].y, pair[1].y);
            assert_relative_eq!(pair[0].xy_radius(), 2.0, epsilon = 1e-12);
        }

        // The seam is sampled twice so the ring closes without wrapping
        let first_top = points[0];
        let last_top = points[points.len() - 2];
        assert!((first_top - last_top).magnitude() < 1e-12);
        assert_eq!(first_top.x, 2.0);
    }

    #[test]
    fn test_cylinder_edges_reference_valid_points() {
        let shape = Cylinder::new(1.0, 1.0).with_segments(5);
        let count = shape.points().len();
        let edges = shape.edges();

        assert_eq!(edges.len(), 15);
        for (a, b) in &edges {
            assert!(*a < count && *b < count);
        }
        // First step: top arc, bottom arc, wall
        assert_eq!(edges[0], (0, 2));
        assert_eq!(edges[1], (1, 3));
        assert_eq!(edges[2], (0, 1));
        assert_eq!(edges[14], (8, 9));
    }

    #[test]
    fn test_cylinder_through_tracked_point() {
        let above = Cylinder::through(Point3::new(2.0, 2.0, 1.0));
        assert_relative_eq!(above.radius, 8f64.sqrt(), epsilon = 1e-12);
        assert_eq!(above.height, 1.0);
        assert_eq!(above.base_z, 0.0);
        assert_eq!(above.segments, DEFAULT_CYLINDER_SEGMENTS);

        // Below the plane the shape hangs downward
        let below = Cylinder::through(Point3::new(1.0, 1.0, -2.0));
        assert_eq!(below.height, 2.0);
        assert_eq!(below.base_z, -2.0);

        // The wall really does pass through the point
        let wall = above
            .points()
            .iter()
            .map(|p| (p.xy_radius() - above.radius).abs())
            .fold(f64::INFINITY, f64::min);
        assert!(wall < 1e-12);
    }

    #[rstest]
    #[case(16)]
    #[case(8)]
    #[case(2)]
    #[case(1)]
    fn test_sphere_sample_counts(#[case] segments: usize) {
        let shape = Sphere::new(1.0).with_segments(segments);
        assert_eq!(shape.points().len(), (segments + 1) * (segments + 1));
        assert_eq!(shape.edges().len(), 2 * segments * (segments + 1));
    }

    #[test]
    fn test_sphere_grid_layout() {
        let shape = Sphere::new(3.0).with_segments(16);
        let points = shape.points();

        // Row 0 collapses onto the south pole, the last row onto the north
        for j in 0..=16 {
            let south = points[shape.index(0, j)];
            assert_relative_eq!(south.z, -3.0, epsilon = 1e-12);
            assert_relative_eq!(south.xy_radius(), 0.0, epsilon = 1e-12);
            let north = points[shape.index(16, j)];
            assert_relative_eq!(north.z, 3.0, epsilon = 1e-12);
        }

        // The middle row is the equator
        for j in 0..=16 {
            let eq = points[shape.index(8, j)];
            assert_relative_eq!(eq.z, 0.0, epsilon = 1e-12);
            assert_relative_eq!(eq.xy_radius(), 3.0, epsilon = 1e-12);
        }

        // Every vertex sits on the surface
        for p in &points {
            assert_relative_eq!(p.magnitude(), 3.0, epsilon = 1e-12);
        }

        // Each row closes its seam
        for i in 0..=16 {
            let first = points[shape.index(i, 0)];
            let last = points[shape.index(i, 16)];
            assert!((first - last).magnitude() < 1e-12);
        }
    }

    #[test]
    fn test_sphere_edges_reference_valid_points() {
        let shape = Sphere::new(1.0).with_segments(4);
        let count = shape.points().len();
        let edges = shape.edges();

        assert_eq!(edges.len(), 40);
        for (a, b) in &edges {
            assert!(*a < count && *b < count);
        }
        // Parallels come first, then meridians
        assert_eq!(edges[0], (0, 1));
        assert_eq!(edges[20], (0, 5));
        assert_eq!(edges[39], (shape.index(3, 4), shape.index(4, 4)));
    }

    #[test]
    fn test_sphere_through_tracked_point() {
        let shape = Sphere::through(Point3::new(2.0, 2.0, 1.0));
        assert_eq!(shape.radius, 3.0);
        assert_eq!(shape.segments, DEFAULT_SPHERE_SEGMENTS);

        let worst = shape
            .points()
            .iter()
            .map(|p| (p.magnitude() - 3.0).abs())
            .fold(0.0, f64::max);
        assert!(worst < 1e-12);
    }

    #[test]
    fn test_zero_segments_degenerate_but_total() {
        // 0 / 0 sampling yields NaN coordinates, never a panic
        let cylinder = Cylinder::new(1.0, 1.0).with_segments(0);
        assert_eq!(cylinder.points().len(), 2);
        assert!(cylinder.points()[0].x.is_nan());
        assert!(cylinder.edges().is_empty());

        let sphere = Sphere::new(1.0).with_segments(0);
        assert_eq!(sphere.points().len(), 1);
        assert!(sphere.points()[0].z.is_nan());
        assert!(sphere.edges().is_empty());
    }
}
