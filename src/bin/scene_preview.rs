//! Scene preview tool
//!
//! Renders the visualizer state as an ASCII snapshot: the world axes, the
//! optional overlay shape, and the tracked points, drawn onto a character
//! grid with the coordinate readouts printed underneath.
//!
//! Usage:
//!   cargo run --bin scene_preview -- --shape sphere --perspective isometric

use clap::{ArgAction, Parser};

use axiscope::constants::{AXIS_LENGTH, PIXELS_PER_UNIT, RAD2DEG};
use axiscope::coordinates::{Point2, Point3};
use axiscope::projection::project;
use axiscope::scene::{Scene, ViewMode};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const SEPARATOR: &str = "-------------------------------------------------------";

/// Scene preview tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Renders an axiscope scene as an ASCII snapshot",
    long_about = None
)]
struct Args {
    /// Tracked 3D point as "x,y,z"
    #[arg(long, default_value = "2,2,1")]
    point3: String,

    /// Tracked 2D point as "x,y"
    #[arg(long, default_value = "2,3")]
    point2: String,

    /// Overlay shape: none, cylinder, or sphere
    #[arg(long, default_value = "none")]
    shape: String,

    /// Camera preset: free, front, back, left, right, top, bottom, isometric
    #[arg(long, default_value = "free")]
    perspective: String,

    /// Angle domain: 0-360 or -180-180
    #[arg(long, default_value = "0-360")]
    domain: String,

    /// Panes to draw: 2d, 3d, or both
    #[arg(long, default_value = "both")]
    view: String,

    /// Canvas size in pixels, snapped to the slider grid
    #[arg(long, default_value_t = 600)]
    canvas: u32,

    /// Character columns of the ASCII grid
    #[arg(long, default_value_t = 65)]
    columns: usize,

    /// Keep the tracked 2D and 3D points chained
    #[arg(long, action = ArgAction::SetTrue)]
    chain: bool,
}

/// Parse a comma-separated list of coordinates
fn parse_components(raw: &str, count: usize, flag: &str) -> Result<Vec<f64>> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != count {
        return Err(format!("{} expects {} comma-separated values", flag, count).into());
    }
    let mut values = Vec::with_capacity(count);
    for part in parts {
        values.push(
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("{}: '{}' is not a number", flag, part))?,
        );
    }
    Ok(values)
}

/// Higher-ranked glyphs may overwrite lower-ranked ones
fn rank(glyph: char) -> u8 {
    match glyph {
        '@' => 3,
        'X' | 'Y' | 'Z' | '+' => 2,
        '·' => 1,
        _ => 0,
    }
}

/// Character grid standing in for the canvas
struct Grid {
    cells: Vec<Vec<char>>,
    columns: usize,
    rows: usize,
    pixels: f64,
}

impl Grid {
    fn new(columns: usize, pixels: f64) -> Self {
        let rows = columns / 2;
        Grid {
            cells: vec![vec![' '; columns]; rows],
            columns,
            rows,
            pixels,
        }
    }

    /// The cell under a screen position, if it lands on the canvas
    ///
    /// Off-canvas and non-finite positions plot nowhere, so singular
    /// projection output degrades to a blank instead of a panic.
    fn cell(&self, screen: Point2) -> Option<(usize, usize)> {
        if !screen.x.is_finite() || !screen.y.is_finite() {
            return None;
        }
        let col = (screen.x / self.pixels * (self.columns - 1) as f64).round();
        let row = (screen.y / self.pixels * (self.rows - 1) as f64).round();
        if col < 0.0 || row < 0.0 || col >= self.columns as f64 || row >= self.rows as f64 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    fn plot(&mut self, screen: Point2, glyph: char) {
        if let Some((row, col)) = self.cell(screen) {
            let cell = &mut self.cells[row][col];
            if *cell == ' ' || rank(glyph) > rank(*cell) {
                *cell = glyph;
            }
        }
    }

    fn print(&self) {
        for row in &self.cells {
            println!("{}", row.iter().collect::<String>());
        }
    }
}

/// Draw the 3D pane through the scene camera
fn render_spatial(scene: &Scene, columns: usize) {
    let mut grid = Grid::new(columns, scene.canvas_size() as f64);
    let camera = scene.camera();
    let viewport = scene.viewport();

    // Overlay shape first so the axis end markers and the tracked
    // point draw on top; the axis body dots lose to overlay samples
    for point in scene.overlay_points() {
        grid.plot(project(point, camera, viewport), '·');
    }

    let axes = [
        (Point3::new(AXIS_LENGTH, 0.0, 0.0), 'X'),
        (Point3::new(0.0, AXIS_LENGTH, 0.0), 'Y'),
        (Point3::new(0.0, 0.0, AXIS_LENGTH), 'Z'),
    ];
    let steps = 40;
    for (end, glyph) in axes {
        for i in 0..=steps {
            let t = i as f64 / steps as f64 * 2.0 - 1.0;
            grid.plot(project(end * t, camera, viewport), '.');
        }
        grid.plot(project(end, camera, viewport), glyph);
    }
    grid.plot(project(Point3::new(0.0, 0.0, 0.0), camera, viewport), '+');
    grid.plot(scene.project_point(), '@');

    grid.print();
}

/// Screen position of a 2D world point on the planar pane
fn planar_screen(point: Point2, pixels: f64) -> Point2 {
    Point2::new(
        pixels / 2.0 + point.x * PIXELS_PER_UNIT,
        pixels / 2.0 - point.y * PIXELS_PER_UNIT,
    )
}

/// Draw the 2D pane, no camera involved
fn render_planar(scene: &Scene, columns: usize) {
    let pixels = scene.canvas_size() as f64;
    let mut grid = Grid::new(columns, pixels);

    let axes = [
        (Point2::new(AXIS_LENGTH, 0.0), 'X'),
        (Point2::new(0.0, AXIS_LENGTH), 'Y'),
    ];
    let steps = 40;
    for (end, glyph) in axes {
        for i in 0..=steps {
            let t = i as f64 / steps as f64 * 2.0 - 1.0;
            grid.plot(planar_screen(end * t, pixels), '.');
        }
        grid.plot(planar_screen(end, pixels), glyph);
    }
    grid.plot(planar_screen(Point2::new(0.0, 0.0), pixels), '+');
    grid.plot(planar_screen(scene.point2(), pixels), '@');

    grid.print();
}

fn angle_text(radians: f64) -> String {
    format!("{:.1}° ({:.3} rad)", radians * RAD2DEG, radians)
}

fn print_readouts(scene: &Scene, spatial: bool, planar: bool) {
    println!("Readouts ({})", scene.angle_domain);
    println!("{}", SEPARATOR);
    if planar {
        let point = scene.point2();
        let polar = scene.polar();
        println!("Point (2D): ({:.3}, {:.3})", point.x, point.y);
        println!(
            "  Polar:       r = {:.3}, θ = {}",
            polar.r,
            angle_text(polar.theta)
        );
    }
    if spatial {
        let point = scene.point3();
        let cylindrical = scene.cylindrical();
        let spherical = scene.spherical();
        println!(
            "Point (3D): ({:.3}, {:.3}, {:.3})",
            point.x, point.y, point.z
        );
        println!(
            "  Cylindrical: r = {:.3}, θ = {}, height = {:.3}",
            cylindrical.r,
            angle_text(cylindrical.theta),
            cylindrical.height
        );
        println!(
            "  Spherical:   ρ = {:.3}, θ = {}, φ = {}",
            spherical.rho,
            angle_text(spherical.theta),
            angle_text(spherical.phi)
        );
        let camera = scene.camera();
        println!(
            "Camera: pitch {:.2} rad, yaw {:.2} rad, distance {:.1}",
            camera.angle_x, camera.angle_y, camera.distance
        );
        let screen = scene.project_point();
        println!("Projected point: ({:.1}, {:.1})", screen.x, screen.y);
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if args.columns < 17 {
        return Err("--columns must be at least 17".into());
    }

    let p3 = parse_components(&args.point3, 3, "--point3")?;
    let p2 = parse_components(&args.point2, 2, "--point2")?;

    let mut scene = Scene::new();
    scene.view_mode = args.view.parse()?;
    scene.shape = args.shape.parse()?;
    scene.angle_domain = args.domain.parse()?;
    scene.chain_points = args.chain;
    scene.set_perspective(args.perspective.parse()?);
    scene.set_canvas_size(args.canvas);
    scene.set_point2(Point2::new(p2[0], p2[1]));
    scene.set_point3(Point3::new(p3[0], p3[1], p3[2]));

    let spatial = scene.view_mode != ViewMode::Planar;
    let planar = scene.view_mode != ViewMode::Spatial;

    if spatial {
        println!(
            "3D pane ({} px canvas, {})",
            scene.canvas_size(),
            scene.perspective().label()
        );
        println!("{}", SEPARATOR);
        render_spatial(&scene, args.columns);
        println!();
    }
    if planar {
        println!("2D pane");
        println!("{}", SEPARATOR);
        render_planar(&scene, args.columns);
        println!();
    }

    print_readouts(&scene, spatial, planar);

    Ok(())
}
