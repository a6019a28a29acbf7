//! Command-line coordinate conversion table
//!
//! Takes a point in any supported frame and prints its readout in every
//! frame the visualizer shows, using the selected angle domain. Angles are
//! entered in degrees and printed in both degrees and radians.

use std::env;

use axiscope::constants::{DEG2RAD, RAD2DEG};
use axiscope::coordinates::{
    AngleDomain, Cylindrical, Point2, Point3, Polar, SpatialFrame, Spherical,
};

enum Input {
    Planar(Point2),
    Spatial(Point3),
}

/// Pull `count` numeric values following a flag
fn take_values(
    args: &[String],
    after: usize,
    count: usize,
    flag: &str,
) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    if after + count > args.len() {
        return Err(format!("{} expects {} numeric values", flag, count).into());
    }
    let mut values = Vec::with_capacity(count);
    for raw in &args[after..after + count] {
        values.push(
            raw.parse::<f64>()
                .map_err(|_| format!("{} expects numbers, got '{}'", flag, raw))?,
        );
    }
    Ok(values)
}

fn angle_line(label: &str, radians: f64) {
    println!("  {} = {:.1}° ({:.3} rad)", label, radians * RAD2DEG, radians);
}

fn print_planar(point: Point2, domain: AngleDomain) {
    println!("Cartesian (x, y)");
    println!("----------------");
    println!("  x = {:.3}", point.x);
    println!("  y = {:.3}", point.y);
    println!();

    let polar = Polar::from_cartesian(point, domain);
    println!("Polar (r, θ)");
    println!("------------");
    println!("  r = {:.3}", polar.r);
    angle_line("θ", polar.theta);
    println!();
}

fn print_spatial(point: Point3, domain: AngleDomain) {
    println!("Cartesian (x, y, z)");
    println!("-------------------");
    println!("  x = {:.3}", point.x);
    println!("  y = {:.3}", point.y);
    println!("  z = {:.3}", point.z);
    println!();

    let cylindrical = Cylindrical::from_cartesian(point, domain);
    println!("Cylindrical (r, θ, height)");
    println!("--------------------------");
    println!("  r = {:.3}", cylindrical.r);
    angle_line("θ", cylindrical.theta);
    println!("  height = {:.3}", cylindrical.height);
    println!();

    let spherical = Spherical::from_cartesian(point, domain);
    println!("Spherical (ρ, θ, φ)");
    println!("-------------------");
    println!("  ρ = {:.3}", spherical.rho);
    angle_line("θ", spherical.theta);
    angle_line("φ", spherical.phi);
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    // Default values
    let mut domain = AngleDomain::ZeroToTwoPi;
    let mut input = None;
    let mut positional: Vec<f64> = Vec::new();

    // Parse command-line arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--domain" | "-d" => {
                if i + 1 < args.len() {
                    domain = args[i + 1].parse()?;
                    i += 2;
                } else {
                    return Err("Missing value for --domain".into());
                }
            }
            "--polar" | "-p" => {
                let values = take_values(&args, i + 1, 2, "--polar")?;
                input = Some(Input::Planar(
                    Polar::new(values[0], values[1] * DEG2RAD).to_cartesian(),
                ));
                i += 3;
            }
            "--cylindrical" | "-c" => {
                let values = take_values(&args, i + 1, 3, "--cylindrical")?;
                input = Some(Input::Spatial(
                    Cylindrical::new(values[0], values[1] * DEG2RAD, values[2]).to_cartesian(),
                ));
                i += 4;
            }
            "--spherical" | "-s" => {
                let values = take_values(&args, i + 1, 3, "--spherical")?;
                input = Some(Input::Spatial(
                    Spherical::new(values[0], values[1] * DEG2RAD, values[2] * DEG2RAD)
                        .to_cartesian(),
                ));
                i += 4;
            }
            "--help" | "-h" => {
                println!("Coordinate Converter");
                println!("====================");
                println!("Usage: cargo run --bin coord_convert -- [OPTIONS] [x y [z]]");
                println!();
                println!("Options:");
                println!("  -d, --domain DOMAIN        Angle domain: 0-360 or -180-180 (default: 0-360)");
                println!("  -p, --polar R THETA        Input as polar, theta in degrees");
                println!("  -c, --cylindrical R THETA HEIGHT");
                println!("                             Input as cylindrical, theta in degrees");
                println!("  -s, --spherical RHO THETA PHI");
                println!("                             Input as spherical, angles in degrees");
                println!("  -h, --help                 Show this help message");
                println!();
                println!("With two positional values the point is planar, with three spatial.");
                return Ok(());
            }
            value => match value.parse::<f64>() {
                Ok(number) => {
                    positional.push(number);
                    i += 1;
                }
                Err(_) => {
                    eprintln!("Unknown argument: {}", value);
                    i += 1;
                }
            },
        }
    }

    if input.is_some() && !positional.is_empty() {
        return Err("Give either positional coordinates or one readout flag, not both".into());
    }

    let input = match input {
        Some(input) => input,
        None => match positional.len() {
            0 => Input::Spatial(Point3::new(2.0, 2.0, 1.0)),
            2 => Input::Planar(Point2::new(positional[0], positional[1])),
            3 => Input::Spatial(Point3::new(positional[0], positional[1], positional[2])),
            other => {
                return Err(format!("Expected 2 or 3 coordinates, got {}", other).into());
            }
        },
    };

    println!("Coordinate Converter");
    println!("====================");
    println!("Angle domain: {}", domain);
    println!();

    match input {
        Input::Planar(point) => print_planar(point, domain),
        Input::Spatial(point) => print_spatial(point, domain),
    }

    Ok(())
}
