/// Waypoint-path visualizer
///
/// Draws the path output of an A* run as connected line segments, with dots
/// marking the start and end waypoints.

use astarviz::config::Config;
use astarviz::scene::{build_path_scene, PathScene};
use astarviz::waypoint::{load_waypoints, Waypoint};
use astarviz::CanvasMapper;
use macroquad::prelude::*;
use std::path::Path;
use std::process;

struct Args {
    path_file: String,
    width: f32,
    height: f32,
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        return Err("missing required arguments".into());
    }

    Ok(Args {
        path_file: args[1].clone(),
        width: args[2].parse::<f32>()?,
        height: args[3].parse::<f32>()?,
    })
}

fn usage() {
    eprintln!("usage: graph_path <path_file> <canvas_width> <canvas_height>");
    eprintln!("Visualizes the path output of an execution of A*");
}

/// Logical extent of the path: one past the largest row and column seen
fn path_extent(waypoints: &[Waypoint]) -> (usize, usize) {
    let rows = waypoints.iter().map(|w| w.row).max().unwrap_or(0) + 1;
    let cols = waypoints.iter().map(|w| w.col).max().unwrap_or(0) + 1;
    (rows, cols)
}

fn draw_scene(scene: &PathScene, config: &Config) {
    let colors = &config.colors;
    clear_background(Color::from_rgba(
        colors.background.r,
        colors.background.g,
        colors.background.b,
        255,
    ));

    // segments first, endpoint dots last so they sit on top
    let line = Color::from_rgba(colors.path_line.r, colors.path_line.g, colors.path_line.b, 255);
    for segment in &scene.segments {
        draw_line(
            segment.from.x,
            segment.from.y,
            segment.to.x,
            segment.to.y,
            config.style.stroke_width,
            line,
        );
    }

    let dot = Color::from_rgba(
        colors.endpoint_dot.r,
        colors.endpoint_dot.g,
        colors.endpoint_dot.b,
        255,
    );
    for marker in &scene.dots {
        draw_circle(marker.center.x, marker.center.y, marker.radius, dot);
    }
}

#[macroquad::main("A* Path Visualization")]
async fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            usage();
            process::exit(1);
        }
    };

    let config = Config::load();

    let waypoints = match load_waypoints(Path::new(&args.path_file)) {
        Ok(waypoints) => waypoints,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    println!("Loaded {} waypoints from {}", waypoints.len(), args.path_file);

    let (rows, cols) = path_extent(&waypoints);
    let mapper = CanvasMapper::new(args.width, args.height, config.canvas.margin, rows, cols);
    let scene = build_path_scene(&waypoints, &mapper, config.style.dot_radius);

    request_new_screen_size(args.width, args.height);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        draw_scene(&scene, &config);

        next_frame().await
    }
}
