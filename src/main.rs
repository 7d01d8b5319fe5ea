use arboard::Clipboard;
use astarviz::config::Config;
use astarviz::scene::{build_grid_scene, GridScene};
use astarviz::{CanvasMapper, CellState, Grid};
use macroquad::prelude::*;
use std::path::Path;
use std::process;

const DEFAULT_WIDTH: f32 = 1000.0;
const DEFAULT_HEIGHT: f32 = 1000.0;

struct Args {
    grid_file: String,
    path_file: String,
    width: f32,
    height: f32,
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        return Err("missing required arguments".into());
    }

    let (width, height) = match args.len() {
        3 => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        5 => (args[3].parse::<f32>()?, args[4].parse::<f32>()?),
        _ => return Err("canvas width and height must be given together".into()),
    };

    Ok(Args {
        grid_file: args[1].clone(),
        path_file: args[2].clone(),
        width,
        height,
    })
}

fn usage() {
    eprintln!("usage: astarviz <grid_file> <path_file> [canvas_width canvas_height]");
    eprintln!("Visualizes an A* input grid with the computed path overlaid");
    eprintln!("Default canvas size is {}x{}", DEFAULT_WIDTH, DEFAULT_HEIGHT);
}

/// Load the grid and apply the path overlay. Any I/O, parse, or bounds
/// error aborts the run before anything is drawn.
fn load_model(grid_file: &str, path_file: &str) -> Result<Grid, Box<dyn std::error::Error>> {
    let mut grid = Grid::load(Path::new(grid_file))?;
    let overlay = astarviz::waypoint::load_overlay(Path::new(path_file))?;
    grid.apply_overlay(&overlay)?;
    Ok(grid)
}

fn copy_to_clipboard(grid: &Grid) {
    let grid_string = grid.to_ascii();
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(&grid_string) {
                println!("Failed to copy to clipboard: {}", e);
            } else {
                println!("Grid layout copied to clipboard!");
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            println!("Failed to access clipboard: {}", e);
        }
    }
}

fn cell_color(state: CellState, config: &Config) -> Color {
    let rgb = match state {
        CellState::Obstacle => config.colors.obstacle,
        CellState::Free => config.colors.free,
        CellState::Path => config.colors.path_cell,
    };
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

fn draw_scene(scene: &GridScene, config: &Config) {
    let colors = &config.colors;
    clear_background(Color::from_rgba(
        colors.background.r,
        colors.background.g,
        colors.background.b,
        255,
    ));

    let outline = Color::from_rgba(colors.outline.r, colors.outline.g, colors.outline.b, 255);

    // fill then outline, cell by cell in row-major order
    for cell in &scene.cells {
        draw_rectangle(cell.x, cell.y, cell.w, cell.h, cell_color(cell.state, config));
        draw_rectangle_lines(cell.x, cell.y, cell.w, cell.h, config.style.stroke_width, outline);
    }
}

#[macroquad::main("A* Grid Visualization")]
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

    let grid = match load_model(&args.grid_file, &args.path_file) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Loaded {}x{} grid from {} with path overlay from {}",
        grid.rows, grid.cols, args.grid_file, args.path_file
    );
    println!("Controls: C = copy grid to clipboard, Esc = close window");

    // scene geometry is computed once; every frame just replays it
    let mapper = CanvasMapper::new(args.width, args.height, config.canvas.margin, grid.rows, grid.cols);
    let scene = build_grid_scene(&grid, &mapper);

    request_new_screen_size(args.width, args.height);

    loop {
        if is_key_pressed(KeyCode::C) {
            copy_to_clipboard(&grid);
        }

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        draw_scene(&scene, &config);

        next_frame().await
    }
}
