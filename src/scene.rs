//! Precomputed paint geometry.
//!
//! Scenes are built once from the parsed model and replayed by the window
//! loop every frame, so the displayed image never changes after startup.
//! Element order is paint order: later elements occlude earlier ones.

use crate::grid::{CellState, Grid};
use crate::mapper::CanvasMapper;
use crate::waypoint::Waypoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

/// A path line between two consecutive scaled waypoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: PixelPoint,
    pub to: PixelPoint,
}

/// Endpoint marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: PixelPoint,
    pub radius: f32,
}

/// One grid cell's rectangle plus the state that selects its fill color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub state: CellState,
}

/// Geometry for the grid visualizer: one rectangle per cell, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct GridScene {
    pub cells: Vec<CellRect>,
}

/// Geometry for the waypoint visualizer: segments in input order, then the
/// start and end dots (painted last, on top of the segments)
#[derive(Debug, Clone, PartialEq)]
pub struct PathScene {
    pub segments: Vec<Segment>,
    pub dots: Vec<Dot>,
}

pub fn build_grid_scene(grid: &Grid, mapper: &CanvasMapper) -> GridScene {
    let mut cells = Vec::with_capacity(grid.rows * grid.cols);

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let rect = mapper.cell_rect(row, col);
            cells.push(CellRect {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
                state: grid.get(row, col),
            });
        }
    }

    GridScene { cells }
}

pub fn build_path_scene(waypoints: &[Waypoint], mapper: &CanvasMapper, dot_radius: f32) -> PathScene {
    let points: Vec<PixelPoint> = waypoints
        .iter()
        .map(|&w| {
            let (x, y) = mapper.waypoint_px(w);
            PixelPoint { x, y }
        })
        .collect();

    let segments = points
        .windows(2)
        .map(|pair| Segment {
            from: pair[0],
            to: pair[1],
        })
        .collect();

    let mut dots = Vec::new();
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        dots.push(Dot { center: first, radius: dot_radius });
        dots.push(Dot { center: last, radius: dot_radius });
    }

    PathScene { segments, dots }
}
