pub mod config;
pub mod grid;
pub mod mapper;
pub mod scene;
pub mod waypoint;

pub use grid::{CellState, Grid};
pub use mapper::CanvasMapper;
pub use waypoint::Waypoint;
