use crate::waypoint::Waypoint;

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPx {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Maps logical grid coordinates to canvas pixels.
///
/// The drawable area is the canvas inset by a fixed margin on every side;
/// each axis is scaled linearly so the full logical range fills it. Column
/// index drives the x axis, row index the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapper {
    margin: f32,
    span_x: f32,
    span_y: f32,
    rows: usize,
    cols: usize,
}

impl CanvasMapper {
    pub fn new(width: f32, height: f32, margin: f32, rows: usize, cols: usize) -> Self {
        CanvasMapper {
            margin,
            span_x: width - 2.0 * margin,
            span_y: height - 2.0 * margin,
            rows,
            cols,
        }
    }

    /// Pixel x of the left edge of column `col` (`col == cols` gives the
    /// right edge of the last column)
    pub fn corner_x(&self, col: usize) -> f32 {
        self.margin + self.span_x * col as f32 / self.cols as f32
    }

    /// Pixel y of the top edge of row `row`
    pub fn corner_y(&self, row: usize) -> f32 {
        self.margin + self.span_y * row as f32 / self.rows as f32
    }

    /// Pixel rectangle covered by cell (row, col)
    pub fn cell_rect(&self, row: usize, col: usize) -> RectPx {
        let x = self.corner_x(col);
        let y = self.corner_y(row);
        RectPx {
            x,
            y,
            w: self.corner_x(col + 1) - x,
            h: self.corner_y(row + 1) - y,
        }
    }

    /// Pixel position of a waypoint
    pub fn waypoint_px(&self, point: Waypoint) -> (f32, f32) {
        (self.corner_x(point.col), self.corner_y(point.row))
    }
}
