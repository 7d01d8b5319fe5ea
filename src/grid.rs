use std::fs;
use std::path::Path;

/// Semantic classification of a grid cell.
///
/// Grid files encode cells as digits: 0=obstacle, 1=free. Path cells never
/// appear in a grid file; they are produced by applying an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Obstacle,
    Free,
    Path,
}

impl CellState {
    /// Decode a cell from its grid-file digit (0 or 1)
    pub fn from_digit(d: u32) -> Result<CellState, Box<dyn std::error::Error>> {
        match d {
            0 => Ok(CellState::Obstacle),
            1 => Ok(CellState::Free),
            other => Err(format!("invalid cell digit {} (expected 0 or 1)", other).into()),
        }
    }
}

/// Grid of cell states, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with all cells free
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![CellState::Free; rows * cols],
        }
    }

    /// Get cell state at (row, col); panics if out of range
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[row * self.cols + col]
    }

    /// Set cell state at (row, col); panics if out of range
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row * self.cols + col] = state;
    }

    /// Parse a grid from file contents.
    ///
    /// Format:
    /// - line 1: integer `dim`
    /// - next `dim` lines: `dim` whitespace-separated digit tokens,
    ///   `0` = obstacle, `1` = free
    pub fn from_text(text: &str) -> Result<Grid, Box<dyn std::error::Error>> {
        let mut lines = text.lines();

        let dim_line = lines.next().ok_or("grid file is empty")?;
        let dim: usize = dim_line
            .trim()
            .parse()
            .map_err(|_| format!("invalid grid dimension line: {:?}", dim_line))?;
        if dim == 0 {
            return Err("grid dimension must be at least 1".into());
        }

        let mut grid = Grid::new(dim, dim);

        for row in 0..dim {
            let line = lines
                .next()
                .ok_or_else(|| format!("grid file ended early: expected {} rows, got {}", dim, row))?;

            let mut count = 0;
            for (col, token) in line.split_whitespace().enumerate() {
                if col >= dim {
                    return Err(format!("row {} has more than {} cells", row, dim).into());
                }
                // numeric value of the token's first character
                let digit = token
                    .chars()
                    .next()
                    .and_then(|c| c.to_digit(10))
                    .ok_or_else(|| format!("row {}: non-numeric cell token {:?}", row, token))?;
                grid.set(row, col, CellState::from_digit(digit)?);
                count += 1;
            }
            if count != dim {
                return Err(format!("row {} has {} cells, expected {}", row, count, dim).into());
            }
        }

        Ok(grid)
    }

    /// Load a grid from a file
    pub fn load(path: &Path) -> Result<Grid, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        Grid::from_text(&contents)
    }

    /// Mark the given (row, col) cells as path cells.
    ///
    /// Every coordinate must be in range; an out-of-range coordinate is an
    /// error and leaves the grid unchanged.
    pub fn apply_overlay(&mut self, path: &[(usize, usize)]) -> Result<(), Box<dyn std::error::Error>> {
        for &(row, col) in path {
            if row >= self.rows || col >= self.cols {
                return Err(format!(
                    "path point ({}, {}) out of bounds for {}x{} grid",
                    row, col, self.rows, self.cols
                )
                .into());
            }
        }
        for &(row, col) in path {
            self.set(row, col, CellState::Path);
        }
        Ok(())
    }

    /// Render the grid as text, one character per cell
    pub fn to_ascii(&self) -> String {
        let mut result = String::new();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = match self.get(row, col) {
                    CellState::Obstacle => '■',
                    CellState::Free => '□',
                    CellState::Path => 'o',
                };
                result.push(symbol);
            }
            result.push('\n');
        }

        result
    }
}
