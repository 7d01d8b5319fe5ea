use std::fs;
use std::path::Path;

/// A single logical (row, col) coordinate along a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waypoint {
    pub row: usize,
    pub col: usize,
}

/// Extract a (row, col) pair from a coordinate token.
///
/// The token's decimal digit runs, in order, give row then col, so both the
/// waypoint shape `"r3c5"` and the overlay shape `"(3,5)"` parse, and
/// multi-digit coordinates like `"r12c34"` work. A token with anything
/// other than exactly two digit runs is an error.
pub fn digit_pair(token: &str) -> Result<(usize, usize), Box<dyn std::error::Error>> {
    let mut runs: Vec<usize> = Vec::new();
    let mut current: Option<usize> = None;

    for c in token.chars() {
        match c.to_digit(10) {
            Some(d) => {
                current = Some(current.unwrap_or(0) * 10 + d as usize);
            }
            None => {
                if let Some(value) = current.take() {
                    runs.push(value);
                }
            }
        }
    }
    if let Some(value) = current {
        runs.push(value);
    }

    match runs.as_slice() {
        [row, col] => Ok((*row, *col)),
        _ => Err(format!(
            "coordinate token {:?} contains {} numbers, expected 2",
            token,
            runs.len()
        )
        .into()),
    }
}

/// Parse a waypoint path from file contents.
///
/// Line 1 is metadata and is skipped; line 2 holds whitespace-separated
/// coordinate tokens. A path needs at least a start and an end.
pub fn parse_waypoints(text: &str) -> Result<Vec<Waypoint>, Box<dyn std::error::Error>> {
    let points = parse_coordinate_line(text)?;
    if points.len() < 2 {
        return Err(format!("path has {} waypoints, need at least 2", points.len()).into());
    }
    Ok(points
        .into_iter()
        .map(|(row, col)| Waypoint { row, col })
        .collect())
}

/// Load a waypoint path from a file
pub fn load_waypoints(path: &Path) -> Result<Vec<Waypoint>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_waypoints(&contents)
}

/// Parse a path overlay from file contents: same layout as a waypoint file,
/// but any number of `(row,col)` pairs is accepted (including zero).
pub fn parse_overlay(text: &str) -> Result<Vec<(usize, usize)>, Box<dyn std::error::Error>> {
    parse_coordinate_line(text)
}

/// Load a path overlay from a file
pub fn load_overlay(path: &Path) -> Result<Vec<(usize, usize)>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_overlay(&contents)
}

fn parse_coordinate_line(text: &str) -> Result<Vec<(usize, usize)>, Box<dyn std::error::Error>> {
    let mut lines = text.lines();

    // first line unnecessary for graphing
    lines.next().ok_or("path file is empty")?;

    let line = lines.next().ok_or("path file has no coordinate line")?;

    let mut points = Vec::new();
    for token in line.split_whitespace() {
        points.push(digit_pair(token)?);
    }
    Ok(points)
}
