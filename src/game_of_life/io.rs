//! Plain-text seed patterns

use super::{Cell, Grid};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::Path;

/// Load a pattern from a text file.
/// Format: one row per line, `1`, `#`, `*` or `O` for live cells and `0` or `.` for dead ones
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Parse a grid from its text representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' | '.' => row.push(Cell::Dead),
                '1' | '#' | '*' | 'O' => row.push(Cell::Live),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Use 0/. for dead and 1/#/*/O for live",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    Ok(Grid::from_rows(rows)?)
}

/// Convert a grid to its text representation, `1` live and `0` dead
pub fn grid_to_string(grid: &Grid) -> String {
    grid.rows()
        .map(|row| row.iter().map(|cell| cell.value()).join(""))
        .map(|line| line + "\n")
        .collect()
}

/// Write the bundled example patterns into `output_dir`
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        ("glider.txt", "00100\n10100\n01100\n00000\n00000\n"),
        ("blinker.txt", "00000\n00000\n01110\n00000\n00000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "110000\n110000\n001100\n001100\n"),
    ];

    for (name, content) in patterns {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
