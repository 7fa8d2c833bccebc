//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{Game, Grid};
use anyhow::Result;

/// Format grids for display
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() * 3 + 1));
        for row in grid.rows() {
            for cell in row {
                output.push(if cell.is_live() { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for (y, row) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for cell in row {
                output.push_str(if cell.is_live() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    fn cell_values(grid: &Grid) -> Vec<Vec<u8>> {
        grid.rows()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    /// Format a grid as a JSON array of 0/1 rows
    pub fn format_grid_json(grid: &Grid) -> Result<String> {
        Ok(serde_json::to_string(&Self::cell_values(grid))?)
    }

    /// Format one frame of a running game
    pub fn format_frame(game: &Game, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!(
                "Generation {} (Living: {}):\n{}",
                game.generation(),
                game.grid().living_count(),
                Self::format_grid_compact(game.grid())
            ),
            OutputFormat::Coords => format!(
                "Generation {} (Living: {}):\n{}",
                game.generation(),
                game.grid().living_count(),
                Self::format_grid_with_coords(game.grid())
            ),
            OutputFormat::Json => serde_json::json!({
                "generation": game.generation(),
                "living": game.grid().living_count(),
                "grid": Self::cell_values(game.grid()),
            })
            .to_string(),
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

/// Escape sequence that clears the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
