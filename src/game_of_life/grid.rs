//! Grid representation and neighbour counting

use super::cell::Cell;
use crate::error::{LifeError, LifeResult};
use itertools::iproduct;
use rand::Rng;
use std::fmt;

/// Fixed-size rectangular grid of cells, stored row-major.
///
/// Positions outside the grid are permanently dead: the edge is a hard
/// boundary, never wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a `height`-row, `width`-column grid.
    ///
    /// With `randomize`, every cell is an independent fair coin flip drawn
    /// from `rng`; otherwise every cell starts dead and `rng` is untouched.
    pub fn build<R: Rng>(width: usize, height: usize, randomize: bool, rng: &mut R) -> Self {
        if !randomize {
            return Self::new(width, height);
        }

        let cells = (0..width * height)
            .map(|_| Cell::from(rng.random_bool(0.5)))
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    /// Create a randomly seeded grid
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        Self::build(width, height, true, rng)
    }

    /// Create a grid from explicit rows.
    ///
    /// Height is the number of rows and width the length of the first row;
    /// every other row must match it.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> LifeResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if width == 0 {
            return Err(LifeError::EmptyGrid);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(LifeError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Create a grid from rows of 0/1 values, anything non-zero is live
    pub fn from_values(rows: &[&[u8]]) -> LifeResult<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| Cell::from(v != 0)).collect())
                .collect(),
        )
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Cell at `(row, col)`, dead when outside the grid
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            Cell::Dead
        }
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> LifeResult<()> {
        if row >= self.height || col >= self.width {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Count live cells among the eight neighbours of `(row, col)`.
    ///
    /// The cell itself is never counted and off-grid neighbours count as dead.
    pub fn count_neighbours(&self, row: usize, col: usize) -> u8 {
        iproduct!([-1isize, 0, 1], [-1isize, 0, 1])
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| self.cell_at_offset(row as isize + dr, col as isize + dc).value())
            .sum()
    }

    /// Cell at a possibly off-grid position
    fn cell_at_offset(&self, row: isize, col: isize) -> Cell {
        if row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width {
            self.cells[self.index(row as usize, col as usize)]
        } else {
            Cell::Dead
        }
    }

    /// Build a new grid of the same shape, computing each cell from this one.
    ///
    /// `f` receives `(row, col, cell)` and only ever sees this grid, never the
    /// partially built result.
    pub fn map_cells<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, usize, Cell) -> Cell,
    {
        let cells = iproduct!(0..self.height, 0..self.width)
            .map(|(row, col)| f(row, col, self.cells[self.index(row, col)]))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Iterate over the grid row by row
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on 0, and a zero-width grid has no rows to yield
        self.cells.chunks_exact(self.width.max(1)).take(self.height)
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// All live cell coordinates as `(row, col)`
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| self.get(row, col).is_live())
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_live())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let symbol = if cell.is_live() { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
