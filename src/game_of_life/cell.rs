//! Cell states

use std::fmt;

/// State of a single cell
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Live = 1,
}

/// Named dead state, for renderers comparing grid contents
pub const DEAD: Cell = Cell::Dead;
/// Named live state, for renderers comparing grid contents
pub const LIVE: Cell = Cell::Live;

impl Cell {
    /// Numeric value used when summing neighbours (0 or 1)
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_live(self) -> bool {
        self == Cell::Live
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(live: bool) -> Self {
        if live {
            Cell::Live
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    #[inline]
    fn from(cell: Cell) -> Self {
        cell.is_live()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
