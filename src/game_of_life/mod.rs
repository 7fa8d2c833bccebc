//! Game of Life core functionality

pub mod cell;
pub mod game;
pub mod grid;
pub mod io;
pub mod rules;

pub use cell::{Cell, DEAD, LIVE};
pub use game::{Game, GameBuilder, GridInput, DEFAULT_SIZE};
pub use grid::Grid;
pub use io::{create_example_grids, grid_to_string, load_grid_from_file, parse_grid_from_string};
pub use rules::{parse_rules, RuleEntry, RuleSet, DEFAULT_RULES};
