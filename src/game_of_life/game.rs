//! Simulation state: one grid advanced under one rule set

use super::cell::{self, Cell};
use super::rules::{parse_rules, DEFAULT_RULES};
use super::{Grid, RuleSet};
use crate::error::{LifeError, LifeResult};
use rand::Rng;

/// Side length of the grid built when no grid or size is given
pub const DEFAULT_SIZE: usize = 10;

/// Where a game takes its starting grid from.
///
/// An explicit grid wins over a size, which wins over the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GridInput {
    /// Explicit rows, used verbatim
    Cells(Vec<Vec<Cell>>),
    /// A prebuilt grid, used verbatim; it must have at least one row and column
    Grid(Grid),
    /// An `n`×`n` grid built by [`Grid::build`]; `n` must be positive and
    /// `Size(0)` fails with [`LifeError::InvalidSize`]
    Size(usize),
    /// A [`DEFAULT_SIZE`]×[`DEFAULT_SIZE`] grid built by [`Grid::build`]
    #[default]
    Default,
}

impl From<Vec<Vec<Cell>>> for GridInput {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        GridInput::Cells(rows)
    }
}

impl From<Grid> for GridInput {
    fn from(grid: Grid) -> Self {
        GridInput::Grid(grid)
    }
}

impl From<usize> for GridInput {
    fn from(size: usize) -> Self {
        GridInput::Size(size)
    }
}

impl From<Option<usize>> for GridInput {
    fn from(size: Option<usize>) -> Self {
        size.map_or(GridInput::Default, GridInput::Size)
    }
}

impl GridInput {
    fn into_grid<R: Rng>(self, randomize: bool, rng: &mut R) -> LifeResult<Grid> {
        match self {
            GridInput::Cells(rows) => Grid::from_rows(rows),
            GridInput::Grid(grid) if grid.width() == 0 || grid.height() == 0 => {
                Err(LifeError::EmptyGrid)
            }
            GridInput::Grid(grid) => Ok(grid),
            GridInput::Size(0) => Err(LifeError::InvalidSize(0)),
            GridInput::Size(n) => Ok(Grid::build(n, n, randomize, rng)),
            GridInput::Default => Ok(Grid::build(DEFAULT_SIZE, DEFAULT_SIZE, randomize, rng)),
        }
    }
}

/// Builder for [`Game`]
#[derive(Debug, Clone)]
pub struct GameBuilder {
    input: GridInput,
    rules: String,
    randomize: bool,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            input: GridInput::Default,
            rules: DEFAULT_RULES.to_string(),
            randomize: true,
        }
    }
}

impl GameBuilder {
    pub fn input(mut self, input: impl Into<GridInput>) -> Self {
        self.input = input.into();
        self
    }

    /// Rule descriptor, `"23/3"` unless set
    pub fn rules(mut self, descriptor: impl Into<String>) -> Self {
        self.rules = descriptor.into();
        self
    }

    /// Whether size-built grids start random (the default) or all dead.
    /// Ignored for explicit grids.
    pub fn randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Build using the thread-local random generator
    pub fn build(self) -> LifeResult<Game> {
        self.build_with_rng(&mut rand::rng())
    }

    /// Build, drawing any random cells from `rng`
    pub fn build_with_rng<R: Rng>(self, rng: &mut R) -> LifeResult<Game> {
        let rules = parse_rules(&self.rules)?;
        let grid = self.input.into_grid(self.randomize, rng)?;

        log::debug!(
            "new game: {}x{} grid, {} live, rules {}",
            grid.width(),
            grid.height(),
            grid.living_count(),
            rules
        );
        Ok(Game::from_parts(grid, rules))
    }
}

/// A running simulation.
///
/// The game exclusively owns its grid; callers only get shared views of it,
/// so nothing can change a cell while a generation is being computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    rules: RuleSet,
    generation: usize,
}

impl Game {
    pub const DEAD: Cell = cell::DEAD;
    pub const LIVE: Cell = cell::LIVE;

    /// Create a game from a grid input and an optional rule descriptor.
    ///
    /// Random cells come from the thread-local generator; use
    /// [`Game::builder`] to supply a seeded one.
    pub fn new(input: impl Into<GridInput>, rules: Option<&str>, randomize: bool) -> LifeResult<Self> {
        Self::builder()
            .input(input)
            .rules(rules.unwrap_or(DEFAULT_RULES))
            .randomize(randomize)
            .build()
    }

    pub fn builder() -> GameBuilder {
        GameBuilder::default()
    }

    /// Wrap an existing grid and rule set
    pub fn from_parts(grid: Grid, rules: RuleSet) -> Self {
        Self {
            grid,
            rules,
            generation: 0,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Number of generations advanced since construction
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Live neighbours of `(row, col)` in the current grid
    pub fn sum_neighbours(&self, row: usize, col: usize) -> u8 {
        self.grid.count_neighbours(row, col)
    }

    /// Advance one generation and return the new grid.
    ///
    /// The next grid is built in full from the current one before it
    /// replaces it.
    pub fn iterate(&mut self) -> &Grid {
        self.grid = self.rules.evolve(&self.grid);
        self.generation += 1;
        log::trace!(
            "generation {}: {} live",
            self.generation,
            self.grid.living_count()
        );
        &self.grid
    }

    /// Advance `generations` times and return the final grid
    pub fn run(&mut self, generations: usize) -> &Grid {
        for _ in 0..generations {
            self.iterate();
        }
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
