//! Life-like cellular automaton engine
//!
//! A fixed-size grid of live and dead cells advanced one generation at a
//! time under a `"<survival>/<birth>"` rule descriptor such as Conway's
//! `"23/3"`. Cells beyond the grid edge are permanently dead.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{
    parse_rules, Cell, Game, GameBuilder, Grid, GridInput, RuleSet, DEAD, DEFAULT_RULES, LIVE,
};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the game described by `settings`.
///
/// A pattern file takes precedence over the configured size. A configured
/// seed makes random grids reproducible.
pub fn build_game(settings: &Settings) -> Result<Game> {
    let sim = &settings.simulation;

    let input = match sim.pattern_file {
        Some(ref path) => GridInput::Grid(game_of_life::load_grid_from_file(path)?),
        None => GridInput::from(sim.size),
    };

    let builder = Game::builder()
        .input(input)
        .rules(sim.rules.as_str())
        .randomize(sim.randomize);

    let game = match sim.seed {
        Some(seed) => builder.build_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => builder.build(),
    }
    .context("Failed to build game")?;

    Ok(game)
}

/// Run the configured number of generations.
///
/// `on_frame` sees the starting grid and then every new generation; an error
/// from it stops the run.
pub fn run_simulation<F>(settings: &Settings, mut on_frame: F) -> Result<Game>
where
    F: FnMut(&Game) -> Result<()>,
{
    let mut game = build_game(settings)?;
    log::info!(
        "running {} generations on a {}x{} grid with rules {}",
        settings.simulation.generations,
        game.width(),
        game.height(),
        game.rules()
    );

    on_frame(&game)?;
    for _ in 0..settings.simulation.generations {
        game.iterate();
        on_frame(&game)?;
    }

    Ok(game)
}
