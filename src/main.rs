//! Terminal driver for the life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_engine::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_grids, parse_rules, RuleEntry},
    run_simulation,
    utils::{ColorOutput, GridFormatter, CLEAR_SCREEN},
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "life")]
#[command(about = "Life-like cellular automaton simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print each generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Rule descriptor such as "23/3" (overrides config)
        #[arg(short, long)]
        rules: Option<String>,

        /// Side length of a square grid (overrides config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Seed for the random grid (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Start from an all-dead grid instead of a random one
        #[arg(long)]
        no_randomize: bool,

        /// Pattern file to seed the grid from (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Milliseconds between frames (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Frame format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Parse a rule descriptor and show the resulting sets
    Rules {
        /// Descriptor such as "23/3"
        descriptor: String,
    },

    /// Create an example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rules,
            size,
            seed,
            no_randomize,
            pattern,
            generations,
            interval,
            format,
        } => {
            let overrides = CliOverrides {
                rules,
                size,
                no_randomize,
                seed,
                generations,
                pattern_file: pattern,
                interval_ms: interval,
                format,
            };
            run_command(config, overrides)
        }
        Commands::Rules { descriptor } => rules_command(&descriptor),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let interval = Duration::from_millis(settings.display.interval_ms);
    let format = settings.display.format;
    let clear = settings.display.clear_screen;

    let start_time = Instant::now();
    let game = run_simulation(&settings, |game| {
        if clear {
            print!("{}", CLEAR_SCREEN);
        }
        println!("{}", GridFormatter::format_frame(game, format));
        if game.generation() < settings.simulation.generations && !interval.is_zero() {
            std::thread::sleep(interval);
        }
        Ok(())
    })?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Finished {} generations in {:.3}s: {} living cells on a {}x{} grid",
            game.generation(),
            start_time.elapsed().as_secs_f64(),
            game.grid().living_count(),
            game.width(),
            game.height()
        ))
    );

    Ok(())
}

fn describe_entries(entries: &[RuleEntry]) -> String {
    if entries.is_empty() {
        return "(none)".to_string();
    }
    entries
        .iter()
        .map(|entry| match entry {
            RuleEntry::Count(n) => n.to_string(),
            RuleEntry::Inert(c) => format!("{:?} (inert)", c),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn rules_command(descriptor: &str) -> Result<()> {
    match parse_rules(descriptor) {
        Ok(rules) => {
            println!("{}", ColorOutput::success(&format!("Rules {}", rules)));
            println!("  Survival: {}", describe_entries(rules.survival()));
            println!("  Birth:    {}", describe_entries(rules.birth()));
            Ok(())
        }
        Err(e) => {
            println!("{}", ColorOutput::error(&e.to_string()));
            Err(e.into())
        }
    }
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_grids(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    let mut glider_config = Settings::default();
    glider_config.simulation.pattern_file = Some(patterns_dir.join("glider.txt"));
    glider_config.simulation.generations = 20;
    glider_config.to_file(&config_dir.join("glider.yaml"))?;

    let mut highlife_config = Settings::default();
    highlife_config.simulation.rules = "23/36".to_string();
    highlife_config.simulation.size = Some(40);
    highlife_config.to_file(&config_dir.join("highlife.yaml"))?;

    println!("{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own patterns to {}", patterns_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
