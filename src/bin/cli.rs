use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;

use piezas::config::AppConfig;
use piezas::game::GameEngine;
use piezas::random::{simulate, RandomPlayer};
use piezas::render::{describe_outcome, render_board};
use piezas::script::{parse_moves, play_moves};

/// Headless Piezas: play fixed move sequences or simulate random games.
#[derive(Parser)]
#[command(name = "piezas-cli", about = "Play Piezas from the command line")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "piezas.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a move sequence to a fresh board and print the result
    Play {
        /// Columns separated by commas or spaces, e.g. "0,1,1,2"
        #[arg(long, allow_hyphen_values = true)]
        moves: String,
    },
    /// Play random games and report how often each side wins
    Simulate {
        /// Override number of games
        #[arg(long)]
        games: Option<usize>,

        /// Override RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the default configuration as TOML
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play { moves } => {
            let moves = parse_moves(&moves).context("parsing --moves")?;
            let mut engine = GameEngine::new();
            for record in play_moves(&mut engine, &moves) {
                println!(
                    "{} -> column {:>2}: {}",
                    record.player.name(),
                    record.column,
                    config.glyphs.glyph(record.result)
                );
            }
            print!("{}", render_board(&engine, &config.glyphs));
            println!("Outcome: {}", describe_outcome(engine.game_state()));
        }
        Command::Simulate { games, seed } => {
            if let Some(games) = games {
                config.simulation.games = games;
            }
            if seed.is_some() {
                config.simulation.seed = seed;
            }
            config.validate()?;

            let mut player = match config.simulation.seed {
                Some(seed) => RandomPlayer::with_seed(seed),
                None => RandomPlayer::new(),
            };
            log::info!("simulating {} games", config.simulation.games);
            let tally = simulate(&mut player, config.simulation.games);

            let pct = |n: usize| n as f64 * 100.0 / tally.total().max(1) as f64;
            println!("Games: {}", tally.total());
            println!("X wins: {} ({:.1}%)", tally.x_wins, pct(tally.x_wins));
            println!("O wins: {} ({:.1}%)", tally.o_wins, pct(tally.o_wins));
            println!("Draws:  {} ({:.1}%)", tally.draws, pct(tally.draws));
        }
        Command::Config => {
            print!("{}", AppConfig::default_toml()?);
        }
    }

    Ok(())
}
