//! Headless runner: plays one game with a wandering autopilot and logs what happens.

use anyhow::{Context, Result};
use clap::Parser;
use pacman_core::config::GameConfig;
use pacman_core::constants::TICKS_PER_SECOND;
use pacman_core::events::{GameCommand, TickInput};
use pacman_core::formatter;
use pacman_core::game::facts::{FactFlags, FrameFacts};
use pacman_core::game::state::GameState;
use pacman_core::game::Game;
use pacman_core::map::direction::Direction;
use pacman_core::map::world::World;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use thousands::Separable;
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Default run length: ten minutes of play.
const DEFAULT_TICKS: u64 = TICKS_PER_SECOND as u64 * 60 * 10;

#[derive(Parser)]
#[command(name = "pacman-core")]
#[command(about = "Play one headless Pac-Man game with a wandering autopilot")]
struct Args {
    /// Seed for the game and the autopilot
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Stop after this many ticks
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,
    /// Level to start on
    #[arg(long, default_value_t = 1)]
    level: u32,
}

fn setup_logging() -> Result<()> {
    // RUST_LOG overrides; default to info for this crate and warn elsewhere
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}=info", env!("CARGO_CRATE_NAME"))));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .event_format(formatter::TickFormatter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")
}

fn report(facts: &FrameFacts) {
    if let Some((from, to)) = facts.state_change {
        debug!(%from, %to, "State change");
    }
    if let Some((ghost, reason)) = facts.ghost_released {
        debug!(%ghost, ?reason, "Released");
    }
    if !facts.ghosts_killed.is_empty() {
        info!(ghosts = ?facts.ghosts_killed, "Ghosts eaten");
    }
    if let Some(points) = facts.bonus_reached {
        info!(points, "Bonus eaten");
    }
    if facts.has(FactFlags::PAC_KILLED) {
        info!("Pac was caught");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging()?;

    let config = GameConfig {
        start_level: args.level,
        ..GameConfig::with_seed(args.seed)
    };
    let world = World::arcade()?;
    let mut game = Game::new(world, config)?;
    let mut pilot = SmallRng::seed_from_u64(args.seed.wrapping_add(1));

    info!(seed = args.seed, ticks = args.ticks, "Running headless game");

    let mut input = TickInput::command(GameCommand::Start);
    for _ in 0..args.ticks {
        formatter::set_tick(game.tick());
        let facts = game.advance(&input);
        report(&facts);

        if matches!(facts.state_change, Some((_, GameState::Intro))) {
            break;
        }

        input = TickInput::default();
        if !game.pac.actor.could_move || pilot.random_ratio(1, 45) {
            input.direction = Direction::DIRECTIONS.choose(&mut pilot).copied();
        }
    }

    let high_score = game.high_score();
    println!(
        "score {} | level {} | lives {} | ticks {} | high score {} (level {})",
        game.score.points.separate_with_commas(),
        game.level.number,
        game.score.lives,
        game.tick(),
        high_score.points.separate_with_commas(),
        high_score.level,
    );
    Ok(())
}
