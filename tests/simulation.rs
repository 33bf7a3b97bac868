//! Long randomized runs checking what must hold on every single tick.

use glam::IVec2;
use pacman_core::{
    events::{GameCommand, TickInput},
    game::{facts::FrameFacts, state::GameState, Game},
    map::direction::Direction,
};
use pretty_assertions::assert_eq;
use rand::{rngs::SmallRng, seq::IndexedRandom, Rng, SeedableRng};
use speculoos::prelude::*;

mod common;

/// Random steering input, restarting the game whenever it is back in the intro.
fn autopilot(seed: u64, ticks: usize) -> Vec<TickInput> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..ticks)
        .map(|_| {
            let mut input = TickInput::default();
            if rng.random_ratio(1, 20) {
                input.direction = Direction::DIRECTIONS.choose(&mut rng).copied();
            }
            input
        })
        .collect()
}

fn play(game: &mut Game, inputs: &[TickInput], mut check: impl FnMut(&Game, &FrameFacts)) {
    for input in inputs {
        let mut input = input.clone();
        if game.state() == GameState::Intro {
            input.commands.push(GameCommand::Start);
        }
        let facts = game.advance(&input);
        check(game, &facts);
    }
}

#[test]
fn test_actors_never_stand_on_blocked_tiles() {
    for seed in 0..3 {
        let mut game = common::new_game(common::quick_config(seed));
        play(&mut game, &autopilot(seed + 100, 6_000), |game, _| {
            let pac = game.pac.tile();
            assert!(
                game.world.is_accessible(pac, game.pac.traversal_flags()),
                "pac on {pac} at tick {}",
                game.tick()
            );
            for ghost in &game.ghosts {
                let tile = ghost.tile();
                assert!(
                    game.world.is_accessible(tile, ghost.traversal_flags()),
                    "{} ({:?}) on {tile} at tick {}",
                    ghost.id,
                    ghost.state,
                    game.tick()
                );
            }
        });
    }
}

#[test]
fn test_food_only_goes_down_within_a_level() {
    let mut game = common::new_game(common::quick_config(7));
    let mut last = game.world.food_remaining();
    let mut level = game.level.number;

    play(&mut game, &autopilot(7, 8_000), |game, facts| {
        let remaining = game.world.food_remaining();
        let restarted = matches!(facts.state_change, Some((_, GameState::Ready)));
        if game.level.number != level || (restarted && remaining == game.world.total_food()) {
            assert_eq!(remaining, game.world.total_food());
        } else {
            assert_that(&remaining).is_less_than_or_equal_to(last);
            if facts.food_found.is_some() {
                assert_eq!(remaining, last - 1);
            }
        }
        last = remaining;
        level = game.level.number;
    });
}

#[test]
fn test_same_seed_same_game() {
    let inputs = autopilot(42, 5_000);
    let record = |seed: u64| {
        let mut game = common::new_game(common::quick_config(seed));
        let mut frames = Vec::new();
        play(&mut game, &inputs, |game, facts| {
            let ghosts: Vec<_> = game.ghosts.iter().map(|g| (g.actor.position, g.state)).collect();
            frames.push((facts.clone(), game.pac.actor.position, ghosts, game.score.points));
        });
        frames
    };

    let first = record(5);
    let second = record(5);
    assert_that(&first.len()).is_equal_to(5_000);
    assert!(first == second, "two runs with the same seed diverged");
}

#[test]
fn test_pac_keeps_moving_on_open_track() {
    let mut game = common::hunting_game(common::quick_config(3));
    // From the start spot Pac runs left along the bottom corridor until the wall.
    let mut stopped = None;
    for _ in 0..200 {
        game.pac.power_ticks = 10;
        game.advance(&TickInput::default());
        if !game.pac.actor.could_move && game.pac.resting_ticks == 0 {
            stopped = Some(game.pac.tile());
            break;
        }
    }
    assert_eq!(stopped, Some(IVec2::new(6, 26)));
}
