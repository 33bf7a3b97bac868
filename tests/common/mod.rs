#![allow(dead_code)]

use glam::{IVec2, Vec2};
use pacman_core::{
    config::GameConfig,
    events::{GameCommand, TickInput},
    game::{facts::FrameFacts, state::GameState, Game},
    map::world::World,
};

/// Arcade rules with every pause shortened to a couple of ticks.
pub fn quick_config(seed: u64) -> GameConfig {
    GameConfig {
        ready_ticks: 2,
        game_start_ready_ticks: 2,
        pac_dying_ticks: 3,
        ghost_dying_ticks: 2,
        level_change_base_ticks: 2,
        level_change_flash_ticks: 0,
        game_over_ticks: 3,
        ..GameConfig::with_seed(seed)
    }
}

pub fn new_game(config: GameConfig) -> Game {
    Game::new(World::arcade().unwrap(), config).unwrap()
}

/// Starts a game and runs it until the hunt begins. No hunting tick has run yet.
pub fn hunting_game(config: GameConfig) -> Game {
    let mut game = new_game(config);
    game.advance(&TickInput::command(GameCommand::Start));
    advance_until(&mut game, GameState::Hunting, 1_000);
    game
}

pub fn idle(game: &mut Game, ticks: u32) -> Vec<FrameFacts> {
    (0..ticks).map(|_| game.advance(&TickInput::default())).collect()
}

/// Advances until the game reaches `state`, panicking after `limit` ticks.
pub fn advance_until(game: &mut Game, state: GameState, limit: u32) -> Vec<FrameFacts> {
    let mut facts = Vec::new();
    for _ in 0..limit {
        if game.state() == state {
            return facts;
        }
        facts.push(game.advance(&TickInput::default()));
    }
    panic!("game never reached {state}, stuck in {}", game.state());
}

/// Puts Pac on the center of `tile`.
pub fn place_pac(game: &mut Game, tile: IVec2) {
    game.pac.actor.place_at(tile, Vec2::ZERO);
}

/// Eats food (without scoring it) until only `remaining` pieces are left, never touching `keep`.
pub fn leave_food(game: &mut Game, remaining: u32, keep: &[IVec2]) {
    let tiles: Vec<IVec2> = game.world.food_tiles().filter(|tile| !keep.contains(tile)).collect();
    for tile in tiles {
        if game.world.food_remaining() <= remaining {
            break;
        }
        game.world.remove_food(tile);
    }
    assert_eq!(game.world.food_remaining(), remaining);
}
