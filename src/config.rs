use crate::constants::seconds;

/// Tunables of a game session. [`Default`] gives arcade values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed of the generator behind frightened ghost turns and bonus timing.
    pub seed: u64,
    pub initial_lives: u8,
    /// Score at which the one extra life is awarded.
    pub extra_life_score: u32,
    pub start_level: u32,
    pub ready_ticks: u32,
    /// Ready duration at the very start of a game.
    pub game_start_ready_ticks: u32,
    pub pac_dying_ticks: u32,
    /// Pause after a ghost is eaten before everyone moves again.
    pub ghost_dying_ticks: u32,
    pub level_change_base_ticks: u32,
    /// Added to the level change duration for every maze flash.
    pub level_change_flash_ticks: u32,
    pub game_over_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            initial_lives: 3,
            extra_life_score: 10_000,
            start_level: 1,
            ready_ticks: seconds(2),
            game_start_ready_ticks: seconds(4),
            pac_dying_ticks: seconds(4),
            ghost_dying_ticks: seconds(1),
            level_change_base_ticks: seconds(2),
            level_change_flash_ticks: 30,
            game_over_ticks: seconds(5),
        }
    }
}

impl GameConfig {
    /// Arcade defaults with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}
