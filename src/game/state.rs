use strum_macros::{AsRefStr, Display};

/// The top-level phases of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// Waiting for the start input.
    #[default]
    Intro,
    /// Actors are placed and frozen for a moment before the hunt.
    Ready,
    /// The actual game.
    Hunting,
    /// Pac got caught.
    PacmanDying,
    /// A ghost just got eaten; everything but the returning eyes pauses.
    GhostDying,
    /// The maze is cleared.
    ChangingLevel,
    GameOver,
}

/// A tick countdown owned by a state or by the hunting phase controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Countdown {
    Remaining(u32),
    /// Never runs out by ticking; only an external event ends it.
    #[default]
    Indefinite,
}

impl Countdown {
    /// Counts down one tick. Does nothing once expired or when indefinite.
    pub fn tick(&mut self) {
        if let Countdown::Remaining(ticks) = self {
            *ticks = ticks.saturating_sub(1);
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Remaining(0))
    }

    pub fn remaining(&self) -> Option<u32> {
        match self {
            Countdown::Remaining(ticks) => Some(*ticks),
            Countdown::Indefinite => None,
        }
    }
}
