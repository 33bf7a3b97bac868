//! The record of everything noteworthy that happened during one tick.
//!
//! This is the only output of the simulation; presentation and audio react to it.

use bitflags::bitflags;
use glam::IVec2;
use smallvec::SmallVec;

use crate::entity::ghost::GhostId;
use crate::game::state::GameState;
use crate::systems::house::ReleaseReason;

bitflags! {
    /// One-bit facts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FactFlags: u16 {
        const ENERGIZER_FOUND = 1 << 0;
        const PAC_KILLED = 1 << 1;
        const POWER_STARTED = 1 << 2;
        const POWER_FADING = 1 << 3;
        const POWER_LOST = 1 << 4;
        const EXTRA_LIFE = 1 << 5;
        const BONUS_APPEARED = 1 << 6;
        const BONUS_EXPIRED = 1 << 7;
        const LEVEL_COMPLETED = 1 << 8;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameFacts {
    pub tick: u64,
    pub flags: FactFlags,
    /// Set when the game changed state, as `(from, to)`.
    pub state_change: Option<(GameState, GameState)>,
    /// The tile Pac ate food from.
    pub food_found: Option<IVec2>,
    /// Points earned by reaching the bonus.
    pub bonus_reached: Option<u32>,
    pub ghosts_killed: SmallVec<[GhostId; 4]>,
    pub ghost_released: Option<(GhostId, ReleaseReason)>,
    /// Index of the hunting phase that just began.
    pub hunting_phase_started: Option<usize>,
    /// New signed Elroy level of the leader.
    pub elroy_changed: Option<i8>,
}

impl FrameFacts {
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            ..Default::default()
        }
    }

    pub fn has(&self, flag: FactFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Whether nothing at all happened.
    pub fn is_empty(&self) -> bool {
        *self == Self::new(self.tick)
    }
}
