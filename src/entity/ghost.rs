use glam::IVec2;
use strum::EnumCount;
use strum_macros::{AsRefStr, Display, EnumCount};

use crate::entity::Actor;
use crate::map::world::{Layout, TraversalFlags};

/// The four ghost roles. Exactly one ghost exists per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum GhostId {
    /// Direct pursuer, the leader.
    Blinky,
    /// Ambusher.
    Pinky,
    /// Flanker.
    Inky,
    /// Coward.
    Clyde,
}

impl GhostId {
    pub const ALL: [GhostId; GhostId::COUNT] = [GhostId::Blinky, GhostId::Pinky, GhostId::Inky, GhostId::Clyde];

    /// Position in [`GhostId::ALL`], used to index per-ghost arrays.
    pub const fn index(self) -> usize {
        match self {
            GhostId::Blinky => 0,
            GhostId::Pinky => 1,
            GhostId::Inky => 2,
            GhostId::Clyde => 3,
        }
    }
}

/// What a ghost is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostState {
    /// Waiting inside the house, bobbing up and down.
    Locked,
    /// Walking out of the house through the door.
    LeavingHouse,
    /// Chasing or scattering, depending on the hunting phase.
    Hunting,
    /// Vulnerable while Pac has power.
    Frightened,
    /// Killed by Pac and heading back to the house. The bounty is shown while non-zero.
    Eaten { bounty: u32 },
    /// Walking from the door to its seat to be revived.
    EnteringHouse,
}

/// Cruise Elroy mode of the leader ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elroy {
    #[default]
    Inactive,
    Active(u8),
    /// Switched off by Pac's death until Clyde leaves the house again.
    Suspended(u8),
}

impl Elroy {
    /// Signed level: 0 when inactive, positive when active, negative when suspended.
    pub fn level(self) -> i8 {
        match self {
            Elroy::Inactive => 0,
            Elroy::Active(level) => level as i8,
            Elroy::Suspended(level) => -(level as i8),
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Elroy::Active(_))
    }

    /// Raises the severity, staying suspended if currently suspended.
    pub fn raised_to(self, level: u8) -> Elroy {
        match self {
            Elroy::Suspended(_) => Elroy::Suspended(level),
            _ => Elroy::Active(level),
        }
    }

    pub fn suspended(self) -> Elroy {
        match self {
            Elroy::Active(level) => Elroy::Suspended(level),
            other => other,
        }
    }

    pub fn resumed(self) -> Elroy {
        match self {
            Elroy::Suspended(level) => Elroy::Active(level),
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    pub id: GhostId,
    pub actor: Actor,
    pub state: GhostState,
    pub target_tile: Option<IVec2>,
    /// Reverse on entering the next tile.
    pub forced_turn_back: bool,
    /// Only ever changes for the leader.
    pub elroy: Elroy,
}

impl Ghost {
    pub fn new(id: GhostId, layout: &Layout) -> Self {
        let mut ghost = Self {
            id,
            actor: Actor::new(layout.ghost_starts[id.index()], layout.ghost_start_directions[id.index()]),
            state: GhostState::Locked,
            target_tile: None,
            forced_turn_back: false,
            elroy: Elroy::Inactive,
        };
        ghost.reset(layout);
        ghost
    }

    /// Puts the ghost back on its starting spot. The leader starts outside the house,
    /// ready to hunt; everyone else is locked in.
    pub fn reset(&mut self, layout: &Layout) {
        let i = self.id.index();
        self.actor.reset(layout.ghost_starts[i], layout.ghost_start_directions[i]);
        self.state = match self.id {
            GhostId::Blinky => GhostState::Hunting,
            _ => GhostState::Locked,
        };
        self.actor.forced_on_track = self.state == GhostState::Hunting;
        self.target_tile = None;
        self.forced_turn_back = false;
    }

    pub fn tile(&self) -> IVec2 {
        self.actor.tile()
    }

    /// Ghosts in these states kill Pac on contact.
    pub fn is_dangerous(&self) -> bool {
        matches!(self.state, GhostState::Hunting | GhostState::LeavingHouse)
    }

    pub fn is_eaten(&self) -> bool {
        matches!(self.state, GhostState::Eaten { .. })
    }

    pub fn bounty(&self) -> u32 {
        match self.state {
            GhostState::Eaten { bounty } => bounty,
            _ => 0,
        }
    }

    pub fn traversal_flags(&self) -> TraversalFlags {
        match self.state {
            GhostState::LeavingHouse | GhostState::EnteringHouse => TraversalFlags::GHOST | TraversalFlags::DOOR,
            _ => TraversalFlags::GHOST,
        }
    }
}
