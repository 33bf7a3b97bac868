use glam::{IVec2, Vec2};

use crate::entity::Actor;
use crate::map::direction::Direction;
use crate::map::world::TraversalFlags;

/// The player character. Created once per game and repositioned for every life.
#[derive(Debug, Clone, PartialEq)]
pub struct Pac {
    pub actor: Actor,
    pub dead: bool,
    /// Ticks of power left after eating an energizer. Zero means no power.
    pub power_ticks: u32,
    /// Ticks Pac stands still after eating.
    pub resting_ticks: u32,
    /// Ticks since Pac last ate anything.
    pub starving_ticks: u32,
}

impl Pac {
    pub fn new(position: Vec2, direction: Direction) -> Self {
        Self {
            actor: Actor::new(position, direction),
            dead: false,
            power_ticks: 0,
            resting_ticks: 0,
            starving_ticks: 0,
        }
    }

    /// Puts Pac back on its starting spot for a new life or level.
    pub fn reset(&mut self, position: Vec2, direction: Direction) {
        self.actor.reset(position, direction);
        self.actor.forced_on_track = true;
        self.dead = false;
        self.power_ticks = 0;
        self.resting_ticks = 0;
        self.starving_ticks = 0;
    }

    pub fn tile(&self) -> IVec2 {
        self.actor.tile()
    }

    pub fn has_power(&self) -> bool {
        self.power_ticks > 0
    }

    pub fn traversal_flags(&self) -> TraversalFlags {
        TraversalFlags::PACMAN
    }
}
