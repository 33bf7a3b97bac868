//! The ghost house: who gets to leave next, and how ghosts walk in and out.

use glam::Vec2;
use tracing::debug;

use crate::constants::{BASE_SPEED, GHOST_BOUNCE_RANGE, GHOST_HOUSE_SPEED};
use crate::entity::ghost::{Ghost, GhostId, GhostState};
use crate::entity::Actor;
use crate::map::direction::Direction;

/// The global dot counter switches off when it reaches this value with Clyde still inside.
pub const GLOBAL_DOT_COUNTER_LIMIT: u32 = 32;

/// Order in which locked ghosts are considered for release.
const SENIORITY: [GhostId; 3] = [GhostId::Pinky, GhostId::Inky, GhostId::Clyde];

/// Why a ghost was let out of the house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseReason {
    /// The leader starts every life outside the house.
    Leader,
    GlobalDotCounter { count: u32, limit: u32 },
    PrivateDotCounter { count: u32, limit: u32 },
    /// Pac went too long without eating.
    Starving { ticks: u32, limit: u32 },
}

/// Global counter value at which a ghost may leave, used after Pac loses a life.
/// Clyde has none.
pub fn global_dot_limit(id: GhostId) -> Option<u32> {
    match id {
        GhostId::Pinky => Some(7),
        GhostId::Inky => Some(17),
        GhostId::Blinky | GhostId::Clyde => None,
    }
}

/// Private counter value at which a ghost may leave.
pub fn private_dot_limit(id: GhostId, level_number: u32) -> u32 {
    match (id, level_number) {
        (GhostId::Inky, 1) => 30,
        (GhostId::Clyde, 1) => 60,
        (GhostId::Clyde, 2) => 50,
        _ => 0,
    }
}

/// Ticks without eating after which the next ghost is released anyway.
pub fn starving_limit(level_number: u32) -> u32 {
    if level_number < 5 {
        240
    } else {
        180
    }
}

/// Dot counter bookkeeping for the house.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GhostHouse {
    dot_counters: [u32; 4],
    /// `None` while disabled.
    global_dot_counter: Option<u32>,
}

impl GhostHouse {
    /// Clears every counter for a fresh level. The global counter starts disabled.
    pub fn reset_for_level(&mut self) {
        self.dot_counters = [0; 4];
        self.global_dot_counter = None;
    }

    /// After Pac loses a life, releases are driven by the global counter.
    pub fn enable_global_counter(&mut self) {
        self.global_dot_counter = Some(0);
    }

    pub fn dot_counter(&self, id: GhostId) -> u32 {
        self.dot_counters[id.index()]
    }

    pub fn global_dot_counter(&self) -> Option<u32> {
        self.global_dot_counter
    }

    /// The most senior ghost still locked in.
    pub fn next_locked(ghosts: &[Ghost; 4]) -> Option<GhostId> {
        SENIORITY
            .into_iter()
            .find(|id| ghosts[id.index()].state == GhostState::Locked)
    }

    /// Counts one eaten piece of food.
    pub fn on_food_eaten(&mut self, ghosts: &[Ghost; 4]) {
        match self.global_dot_counter {
            Some(count) => {
                let count = count + 1;
                if count == GLOBAL_DOT_COUNTER_LIMIT && ghosts[GhostId::Clyde.index()].state == GhostState::Locked {
                    debug!("Global dot counter disabled");
                    self.global_dot_counter = None;
                } else {
                    self.global_dot_counter = Some(count);
                }
            }
            None => {
                if let Some(id) = Self::next_locked(ghosts) {
                    self.dot_counters[id.index()] += 1;
                }
            }
        }
    }

    /// Decides whether the next locked ghost may leave now.
    pub fn release_check(
        &self,
        ghosts: &[Ghost; 4],
        level_number: u32,
        starving_ticks: u32,
    ) -> Option<(GhostId, ReleaseReason)> {
        let id = Self::next_locked(ghosts)?;

        match self.global_dot_counter {
            Some(count) => {
                if let Some(limit) = global_dot_limit(id).filter(|&limit| count >= limit) {
                    return Some((id, ReleaseReason::GlobalDotCounter { count, limit }));
                }
            }
            None => {
                let count = self.dot_counters[id.index()];
                let limit = private_dot_limit(id, level_number);
                if count >= limit {
                    return Some((id, ReleaseReason::PrivateDotCounter { count, limit }));
                }
            }
        }

        let limit = starving_limit(level_number);
        (starving_ticks >= limit).then_some((
            id,
            ReleaseReason::Starving {
                ticks: starving_ticks,
                limit,
            },
        ))
    }
}

/// Lets a ghost out. Releasing Clyde wakes up a suspended Elroy.
pub fn release_ghost(ghosts: &mut [Ghost; 4], id: GhostId) {
    ghosts[id.index()].state = GhostState::LeavingHouse;
    if id == GhostId::Clyde {
        let blinky = &mut ghosts[GhostId::Blinky.index()];
        let resumed = blinky.elroy.resumed();
        if resumed != blinky.elroy {
            debug!(elroy = resumed.level(), "Elroy resumed");
            blinky.elroy = resumed;
        }
    }
}

/// Moves `value` towards `target` by at most `step`. Returns true once there.
fn approach(value: &mut f32, target: f32, step: f32) -> bool {
    let delta = target - *value;
    if delta.abs() <= step {
        *value = target;
        true
    } else {
        *value += step.copysign(delta);
        false
    }
}

fn house_step() -> f32 {
    GHOST_HOUSE_SPEED * BASE_SPEED
}

/// Bobs a locked ghost up and down around its seat.
pub fn bounce(actor: &mut Actor, seat: Vec2) {
    actor.speed = GHOST_HOUSE_SPEED;
    let dy = actor.position.y - seat.y;
    if dy <= -GHOST_BOUNCE_RANGE || actor.direction.is_horizontal() {
        actor.direction = Direction::Down;
    } else if dy >= GHOST_BOUNCE_RANGE {
        actor.direction = Direction::Up;
    }
    actor.wish_direction = actor.direction;
    actor.position.y += actor.direction.as_vec2().y * house_step();
}

/// Walks a leaving ghost to the middle of the house and up through the door.
/// Returns true once it stands on `exit`, facing left.
pub fn leave(actor: &mut Actor, exit: Vec2) -> bool {
    actor.speed = GHOST_HOUSE_SPEED;
    let step = house_step();

    if actor.position.x != exit.x {
        actor.direction = if exit.x < actor.position.x {
            Direction::Left
        } else {
            Direction::Right
        };
        actor.wish_direction = actor.direction;
        approach(&mut actor.position.x, exit.x, step);
        return false;
    }

    actor.direction = Direction::Up;
    actor.wish_direction = Direction::Up;
    if approach(&mut actor.position.y, exit.y, step) {
        actor.direction = Direction::Left;
        actor.wish_direction = Direction::Left;
        actor.forced_on_track = true;
        actor.changed_tile = false;
        return true;
    }
    false
}

/// Walks a revived ghost down through the door and over to its seat.
/// Returns true once seated.
pub fn enter(actor: &mut Actor, seat: Vec2) -> bool {
    actor.speed = GHOST_HOUSE_SPEED;
    let step = house_step();

    if actor.position.y != seat.y {
        actor.direction = Direction::Down;
        actor.wish_direction = Direction::Down;
        approach(&mut actor.position.y, seat.y, step);
        return false;
    }

    if actor.position.x != seat.x {
        actor.direction = if seat.x < actor.position.x {
            Direction::Left
        } else {
            Direction::Right
        };
        actor.wish_direction = actor.direction;
        return approach(&mut actor.position.x, seat.x, step);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_does_not_overshoot() {
        let mut value = 10.0;
        assert!(!approach(&mut value, 11.0, 0.625));
        assert_eq!(value, 10.625);
        assert!(approach(&mut value, 11.0, 0.625));
        assert_eq!(value, 11.0);
    }

    #[test]
    fn test_leave_reaches_exit() {
        let exit = Vec2::new(112.0, 116.0);
        let mut actor = Actor::new(Vec2::new(96.0, 140.0), Direction::Up);
        let mut ticks = 0;
        while !leave(&mut actor, exit) {
            ticks += 1;
            assert!(ticks < 1000);
        }
        assert_eq!(actor.position, exit);
        assert_eq!(actor.direction, Direction::Left);
    }
}
