//! Per-tick behavior of a single ghost, driven by its [`GhostState`].

use glam::IVec2;
use rand::Rng;
use tracing::{debug, trace};

use crate::constants::BASE_SPEED;
use crate::entity::ghost::{Elroy, Ghost, GhostId, GhostState};
use crate::entity::Actor;
use crate::game::level::Level;
use crate::map::direction::Direction;
use crate::map::world::{tile_of, World};
use crate::systems::house;
use crate::systems::movement::move_actor;
use crate::systems::targeting::{chase_target, direction_towards, random_direction, ChaseInput};

/// What a ghost may look at while deciding its move.
#[derive(Debug, Clone, Copy)]
pub struct GhostContext<'a> {
    pub world: &'a World,
    pub level: &'a Level,
    pub chasing: bool,
    pub pac_tile: IVec2,
    pub pac_direction: Direction,
    pub blinky_tile: IVec2,
}

/// Speed of a hunting ghost. Tunnels slow everyone down, Elroy speeds up the leader.
pub fn hunting_speed(ghost: &Ghost, ctx: &GhostContext) -> f32 {
    if ctx.world.is_tunnel(ghost.tile()) {
        return ctx.level.ghost_speed_tunnel;
    }
    match ghost.elroy {
        Elroy::Active(1) => ctx.level.elroy1_speed,
        Elroy::Active(_) => ctx.level.elroy2_speed,
        _ => ctx.level.ghost_speed,
    }
}

/// The tile a hunting ghost is heading for this tick.
pub fn hunting_target(ghost: &Ghost, ctx: &GhostContext) -> IVec2 {
    let scatter_tile = ctx.world.layout().scatter_targets[ghost.id.index()];
    if ctx.chasing || ghost.elroy.is_active() {
        chase_target(
            ghost.id,
            &ChaseInput {
                pac_tile: ctx.pac_tile,
                pac_direction: ctx.pac_direction,
                blinky_tile: ctx.blinky_tile,
                ghost_tile: ghost.tile(),
                scatter_tile,
            },
        )
    } else {
        scatter_tile
    }
}

/// Picks the wished direction. The ghost only decides when it has just entered a new
/// tile, and a pending turn-back wins over its own choice there.
fn steer(ghost: &mut Ghost, world: &World, choose: impl FnOnce(&Actor) -> Option<Direction>) {
    if !ghost.actor.changed_tile {
        return;
    }
    if ghost.forced_turn_back {
        ghost.forced_turn_back = false;
        ghost.actor.wish_direction = ghost.actor.direction.opposite();
        trace!(ghost = %ghost.id, tile = ?ghost.tile(), "Turned back");
        return;
    }
    match choose(&ghost.actor) {
        Some(direction) => ghost.actor.wish_direction = direction,
        None => debug_assert!(
            world.is_portal(ghost.tile()),
            "{} has no way out of {}",
            ghost.id,
            ghost.tile()
        ),
    }
}

/// Whether an eaten ghost has arrived above the door.
fn reached_house_entry(actor: &Actor, world: &World) -> bool {
    let entry = world.layout().house_entry;
    actor.tile().y == tile_of(entry).y && (actor.position.x - entry.x).abs() <= actor.speed * BASE_SPEED
}

/// Runs one tick of a ghost.
pub fn update_ghost<R: Rng + ?Sized>(ghost: &mut Ghost, ctx: &GhostContext, rng: &mut R) {
    let world = ctx.world;
    let layout = world.layout();

    match ghost.state {
        GhostState::Locked => {
            // The leader waits outside the house.
            if ghost.id != GhostId::Blinky {
                house::bounce(&mut ghost.actor, layout.ghost_starts[ghost.id.index()]);
            }
        }
        GhostState::LeavingHouse => {
            if house::leave(&mut ghost.actor, layout.house_entry) {
                debug!(ghost = %ghost.id, "Ghost left the house");
                ghost.state = GhostState::Hunting;
            }
        }
        GhostState::Hunting => {
            ghost.actor.speed = hunting_speed(ghost, ctx);
            let target = hunting_target(ghost, ctx);
            ghost.target_tile = Some(target);
            let flags = ghost.traversal_flags();
            steer(ghost, world, |actor| direction_towards(actor, target, world, flags, true));
            move_actor(&mut ghost.actor, world, flags);
        }
        GhostState::Frightened => {
            ghost.actor.speed = if world.is_tunnel(ghost.tile()) {
                ctx.level.ghost_speed_tunnel
            } else {
                ctx.level.ghost_speed_frightened
            };
            ghost.target_tile = None;
            let flags = ghost.traversal_flags();
            steer(ghost, world, |actor| random_direction(actor, world, flags, rng));
            move_actor(&mut ghost.actor, world, flags);
        }
        GhostState::Eaten { bounty } => {
            // Frozen while the bounty is on display.
            if bounty > 0 {
                return;
            }
            ghost.actor.speed = ctx.level.ghost_speed * 2.0;
            if reached_house_entry(&ghost.actor, world) {
                trace!(ghost = %ghost.id, "Ghost reached the house");
                ghost.actor.position = layout.house_entry;
                ghost.actor.direction = Direction::Down;
                ghost.actor.wish_direction = Direction::Down;
                ghost.state = GhostState::EnteringHouse;
                return;
            }
            let target = tile_of(layout.house_entry);
            ghost.target_tile = Some(target);
            let flags = ghost.traversal_flags();
            steer(ghost, world, |actor| direction_towards(actor, target, world, flags, false));
            move_actor(&mut ghost.actor, world, flags);
        }
        GhostState::EnteringHouse => {
            let seat = layout.revival_seats[ghost.id.index()];
            if house::enter(&mut ghost.actor, seat) {
                debug!(ghost = %ghost.id, "Ghost revived");
                ghost.target_tile = None;
                ghost.state = GhostState::LeavingHouse;
            }
        }
    }
}
