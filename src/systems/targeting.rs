//! Where each ghost wants to go, and which way it turns to get there.
//!
//! Everything here is a pure function of the positions handed in.

use glam::IVec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::entity::ghost::GhostId;
use crate::entity::Actor;
use crate::map::direction::Direction;
use crate::map::world::{TraversalFlags, World};

/// Clyde retreats to his corner when closer to Pac than this many tiles.
pub const CLYDE_SHYNESS_DISTANCE: f32 = 8.0;

/// The tile `tiles` steps ahead of Pac.
///
/// Facing up also shifts the result the same amount to the left, as the arcade
/// hardware did through an overflow in its vector math.
pub fn tiles_ahead(pac_tile: IVec2, pac_direction: Direction, tiles: i32) -> IVec2 {
    let ahead = pac_tile + pac_direction.as_ivec2() * tiles;
    match pac_direction {
        Direction::Up => ahead + IVec2::new(-tiles, 0),
        _ => ahead,
    }
}

/// What a ghost needs to know about the others to pick its chase target.
#[derive(Debug, Clone, Copy)]
pub struct ChaseInput {
    pub pac_tile: IVec2,
    pub pac_direction: Direction,
    pub blinky_tile: IVec2,
    pub ghost_tile: IVec2,
    pub scatter_tile: IVec2,
}

/// The chase target of a ghost role.
pub fn chase_target(id: GhostId, input: &ChaseInput) -> IVec2 {
    match id {
        GhostId::Blinky => input.pac_tile,
        GhostId::Pinky => tiles_ahead(input.pac_tile, input.pac_direction, 4),
        GhostId::Inky => {
            let pivot = tiles_ahead(input.pac_tile, input.pac_direction, 2);
            pivot * 2 - input.blinky_tile
        }
        GhostId::Clyde => {
            let distance = input.ghost_tile.as_vec2().distance(input.pac_tile.as_vec2());
            if distance >= CLYDE_SHYNESS_DISTANCE {
                input.pac_tile
            } else {
                input.scatter_tile
            }
        }
    }
}

/// Directions the actor may take from its tile: never backwards, never into a blocked tile.
fn candidate_directions(actor: &Actor, world: &World, flags: TraversalFlags) -> SmallVec<[Direction; 4]> {
    let tile = actor.tile();
    let reverse = actor.direction.opposite();
    Direction::PRIORITY
        .into_iter()
        .filter(|&dir| dir != reverse && world.is_accessible(tile + dir.as_ivec2(), flags))
        .collect()
}

/// The direction bringing the actor closest to `target`, measured from the neighbor tile.
///
/// Ties go to the earlier entry of [`Direction::PRIORITY`]. With `honor_one_way`, up is
/// never picked on one-way tiles. Returns `None` only when every way but back is blocked.
pub fn direction_towards(
    actor: &Actor,
    target: IVec2,
    world: &World,
    flags: TraversalFlags,
    honor_one_way: bool,
) -> Option<Direction> {
    let tile = actor.tile();
    let one_way = honor_one_way && world.is_one_way(tile);

    let mut best: Option<(Direction, i32)> = None;
    for dir in candidate_directions(actor, world, flags) {
        if one_way && dir == Direction::Up {
            continue;
        }
        let distance = (tile + dir.as_ivec2() - target).length_squared();
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((dir, distance));
        }
    }
    best.map(|(dir, _)| dir)
}

/// A uniformly random non-reversing direction, as picked by frightened ghosts.
pub fn random_direction<R: Rng + ?Sized>(
    actor: &Actor,
    world: &World,
    flags: TraversalFlags,
    rng: &mut R,
) -> Option<Direction> {
    candidate_directions(actor, world, flags).choose(rng).copied()
}
