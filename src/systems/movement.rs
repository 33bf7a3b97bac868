use glam::Vec2;
use tracing::trace;

use crate::constants::BASE_SPEED;
use crate::entity::Actor;
use crate::map::direction::Direction;
use crate::map::world::{tile_center, tile_of, TraversalFlags, World};

/// Attempts to move the actor one tick in `direction`.
///
/// Returns false when the maze does not allow the move this tick. A failed attempt
/// may still nudge the actor onto the tile center, either while turning onto a new
/// track or when stopping in front of a wall.
pub fn try_move(actor: &mut Actor, direction: Direction, world: &World, flags: TraversalFlags) -> bool {
    actor.changed_tile = false;
    let tile = actor.tile();

    if let Some(exit) = world.portal_exit(tile, direction) {
        trace!(from = ?tile, to = ?exit, "Teleporting through portal");
        actor.place_at(exit, Vec2::ZERO);
        actor.changed_tile = true;
        return true;
    }

    let pixels = actor.speed * BASE_SPEED;
    let neighbor = tile + direction.as_ivec2();
    let neighbor_accessible = world.is_accessible(neighbor, flags);

    if actor.forced_on_track && neighbor_accessible {
        let offset = actor.offset();
        let (perpendicular, snapped) = if direction.is_horizontal() {
            (offset.y, Vec2::new(offset.x, 0.0))
        } else {
            (offset.x, Vec2::new(0.0, offset.y))
        };
        // Still too far from the center line to turn.
        if perpendicular.abs() > pixels {
            return false;
        }
        actor.set_offset(snapped);
    }

    let new_position = actor.position + direction.as_vec2() * pixels;
    let new_tile = tile_of(new_position);
    if !world.is_accessible(new_tile, flags) {
        return false;
    }

    if !neighbor_accessible {
        let new_offset = new_position - tile_center(tile);
        let past_center = match direction {
            Direction::Up => new_offset.y < 0.0,
            Direction::Down => new_offset.y > 0.0,
            Direction::Left => new_offset.x < 0.0,
            Direction::Right => new_offset.x > 0.0,
        };
        if past_center {
            let offset = actor.offset();
            actor.set_offset(if direction.is_horizontal() {
                Vec2::new(0.0, offset.y)
            } else {
                Vec2::new(offset.x, 0.0)
            });
            return false;
        }
    }

    actor.position = new_position;
    actor.changed_tile = new_tile != tile;
    true
}

/// Moves the actor in its wished direction if possible, otherwise keeps it going
/// the way it was heading. The wished direction becomes current once it works.
pub fn move_actor(actor: &mut Actor, world: &World, flags: TraversalFlags) {
    let wish = actor.wish_direction;
    if try_move(actor, wish, world, flags) {
        actor.direction = wish;
        actor.could_move = true;
        return;
    }
    let direction = actor.direction;
    actor.could_move = try_move(actor, direction, world, flags);
}
