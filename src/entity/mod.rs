//! Actors and the other things living on the board.

pub mod bonus;
pub mod ghost;
pub mod pacman;

use glam::{IVec2, Vec2};

use crate::map::direction::Direction;
use crate::map::world::{tile_center, tile_of};

/// The moving part shared by Pac and every ghost.
///
/// `position` is the pixel center of the actor. The tile and the offset from that
/// tile's center are derived from it, so the pair is always consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub position: Vec2,
    pub direction: Direction,
    /// The direction the actor wants to take as soon as the maze allows it.
    pub wish_direction: Direction,
    /// Fraction of [`crate::constants::BASE_SPEED`].
    pub speed: f32,
    /// Set when the last successful move entered a new tile.
    pub changed_tile: bool,
    /// Keeps the actor centered on the axis perpendicular to its travel when turning.
    pub forced_on_track: bool,
    /// Whether the last call to [`crate::systems::movement::move_actor`] moved the actor.
    pub could_move: bool,
}

impl Actor {
    pub fn new(position: Vec2, direction: Direction) -> Self {
        Self {
            position,
            direction,
            wish_direction: direction,
            speed: 0.0,
            changed_tile: false,
            forced_on_track: false,
            could_move: false,
        }
    }

    /// Repositions the actor, facing `direction`, with every movement flag cleared.
    pub fn reset(&mut self, position: Vec2, direction: Direction) {
        *self = Self::new(position, direction);
    }

    /// The tile containing the actor's center.
    pub fn tile(&self) -> IVec2 {
        tile_of(self.position)
    }

    /// Offset of the actor's center from its tile's center, in `[-4, 4)` on both axes.
    pub fn offset(&self) -> Vec2 {
        self.position - tile_center(self.tile())
    }

    /// Moves the actor to the given tile, keeping `offset` from its center.
    pub fn place_at(&mut self, tile: IVec2, offset: Vec2) {
        self.position = tile_center(tile) + offset;
    }

    /// Replaces the offset within the current tile.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.place_at(self.tile(), offset);
    }
}
