//! The tile grid every actor moves on.
//!
//! Topology (walls, tunnels, door, portals) never changes once built. Only the
//! food-eaten set is mutable, and it is reset at the start of every level.

use bitflags::bitflags;
use glam::{IVec2, UVec2, Vec2};
use smallvec::SmallVec;

use crate::constants::{MapTile, HALF_TILE, RAW_BOARD, TILE_SIZE};
use crate::error::GameResult;
use crate::map::direction::Direction;
use crate::map::parser::{MapTileParser, ParsedMap};

bitflags! {
    /// Who is asking whether a tile can be entered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TraversalFlags: u8 {
        const PACMAN = 1 << 0;
        const GHOST = 1 << 1;
        /// Set for ghosts currently entering or leaving the house.
        const DOOR = 1 << 2;
    }
}

/// Returns the tile containing a pixel position.
pub fn tile_of(position: Vec2) -> IVec2 {
    (position / TILE_SIZE as f32).floor().as_ivec2()
}

/// Returns the pixel position of a tile's center.
pub fn tile_center(tile: IVec2) -> Vec2 {
    (tile * TILE_SIZE + IVec2::splat(HALF_TILE)).as_vec2()
}

/// A pair of off-board tiles connecting the two ends of a tunnel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portal {
    pub left: IVec2,
    pub right: IVec2,
}

/// Fixed positions of a maze that cannot be expressed in the tile characters.
///
/// Positions are pixel centers; many of them sit between two tiles.
/// Arrays indexed per ghost follow the order Blinky, Pinky, Inky, Clyde.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub pac_start: Vec2,
    pub pac_start_direction: Direction,
    /// Just above the door. Dead ghosts aim here, and leaving ghosts become active here.
    pub house_entry: Vec2,
    pub ghost_starts: [Vec2; 4],
    pub ghost_start_directions: [Direction; 4],
    /// Where a dead ghost goes to be revived.
    pub revival_seats: [Vec2; 4],
    pub scatter_targets: [IVec2; 4],
    pub bonus_position: Vec2,
    /// Tiles ghosts may not leave upward while hunting.
    pub one_way_tiles: SmallVec<[IVec2; 4]>,
}

impl Layout {
    /// The layout of the arcade maze in [`RAW_BOARD`].
    pub fn arcade() -> Self {
        // x.5 tile positions land on the left edge of the following tile.
        let house_entry = Vec2::new(112.0, 116.0); // 13.5, 14
        let center_seat = Vec2::new(112.0, 140.0); // 13.5, 17
        let left_seat = Vec2::new(96.0, 140.0); // 11.5, 17
        let right_seat = Vec2::new(128.0, 140.0); // 15.5, 17

        Self {
            pac_start: Vec2::new(112.0, 212.0), // 13.5, 26
            pac_start_direction: Direction::Left,
            house_entry,
            ghost_starts: [house_entry, center_seat, left_seat, right_seat],
            ghost_start_directions: [Direction::Left, Direction::Down, Direction::Up, Direction::Up],
            revival_seats: [center_seat, center_seat, left_seat, right_seat],
            scatter_targets: [IVec2::new(25, 0), IVec2::new(2, 0), IVec2::new(27, 35), IVec2::new(0, 35)],
            bonus_position: Vec2::new(112.0, 164.0), // 13.5, 20
            one_way_tiles: SmallVec::from_buf([
                IVec2::new(12, 14),
                IVec2::new(15, 14),
                IVec2::new(12, 26),
                IVec2::new(15, 26),
            ]),
        }
    }
}

/// The maze: static topology plus the food still on the board.
#[derive(Debug, Clone)]
pub struct World {
    size: UVec2,
    tiles: Vec<MapTile>,
    house_door: [IVec2; 2],
    portals: SmallVec<[Portal; 2]>,
    layout: Layout,
    eaten: Vec<bool>,
    total_food: u32,
    eaten_count: u32,
}

impl World {
    /// Builds a world from an already parsed board.
    pub fn new(parsed: ParsedMap, layout: Layout) -> Self {
        let width = parsed.size.x as i32;
        let portals = parsed
            .portal_rows
            .iter()
            .map(|&y| Portal {
                left: IVec2::new(-1, y),
                right: IVec2::new(width, y),
            })
            .collect();
        let total_food = parsed
            .tiles
            .iter()
            .filter(|tile| matches!(tile, MapTile::Pellet | MapTile::Energizer))
            .count() as u32;

        Self {
            size: parsed.size,
            eaten: vec![false; parsed.tiles.len()],
            tiles: parsed.tiles,
            house_door: parsed.house_door,
            portals,
            layout,
            total_food,
            eaten_count: 0,
        }
    }

    /// Parses a textual board and builds a world from it.
    pub fn parse(raw_board: &[&str], layout: Layout) -> GameResult<Self> {
        let parsed = MapTileParser::parse_board(raw_board)?;
        Ok(Self::new(parsed, layout))
    }

    /// The arcade maze.
    pub fn arcade() -> GameResult<Self> {
        Self::parse(&RAW_BOARD, Layout::arcade())
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn house_door(&self) -> [IVec2; 2] {
        self.house_door
    }

    fn index(&self, tile: IVec2) -> Option<usize> {
        let inside = tile.x >= 0 && tile.y >= 0 && (tile.x as u32) < self.size.x && (tile.y as u32) < self.size.y;
        inside.then(|| tile.y as usize * self.size.x as usize + tile.x as usize)
    }

    /// The tile at the given position, or `None` outside the board.
    pub fn tile(&self, tile: IVec2) -> Option<MapTile> {
        self.index(tile).map(|i| self.tiles[i])
    }

    pub fn is_wall(&self, tile: IVec2) -> bool {
        self.tile(tile) == Some(MapTile::Wall)
    }

    pub fn is_door(&self, tile: IVec2) -> bool {
        self.tile(tile) == Some(MapTile::Door)
    }

    pub fn is_portal(&self, tile: IVec2) -> bool {
        self.portals.iter().any(|p| p.left == tile || p.right == tile)
    }

    /// Tunnel tiles, including the portals at their ends.
    pub fn is_tunnel(&self, tile: IVec2) -> bool {
        self.tile(tile) == Some(MapTile::Tunnel) || self.is_portal(tile)
    }

    pub fn is_one_way(&self, tile: IVec2) -> bool {
        self.layout.one_way_tiles.contains(&tile)
    }

    /// Whether a tile may be entered. Walls and off-board tiles block everyone
    /// except through portals; the door only lets ghosts with [`TraversalFlags::DOOR`] through.
    pub fn is_accessible(&self, tile: IVec2, flags: TraversalFlags) -> bool {
        if self.is_portal(tile) {
            return true;
        }
        match self.tile(tile) {
            None | Some(MapTile::Wall) => false,
            Some(MapTile::Door) => flags.contains(TraversalFlags::DOOR),
            Some(_) => true,
        }
    }

    /// If `tile` is a portal and `direction` leads off the board, returns the paired portal.
    pub fn portal_exit(&self, tile: IVec2, direction: Direction) -> Option<IVec2> {
        self.portals.iter().find_map(|p| match direction {
            Direction::Right if tile == p.right => Some(p.left),
            Direction::Left if tile == p.left => Some(p.right),
            _ => None,
        })
    }

    /// Whether food was originally placed on this tile.
    pub fn is_food_tile(&self, tile: IVec2) -> bool {
        matches!(self.tile(tile), Some(MapTile::Pellet | MapTile::Energizer))
    }

    pub fn is_energizer_tile(&self, tile: IVec2) -> bool {
        self.tile(tile) == Some(MapTile::Energizer)
    }

    /// Whether uneaten food lies on this tile.
    pub fn has_food(&self, tile: IVec2) -> bool {
        self.index(tile)
            .is_some_and(|i| matches!(self.tiles[i], MapTile::Pellet | MapTile::Energizer) && !self.eaten[i])
    }

    /// Removes the food from a tile. Returns false if there was none.
    pub fn remove_food(&mut self, tile: IVec2) -> bool {
        if !self.has_food(tile) {
            return false;
        }
        if let Some(i) = self.index(tile) {
            self.eaten[i] = true;
            self.eaten_count += 1;
        }
        true
    }

    /// Every tile still holding food, row by row.
    pub fn food_tiles(&self) -> impl Iterator<Item = IVec2> + '_ {
        let width = self.size.x as i32;
        (0..self.tiles.len())
            .map(move |i| IVec2::new(i as i32 % width, i as i32 / width))
            .filter(|&tile| self.has_food(tile))
    }

    /// Puts every piece of food back.
    pub fn reset_food(&mut self) {
        self.eaten.fill(false);
        self.eaten_count = 0;
    }

    pub fn total_food(&self) -> u32 {
        self.total_food
    }

    pub fn eaten_count(&self) -> u32 {
        self.eaten_count
    }

    pub fn food_remaining(&self) -> u32 {
        self.total_food - self.eaten_count
    }
}
