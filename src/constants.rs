//! This module contains all the constants used by the simulation.

use glam::UVec2;

/// Number of simulation ticks per second of game time.
pub const TICKS_PER_SECOND: u32 = 60;

/// The size of each tile, in pixels.
pub const TILE_SIZE: i32 = 8;
/// Half of a tile, in pixels. Actor positions are tile centers plus an offset in `[-HALF_TILE, HALF_TILE)`.
pub const HALF_TILE: i32 = TILE_SIZE / 2;
/// The size of the game board, in tiles.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 36);

/// Pixels travelled per tick by an actor moving at full (100%) speed.
pub const BASE_SPEED: f32 = 1.25;
/// Speed fraction used by ghosts while moving inside the house.
pub const GHOST_HOUSE_SPEED: f32 = 0.5;
/// Half the height of the bounce performed by locked ghosts, in pixels.
pub const GHOST_BOUNCE_RANGE: f32 = 4.0;

/// Points awarded for a regular pellet.
pub const PELLET_POINTS: u32 = 10;
/// Points awarded for an energizer.
pub const ENERGIZER_POINTS: u32 = 50;
/// Bounty for the first ghost killed after an energizer; doubles per kill.
pub const FIRST_GHOST_BOUNTY: u32 = 200;
/// Awarded once all sixteen ghosts of a level have been eaten.
pub const ALL_GHOSTS_KILLED_POINTS: u32 = 12_000;
/// Number of ghost kills within a level that triggers [`ALL_GHOSTS_KILLED_POINTS`].
pub const ALL_GHOSTS_KILLED_COUNT: u32 = 16;

/// Ticks Pac stands still after eating a regular pellet.
pub const PELLET_REST_TICKS: u32 = 1;
/// Ticks Pac stands still after eating an energizer.
pub const ENERGIZER_REST_TICKS: u32 = 3;

/// Eaten-food counts at which the bonus fruit appears.
pub const BONUS_FOOD_COUNTS: [u32; 2] = [70, 170];
/// Minimum number of seconds the bonus stays edible. A random fraction of a second is added.
pub const BONUS_EDIBLE_SECONDS: u32 = 9;
/// Seconds the points of an eaten bonus stay on the board.
pub const BONUS_EATEN_SECONDS: u32 = 2;

/// Ticks before the end of power at which ghosts start flashing.
pub const POWER_FADING_TICKS: u32 = 2 * TICKS_PER_SECOND;

/// Converts a duration in seconds into ticks.
pub const fn seconds(seconds: u32) -> u32 {
    seconds * TICKS_PER_SECOND
}

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// An empty, walkable tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    Energizer,
    /// A tunnel tile, which slows down ghosts.
    Tunnel,
    /// The ghost house door.
    Door,
}

/// The raw layout of the arcade board, as a 2D array of characters.
///
/// The three top rows and the two bottom rows hold no maze; they are where the score and lives are shown.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "                            ",
    "                            ",
    "                            ",
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##          ##.#     ",
    "     #.## ###==### ##.#     ",
    "######.## #      # ##.######",
    "TTTTTT.   #      #   .TTTTTT",
    "######.## #      # ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......  .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
    "                            ",
    "                            ",
];
