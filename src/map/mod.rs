//! Maze representation: directions, the board parser, and the tile grid.

pub mod direction;
pub mod parser;
pub mod world;
