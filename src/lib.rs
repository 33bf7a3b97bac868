//! Deterministic simulation core of an arcade Pac-Man game.
//!
//! A [`game::Game`] owns the maze, Pac, the four ghosts and every timer. It moves
//! forward one fixed tick at a time through [`game::Game::advance`], which turns a
//! [`events::TickInput`] into a [`game::facts::FrameFacts`] record for whatever
//! presents the game.

pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod map;
pub mod systems;
