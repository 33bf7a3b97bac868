//! The rules of the game, as functions over explicitly passed state.

pub mod ghost;
pub mod house;
pub mod hunting;
pub mod movement;
pub mod targeting;
