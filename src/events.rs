use smallvec::SmallVec;

use crate::map::direction::Direction;

/// Named triggers fed into the simulation alongside the movement intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameCommand {
    /// Starts a new game from the intro.
    Start,
    /// Leaves the game over screen early.
    Restart,
    EatAllPellets,
    KillAllGhosts,
    AddLife,
    NextLevel,
}

/// Everything the outside world tells the simulation for one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub direction: Option<Direction>,
    pub commands: SmallVec<[GameCommand; 2]>,
}

impl TickInput {
    /// Input asking Pac to head somewhere.
    pub fn steer(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            ..Default::default()
        }
    }

    /// Input carrying a single command.
    pub fn command(command: GameCommand) -> Self {
        Self {
            commands: SmallVec::from_elem(command, 1),
            ..Default::default()
        }
    }

    pub fn has(&self, command: GameCommand) -> bool {
        self.commands.contains(&command)
    }
}
