//! Scatter and chase phases of the hunt.

use tracing::debug;

use crate::constants::seconds;
use crate::game::state::Countdown;

/// Number of phases in a hunt. The last one never ends.
pub const PHASE_COUNT: usize = 8;

/// Finite phase durations in ticks, per level tier (level 1, levels 2-4, level 5 and up).
const PHASE_TICKS: [[u32; PHASE_COUNT - 1]; 3] = [
    [seconds(7), seconds(20), seconds(7), seconds(20), seconds(5), seconds(20), seconds(5)],
    [seconds(7), seconds(20), seconds(7), seconds(20), seconds(5), seconds(1033), 1],
    [seconds(5), seconds(20), seconds(5), seconds(20), seconds(5), seconds(1037), 1],
];

fn tier(level_number: u32) -> usize {
    match level_number {
        0 | 1 => 0,
        2..=4 => 1,
        _ => 2,
    }
}

/// How long a phase lasts on a given level.
pub fn phase_duration(level_number: u32, phase: usize) -> Countdown {
    PHASE_TICKS[tier(level_number)]
        .get(phase)
        .map_or(Countdown::Indefinite, |&ticks| Countdown::Remaining(ticks))
}

/// Even phases scatter, odd phases chase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HuntingTimer {
    phase: usize,
    countdown: Countdown,
}

impl HuntingTimer {
    /// Starts over at the first scatter phase.
    pub fn reset(&mut self, level_number: u32) {
        self.start_phase(level_number, 0);
    }

    /// Jumps straight to `phase`, with that phase's full duration.
    pub fn start_phase(&mut self, level_number: u32, phase: usize) {
        self.phase = phase;
        self.countdown = phase_duration(level_number, phase);
        debug!(phase, chasing = self.is_chasing(), ticks = ?self.countdown.remaining(), "Hunting phase started");
    }

    /// Advances the timer by one tick. Returns the new phase if one started.
    pub fn tick(&mut self, level_number: u32) -> Option<usize> {
        self.countdown.tick();
        if self.countdown.is_expired() && self.phase + 1 < PHASE_COUNT {
            self.start_phase(level_number, self.phase + 1);
            return Some(self.phase);
        }
        None
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn remaining(&self) -> Option<u32> {
        self.countdown.remaining()
    }

    pub fn is_chasing(&self) -> bool {
        self.phase % 2 == 1
    }

    pub fn is_scattering(&self) -> bool {
        !self.is_chasing()
    }
}
