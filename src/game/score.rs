//! Points, lives and the persisted high score.

use time::{Date, OffsetDateTime};

use crate::error::HighScoreError;

/// Score and lives of the current game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
    pub lives: u8,
    extra_life_score: u32,
}

impl Score {
    pub fn new(lives: u8, extra_life_score: u32) -> Self {
        Self {
            points: 0,
            lives,
            extra_life_score,
        }
    }

    /// Adds points. Returns true if this crossed the extra life threshold, in which case
    /// a life has been added. Points never decrease, so that happens once per game.
    pub fn add(&mut self, points: u32) -> bool {
        let before = self.points;
        self.points = self.points.saturating_add(points);
        let crossed = before < self.extra_life_score && self.points >= self.extra_life_score;
        if crossed {
            self.lives = self.lives.saturating_add(1);
        }
        crossed
    }
}

/// The best result so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    pub points: u32,
    pub level: u32,
    pub date: Option<Date>,
}

/// Where the high score lives between sessions.
pub trait HighScoreStore {
    fn load(&self) -> Result<HighScore, HighScoreError>;
    fn save(&mut self, points: u32, level: u32) -> Result<HighScore, HighScoreError>;
}

/// Keeps the high score in memory, stamping today's date on every save.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    record: HighScore,
}

impl MemoryHighScoreStore {
    pub fn new(record: HighScore) -> Self {
        Self { record }
    }

    pub fn record(&self) -> HighScore {
        self.record
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<HighScore, HighScoreError> {
        Ok(self.record)
    }

    fn save(&mut self, points: u32, level: u32) -> Result<HighScore, HighScoreError> {
        self.record = HighScore {
            points,
            level,
            date: Some(OffsetDateTime::now_utc().date()),
        };
        Ok(self.record)
    }
}
