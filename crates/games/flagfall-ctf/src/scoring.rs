use serde::{Deserialize, Serialize};

use flagfall_core::team::Team;

/// Capture counts per team and the terminal winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    red: u32,
    blue: u32,
    threshold: u32,
    winner: Option<Team>,
}

/// Result of recording one capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureResult {
    /// Score went up, no winner yet.
    Scored { score: u32 },
    /// Score went up and reached the threshold; reported exactly once.
    Won { score: u32 },
    /// The match already has a winner; nothing changed.
    Rejected,
}

impl Scoreboard {
    pub fn new(threshold: u32) -> Self {
        Self {
            red: 0,
            blue: 0,
            threshold,
            winner: None,
        }
    }

    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Credit `team` with one capture and check the win condition.
    pub fn record_capture(&mut self, team: Team) -> CaptureResult {
        if self.winner.is_some() {
            return CaptureResult::Rejected;
        }

        let score = match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        };
        *score += 1;
        let score = *score;

        if score >= self.threshold {
            self.winner = Some(team);
            CaptureResult::Won { score }
        } else {
            CaptureResult::Scored { score }
        }
    }
}
