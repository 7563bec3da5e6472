use serde::{Deserialize, Serialize};

use flagfall_core::events::GuardId;
use flagfall_core::team::Team;

use crate::config::GuardSpawn;
use crate::territory::territory_of;

/// A guard walking back and forth along x between `start_x` and `start_x + patrol_width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guard {
    pub id: GuardId,
    /// Fixed at spawn from the side the guard starts on.
    pub team: Team,
    pub x: f32,
    pub y: f32,
    pub start_x: f32,
    pub patrol_width: f32,
    /// +1 moving right, -1 moving left.
    pub direction: f32,
    pub speed: f32,
}

impl Guard {
    pub fn spawn(id: GuardId, spawn: &GuardSpawn, speed: f32, arena_width: f32) -> Self {
        Self {
            id,
            team: territory_of(spawn.start_x, arena_width),
            x: spawn.start_x,
            y: spawn.y,
            start_x: spawn.start_x,
            patrol_width: spawn.patrol_width,
            direction: 1.0,
            speed,
        }
    }

    /// Advance one tick. The guard may overshoot its range for a tick before turning.
    pub fn advance(&mut self, dt: f32) {
        self.x += self.direction * self.speed * dt;

        if self.x > self.start_x + self.patrol_width {
            self.direction = -1.0;
        } else if self.x < self.start_x {
            self.direction = 1.0;
        }
    }

    /// Teleport back to the start of the patrol after being tagged.
    pub fn send_home(&mut self) {
        self.x = self.start_x;
    }
}
