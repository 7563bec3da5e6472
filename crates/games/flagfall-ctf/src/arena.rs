use serde::{Deserialize, Serialize};

use flagfall_core::team::Team;

use crate::territory::territory_of;

/// Fixed rectangular play field split by a vertical midline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// x coordinate of the territory divider. Derived from the width only.
    pub fn midline(&self) -> f32 {
        self.width / 2.0
    }

    pub fn territory_of(&self, x: f32) -> Team {
        territory_of(x, self.width)
    }

    /// A point `inset` units in from `team`'s own side wall, on the horizontal center line.
    pub fn home_point(&self, team: Team, inset: f32) -> (f32, f32) {
        let x = match team {
            Team::Red => inset,
            Team::Blue => self.width - inset,
        };
        (x, self.height / 2.0)
    }

    /// Clamp a center position so a box with the given half extents stays inside.
    ///
    /// NaN bounds are ignored rather than propagated.
    pub fn clamp(&self, x: f32, y: f32, half_w: f32, half_h: f32) -> (f32, f32) {
        (
            x.max(half_w).min((self.width - half_w).max(half_w)),
            y.max(half_h).min((self.height - half_h).max(half_h)),
        )
    }
}
