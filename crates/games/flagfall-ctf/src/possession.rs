use serde::{Deserialize, Serialize};

use flagfall_core::events::FlagId;
use flagfall_core::team::Team;

/// What the player is holding. Carrying always names exactly one flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Possession {
    #[default]
    Empty,
    Carrying(FlagId),
}

impl Possession {
    pub fn carried(&self) -> Option<FlagId> {
        match *self {
            Possession::Empty => None,
            Possession::Carrying(flag) => Some(flag),
        }
    }

    pub fn is_carrying(&self) -> bool {
        matches!(self, Possession::Carrying(_))
    }

    /// Pick up `flag` if it belongs to the other team and nothing is carried yet.
    ///
    /// Returns whether the pickup happened. A second enemy flag is ignored.
    pub fn try_pick_up(&mut self, player_team: Team, flag: FlagId) -> bool {
        if flag.team == player_team || self.is_carrying() {
            return false;
        }
        *self = Possession::Carrying(flag);
        true
    }

    /// Hand in the carried flag at a base. Only the player's own base accepts it.
    pub fn try_capture(&mut self, player_team: Team, base_team: Team) -> Option<FlagId> {
        if base_team != player_team {
            return None;
        }
        self.take()
    }

    /// Let go of the carried flag (player tagged).
    pub fn take(&mut self) -> Option<FlagId> {
        std::mem::take(self).carried()
    }
}
