use serde::{Deserialize, Serialize};

use crate::events::MatchEvent;
use crate::team::Team;

/// Core trait a Flagfall rules engine implements.
///
/// The host owns input collection, rendering and sound; the engine only
/// advances the match and reports what happened.
pub trait ArenaGame: Send + Sync {
    /// Game metadata for the host's title screen.
    fn metadata(&self) -> GameMetadata;

    /// Match-start signal: reset all state for a human player on `team`.
    fn start(&mut self, team: Team) -> Vec<MatchEvent>;

    /// Advance one tick. Returns the events raised during the tick.
    fn update(&mut self, dt: f32) -> Vec<MatchEvent>;

    /// Apply an encoded input message for the next tick.
    fn apply_input(&mut self, input: &[u8]);

    /// Serialize the full match state.
    fn serialize_state(&self) -> Vec<u8>;

    /// Replace the match state with a previously serialized one.
    fn apply_state(&mut self, state: &[u8]);

    /// Simulation tick rate in Hz.
    fn tick_rate(&self) -> f32 {
        60.0
    }

    /// Whether a winner has been decided.
    fn is_match_complete(&self) -> bool;

    /// The winning team, once decided.
    fn winner(&self) -> Option<Team>;
}

/// Game metadata for the host's title screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub win_threshold: u32,
}

/// Generates the `ArenaGame` methods that only touch the serializable state:
/// `serialize_state`, `apply_state`, `is_match_complete`, `winner`.
///
/// Requires the implementing struct to have a `state: $StateType` field, and
/// `$StateType` to expose `fn winner(&self) -> Option<Team>`.
#[macro_export]
macro_rules! arena_game_boilerplate {
    (state_type: $StateType:ty) => {
        fn serialize_state(&self) -> Vec<u8> {
            rmp_serde::to_vec(&self.state).expect("match state serialization must succeed")
        }

        fn apply_state(&mut self, state: &[u8]) {
            match rmp_serde::from_slice::<$StateType>(state) {
                Ok(s) => self.state = s,
                Err(e) => tracing::debug!(error = %e, "Ignored undecodable match state"),
            }
        }

        fn is_match_complete(&self) -> bool {
            self.state.winner().is_some()
        }

        fn winner(&self) -> Option<$crate::team::Team> {
            self.state.winner()
        }
    };
}
