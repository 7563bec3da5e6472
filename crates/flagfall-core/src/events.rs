use serde::{Deserialize, Serialize};

use crate::team::Team;

/// Identifies one flag: its home team and its slot among that team's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FlagId {
    pub team: Team,
    pub index: u8,
}

/// Identifies one patrolling guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuardId(pub u8);

/// How the match ended from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Victory,
    Defeat,
}

/// Discrete state transitions emitted by the rules engine during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    MatchStarted { team: Team },
    FlagPickedUp { flag: FlagId },
    FlagCaptured { flag: FlagId, team: Team, score: u32 },
    /// The player was tagged in enemy territory at `(x, y)` and sent back to spawn.
    PlayerTagged {
        x: f32,
        y: f32,
        dropped: Option<FlagId>,
    },
    GuardTagged { guard: GuardId },
    MatchWon { winner: Team, outcome: MatchOutcome },
}

/// Presentation cue a renderer or sound layer may attach to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCue {
    GameMusic,
    PickupJingle,
    CaptureArpeggio,
    TaggedDescent,
    GuardPunch,
    VictoryFanfare,
    DefeatTrombone,
}

impl MatchEvent {
    pub fn cue(&self) -> EventCue {
        match self {
            MatchEvent::MatchStarted { .. } => EventCue::GameMusic,
            MatchEvent::FlagPickedUp { .. } => EventCue::PickupJingle,
            MatchEvent::FlagCaptured { .. } => EventCue::CaptureArpeggio,
            MatchEvent::PlayerTagged { .. } => EventCue::TaggedDescent,
            MatchEvent::GuardTagged { .. } => EventCue::GuardPunch,
            MatchEvent::MatchWon {
                outcome: MatchOutcome::Victory,
                ..
            } => EventCue::VictoryFanfare,
            MatchEvent::MatchWon {
                outcome: MatchOutcome::Defeat,
                ..
            } => EventCue::DefeatTrombone,
        }
    }

    /// Whether this event ends the match.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchEvent::MatchWon { .. })
    }
}

/// Consumer of match events (renderer, sound layer, logger, recorder).
pub trait EventSink {
    fn notify(&mut self, event: &MatchEvent);

    fn notify_all(&mut self, events: &[MatchEvent]) {
        for event in events {
            self.notify(event);
        }
    }
}

impl EventSink for Vec<MatchEvent> {
    fn notify(&mut self, event: &MatchEvent) {
        self.push(event.clone());
    }
}
