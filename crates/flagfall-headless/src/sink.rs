use flagfall_core::events::{EventSink, MatchEvent};

/// Event sink that writes every match event to the tracing log and keeps tallies.
#[derive(Debug, Default)]
pub struct LogSink {
    pub pickups: u32,
    pub captures: u32,
    pub player_tags: u32,
    pub guard_tags: u32,
}

impl EventSink for LogSink {
    fn notify(&mut self, event: &MatchEvent) {
        let cue = event.cue();
        match event {
            MatchEvent::MatchStarted { team } => {
                tracing::info!(%team, ?cue, "Kickoff");
            },
            MatchEvent::FlagPickedUp { flag } => {
                self.pickups += 1;
                tracing::info!(owner = %flag.team, index = flag.index, ?cue, "Flag picked up");
            },
            MatchEvent::FlagCaptured { flag, team, score } => {
                self.captures += 1;
                tracing::info!(%team, score, owner = %flag.team, index = flag.index, ?cue, "Flag captured");
            },
            MatchEvent::PlayerTagged { x, y, dropped } => {
                self.player_tags += 1;
                tracing::info!(x, y, ?dropped, ?cue, "Player tagged");
            },
            MatchEvent::GuardTagged { guard } => {
                self.guard_tags += 1;
                tracing::info!(guard = guard.0, ?cue, "Guard tagged");
            },
            MatchEvent::MatchWon { winner, outcome } => {
                tracing::info!(%winner, ?outcome, ?cue, "Match over");
            },
        }
    }
}
