use std::fmt;

use flagfall_core::events::{EventSink, MatchOutcome};
use flagfall_core::game_trait::ArenaGame;
use flagfall_core::team::Team;
use flagfall_ctf::CaptureTheFlag;

use crate::autopilot;

/// How a headless match ended.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub team: Team,
    pub ticks: u64,
    pub elapsed: f32,
    pub red_score: u32,
    pub blue_score: u32,
    pub winner: Option<Team>,
}

impl MatchSummary {
    /// Outcome from the player's side, if the match was decided.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.winner.map(|winner| {
            if winner == self.team {
                MatchOutcome::Victory
            } else {
                MatchOutcome::Defeat
            }
        })
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match self.outcome() {
            Some(MatchOutcome::Victory) => "VICTORY",
            Some(MatchOutcome::Defeat) => "DEFEAT",
            None => "UNDECIDED",
        };
        write!(
            f,
            "{result}: playing {} | red {} - blue {} | {} ticks ({:.1}s)",
            self.team, self.red_score, self.blue_score, self.ticks, self.elapsed
        )
    }
}

/// Play one match at a fixed step with the autopilot on `team`.
///
/// Runs until a winner is decided or `max_ticks` ticks have elapsed, without sleeping.
pub fn run_match(
    game: &mut CaptureTheFlag,
    team: Team,
    max_ticks: u64,
    sink: &mut dyn EventSink,
) -> MatchSummary {
    let dt = 1.0 / game.tick_rate();
    sink.notify_all(&game.start(team));

    while !game.is_match_complete() && game.state().tick < max_ticks {
        let intent = autopilot::steer(&game.snapshot());
        game.set_intent(intent);
        let events = game.update(dt);
        sink.notify_all(&events);
    }

    let state = game.state();
    if state.winner().is_none() {
        tracing::warn!(max_ticks, "Tick limit reached before a winner");
    }
    MatchSummary {
        team,
        ticks: state.tick,
        elapsed: state.elapsed,
        red_score: state.scoreboard.score(Team::Red),
        blue_score: state.scoreboard.score(Team::Blue),
        winner: state.winner(),
    }
}
