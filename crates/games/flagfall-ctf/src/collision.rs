use smallvec::SmallVec;

use flagfall_core::events::{FlagId, GuardId, MatchEvent};
use flagfall_core::team::Team;

use super::MatchState;
use crate::config::MatchConfig;
use crate::scoring::CaptureResult;
use crate::territory::is_enemy_territory;

/// Center-anchored axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Aabb {
    pub fn centered(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            half_w: width / 2.0,
            half_h: height / 2.0,
        }
    }

    /// Strict overlap: boxes that only share an edge do not touch.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.x - other.x).abs() < self.half_w + other.half_w
            && (self.y - other.y).abs() < self.half_h + other.half_h
    }
}

/// Something the player is touching this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Flag(FlagId),
    Base(Team),
    Guard(GuardId),
}

/// What happened when the player touched a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOutcome {
    /// Player was on the enemy side and went back to spawn.
    PlayerTagged,
    /// Player was on their own side; the guard went back to its start.
    GuardTagged,
}

/// Collect every overlap between the player and the world, in resolution order:
/// visible flags by id, then bases, then guards.
pub fn detect_contacts(state: &MatchState, config: &MatchConfig) -> SmallVec<[Contact; 8]> {
    let player = Aabb::centered(
        state.player.x,
        state.player.y,
        config.player_size,
        config.player_size,
    );
    let mut contacts = SmallVec::new();

    for flag in state.flags.iter().filter(|f| !f.hidden) {
        let hitbox = Aabb::centered(flag.x, flag.y, config.flag_width, config.flag_height);
        if player.overlaps(&hitbox) {
            contacts.push(Contact::Flag(flag.id));
        }
    }

    for base in &state.bases {
        let hitbox = Aabb::centered(base.x, base.y, config.base_size, config.base_size);
        if player.overlaps(&hitbox) {
            contacts.push(Contact::Base(base.team));
        }
    }

    for guard in &state.guards {
        let hitbox = Aabb::centered(guard.x, guard.y, config.guard_size, config.guard_size);
        if player.overlaps(&hitbox) {
            contacts.push(Contact::Guard(guard.id));
        }
    }

    contacts
}

/// Apply the match rules to this tick's contacts, in order.
///
/// Stops early once the match is won, or once the player has been tagged (the
/// remaining contacts were measured at the position the player just left).
pub fn resolve_contacts(
    state: &mut MatchState,
    config: &MatchConfig,
    contacts: &[Contact],
    events: &mut Vec<MatchEvent>,
) {
    for &contact in contacts {
        if state.scoreboard.winner().is_some() {
            break;
        }
        match contact {
            Contact::Flag(flag) => pick_up_flag(state, flag, events),
            Contact::Base(team) => capture_at_base(state, team, events),
            Contact::Guard(guard) => {
                if tag(state, config, guard, events) == TagOutcome::PlayerTagged {
                    break;
                }
            },
        }
    }
}

/// Player touched a flag: take it if it is an enemy flag and the player's hands are free.
pub fn pick_up_flag(state: &mut MatchState, flag_id: FlagId, events: &mut Vec<MatchEvent>) {
    let team = state.player.team;
    if !state.player.possession.try_pick_up(team, flag_id) {
        return;
    }

    let flag = state.flags.iter_mut().find(|f| f.id == flag_id);
    debug_assert!(flag.is_some(), "picked up a flag that is not in the world");
    if let Some(flag) = flag {
        flag.hidden = true;
    }

    tracing::debug!(flag = ?flag_id, "Flag picked up");
    events.push(MatchEvent::FlagPickedUp { flag: flag_id });
}

/// Player touched a base: a carried flag handed in at the player's own base is captured.
pub fn capture_at_base(state: &mut MatchState, base_team: Team, events: &mut Vec<MatchEvent>) {
    let team = state.player.team;
    let Some(flag_id) = state.player.possession.try_capture(team, base_team) else {
        return;
    };

    let before = state.flags.len();
    state.flags.retain(|f| f.id != flag_id);
    debug_assert_eq!(
        before,
        state.flags.len() + 1,
        "captured flag must be removed exactly once"
    );

    let result = state.scoreboard.record_capture(team);
    debug_assert_ne!(
        result,
        CaptureResult::Rejected,
        "capture recorded after the match was decided"
    );
    let (CaptureResult::Scored { score } | CaptureResult::Won { score }) = result else {
        return;
    };

    tracing::info!(%team, flag = ?flag_id, score, "Flag captured");
    events.push(MatchEvent::FlagCaptured {
        flag: flag_id,
        team,
        score,
    });
}

/// Player touched a guard. The side of the arena the player stands on decides who is tagged.
pub fn tag(
    state: &mut MatchState,
    config: &MatchConfig,
    guard_id: GuardId,
    events: &mut Vec<MatchEvent>,
) -> TagOutcome {
    let team = state.player.team;
    let (x, y) = (state.player.x, state.player.y);

    if is_enemy_territory(team, x, state.arena.width) {
        let dropped = state.player.possession.take();
        if let Some(flag_id) = dropped
            && let Some(flag) = state.flags.iter_mut().find(|f| f.id == flag_id)
        {
            flag.hidden = false;
            flag.x = x;
            flag.y = y;
        }

        let (spawn_x, spawn_y) = state.arena.home_point(team, config.spawn_inset);
        state.player.x = spawn_x;
        state.player.y = spawn_y;

        tracing::debug!(guard = guard_id.0, x, y, ?dropped, "Player tagged");
        events.push(MatchEvent::PlayerTagged { x, y, dropped });
        TagOutcome::PlayerTagged
    } else {
        let guard = state.guards.iter_mut().find(|g| g.id == guard_id);
        debug_assert!(guard.is_some(), "tagged a guard that does not exist");
        if let Some(guard) = guard {
            guard.send_home();
        }

        tracing::debug!(guard = guard_id.0, "Guard tagged");
        events.push(MatchEvent::GuardTagged { guard: guard_id });
        TagOutcome::GuardTagged
    }
}
