use serde::{Deserialize, Serialize};

use flagfall_core::events::{FlagId, GuardId};
use flagfall_core::team::Team;

use super::MatchState;
use crate::config::MatchConfig;

/// Kind of a rendered entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Player { carrying: Option<FlagId> },
    Flag(FlagId),
    Base,
    Guard(GuardId),
}

/// One entity as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub team: Team,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
}

/// Read-only render feed for one tick, in draw order (bases, flags, guards, player).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub arena_width: f32,
    pub arena_height: f32,
    pub midline: f32,
    pub player_team: Team,
    pub entities: Vec<EntityView>,
    pub red_score: u32,
    pub blue_score: u32,
    pub win_threshold: u32,
    pub winner: Option<Team>,
}

impl RenderSnapshot {
    pub fn capture(state: &MatchState, config: &MatchConfig) -> Self {
        let mut entities =
            Vec::with_capacity(state.bases.len() + state.flags.len() + state.guards.len() + 1);

        entities.extend(state.bases.iter().map(|base| EntityView {
            kind: EntityKind::Base,
            team: base.team,
            x: base.x,
            y: base.y,
            width: config.base_size,
            height: config.base_size,
            visible: true,
        }));
        entities.extend(state.flags.iter().map(|flag| EntityView {
            kind: EntityKind::Flag(flag.id),
            team: flag.id.team,
            x: flag.x,
            y: flag.y,
            width: config.flag_width,
            height: config.flag_height,
            visible: !flag.hidden,
        }));
        entities.extend(state.guards.iter().map(|guard| EntityView {
            kind: EntityKind::Guard(guard.id),
            team: guard.team,
            x: guard.x,
            y: guard.y,
            width: config.guard_size,
            height: config.guard_size,
            visible: true,
        }));
        entities.push(EntityView {
            kind: EntityKind::Player {
                carrying: state.player.possession.carried(),
            },
            team: state.player.team,
            x: state.player.x,
            y: state.player.y,
            width: config.player_size,
            height: config.player_size,
            visible: true,
        });

        Self {
            tick: state.tick,
            arena_width: state.arena.width,
            arena_height: state.arena.height,
            midline: state.arena.midline(),
            player_team: state.player.team,
            entities,
            red_score: state.scoreboard.score(Team::Red),
            blue_score: state.scoreboard.score(Team::Blue),
            win_threshold: state.scoreboard.threshold(),
            winner: state.scoreboard.winner(),
        }
    }

    pub fn player(&self) -> Option<&EntityView> {
        self.entities
            .iter()
            .find(|e| matches!(e.kind, EntityKind::Player { .. }))
    }

    /// The flag the player is carrying, if any.
    pub fn carried_flag(&self) -> Option<FlagId> {
        match self.player()?.kind {
            EntityKind::Player { carrying } => carrying,
            _ => None,
        }
    }

    /// Flags still lying in the world (not carried, not captured) belonging to `team`.
    pub fn visible_flags(&self, team: Team) -> impl Iterator<Item = &EntityView> {
        self.entities
            .iter()
            .filter(move |e| matches!(e.kind, EntityKind::Flag(_)) && e.visible && e.team == team)
    }

    pub fn base(&self, team: Team) -> Option<&EntityView> {
        self.entities
            .iter()
            .find(|e| e.kind == EntityKind::Base && e.team == team)
    }

    pub fn guards(&self) -> impl Iterator<Item = &EntityView> {
        self.entities
            .iter()
            .filter(|e| matches!(e.kind, EntityKind::Guard(_)))
    }

    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::Red => self.red_score,
            Team::Blue => self.blue_score,
        }
    }
}
