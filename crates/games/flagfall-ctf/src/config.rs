use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use flagfall_core::events::{FlagId, GuardId};
use flagfall_core::team::Team;

use crate::territory::territory_of;

/// Home slot of one flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlagSlot {
    pub x: f32,
    pub y: f32,
}

/// Spawn parameters of one patrolling guard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuardSpawn {
    pub start_x: f32,
    pub y: f32,
    pub patrol_width: f32,
}

/// Data-driven configuration for a capture-the-flag match.
///
/// Fixed at match start; the engine never reconfigures mid-match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Arena width. The territory midline sits at `arena_width / 2`.
    pub arena_width: f32,
    pub arena_height: f32,
    /// Player speed (units/s) applied to a unit movement intent.
    pub player_speed: f32,
    /// Side of the player's square hitbox.
    pub player_size: f32,
    pub flag_width: f32,
    pub flag_height: f32,
    pub base_size: f32,
    /// Distance of each base's center from its own side wall.
    pub base_inset: f32,
    pub guard_size: f32,
    /// Guard patrol speed (units/s).
    pub guard_speed: f32,
    /// Distance of each spawn point from its own side wall.
    pub spawn_inset: f32,
    /// Captures needed to win.
    pub win_threshold: u32,
    /// Simulation tick rate in Hz.
    pub tick_rate: f32,
    pub red_flags: Vec<FlagSlot>,
    pub blue_flags: Vec<FlagSlot>,
    pub guards: Vec<GuardSpawn>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::for_arena(800.0, 600.0)
    }
}

impl MatchConfig {
    /// Standard layout mirrored across the midline of a `width` x `height` arena.
    pub fn for_arena(width: f32, height: f32) -> Self {
        let red_flags = vec![
            FlagSlot { x: 80.0, y: 150.0 },
            FlagSlot { x: 60.0, y: 300.0 },
            FlagSlot { x: 40.0, y: 450.0 },
        ];
        let blue_flags = red_flags
            .iter()
            .map(|slot| FlagSlot {
                x: width - slot.x,
                y: slot.y,
            })
            .collect();
        let guards = vec![
            GuardSpawn {
                start_x: 150.0,
                y: 200.0,
                patrol_width: 100.0,
            },
            GuardSpawn {
                start_x: 150.0,
                y: 400.0,
                patrol_width: 80.0,
            },
            GuardSpawn {
                start_x: width - 250.0,
                y: 200.0,
                patrol_width: 100.0,
            },
            GuardSpawn {
                start_x: width - 250.0,
                y: 400.0,
                patrol_width: 80.0,
            },
        ];

        Self {
            arena_width: width,
            arena_height: height,
            player_speed: 300.0,
            player_size: 40.0,
            flag_width: 20.0,
            flag_height: 30.0,
            base_size: 60.0,
            base_inset: 40.0,
            guard_size: 35.0,
            guard_speed: 100.0,
            spawn_inset: 100.0,
            win_threshold: 3,
            tick_rate: 60.0,
            red_flags,
            blue_flags,
            guards,
        }
    }

    /// Load config from environment or TOML file, falling back to defaults.
    ///
    /// Checks `FLAGFALL_MATCH_CONFIG` first, then `config/match.toml`. A file that
    /// parses but fails [`MatchConfig::validate`] is skipped with a warning.
    pub fn load() -> Self {
        let env_path = std::env::var("FLAGFALL_MATCH_CONFIG").ok();
        let candidates = env_path.as_deref().into_iter().chain(["config/match.toml"]);
        Self::load_first_valid(candidates)
    }

    /// First of `paths` that loads and validates, or the default layout.
    pub fn load_first_valid<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Self {
        for path in paths {
            let path = path.as_ref();
            let Some(config) = Self::from_toml_file(path) else {
                continue;
            };
            match config.validate() {
                Ok(()) => return config,
                Err(e) => tracing::warn!("Ignoring {}: {e}", path.display()),
            }
        }
        Self::default()
    }

    /// Load config from a specific TOML file, returning `None` if it is missing or invalid.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).ok()?;
        match toml::from_str::<Self>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Failed to parse {}: {e}", path.display());
                None
            },
        }
    }

    /// Flag home slots for `team`.
    pub fn flags_for(&self, team: Team) -> &[FlagSlot] {
        match team {
            Team::Red => &self.red_flags,
            Team::Blue => &self.blue_flags,
        }
    }

    /// Check the configuration for values the rules engine cannot play with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_speed", self.player_speed),
            ("player_size", self.player_size),
            ("flag_width", self.flag_width),
            ("flag_height", self.flag_height),
            ("base_size", self.base_size),
            ("guard_size", self.guard_size),
            ("guard_speed", self.guard_speed),
            ("tick_rate", self.tick_rate),
        ];
        for (field, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }
        if self.player_size > self.arena_width || self.player_size > self.arena_height {
            return Err(ConfigError::InvalidDimension {
                field: "player_size",
                value: self.player_size,
            });
        }

        for (field, inset) in [
            ("spawn_inset", self.spawn_inset),
            ("base_inset", self.base_inset),
        ] {
            if !(inset.is_finite() && (0.0..=self.arena_width / 2.0).contains(&inset)) {
                return Err(ConfigError::InvalidInset {
                    field,
                    value: inset,
                });
            }
        }

        if self.win_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }

        for team in Team::ALL {
            let slots = self.flags_for(team);
            if slots.len() > usize::from(u8::MAX) {
                return Err(ConfigError::TooManyFlags {
                    team,
                    count: slots.len(),
                });
            }
            // A team wins by capturing the other side's flags.
            if (slots.len() as u32) < self.win_threshold {
                return Err(ConfigError::UnreachableThreshold {
                    team: team.opponent(),
                    threshold: self.win_threshold,
                    available: slots.len(),
                });
            }
            for (index, slot) in (0..=u8::MAX).zip(slots) {
                let in_arena = self.contains(slot.x, slot.y);
                if !in_arena || territory_of(slot.x, self.arena_width) != team {
                    return Err(ConfigError::FlagOutsideTerritory {
                        flag: FlagId { team, index },
                        x: slot.x,
                        y: slot.y,
                    });
                }
            }
        }

        if self.guards.len() > usize::from(u8::MAX) + 1 {
            return Err(ConfigError::TooManyGuards {
                count: self.guards.len(),
            });
        }
        for (index, spawn) in (0..=u8::MAX).zip(&self.guards) {
            let guard = GuardId(index);
            if !self.contains(spawn.start_x, spawn.y) {
                return Err(ConfigError::GuardOutsideArena {
                    guard,
                    x: spawn.start_x,
                    y: spawn.y,
                });
            }
            if !(spawn.patrol_width.is_finite() && spawn.patrol_width >= 0.0) {
                return Err(ConfigError::InvalidPatrolWidth {
                    guard,
                    width: spawn.patrol_width,
                });
            }
        }

        Ok(())
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.arena_width).contains(&x) && (0.0..=self.arena_height).contains(&y)
    }
}

/// Reasons a [`MatchConfig`] is rejected by [`MatchConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidDimension {
        field: &'static str,
        value: f32,
    },
    /// Spawn or base inset outside `[0, arena_width / 2]`.
    InvalidInset {
        field: &'static str,
        value: f32,
    },
    ZeroThreshold,
    UnreachableThreshold {
        team: Team,
        threshold: u32,
        available: usize,
    },
    TooManyFlags {
        team: Team,
        count: usize,
    },
    TooManyGuards {
        count: usize,
    },
    FlagOutsideTerritory {
        flag: FlagId,
        x: f32,
        y: f32,
    },
    GuardOutsideArena {
        guard: GuardId,
        x: f32,
        y: f32,
    },
    InvalidPatrolWidth {
        guard: GuardId,
        width: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { field, value } => {
                write!(f, "{field} must be a positive finite number, got {value}")
            },
            Self::InvalidInset { field, value } => write!(
                f,
                "{field} must lie between 0 and half the arena width, got {value}"
            ),
            Self::ZeroThreshold => write!(f, "win_threshold must be at least 1"),
            Self::UnreachableThreshold {
                team,
                threshold,
                available,
            } => write!(
                f,
                "{team} can never win: win_threshold is {threshold} but only {available} flags exist to capture"
            ),
            Self::TooManyFlags { team, count } => {
                write!(f, "{team} has {count} flags, at most 255 are supported")
            },
            Self::TooManyGuards { count } => {
                write!(f, "{count} guards configured, at most 256 are supported")
            },
            Self::FlagOutsideTerritory { flag, x, y } => write!(
                f,
                "{} flag #{} at ({x}, {y}) is not inside the {} half of the arena",
                flag.team, flag.index, flag.team
            ),
            Self::GuardOutsideArena { guard, x, y } => {
                write!(f, "guard #{} starts outside the arena at ({x}, {y})", guard.0)
            },
            Self::InvalidPatrolWidth { guard, width } => {
                write!(f, "guard #{} has invalid patrol width {width}", guard.0)
            },
        }
    }
}

impl std::error::Error for ConfigError {}
