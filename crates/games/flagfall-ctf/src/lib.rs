pub mod arena;
pub mod collision;
pub mod config;
pub mod patrol;
pub mod possession;
pub mod scoring;
pub mod snapshot;
pub mod territory;

use serde::{Deserialize, Serialize};

use flagfall_core::arena_game_boilerplate;
use flagfall_core::events::{FlagId, GuardId, MatchEvent, MatchOutcome};
use flagfall_core::game_trait::{ArenaGame, GameMetadata};
use flagfall_core::team::Team;

use arena::Arena;
use config::{ConfigError, MatchConfig};
use patrol::Guard;
use possession::Possession;
use scoring::Scoreboard;
use snapshot::RenderSnapshot;

/// The human-controlled avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub team: Team,
    pub x: f32,
    pub y: f32,
    pub possession: Possession,
}

/// A flag on the field. Captured flags are removed from [`MatchState::flags`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    pub id: FlagId,
    pub home_x: f32,
    pub home_y: f32,
    pub x: f32,
    pub y: f32,
    /// Set while a player carries it.
    pub hidden: bool,
}

/// A team's base. Stationary and never destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base {
    pub team: Team,
    pub x: f32,
    pub y: f32,
}

/// Serializable state of one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub arena: Arena,
    pub player: PlayerState,
    pub flags: Vec<Flag>,
    pub bases: Vec<Base>,
    pub guards: Vec<Guard>,
    pub scoreboard: Scoreboard,
    pub tick: u64,
    pub elapsed: f32,
}

impl MatchState {
    /// Fresh match for a human player on `team`.
    pub fn new(config: &MatchConfig, team: Team) -> Self {
        let arena = Arena::new(config.arena_width, config.arena_height);
        let (x, y) = arena.home_point(team, config.spawn_inset);

        let mut flags = Vec::with_capacity(config.red_flags.len() + config.blue_flags.len());
        for owner in Team::ALL {
            // Ids are u8; slots past the id range are never spawned.
            for (index, slot) in (0..=u8::MAX).zip(config.flags_for(owner)) {
                flags.push(Flag {
                    id: FlagId { team: owner, index },
                    home_x: slot.x,
                    home_y: slot.y,
                    x: slot.x,
                    y: slot.y,
                    hidden: false,
                });
            }
        }

        let bases = Team::ALL
            .into_iter()
            .map(|owner| {
                let (x, y) = arena.home_point(owner, config.base_inset);
                Base { team: owner, x, y }
            })
            .collect();

        let guards = (0..=u8::MAX)
            .zip(&config.guards)
            .map(|(i, spawn)| Guard::spawn(GuardId(i), spawn, config.guard_speed, arena.width))
            .collect();

        Self {
            arena,
            player: PlayerState {
                team,
                x,
                y,
                possession: Possession::Empty,
            },
            flags,
            bases,
            guards,
            scoreboard: Scoreboard::new(config.win_threshold),
            tick: 0,
            elapsed: 0.0,
        }
    }

    pub fn winner(&self) -> Option<Team> {
        self.scoreboard.winner()
    }

    pub fn flag(&self, id: FlagId) -> Option<&Flag> {
        self.flags.iter().find(|f| f.id == id)
    }

    /// Move the player by a unit intent scaled by speed and `dt`, clamped to the arena.
    fn move_player(&mut self, intent: MoveIntent, dt: f32, config: &MatchConfig) {
        let half = config.player_size / 2.0;
        let x = self.player.x + f32::from(intent.dx) * config.player_speed * dt;
        let y = self.player.y + f32::from(intent.dy) * config.player_speed * dt;
        (self.player.x, self.player.y) = self.arena.clamp(x, y, half, half);
    }
}

/// Directional intent for one tick. Each component is -1, 0 or 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub dx: i8,
    pub dy: i8,
}

impl MoveIntent {
    pub const IDLE: MoveIntent = MoveIntent { dx: 0, dy: 0 };

    pub fn new(dx: i8, dy: i8) -> Self {
        Self {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }

    /// Reduce analog axes (keyboard, touch pad) to a unit intent. NaN/Inf count as zero.
    pub fn from_axes(x: f32, y: f32) -> Self {
        fn axis(v: f32) -> i8 {
            if !v.is_finite() || v == 0.0 {
                0
            } else if v > 0.0 {
                1
            } else {
                -1
            }
        }
        Self {
            dx: axis(x),
            dy: axis(y),
        }
    }
}

/// The capture-the-flag match engine.
pub struct CaptureTheFlag {
    state: MatchState,
    pending_intent: Option<MoveIntent>,
    /// Data-driven match configuration (geometry, speeds, threshold).
    game_config: MatchConfig,
}

impl CaptureTheFlag {
    pub fn new() -> Self {
        Self::with_config(MatchConfig::load())
    }

    /// Create an engine with explicit configuration. Not validated: out-of-range values
    /// never panic, but the match may be unplayable. Use [`CaptureTheFlag::validated`]
    /// for configuration from outside the program.
    pub fn with_config(config: MatchConfig) -> Self {
        Self {
            state: MatchState::new(&config, Team::Red),
            pending_intent: None,
            game_config: config,
        }
    }

    /// Create an engine after checking the configuration.
    pub fn validated(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &MatchConfig {
        &self.game_config
    }

    /// Movement intent for the next tick. Replaces any intent not yet consumed.
    pub fn set_intent(&mut self, intent: MoveIntent) {
        self.pending_intent = Some(MoveIntent::new(intent.dx, intent.dy));
    }

    /// Read-only render feed.
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, &self.game_config)
    }
}

impl Default for CaptureTheFlag {
    fn default() -> Self {
        Self::with_config(MatchConfig::default())
    }
}

impl ArenaGame for CaptureTheFlag {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Capture the Flag".to_string(),
            description: format!(
                "Capture {} enemy flags to win! Tag enemies on YOUR side, avoid them on THEIR side!",
                self.game_config.win_threshold
            ),
            win_threshold: self.game_config.win_threshold,
        }
    }

    fn tick_rate(&self) -> f32 {
        self.game_config.tick_rate
    }

    fn start(&mut self, team: Team) -> Vec<MatchEvent> {
        self.state = MatchState::new(&self.game_config, team);
        self.pending_intent = None;
        tracing::info!(%team, "Match started");
        vec![MatchEvent::MatchStarted { team }]
    }

    fn update(&mut self, dt: f32) -> Vec<MatchEvent> {
        if self.state.winner().is_some() {
            return Vec::new();
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.state.tick += 1;
        self.state.elapsed += dt;

        // Everything moves first; contacts are judged on post-movement positions.
        for guard in &mut self.state.guards {
            guard.advance(dt);
        }
        let intent = self.pending_intent.take().unwrap_or_default();
        self.state.move_player(intent, dt, &self.game_config);

        let mut events = Vec::new();
        let contacts = collision::detect_contacts(&self.state, &self.game_config);
        collision::resolve_contacts(&mut self.state, &self.game_config, &contacts, &mut events);

        if let Some(winner) = self.state.winner() {
            let outcome = if winner == self.state.player.team {
                MatchOutcome::Victory
            } else {
                MatchOutcome::Defeat
            };
            tracing::info!(%winner, ?outcome, tick = self.state.tick, "Match won");
            events.push(MatchEvent::MatchWon { winner, outcome });
        }

        events
    }

    arena_game_boilerplate!(state_type: MatchState);

    fn apply_input(&mut self, input: &[u8]) {
        match rmp_serde::from_slice::<MoveIntent>(input) {
            Err(e) => {
                tracing::debug!(error = %e, "Dropped malformed move intent");
            },
            Ok(intent) => self.set_intent(intent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagfall_core::test_helpers::{
        contract_apply_garbage_state_is_ignored, contract_apply_input_changes_state,
        contract_finished_match_is_inert, contract_start_announces_team,
        contract_state_roundtrip_preserves, contract_update_advances_time, run_ticks,
    };

    const DT: f32 = 1.0 / 60.0;

    fn blue_flag(index: u8) -> FlagId {
        FlagId {
            team: Team::Blue,
            index,
        }
    }

    fn started(team: Team) -> CaptureTheFlag {
        let mut game = CaptureTheFlag::default();
        game.start(team);
        game
    }

    /// Put the player at `(x, y)` holding `flag`, mirroring what a pickup does.
    fn carry(game: &mut CaptureTheFlag, flag: FlagId, x: f32, y: f32) {
        game.state.player.x = x;
        game.state.player.y = y;
        assert!(game.state.player.possession.try_pick_up(game.state.player.team, flag));
        game.state
            .flags
            .iter_mut()
            .find(|f| f.id == flag)
            .unwrap()
            .hidden = true;
    }

    fn guard_mut(game: &mut CaptureTheFlag, id: u8) -> &mut Guard {
        game.state
            .guards
            .iter_mut()
            .find(|g| g.id == GuardId(id))
            .unwrap()
    }

    #[test]
    fn start_places_player_at_team_spawn() {
        let game = started(Team::Red);
        assert_eq!((game.state.player.x, game.state.player.y), (100.0, 300.0));
        let game = started(Team::Blue);
        assert_eq!((game.state.player.x, game.state.player.y), (700.0, 300.0));
        assert_eq!(game.state.flags.len(), 6);
        assert_eq!(game.state.guards.len(), 4);
    }

    #[test]
    fn guards_take_team_from_spawn_side() {
        let game = started(Team::Red);
        let teams: Vec<Team> = game.state.guards.iter().map(|g| g.team).collect();
        assert_eq!(teams, vec![Team::Red, Team::Red, Team::Blue, Team::Blue]);
    }

    #[test]
    fn touching_enemy_flag_picks_it_up() {
        let mut game = started(Team::Red);
        game.state.player.x = 720.0;
        game.state.player.y = 150.0;

        let events = game.update(DT);
        assert_eq!(events, vec![MatchEvent::FlagPickedUp { flag: blue_flag(0) }]);
        assert_eq!(game.state.player.possession, Possession::Carrying(blue_flag(0)));
        assert!(game.state.flag(blue_flag(0)).unwrap().hidden);
    }

    #[test]
    fn touching_own_flag_does_nothing() {
        let mut game = started(Team::Red);
        game.state.player.x = 80.0;
        game.state.player.y = 150.0;

        let events = game.update(DT);
        assert!(events.is_empty());
        assert_eq!(game.state.player.possession, Possession::Empty);
        assert!(game.state.flags.iter().all(|f| !f.hidden));
    }

    #[test]
    fn second_enemy_flag_is_ignored_while_carrying() {
        let mut game = started(Team::Red);
        carry(&mut game, blue_flag(0), 740.0, 300.0);

        let events = game.update(DT);
        assert!(events.is_empty(), "second pickup must be silent: {events:?}");
        assert_eq!(game.state.player.possession, Possession::Carrying(blue_flag(0)));
        let second = game.state.flag(blue_flag(1)).unwrap();
        assert!(!second.hidden);
        assert_eq!((second.x, second.y), (740.0, 300.0));
    }

    #[test]
    fn tagged_in_enemy_territory_drops_flag_and_respawns() {
        let mut game = started(Team::Red);
        carry(&mut game, blue_flag(0), 700.0, 300.0);
        let guard = guard_mut(&mut game, 2);
        guard.x = 700.0;
        guard.y = 300.0;

        let events = game.update(DT);
        assert_eq!(
            events,
            vec![MatchEvent::PlayerTagged {
                x: 700.0,
                y: 300.0,
                dropped: Some(blue_flag(0)),
            }]
        );
        assert_eq!(game.state.player.possession, Possession::Empty);
        assert_eq!((game.state.player.x, game.state.player.y), (100.0, 300.0));

        let flag = game.state.flag(blue_flag(0)).unwrap();
        assert!(!flag.hidden);
        assert_eq!((flag.x, flag.y), (700.0, 300.0));
        assert_eq!((flag.home_x, flag.home_y), (720.0, 150.0));
    }

    #[test]
    fn dropped_flag_can_be_picked_up_again() {
        let mut game = started(Team::Red);
        carry(&mut game, blue_flag(2), 650.0, 300.0);
        let guard = guard_mut(&mut game, 2);
        guard.x = 650.0;
        guard.y = 300.0;
        game.update(DT);
        assert_eq!(game.state.player.possession, Possession::Empty);

        // Guard wanders off; player walks back onto the dropped flag.
        guard_mut(&mut game, 2).y = 200.0;
        game.state.player.x = 650.0;
        let events = game.update(DT);
        assert_eq!(events, vec![MatchEvent::FlagPickedUp { flag: blue_flag(2) }]);
    }

    #[test]
    fn tagged_without_flag_only_respawns() {
        let mut game = started(Team::Blue);
        game.state.player.x = 300.0;
        let guard = guard_mut(&mut game, 0);
        guard.x = 300.0;
        guard.y = 300.0;

        let events = game.update(DT);
        assert_eq!(
            events,
            vec![MatchEvent::PlayerTagged {
                x: 300.0,
                y: 300.0,
                dropped: None,
            }]
        );
        assert_eq!((game.state.player.x, game.state.player.y), (700.0, 300.0));
        assert_eq!(game.state.flags.len(), 6);
    }

    #[test]
    fn guard_tagged_on_home_side() {
        let mut game = started(Team::Red);
        carry(&mut game, blue_flag(1), 100.0, 300.0);
        let guard = guard_mut(&mut game, 0);
        guard.x = 110.0;
        guard.y = 300.0;

        let events = game.update(DT);
        assert_eq!(events, vec![MatchEvent::GuardTagged { guard: GuardId(0) }]);
        let guard = guard_mut(&mut game, 0);
        assert_eq!((guard.x, guard.y), (150.0, 300.0));
        assert_eq!((game.state.player.x, game.state.player.y), (100.0, 300.0));
        assert_eq!(game.state.player.possession, Possession::Carrying(blue_flag(1)));
    }

    #[test]
    fn guard_sent_home_into_player_is_tagged_again() {
        let mut game = started(Team::Red);
        game.state.player.x = 160.0;
        game.state.player.y = 200.0;
        guard_mut(&mut game, 0).x = 175.0;

        for _ in 0..2 {
            let events = game.update(DT);
            assert_eq!(events, vec![MatchEvent::GuardTagged { guard: GuardId(0) }]);
            assert!((guard_mut(&mut game, 0).x - 150.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn enemy_guard_on_home_side_is_tagged_too() {
        let mut game = started(Team::Red);
        game.state.player.x = 380.0;
        let guard = guard_mut(&mut game, 2);
        guard.x = 395.0;
        guard.y = 300.0;
        guard.direction = -1.0;

        let events = game.update(DT);
        assert_eq!(events, vec![MatchEvent::GuardTagged { guard: GuardId(2) }]);
        assert!((guard_mut(&mut game, 2).x - 550.0).abs() < f32::EPSILON);
    }

    #[test]
    fn capture_at_own_base_scores_and_destroys_flag() {
        let mut game = started(Team::Red);
        carry(&mut game, blue_flag(0), 70.0, 300.0);

        let events = game.update(DT);
        assert_eq!(
            events,
            vec![MatchEvent::FlagCaptured {
                flag: blue_flag(0),
                team: Team::Red,
                score: 1,
            }]
        );
        assert_eq!(game.state.scoreboard.score(Team::Red), 1);
        assert_eq!(game.state.scoreboard.score(Team::Blue), 0);
        assert_eq!(game.state.flags.len(), 5);
        assert!(game.state.flag(blue_flag(0)).is_none());
        assert_eq!(game.state.player.possession, Possession::Empty);
        assert!(!game.is_match_complete());
    }

    #[test]
    fn enemy_base_does_not_accept_flag() {
        let mut game = started(Team::Red);
        carry(&mut game, blue_flag(0), 770.0, 330.0);

        let events = game.update(DT);
        assert!(events.is_empty());
        assert_eq!(game.state.scoreboard.score(Team::Red), 0);
        assert!(game.state.player.possession.is_carrying());
    }

    #[test]
    fn third_capture_wins_and_freezes_match() {
        let mut game = started(Team::Red);
        game.state.scoreboard.record_capture(Team::Red);
        game.state.scoreboard.record_capture(Team::Red);
        carry(&mut game, blue_flag(2), 70.0, 300.0);

        let events = game.update(DT);
        assert_eq!(
            events,
            vec![
                MatchEvent::FlagCaptured {
                    flag: blue_flag(2),
                    team: Team::Red,
                    score: 3,
                },
                MatchEvent::MatchWon {
                    winner: Team::Red,
                    outcome: MatchOutcome::Victory,
                },
            ]
        );
        assert_eq!(game.winner(), Some(Team::Red));

        game.set_intent(MoveIntent::new(1, 0));
        contract_finished_match_is_inert(&mut game);
    }

    #[test]
    fn walk_out_and_back_scores_a_capture() {
        let mut game = started(Team::Red);
        let mut events = Vec::new();

        for _ in 0..400 {
            if game.state.player.possession.is_carrying() {
                break;
            }
            game.set_intent(MoveIntent::new(1, 0));
            events.extend(game.update(DT));
        }
        assert!(game.state.player.possession.is_carrying(), "{events:?}");

        for _ in 0..400 {
            if game.state.scoreboard.score(Team::Red) == 1 {
                break;
            }
            game.set_intent(MoveIntent::new(-1, 0));
            events.extend(game.update(DT));
        }
        assert_eq!(game.state.scoreboard.score(Team::Red), 1, "{events:?}");
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, MatchEvent::PlayerTagged { .. })),
            "the center lane is clear of guards"
        );
    }

    #[test]
    fn movement_is_clamped_to_arena() {
        let mut game = started(Team::Blue);
        game.state.player.x = 778.0;
        game.state.player.y = 22.0;
        game.set_intent(MoveIntent::new(1, -1));
        game.update(DT);
        assert_eq!((game.state.player.x, game.state.player.y), (780.0, 20.0));
    }

    #[test]
    fn intent_is_consumed_each_tick() {
        let mut game = started(Team::Red);
        game.set_intent(MoveIntent::new(0, 1));
        game.update(DT);
        let y = game.state.player.y;
        assert!((y - 305.0).abs() < 0.01);
        game.update(DT);
        assert!((game.state.player.y - y).abs() < f32::EPSILON);
    }

    #[test]
    fn encoded_input_is_applied_and_sanitized() {
        let mut game = started(Team::Red);
        let bytes = rmp_serde::to_vec(&MoveIntent { dx: 5, dy: 0 }).unwrap();
        game.apply_input(&bytes);
        game.update(DT);
        assert!((game.state.player.x - 105.0).abs() < 0.01);

        game.apply_input(&[0xc1, 0x00]);
        game.update(DT);
        assert!((game.state.player.x - 105.0).abs() < 0.01);
    }

    #[test]
    fn from_axes_reduces_to_unit_steps() {
        assert_eq!(MoveIntent::from_axes(0.3, -12.0), MoveIntent::new(1, -1));
        assert_eq!(MoveIntent::from_axes(f32::NAN, 0.0), MoveIntent::IDLE);
        assert_eq!(MoveIntent::from_axes(f32::INFINITY, -0.0), MoveIntent::IDLE);
    }

    #[test]
    fn bad_dt_does_not_corrupt_positions() {
        let mut game = started(Team::Red);
        game.set_intent(MoveIntent::new(1, 1));
        game.update(f32::NAN);
        assert_eq!((game.state.player.x, game.state.player.y), (100.0, 300.0));
        assert!(game.state.guards.iter().all(|g| g.x.is_finite()));
    }

    #[test]
    fn unvalidated_nan_size_does_not_panic() {
        let config: MatchConfig = toml::from_str("player_size = nan").unwrap();
        assert!(config.validate().is_err());

        let mut game = CaptureTheFlag::with_config(config);
        game.start(Team::Red);
        game.set_intent(MoveIntent::new(1, 1));
        game.update(DT);
        assert!(game.state.player.x.is_finite());
        assert!(game.state.player.y.is_finite());
    }

    #[test]
    fn oversized_layout_keeps_ids_in_range() {
        let mut config = MatchConfig::default();
        let guard = config.guards[0];
        config.guards = vec![guard; 300];
        let slot = config.blue_flags[0];
        config.blue_flags = vec![slot; 300];

        let state = MatchState::new(&config, Team::Red);
        assert_eq!(state.guards.len(), 256);
        assert_eq!(state.guards.last().unwrap().id, GuardId(255));
        let blue: Vec<u8> = state
            .flags
            .iter()
            .filter(|f| f.id.team == Team::Blue)
            .map(|f| f.id.index)
            .collect();
        assert_eq!(blue.len(), 256);
        assert!(blue.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn validated_rejects_bad_config() {
        let config = MatchConfig {
            win_threshold: 0,
            ..MatchConfig::default()
        };
        assert!(CaptureTheFlag::validated(config).is_err());
        assert!(CaptureTheFlag::validated(MatchConfig::default()).is_ok());
    }

    #[test]
    fn metadata_mentions_threshold() {
        let game = CaptureTheFlag::default();
        let meta = game.metadata();
        assert_eq!(meta.win_threshold, 3);
        assert!(meta.description.contains("Capture 3 enemy flags"));
    }

    #[test]
    fn idle_ticks_only_move_guards() {
        let mut game = started(Team::Red);
        let before = game.state.clone();
        let events = run_ticks(&mut game, 120, DT);
        assert!(events.is_empty());
        assert_eq!(game.state.player, before.player);
        assert_eq!(game.state.flags, before.flags);
        assert_ne!(game.state.guards, before.guards);
        assert_eq!(game.state.tick, 120);
    }

    // ================================================================
    // Engine contract
    // ================================================================

    #[test]
    fn contract_start() {
        for team in Team::ALL {
            contract_start_announces_team(&mut CaptureTheFlag::default(), team);
        }
    }

    #[test]
    fn contract_update() {
        let mut game = started(Team::Blue);
        contract_update_advances_time(&mut game);
    }

    #[test]
    fn contract_input() {
        let mut game = CaptureTheFlag::default();
        let input = rmp_serde::to_vec(&MoveIntent::new(0, -1)).unwrap();
        contract_apply_input_changes_state(&mut game, Team::Red, &input);
    }

    #[test]
    fn contract_roundtrip() {
        let mut game = started(Team::Red);
        carry(&mut game, blue_flag(1), 500.0, 250.0);
        run_ticks(&mut game, 30, DT);
        contract_state_roundtrip_preserves(&mut game);
        contract_apply_garbage_state_is_ignored(&mut game);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_intent() -> impl Strategy<Value = MoveIntent> {
            (-1i8..=1, -1i8..=1).prop_map(|(dx, dy)| MoveIntent::new(dx, dy))
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn possession_and_flags_stay_consistent(
                team in prop_oneof![Just(Team::Red), Just(Team::Blue)],
                intents in proptest::collection::vec((any_intent(), 1usize..40), 1..40),
            ) {
                let mut game = CaptureTheFlag::default();
                game.start(team);

                for (intent, hold) in intents {
                    for _ in 0..hold {
                        game.set_intent(intent);
                        game.update(DT);

                        let state = game.state();
                        let hidden: Vec<FlagId> =
                            state.flags.iter().filter(|f| f.hidden).map(|f| f.id).collect();
                        match state.player.possession.carried() {
                            Some(flag) => {
                                prop_assert_eq!(hidden, vec![flag]);
                                prop_assert_ne!(flag.team, team);
                            },
                            None => prop_assert!(hidden.is_empty()),
                        }

                        let captured = 6 - state.flags.len() as u32;
                        prop_assert_eq!(state.scoreboard.score(team), captured);
                        prop_assert_eq!(state.scoreboard.score(team.opponent()), 0);
                        prop_assert!(state.scoreboard.score(team) <= 3);
                        prop_assert!(state.player.x >= 20.0 && state.player.x <= 780.0);
                        prop_assert!(state.player.y >= 20.0 && state.player.y <= 580.0);
                    }
                }
            }
        }
    }
}
