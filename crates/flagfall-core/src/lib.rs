pub mod events;
pub mod game_trait;
pub mod team;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::events::MatchEvent;
    use crate::game_trait::ArenaGame;
    use crate::team::Team;

    /// Run N ticks with no input, returning all accumulated events.
    pub fn run_ticks(game: &mut dyn ArenaGame, n: usize, dt: f32) -> Vec<MatchEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(game.update(dt));
        }
        all_events
    }

    /// Assert that the game's serialized state differs from `before`.
    pub fn assert_game_state_changed(game: &dyn ArenaGame, before: &[u8]) {
        let after = game.serialize_state();
        assert_ne!(
            before,
            &after[..],
            "Game state should have changed after operation"
        );
    }

    // ================================================================
    // Engine Trait Contract Tests
    // ================================================================
    // Every ArenaGame implementation must pass these. Engine crates call
    // them from their own #[cfg(test)] modules with a concrete instance.

    /// start() must announce the team and produce non-empty, undecided state.
    pub fn contract_start_announces_team(game: &mut dyn ArenaGame, team: Team) {
        let events = game.start(team);
        assert!(
            events.contains(&MatchEvent::MatchStarted { team }),
            "start() must emit MatchStarted for {team}"
        );
        assert!(
            !game.serialize_state().is_empty(),
            "serialize_state() must return non-empty bytes after start"
        );
        assert!(!game.is_match_complete(), "A fresh match has no winner");
    }

    /// update() with dt>0 must advance the match clock.
    pub fn contract_update_advances_time(game: &mut dyn ArenaGame) {
        let dt = 1.0 / game.tick_rate();
        let before = game.serialize_state();
        game.update(dt);
        assert_game_state_changed(game, &before);
    }

    /// apply_input() with valid data followed by update() must change state
    /// compared to an update without it.
    pub fn contract_apply_input_changes_state(
        game: &mut dyn ArenaGame,
        team: Team,
        valid_input: &[u8],
    ) {
        let dt = 1.0 / game.tick_rate();
        game.start(team);
        game.update(dt);
        let idle = game.serialize_state();

        game.start(team);
        game.apply_input(valid_input);
        game.update(dt);
        let moved = game.serialize_state();
        assert_ne!(idle, moved, "State must differ after apply_input + update");
    }

    /// serialize_state → apply_state must be stable after one roundtrip.
    pub fn contract_state_roundtrip_preserves(game: &mut dyn ArenaGame) {
        let state_a = game.serialize_state();
        game.apply_state(&state_a);
        let state_b = game.serialize_state();
        game.apply_state(&state_b);
        let state_c = game.serialize_state();
        assert_eq!(state_a, state_b, "State must survive a roundtrip");
        assert_eq!(state_b, state_c, "State must be stable after a roundtrip");
    }

    /// Garbage passed to apply_state() must leave the state untouched.
    pub fn contract_apply_garbage_state_is_ignored(game: &mut dyn ArenaGame) {
        let before = game.serialize_state();
        game.apply_state(&[0xc1, 0xff, 0x00]);
        assert_eq!(before, game.serialize_state());
    }

    /// Once a winner exists, update() must neither emit events nor mutate state.
    pub fn contract_finished_match_is_inert(game: &mut dyn ArenaGame) {
        assert!(
            game.is_match_complete(),
            "contract requires a finished match"
        );
        let dt = 1.0 / game.tick_rate();
        let before = game.serialize_state();
        let events = run_ticks(game, 10, dt);
        assert!(events.is_empty(), "Finished match must not emit events");
        assert_eq!(
            before,
            game.serialize_state(),
            "Finished match must not change"
        );
    }
}
