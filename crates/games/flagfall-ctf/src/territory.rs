use flagfall_core::team::Team;

/// Which team owns the half of the arena containing horizontal coordinate `x`.
///
/// The midline at `arena_width / 2` belongs to Blue.
pub fn territory_of(x: f32, arena_width: f32) -> Team {
    if x < arena_width / 2.0 {
        Team::Red
    } else {
        Team::Blue
    }
}

/// Whether a member of `team` standing at `x` is on the opponent's side.
pub fn is_enemy_territory(team: Team, x: f32, arena_width: f32) -> bool {
    territory_of(x, arena_width) != team
}
