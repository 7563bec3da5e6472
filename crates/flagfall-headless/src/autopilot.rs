use flagfall_ctf::MoveIntent;
use flagfall_ctf::snapshot::{EntityView, RenderSnapshot};

/// How close (in units) the player must be to a target coordinate before switching axes.
const ALIGN_TOLERANCE: f32 = 5.0;

/// Pick a movement intent for the human-side player from what the renderer would see.
///
/// Guards patrol rows above and below the arena's horizontal center line, so the
/// autopilot crosses the field on that lane and only leaves it once lined up with
/// its target: the nearest enemy flag while empty-handed, its own base while carrying.
pub fn steer(snapshot: &RenderSnapshot) -> MoveIntent {
    let Some(player) = snapshot.player() else {
        return MoveIntent::IDLE;
    };
    let team = snapshot.player_team;

    let target = if snapshot.carried_flag().is_some() {
        snapshot.base(team)
    } else {
        nearest(player, snapshot.visible_flags(team.opponent()))
    };
    let Some(target) = target else {
        return MoveIntent::IDLE;
    };

    // Targets hugging a wall may sit where the player's center cannot reach.
    let (half_w, half_h) = (player.width / 2.0, player.height / 2.0);
    let goal_x = target
        .x
        .clamp(half_w, (snapshot.arena_width - half_w).max(half_w));
    let goal_y = target
        .y
        .clamp(half_h, (snapshot.arena_height - half_h).max(half_h));
    let lane_y = snapshot.arena_height / 2.0;

    let dx = goal_x - player.x;
    if dx.abs() > ALIGN_TOLERANCE {
        let off_lane = lane_y - player.y;
        if off_lane.abs() > ALIGN_TOLERANCE {
            return MoveIntent::from_axes(0.0, off_lane);
        }
        return MoveIntent::from_axes(dx, 0.0);
    }

    let dy = goal_y - player.y;
    if dy.abs() > ALIGN_TOLERANCE {
        MoveIntent::from_axes(0.0, dy)
    } else {
        MoveIntent::from_axes(dx, dy)
    }
}

fn nearest<'a>(
    from: &EntityView,
    candidates: impl Iterator<Item = &'a EntityView>,
) -> Option<&'a EntityView> {
    let distance_sq = |e: &EntityView| (e.x - from.x).powi(2) + (e.y - from.y).powi(2);
    candidates.min_by(|a, b| distance_sq(a).total_cmp(&distance_sq(b)))
}
