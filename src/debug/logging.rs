use super::{DebugState, DebugStats};
use crate::app::flow::ScreenFlow;
use crate::gameplay::player::{Player, PlayerInput, PlayerMotion};
use bevy::prelude::*;

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    stats: Res<DebugStats>,
    flow: Res<ScreenFlow>,
    axes: Res<PlayerInput>,
    players: Query<(&Transform, &PlayerMotion), With<Player>>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    let (pos, delta) = players
        .iter()
        .next()
        .map(|(t, m)| (t.translation, m.last_delta))
        .unwrap_or_default();
    info!(target: "debug",
        "SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} state={:?} scene={:?} busy={} axes=({:.2},{:.2}) pos=({:.2},{:.2},{:.2}) delta_len={:.3}",
        state.frame_counter,
        time.elapsed_secs(),
        stats.fps,
        stats.frame_time_ms,
        flow.state(),
        flow.current_scene().map(|s| s.0),
        flow.is_busy(),
        axes.vertical,
        axes.horizontal,
        pos.x, pos.y, pos.z,
        delta.length());
}
