use super::{DebugState, DebugStats};
use bevy::prelude::*;

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    let inst_ms = dt * 1000.0;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
        stats.frame_time_ms = inst_ms;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
}
