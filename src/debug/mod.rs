//! Debug module: feature gated inspector overlay and periodic logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugState {
    pub overlay_visible: bool,
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            overlay_visible: false,
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
}

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use crate::core::config::GameConfig;
        use crate::core::system::system_order::CameraFollowSet;

        fn seed_from_config(cfg: Res<GameConfig>, mut state: ResMut<DebugState>) {
            state.overlay_visible = cfg.debug.overlay_visible;
            state.log_interval = cfg.debug.log_interval.max(0.05);
        }

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(Startup, (seed_from_config, overlay::debug_overlay_spawn))
            .add_systems(
                Update,
                (
                    keys::debug_key_input_system,
                    stats::debug_stats_collect_system,
                    logging::debug_logging_system,
                    overlay::debug_overlay_update,
                )
                    .chain()
                    .after(CameraFollowSet),
            );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
