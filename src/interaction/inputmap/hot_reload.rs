use bevy::prelude::*;
use std::{path::PathBuf, time::SystemTime};

use super::parse::parse_input_toml;
use super::types::InputMap;

#[derive(Resource, Debug)]
struct InputReloadState {
    last_modified: Option<SystemTime>,
    timer: Timer,
    path: PathBuf,
}

impl FromWorld for InputReloadState {
    fn from_world(_: &mut World) -> Self {
        Self {
            last_modified: None,
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
            path: PathBuf::from(
                std::env::var("INPUT_CONFIG_PATH")
                    .unwrap_or_else(|_| "assets/config/input.toml".into()),
            ),
        }
    }
}

/// Polls the input TOML and swaps the map in place when it changes on disk.
/// The current gate state survives a reload.
pub struct InputMapHotReloadPlugin;

impl Plugin for InputMapHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        app.init_resource::<InputReloadState>()
            .add_systems(Update, poll_input_map_reload);
    }
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn poll_input_map_reload(
    time: Res<Time>,
    mut state: ResMut<InputReloadState>,
    mut input_map: ResMut<InputMap>,
) {
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    let Ok(mod_time) = std::fs::metadata(&state.path).and_then(|m| m.modified()) else {
        return;
    };
    let Some(prev) = state.last_modified.replace(mod_time) else {
        // First observation only records the baseline.
        return;
    };
    if mod_time <= prev {
        return;
    }
    let Ok(raw) = std::fs::read_to_string(&state.path) else {
        return;
    };
    let parsed = parse_input_toml(&raw);
    if !parsed.errors.is_empty() {
        for e in parsed.errors {
            warn!(target: "input", "INPUT HOT-RELOAD parse error: {e}");
        }
        return;
    }
    let attached = input_map.attached;
    *input_map = parsed.input_map;
    input_map.attached = attached;
    info!(target: "input", "Input map hot-reloaded");
}
