use super::DebugState;
use crate::interaction::inputmap::InputMap;
use bevy::prelude::*;

pub const TOGGLE_INSPECTOR: &str = "ToggleInspector";

pub fn debug_key_input_system(input_map: Option<Res<InputMap>>, mut state: ResMut<DebugState>) {
    let Some(input_map) = input_map else {
        return;
    };
    if input_map.just_pressed(TOGGLE_INSPECTOR) {
        state.overlay_visible = !state.overlay_visible;
        info!(target: "debug", visible = state.overlay_visible, frame = state.frame_counter, "inspector toggled");
    }
}
