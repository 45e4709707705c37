use bevy::input::InputSystem;
use bevy::prelude::*;

use super::parse::parse_input_toml;
use super::systems::system_evaluate_bindings;
use super::types::InputMap;

pub const DEFAULT_INPUT_TOML: &str = include_str!("../../../assets/config/input.toml");

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputActionUpdateSet;

pub struct InputActionsPlugin;
impl Plugin for InputActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputMap>()
            .configure_sets(PreUpdate, InputActionUpdateSet.after(InputSystem))
            .add_systems(PreStartup, load_initial_input_map)
            .add_systems(PreUpdate, system_evaluate_bindings.in_set(InputActionUpdateSet));
    }
}

fn read_input_source() -> String {
    #[cfg(any(target_arch = "wasm32", feature = "embedded_config"))]
    {
        DEFAULT_INPUT_TOML.to_string()
    }
    #[cfg(not(any(target_arch = "wasm32", feature = "embedded_config")))]
    {
        let path = std::env::var("INPUT_CONFIG_PATH")
            .unwrap_or_else(|_| "assets/config/input.toml".into());
        match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(target: "input", "input map '{path}' unreadable ({e}); using embedded default");
                DEFAULT_INPUT_TOML.to_string()
            }
        }
    }
}

fn load_initial_input_map(mut commands: Commands) {
    let parsed = parse_input_toml(&read_input_source());
    for e in &parsed.errors {
        error!(target: "input", "INPUT MAP ERROR: {e}");
    }
    info!(target: "input", "Input map loaded: {} actions, {} bindings",
        parsed.input_map.actions.len(), parsed.input_map.bindings.len());
    commands.insert_resource(parsed.input_map);
}
