pub mod flow;
pub mod game;
pub mod loading;
pub mod screens;
pub mod state;
pub mod transition;

use bevy::prelude::*;

use crate::core::system::system_order::FlowSet;
use flow::{BuildScene, GoTo, SceneSwapped, ScreenFlow};
use state::AppState;

/// Owns the screen state machine: `GoTo` requests in, `SceneSwapped` out.
pub struct ScreenFlowPlugin;

impl Plugin for ScreenFlowPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<ScreenFlow>()
            .add_event::<GoTo>()
            .add_event::<BuildScene>()
            .add_event::<SceneSwapped>()
            .configure_sets(
                Update,
                (FlowSet::Request, FlowSet::Build, FlowSet::Swap).chain(),
            )
            .add_systems(
                Startup,
                (
                    loading::spawn_overlay_camera,
                    loading::spawn_loading_overlay,
                    transition::go_to_start,
                ),
            )
            .add_systems(
                Update,
                (transition::nav_button_clicks, transition::request_transitions)
                    .chain()
                    .in_set(FlowSet::Request),
            )
            .add_systems(
                Update,
                transition::poll_scene_readiness.in_set(FlowSet::Swap),
            );
    }
}
