//! Player controller: keyboard axes, camera-relative movement and the follow camera.

pub mod camera;
pub mod controller;
pub mod input;
pub mod motion;

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::system::system_order::{AxisUpdateSet, CameraFollowSet, MotionSet};
pub use camera::{CameraRoot, CameraTilt, PlayerCamera};
pub use controller::{Player, PlayerMotion};
pub use input::PlayerInput;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(Update, input::update_player_input.in_set(AxisUpdateSet))
            .add_systems(
                Update,
                controller::drive_player
                    .in_set(MotionSet)
                    .run_if(in_state(AppState::Game)),
            )
            .add_systems(
                Update,
                controller::follow_player
                    .in_set(CameraFollowSet)
                    .run_if(in_state(AppState::Game)),
            )
            .add_systems(OnExit(AppState::Game), reset_axes);
    }
}

fn reset_axes(mut axes: ResMut<PlayerInput>) {
    *axes = PlayerInput::default();
}
