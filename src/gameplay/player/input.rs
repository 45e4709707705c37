use bevy::prelude::*;

use super::motion::{desired_horizontal, desired_vertical, smooth_axis};
use crate::core::config::GameConfig;
use crate::interaction::inputmap::InputMap;

pub const MOVE_UP: &str = "MoveUp";
pub const MOVE_DOWN: &str = "MoveDown";
pub const MOVE_LEFT: &str = "MoveLeft";
pub const MOVE_RIGHT: &str = "MoveRight";

/// Smoothed keyboard axes, both in [-1, 1].
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    pub vertical: f32,
    pub horizontal: f32,
    pub desired_vertical: f32,
    pub desired_horizontal: f32,
}

impl PlayerInput {
    pub fn step(&mut self, up: bool, down: bool, left: bool, right: bool, lerp: f32, release_snap: bool) {
        self.desired_vertical = desired_vertical(up, down);
        self.desired_horizontal = desired_horizontal(left, right);
        self.vertical = smooth_axis(self.vertical, self.desired_vertical, lerp, release_snap);
        self.horizontal = smooth_axis(self.horizontal, self.desired_horizontal, lerp, release_snap);
    }

    pub fn is_idle(&self) -> bool {
        self.vertical == 0.0 && self.horizontal == 0.0
    }
}

pub fn update_player_input(
    input_map: Res<InputMap>,
    cfg: Res<GameConfig>,
    mut axes: ResMut<PlayerInput>,
) {
    axes.step(
        input_map.pressed(MOVE_UP),
        input_map.pressed(MOVE_DOWN),
        input_map.pressed(MOVE_LEFT),
        input_map.pressed(MOVE_RIGHT),
        cfg.input.axis_lerp,
        cfg.input.release_snap,
    );
}
