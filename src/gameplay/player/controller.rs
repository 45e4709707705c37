use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::camera::{follow_step, CameraRoot};
use super::input::PlayerInput;
use super::motion::planar_displacement;
use crate::app::flow::{SceneId, SceneTag, ScreenFlow};
use crate::core::config::GameConfig;
use crate::gameplay::assets::GameAssets;

#[derive(Component)]
pub struct Player;

/// Last displacement requested from the character controller.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PlayerMotion {
    pub last_delta: Vec3,
}

pub fn spawn_player(commands: &mut Commands, scene: SceneId, assets: &GameAssets, cfg: &GameConfig) -> Entity {
    let [sx, sy, sz] = cfg.player.size;
    commands
        .spawn((
            Name::new("player"),
            SceneTag(scene),
            Player,
            PlayerMotion::default(),
            Mesh3d(assets.player_mesh.clone()),
            MeshMaterial3d(assets.player_material.clone()),
            Transform::from_translation(Vec3::from_array(cfg.player.spawn_position)),
            Visibility::Hidden,
            RigidBody::KinematicPositionBased,
            Collider::cuboid(sx * 0.5, sy * 0.5, sz * 0.5),
            KinematicCharacterController::default(),
        ))
        .id()
}

/// Feeds this frame's camera-relative displacement to Rapier, which resolves
/// collisions and writes the corrected translation back.
pub fn drive_player(
    flow: Res<ScreenFlow>,
    cfg: Res<GameConfig>,
    input: Res<PlayerInput>,
    roots: Query<(&Transform, &SceneTag), With<CameraRoot>>,
    mut players: Query<(&SceneTag, &mut KinematicCharacterController, &mut PlayerMotion), With<Player>>,
) {
    let Some(current) = flow.current_scene() else {
        return;
    };
    let Some((root, _)) = roots.iter().find(|(_, tag)| tag.0 == current) else {
        return;
    };
    let delta = planar_displacement(
        input.vertical,
        input.horizontal,
        root.forward().as_vec3(),
        root.right().as_vec3(),
        cfg.player.speed,
    );
    for (tag, mut controller, mut motion) in players.iter_mut() {
        if tag.0 != current {
            continue;
        }
        motion.last_delta = delta;
        controller.translation = (delta != Vec3::ZERO).then_some(delta);
    }
}

/// Camera root chases the player (raised by the configured offset) every tick.
pub fn follow_player(
    flow: Res<ScreenFlow>,
    cfg: Res<GameConfig>,
    players: Query<(&Transform, &SceneTag), (With<Player>, Without<CameraRoot>)>,
    mut roots: Query<(&mut Transform, &SceneTag), With<CameraRoot>>,
) {
    let Some(current) = flow.current_scene() else {
        return;
    };
    let Some((player, _)) = players.iter().find(|(_, tag)| tag.0 == current) else {
        return;
    };
    for (mut root, tag) in roots.iter_mut() {
        if tag.0 == current {
            root.translation = follow_step(root.translation, player.translation, &cfg.camera);
        }
    }
}
