use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;

use crate::app::flow::{SceneId, SceneTag};
use crate::app::screens::SceneCamera;
use crate::core::config::CameraRigConfig;

/// Yaw-only node that follows the player. Its forward/right drive movement.
#[derive(Component)]
pub struct CameraRoot;

/// Pitch node between the root and the camera.
#[derive(Component)]
pub struct CameraTilt;

#[derive(Component)]
pub struct PlayerCamera;

/// Spawns root -> tilt -> camera. The camera sits `distance` behind the tilted
/// frame and looks back at the root origin.
pub fn spawn_camera_rig(
    commands: &mut Commands,
    scene: SceneId,
    rig: &CameraRigConfig,
    clear_color: Color,
    focus: Vec3,
) -> Entity {
    commands
        .spawn((
            Name::new("camera root"),
            SceneTag(scene),
            CameraRoot,
            Transform::from_translation(focus).with_rotation(Quat::from_rotation_y(rig.root_yaw)),
            Visibility::Hidden,
        ))
        .with_children(|root| {
            root.spawn((
                Name::new("camera tilt"),
                CameraTilt,
                Transform::from_rotation(Quat::from_rotation_x(-rig.tilt)),
                Visibility::Inherited,
            ))
            .with_children(|tilt| {
                tilt.spawn((
                    Name::new("player camera"),
                    SceneTag(scene),
                    SceneCamera,
                    PlayerCamera,
                    Camera3d::default(),
                    Camera {
                        is_active: false,
                        clear_color: ClearColorConfig::Custom(clear_color),
                        ..default()
                    },
                    Projection::Perspective(PerspectiveProjection {
                        fov: rig.fov,
                        ..default()
                    }),
                    Transform::from_xyz(0.0, 0.0, rig.distance),
                ));
            });
        })
        .id()
}

/// Where the camera root wants to be for a player at `player`.
pub fn follow_target(player: Vec3, height_offset: f32) -> Vec3 {
    player + Vec3::Y * height_offset
}

pub fn follow_step(current: Vec3, player: Vec3, rig: &CameraRigConfig) -> Vec3 {
    current.lerp(follow_target(player, rig.height_offset), rig.follow_lerp.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_sits_above_and_behind_root() {
        let rig = CameraRigConfig::default();
        let tilt = Transform::from_rotation(Quat::from_rotation_x(-rig.tilt));
        let cam_local = Transform::from_xyz(0.0, 0.0, rig.distance);
        let world = tilt.mul_transform(cam_local);
        assert!(world.translation.y > 0.0);
        assert!(world.translation.z > 0.0);
        // Looking back at the origin.
        let to_origin = (-world.translation).normalize();
        assert!(world.forward().as_vec3().dot(to_origin) > 0.999);
    }

    #[test]
    fn follow_converges_on_raised_player() {
        let rig = CameraRigConfig::default();
        let player = Vec3::new(4.0, 1.0, -2.0);
        let mut root = Vec3::ZERO;
        for _ in 0..60 {
            root = follow_step(root, player, &rig);
        }
        assert!((root - Vec3::new(4.0, 3.0, -2.0)).length() < 1e-3);
    }
}
