use bevy::prelude::*;

use festival_run::core::config::GameConfig;
use festival_run::gameplay::player::input::update_player_input;
use festival_run::gameplay::player::motion::{input_magnitude, planar_displacement, smooth_axis};
use festival_run::gameplay::player::PlayerInput;
use festival_run::interaction::inputmap::{InputActionsPlugin, InputMap};

fn axes_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(GameConfig::default())
        .insert_resource(ButtonInput::<KeyCode>::default())
        .add_plugins(InputActionsPlugin)
        .init_resource::<PlayerInput>()
        .add_systems(Update, update_player_input);
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
}

#[test]
fn held_key_approaches_full_axis_halfway_each_frame() {
    let mut app = axes_app();
    app.update();
    press(&mut app, KeyCode::KeyW);
    let mut seen = Vec::new();
    for _ in 0..4 {
        app.update();
        seen.push(app.world().resource::<PlayerInput>().vertical);
    }
    let expected = [0.5, 0.75, 0.875, 0.9375];
    for (got, want) in seen.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "{seen:?}");
    }
    assert_eq!(app.world().resource::<PlayerInput>().horizontal, 0.0);

    release(&mut app, KeyCode::KeyW);
    app.update();
    assert!(app.world().resource::<PlayerInput>().is_idle());
}

#[test]
fn up_beats_down_and_left_beats_right() {
    let mut app = axes_app();
    app.update();
    for key in [KeyCode::ArrowUp, KeyCode::ArrowDown, KeyCode::KeyA, KeyCode::KeyD] {
        press(&mut app, key);
    }
    app.update();
    let axes = *app.world().resource::<PlayerInput>();
    assert_eq!(axes.desired_vertical, 1.0);
    assert_eq!(axes.desired_horizontal, -1.0);
}

#[test]
fn detached_input_reads_as_released() {
    let mut app = axes_app();
    app.update();
    app.world_mut().resource_mut::<InputMap>().set_attached(false);
    press(&mut app, KeyCode::ArrowRight);
    app.update();
    app.update();
    assert!(app.world().resource::<PlayerInput>().is_idle());

    app.world_mut().resource_mut::<InputMap>().set_attached(true);
    app.update();
    assert_eq!(app.world().resource::<PlayerInput>().horizontal, 0.5);
}

#[test]
fn displacement_never_exceeds_speed() {
    let speed = GameConfig::default().player.speed;
    let steps = [-1.0, -0.75, -0.5, -0.25, 0.0, 0.25, 0.5, 0.75, 1.0];
    let yaw = Quat::from_rotation_y(0.7);
    let forward = yaw * Vec3::NEG_Z;
    let right = yaw * Vec3::X;
    for v in steps {
        for h in steps {
            let d = planar_displacement(v, h, forward, right, speed);
            assert_eq!(d.y, 0.0);
            assert!(d.length() <= speed + 1e-5, "v={v} h={h} -> {d:?}");
            let expected = input_magnitude(v, h) * speed;
            if v == 0.0 && h == 0.0 {
                assert_eq!(d, Vec3::ZERO);
            } else {
                assert!((d.length() - expected).abs() < 1e-5, "v={v} h={h}");
            }
        }
    }
}

#[test]
fn smoothing_is_monotonic_toward_target() {
    let mut x = -1.0;
    for _ in 0..20 {
        let next = smooth_axis(x, 1.0, 0.5, true);
        assert!(next >= x && next <= 1.0);
        x = next;
    }
    assert!((x - 1.0).abs() < 1e-4);
}
