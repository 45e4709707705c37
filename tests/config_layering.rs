use std::fs;

use festival_run::core::config::GameConfig;

#[test]
fn defaults_match_shipped_base_layer() {
    let (cfg, used, errors) = GameConfig::load_layered(["assets/config/game.ron"]);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(used.len(), 1);
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn local_layer_overrides_nested_keys_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(
        &base,
        r#"(
            window: (width: 800.0, height: 600.0, title: "Base", autoClose: 0.0),
            player: (speed: 0.45, spawn_position: (0.0, 1.74, 0.0)),
        )"#,
    )
    .expect("write base");
    fs::write(&local, r#"(window: (title: "Local"), player: (speed: 0.9))"#).expect("write local");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.title, "Local");
    assert_eq!(cfg.window.width, 800.0);
    assert_eq!(cfg.player.speed, 0.9);
    assert_eq!(cfg.player.spawn_position, [0.0, 1.74, 0.0]);
}

#[test]
fn missing_and_broken_layers_are_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "(window: (width: ").expect("write broken");
    let missing = dir.path().join("nope.ron");

    let (cfg, used, errors) = GameConfig::load_layered([&missing, &broken]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("read error"));
    assert!(errors[1].contains("parse error"));
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn validation_flags_bad_tuning() {
    let mut cfg = GameConfig::default();
    cfg.input.axis_lerp = 0.0;
    cfg.player.speed = -1.0;
    cfg.window.auto_close = -2.0;
    let warnings = cfg.validate().join("\n");
    assert!(warnings.contains("input.axis_lerp"));
    assert!(warnings.contains("player.speed"));
    assert!(warnings.contains("autoClose"));
}
