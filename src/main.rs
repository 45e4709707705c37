use std::path::PathBuf;

use anyhow::Result;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use clap::Parser;

use festival_run::GameConfig;
use festival_run::GamePlugin;

const DEFAULT_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

#[derive(Parser, Debug)]
#[command(author, version, about = "Festival Run: screen flow + player controller prototype", long_about = None)]
struct Args {
    /// Config layer (repeatable, later wins). Replaces the default layers.
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
}

// ---------------- Config Loading ----------------

/// Loaded config plus the issues met along the way (reported once logging is up).
type Loaded = (GameConfig, Vec<String>);

#[cfg(any(target_arch = "wasm32", feature = "embedded_config"))]
fn load_config(_layers: &[PathBuf], _explicit: bool) -> Result<Loaded> {
    // Embed base config (no layered local override when embedded).
    const RAW: &str = include_str!("../assets/config/game.ron");
    let cfg = GameConfig::from_ron_str(RAW).map_err(anyhow::Error::msg)?;
    Ok((cfg, Vec::new()))
}

#[cfg(not(any(target_arch = "wasm32", feature = "embedded_config")))]
fn load_config(layers: &[PathBuf], explicit: bool) -> Result<Loaded> {
    let (cfg, used, errors) = GameConfig::load_layered(layers);
    if explicit && used.is_empty() {
        anyhow::bail!("none of the requested config layers could be loaded: {errors:?}");
    }
    Ok((cfg, errors))
}

#[derive(Resource, Debug, Default)]
struct ConfigReport {
    issues: Vec<String>,
    warnings: Vec<String>,
    layers: Vec<PathBuf>,
}

fn report_config(report: Res<ConfigReport>, cfg: Res<GameConfig>) {
    info!(target: "config", layers = ?report.layers, "Config layers requested");
    for e in &report.issues {
        warn!(target: "config", "CONFIG LOAD ISSUE: {e}");
    }
    for w in &report.warnings {
        warn!(target: "config", "CONFIG WARNING: {w}");
    }
    info!(target: "config", window = ?cfg.window, "Window config");
    info!(
        target: "config",
        speed = cfg.player.speed,
        axis_lerp = cfg.input.axis_lerp,
        follow_lerp = cfg.camera.follow_lerp,
        ready_timeout = cfg.flow.ready_timeout_secs,
        "Runtime tuning summary"
    );
}

// ---------------- Main ----------------

fn main() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let args = Args::parse();
    let explicit = !args.config.is_empty();
    let layers: Vec<PathBuf> = if explicit {
        args.config.clone()
    } else {
        DEFAULT_LAYERS.iter().map(PathBuf::from).collect()
    };
    let (mut cfg, issues) = load_config(&layers, explicit)?;
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    let warnings = cfg.validate();

    let mut app = App::new();
    app.insert_resource(cfg.clone())
        .insert_resource(ConfigReport {
            issues,
            warnings,
            layers: layers.clone(),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: (cfg.window.width, cfg.window.height).into(),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: cfg.log_filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(GamePlugin)
        .add_systems(Startup, report_config);

    #[cfg(feature = "debug")]
    {
        use festival_run::interaction::session::config_hot_reload::ConfigReloadSettings;
        app.insert_resource(ConfigReloadSettings {
            paths: layers,
            ..default()
        });
    }

    if cfg.debug.rapier_debug {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }

    app.run();
    Ok(())
}
