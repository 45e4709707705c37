use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Festival Run".into(),
            auto_close: 0.0,
        }
    }
}

/// Keyboard axis smoothing.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Fraction of the remaining distance covered per frame.
    pub axis_lerp: f32,
    /// Released axes drop straight to zero instead of lerping back.
    pub release_snap: bool,
}
impl Default for InputConfig {
    fn default() -> Self {
        Self {
            axis_lerp: 0.5,
            release_snap: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// World units moved per frame at full input.
    pub speed: f32,
    pub spawn_position: [f32; 3],
    /// Collision box extents (full size).
    pub size: [f32; 3],
    pub color: [f32; 3],
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 0.45,
            spawn_position: [0.0, 1.74, 0.0],
            size: [1.0, 3.0, 1.0],
            color: [0.85, 0.55, 0.2],
        }
    }
}

/// Player camera rig: root -> tilt -> camera.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraRigConfig {
    pub root_yaw: f32,
    pub tilt: f32,
    pub distance: f32,
    pub fov: f32,
    pub follow_lerp: f32,
    pub height_offset: f32,
}
impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            root_yaw: 0.0,
            tilt: 0.593_411_9,
            distance: 30.0,
            fov: 0.473_500_46,
            follow_lerp: 0.4,
            height_offset: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub ground_size: f32,
    /// Vertical scale applied to the ground box.
    pub ground_height_scale: f32,
    pub ground_color: [f32; 3],
    pub clear_color: [f32; 3],
    pub ambient_brightness: f32,
    pub sun_illuminance: f32,
    pub shadows: bool,
}
impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            ground_size: 24.0,
            ground_height_scale: 0.02,
            ground_color: [0.35, 0.35, 0.4],
            clear_color: [0.015_686_275, 0.015_686_275, 0.203_921_57],
            ambient_brightness: 400.0,
            sun_illuminance: 8_000.0,
            shadows: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FlowConfig {
    /// Seconds to wait for scene assets before completing anyway. 0 waits forever.
    pub ready_timeout_secs: f32,
    /// Optional UI font path relative to `assets/`. Empty uses the embedded default font.
    pub ui_font: String,
}
impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            ready_timeout_secs: 10.0,
            ui_font: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    pub log_interval: f32,
    pub overlay_visible: bool,
    pub rapier_debug: bool,
}
impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            overlay_visible: false,
            rapier_debug: false,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub log_filter: String,
    pub input: InputConfig,
    pub player: PlayerConfig,
    pub camera: CameraRigConfig,
    pub environment: EnvironmentConfig,
    pub flow: FlowConfig,
    pub debug: DebugConfig,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            log_filter: "wgpu=error,naga=warn".into(),
            input: Default::default(),
            player: Default::default(),
            camera: Default::default(),
            environment: Default::default(),
            flow: Default::default(),
            debug: Default::default(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        Self::from_ron_str(&data)
    }

    pub fn from_ron_str(data: &str) -> Result<Self, String> {
        ron::from_str(data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merges RON layers in order (later keys win, maps merge recursively).
    /// Returns the config, the layers actually used and any per-layer errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (GameConfig::default(), used, errors)
                }
            },
            None => (GameConfig::default(), used, errors),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        fn check_unit(w: &mut Vec<String>, label: &str, v: f32) {
            if !(v > 0.0 && v <= 1.0) {
                w.push(format!("{label} {v} outside (0, 1]; smoothing will not converge"));
            }
        }
        check_unit(&mut w, "input.axis_lerp", self.input.axis_lerp);
        check_unit(&mut w, "camera.follow_lerp", self.camera.follow_lerp);
        if self.player.speed <= 0.0 {
            w.push(format!("player.speed {} must be > 0", self.player.speed));
        }
        if self.player.size.iter().any(|s| *s <= 0.0) {
            w.push(format!("player.size {:?} has non-positive extent", self.player.size));
        }
        if self.camera.distance <= 0.0 {
            w.push("camera.distance must be > 0".into());
        }
        if !(0.01..std::f32::consts::PI).contains(&self.camera.fov) {
            w.push(format!("camera.fov {} outside (0.01, PI) radians", self.camera.fov));
        }
        if self.environment.ground_size <= 0.0 || self.environment.ground_height_scale <= 0.0 {
            w.push("environment ground size/scale must be > 0".into());
        }
        if self.flow.ready_timeout_secs < 0.0 {
            w.push(format!(
                "flow.ready_timeout_secs {} negative -> treated as no timeout",
                self.flow.ready_timeout_secs
            ));
        }
        if self.debug.log_interval <= 0.0 {
            w.push("debug.log_interval must be > 0".into());
        }
        w
    }

    /// Ground top surface height for the placeholder environment.
    pub fn ground_top(&self) -> f32 {
        self.environment.ground_size * self.environment.ground_height_scale * 0.5
    }
}

pub fn rgb(c: [f32; 3]) -> Color {
    Color::srgb(c[0], c[1], c[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_clean() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg = GameConfig::from_ron_str("(player: (speed: 0.9))").unwrap();
        assert_eq!(cfg.player.speed, 0.9);
        assert_eq!(cfg.input.axis_lerp, 0.5);
        assert_eq!(cfg.camera.follow_lerp, 0.4);
    }

    #[test]
    fn ground_top_matches_scaled_box() {
        let cfg = GameConfig::default();
        assert!((cfg.ground_top() - 0.24).abs() < 1e-5);
    }

    #[test]
    fn validate_flags_bad_lerp() {
        let mut cfg = GameConfig::default();
        cfg.input.axis_lerp = 0.0;
        cfg.player.speed = -1.0;
        let warns = cfg.validate();
        assert!(warns.iter().any(|w| w.contains("input.axis_lerp")));
        assert!(warns.iter().any(|w| w.contains("player.speed")));
    }
}
