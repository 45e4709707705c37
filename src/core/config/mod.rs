pub mod config;

pub use config::{
    rgb, CameraRigConfig, DebugConfig, EnvironmentConfig, FlowConfig, GameConfig, InputConfig,
    PlayerConfig, WindowConfig,
};
