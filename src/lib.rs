pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;

// Curated re-exports
pub use app::flow::{GoTo, SceneId, SceneSwapped, ScreenFlow, TransitionError};
pub use app::game::GamePlugin;
pub use app::state::AppState;
pub use core::config::{GameConfig, WindowConfig};
