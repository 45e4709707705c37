pub mod auto_close;
#[cfg(feature = "debug")]
pub mod config_hot_reload;
