// This file is part of Festival Run.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::ScreenFlowPlugin;
use crate::core::system::system_order::{AxisUpdateSet, CameraFollowSet, FlowSet, MotionSet};
use crate::debug::DebugPlugin;
use crate::gameplay::GameScenePlugin;
use crate::gameplay::player::PlayerPlugin;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::hot_reload::InputMapHotReloadPlugin;
use crate::interaction::inputmap::InputActionsPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
#[cfg(feature = "debug")]
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;

/// Everything except windowing/rendering/physics engine plugins, so tests can
/// run it on top of `MinimalPlugins`.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                AxisUpdateSet,
                MotionSet.after(AxisUpdateSet),
                CameraFollowSet.after(MotionSet),
                FlowSet::Request.after(CameraFollowSet),
            ),
        )
        .add_plugins((
            InputActionsPlugin,
            ScreenFlowPlugin,
            GameScenePlugin,
            PlayerPlugin,
            DebugPlugin,
            AutoClosePlugin,
            #[cfg(feature = "debug")]
            InputMapHotReloadPlugin,
            #[cfg(feature = "debug")]
            ConfigHotReloadPlugin,
        ));
    }
}
