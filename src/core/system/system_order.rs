//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. InputActionUpdateSet (PreUpdate: raw keys -> actions)
//! 2. AxisUpdateSet (action flags -> smoothed axes)
//! 3. MotionSet (axes -> character controller delta; Rapier resolves collisions)
//! 4. CameraFollowSet (camera root chases the player before rendering)
//! 5. FlowSet (scene transitions, readiness polling, swap)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct AxisUpdateSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct MotionSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct CameraFollowSet;

/// Screen flow phases, chained in this order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum FlowSet {
    /// Button clicks and `GoTo` requests; the new scene's screen is spawned.
    Request,
    /// Screen-specific content (environment, player) joins the pending scene.
    Build,
    /// Readiness poll, dispose of the old scene, swap, state update.
    Swap,
}
