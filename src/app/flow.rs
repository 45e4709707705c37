//! Screen flow bookkeeping: which scene is live, which one is being prepared.
//!
//! `ScreenFlow` is the only owner of the current scene/state pair. A transition
//! is started with [`ScreenFlow::begin`], collects asset handles while its scene
//! is built, and is finished with [`ScreenFlow::complete`], which swaps scene and
//! state in one step.

use bevy::prelude::*;
use thiserror::Error;

use super::state::AppState;

/// Identifies one constructed scene. Every entity of a scene carries a [`SceneTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(pub u32);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTag(pub SceneId);

/// Request to move to another screen.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoTo(pub AppState);

/// A transition was accepted and its scene must be built.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildScene {
    pub scene: SceneId,
    pub state: AppState,
}

/// Fired after the swap, once the new scene is current.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneSwapped {
    pub from: AppState,
    pub to: AppState,
    pub scene: SceneId,
    pub timed_out: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("transition to {pending:?} still in flight; ignoring request for {requested:?}")]
    InFlight {
        pending: AppState,
        requested: AppState,
    },
    #[error("already showing {0:?}")]
    AlreadyThere(AppState),
    #[error("{0:?} is not a screen")]
    NotAScreen(AppState),
}

#[derive(Debug)]
pub struct PendingTransition {
    pub target: AppState,
    pub scene: SceneId,
    pub handles: Vec<UntypedHandle>,
    pub elapsed: f32,
    pub frames: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedTransition {
    pub from: AppState,
    pub to: AppState,
    pub old_scene: Option<SceneId>,
    pub new_scene: SceneId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Waiting,
    Ready,
    TimedOut,
}

impl Readiness {
    /// Scenes always wait at least one frame so their spawn commands have landed.
    /// A `timeout` of zero or less waits forever.
    pub fn decide(all_settled: bool, frames: u32, elapsed: f32, timeout: f32) -> Self {
        if frames == 0 {
            Self::Waiting
        } else if all_settled {
            Self::Ready
        } else if timeout > 0.0 && elapsed >= timeout {
            Self::TimedOut
        } else {
            Self::Waiting
        }
    }
}

#[derive(Resource, Debug)]
pub struct ScreenFlow {
    state: AppState,
    current_scene: Option<SceneId>,
    pending: Option<PendingTransition>,
    next_id: u32,
    completed: u32,
    rejected: u32,
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self {
            state: AppState::Boot,
            current_scene: None,
            pending: None,
            next_id: 1,
            completed: 0,
            rejected: 0,
        }
    }
}

impl ScreenFlow {
    pub fn state(&self) -> AppState {
        self.state
    }
    pub fn current_scene(&self) -> Option<SceneId> {
        self.current_scene
    }
    pub fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
    pub fn completed(&self) -> u32 {
        self.completed
    }
    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    /// Accepts a request and allocates the scene that will be built for it.
    pub fn begin(&mut self, target: AppState) -> Result<SceneId, TransitionError> {
        let result = self.check(target);
        if result.is_err() {
            self.rejected += 1;
        }
        result?;
        let scene = SceneId(self.next_id);
        self.next_id += 1;
        self.pending = Some(PendingTransition {
            target,
            scene,
            handles: Vec::new(),
            elapsed: 0.0,
            frames: 0,
        });
        Ok(scene)
    }

    fn check(&self, target: AppState) -> Result<(), TransitionError> {
        if !target.is_screen() {
            return Err(TransitionError::NotAScreen(target));
        }
        if let Some(p) = &self.pending {
            return Err(TransitionError::InFlight {
                pending: p.target,
                requested: target,
            });
        }
        if target == self.state {
            return Err(TransitionError::AlreadyThere(target));
        }
        Ok(())
    }

    /// Registers an asset the pending scene must wait for. Ignored when idle.
    pub fn track(&mut self, handle: impl Into<UntypedHandle>) {
        if let Some(p) = self.pending.as_mut() {
            p.handles.push(handle.into());
        }
    }

    /// Advances the wait clock of the pending transition.
    pub fn tick(&mut self, dt: f32) {
        if let Some(p) = self.pending.as_mut() {
            p.elapsed += dt;
            p.frames = p.frames.saturating_add(1);
        }
    }

    /// Makes the pending scene current. Returns `None` when idle.
    pub fn complete(&mut self) -> Option<CompletedTransition> {
        let p = self.pending.take()?;
        let done = CompletedTransition {
            from: self.state,
            to: p.target,
            old_scene: self.current_scene.replace(p.scene),
            new_scene: p.scene,
        };
        self.state = p.target;
        self.completed += 1;
        Some(done)
    }
}
