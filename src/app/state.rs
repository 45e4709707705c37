use bevy::prelude::*;

/// High-level app lifecycle state.
/// Start -> Cutscene -> Game -> Lose -> Start, but any screen may request any other.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Before the first scene is ready. No screen belongs to it.
    #[default]
    Boot,
    /// Title screen with the PLAY button.
    Start,
    /// Story card between the title and gameplay.
    Cutscene,
    /// Player controller and environment are live.
    Game,
    /// Game over screen.
    Lose,
}

impl AppState {
    pub const SCREENS: [AppState; 4] = [Self::Start, Self::Cutscene, Self::Game, Self::Lose];

    pub fn is_screen(self) -> bool {
        !matches!(self, Self::Boot)
    }
}
