use crate::core::config::GameConfig;
use bevy::prelude::*;

/// Present only when `window.autoClose` is positive.
#[derive(Resource, Deref, DerefMut)]
pub struct AutoCloseTimer(pub Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut t) = timer else { return };
    if t.tick(time.delta()).just_finished() {
        info!("AutoClose: timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(auto_close: f32) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let mut cfg = GameConfig::default();
        cfg.window.auto_close = auto_close;
        app.insert_resource(cfg);
        app.add_plugins(AutoClosePlugin);
        app.update();
        app
    }

    #[test]
    fn timer_only_when_positive() {
        assert!(app_with(0.0).world().get_resource::<AutoCloseTimer>().is_none());
        assert!(app_with(-1.0).world().get_resource::<AutoCloseTimer>().is_none());
        let app = app_with(3.0);
        let timer = app.world().resource::<AutoCloseTimer>();
        assert_eq!(timer.duration().as_secs_f32(), 3.0);
    }
}
