use {bevy::prelude::*, states::GameState};

/// Per-frame phases of the kitchen simulation, chained in declaration order inside `Update`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameSchedule {
    FrameStart,
    ResolveIntent,
    PerformAction,
    Effect,
    FrameEnd,
}

pub struct SystemSchedulePlugin;

impl Plugin for SystemSchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GameSchedule::FrameStart,
                GameSchedule::ResolveIntent,
                GameSchedule::PerformAction,
                GameSchedule::Effect,
                GameSchedule::FrameEnd,
            )
                .chain()
                .run_if(in_state(GameState::Running)),
        );
    }
}
