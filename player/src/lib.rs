use {
    bevy::prelude::*,
    states::GameState,
    system_schedule::GameSchedule,
};

pub mod actions;
pub mod detection;
pub mod input;
pub mod movement;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            input::read_keyboard_input
                .in_set(GameSchedule::FrameStart)
                .run_if(resource_exists::<ButtonInput<KeyCode>>),
        )
        .add_systems(
            Update,
            detection::detect_interaction_targets.in_set(GameSchedule::ResolveIntent),
        )
        .add_systems(
            Update,
            (
                actions::update_processing_hold,
                actions::handle_interact_press,
                movement::move_players,
            )
                .chain()
                .in_set(GameSchedule::PerformAction),
        )
        .add_systems(OnExit(GameState::Running), movement::release_locks);
    }
}
