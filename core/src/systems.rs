use {
    bevy::prelude::*,
    interaction_events::{
        CookingCompleted, DishCompleted, FoodBurnt, ItemDropped, ItemPlaced, ItemSpawned,
        ItemTaken, ProcessingCompleted,
    },
    std::f32::consts::FRAC_PI_2,
};

/// World units per screen pixel.
const CAMERA_SCALE: f32 = 0.012;
const CAMERA_HEIGHT: f32 = 20.0;

/// Top-down view of the x/z floor plane; screen up is world -Z.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, CAMERA_HEIGHT, 0.0)
            .with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
    ));
}

pub fn log_item_placed(trigger: On<ItemPlaced>) {
    let event = trigger.event();
    debug!("{} placed on {}", event.item, event.station);
}

pub fn log_item_taken(trigger: On<ItemTaken>) {
    let event = trigger.event();
    debug!("{} taken from {}", event.item, event.station);
}

pub fn log_item_spawned(trigger: On<ItemSpawned>) {
    let event = trigger.event();
    debug!("{} spawned {}", event.source, event.item);
}

pub fn log_item_dropped(trigger: On<ItemDropped>) {
    let event = trigger.event();
    debug!("{} dropped at {}", event.item, event.position);
}

pub fn log_processing_completed(trigger: On<ProcessingCompleted>) {
    let event = trigger.event();
    debug!("Board {} now holds {}", event.board, event.item);
}

pub fn log_cooking_completed(trigger: On<CookingCompleted>) {
    let event = trigger.event();
    debug!("Pot {} now holds cooked {}", event.pot, event.item);
}

pub fn log_food_burnt(trigger: On<FoodBurnt>) {
    let event = trigger.event();
    debug!("Pot {} now holds burnt {}", event.pot, event.item);
}

pub fn log_dish_completed(trigger: On<DishCompleted>) {
    let event = trigger.event();
    debug!("Dish {} sits on plate {}", event.dish, event.plate);
}
