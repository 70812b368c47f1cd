use {
    bevy::prelude::*,
    ingredient_components::IngredientComponentsPlugin,
    ingredient_icons::IngredientIconsPlugin,
    interactable_components::InteractableComponentsPlugin,
    interactables::InteractablesPlugin,
    kitchen_resources::KitchenResourcesPlugin,
    layout_assets::LayoutAssetsPlugin,
    loading::LoadingManagerPlugin,
    physics_probe::PhysicsProbePlugin,
    plate_components::PlateComponentsPlugin,
    plates::PlatesPlugin,
    player::PlayerPlugin,
    player_components::PlayerComponentsPlugin,
    prefab_assets::PrefabAssetsPlugin,
    progress_bars::ProgressBarsPlugin,
    recipes_assets::RecipesAssetsPlugin,
    station_components::StationComponentsPlugin,
    states::GameState,
    stations::StationsPlugin,
    system_schedule::SystemSchedulePlugin,
};

mod systems;

/// Kitchen simulation without loading or presentation. Needs `StatesPlugin` and a
/// `Time` resource; the caller decides how the kitchen gets spawned.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            InteractableComponentsPlugin,
            IngredientComponentsPlugin,
            StationComponentsPlugin,
            PlateComponentsPlugin,
            PlayerComponentsPlugin,
        ))
        .add_plugins((
            KitchenResourcesPlugin,
            PhysicsProbePlugin,
            InteractablesPlugin,
            SystemSchedulePlugin,
            PlatesPlugin,
            StationsPlugin,
            PlayerPlugin,
        ))
        .add_observer(systems::log_item_placed)
        .add_observer(systems::log_item_taken)
        .add_observer(systems::log_item_spawned)
        .add_observer(systems::log_item_dropped)
        .add_observer(systems::log_processing_completed)
        .add_observer(systems::log_cooking_completed)
        .add_observer(systems::log_food_burnt)
        .add_observer(systems::log_dish_completed);
    }
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_plugins((PrefabAssetsPlugin, RecipesAssetsPlugin, LayoutAssetsPlugin))
            .add_plugins((
                GameplayPlugin,
                LoadingManagerPlugin,
                ProgressBarsPlugin,
                IngredientIconsPlugin,
            ))
            .add_systems(Startup, systems::setup_camera);
    }
}
