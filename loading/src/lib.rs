mod kitchen;

pub use kitchen::{SpawnedKitchen, flat_sprite, spawn_kitchen};

use {
    bevy::prelude::*,
    kitchen_resources::{PrefabLibrary, RecipeLibrary},
    layout_assets::KitchenLayout,
    prefab_assets::PrefabCatalog,
    recipes_assets::RecipeBook,
    states::{GameState, LoadingPhase},
};

pub struct LoadingManagerPlugin;

impl Plugin for LoadingManagerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoadingManager>()
            .init_resource::<LoadingStatus>()
            .init_state::<LoadingPhase>()
            // Phase: Assets - load prefab, recipe and layout files
            .add_systems(Startup, start_loading)
            .add_systems(
                Update,
                check_assets_loaded
                    .run_if(in_state(GameState::Loading).and(in_state(LoadingPhase::Assets))),
            )
            // Phase: BuildLibraries - index prefabs and recipes
            .add_systems(OnEnter(LoadingPhase::BuildLibraries), build_libraries)
            // Phase: SpawnKitchen - floor, stations, player
            .add_systems(OnEnter(LoadingPhase::SpawnKitchen), spawn_kitchen_from_layout)
            // Phase: Ready - transition to Running
            .add_systems(OnEnter(LoadingPhase::Ready), finish_loading)
            // Loading UI
            .add_systems(OnEnter(GameState::Loading), setup_loading_ui)
            .add_systems(
                Update,
                update_loading_ui.run_if(in_state(GameState::Loading)),
            )
            .add_systems(OnExit(GameState::Loading), cleanup_loading_ui);
    }
}

// --- Resources ---

#[derive(Resource, Default)]
pub struct LoadingManager {
    pub prefabs: Handle<PrefabCatalog>,
    pub recipes: Handle<RecipeBook>,
    pub layout: Handle<KitchenLayout>,
}

#[derive(Resource, Default)]
pub struct LoadingStatus {
    pub current_phase: String,
    pub detail: String,
}

// --- Phase: Assets ---

fn start_loading(mut assets: ResMut<LoadingManager>, asset_server: Res<AssetServer>) {
    info!("started loading assets");
    assets.prefabs = asset_server.load("kitchen.prefabs.ron");
    assets.recipes = asset_server.load("kitchen.recipes.ron");
    assets.layout = asset_server.load("kitchen.layout.ron");
}

fn check_assets_loaded(
    mut next_phase: ResMut<NextState<LoadingPhase>>,
    loading_manager: Res<LoadingManager>,
    mut status: ResMut<LoadingStatus>,
    asset_server: Res<AssetServer>,
) {
    let handles = [
        ("prefabs", loading_manager.prefabs.id().untyped()),
        ("recipes", loading_manager.recipes.id().untyped()),
        ("layout", loading_manager.layout.id().untyped()),
    ];

    if let Some((name, _)) = handles
        .iter()
        .find(|(_, id)| asset_server.load_state(*id).is_failed())
    {
        if status.current_phase != "Loading Failed" {
            error!("failed to load the kitchen {name} file, staying in the loading screen");
        }
        status.current_phase = "Loading Failed".into();
        status.detail = format!("Could not read kitchen {name}");
        return;
    }

    status.current_phase = "Loading Assets".into();
    status.detail = "Loading files from disk...".into();

    if handles
        .iter()
        .all(|(_, id)| asset_server.is_loaded_with_dependencies(*id))
    {
        info!("assets loaded");
        next_phase.set(LoadingPhase::BuildLibraries);
    }
}

// --- Phase: BuildLibraries ---

fn build_libraries(
    mut commands: Commands,
    loading_manager: Res<LoadingManager>,
    catalogs: Res<Assets<PrefabCatalog>>,
    books: Res<Assets<RecipeBook>>,
    mut next_phase: ResMut<NextState<LoadingPhase>>,
    mut status: ResMut<LoadingStatus>,
) {
    status.current_phase = "Building Libraries".into();
    status.detail = "Indexing prefabs and recipes...".into();

    let (Some(catalog), Some(book)) = (
        catalogs.get(&loading_manager.prefabs),
        books.get(&loading_manager.recipes),
    ) else {
        error!("kitchen definitions vanished after loading");
        return;
    };

    let prefabs = PrefabLibrary::from_catalog(catalog);
    let recipes = RecipeLibrary::from_book(book);
    for recipe in &recipes.recipes {
        match &recipe.result {
            Some(result) if prefabs.get(result).is_none() => {
                warn!("Recipe '{}' produces unknown prefab '{result}'", recipe.name);
            }
            None => warn!("Recipe '{}' has no result and will never match", recipe.name),
            _ => {}
        }
    }
    debug!(
        "Built {} prefabs and {} recipes",
        prefabs.prefabs.len(),
        recipes.recipes.len()
    );

    commands.insert_resource(prefabs);
    commands.insert_resource(recipes);
    next_phase.set(LoadingPhase::SpawnKitchen);
}

// --- Phase: SpawnKitchen ---

fn spawn_kitchen_from_layout(world: &mut World) {
    let layout = {
        let handle = world.resource::<LoadingManager>().layout.clone();
        world.resource::<Assets<KitchenLayout>>().get(&handle).cloned()
    };
    let Some(layout) = layout else {
        error!("kitchen layout vanished after loading");
        return;
    };

    {
        let mut status = world.resource_mut::<LoadingStatus>();
        status.current_phase = "Spawning Kitchen".into();
        status.detail = format!("Placing {} stations...", layout.stations.len());
    }

    let kitchen = spawn_kitchen(world, &layout);
    info!(
        "kitchen spawned with {} stations, player {}",
        kitchen.stations.len(),
        kitchen.player
    );
    world
        .resource_mut::<NextState<LoadingPhase>>()
        .set(LoadingPhase::Ready);
}

// --- Phase: Ready ---

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    info!("Loading complete, transitioning to Running");
    next_state.set(GameState::Running);
}

// --- Loading UI ---

#[derive(Component)]
struct LoadingUi;

fn setup_loading_ui(mut commands: Commands) {
    info!("spawning loading ui");
    commands.spawn((
        Text::new("Loading..."),
        TextFont {
            font_size: 40.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            right: Val::Px(20.0),
            flex_direction: FlexDirection::Column,
            ..default()
        },
        LoadingUi,
    ));
}

fn update_loading_ui(status: Res<LoadingStatus>, mut query: Query<&mut Text, With<LoadingUi>>) {
    if let Ok(mut text) = query.single_mut() {
        *text = Text::new(format!(
            "Loading...\n{}\n{}",
            status.current_phase, status.detail
        ));
    }
}

fn cleanup_loading_ui(mut commands: Commands, query: Query<Entity, With<LoadingUi>>) {
    info!("cleaning up loading ui");
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
