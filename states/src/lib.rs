use bevy::prelude::*;

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Loading,
    Running,
}

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadingPhase {
    #[default]
    Assets,         // Wait for prefab, recipe and layout files
    BuildLibraries, // Turn loaded definitions into PrefabLibrary / RecipeLibrary
    SpawnKitchen,   // Spawn floor, stations and the player from the layout
    Ready,          // All done
}
