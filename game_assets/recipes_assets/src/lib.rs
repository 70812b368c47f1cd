//! Recipe asset definitions for plates.
//!
//! Recipes are loaded from a single `.recipes.ron` file so that their declared order,
//! which decides which recipe wins, survives loading.

use {
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    ingredient_components::IngredientKind,
    interactable_components::PrefabId,
    serde::Deserialize,
};

pub struct RecipesAssetsPlugin;

impl Plugin for RecipesAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<RecipeBook>::new(&["recipes.ron"]));
    }
}

/// Ordered list of dish recipes loaded from `.recipes.ron`.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct RecipeBook {
    pub recipes: Vec<RecipeDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeDefinition {
    /// Dish name shown to the player (e.g., "Stew")
    pub name: String,
    /// Required ingredient kinds; repeat a kind to require it more than once
    pub ingredients: Vec<IngredientKind>,
    /// Prefab spawned on the plate when the recipe matches
    #[serde(default)]
    pub result: Option<PrefabId>,
}
