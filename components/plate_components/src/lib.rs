//! Components for plates, the recipes they check against and finished dishes.

use {
    bevy::prelude::*,
    ingredient_components::IngredientKind,
    interactable_components::PrefabId,
};

pub struct PlateComponentsPlugin;

impl Plugin for PlateComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Plate>()
            .register_type::<PlateAnchors>()
            .register_type::<Recipe>()
            .register_type::<Dish>();
    }
}

/// A named exact-multiset requirement over ingredient kinds.
#[derive(Reflect, Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    /// Order is irrelevant, duplicates count.
    pub ingredients: Vec<IngredientKind>,
    /// Recipes without a result never match.
    pub result: Option<PrefabId>,
}

/// Collects ingredients until they exactly match one of `recipes`, then turns into a dish.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component, Default)]
pub struct Plate {
    /// Kinds placed so far, in placement order.
    pub placed: Vec<IngredientKind>,
    /// Ingredient entities parented to the plate, parallel to `placed`.
    pub items: Vec<Entity>,
    /// Set once a recipe matched. The plate accepts nothing afterwards.
    pub dish: Option<Entity>,
    /// Name of the recipe that produced `dish`.
    pub finished_recipe: Option<String>,
    /// Reject raw, merely processed and burnt ingredients.
    pub require_cooked: bool,
    /// Checked in order; the first exact match wins.
    pub recipes: Vec<Recipe>,
}

impl Plate {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            placed: Vec::new(),
            items: Vec::new(),
            dish: None,
            finished_recipe: None,
            require_cooked: true,
            recipes,
        }
    }

    pub fn has_dish_result(&self) -> bool {
        self.dish.is_some()
    }
}

impl Default for Plate {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Child anchors of a plate: one for the ingredient ring, one for the finished dish.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct PlateAnchors {
    pub ingredients: Entity,
    pub result: Entity,
}

impl Default for PlateAnchors {
    fn default() -> Self {
        Self {
            ingredients: Entity::PLACEHOLDER,
            result: Entity::PLACEHOLDER,
        }
    }
}

/// Finished dish representation spawned onto a plate.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct Dish {
    pub name: String,
}
