//! Plate assembly: ingredients go onto a plate until they exactly match a recipe, at which
//! point they are replaced by the recipe's dish and the plate stops accepting anything.

use {
    bevy::prelude::*,
    ingredient_components::Ingredient,
    interactables::{attach, destroy, instantiate},
    interaction_events::{DishCompleted, IngredientPlated},
    plate_components::{Plate, PlateAnchors},
};

pub mod recipes;

pub use recipes::{find_recipe, layout_offset};

pub struct PlatesPlugin;

impl Plugin for PlatesPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_plated_ingredient);
    }
}

/// Moves `item` onto the plate's ingredient ring.
///
/// Rejected once the plate holds a dish, for non-ingredients and, on plates that require it,
/// for ingredients that are not cooked or are burnt. The caller still owns the previous
/// reference to `item` and must clear it when this returns `true`.
pub fn try_add_ingredient(world: &mut World, plate: Entity, item: Entity) -> bool {
    let Some(config) = world.get::<Plate>(plate) else {
        return false;
    };
    if config.has_dish_result() {
        debug!("Plate {plate} already holds a dish");
        return false;
    }
    let require_cooked = config.require_cooked;
    let index = config.placed.len();

    let Some(ingredient) = world.get::<Ingredient>(item).copied() else {
        debug!("Plate {plate} only takes ingredients");
        return false;
    };
    if require_cooked && (!ingredient.is_cooked() || ingredient.is_burnt()) {
        debug!(
            "Plate {plate} rejected {:?} at stage {:?}",
            ingredient.kind(),
            ingredient.stage()
        );
        return false;
    }
    let Some(anchors) = world.get::<PlateAnchors>(plate).copied() else {
        return false;
    };

    if !attach(world, item, anchors.ingredients) {
        return false;
    }
    if let Some(mut transform) = world.get_mut::<Transform>(item) {
        *transform = Transform::from_translation(layout_offset(index));
    }
    if let Some(mut config) = world.get_mut::<Plate>(plate) {
        config.placed.push(ingredient.kind());
        config.items.push(item);
    }

    world.trigger(IngredientPlated {
        plate,
        ingredient: item,
        kind: ingredient.kind(),
    });
    try_build_dish(world, plate);
    true
}

/// Replaces the plated ingredients with a dish if they match a recipe.
pub fn try_build_dish(world: &mut World, plate: Entity) -> Option<Entity> {
    let config = world.get::<Plate>(plate)?;
    if config.has_dish_result() {
        return None;
    }
    let recipe = config.recipes[find_recipe(&config.recipes, &config.placed)?].clone();
    let result = recipe.result.clone()?;
    let anchors = world.get::<PlateAnchors>(plate).copied()?;

    let Some(dish) = instantiate(world, &result, Some(anchors.result)) else {
        warn!(
            "Recipe '{}' matched on plate {plate} but its dish '{result}' could not be spawned",
            recipe.name
        );
        return None;
    };

    let items = {
        let mut config = world.get_mut::<Plate>(plate)?;
        config.dish = Some(dish);
        config.finished_recipe = Some(recipe.name.clone());
        std::mem::take(&mut config.items)
    };
    for item in items {
        destroy(world, item);
    }

    info!("Plate {plate} completed '{}'", recipe.name);
    world.trigger(DishCompleted {
        plate,
        dish,
        recipe: recipe.name,
    });
    Some(dish)
}

fn log_plated_ingredient(trigger: On<IngredientPlated>) {
    let event = trigger.event();
    debug!("{:?} ({}) plated on {}", event.kind, event.ingredient, event.plate);
}
