use {
    bevy::prelude::*,
    ingredient_components::{Ingredient, IngredientStage},
    interactables::{attach, destroy, instantiate},
    interaction_events::ItemSpawned,
    station_components::IngredientCrate,
};

/// Spawns a fresh raw ingredient from the crate straight into `destination`.
///
/// A prefab that is not a raw ingredient of the crate's kind is destroyed and nothing is
/// handed out.
pub fn spawn_item(world: &mut World, source: Entity, destination: Entity) -> Option<Entity> {
    let config = world.get::<IngredientCrate>(source)?;
    let kind = config.kind;
    let Some(prefab) = config.ingredient.clone() else {
        warn!("{kind:?} crate {source} has no ingredient configured");
        return None;
    };
    world.get_entity(destination).ok()?;

    let item = instantiate(world, &prefab, None)?;
    let spawned = world
        .get::<Ingredient>(item)
        .map(|ingredient| (ingredient.kind(), ingredient.stage()));
    if spawned != Some((kind, IngredientStage::Raw)) {
        warn!("{kind:?} crate {source} refused '{prefab}', which spawned as {spawned:?}");
        destroy(world, item);
        return None;
    }
    if !attach(world, item, destination) {
        destroy(world, item);
        return None;
    }
    world.trigger(ItemSpawned { source, item });
    Some(item)
}
