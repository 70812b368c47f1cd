use {
    bevy::prelude::*,
    interactables::{attach, destroy, instantiate},
    interaction_events::ItemSpawned,
    station_components::PlateRack,
};

/// Spawns a fresh plate straight into `destination`. The rack itself never moves.
pub fn spawn_plate(world: &mut World, rack: Entity, destination: Entity) -> Option<Entity> {
    let Some(prefab) = world.get::<PlateRack>(rack)?.plate.clone() else {
        warn!("Plate rack {rack} has no plate configured");
        return None;
    };
    world.get_entity(destination).ok()?;

    let plate = instantiate(world, &prefab, None)?;
    if !attach(world, plate, destination) {
        destroy(world, plate);
        return None;
    }
    world.trigger(ItemSpawned {
        source: rack,
        item: plate,
    });
    Some(plate)
}
