use {
    crate::{current_item, place_point, set_slot},
    bevy::prelude::*,
    interactable_components::Interactable,
    interactables::attach,
    interaction_events::ItemPlaced,
    station_components::Pot,
};

/// Drops `item` into the pot for good. There is no way to take it back out.
pub fn place(world: &mut World, pot: Entity, item: Entity) -> bool {
    if item == pot || world.get::<Pot>(pot).is_none() {
        return false;
    }
    let Some(anchor) = place_point(world, pot) else {
        return false;
    };
    if current_item(world, pot).is_some() {
        trace!("Pot {pot} already holds something");
        return false;
    }
    if world.get::<Interactable>(item).is_none() || !attach(world, item, anchor) {
        return false;
    }

    set_slot(world, pot, Some(item));
    world.trigger(ItemPlaced { station: pot, item });
    true
}
