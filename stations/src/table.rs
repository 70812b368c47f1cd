use {
    crate::{current_item, place_point, set_slot},
    bevy::prelude::*,
    ingredient_components::Ingredient,
    interactable_components::Interactable,
    interactables::attach,
    interaction_events::{ItemPlaced, ItemTaken},
    plate_components::Plate,
    station_components::Table,
};

/// Places `item` on the table, or onto the plate already sitting there.
///
/// Loose ingredients need a plate; anything else needs an empty table.
pub fn place(world: &mut World, table: Entity, item: Entity) -> bool {
    if item == table || world.get::<Table>(table).is_none() {
        return false;
    }
    let Some(anchor) = place_point(world, table) else {
        return false;
    };

    if let Some(current) = current_item(world, table) {
        if world.get::<Plate>(current).is_some() {
            return plates::try_add_ingredient(world, current, item);
        }
        trace!("Table {table} is occupied");
        return false;
    }
    if world.get::<Ingredient>(item).is_some() {
        debug!("Table {table} needs a plate before taking ingredients");
        return false;
    }
    if world.get::<Interactable>(item).is_none() || !attach(world, item, anchor) {
        return false;
    }

    set_slot(world, table, Some(item));
    world.trigger(ItemPlaced {
        station: table,
        item,
    });
    true
}

pub fn take_item(world: &mut World, table: Entity, destination: Entity) -> Option<Entity> {
    world.get::<Table>(table)?;
    let item = current_item(world, table)?;
    if !attach(world, item, destination) {
        return None;
    }

    set_slot(world, table, None);
    world.trigger(ItemTaken {
        station: table,
        item,
    });
    Some(item)
}
