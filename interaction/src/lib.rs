//! Pick-up, place and drop requests against any interactable.
//!
//! Requests are dispatched on the target's [`Interactable`] tag; each arm forwards to the
//! station module that owns the rules for that variant.

use {
    bevy::prelude::*,
    interactable_components::{Interactable, PickUpMode},
    interaction_events::ItemDropped,
    interactables::{attach, drop_at},
    station_components::{CookingPot, CuttingBoard},
    stations::{
        cooking_pot, current_item, cutting_board, ingredient_crate, plate_rack, pot, table,
    },
};

/// Whether a pick-up request against `target` would hand the player something right now.
pub fn can_pick_up(world: &World, target: Entity) -> bool {
    let Some(interactable) = world.get::<Interactable>(target).copied() else {
        return false;
    };
    match interactable.pick_up_mode() {
        PickUpMode::Carry | PickUpMode::Spawn => true,
        PickUpMode::Fixed => false,
        PickUpMode::Take => {
            current_item(world, target).is_some()
                && match interactable {
                    Interactable::CuttingBoard => world
                        .get::<CuttingBoard>(target)
                        .is_some_and(|board| !board.is_processing()),
                    Interactable::CookingPot => world
                        .get::<CookingPot>(target)
                        .is_some_and(|pot| !pot.is_cooking()),
                    _ => true,
                }
        }
    }
}

pub fn can_place(world: &World, target: Entity) -> bool {
    world
        .get::<Interactable>(target)
        .is_some_and(|interactable| interactable.can_place())
}

/// Moves whatever `target` yields into `hold`: the target itself, its slot item or a
/// freshly spawned item.
pub fn pick_up(world: &mut World, target: Entity, hold: Entity) -> Option<Entity> {
    let interactable = *world.get::<Interactable>(target)?;
    let picked = match interactable {
        Interactable::Ingredient | Interactable::Plate => {
            attach(world, target, hold).then_some(target)
        }
        Interactable::CuttingBoard => cutting_board::take_item(world, target, hold),
        Interactable::CookingPot => cooking_pot::take_item(world, target, hold),
        Interactable::Table => table::take_item(world, target, hold),
        Interactable::PlateRack => plate_rack::spawn_plate(world, target, hold),
        Interactable::Crate => ingredient_crate::spawn_item(world, target, hold),
        Interactable::Pot => None,
    };
    if let Some(item) = picked {
        debug!("Picked up {item} from {interactable:?} {target}");
    }
    picked
}

/// Offers `item` to `target`. `false` means nothing changed and the caller still owns it.
pub fn place(world: &mut World, target: Entity, item: Entity) -> bool {
    let Some(interactable) = world.get::<Interactable>(target).copied() else {
        return false;
    };
    let placed = match interactable {
        Interactable::CuttingBoard => cutting_board::place(world, target, item),
        Interactable::CookingPot => cooking_pot::place(world, target, item),
        Interactable::Table => table::place(world, target, item),
        Interactable::Pot => pot::place(world, target, item),
        Interactable::Ingredient
        | Interactable::Plate
        | Interactable::PlateRack
        | Interactable::Crate => false,
    };
    trace!("Placing {item} on {interactable:?} {target}: {placed}");
    placed
}

/// Puts a carried item down in the world. Plates are never left on the floor.
pub fn drop_item(world: &mut World, item: Entity, position: Vec3) -> bool {
    let dropped = match world.get::<Interactable>(item).copied() {
        Some(Interactable::Ingredient) => drop_at(world, item, position),
        Some(Interactable::Plate) => {
            debug!("Plates cannot be dropped on the floor");
            false
        }
        _ => false,
    };
    if dropped {
        let position = world
            .get::<Transform>(item)
            .map_or(position, |transform| transform.translation);
        world.trigger(ItemDropped { item, position });
    }
    dropped
}

/// First interactable at or above `entity` in the hierarchy.
pub fn resolve_interactable(world: &World, entity: Entity) -> Option<Entity> {
    find_ancestor(world, entity, |world, e| world.get::<Interactable>(e).is_some())
}

/// The cutting board `entity` is or sits on, if any.
pub fn resolve_cutting_board(world: &World, entity: Entity) -> Option<Entity> {
    find_ancestor(world, entity, |world, e| world.get::<CuttingBoard>(e).is_some())
}

fn find_ancestor(
    world: &World,
    entity: Entity,
    matches: impl Fn(&World, Entity) -> bool,
) -> Option<Entity> {
    let mut current = Some(entity);
    while let Some(e) = current {
        if matches(world, e) {
            return Some(e);
        }
        current = world.get::<ChildOf>(e).map(ChildOf::parent);
    }
    None
}
