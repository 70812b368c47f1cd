use {
    crate::{NextStage, advance_item, current_item, place_point, set_slot},
    bevy::prelude::*,
    ingredient_components::Ingredient,
    interactable_components::Interactable,
    interactables::attach,
    interaction_events::{CookingCompleted, FoodBurnt, ItemPlaced, ItemTaken},
    station_components::{CookingPot, PotState, StationProgress, StationSlot},
};

/// Puts a processed, uncooked ingredient into an empty pot and starts cooking right away.
pub fn place(world: &mut World, pot: Entity, item: Entity) -> bool {
    if item == pot || world.get::<CookingPot>(pot).is_none() {
        return false;
    }
    let Some(anchor) = place_point(world, pot) else {
        return false;
    };
    if current_item(world, pot).is_some() {
        trace!("Cooking pot {pot} is occupied");
        return false;
    }
    let Some(ingredient) = world.get::<Ingredient>(item) else {
        debug!("Cooking pot {pot} only takes ingredients");
        return false;
    };
    if !ingredient.is_processed() || ingredient.is_cooked() || ingredient.is_burnt() {
        debug!(
            "Cooking pot {pot} rejected {:?} at stage {:?}",
            ingredient.kind(),
            ingredient.stage()
        );
        return false;
    }
    if !attach(world, item, anchor) {
        return false;
    }

    set_slot(world, pot, Some(item));
    if let Some(mut cooking_pot) = world.get_mut::<CookingPot>(pot) {
        cooking_pot.reset_timers();
        cooking_pot.state = PotState::Cooking;
    }
    if let Some(mut progress) = world.get_mut::<StationProgress>(pot) {
        progress.show(0.0);
    }
    world.trigger(ItemPlaced { station: pot, item });
    true
}

/// Hands the pot's item to `destination`. Refused while cooking.
pub fn take_item(world: &mut World, pot: Entity, destination: Entity) -> Option<Entity> {
    if world.get::<CookingPot>(pot)?.is_cooking() {
        trace!("Cooking pot {pot} is still cooking");
        return None;
    }
    let item = current_item(world, pot)?;
    if !attach(world, item, destination) {
        return None;
    }

    set_slot(world, pot, None);
    stop_all(world, pot);
    world.trigger(ItemTaken { station: pot, item });
    Some(item)
}

fn stop_all(world: &mut World, pot: Entity) {
    if let Some(mut cooking_pot) = world.get_mut::<CookingPot>(pot) {
        cooking_pot.reset_timers();
        cooking_pot.state = PotState::Idle;
    }
    if let Some(mut progress) = world.get_mut::<StationProgress>(pot) {
        progress.hide();
    }
}

pub fn tick_cooking_pots(
    time: Res<Time>,
    mut commands: Commands,
    mut pots: Query<(
        Entity,
        &mut CookingPot,
        &mut StationSlot,
        &mut StationProgress,
    )>,
    items: Query<(), With<Interactable>>,
) {
    for (entity, mut pot, mut slot, mut progress) in pots.iter_mut() {
        if slot.item.is_some_and(|item| !items.contains(item)) {
            debug!("Item in cooking pot {entity} disappeared");
            slot.item = None;
        }
        if slot.is_empty() {
            if pot.state != PotState::Idle || progress.visible {
                pot.reset_timers();
                pot.state = PotState::Idle;
                progress.hide();
            }
            continue;
        }

        match pot.state {
            PotState::Cooking => {
                pot.cook_timer.tick(time.delta());
                progress.show(pot.progress());
                if pot.cook_timer.is_finished() {
                    commands.queue(CompleteCooking { pot: entity });
                }
            }
            PotState::CookedReady => {
                pot.burn_timer.tick(time.delta());
                if pot.burn_timer.is_finished() {
                    commands.queue(BurnFood { pot: entity });
                }
            }
            PotState::Idle | PotState::Burnt => {}
        }
    }
}

/// Turns the pot's item into its cooked representation once the cook timer ran out.
pub struct CompleteCooking {
    pub pot: Entity,
}

impl Command for CompleteCooking {
    fn apply(self, world: &mut World) {
        let pot = self.pot;
        if !world.get::<CookingPot>(pot).is_some_and(CookingPot::is_cooking) {
            return;
        }

        let Some((item, kind)) = advance_item(world, pot, NextStage::Cooked) else {
            stop_all(world, pot);
            return;
        };
        if let Some(mut cooking_pot) = world.get_mut::<CookingPot>(pot) {
            cooking_pot.reset_timers();
            cooking_pot.state = PotState::CookedReady;
        }
        if let Some(mut progress) = world.get_mut::<StationProgress>(pot) {
            progress.show(1.0);
        }

        info!("Cooking pot {pot} finished cooking {kind:?}");
        world.trigger(CookingCompleted {
            pot,
            item,
            kind: Some(kind),
        });
    }
}

/// Burns food left in the pot past its burn delay.
pub struct BurnFood {
    pub pot: Entity,
}

impl Command for BurnFood {
    fn apply(self, world: &mut World) {
        let pot = self.pot;
        if !world
            .get::<CookingPot>(pot)
            .is_some_and(|cooking_pot| cooking_pot.state == PotState::CookedReady)
        {
            return;
        }

        let Some((item, kind)) = advance_item(world, pot, NextStage::Burnt) else {
            stop_all(world, pot);
            return;
        };
        if let Some(mut cooking_pot) = world.get_mut::<CookingPot>(pot) {
            cooking_pot.reset_timers();
            cooking_pot.state = PotState::Burnt;
        }
        if let Some(mut progress) = world.get_mut::<StationProgress>(pot) {
            progress.show(1.0);
        }

        warn!("Cooking pot {pot} burnt the {kind:?}");
        world.trigger(FoodBurnt {
            pot,
            item,
            kind: Some(kind),
        });
    }
}
