//! Kitchen stations and the rules for what they accept and hand back.
//!
//! Each station owns at most one item, referenced from its [`StationSlot`] and parented
//! under its [`PlacePoint`]. Every operation here checks its preconditions first and either
//! completes fully or changes nothing.

use {
    bevy::prelude::*,
    ingredient_components::{Ingredient, IngredientKind, StagePrefabs},
    interactable_components::PlacePoint,
    interactables::transmute,
    states::GameState,
    station_components::StationSlot,
    system_schedule::GameSchedule,
};

pub mod cooking_pot;
pub mod cutting_board;
pub mod ingredient_crate;
pub mod plate_rack;
pub mod pot;
pub mod table;

pub struct StationsPlugin;

impl Plugin for StationsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                cutting_board::tick_cutting_boards,
                cooking_pot::tick_cooking_pots,
            )
                .in_set(GameSchedule::Effect)
                .run_if(in_state(GameState::Running)),
        );
    }
}

/// The station's slot item, if it still exists.
pub fn current_item(world: &World, station: Entity) -> Option<Entity> {
    world
        .get::<StationSlot>(station)?
        .item
        .filter(|item| world.get_entity(*item).is_ok())
}

/// The station's place point, if it still exists.
pub fn place_point(world: &World, station: Entity) -> Option<Entity> {
    let anchor = world.get::<PlacePoint>(station)?.0;
    world.get_entity(anchor).is_ok().then_some(anchor)
}

pub(crate) fn set_slot(world: &mut World, station: Entity, item: Option<Entity>) {
    if let Some(mut slot) = world.get_mut::<StationSlot>(station) {
        slot.item = item;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NextStage {
    Processed,
    Cooked,
    Burnt,
}

/// Swaps the station's ingredient for its next-stage prefab and records it in the slot.
///
/// `None` when there is no live ingredient, no prefab for that stage, or the prefab cannot
/// be spawned. The slot is left untouched in that case.
pub(crate) fn advance_item(
    world: &mut World,
    station: Entity,
    stage: NextStage,
) -> Option<(Entity, IngredientKind)> {
    let item = current_item(world, station)?;
    let anchor = place_point(world, station)?;
    let kind = world.get::<Ingredient>(item)?.kind();
    let prefabs = world.get::<StagePrefabs>(item)?;
    let Some(prefab) = (match stage {
        NextStage::Processed => prefabs.processed.clone(),
        NextStage::Cooked => prefabs.cooked.clone(),
        NextStage::Burnt => prefabs.burnt.clone(),
    }) else {
        debug!("{kind:?} has no {stage:?} prefab, leaving it as it is");
        return None;
    };

    let next = transmute(world, item, &prefab, anchor)?;
    if let Some(mut ingredient) = world.get_mut::<Ingredient>(next) {
        match stage {
            NextStage::Processed => ingredient.mark_processed(),
            NextStage::Cooked => ingredient.mark_cooked(),
            NextStage::Burnt => ingredient.mark_burnt(),
        }
    }
    set_slot(world, station, Some(next));
    Some((next, kind))
}
