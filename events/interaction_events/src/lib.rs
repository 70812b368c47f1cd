//! Observer events fired after a kitchen state change has been fully applied.
//! Triggered with `World::trigger`; presentation and logging listen with observers.

use {bevy::prelude::*, ingredient_components::IngredientKind};

/// An item was accepted into a station slot.
#[derive(Event, Debug, Clone, Copy)]
pub struct ItemPlaced {
    pub station: Entity,
    pub item: Entity,
}

/// A station handed its slot item to a hold point.
#[derive(Event, Debug, Clone, Copy)]
pub struct ItemTaken {
    pub station: Entity,
    pub item: Entity,
}

/// A rack or crate produced a fresh item.
#[derive(Event, Debug, Clone, Copy)]
pub struct ItemSpawned {
    pub source: Entity,
    pub item: Entity,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ItemDropped {
    pub item: Entity,
    pub position: Vec3,
}

/// A cutting board replaced its item with the processed representation.
#[derive(Event, Debug, Clone, Copy)]
pub struct ProcessingCompleted {
    pub board: Entity,
    pub item: Entity,
    pub kind: Option<IngredientKind>,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct CookingCompleted {
    pub pot: Entity,
    pub item: Entity,
    pub kind: Option<IngredientKind>,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct FoodBurnt {
    pub pot: Entity,
    pub item: Entity,
    pub kind: Option<IngredientKind>,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct IngredientPlated {
    pub plate: Entity,
    pub ingredient: Entity,
    pub kind: IngredientKind,
}

/// A plate matched a recipe and now carries the finished dish.
#[derive(Event, Debug, Clone)]
pub struct DishCompleted {
    pub plate: Entity,
    pub dish: Entity,
    pub recipe: String,
}
