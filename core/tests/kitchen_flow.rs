mod common;

use {
    bevy::prelude::*,
    common::*,
    ingredient_components::{Ingredient, IngredientKind, IngredientStage},
    interactable_components::HoldPoint,
    plate_components::{Dish, Plate},
    player_components::MovementLock,
    station_components::{BoardPhase, CookingPot, CuttingBoard, PotState, StationSlot},
};

fn stage_of(kitchen: &Kitchen, item: Entity) -> (IngredientKind, IngredientStage) {
    let ingredient = kitchen.get::<Ingredient>(item);
    (ingredient.kind(), ingredient.stage())
}

#[test]
fn crate_to_plate_makes_a_steak() {
    let mut kitchen = Kitchen::new();

    // Raw meat from the crate lands in the player's hands
    kitchen.stand_at_station(CRATE);
    kitchen.tap();
    let raw = kitchen.held().expect("crate should hand out meat");
    assert_eq!(stage_of(&kitchen, raw), (IngredientKind::Meat, IngredientStage::Raw));
    let hold_point = kitchen.get::<HoldPoint>(kitchen.player()).0;
    assert_eq!(kitchen.get::<ChildOf>(raw).parent(), hold_point);

    // Placing on the board starts processing while the button stays down
    kitchen.stand_at_station(BOARD);
    kitchen.press();
    let board = kitchen.station(BOARD);
    assert_eq!(kitchen.held(), None);
    assert!(kitchen.get::<CuttingBoard>(board).is_processing());
    assert_eq!(kitchen.get::<MovementLock>(kitchen.player()).board, Some(board));

    kitchen.hold(2.5);
    assert_eq!(kitchen.get::<CuttingBoard>(board).phase, BoardPhase::Ready);
    assert!(!kitchen.get::<MovementLock>(kitchen.player()).is_locked());
    let chopped = kitchen.get::<StationSlot>(board).item.unwrap();
    assert_eq!(
        stage_of(&kitchen, chopped),
        (IngredientKind::Meat, IngredientStage::Processed)
    );
    assert!(kitchen.world().get_entity(raw).is_err());
    kitchen.release();

    // Take it and cook it
    kitchen.tap();
    assert_eq!(kitchen.held(), Some(chopped));
    assert!(kitchen.get::<StationSlot>(board).is_empty());

    kitchen.stand_at_station(COOKING_POT);
    kitchen.tap();
    let pot = kitchen.station(COOKING_POT);
    assert_eq!(kitchen.get::<CookingPot>(pot).state, PotState::Cooking);

    kitchen.run_for(3.2);
    assert_eq!(kitchen.get::<CookingPot>(pot).state, PotState::CookedReady);
    kitchen.tap();
    let cooked = kitchen.held().expect("cooked meat should be taken out");
    assert_eq!(
        stage_of(&kitchen, cooked),
        (IngredientKind::Meat, IngredientStage::Cooked)
    );

    // The table's plate turns it into a steak
    kitchen.stand_at_station(TABLE);
    kitchen.tap();
    assert_eq!(kitchen.held(), None);
    let plate = kitchen
        .get::<StationSlot>(kitchen.station(TABLE))
        .item
        .unwrap();
    let plate_state = kitchen.get::<Plate>(plate);
    assert_eq!(plate_state.finished_recipe.as_deref(), Some("Steak"));
    assert!(plate_state.items.is_empty());
    let dish = plate_state.dish.unwrap();
    assert_eq!(kitchen.get::<Dish>(dish).name, "Steak");
    assert!(kitchen.world().get_entity(cooked).is_err());
}

#[test]
fn releasing_the_button_pauses_the_board() {
    let mut kitchen = Kitchen::new();
    kitchen.stand_at_station(CRATE);
    kitchen.tap();

    kitchen.stand_at_station(BOARD);
    kitchen.press();
    kitchen.set_move(Vec2::new(1.0, 0.0));
    kitchen.hold(1.0);
    let player = kitchen.player();
    assert_eq!(
        kitchen.get::<Transform>(player).translation.x,
        station_x(BOARD),
        "locked players stay put"
    );
    kitchen.set_move(Vec2::ZERO);

    kitchen.release();
    let board = kitchen.station(BOARD);
    let paused = kitchen.get::<CuttingBoard>(board);
    assert_eq!(paused.phase, BoardPhase::Idle);
    let elapsed = paused.timer.elapsed_secs();
    assert!(elapsed > 0.9 && elapsed < 1.5, "elapsed {elapsed}");
    assert!(!kitchen.get::<MovementLock>(player).is_locked());

    // Pressing again resumes from where it stopped
    kitchen.press();
    assert!(kitchen.get::<CuttingBoard>(board).is_processing());
    kitchen.hold(1.2);
    assert_eq!(kitchen.get::<CuttingBoard>(board).phase, BoardPhase::Ready);
}

#[test]
fn dropped_ingredients_rest_on_the_floor_and_can_be_picked_up() {
    let mut kitchen = Kitchen::new();
    kitchen.stand_at_station(CRATE);
    kitchen.tap();
    let meat = kitchen.held().unwrap();

    kitchen.stand_at(OPEN_FLOOR_X);
    kitchen.tap();
    assert_eq!(kitchen.held(), None);
    assert!(kitchen.world().get::<ChildOf>(meat).is_none());
    let rest = kitchen.get::<Transform>(meat).translation;
    assert!((rest - Vec3::new(OPEN_FLOOR_X, 0.08, -1.0)).length() < 1e-4, "{rest}");

    kitchen.tap();
    assert_eq!(kitchen.held(), Some(meat));
}

#[test]
fn plates_stay_in_hand_away_from_a_surface() {
    let mut kitchen = Kitchen::new();
    kitchen.stand_at_station(RACK);
    kitchen.tap();
    let plate = kitchen.held().expect("rack should hand out a plate");
    assert!(kitchen.world().get::<Plate>(plate).is_some());

    kitchen.stand_at(OPEN_FLOOR_X);
    kitchen.tap();
    assert_eq!(kitchen.held(), Some(plate));

    // The fixed pot takes it once and keeps it
    kitchen.stand_at_station(POT);
    kitchen.tap();
    assert_eq!(kitchen.held(), None);
    let pot = kitchen.station(POT);
    assert_eq!(kitchen.get::<StationSlot>(pot).item, Some(plate));
    kitchen.tap();
    assert_eq!(kitchen.held(), None);
}

#[test]
fn raw_ingredients_are_refused_by_plates_that_need_cooked_food() {
    let mut kitchen = Kitchen::new();
    kitchen.stand_at_station(CRATE);
    kitchen.tap();
    let meat = kitchen.held().unwrap();

    kitchen.stand_at_station(TABLE);
    kitchen.tap();
    let plate = kitchen
        .get::<StationSlot>(kitchen.station(TABLE))
        .item
        .unwrap();
    assert!(kitchen.get::<Plate>(plate).placed.is_empty());

    // Refused by the plate, so the press falls through to a drop in front of the table
    assert_ne!(kitchen.held(), Some(meat));
    assert!(kitchen.world().get::<ChildOf>(meat).is_none());
}
