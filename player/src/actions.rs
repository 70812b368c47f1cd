//! What the interact button does, given what the player holds and targets.

use {
    bevy::prelude::*,
    interactable_components::HoldPoint,
    interaction::{can_pick_up, can_place, drop_item, pick_up, place, resolve_cutting_board},
    player_components::{
        HeldItem, InteractInput, InteractionController, InteractionTarget, MovementLock, Player,
    },
    station_components::CuttingBoard,
    stations::cutting_board,
};

/// Keeps cutting boards working while the interact button stays down.
///
/// A locked player stops its board on release and unlocks once the board stops processing
/// for any reason. An empty-handed player still holding the button resumes a paused board
/// in front of them.
pub fn update_processing_hold(world: &mut World) {
    let mut players = world.query_filtered::<(
        Entity,
        &InteractInput,
        &HeldItem,
        &InteractionTarget,
        &MovementLock,
    ), With<Player>>();
    let players: Vec<_> = players
        .iter(world)
        .map(|(entity, input, held, target, lock)| (entity, *input, held.0, target.0, lock.board))
        .collect();

    for (player, input, held, target, locked) in players {
        if let Some(board) = locked {
            if input.released || !input.held {
                cutting_board::stop_process(world, board);
                set_lock(world, player, None);
            } else if !world
                .get::<CuttingBoard>(board)
                .is_some_and(CuttingBoard::is_processing)
            {
                set_lock(world, player, None);
            }
            continue;
        }
        if held.is_some() {
            continue;
        }
        let Some(board) = target.and_then(|target| resolve_cutting_board(world, target)) else {
            continue;
        };
        if input.released {
            cutting_board::stop_process(world, board);
        } else if input.held && !input.pressed && cutting_board::start_process(world, board) {
            set_lock(world, player, Some(board));
        }
    }
}

struct PressContext {
    player: Entity,
    held_down: bool,
    held: Option<Entity>,
    target: Option<Entity>,
    hold_point: Option<Entity>,
    drop_position: Vec3,
}

/// Resolves one interact press per player: start a board, pick up, place, or drop.
pub fn handle_interact_press(world: &mut World) {
    let mut players = world.query_filtered::<(
        Entity,
        &InteractInput,
        &HeldItem,
        &InteractionTarget,
        &InteractionController,
        Option<&HoldPoint>,
        &GlobalTransform,
    ), With<Player>>();
    let presses: Vec<_> = players
        .iter(world)
        .filter(|(_, input, ..)| input.pressed)
        .map(
            |(player, input, held, target, controller, hold_point, transform)| PressContext {
                player,
                held_down: input.held,
                held: held.0,
                target: target.0,
                hold_point: hold_point.map(|hold_point| hold_point.0),
                drop_position: transform.translation()
                    + transform.forward().as_vec3() * controller.drop_distance,
            },
        )
        .collect();

    for press in presses {
        let exists = |entity: &Entity| world.get_entity(*entity).is_ok();
        let held = press.held.filter(exists);
        let target = press.target.filter(exists);
        if held != press.held {
            set_held(world, press.player, None);
        }

        match held {
            None => press_empty_handed(world, &press, target),
            Some(item) => press_holding(world, &press, item, target),
        }
    }
}

fn press_empty_handed(world: &mut World, press: &PressContext, target: Option<Entity>) {
    let Some(target) = target else {
        return;
    };
    if let Some(board) = resolve_cutting_board(world, target) {
        if cutting_board::start_process(world, board) {
            if press.held_down {
                set_lock(world, press.player, Some(board));
            }
            return;
        }
    }
    if !can_pick_up(world, target) {
        trace!("Nothing to pick up from {target}");
        return;
    }
    let Some(hold_point) = press
        .hold_point
        .filter(|hold_point| world.get_entity(*hold_point).is_ok())
    else {
        warn!("Player {} has no hold point", press.player);
        return;
    };
    if let Some(item) = pick_up(world, target, hold_point) {
        set_held(world, press.player, Some(item));
    }
}

fn press_holding(world: &mut World, press: &PressContext, item: Entity, target: Option<Entity>) {
    if let Some(target) = target.filter(|target| can_place(world, *target)) {
        if place(world, target, item) {
            set_held(world, press.player, None);
            if let Some(board) = resolve_cutting_board(world, target) {
                if cutting_board::start_process(world, board) && press.held_down {
                    set_lock(world, press.player, Some(board));
                }
            }
            return;
        }
    }
    if drop_item(world, item, press.drop_position) {
        set_held(world, press.player, None);
    }
}

fn set_held(world: &mut World, player: Entity, item: Option<Entity>) {
    if let Some(mut held) = world.get_mut::<HeldItem>(player) {
        held.0 = item;
    }
}

fn set_lock(world: &mut World, player: Entity, board: Option<Entity>) {
    if let Some(mut lock) = world.get_mut::<MovementLock>(player) {
        if lock.board != board {
            debug!("Player {player} movement lock: {board:?}");
            lock.board = board;
        }
    }
}
