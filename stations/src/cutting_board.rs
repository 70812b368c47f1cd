use {
    crate::{NextStage, advance_item, current_item, place_point, set_slot},
    bevy::prelude::*,
    ingredient_components::Ingredient,
    interactable_components::Interactable,
    interactables::attach,
    interaction_events::{ItemPlaced, ItemTaken, ProcessingCompleted},
    station_components::{BoardPhase, CuttingBoard, StationProgress, StationSlot},
};

/// Puts an unprocessed ingredient on an empty board. Processing does not start by itself.
pub fn place(world: &mut World, board: Entity, item: Entity) -> bool {
    if item == board || world.get::<CuttingBoard>(board).is_none() {
        return false;
    }
    let Some(anchor) = place_point(world, board) else {
        return false;
    };
    if current_item(world, board).is_some() {
        trace!("Board {board} is occupied");
        return false;
    }
    let Some(ingredient) = world.get::<Ingredient>(item) else {
        debug!("Board {board} only takes ingredients");
        return false;
    };
    if ingredient.is_processed() {
        debug!("Board {board} rejected already processed {:?}", ingredient.kind());
        return false;
    }
    if !attach(world, item, anchor) {
        return false;
    }

    set_slot(world, board, Some(item));
    if let Some(mut cutting_board) = world.get_mut::<CuttingBoard>(board) {
        cutting_board.timer.reset();
        cutting_board.phase = BoardPhase::Idle;
    }
    if let Some(mut progress) = world.get_mut::<StationProgress>(board) {
        progress.show(0.0);
    }
    world.trigger(ItemPlaced {
        station: board,
        item,
    });
    true
}

/// Starts or resumes processing. Needs an item that is neither in progress nor done.
pub fn start_process(world: &mut World, board: Entity) -> bool {
    if current_item(world, board).is_none() {
        return false;
    }
    let Some(mut cutting_board) = world.get_mut::<CuttingBoard>(board) else {
        return false;
    };
    if cutting_board.phase != BoardPhase::Idle {
        return false;
    }
    cutting_board.phase = BoardPhase::Processing;
    let fraction = cutting_board.progress();
    if let Some(mut progress) = world.get_mut::<StationProgress>(board) {
        progress.show(fraction);
    }
    trace!("Board {board} started processing at {fraction:.2}");
    true
}

/// Pauses processing. Elapsed time is kept for the next [`start_process`].
pub fn stop_process(world: &mut World, board: Entity) -> bool {
    let Some(mut cutting_board) = world.get_mut::<CuttingBoard>(board) else {
        return false;
    };
    if !cutting_board.is_processing() {
        return false;
    }
    cutting_board.phase = BoardPhase::Idle;
    trace!("Board {board} paused processing");
    true
}

/// Hands the board's item to `destination`. Refused while processing.
pub fn take_item(world: &mut World, board: Entity, destination: Entity) -> Option<Entity> {
    if world.get::<CuttingBoard>(board)?.is_processing() {
        trace!("Board {board} is busy");
        return None;
    }
    let item = current_item(world, board)?;
    if !attach(world, item, destination) {
        return None;
    }

    set_slot(world, board, None);
    if let Some(mut cutting_board) = world.get_mut::<CuttingBoard>(board) {
        cutting_board.timer.reset();
        cutting_board.phase = BoardPhase::Idle;
    }
    if let Some(mut progress) = world.get_mut::<StationProgress>(board) {
        progress.hide();
    }
    world.trigger(ItemTaken {
        station: board,
        item,
    });
    Some(item)
}

pub fn tick_cutting_boards(
    time: Res<Time>,
    mut commands: Commands,
    mut boards: Query<(
        Entity,
        &mut CuttingBoard,
        &mut StationSlot,
        &mut StationProgress,
    )>,
    items: Query<(), With<Interactable>>,
) {
    for (entity, mut board, mut slot, mut progress) in boards.iter_mut() {
        if slot.item.is_some_and(|item| !items.contains(item)) {
            debug!("Item on board {entity} disappeared");
            slot.item = None;
        }
        if slot.is_empty() {
            if board.phase != BoardPhase::Idle || progress.visible {
                board.phase = BoardPhase::Idle;
                board.timer.reset();
                progress.hide();
            }
            continue;
        }
        if !board.is_processing() {
            continue;
        }

        board.timer.tick(time.delta());
        progress.show(board.progress());
        if board.timer.is_finished() {
            commands.queue(CompleteProcessing { board: entity });
        }
    }
}

/// Finishes a board whose timer ran out: the item becomes its processed representation.
pub struct CompleteProcessing {
    pub board: Entity,
}

impl Command for CompleteProcessing {
    fn apply(self, world: &mut World) {
        let board = self.board;
        if !world
            .get::<CuttingBoard>(board)
            .is_some_and(CuttingBoard::is_processing)
        {
            return;
        }

        let advanced = advance_item(world, board, NextStage::Processed);
        let Some(mut cutting_board) = world.get_mut::<CuttingBoard>(board) else {
            return;
        };
        cutting_board.timer.reset();
        cutting_board.phase = if advanced.is_some() {
            BoardPhase::Ready
        } else {
            BoardPhase::Idle
        };
        if let Some(mut progress) = world.get_mut::<StationProgress>(board) {
            if advanced.is_some() {
                progress.show(1.0);
            } else {
                progress.hide();
            }
        }

        if let Some((item, kind)) = advanced {
            info!("Board {board} finished processing {kind:?}");
            world.trigger(ProcessingCompleted {
                board,
                item,
                kind: Some(kind),
            });
        }
    }
}
