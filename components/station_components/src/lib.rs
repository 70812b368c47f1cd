//! Components for kitchen stations: the single item slot, the two timed
//! processing stations and the plain containers/dispensers.

use {
    bevy::prelude::*,
    ingredient_components::IngredientKind,
    interactable_components::PrefabId,
};

pub const DEFAULT_PROCESS_DURATION: f32 = 2.0;
pub const DEFAULT_COOK_DURATION: f32 = 5.0;
pub const DEFAULT_BURN_DELAY: f32 = 6.0;

pub struct StationComponentsPlugin;

impl Plugin for StationComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<StationSlot>()
            .register_type::<StationProgress>()
            .register_type::<CuttingBoard>()
            .register_type::<BoardPhase>()
            .register_type::<CookingPot>()
            .register_type::<PotState>()
            .register_type::<Table>()
            .register_type::<Pot>()
            .register_type::<PlateRack>()
            .register_type::<IngredientCrate>();
    }
}

/// The one item a station currently owns. Set and cleared only at transfer time.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct StationSlot {
    pub item: Option<Entity>,
}

impl StationSlot {
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}

/// Progress the presentation layer renders for a station.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component, Default)]
pub struct StationProgress {
    /// Normalized to `[0, 1]`.
    pub fraction: f32,
    pub visible: bool,
}

impl StationProgress {
    pub fn show(&mut self, fraction: f32) {
        self.fraction = fraction.clamp(0.0, 1.0);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.fraction = 0.0;
        self.visible = false;
    }
}

#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardPhase {
    #[default]
    Idle,
    Processing,
    Ready,
}

/// Observable state of a cutting board, slot included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    Empty,
    OccupiedIdle,
    Processing,
    Ready,
}

/// Processes one raw ingredient while the player keeps working it.
///
/// Stopping keeps the elapsed time; only removing the item or finishing resets it.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component, Default)]
#[require(StationSlot, StationProgress)]
pub struct CuttingBoard {
    pub timer: Timer,
    pub phase: BoardPhase,
}

impl CuttingBoard {
    pub fn new(process_duration: f32) -> Self {
        Self {
            timer: Timer::from_seconds(
                timer_seconds(process_duration, DEFAULT_PROCESS_DURATION),
                TimerMode::Once,
            ),
            phase: BoardPhase::Idle,
        }
    }

    pub fn is_processing(&self) -> bool {
        self.phase == BoardPhase::Processing
    }

    pub fn is_ready(&self) -> bool {
        self.phase == BoardPhase::Ready
    }

    pub fn state(&self, slot: &StationSlot) -> BoardState {
        match (slot.item, self.phase) {
            (None, _) => BoardState::Empty,
            (Some(_), BoardPhase::Idle) => BoardState::OccupiedIdle,
            (Some(_), BoardPhase::Processing) => BoardState::Processing,
            (Some(_), BoardPhase::Ready) => BoardState::Ready,
        }
    }

    /// Elapsed processing time over the configured duration, clamped to `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.timer.fraction().clamp(0.0, 1.0)
    }
}

impl Default for CuttingBoard {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESS_DURATION)
    }
}

#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PotState {
    /// Empty, or holding something it will not cook any further.
    #[default]
    Idle,
    Cooking,
    CookedReady,
    /// Terminal until the item is taken out.
    Burnt,
}

/// Cooks a processed ingredient as soon as it is placed, then burns it if nobody
/// collects it within `burn_delay` seconds.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component, Default)]
#[require(StationSlot, StationProgress)]
pub struct CookingPot {
    pub cook_timer: Timer,
    pub burn_timer: Timer,
    pub state: PotState,
}

impl CookingPot {
    pub fn new(cook_duration: f32, burn_delay: f32) -> Self {
        Self {
            cook_timer: Timer::from_seconds(
                timer_seconds(cook_duration, DEFAULT_COOK_DURATION),
                TimerMode::Once,
            ),
            burn_timer: Timer::from_seconds(
                timer_seconds(burn_delay, DEFAULT_BURN_DELAY),
                TimerMode::Once,
            ),
            state: PotState::Idle,
        }
    }

    pub fn is_cooking(&self) -> bool {
        self.state == PotState::Cooking
    }

    pub fn reset_timers(&mut self) {
        self.cook_timer.reset();
        self.burn_timer.reset();
    }

    pub fn progress(&self) -> f32 {
        self.cook_timer.fraction().clamp(0.0, 1.0)
    }
}

impl Default for CookingPot {
    fn default() -> Self {
        Self::new(DEFAULT_COOK_DURATION, DEFAULT_BURN_DELAY)
    }
}

/// Plain single-slot surface. A plate sitting on it receives every placement.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component, Default)]
#[require(StationSlot)]
pub struct Table;

/// Write-once holder: accepts one item and never gives it back.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component, Default)]
#[require(StationSlot)]
pub struct Pot;

/// Hands out a fresh plate on every pick-up.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component, Default)]
pub struct PlateRack {
    pub plate: Option<PrefabId>,
}

/// Hands out a fresh raw ingredient of `kind` on every pick-up.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct IngredientCrate {
    pub kind: IngredientKind,
    pub ingredient: Option<PrefabId>,
}

/// Negative durations finish immediately; infinite or NaN ones fall back to `default`.
fn timer_seconds(seconds: f32, default: f32) -> f32 {
    if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        default
    }
}
