use {bevy::prelude::*, interactable_components::LayerMask};

pub const DEFAULT_DETECT_RADIUS: f32 = 0.8;
pub const DEFAULT_DETECT_DISTANCE: f32 = 1.0;
pub const DEFAULT_DROP_DISTANCE: f32 = 1.0;
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;

pub struct PlayerComponentsPlugin;

impl Plugin for PlayerComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Player>()
            .register_type::<InteractionController>()
            .register_type::<HeldItem>()
            .register_type::<InteractionTarget>()
            .register_type::<InteractInput>()
            .register_type::<MoveInput>()
            .register_type::<Mover>()
            .register_type::<MovementLock>();
    }
}

#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component, Default)]
#[require(
    InteractionController,
    HeldItem,
    InteractionTarget,
    InteractInput,
    MoveInput,
    Mover,
    MovementLock
)]
pub struct Player;

/// Tuning for target detection and dropping.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct InteractionController {
    /// Radius of the detection sphere.
    pub detect_radius: f32,
    /// How far in front of the player the detection sphere sits.
    pub detect_distance: f32,
    /// How far in front of the player a refused placement drops the held item.
    pub drop_distance: f32,
    pub layers: LayerMask,
    pub interact_key: KeyCode,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            detect_radius: DEFAULT_DETECT_RADIUS,
            detect_distance: DEFAULT_DETECT_DISTANCE,
            drop_distance: DEFAULT_DROP_DISTANCE,
            layers: LayerMask::default(),
            interact_key: KeyCode::Space,
        }
    }
}

/// The single item the player carries. Cleared in the same step the item changes owner.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct HeldItem(pub Option<Entity>);

/// Nearest interactable in front of the player, refreshed every frame.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct InteractionTarget(pub Option<Entity>);

/// Edge signals for the interact button during the current frame.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct InteractInput {
    pub pressed: bool,
    pub held: bool,
    pub released: bool,
}

/// Movement axes: `x` strafes right, `y` moves forward.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Deref, DerefMut)]
#[reflect(Component, Default)]
pub struct MoveInput(pub Vec2);

#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct Mover {
    pub speed: f32,
}

impl Default for Mover {
    fn default() -> Self {
        Self {
            speed: DEFAULT_MOVE_SPEED,
        }
    }
}

/// Set while the player works a cutting board; movement is suppressed until it clears.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct MovementLock {
    pub board: Option<Entity>,
}

impl MovementLock {
    pub fn is_locked(&self) -> bool {
        self.board.is_some()
    }
}
