//! Kitchen layout loaded from `.layout.ron`: the floor, the player's tuning and every
//! station with its position and timings.

use {
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    ingredient_components::IngredientKind,
    interactable_components::PrefabId,
    serde::Deserialize,
};

pub struct LayoutAssetsPlugin;

impl Plugin for LayoutAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<KitchenLayout>::new(&["layout.ron"]));
    }
}

#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct KitchenLayout {
    pub floor: FloorLayout,
    pub player: PlayerLayout,
    pub stations: Vec<StationLayout>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FloorLayout {
    pub position: [f32; 3],
    pub half_extents: [f32; 3],
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerLayout {
    pub position: [f32; 3],
    #[serde(default = "default_detect_radius")]
    pub detect_radius: f32,
    #[serde(default = "default_detect_distance")]
    pub detect_distance: f32,
    #[serde(default = "default_drop_distance")]
    pub drop_distance: f32,
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationLayout {
    pub position: [f32; 3],
    /// Rotation around the vertical axis, in degrees
    #[serde(default)]
    pub facing: f32,
    pub station: StationKind,
}

#[derive(Debug, Clone, Deserialize)]
pub enum StationKind {
    CuttingBoard {
        #[serde(default = "default_process_duration")]
        process_duration: f32,
    },
    CookingPot {
        #[serde(default = "default_cook_duration")]
        cook_duration: f32,
        #[serde(default = "default_burn_delay")]
        burn_delay: f32,
    },
    Table {
        /// Item placed on the table when the kitchen opens (usually a plate)
        #[serde(default)]
        item: Option<PrefabId>,
    },
    Pot,
    PlateRack {
        plate: PrefabId,
    },
    Crate {
        kind: IngredientKind,
        ingredient: PrefabId,
    },
}

fn default_detect_radius() -> f32 {
    0.8
}

fn default_detect_distance() -> f32 {
    1.0
}

fn default_drop_distance() -> f32 {
    1.0
}

fn default_move_speed() -> f32 {
    5.0
}

fn default_process_duration() -> f32 {
    2.0
}

fn default_cook_duration() -> f32 {
    5.0
}

fn default_burn_delay() -> f32 {
    6.0
}
