//! Shared data for everything the player can hold or place things on.
//!
//! The behavior behind these components lives in the `interactables`, `stations`,
//! `plates` and `interaction` crates; this crate only describes the data.

use {bevy::prelude::*, serde::Deserialize};

pub struct InteractableComponentsPlugin;

impl Plugin for InteractableComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Interactable>()
            .register_type::<PrefabId>()
            .register_type::<PlacePoint>()
            .register_type::<HoldPoint>()
            .register_type::<Layer>()
            .register_type::<Collider>()
            .register_type::<Body>();
    }
}

/// Tags an entity as interactable and names which capability set it exposes.
///
/// Every pick-up/place/drop request is dispatched on this tag instead of probing for
/// concrete station components.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[reflect(Component)]
pub enum Interactable {
    Ingredient,
    CuttingBoard,
    CookingPot,
    PlateRack,
    Crate,
    Table,
    Pot,
    Plate,
}

/// What a pick-up request against an interactable actually hands to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickUpMode {
    /// The interactable itself moves into the player's hands.
    Carry,
    /// The station hands over whatever sits in its slot.
    Take,
    /// The station spawns a fresh item and stays where it is.
    Spawn,
    /// Nothing can ever be picked up here.
    Fixed,
}

impl Interactable {
    /// Whether this variant accepts `Place` requests at all. Fixed per variant.
    pub fn can_place(self) -> bool {
        matches!(
            self,
            Self::CuttingBoard | Self::CookingPot | Self::Table | Self::Pot
        )
    }

    pub fn pick_up_mode(self) -> PickUpMode {
        match self {
            Self::Ingredient | Self::Plate => PickUpMode::Carry,
            Self::CuttingBoard | Self::CookingPot | Self::Table => PickUpMode::Take,
            Self::PlateRack | Self::Crate => PickUpMode::Spawn,
            Self::Pot => PickUpMode::Fixed,
        }
    }
}

/// Key into the prefab library, e.g. `"potato_sliced"`.
#[derive(Reflect, Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PrefabId(pub String);

impl From<&str> for PrefabId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PrefabId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for PrefabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anchor entity a station parents its slot item under.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct PlacePoint(pub Entity);

impl Default for PlacePoint {
    fn default() -> Self {
        Self(Entity::PLACEHOLDER)
    }
}

/// Anchor entity the player carries its held item under.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct HoldPoint(pub Entity);

impl Default for HoldPoint {
    fn default() -> Self {
        Self(Entity::PLACEHOLDER)
    }
}

/// World layer used for detection filtering. Copied across every stage transition.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[reflect(Component, Default)]
pub struct Layer(pub u8);

impl Layer {
    pub const DEFAULT: Layer = Layer(0);
    pub const INTERACTABLE: Layer = Layer(1);
}

/// Bit set of layers, bit `n` selects `Layer(n)`.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    pub fn from_layers(layers: &[Layer]) -> Self {
        Self(layers.iter().fold(0, |mask, layer| mask | Self::bit(*layer)))
    }

    pub fn contains(self, layer: Layer) -> bool {
        self.0 & Self::bit(layer) != 0
    }

    fn bit(layer: Layer) -> u32 {
        1u32.checked_shl(u32::from(layer.0)).unwrap_or(0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::from_layers(&[Layer::INTERACTABLE])
    }
}

/// Axis-aligned box collider centered on the entity's pivot.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct Collider {
    pub half_extents: Vec3,
    /// Disabled colliders are invisible to overlap and ray queries.
    pub enabled: bool,
}

impl Collider {
    pub fn cuboid(half_extents: Vec3) -> Self {
        Self {
            half_extents,
            enabled: true,
        }
    }

    /// Distance from the pivot down to the bottom face.
    pub fn bottom_offset(&self) -> f32 {
        self.half_extents.y
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::cuboid(Vec3::splat(0.1))
    }
}

/// Minimal rigid-body state. Carried items are kinematic and at rest.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component, Default)]
pub struct Body {
    pub kinematic: bool,
    pub velocity: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_receiving_stations_accept_placement() {
        let accepting: Vec<_> = [
            Interactable::Ingredient,
            Interactable::CuttingBoard,
            Interactable::CookingPot,
            Interactable::PlateRack,
            Interactable::Crate,
            Interactable::Table,
            Interactable::Pot,
            Interactable::Plate,
        ]
        .into_iter()
        .filter(|i| i.can_place())
        .collect();

        assert_eq!(
            accepting,
            vec![
                Interactable::CuttingBoard,
                Interactable::CookingPot,
                Interactable::Table,
                Interactable::Pot
            ]
        );
    }

    #[test]
    fn layer_mask_selects_by_bit() {
        let mask = LayerMask::from_layers(&[Layer(1), Layer(3)]);
        assert!(mask.contains(Layer(1)));
        assert!(mask.contains(Layer(3)));
        assert!(!mask.contains(Layer::DEFAULT));
        assert!(!LayerMask::NONE.contains(Layer(1)));
        // Layers past the mask width never match instead of overflowing.
        assert!(!LayerMask::ALL.contains(Layer(40)));
    }
}
