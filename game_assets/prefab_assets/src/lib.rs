//! Prefab definitions: the templates spawned for ingredients at each stage, plates and
//! finished dishes. Loaded from `.prefabs.ron` files.

use {
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    ingredient_components::{IngredientKind, IngredientStage},
    interactable_components::PrefabId,
    serde::Deserialize,
};

pub struct PrefabAssetsPlugin;

impl Plugin for PrefabAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<PrefabCatalog>::new(&["prefabs.ron"]));
    }
}

#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct PrefabCatalog {
    pub prefabs: Vec<PrefabDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrefabDefinition {
    pub id: PrefabId,
    pub kind: PrefabKind,
    /// Collider half extents; the bottom face sits `half_extents.1` below the pivot
    #[serde(default = "default_half_extents")]
    pub half_extents: [f32; 3],
}

impl PrefabDefinition {
    pub fn half_extents(&self) -> Vec3 {
        Vec3::from_array(self.half_extents)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub enum PrefabKind {
    Ingredient {
        kind: IngredientKind,
        #[serde(default)]
        stage: IngredientStage,
        #[serde(default)]
        processed: Option<PrefabId>,
        #[serde(default)]
        cooked: Option<PrefabId>,
        #[serde(default)]
        burnt: Option<PrefabId>,
    },
    Plate {
        #[serde(default = "default_require_cooked")]
        require_cooked: bool,
        /// Restrict the plate to these recipe names; `None` uses the whole recipe book
        #[serde(default)]
        recipes: Option<Vec<String>>,
    },
    Dish {
        name: String,
    },
}

fn default_half_extents() -> [f32; 3] {
    [0.1, 0.1, 0.1]
}

fn default_require_cooked() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_with_defaults() {
        let catalog: PrefabCatalog = ron::from_str(
            r#"(
                prefabs: [
                    (id: "fish", kind: Ingredient(kind: Fish, processed: Some("fish_fillet"))),
                    (
                        id: "fish_fillet",
                        kind: Ingredient(kind: Fish, stage: Processed),
                        half_extents: (0.2, 0.05, 0.1),
                    ),
                    (id: "plate", kind: Plate(require_cooked: true)),
                    (id: "grilled_fish", kind: Dish(name: "Grilled Fish")),
                ],
            )"#,
        )
        .expect("catalog should parse");

        assert_eq!(catalog.prefabs.len(), 4);

        let PrefabKind::Ingredient {
            kind,
            stage,
            processed,
            cooked,
            ..
        } = &catalog.prefabs[0].kind
        else {
            panic!("expected an ingredient prefab");
        };
        assert_eq!(*kind, IngredientKind::Fish);
        assert_eq!(*stage, IngredientStage::Raw);
        assert_eq!(processed.as_ref(), Some(&PrefabId::from("fish_fillet")));
        assert!(cooked.is_none());
        assert_eq!(catalog.prefabs[0].half_extents(), Vec3::splat(0.1));
        assert_eq!(catalog.prefabs[1].half_extents(), Vec3::new(0.2, 0.05, 0.1));

        let PrefabKind::Plate {
            require_cooked,
            recipes,
        } = &catalog.prefabs[2].kind
        else {
            panic!("expected a plate prefab");
        };
        assert!(*require_cooked);
        assert!(recipes.is_none());
    }
}
