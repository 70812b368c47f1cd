//! Ingredient identity and processing stage.

use {bevy::prelude::*, interactable_components::PrefabId, serde::Deserialize};

pub struct IngredientComponentsPlugin;

impl Plugin for IngredientComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<IngredientKind>()
            .register_type::<IngredientStage>()
            .register_type::<Ingredient>()
            .register_type::<StagePrefabs>();
    }
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum IngredientKind {
    Meat,
    Fish,
    Potato,
    Onion,
    Tomato,
    Herb,
}

impl IngredientKind {
    pub const ALL: [IngredientKind; 6] = [
        Self::Meat,
        Self::Fish,
        Self::Potato,
        Self::Onion,
        Self::Tomato,
        Self::Herb,
    ];

    /// Key the presentation layer uses to pick an icon, e.g. `"potato"`.
    pub fn icon_key(self) -> &'static str {
        match self {
            Self::Meat => "meat",
            Self::Fish => "fish",
            Self::Potato => "potato",
            Self::Onion => "onion",
            Self::Tomato => "tomato",
            Self::Herb => "herb",
        }
    }
}

/// Stage a prefab starts in. Each stage implies all earlier ones.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum IngredientStage {
    #[default]
    Raw,
    Processed,
    Cooked,
    Burnt,
}

/// A food item. The stage flags only ever move forward: raw, processed, cooked, burnt.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct Ingredient {
    kind: IngredientKind,
    processed: bool,
    cooked: bool,
    burnt: bool,
}

impl Ingredient {
    pub fn new(kind: IngredientKind) -> Self {
        Self {
            kind,
            processed: false,
            cooked: false,
            burnt: false,
        }
    }

    pub fn at_stage(kind: IngredientKind, stage: IngredientStage) -> Self {
        let mut ingredient = Self::new(kind);
        match stage {
            IngredientStage::Raw => {}
            IngredientStage::Processed => ingredient.mark_processed(),
            IngredientStage::Cooked => ingredient.mark_cooked(),
            IngredientStage::Burnt => ingredient.mark_burnt(),
        }
        ingredient
    }

    pub fn kind(&self) -> IngredientKind {
        self.kind
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn is_cooked(&self) -> bool {
        self.cooked
    }

    pub fn is_burnt(&self) -> bool {
        self.burnt
    }

    pub fn stage(&self) -> IngredientStage {
        if self.burnt {
            IngredientStage::Burnt
        } else if self.cooked {
            IngredientStage::Cooked
        } else if self.processed {
            IngredientStage::Processed
        } else {
            IngredientStage::Raw
        }
    }

    pub fn mark_processed(&mut self) {
        self.processed = true;
    }

    pub fn mark_cooked(&mut self) {
        self.processed = true;
        self.cooked = true;
    }

    pub fn mark_burnt(&mut self) {
        self.processed = true;
        self.cooked = true;
        self.burnt = true;
    }
}

/// Prefabs that replace this ingredient when it reaches the next stage.
/// A missing entry means the station finishes its timer but leaves the item as it was.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component, Default)]
pub struct StagePrefabs {
    pub processed: Option<PrefabId>,
    pub cooked: Option<PrefabId>,
    pub burnt: Option<PrefabId>,
}
