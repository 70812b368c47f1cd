use {
    bevy::{platform::collections::HashMap, prelude::*},
    interactable_components::PrefabId,
    plate_components::Recipe,
    prefab_assets::{PrefabCatalog, PrefabDefinition},
    recipes_assets::RecipeBook,
};

/// Every prefab the spawner can instantiate, keyed by id.
#[derive(Resource, Debug, Default, Clone)]
pub struct PrefabLibrary {
    pub prefabs: HashMap<PrefabId, PrefabDefinition>,
}

impl PrefabLibrary {
    pub fn from_catalog(catalog: &PrefabCatalog) -> Self {
        let mut library = Self::default();
        for definition in &catalog.prefabs {
            library.insert(definition.clone());
        }
        library
    }

    /// Adds or replaces a definition. Later definitions win on duplicate ids.
    pub fn insert(&mut self, definition: PrefabDefinition) -> &mut Self {
        if self.prefabs.contains_key(&definition.id) {
            warn!("Prefab '{}' defined twice, keeping the last one", definition.id);
        }
        self.prefabs.insert(definition.id.clone(), definition);
        self
    }

    pub fn get(&self, id: &PrefabId) -> Option<&PrefabDefinition> {
        self.prefabs.get(id)
    }
}

/// Recipes every new plate is configured with, in matching order.
#[derive(Resource, Debug, Default, Clone)]
pub struct RecipeLibrary {
    pub recipes: Vec<Recipe>,
}

impl RecipeLibrary {
    pub fn from_book(book: &RecipeBook) -> Self {
        Self {
            recipes: book
                .recipes
                .iter()
                .map(|def| Recipe {
                    name: def.name.clone(),
                    ingredients: def.ingredients.clone(),
                    result: def.result.clone(),
                })
                .collect(),
        }
    }

    /// Recipes for a plate; `filter` keeps only the named ones, in library order.
    pub fn for_plate(&self, filter: Option<&[String]>) -> Vec<Recipe> {
        match filter {
            None => self.recipes.clone(),
            Some(names) => self
                .recipes
                .iter()
                .filter(|recipe| names.contains(&recipe.name))
                .cloned()
                .collect(),
        }
    }
}

pub struct KitchenResourcesPlugin;

impl Plugin for KitchenResourcesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PrefabLibrary>()
            .init_resource::<RecipeLibrary>();
    }
}
