use {
    bevy::{platform::collections::HashMap, prelude::*},
    ingredient_components::IngredientKind,
    plate_components::Recipe,
};

/// Index of the first recipe whose ingredients are exactly `placed` as a multiset.
///
/// Recipes without a result never match.
pub fn find_recipe(recipes: &[Recipe], placed: &[IngredientKind]) -> Option<usize> {
    let placed_counts = count_kinds(placed);
    recipes.iter().position(|recipe| {
        recipe.result.is_some()
            && recipe.ingredients.len() == placed.len()
            && count_kinds(&recipe.ingredients) == placed_counts
    })
}

fn count_kinds(kinds: &[IngredientKind]) -> HashMap<IngredientKind, usize> {
    let mut counts = HashMap::default();
    for kind in kinds {
        *counts.entry(*kind).or_insert(0) += 1;
    }
    counts
}

/// Local offset of the `index`-th ingredient on a plate: a small ring, slightly stacked.
pub fn layout_offset(index: usize) -> Vec3 {
    const RADIUS: f32 = 0.08;
    const STEP_DEGREES: f32 = 45.0;
    const STACK_HEIGHT: f32 = 0.01;

    let angle = (index as f32 * STEP_DEGREES).to_radians();
    Vec3::new(angle.cos(), 0.0, angle.sin()) * RADIUS + Vec3::Y * (STACK_HEIGHT * index as f32)
}
