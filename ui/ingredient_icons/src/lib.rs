//! Flat icon sprites drawn on top of every ingredient, colored by kind and shaded by stage.

use {
    bevy::{platform::collections::HashMap, prelude::*},
    ingredient_components::{Ingredient, IngredientKind, IngredientStage},
    std::f32::consts::FRAC_PI_2,
    system_schedule::GameSchedule,
};

const ICON_SIZE: f32 = 0.18;
const ICON_HEIGHT: f32 = 0.11;

pub struct IngredientIconsPlugin;

impl Plugin for IngredientIconsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IngredientIcons>()
            .add_observer(on_ingredient_added)
            .add_systems(Update, shade_icons.in_set(GameSchedule::FrameEnd));
    }
}

/// Icon selection keyed by [`IngredientKind`]. An image replaces the plain square when set.
#[derive(Resource, Debug, Clone)]
pub struct IngredientIcons {
    pub colors: HashMap<IngredientKind, Color>,
    pub images: HashMap<IngredientKind, Handle<Image>>,
}

impl Default for IngredientIcons {
    fn default() -> Self {
        let colors = IngredientKind::ALL
            .into_iter()
            .map(|kind| (kind, default_color(kind)))
            .collect();
        Self {
            colors,
            images: HashMap::default(),
        }
    }
}

impl IngredientIcons {
    pub fn color(&self, kind: IngredientKind) -> Color {
        self.colors.get(&kind).copied().unwrap_or(Color::WHITE)
    }

    /// Base color shaded for the ingredient's current stage.
    pub fn tint(&self, ingredient: &Ingredient) -> Color {
        let base = self.color(ingredient.kind());
        match ingredient.stage() {
            IngredientStage::Raw => base,
            IngredientStage::Processed => base.lighter(0.15),
            IngredientStage::Cooked => base.darker(0.2),
            IngredientStage::Burnt => Color::srgb(0.1, 0.08, 0.06),
        }
    }

    fn sprite(&self, ingredient: &Ingredient) -> Sprite {
        let size = Vec2::splat(ICON_SIZE);
        match self.images.get(&ingredient.kind()) {
            Some(image) => Sprite {
                image: image.clone(),
                color: self.tint(ingredient),
                custom_size: Some(size),
                ..default()
            },
            None => Sprite::from_color(self.tint(ingredient), size),
        }
    }
}

fn default_color(kind: IngredientKind) -> Color {
    match kind {
        IngredientKind::Meat => Color::srgb(0.75, 0.25, 0.25),
        IngredientKind::Fish => Color::srgb(0.5, 0.7, 0.85),
        IngredientKind::Potato => Color::srgb(0.8, 0.65, 0.35),
        IngredientKind::Onion => Color::srgb(0.85, 0.8, 0.6),
        IngredientKind::Tomato => Color::srgb(0.9, 0.2, 0.1),
        IngredientKind::Herb => Color::srgb(0.3, 0.7, 0.3),
    }
}

#[derive(Component)]
pub struct IngredientIcon {
    pub ingredient: Entity,
}

fn on_ingredient_added(
    trigger: On<Add, Ingredient>,
    mut commands: Commands,
    icons: Res<IngredientIcons>,
    ingredients: Query<&Ingredient>,
) {
    let entity = trigger.event().entity;
    let Ok(ingredient) = ingredients.get(entity) else {
        return;
    };
    trace!("Icon '{}' for {entity}", ingredient.kind().icon_key());
    commands.spawn((
        IngredientIcon { ingredient: entity },
        Name::new(format!("{} Icon", ingredient.kind().icon_key())),
        icons.sprite(ingredient),
        Transform::from_xyz(0.0, ICON_HEIGHT, 0.0)
            .with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        ChildOf(entity),
    ));
}

/// Stage changes happen in place, so the tint follows them.
fn shade_icons(
    icons: Res<IngredientIcons>,
    changed: Query<&Ingredient, Changed<Ingredient>>,
    mut sprites: Query<(&IngredientIcon, &mut Sprite)>,
) {
    for (icon, mut sprite) in sprites.iter_mut() {
        if let Ok(ingredient) = changed.get(icon.ingredient) {
            sprite.color = icons.tint(ingredient);
        }
    }
}
