use {
    bevy::prelude::*,
    ingredient_components::{Ingredient, StagePrefabs},
    interactable_components::{Body, Collider, Interactable, Layer, PrefabId},
    kitchen_resources::{PrefabLibrary, RecipeLibrary},
    plate_components::{Dish, Plate, PlateAnchors},
    prefab_assets::{PrefabDefinition, PrefabKind},
};

/// Height of the plate anchors above the plate pivot.
const PLATE_ANCHOR_HEIGHT: f32 = 0.02;

/// Turns prefab ids into live entities and removes them again.
pub trait Spawner: Send + Sync + 'static {
    /// Spawns `prefab`, parented under `parent` when given. `None` if the prefab is unknown
    /// or the parent no longer exists.
    fn instantiate(
        &self,
        world: &mut World,
        prefab: &PrefabId,
        parent: Option<Entity>,
    ) -> Option<Entity>;

    fn destroy(&self, world: &mut World, entity: Entity) {
        if let Ok(entity) = world.get_entity_mut(entity) {
            entity.despawn();
        }
    }
}

/// The installed spawner.
#[derive(Resource)]
pub struct Spawning(Box<dyn Spawner>);

impl Spawning {
    pub fn new(spawner: impl Spawner) -> Self {
        Self(Box::new(spawner))
    }
}

impl Default for Spawning {
    fn default() -> Self {
        Self::new(PrefabSpawner)
    }
}

pub fn instantiate(world: &mut World, prefab: &PrefabId, parent: Option<Entity>) -> Option<Entity> {
    world
        .try_resource_scope(|world, spawning: Mut<Spawning>| {
            spawning.0.instantiate(world, prefab, parent)
        })
        .flatten()
}

pub fn destroy(world: &mut World, entity: Entity) {
    if world
        .try_resource_scope(|world, spawning: Mut<Spawning>| spawning.0.destroy(world, entity))
        .is_none()
    {
        warn!("No spawner installed, {entity} was not destroyed");
    }
}

/// Builds entities from the [`PrefabLibrary`]. Plates are configured from the [`RecipeLibrary`].
pub struct PrefabSpawner;

impl Spawner for PrefabSpawner {
    fn instantiate(
        &self,
        world: &mut World,
        prefab: &PrefabId,
        parent: Option<Entity>,
    ) -> Option<Entity> {
        let Some(definition) = world
            .get_resource::<PrefabLibrary>()
            .and_then(|library| library.get(prefab))
            .cloned()
        else {
            warn!("Unknown prefab '{prefab}'");
            return None;
        };

        if parent.is_some_and(|parent| world.get_entity(parent).is_err()) {
            debug!("Not spawning '{prefab}': parent {parent:?} is gone");
            return None;
        }

        let entity = spawn_definition(world, &definition);
        if let Some(parent) = parent {
            world.entity_mut(entity).insert(ChildOf(parent));
        }
        trace!("Spawned '{prefab}' as {entity}");
        Some(entity)
    }
}

fn spawn_definition(world: &mut World, definition: &PrefabDefinition) -> Entity {
    let name = Name::new(definition.id.0.clone());
    let physical = (
        Collider::cuboid(definition.half_extents()),
        Body::default(),
        Layer::INTERACTABLE,
    );
    let placement = (
        Transform::IDENTITY,
        GlobalTransform::IDENTITY,
        Visibility::default(),
    );

    match &definition.kind {
        PrefabKind::Ingredient {
            kind,
            stage,
            processed,
            cooked,
            burnt,
        } => world
            .spawn((
                name,
                placement,
                physical,
                Interactable::Ingredient,
                Ingredient::at_stage(*kind, *stage),
                StagePrefabs {
                    processed: processed.clone(),
                    cooked: cooked.clone(),
                    burnt: burnt.clone(),
                },
            ))
            .id(),
        PrefabKind::Plate {
            require_cooked,
            recipes,
        } => {
            let recipes = world
                .get_resource::<RecipeLibrary>()
                .map(|library| library.for_plate(recipes.as_deref()))
                .unwrap_or_default();
            let plate = world
                .spawn((
                    name,
                    placement,
                    physical,
                    Interactable::Plate,
                    Plate {
                        require_cooked: *require_cooked,
                        ..Plate::new(recipes)
                    },
                ))
                .id();
            let ingredients = world
                .spawn((
                    Name::new("Ingredient Ring"),
                    Transform::from_xyz(0.0, PLATE_ANCHOR_HEIGHT, 0.0),
                    ChildOf(plate),
                ))
                .id();
            let result = world
                .spawn((
                    Name::new("Dish Anchor"),
                    Transform::from_xyz(0.0, PLATE_ANCHOR_HEIGHT, 0.0),
                    ChildOf(plate),
                ))
                .id();
            world
                .entity_mut(plate)
                .insert(PlateAnchors {
                    ingredients,
                    result,
                });
            plate
        }
        PrefabKind::Dish { name: dish } => world
            .spawn((name, placement, Dish { name: dish.clone() }))
            .id(),
    }
}
