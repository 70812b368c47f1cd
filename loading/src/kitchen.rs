//! Builds the kitchen described by a [`KitchenLayout`].

use {
    bevy::prelude::*,
    interactable_components::{Collider, HoldPoint, Interactable, Layer, PlacePoint},
    layout_assets::{KitchenLayout, StationKind, StationLayout},
    player_components::{InteractionController, Mover, Player},
    station_components::{CookingPot, CuttingBoard, IngredientCrate, PlateRack, Pot, Table},
    std::f32::consts::FRAC_PI_2,
};

const STATION_HALF_EXTENTS: Vec3 = Vec3::new(0.4, 0.5, 0.4);
const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(0.3, 0.5, 0.3);
/// Where the player carries items, relative to its pivot.
const HOLD_OFFSET: Vec3 = Vec3::new(0.0, 0.2, -0.45);

const FLOOR_COLOR: Color = Color::srgb(0.35, 0.3, 0.25);
const PLAYER_COLOR: Color = Color::srgb(0.2, 0.5, 0.9);

/// Entities created by [`spawn_kitchen`].
#[derive(Debug, Clone)]
pub struct SpawnedKitchen {
    pub floor: Entity,
    pub player: Entity,
    /// In layout order.
    pub stations: Vec<Entity>,
}

pub fn spawn_kitchen(world: &mut World, layout: &KitchenLayout) -> SpawnedKitchen {
    let floor_half = Vec3::from_array(layout.floor.half_extents);
    let floor_transform = Transform::from_translation(Vec3::from_array(layout.floor.position));
    let floor = world
        .spawn((
            Name::new("Floor"),
            floor_transform,
            GlobalTransform::from(floor_transform),
            Visibility::default(),
            Collider::cuboid(floor_half),
            Layer::DEFAULT,
        ))
        .id();
    attach_flat_sprite(world, floor, FLOOR_COLOR, floor_half);

    let stations = layout
        .stations
        .iter()
        .map(|station| spawn_station(world, station))
        .collect();

    let player = spawn_player(world, layout);

    SpawnedKitchen {
        floor,
        player,
        stations,
    }
}

fn spawn_player(world: &mut World, layout: &KitchenLayout) -> Entity {
    let tuning = &layout.player;
    let transform = Transform::from_translation(Vec3::from_array(tuning.position));
    let player = world
        .spawn((
            Name::new("Player"),
            Player,
            transform,
            GlobalTransform::from(transform),
            Visibility::default(),
            Collider::cuboid(PLAYER_HALF_EXTENTS),
            Layer::DEFAULT,
            InteractionController {
                detect_radius: tuning.detect_radius,
                detect_distance: tuning.detect_distance,
                drop_distance: tuning.drop_distance,
                ..default()
            },
            Mover {
                speed: tuning.move_speed,
            },
        ))
        .id();
    let hold_point = world
        .spawn((
            Name::new("Hold Point"),
            Transform::from_translation(HOLD_OFFSET),
            ChildOf(player),
        ))
        .id();
    world.entity_mut(player).insert(HoldPoint(hold_point));
    attach_flat_sprite(world, player, PLAYER_COLOR, PLAYER_HALF_EXTENTS);
    player
}

fn spawn_station(world: &mut World, layout: &StationLayout) -> Entity {
    let transform = Transform::from_translation(Vec3::from_array(layout.position))
        .with_rotation(Quat::from_rotation_y(layout.facing.to_radians()));
    let entity = world
        .spawn((
            transform,
            GlobalTransform::from(transform),
            Visibility::default(),
            Collider::cuboid(STATION_HALF_EXTENTS),
            Layer::INTERACTABLE,
        ))
        .id();

    let (name, interactable, color) = match &layout.station {
        StationKind::CuttingBoard { process_duration } => {
            world
                .entity_mut(entity)
                .insert(CuttingBoard::new(*process_duration));
            ("Cutting Board", Interactable::CuttingBoard, Color::srgb(0.75, 0.6, 0.4))
        }
        StationKind::CookingPot {
            cook_duration,
            burn_delay,
        } => {
            world
                .entity_mut(entity)
                .insert(CookingPot::new(*cook_duration, *burn_delay));
            ("Cooking Pot", Interactable::CookingPot, Color::srgb(0.3, 0.3, 0.35))
        }
        StationKind::Table { .. } => {
            world.entity_mut(entity).insert(Table);
            ("Table", Interactable::Table, Color::srgb(0.55, 0.4, 0.25))
        }
        StationKind::Pot => {
            world.entity_mut(entity).insert(Pot);
            ("Pot", Interactable::Pot, Color::srgb(0.45, 0.45, 0.5))
        }
        StationKind::PlateRack { plate } => {
            world.entity_mut(entity).insert(PlateRack {
                plate: Some(plate.clone()),
            });
            ("Plate Rack", Interactable::PlateRack, Color::srgb(0.9, 0.9, 0.9))
        }
        StationKind::Crate { kind, ingredient } => {
            world.entity_mut(entity).insert(IngredientCrate {
                kind: *kind,
                ingredient: Some(ingredient.clone()),
            });
            ("Crate", Interactable::Crate, Color::srgb(0.5, 0.35, 0.2))
        }
    };
    world
        .entity_mut(entity)
        .insert((Name::new(name), interactable));
    attach_flat_sprite(world, entity, color, STATION_HALF_EXTENTS);

    if interactable.can_place() {
        let anchor = world
            .spawn((
                Name::new("Place Point"),
                Transform::from_xyz(0.0, STATION_HALF_EXTENTS.y, 0.0),
                ChildOf(entity),
            ))
            .id();
        world.entity_mut(entity).insert(PlacePoint(anchor));
    }

    if let StationKind::Table { item: Some(prefab) } = &layout.station {
        prefill_table(world, entity, prefab);
    }

    debug!("Spawned {name} {entity}");
    entity
}

fn prefill_table(world: &mut World, table: Entity, prefab: &interactable_components::PrefabId) {
    let Some(item) = interactables::instantiate(world, prefab, None) else {
        return;
    };
    if !stations::table::place(world, table, item) {
        warn!("Table {table} refused its starting item '{prefab}'");
        interactables::destroy(world, item);
    }
}

/// A sprite lying on the ground plane, seen from the top-down camera.
pub fn flat_sprite(color: Color, size: Vec2, height: f32) -> impl Bundle {
    (
        Sprite::from_color(color, size),
        Transform::from_xyz(0.0, height, 0.0).with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
    )
}

fn attach_flat_sprite(world: &mut World, parent: Entity, color: Color, half_extents: Vec3) {
    world.spawn((
        flat_sprite(color, half_extents.xz() * 2.0, half_extents.y),
        ChildOf(parent),
    ));
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        ingredient_components::{IngredientKind, IngredientStage},
        interactables::Spawning,
        kitchen_resources::PrefabLibrary,
        layout_assets::{FloorLayout, PlayerLayout},
        plate_components::Plate,
        prefab_assets::{PrefabDefinition, PrefabKind},
        station_components::StationSlot,
    };

    fn layout() -> KitchenLayout {
        let station = |x: f32, station: StationKind| StationLayout {
            position: [x, 0.5, -2.0],
            facing: 0.0,
            station,
        };
        KitchenLayout {
            floor: FloorLayout {
                position: [0.0, -0.5, 0.0],
                half_extents: [6.0, 0.5, 6.0],
            },
            player: PlayerLayout {
                position: [0.0, 0.5, 0.0],
                detect_radius: 0.6,
                detect_distance: 1.2,
                drop_distance: 1.0,
                move_speed: 4.0,
            },
            stations: vec![
                station(-2.0, StationKind::CuttingBoard { process_duration: 3.0 }),
                station(0.0, StationKind::Table { item: Some("plate".into()) }),
                station(
                    2.0,
                    StationKind::Crate {
                        kind: IngredientKind::Meat,
                        ingredient: "meat".into(),
                    },
                ),
            ],
        }
    }

    fn world() -> World {
        let mut world = World::new();
        world.init_resource::<Spawning>();
        let mut library = PrefabLibrary::default();
        library
            .insert(PrefabDefinition {
                id: "plate".into(),
                kind: PrefabKind::Plate {
                    require_cooked: true,
                    recipes: None,
                },
                half_extents: [0.2, 0.02, 0.2],
            })
            .insert(PrefabDefinition {
                id: "meat".into(),
                kind: PrefabKind::Ingredient {
                    kind: IngredientKind::Meat,
                    stage: IngredientStage::Raw,
                    processed: None,
                    cooked: None,
                    burnt: None,
                },
                half_extents: [0.1, 0.1, 0.1],
            });
        world.insert_resource(library);
        world
    }

    #[test]
    fn stations_get_anchors_and_tuning() {
        let mut world = world();
        let kitchen = spawn_kitchen(&mut world, &layout());

        let [board, table, crate_station] = kitchen.stations[..] else {
            panic!("expected three stations");
        };
        assert_eq!(world.get::<Interactable>(board), Some(&Interactable::CuttingBoard));
        assert_eq!(
            world.get::<CuttingBoard>(board).unwrap().timer.duration().as_secs_f32(),
            3.0
        );
        let anchor = world.get::<PlacePoint>(board).unwrap().0;
        assert_eq!(world.get::<ChildOf>(anchor).map(ChildOf::parent), Some(board));

        // Dispensers never receive items, so they have no place point.
        assert!(world.get::<PlacePoint>(crate_station).is_none());
        assert_eq!(world.get::<Layer>(crate_station), Some(&Layer::INTERACTABLE));

        let plate = world.get::<StationSlot>(table).unwrap().item.unwrap();
        assert!(world.get::<Plate>(plate).is_some());
    }

    #[test]
    fn player_carries_layout_tuning_and_a_hold_point() {
        let mut world = world();
        let kitchen = spawn_kitchen(&mut world, &layout());

        let controller = world.get::<InteractionController>(kitchen.player).unwrap();
        assert_eq!(controller.detect_radius, 0.6);
        assert_eq!(controller.detect_distance, 1.2);
        assert_eq!(world.get::<Mover>(kitchen.player).unwrap().speed, 4.0);

        let hold = world.get::<HoldPoint>(kitchen.player).unwrap().0;
        assert_eq!(world.get::<ChildOf>(hold).map(ChildOf::parent), Some(kitchen.player));
        assert_eq!(world.get::<Layer>(kitchen.floor), Some(&Layer::DEFAULT));
    }
}
