#![allow(dead_code)]

use {
    bevy::{prelude::*, state::app::StatesPlugin, transform::TransformPlugin},
    core::GameplayPlugin,
    ingredient_components::IngredientKind,
    kitchen_resources::{PrefabLibrary, RecipeLibrary},
    layout_assets::{FloorLayout, KitchenLayout, PlayerLayout, StationKind, StationLayout},
    loading::{SpawnedKitchen, spawn_kitchen},
    player_components::{HeldItem, InteractInput, MoveInput},
    prefab_assets::PrefabCatalog,
    recipes_assets::RecipeBook,
    states::GameState,
    std::time::Duration,
};

pub const STEP: f32 = 0.1;

/// Station order in [`layout`].
pub const CRATE: usize = 0;
pub const BOARD: usize = 1;
pub const COOKING_POT: usize = 2;
pub const TABLE: usize = 3;
pub const RACK: usize = 4;
pub const POT: usize = 5;

/// Stations sit 2 units apart on one row, so standing in front of one never reaches another.
pub fn station_x(index: usize) -> f32 {
    index as f32 * 2.0
}

/// Nothing within reach here.
pub const OPEN_FLOOR_X: f32 = -4.0;

pub fn layout() -> KitchenLayout {
    let station = |index: usize, station: StationKind| StationLayout {
        position: [station_x(index), 0.5, -2.0],
        facing: 0.0,
        station,
    };
    KitchenLayout {
        floor: FloorLayout {
            position: [0.0, -0.5, 0.0],
            half_extents: [16.0, 0.5, 8.0],
        },
        player: PlayerLayout {
            position: [0.0, 0.5, 0.0],
            detect_radius: 0.8,
            detect_distance: 1.0,
            drop_distance: 1.0,
            move_speed: 5.0,
        },
        stations: vec![
            station(
                CRATE,
                StationKind::Crate {
                    kind: IngredientKind::Meat,
                    ingredient: "meat".into(),
                },
            ),
            station(BOARD, StationKind::CuttingBoard { process_duration: 2.0 }),
            station(
                COOKING_POT,
                StationKind::CookingPot {
                    cook_duration: 3.0,
                    burn_delay: 4.0,
                },
            ),
            station(TABLE, StationKind::Table { item: Some("plate".into()) }),
            station(RACK, StationKind::PlateRack { plate: "plate".into() }),
            station(POT, StationKind::Pot),
        ],
    }
}

pub struct Kitchen {
    pub app: App,
    pub spawned: SpawnedKitchen,
}

impl Kitchen {
    /// Headless kitchen built from the shipped prefab and recipe files.
    pub fn new() -> Self {
        let catalog: PrefabCatalog =
            ron::from_str(include_str!("../../../assets/kitchen.prefabs.ron"))
                .expect("prefab catalog should parse");
        let book: RecipeBook = ron::from_str(include_str!("../../../assets/kitchen.recipes.ron"))
            .expect("recipe book should parse");

        let mut app = App::new();
        app.add_plugins((StatesPlugin, TransformPlugin, GameplayPlugin))
            .insert_state(GameState::Running)
            .init_resource::<Time>()
            .insert_resource(PrefabLibrary::from_catalog(&catalog))
            .insert_resource(RecipeLibrary::from_book(&book));

        let spawned = spawn_kitchen(app.world_mut(), &layout());
        let mut kitchen = Self { app, spawned };
        kitchen.tick(0.0);
        kitchen
    }

    pub fn player(&self) -> Entity {
        self.spawned.player
    }

    pub fn station(&self, index: usize) -> Entity {
        self.spawned.stations[index]
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn tick(&mut self, seconds: f32) {
        self.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(seconds));
        self.app.update();
    }

    /// Ticks in [`STEP`] increments until `seconds` have passed.
    pub fn run_for(&mut self, seconds: f32) {
        let steps = (seconds / STEP).ceil() as usize;
        for _ in 0..steps {
            self.tick(STEP);
        }
    }

    /// Moves the player in front of the station at `index`, facing it.
    pub fn stand_at_station(&mut self, index: usize) {
        self.stand_at(station_x(index));
    }

    pub fn stand_at(&mut self, x: f32) {
        let transform = Transform::from_xyz(x, 0.5, 0.0);
        let player = self.player();
        self.world_mut()
            .entity_mut(player)
            .insert((transform, GlobalTransform::from(transform)));
    }

    fn set_input(&mut self, input: InteractInput) {
        let player = self.player();
        *self.world_mut().get_mut::<InteractInput>(player).unwrap() = input;
    }

    /// First frame of the interact button.
    pub fn press(&mut self) {
        self.set_input(InteractInput {
            pressed: true,
            held: true,
            released: false,
        });
        self.tick(STEP);
        self.set_input(InteractInput {
            pressed: false,
            held: true,
            released: false,
        });
    }

    /// Keeps the button down for `seconds`.
    pub fn hold(&mut self, seconds: f32) {
        self.run_for(seconds);
    }

    pub fn release(&mut self) {
        self.set_input(InteractInput {
            pressed: false,
            held: false,
            released: true,
        });
        self.tick(STEP);
        self.set_input(InteractInput::default());
    }

    /// Press and release on consecutive frames.
    pub fn tap(&mut self) {
        self.press();
        self.release();
    }

    pub fn set_move(&mut self, direction: Vec2) {
        let player = self.player();
        self.world_mut().get_mut::<MoveInput>(player).unwrap().0 = direction;
    }

    pub fn held(&self) -> Option<Entity> {
        self.world().get::<HeldItem>(self.player()).unwrap().0
    }

    pub fn get<C: Component>(&self, entity: Entity) -> &C {
        self.world()
            .get::<C>(entity)
            .unwrap_or_else(|| panic!("{entity} lacks {}", std::any::type_name::<C>()))
    }
}
