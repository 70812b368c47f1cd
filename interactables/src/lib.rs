//! Creating, destroying and moving interactables between owners.
//!
//! Instancing goes through the [`Spawner`] held in [`Spawning`]; ownership transfer
//! (`attach`, `drop_at`, `transmute`) is plain world mutation on top of it.

use bevy::prelude::*;

pub mod spawner;
pub mod transfer;

pub use {
    spawner::{PrefabSpawner, Spawner, Spawning, destroy, instantiate},
    transfer::{attach, drop_at, set_layer_recursive, transmute},
};

pub struct InteractablesPlugin;

impl Plugin for InteractablesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Spawning>();
    }
}
