//! Ownership transfer between hold points, station anchors and the floor.
//!
//! Every function validates its inputs before touching the world and returns whether it did
//! anything. A `false`/`None` result means nothing changed.

use {
    crate::spawner::{destroy, instantiate},
    bevy::prelude::*,
    interactable_components::{Body, Collider, Layer, PrefabId},
};

/// Grounding rays start this far above the requested drop position.
pub const DROP_RAY_HEIGHT: f32 = 1.0;
pub const DROP_RAY_DISTANCE: f32 = 5.0;

/// Parents `item` under `anchor` at identity, frozen: no velocity, kinematic, collider off.
///
/// Rejected when the anchor is missing or sits inside the item's own hierarchy.
pub fn attach(world: &mut World, item: Entity, anchor: Entity) -> bool {
    if world.get_entity(item).is_err() || world.get_entity(anchor).is_err() {
        return false;
    }
    if is_same_or_descendant(world, anchor, item) {
        debug!("Refusing to attach {item} under its own hierarchy");
        return false;
    }

    let mut entity = world.entity_mut(item);
    if let Some(mut body) = entity.get_mut::<Body>() {
        body.velocity = Vec3::ZERO;
        body.kinematic = true;
    }
    if let Some(mut collider) = entity.get_mut::<Collider>() {
        collider.enabled = false;
    }
    entity.insert((ChildOf(anchor), Transform::IDENTITY));
    true
}

/// Releases `item` into the world near `position`, resting on the first surface below.
///
/// The surface is found with a downward ray that ignores the item itself; the item keeps
/// its bottom-to-pivot clearance above the hit point. Without a hit it lands at `position`.
pub fn drop_at(world: &mut World, item: Entity, position: Vec3) -> bool {
    let Ok(entity) = world.get_entity(item) else {
        return false;
    };
    let clearance = entity
        .get::<Collider>()
        .map_or(0.0, |collider| collider.bottom_offset().max(0.0));

    let grounded = physics_probe::raycast_down(
        world,
        position + Vec3::Y * DROP_RAY_HEIGHT,
        DROP_RAY_DISTANCE,
        item,
    )
    .map_or(position, |hit| hit.point + Vec3::Y * clearance);

    let mut entity = world.entity_mut(item);
    entity.remove::<ChildOf>();
    if let Some(mut collider) = entity.get_mut::<Collider>() {
        collider.enabled = true;
    }
    if let Some(mut body) = entity.get_mut::<Body>() {
        body.kinematic = false;
    }
    entity.insert((
        Transform::from_translation(grounded),
        GlobalTransform::from_translation(grounded),
    ));
    true
}

pub fn set_layer_recursive(world: &mut World, root: Entity, layer: Layer) {
    let mut pending = vec![root];
    while let Some(current) = pending.pop() {
        let Ok(mut entity) = world.get_entity_mut(current) else {
            continue;
        };
        entity.insert(layer);
        if let Some(children) = entity.get::<Children>() {
            pending.extend_from_slice(children);
        }
    }
}

/// Replaces `current` with a fresh instance of `prefab` attached at `anchor`.
///
/// The replacement is spawned before anything is destroyed, so an unknown prefab or a
/// missing anchor leaves `current` untouched. The old item's layer is copied over.
pub fn transmute(
    world: &mut World,
    current: Entity,
    prefab: &PrefabId,
    anchor: Entity,
) -> Option<Entity> {
    if world.get_entity(current).is_err() || world.get_entity(anchor).is_err() {
        return None;
    }
    let layer = world
        .get::<Layer>(current)
        .copied()
        .unwrap_or(Layer::INTERACTABLE);

    let next = instantiate(world, prefab, None)?;
    if !attach(world, next, anchor) {
        destroy(world, next);
        return None;
    }
    set_layer_recursive(world, next, layer);
    destroy(world, current);
    Some(next)
}

fn is_same_or_descendant(world: &World, entity: Entity, ancestor: Entity) -> bool {
    let mut current = Some(entity);
    while let Some(e) = current {
        if e == ancestor {
            return true;
        }
        current = world.get::<ChildOf>(e).map(ChildOf::parent);
    }
    false
}
