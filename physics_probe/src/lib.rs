//! Spatial queries the interaction core needs from physics, behind a swappable trait.
//!
//! The default [`ColliderProbe`] answers from [`Collider`] boxes at their `GlobalTransform`.
//! A game using a full physics engine installs its own probe with [`Physics::new`].

use {
    bevy::prelude::*,
    interactable_components::{Collider, Layer, LayerMask},
};

pub struct PhysicsProbePlugin;

impl Plugin for PhysicsProbePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Physics>();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub point: Vec3,
    pub distance: f32,
}

pub trait PhysicsProbe: Send + Sync + 'static {
    /// Collider entities on a layer in `mask` touching the sphere.
    fn overlap_sphere(
        &self,
        world: &mut World,
        center: Vec3,
        radius: f32,
        mask: LayerMask,
    ) -> Vec<Entity>;

    /// Nearest collider straight below `origin`, ignoring `exclude`.
    fn raycast_down(
        &self,
        world: &mut World,
        origin: Vec3,
        max_distance: f32,
        exclude: Entity,
    ) -> Option<RayHit>;
}

/// The installed physics probe.
#[derive(Resource)]
pub struct Physics(Box<dyn PhysicsProbe>);

impl Physics {
    pub fn new(probe: impl PhysicsProbe) -> Self {
        Self(Box::new(probe))
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::new(ColliderProbe)
    }
}

/// Runs [`PhysicsProbe::overlap_sphere`] on the installed probe. No probe, no hits.
pub fn overlap_sphere(
    world: &mut World,
    center: Vec3,
    radius: f32,
    mask: LayerMask,
) -> Vec<Entity> {
    world
        .try_resource_scope(|world, physics: Mut<Physics>| {
            physics.0.overlap_sphere(world, center, radius, mask)
        })
        .unwrap_or_default()
}

/// Runs [`PhysicsProbe::raycast_down`] on the installed probe. No probe, no hit.
pub fn raycast_down(
    world: &mut World,
    origin: Vec3,
    max_distance: f32,
    exclude: Entity,
) -> Option<RayHit> {
    world
        .try_resource_scope(|world, physics: Mut<Physics>| {
            physics.0.raycast_down(world, origin, max_distance, exclude)
        })
        .flatten()
}

/// Axis-aligned box queries over enabled [`Collider`]s.
/// Results come back in ascending entity index (spawn order in a fresh world), so ties resolve
/// the same way every frame.
pub struct ColliderProbe;

struct ColliderSample {
    entity: Entity,
    min: Vec3,
    max: Vec3,
    layer: Layer,
}

impl ColliderProbe {
    fn samples(world: &mut World) -> Vec<ColliderSample> {
        let mut query = world.query::<(Entity, &GlobalTransform, &Collider, Option<&Layer>)>();
        let mut samples: Vec<_> = query
            .iter(world)
            .filter(|(_, _, collider, _)| collider.enabled)
            .map(|(entity, transform, collider, layer)| {
                let center = transform.translation();
                let half = collider.half_extents.abs();
                ColliderSample {
                    entity,
                    min: center - half,
                    max: center + half,
                    layer: layer.copied().unwrap_or_default(),
                }
            })
            .collect();
        samples.sort_by_key(|sample| sample.entity.index());
        samples
    }
}

impl PhysicsProbe for ColliderProbe {
    fn overlap_sphere(
        &self,
        world: &mut World,
        center: Vec3,
        radius: f32,
        mask: LayerMask,
    ) -> Vec<Entity> {
        let radius_sq = radius * radius;
        Self::samples(world)
            .into_iter()
            .filter(|sample| mask.contains(sample.layer))
            .filter(|sample| {
                center.clamp(sample.min, sample.max).distance_squared(center) <= radius_sq
            })
            .map(|sample| sample.entity)
            .collect()
    }

    fn raycast_down(
        &self,
        world: &mut World,
        origin: Vec3,
        max_distance: f32,
        exclude: Entity,
    ) -> Option<RayHit> {
        Self::samples(world)
            .into_iter()
            .filter(|sample| sample.entity != exclude)
            .filter(|sample| {
                (sample.min.x..=sample.max.x).contains(&origin.x)
                    && (sample.min.z..=sample.max.z).contains(&origin.z)
            })
            // A ray starting inside a box does not hit it.
            .filter(|sample| sample.max.y <= origin.y)
            .map(|sample| RayHit {
                entity: sample.entity,
                point: Vec3::new(origin.x, sample.max.y, origin.z),
                distance: origin.y - sample.max.y,
            })
            .filter(|hit| hit.distance <= max_distance)
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
