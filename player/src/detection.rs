use {
    bevy::prelude::*,
    interaction::resolve_interactable,
    player_components::{HeldItem, InteractionController, InteractionTarget, Player},
};

/// Picks the interactable nearest to each player inside the detection sphere ahead of them.
///
/// The held item never counts. Equal distances keep the first hit, and hits arrive in entity
/// index order.
pub fn detect_interaction_targets(world: &mut World) {
    let mut players = world.query_filtered::<(
        Entity,
        &GlobalTransform,
        &InteractionController,
        &HeldItem,
    ), With<Player>>();
    let players: Vec<_> = players
        .iter(world)
        .map(|(entity, transform, controller, held)| {
            (
                entity,
                transform.translation(),
                transform.forward().as_vec3(),
                *controller,
                held.0,
            )
        })
        .collect();

    for (player, position, forward, controller, held) in players {
        let center = position + forward * controller.detect_distance;
        let hits = physics_probe::overlap_sphere(
            world,
            center,
            controller.detect_radius,
            controller.layers,
        );

        let mut nearest: Option<(Entity, f32)> = None;
        for hit in hits {
            let Some(candidate) = resolve_interactable(world, hit) else {
                continue;
            };
            if Some(candidate) == held || candidate == player {
                continue;
            }
            let Some(transform) = world.get::<GlobalTransform>(candidate) else {
                continue;
            };
            let distance = transform.translation().distance_squared(position);
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((candidate, distance));
            }
        }

        let target = nearest.map(|(entity, _)| entity);
        if let Some(mut current) = world.get_mut::<InteractionTarget>(player) {
            if current.0 != target {
                trace!("Player {player} now targets {target:?}");
                current.0 = target;
            }
        }
    }
}
