use {
    bevy::prelude::*,
    player_components::{MoveInput, MovementLock, Mover, Player},
};

/// Kinematic top-down movement. `MoveInput.y` walks along -Z, the facing follows movement.
pub fn move_players(
    time: Res<Time>,
    mut players: Query<(&mut Transform, &MoveInput, &Mover, &MovementLock), With<Player>>,
) {
    for (mut transform, input, mover, lock) in players.iter_mut() {
        if lock.is_locked() {
            continue;
        }
        let direction = Vec3::new(input.x, 0.0, -input.y).normalize_or_zero();
        if direction == Vec3::ZERO {
            continue;
        }
        transform.translation += direction * mover.speed * time.delta_secs();
        transform.look_to(direction, Vec3::Y);
    }
}

pub fn release_locks(mut locks: Query<&mut MovementLock>) {
    for mut lock in locks.iter_mut() {
        lock.board = None;
    }
}
