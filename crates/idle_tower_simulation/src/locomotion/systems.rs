//! Locomotion systems (FixedUpdate) + look-at

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

use super::components::*;
use crate::animation::CharacterAnimState;
use crate::joystick::MovementAmount;

/// System: MovementAmount → Velocity, facing, Running state
///
/// Сравнение с нулём точное (без epsilon): любой ненулевой ввод = движение.
pub fn drive_locomotion(
    time: Res<Time<Fixed>>,
    mut bodies: Query<(
        &MovementAmount,
        &Locomotion,
        &mut Velocity,
        &mut Transform,
        &mut CharacterAnimState,
    )>,
) {
    let fixed_dt = time.timestep().as_secs_f32();

    for (amount, locomotion, mut velocity, mut transform, mut state) in bodies.iter_mut() {
        let linvel = locomotion.velocity_for(amount.0, fixed_dt);
        velocity.linvel = linvel;

        let moving = linvel != Vec3::ZERO;
        if moving {
            // Forward (-Z в Bevy) смотрит вдоль velocity, up = world up
            transform.look_to(linvel.normalize(), Vec3::Y);
        }

        let next = state.after_locomotion(moving);
        state.set_if_neq(next);
    }
}

/// Поворачивает transform к точке. Нулевой вектор до цели — no-op.
pub fn look_at_point(transform: &mut Transform, target: Vec3) -> bool {
    let relative = target - transform.translation;
    if relative == Vec3::ZERO {
        return false;
    }

    transform.look_to(relative, Vec3::Y);
    true
}

/// System: LookAtTarget events → Transform
pub fn apply_look_at_targets(
    mut events: EventReader<LookAtTarget>,
    mut transforms: Query<&mut Transform>,
) {
    for event in events.read() {
        let Ok(mut transform) = transforms.get_mut(event.entity) else {
            crate::logger::log_warning(&format!(
                "LookAtTarget: entity {:?} has no Transform",
                event.entity
            ));
            continue;
        };

        if !look_at_point(&mut transform, event.target) {
            crate::logger::log(&format!(
                "LookAtTarget: {:?} already at {:?}, rotation unchanged",
                event.entity, event.target
            ));
        }
    }
}

/// System интеграции velocity → Transform (headless режим, без Rapier)
///
/// position += velocity * dt. С rapier-плагином эту работу делает rapier.
pub fn integrate_velocity_to_transform(
    mut bodies: Query<(&Velocity, &mut Transform), With<Locomotion>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.timestep().as_secs_f32();

    for (velocity, mut transform) in bodies.iter_mut() {
        transform.translation += velocity.linvel * delta;
    }
}
