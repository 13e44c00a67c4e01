//! Player — entity, которым управляет touch joystick
//!
//! Собирает все домены на одном entity:
//! TouchJoystick → MovementAmount → Locomotion → ResourceAreaSensor → анимация.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{ActiveEvents, Collider, LockedAxes, RigidBody};

use crate::joystick::{spawn_joystick_widget, JoystickConfig, TouchJoystick};
use crate::locomotion::{Locomotion, LocomotionConfig};
use crate::resource_area::ResourceAreaSensor;

/// Marker component для player-controlled entity
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Spawn helper: игрок + его джойстик виджет
///
/// Rapier: dynamic body (velocity пишет locomotion), вращение заблокировано
/// (поворот задаёт locomotion напрямую через Transform).
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec3,
    joystick: &JoystickConfig,
    locomotion: &LocomotionConfig,
) -> Entity {
    let (widget, knob) = spawn_joystick_widget(commands, joystick);

    commands
        .spawn((
            Name::new("Player"),
            Player,
            Transform::from_translation(position),
            TouchJoystick::new(widget, knob, joystick),
            Locomotion::from(locomotion),
            ResourceAreaSensor,
            // Rapier physics
            RigidBody::Dynamic,
            Collider::capsule_y(0.5, 0.4),
            LockedAxes::ROTATION_LOCKED,
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}
