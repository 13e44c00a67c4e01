//! Locomotion компоненты: скорость, режим масштабирования, look-at intent

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;
use serde::{Deserialize, Serialize};

use crate::animation::{AnimatorParameters, CharacterAnimState};
use crate::joystick::MovementAmount;

/// Как speed превращается в velocity
///
/// - `PerTick`: velocity = dir * speed * fixed_dt. Исторический режим сцены:
///   итоговая скорость зависит от частоты FixedUpdate.
/// - `PerSecond`: velocity = dir * speed (m/s), не зависит от tick rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
#[serde(rename_all = "snake_case")]
pub enum VelocityScaling {
    #[default]
    PerTick,
    PerSecond,
}

/// Глобальные дефолты locomotion (для spawn helpers)
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct LocomotionConfig {
    pub speed: f32,
    pub velocity_scaling: VelocityScaling,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            speed: 250.0,
            velocity_scaling: VelocityScaling::PerTick,
        }
    }
}

/// Locomotion контроллер персонажа
///
/// Каждый FixedUpdate: MovementAmount → Velocity + поворот + anim state.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(MovementAmount, Velocity, Transform, CharacterAnimState, AnimatorParameters)]
pub struct Locomotion {
    pub speed: f32,
    pub velocity_scaling: VelocityScaling,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self::from(&LocomotionConfig::default())
    }
}

impl From<&LocomotionConfig> for Locomotion {
    fn from(config: &LocomotionConfig) -> Self {
        Self {
            speed: config.speed,
            velocity_scaling: config.velocity_scaling,
        }
    }
}

impl Locomotion {
    /// Velocity из джойстика: (x, 0, y) на горизонтальной плоскости
    pub fn velocity_for(&self, amount: Vec2, fixed_dt: f32) -> Vec3 {
        let direction = Vec3::new(amount.x, 0.0, amount.y);

        match self.velocity_scaling {
            VelocityScaling::PerTick => direction * self.speed * fixed_dt,
            VelocityScaling::PerSecond => direction * self.speed,
        }
    }
}

/// Event: немедленно развернуть entity к точке в мире
///
/// Обходит velocity-driven поворот (скриптовые сцены, взаимодействия).
#[derive(Event, Debug, Clone, Copy)]
pub struct LookAtTarget {
    pub entity: Entity,
    pub target: Vec3,
}
