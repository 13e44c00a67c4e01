//! Locomotion domain — движение персонажа по вектору джойстика
//!
//! Архитектура:
//! - FixedUpdate: MovementAmount → Velocity (rapier) + facing + anim state
//! - Update: LookAtTarget → мгновенный поворот
//! - HeadlessPhysicsPlugin: velocity → Transform без rapier (тесты, headless)

use bevy::prelude::*;

pub mod components;
pub mod systems;


pub use components::*;
pub use systems::*;

use crate::ControllerSet;

/// Locomotion plugin
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionConfig>()
            .register_type::<LocomotionConfig>()
            .register_type::<Locomotion>()
            .add_event::<LookAtTarget>()
            .add_systems(FixedUpdate, drive_locomotion.in_set(ControllerSet::Locomotion))
            .add_systems(Update, apply_look_at_targets);
    }
}

/// Прямая интеграция velocity в Transform (когда RapierPhysicsPlugin не подключен)
pub struct HeadlessPhysicsPlugin;

impl Plugin for HeadlessPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            integrate_velocity_to_transform.in_set(ControllerSet::Integrate),
        );
    }
}
