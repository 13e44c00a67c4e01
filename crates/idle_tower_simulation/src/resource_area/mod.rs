//! Resource area domain — добыча ресурсов в trigger-зонах
//!
//! Содержит:
//! - ZoneTag (категория зоны, "ResourceArea")
//! - ResourceAreaSensor + ZoneOverlaps (кто в каких зонах)
//! - ZoneOverlapEvent (enter/exit из rapier или платформы)
//!
//! Mining = стоим (velocity == 0) внутри resource зоны; выход снимает Mining.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{ActiveEvents, Collider, CollisionEvent, Sensor};

pub mod components;
pub mod events;
pub mod systems;

#[cfg(test)]
mod systems_tests;

pub use components::*;
pub use events::*;
pub use systems::*;

use crate::ControllerSet;

/// Resource area plugin
pub struct ResourceAreaPlugin;

impl Plugin for ResourceAreaPlugin {
    fn build(&self, app: &mut App) {
        // CollisionEvent регистрирует RapierPhysicsPlugin; headless без него — регистрируем сами
        app.add_event::<CollisionEvent>()
            .add_event::<ZoneOverlapEvent>()
            .register_type::<ZoneTag>()
            .register_type::<ResourceAreaSensor>()
            .register_type::<ZoneOverlaps>()
            .add_systems(
                FixedUpdate,
                (
                    bridge_rapier_collisions,
                    prune_despawned_zones,
                    track_zone_overlaps,
                    mine_while_stationary,
                )
                    .chain()
                    .in_set(ControllerSet::Sensors),
            );
    }
}

/// Spawn helper: resource зона (sensor cuboid)
pub fn spawn_resource_area(commands: &mut Commands, position: Vec3, half_extents: Vec3) -> Entity {
    commands
        .spawn((
            Name::new("ResourceArea"),
            ZoneTag::resource_area(),
            Transform::from_translation(position),
            Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}
