//! Overlap events — вход sensor систем
//!
//! Источник: bridge из rapier `CollisionEvent` или платформа напрямую.

use bevy::prelude::*;

/// Entity вошёл в trigger-зону / вышел из неё
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneOverlapEvent {
    Entered { body: Entity, zone: Entity },
    Exited { body: Entity, zone: Entity },
}
