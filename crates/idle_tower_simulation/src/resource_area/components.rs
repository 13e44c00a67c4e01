//! Resource area компоненты: теги зон, сенсор персонажа, текущие overlap'ы

use bevy::prelude::*;

/// Тег зоны ресурсов
pub const RESOURCE_AREA_TAG: &str = "ResourceArea";

/// Категория trigger-зоны (строковый тег)
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ZoneTag(pub String);

impl ZoneTag {
    pub fn resource_area() -> Self {
        Self(RESOURCE_AREA_TAG.to_owned())
    }

    pub fn is_resource_area(&self) -> bool {
        self.0 == RESOURCE_AREA_TAG
    }
}

/// Маркер: entity реагирует на resource зоны (обычно игрок)
///
/// Должен висеть на entity с коллайдером (rapier репортит collider entities).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(ZoneOverlaps)]
pub struct ResourceAreaSensor;

/// Зоны, с которыми entity сейчас пересекается
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct ZoneOverlaps {
    pub zones: Vec<Entity>,
}

impl ZoneOverlaps {
    pub fn enter(&mut self, zone: Entity) {
        if !self.zones.contains(&zone) {
            self.zones.push(zone);
        }
    }

    pub fn exit(&mut self, zone: Entity) {
        self.zones.retain(|&current| current != zone);
    }

    pub fn contains(&self, zone: Entity) -> bool {
        self.zones.contains(&zone)
    }
}
