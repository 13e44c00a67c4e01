//! Размеры экрана (инжектируются платформой, не глобальный singleton)

use bevy::prelude::*;

/// Экран в пикселях, origin слева снизу
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self::new(1080.0, 1920.0) // Портретный телефон
    }
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Window coords (origin сверху слева, Y вниз) → screen coords (Y вверх)
    pub fn from_window_position(&self, position: Vec2) -> Vec2 {
        Vec2::new(position.x, self.height - position.y)
    }
}
