//! Finger events — вход трекера джойстика
//!
//! Источник: платформа (touch bridge из Bevy `TouchInput` или напрямую из
//! нативного слоя). Координаты экранные, origin в левом нижнем углу.

use bevy::prelude::*;

/// Стабильный ID пальца (одинаковый для down/move/up одного касания)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct FingerId(pub u64);

/// Жизненный цикл касания
///
/// # Ordering
/// Все события кадра обрабатываются в PreUpdate, до FixedUpdate того же кадра.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum FingerEvent {
    /// Палец коснулся экрана
    Down { finger: FingerId, position: Vec2 },
    /// Палец сдвинулся
    Move { finger: FingerId, position: Vec2 },
    /// Палец отпущен (или касание отменено системой)
    Up { finger: FingerId, position: Vec2 },
}
