//! "Палец над UI?" — запрос, который трекер делает на каждом move
//!
//! Два источника:
//! - `PointerOverUi` — платформа явно помечает пальцы над своим UI
//! - активные `UiPanel` — hit test по экранному прямоугольнику панели

use std::collections::HashSet;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::events::FingerId;

/// Пальцы, которые платформа считает "над UI"
#[derive(Resource, Debug, Clone, Default)]
pub struct PointerOverUi {
    pub fingers: HashSet<FingerId>,
}

impl PointerOverUi {
    pub fn mark(&mut self, finger: FingerId) {
        self.fingers.insert(finger);
    }

    pub fn clear(&mut self, finger: FingerId) {
        self.fingers.remove(&finger);
    }

    pub fn contains(&self, finger: FingerId) -> bool {
        self.fingers.contains(&finger)
    }
}

/// UI панель (canvas) с экранным прямоугольником
///
/// Активная панель перехватывает move-события пальцев внутри `rect`.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct UiPanel {
    pub active: bool,
    pub rect: Rect,
}

impl UiPanel {
    pub fn new(rect: Rect) -> Self {
        Self { active: false, rect }
    }

    pub fn contains(&self, position: Vec2) -> bool {
        self.active && self.rect.contains(position)
    }
}

/// Hit test по активным панелям
pub fn pointer_over_panels<'a>(panels: impl IntoIterator<Item = &'a UiPanel>, position: Vec2) -> bool {
    panels.into_iter().any(|panel| panel.contains(position))
}

/// SystemParam: капабилити "палец над UI" для систем ввода
#[derive(SystemParam)]
pub struct UiHitTest<'w, 's> {
    overrides: Res<'w, PointerOverUi>,
    panels: Query<'w, 's, &'static UiPanel>,
}

impl UiHitTest<'_, '_> {
    pub fn is_pointer_over_ui(&self, finger: FingerId, position: Vec2) -> bool {
        self.overrides.contains(finger) || pointer_over_panels(self.panels.iter(), position)
    }
}
