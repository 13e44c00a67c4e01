//! Joystick компоненты: трекинг пальца, виджет, нормализованный вектор движения
//!
//! Логика трекера живёт в методах `TouchJoystick` (без ECS), системы только
//! раздают им события и компоненты виджета.

use bevy::prelude::*;

use crate::input::{FingerId, ScreenBounds};

/// Конфигурация джойстика (размер виджета в пикселях)
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct JoystickConfig {
    /// Размер виджета; радиус knob'а = widget_size.x / 2
    pub widget_size: Vec2,
    /// Ограничивать якорь по правому краю экрана
    pub clamp_right_edge: bool,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            widget_size: Vec2::new(300.0, 300.0),
            clamp_right_edge: false,
        }
    }
}

/// Маркер подписки на finger events
///
/// Пока компонент висит на entity — трекер получает события.
/// Удаление (или despawn entity) = отписка: observer сбрасывает трекер и виджет.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PointerSubscription;

/// Нормализованное смещение джойстика, каждая ось в [-1, 1]
///
/// Единственный писатель — трекер (PreUpdate), единственный читатель —
/// locomotion (FixedUpdate).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementAmount(pub Vec2);

/// Отслеживаемый палец
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct PointerTrack {
    pub finger: FingerId,
    /// Последняя экранная позиция пальца
    pub screen_position: Vec2,
    /// Сырой (не клампнутый) offset от якоря виджета
    pub accumulated_offset: Vec2,
}

impl PointerTrack {
    pub fn new(finger: FingerId, position: Vec2) -> Self {
        Self {
            finger,
            screen_position: position,
            accumulated_offset: Vec2::ZERO,
        }
    }
}

/// On-screen виджет джойстика (якорь + размер + видимость)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct JoystickWidget {
    pub active: bool,
    pub size: Vec2,
    /// Центр виджета в экранных координатах
    pub anchored_position: Vec2,
}

/// Knob виджета (child entity), offset относительно якоря
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct JoystickKnob {
    pub anchored_position: Vec2,
}

/// Touch joystick трекер
///
/// Инвариант: движением управляет максимум один палец (`track`).
/// Второй down при активном треке игнорируется до up первого.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(PointerSubscription, MovementAmount)]
pub struct TouchJoystick {
    pub widget: Entity,
    pub knob: Entity,
    pub widget_size: Vec2,
    pub clamp_right_edge: bool,
    pub track: Option<PointerTrack>,
}

impl TouchJoystick {
    pub fn new(widget: Entity, knob: Entity, config: &JoystickConfig) -> Self {
        Self {
            widget,
            knob,
            widget_size: config.widget_size,
            clamp_right_edge: config.clamp_right_edge,
            track: None,
        }
    }

    /// Максимальный offset knob'а (радиус)
    pub fn max_movement(&self) -> f32 {
        self.widget_size.x / 2.0
    }

    pub fn tracked_finger(&self) -> Option<FingerId> {
        self.track.map(|track| track.finger)
    }

    pub fn is_tracking(&self, finger: FingerId) -> bool {
        self.tracked_finger() == Some(finger)
    }

    /// Down: захватить палец если свободны. Возвращает true если палец принят.
    pub fn finger_down(
        &mut self,
        finger: FingerId,
        position: Vec2,
        screen: &ScreenBounds,
        widget: &mut JoystickWidget,
        amount: &mut MovementAmount,
    ) -> bool {
        if self.track.is_some() {
            return false;
        }

        self.track = Some(PointerTrack::new(finger, position));
        amount.0 = Vec2::ZERO;

        widget.active = true;
        widget.size = self.widget_size;
        widget.anchored_position =
            clamp_start_position(position, self.widget_size, screen, self.clamp_right_edge);

        true
    }

    /// Up: отпустить палец если он наш. Чужой up — no-op.
    pub fn finger_up(
        &mut self,
        finger: FingerId,
        widget: &mut JoystickWidget,
        knob: &mut JoystickKnob,
        amount: &mut MovementAmount,
    ) -> bool {
        if !self.is_tracking(finger) {
            return false;
        }

        self.release(widget, knob, amount);
        true
    }

    /// Move: обновить knob и вектор движения.
    ///
    /// Move над UI выбрасывается целиком (трек и knob не меняются).
    pub fn finger_move(
        &mut self,
        finger: FingerId,
        position: Vec2,
        over_ui: bool,
        widget: &JoystickWidget,
        knob: &mut JoystickKnob,
        amount: &mut MovementAmount,
    ) -> bool {
        let max_movement = self.max_movement();

        let Some(track) = self.track.as_mut().filter(|track| track.finger == finger) else {
            return false;
        };

        if over_ui {
            return false;
        }

        let offset = position - widget.anchored_position;
        track.screen_position = position;
        track.accumulated_offset = offset;

        let knob_position = clamp_knob_offset(offset, max_movement);
        knob.anchored_position = knob_position;
        amount.0 = knob_position / max_movement;

        true
    }

    /// Полный сброс: трек, knob, вектор, видимость виджета
    pub fn release(
        &mut self,
        widget: &mut JoystickWidget,
        knob: &mut JoystickKnob,
        amount: &mut MovementAmount,
    ) {
        self.track = None;
        knob.anchored_position = Vec2::ZERO;
        widget.active = false;
        amount.0 = Vec2::ZERO;
    }
}

/// Клампит якорь так, чтобы виджет целиком был на экране
///
/// Левый, нижний и верхний края всегда. Правый — только с `clamp_right_edge`.
/// Без `f32::clamp`: на экране меньше виджета min > max, а clamp паникует.
pub fn clamp_start_position(
    position: Vec2,
    widget_size: Vec2,
    screen: &ScreenBounds,
    clamp_right_edge: bool,
) -> Vec2 {
    let half = widget_size / 2.0;
    let mut clamped = position;

    if clamped.x < half.x {
        clamped.x = half.x;
    } else if clamp_right_edge && clamped.x > screen.width - half.x {
        clamped.x = screen.width - half.x;
    }

    if clamped.y < half.y {
        clamped.y = half.y;
    } else if clamped.y > screen.height - half.y {
        clamped.y = screen.height - half.y;
    }

    clamped
}

/// Offset knob'а: сырой если внутри радиуса, иначе на окружности радиуса
pub fn clamp_knob_offset(offset: Vec2, max_movement: f32) -> Vec2 {
    if offset.length() > max_movement {
        offset.normalize() * max_movement
    } else {
        offset
    }
}
