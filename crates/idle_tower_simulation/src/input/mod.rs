//! Input domain — источник событий пальцев
//!
//! ```text
//! Bevy TouchInput (winit / платформа)
//!     ↓ forward_touch_input (Y flip, Canceled → Up)
//! FingerEvent
//!     ↓
//! joystick::handle_finger_events (+ UiHitTest)
//! ```
//!
//! Платформа без Bevy input может писать `FingerEvent` напрямую.

use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;

pub mod events;
pub mod screen;
pub mod ui;

pub use events::*;
pub use screen::*;
pub use ui::*;

use crate::joystick::PointerSubscription;
use crate::ControllerSet;

/// Bevy `TouchInput` → `FingerEvent`
///
/// Доставляет касания только пока есть хотя бы одна `PointerSubscription`
/// (аналог включения touch support на время жизни подписчика). Без подписчиков
/// события сбрасываются: касание до подписки не должно всплыть после неё.
pub fn forward_touch_input(
    mut touches: EventReader<TouchInput>,
    subscribers: Query<(), With<PointerSubscription>>,
    screen: Res<ScreenBounds>,
    mut fingers: EventWriter<FingerEvent>,
) {
    if subscribers.is_empty() {
        touches.clear();
        return;
    }

    for touch in touches.read() {
        fingers.write(finger_event_from_touch(touch, &screen));
    }
}

pub fn finger_event_from_touch(touch: &TouchInput, screen: &ScreenBounds) -> FingerEvent {
    let finger = FingerId(touch.id);
    let position = screen.from_window_position(touch.position);

    match touch.phase {
        TouchPhase::Started => FingerEvent::Down { finger, position },
        TouchPhase::Moved => FingerEvent::Move { finger, position },
        TouchPhase::Ended | TouchPhase::Canceled => FingerEvent::Up { finger, position },
    }
}

/// Input plugin: события + touch bridge
pub struct FingerInputPlugin;

impl Plugin for FingerInputPlugin {
    fn build(&self, app: &mut App) {
        // add_event идемпотентен: bevy InputPlugin мог уже зарегистрировать TouchInput
        app.add_event::<TouchInput>()
            .add_event::<FingerEvent>()
            .init_resource::<ScreenBounds>()
            .init_resource::<PointerOverUi>()
            .register_type::<ScreenBounds>()
            .register_type::<UiPanel>()
            .add_systems(
                PreUpdate,
                forward_touch_input.in_set(ControllerSet::ReadInput),
            );
    }
}
