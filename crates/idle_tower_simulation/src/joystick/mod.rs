//! Touch joystick domain
//!
//! Содержит:
//! - TouchJoystick (трекер одного пальца, clamp якоря и knob'а)
//! - MovementAmount (нормализованный вектор для locomotion)
//! - JoystickWidget / JoystickKnob (on-screen виджет, только позиция и видимость)
//! - PointerSubscription (scoped подписка на FingerEvent)

use bevy::prelude::*;

pub mod components;
pub mod systems;

#[cfg(test)]
mod components_tests;

pub use components::*;
pub use systems::*;

use crate::ControllerSet;

/// Joystick plugin
///
/// Finger events обрабатываются в PreUpdate — до FixedUpdate того же кадра,
/// так что тик locomotion всегда видит свежий MovementAmount.
pub struct JoystickPlugin;

impl Plugin for JoystickPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<JoystickConfig>()
            .register_type::<JoystickConfig>()
            .register_type::<TouchJoystick>()
            .register_type::<MovementAmount>()
            .register_type::<JoystickWidget>()
            .register_type::<JoystickKnob>()
            .register_type::<PointerSubscription>()
            .add_systems(
                PreUpdate,
                handle_finger_events.in_set(ControllerSet::TrackJoystick),
            )
            .add_observer(announce_pointer_subscription)
            .add_observer(release_pointer_subscription)
            .add_observer(despawn_joystick_widget);
    }
}
