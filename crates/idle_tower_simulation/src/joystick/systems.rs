//! Joystick systems: раздача finger events трекерам + lifecycle подписки

use std::collections::HashSet;

use bevy::prelude::*;

use super::components::*;
use crate::input::{FingerEvent, ScreenBounds, UiHitTest};
use crate::logger;

/// System: FingerEvent → TouchJoystick (PreUpdate)
///
/// Каждое событие получают все подписанные трекеры; каждый сам решает,
/// его ли это палец. Трекеры независимы, поэтому батч кадра раздаётся
/// трекер за трекером.
pub fn handle_finger_events(
    mut events: EventReader<FingerEvent>,
    screen: Res<ScreenBounds>,
    ui: UiHitTest,
    mut joysticks: Query<(Entity, &mut TouchJoystick, &mut MovementAmount), With<PointerSubscription>>,
    mut widgets: Query<&mut JoystickWidget>,
    mut knobs: Query<&mut JoystickKnob>,
    mut broken: Local<HashSet<Entity>>,
) {
    let batch: Vec<FingerEvent> = events.read().copied().collect();
    if batch.is_empty() {
        return;
    }

    for (entity, mut joystick, mut amount) in joysticks.iter_mut() {
        // Отсутствующий виджет — дефект сцены: репортим один раз на трекер
        let (Ok(mut widget), Ok(mut knob)) = (widgets.get_mut(joystick.widget), knobs.get_mut(joystick.knob))
        else {
            if broken.insert(entity) {
                logger::log_error(&format!(
                    "TouchJoystick {:?}: widget {:?} or knob {:?} not found",
                    entity, joystick.widget, joystick.knob
                ));
            }
            continue;
        };

        for event in &batch {
            match *event {
                FingerEvent::Down { finger, position } => {
                    if joystick.finger_down(finger, position, &screen, &mut widget, &mut amount) {
                        logger::log(&format!(
                            "🕹️ {:?} adopted {:?} at {:?} (anchor {:?})",
                            entity, finger, position, widget.anchored_position
                        ));
                    }
                }
                FingerEvent::Move { finger, position } => {
                    if !joystick.is_tracking(finger) {
                        continue;
                    }
                    let over_ui = ui.is_pointer_over_ui(finger, position);
                    joystick.finger_move(finger, position, over_ui, &widget, &mut knob, &mut amount);
                }
                FingerEvent::Up { finger, .. } => {
                    if joystick.finger_up(finger, &mut widget, &mut knob, &mut amount) {
                        logger::log(&format!("🕹️ {:?} released {:?}", entity, finger));
                    }
                }
            }
        }
    }
}

/// Observer: подписка появилась
pub fn announce_pointer_subscription(trigger: Trigger<OnAdd, PointerSubscription>) {
    logger::log_info(&format!("TouchJoystick {:?} subscribed to finger events", trigger.target()));
}

/// Observer: подписка снята (remove компонента или despawn entity)
///
/// Гарантирует, что после отписки не остаётся залипшего вектора движения
/// и видимого виджета.
pub fn release_pointer_subscription(
    trigger: Trigger<OnRemove, PointerSubscription>,
    mut joysticks: Query<(&mut TouchJoystick, &mut MovementAmount)>,
    mut widgets: Query<&mut JoystickWidget>,
    mut knobs: Query<&mut JoystickKnob>,
) {
    let entity = trigger.target();
    let Ok((mut joystick, mut amount)) = joysticks.get_mut(entity) else {
        return;
    };

    let released = joystick.tracked_finger();

    match (widgets.get_mut(joystick.widget), knobs.get_mut(joystick.knob)) {
        (Ok(mut widget), Ok(mut knob)) => joystick.release(&mut widget, &mut knob, &mut amount),
        (widget, _) => {
            // Виджет или knob удалены раньше трекера — сбрасываем что осталось
            if let Ok(mut widget) = widget {
                widget.active = false;
            }
            joystick.track = None;
            amount.0 = Vec2::ZERO;
        }
    }

    logger::log_info(&format!(
        "TouchJoystick {:?} unsubscribed (released finger: {:?})",
        entity, released
    ));
}

/// Observer: трекер удалён → его виджет (и knob через ChildOf) despawn
pub fn despawn_joystick_widget(
    trigger: Trigger<OnRemove, TouchJoystick>,
    joysticks: Query<&TouchJoystick>,
    mut commands: Commands,
) {
    let Ok(joystick) = joysticks.get(trigger.target()) else {
        return;
    };

    if let Ok(mut widget) = commands.get_entity(joystick.widget) {
        widget.despawn();
    }
}

/// Spawn helper: виджет + knob (child)
///
/// Возвращает (widget, knob) для `TouchJoystick::new`.
pub fn spawn_joystick_widget(commands: &mut Commands, config: &JoystickConfig) -> (Entity, Entity) {
    let widget = commands
        .spawn((
            Name::new("JoystickWidget"),
            JoystickWidget {
                active: false,
                size: config.widget_size,
                anchored_position: Vec2::ZERO,
            },
        ))
        .id();

    let knob = commands
        .spawn((Name::new("JoystickKnob"), JoystickKnob::default(), ChildOf(widget)))
        .id();

    (widget, knob)
}
