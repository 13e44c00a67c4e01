//! Idle Tower Simulation Core
//!
//! Headless контроллер персонажа на Bevy 0.16:
//! touch joystick → locomotion (fixed tick) → resource area sensor → анимация.
//!
//! Движок (рендер, UI canvas, physics step, touch источник) — внешний:
//! ядро читает/пишет только ECS компоненты и события.
//!
//! Порядок внутри кадра:
//! - PreUpdate: ReadInput → TrackJoystick (все finger events кадра)
//! - FixedUpdate: Locomotion → Sensors → Animation → Integrate
//!
//! PreUpdate идёт раньше RunFixedMainLoop, поэтому тик N всегда видит
//! MovementAmount после полного батча input'а.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

// Публичные модули
pub mod animation;
pub mod config;
pub mod input;
pub mod interaction;
pub mod joystick;
pub mod locomotion;
pub mod logger;
pub mod player;
pub mod resource_area;

// Re-export базовых типов для удобства
pub use animation::{AnimationPlugin, AnimatorParameters, CharacterAnimState, IS_MINING, IS_RUNNING};
pub use config::{ConfigError, ControllerSettings};
pub use input::{FingerEvent, FingerId, FingerInputPlugin, PointerOverUi, ScreenBounds, UiPanel};
pub use interaction::{InteractIntent, Interactable, Interacted, InteractionPlugin, UpgradeArea};
pub use joystick::{
    JoystickConfig, JoystickKnob, JoystickPlugin, JoystickWidget, MovementAmount, PointerSubscription,
    TouchJoystick,
};
pub use locomotion::{
    HeadlessPhysicsPlugin, LookAtTarget, Locomotion, LocomotionConfig, LocomotionPlugin, VelocityScaling,
};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use player::{spawn_player, Player};
pub use resource_area::{ResourceAreaPlugin, ResourceAreaSensor, ZoneOverlapEvent, ZoneTag, RESOURCE_AREA_TAG};

/// Порядок систем контроллера
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// PreUpdate: платформенный input → FingerEvent
    ReadInput,
    /// PreUpdate: FingerEvent → TouchJoystick / MovementAmount
    TrackJoystick,
    /// FixedUpdate: MovementAmount → Velocity / facing
    Locomotion,
    /// FixedUpdate: overlap зоны → Mining
    Sensors,
    /// FixedUpdate: CharacterAnimState → AnimatorParameters
    Animation,
    /// FixedUpdate: velocity → Transform (headless)
    Integrate,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            PreUpdate,
            (ControllerSet::ReadInput, ControllerSet::TrackJoystick).chain(),
        )
        .configure_sets(
            FixedUpdate,
            (
                ControllerSet::Locomotion,
                ControllerSet::Sensors,
                ControllerSet::Animation,
                ControllerSet::Integrate,
            )
                .chain(),
        )
        .add_plugins((
            FingerInputPlugin,
            JoystickPlugin,
            LocomotionPlugin,
            ResourceAreaPlugin,
            AnimationPlugin,
            InteractionPlugin,
        ))
        .register_type::<Player>();
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время идёт ровно на один fixed step за `app.update()` (ManualDuration),
/// физика — прямая интеграция velocity без rapier.
pub fn create_headless_app(settings: &ControllerSettings) -> App {
    let mut app = App::new();
    init_logger();

    app.add_plugins(MinimalPlugins);
    settings.insert_into(&mut app);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / settings.fixed_hz,
    )))
    .add_plugins((SimulationPlugin, HeadlessPhysicsPlugin));

    app
}

/// Snapshot компонента `T` всех персонажей (entity с `Locomotion`)
///
/// Одна строка на персонажа, по возрастанию Entity. Используется для
/// сравнения прогонов с одинаковым input скриптом.
pub fn character_snapshot<T>(world: &mut World) -> Vec<String>
where
    T: Component + std::fmt::Debug,
{
    let mut query = world.query_filtered::<(Entity, &T), With<Locomotion>>();
    let mut characters: Vec<_> = query.iter(world).collect();
    characters.sort_by_key(|(entity, _)| *entity);

    characters
        .into_iter()
        .map(|(entity, component)| format!("{entity}: {component:?}"))
        .collect()
}
