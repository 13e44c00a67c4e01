//! Настройки контроллера (JSON через serde)
//!
//! `ControllerSettings` — плоский DTO для файла/строки. Runtime-ресурсы
//! (`JoystickConfig`, `LocomotionConfig`, `ScreenBounds`, `Time<Fixed>`)
//! собираются из него через `insert_into`.
//!
//! Дефолты повторяют сцену Idle Tower: joystick 300x300, fixed step 0.02s.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::{ConfigError, Result};

use crate::input::ScreenBounds;
use crate::joystick::JoystickConfig;
use crate::locomotion::{LocomotionConfig, VelocityScaling};

/// Настройки джойстика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickSettings {
    pub widget_width: f32,
    pub widget_height: f32,
    /// Ограничивать якорь и по правому краю экрана (по умолчанию нет)
    pub clamp_right_edge: bool,
}

impl Default for JoystickSettings {
    fn default() -> Self {
        Self {
            widget_width: 300.0,
            widget_height: 300.0,
            clamp_right_edge: false,
        }
    }
}

/// Настройки передвижения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionSettings {
    pub speed: f32,
    pub velocity_scaling: VelocityScaling,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        Self {
            speed: 250.0, // 250 * 0.02 = 5 (per-tick режим)
            velocity_scaling: VelocityScaling::PerTick,
        }
    }
}

/// Корневой объект настроек
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub joystick: JoystickSettings,
    pub locomotion: LocomotionSettings,
    /// Частота FixedUpdate (Hz)
    pub fixed_hz: f64,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            joystick: JoystickSettings::default(),
            locomotion: LocomotionSettings::default(),
            fixed_hz: 50.0,
            screen_width: 1080.0,
            screen_height: 1920.0,
        }
    }
}

fn positive_finite(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl ControllerSettings {
    /// Парсит JSON и валидирует
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Читает JSON-файл и валидирует
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Проверка инвариантов (размер виджета делит offset, tick rate делит время)
    pub fn validate(&self) -> Result<()> {
        let joystick = &self.joystick;
        if !positive_finite(joystick.widget_width) || !positive_finite(joystick.widget_height) {
            return Err(ConfigError::InvalidWidgetSize {
                width: joystick.widget_width,
                height: joystick.widget_height,
            });
        }

        let speed = self.locomotion.speed;
        if !speed.is_finite() || speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(speed));
        }

        if !self.fixed_hz.is_finite() || self.fixed_hz <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.fixed_hz));
        }

        if !positive_finite(self.screen_width) || !positive_finite(self.screen_height) {
            return Err(ConfigError::InvalidScreenSize {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        Ok(())
    }

    pub fn joystick_config(&self) -> JoystickConfig {
        JoystickConfig {
            widget_size: Vec2::new(self.joystick.widget_width, self.joystick.widget_height),
            clamp_right_edge: self.joystick.clamp_right_edge,
        }
    }

    pub fn locomotion_config(&self) -> LocomotionConfig {
        LocomotionConfig {
            speed: self.locomotion.speed,
            velocity_scaling: self.locomotion.velocity_scaling,
        }
    }

    pub fn screen_bounds(&self) -> ScreenBounds {
        ScreenBounds::new(self.screen_width, self.screen_height)
    }

    /// Вставляет runtime-ресурсы в App (перезаписывает существующие)
    pub fn insert_into(&self, app: &mut App) {
        app.insert_resource(self.joystick_config())
            .insert_resource(self.locomotion_config())
            .insert_resource(self.screen_bounds())
            .insert_resource(Time::<Fixed>::from_hz(self.fixed_hz));
    }
}
