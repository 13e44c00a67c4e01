//! Ошибки загрузки/валидации настроек контроллера.

use thiserror::Error;

/// Ошибки конфигурации (runtime-операции контроллера ошибок не имеют)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("joystick widget size must be positive and finite, got {width}x{height}")]
    InvalidWidgetSize { width: f32, height: f32 },

    #[error("locomotion speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),

    #[error("fixed tick rate must be positive and finite, got {0} Hz")]
    InvalidTickRate(f64),

    #[error("screen size must be positive and finite, got {width}x{height}")]
    InvalidScreenSize { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
