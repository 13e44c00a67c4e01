//! Animation state персонажа
//!
//! Один `CharacterAnimState` на персонажа вместо двух независимых bool:
//! locomotion и resource sensor переводят одну state machine, а
//! `AnimatorParameters` (sink для презентационного слоя) получает
//! производные флаги `isRunning` / `isMining`.
//!
//! Следствие: движение внутри resource area переводит в Running и снимает
//! `isMining`, не дожидаясь выхода из зоны.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::ControllerSet;

/// Имя bool-параметра аниматора: бежит
pub const IS_RUNNING: &str = "isRunning";
/// Имя bool-параметра аниматора: добывает
pub const IS_MINING: &str = "isMining";

/// Состояние анимации персонажа
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum CharacterAnimState {
    Idle,
    Running,
    Mining,
}

impl Default for CharacterAnimState {
    fn default() -> Self {
        Self::Idle
    }
}

impl CharacterAnimState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn is_mining(&self) -> bool {
        matches!(self, Self::Mining)
    }

    /// Переход после тика locomotion
    ///
    /// Стоим на месте → Running сбрасывается в Idle, Mining сохраняется.
    pub fn after_locomotion(self, moving: bool) -> Self {
        match (self, moving) {
            (_, true) => Self::Running,
            (Self::Running, false) => Self::Idle,
            (state, false) => state,
        }
    }

    /// Переход пока персонаж внутри resource area
    pub fn after_resource_stay(self, stationary: bool) -> Self {
        if stationary {
            Self::Mining
        } else {
            self
        }
    }

    /// Переход при выходе из resource area (безусловно снимает Mining)
    pub fn after_resource_exit(self) -> Self {
        match self {
            Self::Mining => Self::Idle,
            state => state,
        }
    }
}

/// Sink именованных bool-параметров (читает презентационный слой)
#[derive(Component, Debug, Clone, Default)]
pub struct AnimatorParameters {
    bools: HashMap<String, bool>,
}

impl AnimatorParameters {
    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_owned(), value);
    }

    /// Незаданный параметр = false
    pub fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }
}

/// System: CharacterAnimState → AnimatorParameters (только при изменении)
pub fn sync_animator_parameters(
    mut characters: Query<(Entity, &CharacterAnimState, &mut AnimatorParameters), Changed<CharacterAnimState>>,
) {
    for (entity, state, mut params) in characters.iter_mut() {
        let was_mining = params.get_bool(IS_MINING);

        params.set_bool(IS_RUNNING, state.is_running());
        params.set_bool(IS_MINING, state.is_mining());

        if was_mining != state.is_mining() {
            crate::logger::log(&format!("⛏️ {:?} mining: {}", entity, state.is_mining()));
        }
    }
}

/// Animation plugin
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CharacterAnimState>().add_systems(
            FixedUpdate,
            sync_animator_parameters.in_set(ControllerSet::Animation),
        );
    }
}
