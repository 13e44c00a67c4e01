//! Interaction domain — интерактивные объекты уровня
//!
//! Поток:
//! ```text
//! InteractIntent { actor, target }
//!     ↓ process_interactions (Update)
//! actor смотрит на target → Interactable::consume → эффект (UpgradeArea: открыть панель)
//!     ↓
//! Interacted event
//! ```
//!
//! Открытая панель перехватывает finger move внутри своего rect
//! (см. `input::UiHitTest`), т.е. джойстик "замерзает" под ней.

use bevy::prelude::*;

use crate::input::UiPanel;
use crate::locomotion::look_at_point;
use crate::logger;

/// Интерактивный объект
///
/// - `interact_count`: сколько взаимодействий до исчерпания
/// - `permanent`: исчерпанный permanent объект перезаряжается, а не исчезает
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Interactable {
    pub interact_count: u32,
    pub permanent: bool,
    pub remaining: u32,
}

impl Interactable {
    pub fn new(interact_count: u32, permanent: bool) -> Self {
        Self {
            interact_count,
            permanent,
            remaining: interact_count,
        }
    }

    pub fn can_interact(&self) -> bool {
        self.remaining > 0
    }

    /// Списывает одно взаимодействие. Возвращает true если объект исчерпан
    /// (и должен потерять `Interactable`).
    pub fn consume(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining > 0 {
            return false;
        }

        if self.permanent {
            self.remaining = self.interact_count;
            false
        } else {
            true
        }
    }
}

/// Зона апгрейдов: открывает свою UI панель
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct UpgradeArea {
    pub panel: Entity,
}

impl UpgradeArea {
    /// Одно взаимодействие за раз, никогда не исчезает
    pub fn interactable() -> Interactable {
        Interactable::new(1, true)
    }
}

/// Intent: actor взаимодействует с target
#[derive(Event, Debug, Clone, Copy)]
pub struct InteractIntent {
    pub actor: Entity,
    pub target: Entity,
}

/// Взаимодействие состоялось
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interacted {
    pub actor: Entity,
    pub target: Entity,
    /// Объект исчерпан и больше не интерактивен
    pub exhausted: bool,
}

/// System: InteractIntent → поворот, эффект, Interacted
pub fn process_interactions(
    mut commands: Commands,
    mut intents: EventReader<InteractIntent>,
    mut interacted: EventWriter<Interacted>,
    mut targets: Query<(&mut Interactable, &Transform, Option<&UpgradeArea>)>,
    mut actors: Query<&mut Transform, Without<Interactable>>,
    mut panels: Query<&mut UiPanel>,
) {
    for intent in intents.read() {
        let Ok((mut interactable, target_transform, upgrade_area)) = targets.get_mut(intent.target) else {
            logger::log_warning(&format!(
                "InteractIntent: {:?} is not interactable",
                intent.target
            ));
            continue;
        };

        if !interactable.can_interact() {
            continue;
        }

        if let Ok(mut actor_transform) = actors.get_mut(intent.actor) {
            look_at_point(&mut actor_transform, target_transform.translation);
        }

        if let Some(area) = upgrade_area {
            match panels.get_mut(area.panel) {
                Ok(mut panel) => panel.active = true,
                Err(_) => logger::log_error(&format!(
                    "UpgradeArea {:?}: panel {:?} not found",
                    intent.target, area.panel
                )),
            }
        }

        let exhausted = interactable.consume();
        if exhausted {
            commands.entity(intent.target).remove::<Interactable>();
        }

        logger::log_info(&format!(
            "🔧 {:?} interacted with {:?} (exhausted: {})",
            intent.actor, intent.target, exhausted
        ));

        interacted.write(Interacted {
            actor: intent.actor,
            target: intent.target,
            exhausted,
        });
    }
}

/// Spawn helper: upgrade area + её панель
///
/// Возвращает (area, panel).
pub fn spawn_upgrade_area(commands: &mut Commands, position: Vec3, panel_rect: Rect) -> (Entity, Entity) {
    let panel = commands
        .spawn((Name::new("UpgradePanel"), UiPanel::new(panel_rect)))
        .id();

    let area = commands
        .spawn((
            Name::new("UpgradeArea"),
            UpgradeArea { panel },
            UpgradeArea::interactable(),
            Transform::from_translation(position),
        ))
        .id();

    (area, panel)
}

/// Interaction plugin
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<InteractIntent>()
            .add_event::<Interacted>()
            .register_type::<Interactable>()
            .register_type::<UpgradeArea>()
            .add_systems(Update, process_interactions);
    }
}
