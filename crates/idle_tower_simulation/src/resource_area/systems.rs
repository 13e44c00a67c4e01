//! Resource area systems (FixedUpdate)
//!
//! Порядок (chain):
//! 1. bridge_rapier_collisions — CollisionEvent → ZoneOverlapEvent
//! 2. track_zone_overlaps — ZoneOverlaps + exit-переходы
//! 3. mine_while_stationary — stay-проверка каждый тик

use bevy::prelude::*;
use bevy_rapier3d::prelude::{CollisionEvent, Velocity};

use super::components::*;
use super::events::ZoneOverlapEvent;
use crate::animation::CharacterAnimState;
use crate::logger;

/// System: rapier CollisionEvent → ZoneOverlapEvent
///
/// Пара entity в событии не упорядочена — проверяем обе перестановки.
pub fn bridge_rapier_collisions(
    mut collisions: EventReader<CollisionEvent>,
    sensors: Query<(), With<ResourceAreaSensor>>,
    zones: Query<(), With<ZoneTag>>,
    mut overlaps: EventWriter<ZoneOverlapEvent>,
) {
    for collision in collisions.read() {
        let (first, second, started) = match *collision {
            CollisionEvent::Started(first, second, _) => (first, second, true),
            CollisionEvent::Stopped(first, second, _) => (first, second, false),
        };

        let pair = if sensors.contains(first) && zones.contains(second) {
            Some((first, second))
        } else if sensors.contains(second) && zones.contains(first) {
            Some((second, first))
        } else {
            None
        };

        let Some((body, zone)) = pair else {
            continue;
        };

        overlaps.write(if started {
            ZoneOverlapEvent::Entered { body, zone }
        } else {
            ZoneOverlapEvent::Exited { body, zone }
        });
    }
}

/// System: ZoneOverlapEvent → ZoneOverlaps
///
/// Выход из resource зоны безусловно снимает Mining, даже если персонаж
/// ещё стоит в другой resource зоне (следующий stay-тик вернёт Mining).
pub fn track_zone_overlaps(
    mut events: EventReader<ZoneOverlapEvent>,
    mut sensors: Query<(&mut ZoneOverlaps, &mut CharacterAnimState), With<ResourceAreaSensor>>,
    zones: Query<&ZoneTag>,
) {
    for event in events.read() {
        match *event {
            ZoneOverlapEvent::Entered { body, zone } => {
                let Ok((mut overlaps, _)) = sensors.get_mut(body) else {
                    continue;
                };
                overlaps.enter(zone);
            }
            ZoneOverlapEvent::Exited { body, zone } => {
                let Ok((mut overlaps, mut state)) = sensors.get_mut(body) else {
                    continue;
                };
                overlaps.exit(zone);

                // Зона могла быть уже despawn'ута — тег неизвестен, считаем resource
                let is_resource = zones.get(zone).map_or(true, ZoneTag::is_resource_area);
                if is_resource {
                    let next = state.after_resource_exit();
                    state.set_if_neq(next);
                    logger::log(&format!("{:?} left resource area {:?}", body, zone));
                }
            }
        }
    }
}

/// System: стоим внутри resource зоны → Mining (каждый тик)
///
/// Velocity сравнивается с нулём точно, как в locomotion.
pub fn mine_while_stationary(
    mut sensors: Query<(&ZoneOverlaps, &Velocity, &mut CharacterAnimState), With<ResourceAreaSensor>>,
    zones: Query<&ZoneTag>,
) {
    for (overlaps, velocity, mut state) in sensors.iter_mut() {
        let in_resource_area = overlaps
            .zones
            .iter()
            .any(|&zone| zones.get(zone).is_ok_and(ZoneTag::is_resource_area));

        if !in_resource_area {
            continue;
        }

        let next = state.after_resource_stay(velocity.linvel == Vec3::ZERO);
        state.set_if_neq(next);
    }
}

/// Despawn зоны не шлёт Stopped — чистим висящие ссылки
///
/// Пропавшая зона обрабатывается как выход из resource зоны.
pub fn prune_despawned_zones(
    mut sensors: Query<(Entity, &mut ZoneOverlaps, &mut CharacterAnimState)>,
    zones: Query<(), With<ZoneTag>>,
) {
    for (body, mut overlaps, mut state) in sensors.iter_mut() {
        if overlaps.zones.iter().all(|&zone| zones.contains(zone)) {
            continue;
        }

        overlaps.zones.retain(|&zone| zones.contains(zone));
        let next = state.after_resource_exit();
        state.set_if_neq(next);
        logger::log(&format!("{:?}: despawned zone dropped from overlaps", body));
    }
}
