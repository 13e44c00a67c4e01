//! Tests for resource area systems.

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use bevy::prelude::*;
    use bevy_rapier3d::prelude::{CollisionEvent, Velocity};
    use bevy_rapier3d::rapier::geometry::CollisionEventFlags;

    use super::super::components::*;
    use super::super::events::ZoneOverlapEvent;
    use super::super::systems::*;
    use crate::animation::CharacterAnimState;

    struct Scene {
        world: World,
        player: Entity,
        zone: Entity,
    }

    fn scene(zone_tag: &str) -> Scene {
        let mut world = World::new();
        world.init_resource::<Events<ZoneOverlapEvent>>();
        world.init_resource::<Events<CollisionEvent>>();

        let player = world
            .spawn((ResourceAreaSensor, Velocity::zero(), CharacterAnimState::Idle))
            .id();
        let zone = world.spawn(ZoneTag(zone_tag.to_owned())).id();

        Scene { world, player, zone }
    }

    impl Scene {
        fn send(&mut self, event: ZoneOverlapEvent) {
            self.world.send_event(event);
            self.world.run_system_once(track_zone_overlaps).expect("track runs");
        }

        fn stay_tick(&mut self) {
            self.world.run_system_once(mine_while_stationary).expect("mine runs");
        }

        fn state(&self) -> CharacterAnimState {
            *self.world.get::<CharacterAnimState>(self.player).unwrap()
        }

        fn set_velocity(&mut self, linvel: Vec3) {
            self.world.get_mut::<Velocity>(self.player).unwrap().linvel = linvel;
        }
    }

    #[test]
    fn test_stationary_in_resource_area_starts_mining() {
        let mut s = scene(RESOURCE_AREA_TAG);
        let (player, zone) = (s.player, s.zone);

        s.send(ZoneOverlapEvent::Entered { body: player, zone });
        assert!(s.world.get::<ZoneOverlaps>(player).unwrap().contains(zone));
        assert_eq!(s.state(), CharacterAnimState::Idle);

        s.stay_tick();
        assert_eq!(s.state(), CharacterAnimState::Mining);
    }

    #[test]
    fn test_moving_in_resource_area_does_not_mine() {
        let mut s = scene(RESOURCE_AREA_TAG);
        let (player, zone) = (s.player, s.zone);
        s.set_velocity(Vec3::new(0.1, 0.0, 0.0));

        s.send(ZoneOverlapEvent::Entered { body: player, zone });
        s.stay_tick();

        assert!(!s.state().is_mining());
    }

    #[test]
    fn test_exit_clears_mining() {
        let mut s = scene(RESOURCE_AREA_TAG);
        let (player, zone) = (s.player, s.zone);
        s.send(ZoneOverlapEvent::Entered { body: player, zone });
        s.stay_tick();
        assert!(s.state().is_mining());

        s.send(ZoneOverlapEvent::Exited { body: player, zone });
        assert_eq!(s.state(), CharacterAnimState::Idle);
        assert!(s.world.get::<ZoneOverlaps>(player).unwrap().zones.is_empty());

        // Вне зоны stay-тик ничего не делает
        s.stay_tick();
        assert_eq!(s.state(), CharacterAnimState::Idle);
    }

    #[test]
    fn test_exit_without_enter_still_clears() {
        let mut s = scene(RESOURCE_AREA_TAG);
        let (player, zone) = (s.player, s.zone);
        *s.world.get_mut::<CharacterAnimState>(player).unwrap() = CharacterAnimState::Mining;

        s.send(ZoneOverlapEvent::Exited { body: player, zone });

        assert_eq!(s.state(), CharacterAnimState::Idle);
    }

    #[test]
    fn test_other_zone_tags_are_ignored() {
        let mut s = scene("UpgradeArea");
        let (player, zone) = (s.player, s.zone);

        s.send(ZoneOverlapEvent::Entered { body: player, zone });
        s.stay_tick();
        assert_eq!(s.state(), CharacterAnimState::Idle);

        *s.world.get_mut::<CharacterAnimState>(player).unwrap() = CharacterAnimState::Mining;
        s.send(ZoneOverlapEvent::Exited { body: player, zone });
        assert_eq!(s.state(), CharacterAnimState::Mining);
    }

    #[test]
    fn test_rapier_bridge_handles_both_orders() {
        let mut s = scene(RESOURCE_AREA_TAG);
        let (player, zone) = (s.player, s.zone);
        let bystander = s.world.spawn_empty().id();

        s.world.send_event(CollisionEvent::Started(zone, player, CollisionEventFlags::SENSOR));
        s.world.send_event(CollisionEvent::Stopped(player, zone, CollisionEventFlags::SENSOR));
        s.world.send_event(CollisionEvent::Started(bystander, zone, CollisionEventFlags::SENSOR));
        s.world.run_system_once(bridge_rapier_collisions).expect("bridge runs");

        let events = s.world.resource::<Events<ZoneOverlapEvent>>();
        let written: Vec<_> = events.iter_current_update_events().copied().collect();
        assert_eq!(
            written,
            vec![
                ZoneOverlapEvent::Entered { body: player, zone },
                ZoneOverlapEvent::Exited { body: player, zone },
            ]
        );
    }

    #[test]
    fn test_despawned_zone_is_pruned_and_clears_mining() {
        let mut s = scene(RESOURCE_AREA_TAG);
        let (player, zone) = (s.player, s.zone);
        s.send(ZoneOverlapEvent::Entered { body: player, zone });
        s.stay_tick();
        assert!(s.state().is_mining());

        s.world.despawn(zone);
        s.world.run_system_once(prune_despawned_zones).expect("prune runs");

        assert!(s.world.get::<ZoneOverlaps>(player).unwrap().zones.is_empty());
        assert_eq!(s.state(), CharacterAnimState::Idle);
    }
}
