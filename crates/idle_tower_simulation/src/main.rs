//! Headless симуляция Idle Tower
//!
//! Скриптованный drag пальцем вправо: игрок идёт к resource зоне,
//! отпускает палец и начинает добывать. Overlap'ы считаются AABB-проверкой
//! (rapier не подключен), платформу изображает этот бинарник.
//!
//! Usage: idle_tower_simulation [settings.json]

use bevy::prelude::*;
use idle_tower_simulation::*;

/// AABB resource зоны для headless overlap
#[derive(Component)]
struct HeadlessZone {
    half_extents: Vec3,
}

/// Платформенная замена rapier sensor'ам: enter/exit по AABB
fn headless_zone_overlaps(
    bodies: Query<(Entity, &Transform, &resource_area::ZoneOverlaps)>,
    zones: Query<(Entity, &Transform, &HeadlessZone)>,
    mut overlaps: EventWriter<ZoneOverlapEvent>,
) {
    for (body, body_transform, current) in bodies.iter() {
        for (zone, zone_transform, area) in zones.iter() {
            let delta = (body_transform.translation - zone_transform.translation).abs();
            let inside = delta.cmple(area.half_extents).all();

            match (inside, current.contains(zone)) {
                (true, false) => {
                    overlaps.write(ZoneOverlapEvent::Entered { body, zone });
                }
                (false, true) => {
                    overlaps.write(ZoneOverlapEvent::Exited { body, zone });
                }
                _ => {}
            }
        }
    }
}

fn load_settings() -> ControllerSettings {
    let Some(path) = std::env::args().nth(1) else {
        return ControllerSettings::default();
    };

    match ControllerSettings::load(&path) {
        Ok(settings) => settings,
        Err(err) => {
            log_error(&format!("Failed to load settings from {}: {} → using defaults", path, err));
            ControllerSettings::default()
        }
    }
}

fn main() {
    init_logger();
    // Per-event debug (adopt/release пальца) в демо не нужен
    set_log_level(LogLevel::Info);
    let settings = load_settings();
    log_info(&format!("Starting Idle Tower headless simulation ({} Hz)", settings.fixed_hz));

    let mut app = create_headless_app(&settings);
    app.add_systems(
        FixedUpdate,
        headless_zone_overlaps.before(ControllerSet::Sensors).after(ControllerSet::Locomotion),
    );

    let player = {
        let world = app.world_mut();
        let joystick = *world.resource::<JoystickConfig>();
        let locomotion = *world.resource::<LocomotionConfig>();

        let mut commands = world.commands();
        let player = spawn_player(&mut commands, Vec3::ZERO, &joystick, &locomotion);
        let zone = resource_area::spawn_resource_area(&mut commands, Vec3::new(3.0, 0.0, 0.0), Vec3::splat(1.0));
        commands.entity(zone).insert(HeadlessZone { half_extents: Vec3::splat(1.0) });
        player
    };
    app.world_mut().flush();

    let finger = FingerId(0);
    let start = Vec2::new(400.0, 600.0);
    app.world_mut().send_event(FingerEvent::Down { finger, position: start });
    app.update();
    app.world_mut().send_event(FingerEvent::Move { finger, position: start + Vec2::new(200.0, 0.0) });

    for tick in 0..80 {
        if tick == 30 {
            app.world_mut().send_event(FingerEvent::Up { finger, position: start });
        }

        app.update();

        if tick % 10 == 0 {
            let world = app.world();
            let translation = world.get::<Transform>(player).map(|t| t.translation);
            let state = world.get::<CharacterAnimState>(player).copied();
            println!("Tick {}: position {:?}, state {:?}", tick, translation, state);
        }
    }

    let params = app.world().get::<AnimatorParameters>(player);
    println!(
        "Simulation complete! isRunning={:?} isMining={:?}",
        params.map(|p| p.get_bool(IS_RUNNING)),
        params.map(|p| p.get_bool(IS_MINING)),
    );
}
