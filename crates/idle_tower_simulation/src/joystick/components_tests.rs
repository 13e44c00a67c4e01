//! Tests for touch joystick tracker logic.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::super::components::*;
    use crate::input::{FingerId, ScreenBounds};

    const SCREEN: ScreenBounds = ScreenBounds { width: 1080.0, height: 1920.0 };

    struct Rig {
        joystick: TouchJoystick,
        widget: JoystickWidget,
        knob: JoystickKnob,
        amount: MovementAmount,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                joystick: TouchJoystick::new(
                    Entity::PLACEHOLDER,
                    Entity::PLACEHOLDER,
                    &JoystickConfig::default(),
                ),
                widget: JoystickWidget::default(),
                knob: JoystickKnob::default(),
                amount: MovementAmount::default(),
            }
        }

        fn down(&mut self, finger: u64, position: Vec2) -> bool {
            self.joystick.finger_down(
                FingerId(finger),
                position,
                &SCREEN,
                &mut self.widget,
                &mut self.amount,
            )
        }

        fn moved(&mut self, finger: u64, position: Vec2, over_ui: bool) -> bool {
            self.joystick.finger_move(
                FingerId(finger),
                position,
                over_ui,
                &self.widget,
                &mut self.knob,
                &mut self.amount,
            )
        }

        fn up(&mut self, finger: u64) -> bool {
            self.joystick
                .finger_up(FingerId(finger), &mut self.widget, &mut self.knob, &mut self.amount)
        }
    }

    #[test]
    fn test_down_activates_widget_and_zeroes_movement() {
        let mut rig = Rig::new();
        rig.amount.0 = Vec2::new(0.5, 0.5); // Мусор от прошлого трека

        assert!(rig.down(1, Vec2::new(500.0, 800.0)));

        assert!(rig.widget.active);
        assert_eq!(rig.widget.size, Vec2::new(300.0, 300.0));
        assert_eq!(rig.widget.anchored_position, Vec2::new(500.0, 800.0));
        assert_eq!(rig.amount.0, Vec2::ZERO);
        assert_eq!(rig.joystick.tracked_finger(), Some(FingerId(1)));
    }

    #[test]
    fn test_second_down_is_ignored() {
        let mut rig = Rig::new();
        rig.down(1, Vec2::new(500.0, 800.0));

        assert!(!rig.down(2, Vec2::new(900.0, 300.0)));

        assert_eq!(rig.joystick.tracked_finger(), Some(FingerId(1)));
        assert_eq!(rig.widget.anchored_position, Vec2::new(500.0, 800.0));
    }

    #[test]
    fn test_anchor_clamped_left_bottom_top() {
        let mut rig = Rig::new();
        rig.down(1, Vec2::new(10.0, 10.0));
        assert_eq!(rig.widget.anchored_position, Vec2::new(150.0, 150.0));

        let top = clamp_start_position(Vec2::new(400.0, 1900.0), Vec2::splat(300.0), &SCREEN, false);
        assert_eq!(top, Vec2::new(400.0, 1770.0));
    }

    #[test]
    fn test_anchor_right_edge_only_when_enabled() {
        let position = Vec2::new(1070.0, 800.0);

        let legacy = clamp_start_position(position, Vec2::splat(300.0), &SCREEN, false);
        assert_eq!(legacy.x, 1070.0);

        let clamped = clamp_start_position(position, Vec2::splat(300.0), &SCREEN, true);
        assert_eq!(clamped.x, 930.0);
    }

    #[test]
    fn test_anchor_on_tiny_screen_does_not_panic() {
        let tiny = ScreenBounds::new(100.0, 100.0);
        let anchor = clamp_start_position(Vec2::new(50.0, 50.0), Vec2::splat(300.0), &tiny, true);
        // Левый/нижний край имеют приоритет
        assert_eq!(anchor, Vec2::new(150.0, 150.0));
    }

    #[test]
    fn test_move_inside_radius_is_exact_ratio() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut rig = Rig::new();
        rig.down(1, Vec2::new(540.0, 960.0));
        let anchor = rig.widget.anchored_position;
        let radius = rig.joystick.max_movement();

        for _ in 0..500 {
            let offset = Vec2::new(rng.gen_range(-radius..radius), rng.gen_range(-radius..radius));
            if offset.length() > radius {
                continue;
            }

            let position = anchor + offset;
            assert!(rig.moved(1, position, false));

            // Knob и вектор считаются от фактического (position - anchor)
            let actual = position - anchor;
            assert_eq!(rig.knob.anchored_position, actual);
            assert_eq!(rig.amount.0, actual / radius);
            assert!(rig.amount.0.x.abs() <= 1.0 && rig.amount.0.y.abs() <= 1.0);
        }
    }

    #[test]
    fn test_move_outside_radius_is_unit_length_same_direction() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut rig = Rig::new();
        rig.down(1, Vec2::new(540.0, 960.0));
        let anchor = rig.widget.anchored_position;
        let radius = rig.joystick.max_movement();

        for _ in 0..500 {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let distance = rng.gen_range(radius * 1.01..radius * 5.0);
            let offset = Vec2::from_angle(angle) * distance;

            assert!(rig.moved(1, anchor + offset, false));

            let amount = rig.amount.0;
            assert!((amount.length() - 1.0).abs() < 1e-4, "|amount| = {}", amount.length());
            assert!(amount.normalize().dot(offset.normalize()) > 0.9999);
            assert!((rig.knob.anchored_position.length() - radius).abs() < 1e-2);
        }
    }

    #[test]
    fn test_move_records_raw_offset_in_track() {
        let mut rig = Rig::new();
        rig.down(1, Vec2::new(540.0, 960.0));

        rig.moved(1, Vec2::new(1040.0, 960.0), false);

        let track = rig.joystick.track.expect("tracking");
        assert_eq!(track.screen_position, Vec2::new(1040.0, 960.0));
        assert_eq!(track.accumulated_offset, Vec2::new(500.0, 0.0));
        assert_eq!(rig.knob.anchored_position, Vec2::new(150.0, 0.0));
        assert_eq!(rig.amount.0, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_move_over_ui_is_dropped() {
        let mut rig = Rig::new();
        rig.down(1, Vec2::new(540.0, 960.0));
        rig.moved(1, Vec2::new(590.0, 960.0), false);
        let frozen = rig.amount;

        assert!(!rig.moved(1, Vec2::new(540.0, 1100.0), true));

        assert_eq!(rig.amount, frozen);
        assert_eq!(rig.knob.anchored_position, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_move_of_untracked_finger_is_ignored() {
        let mut rig = Rig::new();
        rig.down(1, Vec2::new(540.0, 960.0));

        assert!(!rig.moved(2, Vec2::new(700.0, 960.0), false));
        assert_eq!(rig.amount.0, Vec2::ZERO);
    }

    #[test]
    fn test_up_of_tracked_finger_resets() {
        let mut rig = Rig::new();
        rig.down(1, Vec2::new(540.0, 960.0));
        rig.moved(1, Vec2::new(600.0, 1000.0), false);

        assert!(rig.up(1));

        assert!(!rig.widget.active);
        assert_eq!(rig.knob.anchored_position, Vec2::ZERO);
        assert_eq!(rig.amount.0, Vec2::ZERO);
        assert_eq!(rig.joystick.tracked_finger(), None);
    }

    #[test]
    fn test_up_of_other_finger_is_noop() {
        let mut rig = Rig::new();
        rig.down(1, Vec2::new(540.0, 960.0));
        rig.moved(1, Vec2::new(600.0, 960.0), false);
        let amount = rig.amount;

        assert!(!rig.up(2));

        assert!(rig.widget.active);
        assert_eq!(rig.amount, amount);
        assert_eq!(rig.joystick.tracked_finger(), Some(FingerId(1)));
    }

    #[test]
    fn test_down_up_roundtrip_restores_defaults() {
        let mut rig = Rig::new();
        let before_amount = rig.amount;
        let before_knob = rig.knob;

        rig.down(1, Vec2::new(540.0, 960.0));
        rig.up(1);

        assert_eq!(rig.amount, before_amount);
        assert_eq!(rig.knob, before_knob);
        assert!(!rig.widget.active);
        assert!(rig.joystick.track.is_none());

        // После up свободный трекер принимает новый палец
        assert!(rig.down(2, Vec2::new(300.0, 300.0)));
    }

    #[test]
    fn test_clamp_knob_offset_boundary() {
        // Ровно на радиусе — не клампится
        assert_eq!(clamp_knob_offset(Vec2::new(150.0, 0.0), 150.0), Vec2::new(150.0, 0.0));
        assert_eq!(clamp_knob_offset(Vec2::new(300.0, 0.0), 150.0), Vec2::new(150.0, 0.0));
        assert_eq!(clamp_knob_offset(Vec2::ZERO, 150.0), Vec2::ZERO);
    }
}
