use combatants_shared::{Command, Turn};

use crate::policy::{Control, ControlContext};
use crate::presentation::Key;

/// Which keys steer and fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyScheme {
    pub clockwise: Key,
    pub counter_clockwise: Key,
    pub fire: Key,
}

impl KeyScheme {
    pub const ARROWS: KeyScheme = KeyScheme {
        clockwise: Key::Right,
        counter_clockwise: Key::Left,
        fire: Key::Space,
    };

    pub const WASD: KeyScheme = KeyScheme {
        clockwise: Key::D,
        counter_clockwise: Key::A,
        fire: Key::LeftShift,
    };
}

/// Human player. Holding a key turns; firing needs a fresh press.
pub struct KeyboardControl {
    scheme: KeyScheme,
}

impl KeyboardControl {
    pub fn new(scheme: KeyScheme) -> Self {
        Self { scheme }
    }
}

impl Control for KeyboardControl {
    fn name(&self) -> &str {
        "keyboard"
    }

    fn poll(&mut self, ctx: &ControlContext) -> Command {
        let input = ctx.input;
        let cw = input.is_key_down(self.scheme.clockwise);
        let ccw = input.is_key_down(self.scheme.counter_clockwise);
        let turn = match (cw, ccw) {
            (true, false) => Turn::Clockwise,
            (false, true) => Turn::CounterClockwise,
            _ => Turn::Straight,
        };
        Command {
            turn,
            fire: input.is_key_pressed(self.scheme.fire),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::Plane;
    use crate::presentation::InputSource;
    use combatants_shared::*;
    use glam::Vec2;

    #[derive(Default)]
    struct FakeKeys {
        down: Vec<Key>,
        pressed: Vec<Key>,
    }

    impl InputSource for FakeKeys {
        fn is_key_down(&self, key: Key) -> bool {
            self.down.contains(&key)
        }

        fn is_key_pressed(&self, key: Key) -> bool {
            self.pressed.contains(&key)
        }
    }

    fn poll(control: &mut KeyboardControl, keys: &FakeKeys) -> Command {
        let config = SimConfig::default();
        let planes = [
            Plane::new(
                0,
                "green",
                Color::DARKGREEN,
                Vec2::new(100.0, 100.0),
                SPAWN_SPEED,
                Angle256::ZERO,
                config,
            ),
            Plane::new(
                1,
                "red",
                Color::RED,
                Vec2::new(300.0, 100.0),
                SPAWN_SPEED,
                Angle256::LEFT,
                config,
            ),
        ];
        let ctx = ControlContext {
            player: 0,
            dt: DT,
            screen: ScreenSize::default(),
            planes: &planes,
            bullets: &[],
            input: keys,
            config: &config,
        };
        control.poll(&ctx)
    }

    #[test]
    fn test_arrows_turn_while_held() {
        let mut control = KeyboardControl::new(KeyScheme::ARROWS);
        let keys = FakeKeys { down: vec![Key::Right], ..Default::default() };
        assert_eq!(poll(&mut control, &keys).turn, Turn::Clockwise);

        let keys = FakeKeys { down: vec![Key::Left], ..Default::default() };
        assert_eq!(poll(&mut control, &keys).turn, Turn::CounterClockwise);

        // Both held cancel out.
        let keys = FakeKeys { down: vec![Key::Left, Key::Right], ..Default::default() };
        assert_eq!(poll(&mut control, &keys), Command::none());
    }

    #[test]
    fn test_fire_needs_press_not_hold() {
        let mut control = KeyboardControl::new(KeyScheme::ARROWS);
        let held = FakeKeys { down: vec![Key::Space], ..Default::default() };
        assert!(!poll(&mut control, &held).fire);

        let pressed = FakeKeys { down: vec![Key::Space], pressed: vec![Key::Space] };
        assert!(poll(&mut control, &pressed).fire);
    }

    #[test]
    fn test_schemes_are_independent() {
        let mut wasd = KeyboardControl::new(KeyScheme::WASD);
        let keys = FakeKeys {
            down: vec![Key::Right, Key::Space],
            pressed: vec![Key::Space],
        };
        assert_eq!(poll(&mut wasd, &keys), Command::none());

        let keys = FakeKeys {
            down: vec![Key::A],
            pressed: vec![Key::LeftShift],
        };
        assert_eq!(
            poll(&mut wasd, &keys),
            Command { turn: Turn::CounterClockwise, fire: true }
        );
    }
}
