//! Keyboard input to paddle intent

use serde::{Deserialize, Serialize};

use super::state::Paddle;

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyTransition {
    Pressed,
    Released,
}

/// A single key transition delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub key: Key,
    pub transition: KeyTransition,
}

impl InputEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            transition: KeyTransition::Pressed,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            transition: KeyTransition::Released,
        }
    }
}

/// Apply a key transition to the paddle's velocity
///
/// Releasing either direction key stops the paddle, even while the other
/// one is still held.
pub fn apply_input(paddle: &mut Paddle, event: InputEvent) {
    match (event.transition, event.key) {
        (KeyTransition::Pressed, Key::Left) => paddle.dx = -paddle.speed,
        (KeyTransition::Pressed, Key::Right) => paddle.dx = paddle.speed,
        (KeyTransition::Released, Key::Left | Key::Right) => paddle.dx = 0.0,
        (_, Key::Other) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn paddle() -> Paddle {
        Paddle::new(&Settings::default())
    }

    #[test]
    fn test_press_sets_direction() {
        let mut p = paddle();
        apply_input(&mut p, InputEvent::pressed(Key::Left));
        assert_eq!(p.dx, -8.0);
        apply_input(&mut p, InputEvent::pressed(Key::Right));
        assert_eq!(p.dx, 8.0);
    }

    #[test]
    fn test_left_press_release_then_unrelated_key() {
        let mut p = paddle();
        apply_input(&mut p, InputEvent::pressed(Key::Left));
        assert_eq!(p.dx, -p.speed);
        apply_input(&mut p, InputEvent::released(Key::Left));
        assert_eq!(p.dx, 0.0);
        apply_input(&mut p, InputEvent::pressed(Key::Other));
        assert_eq!(p.dx, 0.0);
    }

    #[test]
    fn test_releasing_either_key_stops() {
        let mut p = paddle();
        apply_input(&mut p, InputEvent::pressed(Key::Left));
        apply_input(&mut p, InputEvent::pressed(Key::Right));
        // Left is still held, but releasing Right stops the paddle
        apply_input(&mut p, InputEvent::released(Key::Right));
        assert_eq!(p.dx, 0.0);

        apply_input(&mut p, InputEvent::pressed(Key::Right));
        apply_input(&mut p, InputEvent::released(Key::Left));
        assert_eq!(p.dx, 0.0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut p = paddle();
        apply_input(&mut p, InputEvent::pressed(Key::Right));
        apply_input(&mut p, InputEvent::released(Key::Other));
        assert_eq!(p.dx, 8.0);
        assert_eq!(p, {
            let mut expected = paddle();
            expected.dx = 8.0;
            expected
        });
    }
}
