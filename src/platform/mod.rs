//! Platform abstraction layer
//!
//! Translates host key names into simulation input.

use crate::sim::{InputEvent, Key};

/// Map a DOM `KeyboardEvent.key` value to a game key
///
/// Older browsers report `"Left"`/`"Right"`, current ones `"ArrowLeft"`/`"ArrowRight"`.
pub fn key_from_name(name: &str) -> Key {
    match name {
        "Left" | "ArrowLeft" => Key::Left,
        "Right" | "ArrowRight" => Key::Right,
        _ => Key::Other,
    }
}

/// Build an input event from a host key name and whether it went down
pub fn key_event(name: &str, pressed: bool) -> InputEvent {
    let key = key_from_name(name);
    if pressed {
        InputEvent::pressed(key)
    } else {
        InputEvent::released(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::KeyTransition;

    #[test]
    fn test_key_names() {
        assert_eq!(key_from_name("ArrowLeft"), Key::Left);
        assert_eq!(key_from_name("Left"), Key::Left);
        assert_eq!(key_from_name("ArrowRight"), Key::Right);
        assert_eq!(key_from_name("Right"), Key::Right);
        assert_eq!(key_from_name("ArrowUp"), Key::Other);
        assert_eq!(key_from_name("a"), Key::Other);
        assert_eq!(key_from_name(""), Key::Other);
    }

    #[test]
    fn test_key_event() {
        let down = key_event("ArrowLeft", true);
        assert_eq!(down.key, Key::Left);
        assert_eq!(down.transition, KeyTransition::Pressed);

        let up = key_event("Right", false);
        assert_eq!(up.key, Key::Right);
        assert_eq!(up.transition, KeyTransition::Released);
    }
}
