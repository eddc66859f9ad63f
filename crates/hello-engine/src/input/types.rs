/// Keyboard key identifier.
///
/// Only the keys the runtime acts on are named; everything else is forwarded
/// to the GUI backend untouched and shows up here as `Unknown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A single keyboard transition, translated from the platform event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyInput {
    pub key: Key,
    pub state: KeyState,
    /// Set for OS auto-repeat presses.
    pub repeat: bool,
}

impl KeyInput {
    pub fn pressed(key: Key) -> Self {
        Self { key, state: KeyState::Pressed, repeat: false }
    }

    pub fn released(key: Key) -> Self {
        Self { key, state: KeyState::Released, repeat: false }
    }

    /// True for the initial press of `key`; releases and repeats are ignored.
    pub fn is_press_of(&self, key: Key) -> bool {
        self.key == key && self.state == KeyState::Pressed && !self.repeat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_matches_only_initial_press() {
        assert!(KeyInput::pressed(Key::Escape).is_press_of(Key::Escape));
        assert!(!KeyInput::released(Key::Escape).is_press_of(Key::Escape));
        assert!(!KeyInput::pressed(Key::Unknown(36)).is_press_of(Key::Escape));

        let repeat = KeyInput { repeat: true, ..KeyInput::pressed(Key::Escape) };
        assert!(!repeat.is_press_of(Key::Escape));
    }
}
