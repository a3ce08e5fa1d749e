use std::fmt;

use crate::coords::Point;

use super::types::{Key, MouseButton};

/// Error returned by [`DeviceSnapshot::from_raw`] when the per-signal arrays do
/// not cover the fixed key/button universe.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SnapshotError {
    KeyCount { expected: usize, actual: usize },
    ButtonCount { expected: usize, actual: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::KeyCount { expected, actual } => {
                write!(f, "snapshot key state has {actual} entries, expected {expected}")
            }
            SnapshotError::ButtonCount { expected, actual } => {
                write!(f, "snapshot button state has {actual} entries, expected {expected}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Immutable capture of keyboard and mouse state for one tick.
///
/// Bit `i` of the key mask is `Key::ALL[i]`; bit `i` of the button mask is
/// `MouseButton::ALL[i]`. `Default` is the neutral snapshot: nothing held,
/// cursor at the origin.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct DeviceSnapshot {
    keys: u128,
    buttons: u8,
    cursor: Point,
}

impl DeviceSnapshot {
    /// All keys and buttons up, cursor at the origin.
    #[inline]
    pub const fn neutral() -> Self {
        Self { keys: 0, buttons: 0, cursor: Point::zero() }
    }

    /// Builds a snapshot from raw per-signal state.
    ///
    /// `keys` is indexed like [`Key::ALL`] and `buttons` like [`MouseButton::ALL`].
    /// A length mismatch is an integration error and is reported here, so
    /// classification never sees a partial universe.
    pub fn from_raw(keys: &[bool], buttons: &[bool], cursor: Point) -> Result<Self, SnapshotError> {
        if keys.len() != Key::COUNT {
            return Err(SnapshotError::KeyCount { expected: Key::COUNT, actual: keys.len() });
        }
        if buttons.len() != MouseButton::COUNT {
            return Err(SnapshotError::ButtonCount {
                expected: MouseButton::COUNT,
                actual: buttons.len(),
            });
        }

        let keys = keys
            .iter()
            .enumerate()
            .filter(|(_, down)| **down)
            .fold(0u128, |mask, (i, _)| mask | (1 << i));
        let buttons = buttons
            .iter()
            .enumerate()
            .filter(|(_, down)| **down)
            .fold(0u8, |mask, (i, _)| mask | (1 << i));

        Ok(Self { keys, buttons, cursor })
    }

    /// Returns a copy with `key` set to `down`.
    #[inline]
    #[must_use]
    pub fn with_key(mut self, key: Key, down: bool) -> Self {
        let bit = 1u128 << key.index();
        if down {
            self.keys |= bit;
        } else {
            self.keys &= !bit;
        }
        self
    }

    /// Returns a copy with `button` set to `down`.
    #[inline]
    #[must_use]
    pub fn with_button(mut self, button: MouseButton, down: bool) -> Self {
        let bit = 1u8 << button.index();
        if down {
            self.buttons |= bit;
        } else {
            self.buttons &= !bit;
        }
        self
    }

    /// Returns a copy with the cursor at `cursor`.
    #[inline]
    #[must_use]
    pub fn with_cursor(mut self, cursor: Point) -> Self {
        self.cursor = cursor;
        self
    }

    /// Returns a copy with every key and button released. The cursor is kept.
    #[inline]
    #[must_use]
    pub fn released(self) -> Self {
        Self { keys: 0, buttons: 0, cursor: self.cursor }
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys & (1u128 << key.index()) != 0
    }

    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons & (1u8 << button.index()) != 0
    }

    #[inline]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// True if any key in the universe is held.
    #[inline]
    pub fn any_key(&self) -> bool {
        self.keys != 0
    }

    /// True if any of the five buttons is held.
    #[inline]
    pub fn any_button(&self) -> bool {
        self.buttons != 0
    }

    /// Held keys in [`Key::ALL`] order.
    pub fn keys_down(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.iter().copied().filter(|k| self.key_down(*k))
    }
}
