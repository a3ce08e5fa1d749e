use std::fmt;

use crate::coords::Point;

/// Declares `Key` together with its fixed enumeration table.
///
/// Declaration order is the edge detector's emission order.
macro_rules! key_table {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        /// Keyboard key identifier.
        ///
        /// The set is closed: every key a snapshot can report is listed here,
        /// and [`Key::ALL`] iterates them in declaration order.
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        #[repr(u8)]
        pub enum Key {
            $($(#[$meta])* $name,)+
        }

        impl Key {
            /// Every key, in declaration order.
            pub const ALL: &'static [Key] = &[$(Key::$name,)+];

            /// Number of keys in the table.
            pub const COUNT: usize = Key::ALL.len();
        }
    };
}

key_table! {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digit row
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Function keys
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    // Numpad
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadAdd, NumpadSubtract, NumpadMultiply, NumpadDivide, NumpadDecimal, NumpadEnter,

    // Control keys
    Escape, Enter, Tab, Backspace, Space,
    Insert, Delete, Home, End, PageUp, PageDown,
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,

    // Modifiers
    ShiftLeft, ShiftRight, ControlLeft, ControlRight,
    AltLeft, AltRight, SuperLeft, SuperRight,

    // Locks and system keys
    CapsLock, NumLock, ScrollLock, PrintScreen, Pause,

    // Punctuation (US layout positions)
    Minus, Equal, BracketLeft, BracketRight, Backslash,
    Semicolon, Quote, Comma, Period, Slash, Backquote,
}

// Snapshots store key state in a `u128` mask.
const _: () = assert!(Key::COUNT <= 128);

impl Key {
    /// Position in [`Key::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// First extra button (XButton1).
    Back,
    /// Second extra button (XButton2).
    Forward,
}

impl MouseButton {
    /// Canonical order: Left, Right, Middle, Back, Forward.
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::Back,
        MouseButton::Forward,
    ];

    pub const COUNT: usize = MouseButton::ALL.len();

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// How a signal changed between the previous and the current snapshot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TransitionKind {
    /// Down now, up before.
    Pressed,
    /// Up now, down before.
    Released,
    /// Down now and before. Raised again every tick the signal stays held.
    Down,
    /// Up now and before. Never emitted as an event.
    Unchanged,
}

impl TransitionKind {
    /// Classifies a single signal from its own current and previous state.
    #[inline]
    pub const fn classify(down_now: bool, down_before: bool) -> Self {
        match (down_now, down_before) {
            (true, false) => TransitionKind::Pressed,
            (false, true) => TransitionKind::Released,
            (true, true) => TransitionKind::Down,
            (false, false) => TransitionKind::Unchanged,
        }
    }
}

/// A key transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub kind: TransitionKind,
}

/// A mouse button transition.
///
/// `position` is the cursor position in the current snapshot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ButtonEvent {
    pub button: MouseButton,
    pub kind: TransitionKind,
    pub position: Point,
}

/// Cursor moved between two ticks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MouseMoveEvent {
    pub previous: Point,
    pub current: Point,
}

impl MouseMoveEvent {
    #[inline]
    pub fn delta(&self) -> Point {
        self.current - self.previous
    }
}

/// An event synthesized by the edge detector.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Button(ButtonEvent),
    Moved(MouseMoveEvent),
}

impl InputEvent {
    /// Transition kind, or `None` for cursor movement.
    #[inline]
    pub fn kind(&self) -> Option<TransitionKind> {
        match self {
            InputEvent::Key(e) => Some(e.kind),
            InputEvent::Button(e) => Some(e.kind),
            InputEvent::Moved(_) => None,
        }
    }

    /// True for a key event of `key` with transition `kind`.
    #[inline]
    pub fn is_key(&self, key: Key, kind: TransitionKind) -> bool {
        matches!(self, InputEvent::Key(e) if e.key == key && e.kind == kind)
    }

    /// True for a button event of `button` with transition `kind`.
    #[inline]
    pub fn is_button(&self, button: MouseButton, kind: TransitionKind) -> bool {
        matches!(self, InputEvent::Button(e) if e.button == button && e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_table() {
        assert_eq!(TransitionKind::classify(true, false), TransitionKind::Pressed);
        assert_eq!(TransitionKind::classify(false, true), TransitionKind::Released);
        assert_eq!(TransitionKind::classify(true, true), TransitionKind::Down);
        assert_eq!(TransitionKind::classify(false, false), TransitionKind::Unchanged);
    }

    #[test]
    fn key_table_is_indexed_by_declaration_order() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
        assert_eq!(Key::ALL[0], Key::A);
        assert_eq!(*Key::ALL.last().unwrap(), Key::Backquote);
    }

    #[test]
    fn key_table_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        assert!(Key::ALL.iter().all(|k| seen.insert(*k)));
    }

    #[test]
    fn button_order_is_canonical() {
        let names: Vec<String> = MouseButton::ALL.iter().map(|b| format!("{b:?}")).collect();
        assert_eq!(names, ["Left", "Right", "Middle", "Back", "Forward"]);
        for (i, b) in MouseButton::ALL.iter().enumerate() {
            assert_eq!(b.index(), i);
        }
    }

    #[test]
    fn move_delta() {
        let ev = MouseMoveEvent { previous: Point::new(10, 10), current: Point::new(7, 12) };
        assert_eq!(ev.delta(), Point::new(-3, 2));
    }
}
