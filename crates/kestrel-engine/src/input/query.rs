use crate::coords::Point;

use super::snapshot::DeviceSnapshot;
use super::types::{Key, MouseButton};

/// Instant state queries against the current snapshot.
///
/// These never look at classified events. Each call is O(number of signals
/// passed). An empty signal list answers `false`.
pub trait InputQuery {
    /// The snapshot queries are answered from.
    fn snapshot(&self) -> &DeviceSnapshot;

    /// True iff every key in `keys` is down.
    fn is_key_down(&self, keys: &[Key]) -> bool {
        !keys.is_empty() && keys.iter().all(|k| self.snapshot().key_down(*k))
    }

    /// True iff at least one key in `keys` is down.
    fn is_any_key_down(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.snapshot().key_down(*k))
    }

    /// True iff any key in the whole key table is down.
    fn any_key_down(&self) -> bool {
        self.snapshot().any_key()
    }

    /// True iff every button in `buttons` is down.
    fn is_button_down(&self, buttons: &[MouseButton]) -> bool {
        !buttons.is_empty() && buttons.iter().all(|b| self.snapshot().button_down(*b))
    }

    /// True iff at least one button in `buttons` is down.
    fn is_any_button_down(&self, buttons: &[MouseButton]) -> bool {
        buttons.iter().any(|b| self.snapshot().button_down(*b))
    }

    /// True iff any of the five buttons is down.
    fn any_button_down(&self) -> bool {
        self.snapshot().any_button()
    }

    fn cursor_position(&self) -> Point {
        self.snapshot().cursor()
    }
}

impl InputQuery for DeviceSnapshot {
    #[inline]
    fn snapshot(&self) -> &DeviceSnapshot {
        self
    }
}
