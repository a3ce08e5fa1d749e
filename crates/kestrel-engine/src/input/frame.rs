use super::dispatch::DispatchReport;
use super::types::{InputEvent, Key, MouseButton, MouseMoveEvent, TransitionKind};

/// Events synthesized by the most recent tick.
///
/// The context keeps exactly one frame; it is overwritten on the next tick.
#[derive(Debug, Default, Clone)]
pub struct InputFrame {
    /// Tick counter of the frame, starting at zero.
    pub index: u64,

    /// Events in emission order.
    pub events: Vec<InputEvent>,

    /// What dispatching `events` did.
    pub dispatch: DispatchReport,
}

impl InputFrame {
    pub(crate) fn begin(&mut self, index: u64) {
        self.index = index;
        self.events.clear();
        self.dispatch = DispatchReport::default();
    }

    /// Keys with transition `kind` this frame, in key-table order.
    pub fn keys(&self, kind: TransitionKind) -> impl Iterator<Item = Key> + '_ {
        self.events.iter().filter_map(move |e| match e {
            InputEvent::Key(k) if k.kind == kind => Some(k.key),
            _ => None,
        })
    }

    /// Buttons with transition `kind` this frame, in canonical order.
    pub fn buttons(&self, kind: TransitionKind) -> impl Iterator<Item = MouseButton> + '_ {
        self.events.iter().filter_map(move |e| match e {
            InputEvent::Button(b) if b.kind == kind => Some(b.button),
            _ => None,
        })
    }

    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys(TransitionKind::Pressed)
    }

    pub fn released_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys(TransitionKind::Released)
    }

    /// Cursor movement this frame, if any.
    pub fn moved(&self) -> Option<MouseMoveEvent> {
        self.events.iter().rev().find_map(|e| match e {
            InputEvent::Moved(m) => Some(*m),
            _ => None,
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;
    use crate::input::{classify, DeviceSnapshot};

    /// A released, S held, W pressed; Left pressed, Right released; cursor moved.
    fn mixed_frame() -> InputFrame {
        let previous = DeviceSnapshot::neutral()
            .with_key(Key::A, true)
            .with_key(Key::S, true)
            .with_button(MouseButton::Right, true);
        let current = DeviceSnapshot::neutral()
            .with_key(Key::W, true)
            .with_key(Key::S, true)
            .with_button(MouseButton::Left, true)
            .with_cursor(Point::new(3, 4));

        InputFrame { index: 7, events: classify(&current, &previous), dispatch: DispatchReport::default() }
    }

    #[test]
    fn key_helpers_split_by_kind() {
        let frame = mixed_frame();
        assert_eq!(frame.pressed_keys().collect::<Vec<_>>(), vec![Key::W]);
        assert_eq!(frame.released_keys().collect::<Vec<_>>(), vec![Key::A]);
        assert_eq!(frame.keys(TransitionKind::Down).collect::<Vec<_>>(), vec![Key::S]);
    }

    #[test]
    fn button_helper_split_by_kind() {
        let frame = mixed_frame();
        assert_eq!(frame.buttons(TransitionKind::Pressed).collect::<Vec<_>>(), vec![MouseButton::Left]);
        assert_eq!(frame.buttons(TransitionKind::Released).collect::<Vec<_>>(), vec![MouseButton::Right]);
        assert_eq!(frame.buttons(TransitionKind::Down).count(), 0);
    }

    #[test]
    fn moved_reports_both_positions() {
        let moved = mixed_frame().moved().unwrap();
        assert_eq!(moved.previous, Point::new(0, 0));
        assert_eq!(moved.current, Point::new(3, 4));
    }

    #[test]
    fn keys_keep_table_order() {
        let both = DeviceSnapshot::neutral().with_key(Key::W, true).with_key(Key::A, true);
        let frame = InputFrame { events: classify(&both, &DeviceSnapshot::neutral()), ..InputFrame::default() };
        assert_eq!(frame.pressed_keys().collect::<Vec<_>>(), vec![Key::A, Key::W]);
    }

    #[test]
    fn begin_clears_previous_tick() {
        let mut frame = mixed_frame();
        assert!(!frame.is_empty());

        frame.begin(8);
        assert!(frame.is_empty());
        assert_eq!(frame.index, 8);
        assert!(frame.moved().is_none());
    }
}
