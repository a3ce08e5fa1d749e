use super::snapshot::DeviceSnapshot;
use super::types::{
    ButtonEvent,
    InputEvent,
    Key,
    KeyEvent,
    MouseButton,
    MouseMoveEvent,
    TransitionKind,
};

/// Classifies every signal of `current` against the same signal in `previous`.
///
/// Emission order is fixed:
/// 1. keys, in [`Key::ALL`] order,
/// 2. mouse buttons, in [`MouseButton::ALL`] order (Left, Right, Middle, Back, Forward),
/// 3. a single `Moved` event if the cursor position differs.
///
/// `Unchanged` signals produce nothing. Each signal yields at most one event per
/// call, so `Pressed` and `Released` can never both appear for the same signal.
pub fn classify(current: &DeviceSnapshot, previous: &DeviceSnapshot) -> Vec<InputEvent> {
    let mut events = Vec::new();
    classify_into(current, previous, &mut events);
    events
}

/// Like [`classify`] but appends into `out`, reusing its allocation.
pub(crate) fn classify_into(
    current: &DeviceSnapshot,
    previous: &DeviceSnapshot,
    out: &mut Vec<InputEvent>,
) {
    // Quiet keyboards are the common case.
    if current.any_key() || previous.any_key() {
        for &key in Key::ALL {
            let kind = TransitionKind::classify(current.key_down(key), previous.key_down(key));
            if kind != TransitionKind::Unchanged {
                out.push(InputEvent::Key(KeyEvent { key, kind }));
            }
        }
    }

    let position = current.cursor();
    for button in MouseButton::ALL {
        let kind = TransitionKind::classify(current.button_down(button), previous.button_down(button));
        if kind != TransitionKind::Unchanged {
            out.push(InputEvent::Button(ButtonEvent { button, kind, position }));
        }
    }

    if current.cursor() != previous.cursor() {
        out.push(InputEvent::Moved(MouseMoveEvent {
            previous: previous.cursor(),
            current: current.cursor(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;

    fn keys(down: &[Key]) -> DeviceSnapshot {
        down.iter().fold(DeviceSnapshot::neutral(), |s, k| s.with_key(*k, true))
    }

    fn key_ev(key: Key, kind: TransitionKind) -> InputEvent {
        InputEvent::Key(KeyEvent { key, kind })
    }

    // ── truth table ───────────────────────────────────────────────────────

    #[test]
    fn key_a_press_hold_release() {
        let s0 = keys(&[]);
        let s1 = keys(&[Key::A]);
        let s2 = keys(&[Key::A]);
        let s3 = keys(&[]);

        assert_eq!(classify(&s1, &s0), vec![key_ev(Key::A, TransitionKind::Pressed)]);
        assert_eq!(classify(&s2, &s1), vec![key_ev(Key::A, TransitionKind::Down)]);
        assert_eq!(classify(&s3, &s2), vec![key_ev(Key::A, TransitionKind::Released)]);
    }

    #[test]
    fn quiet_pair_emits_nothing() {
        let s = DeviceSnapshot::neutral().with_cursor(Point::new(5, 5));
        assert!(classify(&s, &s).is_empty());
    }

    #[test]
    fn at_most_one_event_per_signal() {
        let prev = keys(&[Key::A, Key::B]).with_button(MouseButton::Left, true);
        let cur = keys(&[Key::B, Key::C]).with_button(MouseButton::Right, true);
        let events = classify(&cur, &prev);

        for &key in Key::ALL {
            let n = events.iter().filter(|e| matches!(e, InputEvent::Key(k) if k.key == key)).count();
            assert!(n <= 1, "{key} emitted {n} times");
        }
        for button in MouseButton::ALL {
            let n = events
                .iter()
                .filter(|e| matches!(e, InputEvent::Button(b) if b.button == button))
                .count();
            assert!(n <= 1, "{button:?} emitted {n} times");
        }
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn keys_then_buttons_then_move() {
        let prev = keys(&[Key::Escape, Key::B])
            .with_button(MouseButton::Forward, true)
            .with_cursor(Point::new(0, 0));
        let cur = keys(&[Key::Escape, Key::Z])
            .with_button(MouseButton::Left, true)
            .with_button(MouseButton::Forward, true)
            .with_cursor(Point::new(2, 3));

        let pos = Point::new(2, 3);
        let expected = vec![
            key_ev(Key::B, TransitionKind::Released),
            key_ev(Key::Z, TransitionKind::Pressed),
            key_ev(Key::Escape, TransitionKind::Down),
            InputEvent::Button(ButtonEvent { button: MouseButton::Left, kind: TransitionKind::Pressed, position: pos }),
            InputEvent::Button(ButtonEvent { button: MouseButton::Forward, kind: TransitionKind::Down, position: pos }),
            InputEvent::Moved(MouseMoveEvent { previous: Point::new(0, 0), current: pos }),
        ];
        assert_eq!(classify(&cur, &prev), expected);
    }

    #[test]
    fn replay_is_deterministic() {
        let prev = keys(&[Key::Q, Key::W, Key::Space]).with_button(MouseButton::Middle, true);
        let cur = keys(&[Key::W, Key::E]).with_button(MouseButton::Back, true).with_cursor(Point::new(-4, 8));
        let first = classify(&cur, &prev);
        for _ in 0..10 {
            assert_eq!(classify(&cur, &prev), first);
        }
    }

    // ── buttons ───────────────────────────────────────────────────────────

    #[test]
    fn right_and_middle_use_their_own_history() {
        // Left was up, right and middle were already held: they are Down, not Pressed.
        let prev = DeviceSnapshot::neutral()
            .with_button(MouseButton::Right, true)
            .with_button(MouseButton::Middle, true);
        let cur = prev.with_button(MouseButton::Left, true);

        let kinds: Vec<(MouseButton, TransitionKind)> = classify(&cur, &prev)
            .into_iter()
            .filter_map(|e| match e {
                InputEvent::Button(b) => Some((b.button, b.kind)),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                (MouseButton::Left, TransitionKind::Pressed),
                (MouseButton::Right, TransitionKind::Down),
                (MouseButton::Middle, TransitionKind::Down),
            ]
        );
    }

    #[test]
    fn button_events_carry_current_cursor() {
        let prev = DeviceSnapshot::neutral().with_cursor(Point::new(1, 1));
        let cur = prev.with_button(MouseButton::Back, true).with_cursor(Point::new(9, 9));
        let events = classify(&cur, &prev);
        assert_eq!(
            events[0],
            InputEvent::Button(ButtonEvent {
                button: MouseButton::Back,
                kind: TransitionKind::Pressed,
                position: Point::new(9, 9),
            })
        );
    }

    // ── movement ──────────────────────────────────────────────────────────

    #[test]
    fn moved_only_when_position_differs() {
        let a = DeviceSnapshot::neutral().with_cursor(Point::new(10, 20));
        let b = a.with_cursor(Point::new(11, 20));
        assert!(classify(&a, &a).is_empty());
        assert_eq!(
            classify(&b, &a),
            vec![InputEvent::Moved(MouseMoveEvent { previous: Point::new(10, 20), current: Point::new(11, 20) })]
        );
    }

    #[test]
    fn classify_into_appends() {
        let mut out = vec![key_ev(Key::Tab, TransitionKind::Down)];
        classify_into(&keys(&[Key::A]), &keys(&[]), &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], key_ev(Key::A, TransitionKind::Pressed));
    }
}
