use super::classify::classify_into;
use super::dispatch::{EventCategory, ListenerHandle, ListenerRegistry};
use super::frame::InputFrame;
use super::query::InputQuery;
use super::sampler::{DeviceSampler, DeviceSource};
use super::snapshot::DeviceSnapshot;
use super::types::{InputEvent, Key, MouseButton, TransitionKind};

/// Input context configuration.
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Call [`InputContext::reset_input_states`] from
    /// [`InputContext::focus_changed`].
    pub reset_on_focus_change: bool,

    /// Log every synthesized event at `trace` level.
    pub trace_events: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            reset_on_focus_change: true,
            trace_events: false,
        }
    }
}

/// Per-window input state owned by the frame driver.
///
/// Replaces a process-wide input manager: construct one with [`new`](Self::new),
/// call [`tick`](Self::tick) once per frame, and tear it down with
/// [`shutdown`](Self::shutdown). Independent contexts share nothing.
#[derive(Debug)]
pub struct InputContext<S> {
    config: InputConfig,
    sampler: DeviceSampler<S>,
    listeners: ListenerRegistry,
    frame: InputFrame,
    ticks: u64,
}

impl<S: DeviceSource> InputContext<S> {
    pub fn new(source: S, config: InputConfig) -> Self {
        log::debug!("input context created ({config:?})");
        Self {
            config,
            sampler: DeviceSampler::new(source),
            listeners: ListenerRegistry::new(),
            frame: InputFrame::default(),
            ticks: 0,
        }
    }

    /// Runs one tick: sample, classify, dispatch.
    ///
    /// Returns the frame holding this tick's events and dispatch report.
    pub fn tick(&mut self) -> &InputFrame {
        self.sampler.sample();
        self.synthesize()
    }

    /// Demotes the current snapshot and replaces it with a released one
    /// without reading the device.
    ///
    /// The next `tick` compares against the released snapshot, so no
    /// `Released` events are emitted for signals held at reset. A key that is
    /// still held at the next tick is reported `Pressed` again.
    pub fn reset_input_states(&mut self) {
        log::debug!("input states reset at tick {}", self.ticks);
        self.sampler.reset();
    }

    /// Notifies the context that window focus changed.
    pub fn focus_changed(&mut self, focused: bool) {
        log::debug!("input focus changed: focused={focused}");
        if self.config.reset_on_focus_change {
            self.reset_input_states();
        }
    }

    fn synthesize(&mut self) -> &InputFrame {
        self.frame.begin(self.ticks);
        self.ticks = self.ticks.wrapping_add(1);

        classify_into(self.sampler.current(), self.sampler.previous(), &mut self.frame.events);

        if self.config.trace_events {
            for event in &self.frame.events {
                log::trace!("tick {}: {event:?}", self.frame.index);
            }
        }

        self.frame.dispatch = self.listeners.dispatch(&self.frame.events);
        &self.frame
    }

    /// Subscribes `listener` to `category`. See [`ListenerRegistry::subscribe`].
    pub fn subscribe<F>(&mut self, category: EventCategory, listener: F) -> ListenerHandle
    where
        F: FnMut(&InputEvent) -> anyhow::Result<()> + 'static,
    {
        self.listeners.subscribe(category, listener)
    }

    pub fn unsubscribe(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.unsubscribe(handle)
    }

    #[inline]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Last tick's frame.
    #[inline]
    pub fn frame(&self) -> &InputFrame {
        &self.frame
    }

    #[inline]
    pub fn current(&self) -> &DeviceSnapshot {
        self.sampler.current()
    }

    #[inline]
    pub fn previous(&self) -> &DeviceSnapshot {
        self.sampler.previous()
    }

    /// True only on the tick `key` went down.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        TransitionKind::classify(self.current().key_down(key), self.previous().key_down(key))
            == TransitionKind::Pressed
    }

    /// True only on the tick `button` went down, judged against that
    /// button's own previous state.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        TransitionKind::classify(self.current().button_down(button), self.previous().button_down(button))
            == TransitionKind::Pressed
    }

    #[inline]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        self.sampler.source_mut()
    }

    /// Drops all listeners and hands the device source back.
    pub fn shutdown(mut self) -> S {
        log::debug!("input context shut down after {} ticks", self.ticks);
        self.listeners.clear();
        self.sampler.into_source()
    }
}

impl<S: DeviceSource> InputQuery for InputContext<S> {
    #[inline]
    fn snapshot(&self) -> &DeviceSnapshot {
        self.sampler.current()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::coords::Point;
    use crate::input::{KeyEvent, ScriptedSource};

    fn snap() -> DeviceSnapshot {
        DeviceSnapshot::neutral()
    }

    fn ctx(script: impl IntoIterator<Item = DeviceSnapshot>) -> InputContext<ScriptedSource> {
        InputContext::new(ScriptedSource::new(script), InputConfig::default())
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn press_once_down_every_tick_release_once() {
        let held = snap().with_key(Key::A, true);
        let mut input = ctx([held, held, held, snap(), snap()]);

        let kinds: Vec<Vec<TransitionKind>> = (0..5)
            .map(|_| input.tick().events.iter().filter_map(InputEvent::kind).collect())
            .collect();

        assert_eq!(
            kinds,
            vec![
                vec![TransitionKind::Pressed],
                vec![TransitionKind::Down],
                vec![TransitionKind::Down],
                vec![TransitionKind::Released],
                vec![],
            ]
        );
    }

    #[test]
    fn frame_index_counts_ticks() {
        let mut input = ctx([]);
        assert_eq!(input.tick().index, 0);
        assert_eq!(input.tick().index, 1);
        assert_eq!(input.frame().index, 1);
    }

    #[test]
    fn previous_is_last_current() {
        let s1 = snap().with_cursor(Point::new(1, 0));
        let s2 = snap().with_cursor(Point::new(2, 0));
        let mut input = ctx([s1, s2]);
        input.tick();
        let before = *input.current();
        input.tick();
        assert_eq!(*input.previous(), before);
        assert_eq!(*input.current(), s2);
    }

    // ── listeners ─────────────────────────────────────────────────────────

    #[test]
    fn tick_dispatches_to_listeners() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut input = ctx([snap().with_key(Key::Enter, true)]);

        let sink = Rc::clone(&seen);
        input.subscribe(EventCategory::KeyPressed, move |ev| {
            sink.borrow_mut().push(*ev);
            Ok(())
        });

        let report = input.tick().dispatch;
        assert_eq!(report.invocations, 1);
        assert_eq!(
            *seen.borrow(),
            vec![InputEvent::Key(KeyEvent { key: Key::Enter, kind: TransitionKind::Pressed })]
        );
    }

    #[test]
    fn listener_error_is_reported_in_frame() {
        let mut input = ctx([snap().with_button(MouseButton::Left, true)]);
        input.subscribe(EventCategory::ButtonPressed, |_| Err(anyhow::anyhow!("nope")));
        let frame = input.tick();
        assert_eq!(frame.dispatch.failures, 1);
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn contexts_are_isolated() {
        let mut a = ctx([snap().with_key(Key::A, true)]);
        let mut b = ctx([snap()]);
        a.tick();
        b.tick();
        assert!(a.is_key_down(&[Key::A]));
        assert!(!b.is_key_down(&[Key::A]));
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_then_tick_reports_held_keys_as_pressed_again() {
        let held = snap().with_key(Key::W, true);
        let mut input = ctx([held, held]);
        input.tick();

        input.reset_input_states();
        assert!(!input.any_key_down());
        assert_eq!(*input.previous(), held);

        let frame = input.tick();
        assert_eq!(frame.pressed_keys().collect::<Vec<_>>(), vec![Key::W]);
    }

    #[test]
    fn reset_then_release_emits_nothing() {
        let held = snap().with_key(Key::W, true);
        let mut input = ctx([held, snap()]);
        input.tick();

        input.reset_input_states();
        let frame = input.tick();
        assert!(frame.is_empty());
        assert_eq!(frame.released_keys().count(), 0);
    }

    #[test]
    fn focus_change_respects_config() {
        let held = snap().with_key(Key::W, true);

        let mut resetting = ctx([held]);
        resetting.tick();
        resetting.focus_changed(false);
        assert!(!resetting.any_key_down());

        let mut keeping = InputContext::new(
            ScriptedSource::new([held]),
            InputConfig { reset_on_focus_change: false, ..InputConfig::default() },
        );
        keeping.tick();
        keeping.focus_changed(false);
        assert!(keeping.any_key_down());
    }

    // ── edge queries ──────────────────────────────────────────────────────

    #[test]
    fn button_pressed_uses_own_history() {
        // Right held across ticks while left is clicked: only left is "pressed".
        let right = snap().with_button(MouseButton::Right, true);
        let both = right.with_button(MouseButton::Left, true);
        let mut input = ctx([right, both]);
        input.tick();
        input.tick();

        assert!(input.is_button_pressed(MouseButton::Left));
        assert!(!input.is_button_pressed(MouseButton::Right));
        assert!(!input.is_button_pressed(MouseButton::Middle));
    }

    #[test]
    fn key_pressed_only_on_transition_tick() {
        let held = snap().with_key(Key::Space, true);
        let mut input = ctx([held, held]);
        input.tick();
        assert!(input.is_key_pressed(Key::Space));
        input.tick();
        assert!(!input.is_key_pressed(Key::Space));
        assert!(input.is_key_down(&[Key::Space]));
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn shutdown_returns_source() {
        let mut input = ctx([snap(), snap()]);
        input.subscribe(EventCategory::Moved, |_| Ok(()));
        input.tick();
        let source = input.shutdown();
        assert_eq!(source.remaining(), 1);
    }
}
