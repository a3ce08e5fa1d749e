use kestrel_engine::coords::Rect;
use kestrel_engine::effects::FadeEffect;
use kestrel_engine::input::{InputEvent, Key, MouseButton, TransitionKind};
use kestrel_engine::paint::Color;

use crate::event::EventResult;

/// A selectable line of menu text.
///
/// Activated by a left-button press inside `bounds`, or by Enter / E pressed
/// while focused. While focused the text is drawn in `selected_colour` and
/// pulses through a fade effect.
pub struct MenuItem {
    pub text: String,
    pub bounds: Rect,
    pub foreground: Color,
    pub selected_colour: Color,
    focused: bool,
    fade: FadeEffect,
    on_activated: Option<Box<dyn FnMut()>>,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bounds: Rect::new(0, 0, 512, 48),
            foreground: Color::WHITE,
            selected_colour: Color::GOLD,
            focused: false,
            fade: FadeEffect::new(2.0, 0.25),
            on_activated: None,
        }
    }

    pub fn bounds(mut self, v: Rect) -> Self { self.bounds = v; self }
    pub fn foreground(mut self, v: Color) -> Self { self.foreground = v; self }
    pub fn selected_colour(mut self, v: Color) -> Self { self.selected_colour = v; self }
    pub fn on_activated(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_activated = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.fade.set_active(focused);
    }

    /// Text colour for this frame, fade included.
    pub fn text_colour(&self) -> Color {
        if self.focused {
            self.selected_colour.with_opacity(self.fade.multiplier())
        } else {
            self.foreground
        }
    }

    /// True if `event` is the cursor crossing into `bounds`.
    pub fn is_mouse_entering(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Moved(m) => !self.bounds.contains(m.previous) && self.bounds.contains(m.current),
            _ => false,
        }
    }

    /// Fires the activation callback.
    pub fn activate(&mut self) {
        log::debug!("menu item {:?} activated", self.text);
        if let Some(f) = &mut self.on_activated {
            f();
        }
    }

    /// Activates on a click inside `bounds` or Enter / E while focused.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        let activates = match event {
            InputEvent::Button(b) => {
                b.button == MouseButton::Left
                    && b.kind == TransitionKind::Pressed
                    && self.bounds.contains(b.position)
            }
            InputEvent::Key(k) => {
                self.focused
                    && k.kind == TransitionKind::Pressed
                    && matches!(k.key, Key::Enter | Key::NumpadEnter | Key::E)
            }
            InputEvent::Moved(_) => false,
        };

        if activates {
            self.activate();
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Advances the focus fade by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.fade.update(dt);
    }
}

/// Anything a [`Menu`](crate::menu::Menu) can hold.
///
/// Implementors wrap a [`MenuItem`] and may react to activation.
pub trait MenuEntry {
    fn item(&self) -> &MenuItem;
    fn item_mut(&mut self) -> &mut MenuItem;

    /// Called after the wrapped item fires its activation callback.
    fn after_activation(&mut self) {}

    /// Text to draw this frame.
    fn display_text(&self) -> String {
        self.item().text.clone()
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        let result = self.item_mut().handle_event(event);
        if result.is_consumed() {
            self.after_activation();
        }
        result
    }

    fn update(&mut self, dt: f32) {
        self.item_mut().update(dt);
    }
}

impl MenuEntry for MenuItem {
    fn item(&self) -> &MenuItem {
        self
    }

    fn item_mut(&mut self) -> &mut MenuItem {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use kestrel_engine::coords::Point;
    use kestrel_engine::input::{ButtonEvent, KeyEvent, MouseMoveEvent};

    fn counted(item: MenuItem) -> (MenuItem, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (item.on_activated(move || c.set(c.get() + 1)), count)
    }

    fn click(x: i32, y: i32) -> InputEvent {
        InputEvent::Button(ButtonEvent {
            button: MouseButton::Left,
            kind: TransitionKind::Pressed,
            position: Point::new(x, y),
        })
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key(KeyEvent { key, kind: TransitionKind::Pressed })
    }

    // ── activation ────────────────────────────────────────────────────────

    #[test]
    fn click_inside_activates() {
        let (mut item, count) = counted(MenuItem::new("Play").bounds(Rect::new(10, 10, 100, 20)));
        assert_eq!(item.handle_event(&click(50, 15)), EventResult::Consumed);
        assert_eq!(item.handle_event(&click(5, 15)), EventResult::Ignored);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn held_button_does_not_reactivate() {
        let (mut item, count) = counted(MenuItem::new("Play"));
        let held = InputEvent::Button(ButtonEvent {
            button: MouseButton::Left,
            kind: TransitionKind::Down,
            position: Point::new(1, 1),
        });
        item.handle_event(&held);
        item.handle_event(&held);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn enter_or_e_activates_only_when_focused() {
        let (mut item, count) = counted(MenuItem::new("Play"));
        item.handle_event(&press(Key::Enter));
        assert_eq!(count.get(), 0);

        item.set_focused(true);
        item.handle_event(&press(Key::Enter));
        item.handle_event(&press(Key::E));
        item.handle_event(&press(Key::Space));
        assert_eq!(count.get(), 2);
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_switches_colour_and_fade() {
        let mut item = MenuItem::new("Options");
        assert_eq!(item.text_colour(), Color::WHITE);

        item.set_focused(true);
        assert_eq!(item.text_colour(), Color::GOLD);

        item.update(0.25);
        assert!(item.text_colour().a < 1.0);

        item.set_focused(false);
        assert_eq!(item.text_colour(), Color::WHITE);
    }

    #[test]
    fn mouse_entering_detects_boundary_crossing() {
        let item = MenuItem::new("Quit").bounds(Rect::new(0, 0, 10, 10));
        let moved = |from: Point, to: Point| InputEvent::Moved(MouseMoveEvent { previous: from, current: to });

        assert!(item.is_mouse_entering(&moved(Point::new(20, 5), Point::new(5, 5))));
        assert!(!item.is_mouse_entering(&moved(Point::new(4, 5), Point::new(5, 5))));
        assert!(!item.is_mouse_entering(&moved(Point::new(5, 5), Point::new(20, 5))));
        assert!(!item.is_mouse_entering(&click(5, 5)));
    }
}
