//! Vertical menu with keyboard and mouse focus.
//!
//! ArrowUp / ArrowDown cycle focus through the entries in insertion order;
//! the cursor entering an entry focuses it. At most one entry is focused.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;

use kestrel_engine::input::{
    DeviceSource,
    EventCategory,
    InputContext,
    InputEvent,
    Key,
    ListenerHandle,
    TransitionKind,
};

use crate::event::EventResult;
use crate::menu_item::MenuEntry;

#[derive(Default)]
pub struct Menu {
    entries: Vec<Box<dyn MenuEntry>>,
    focused: Option<usize>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, entry: impl MenuEntry + 'static) -> Self {
        self.push(entry);
        self
    }

    pub fn push(&mut self, entry: impl MenuEntry + 'static) {
        self.entries.push(Box::new(entry));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &dyn MenuEntry> {
        self.entries.iter().map(|e| e.as_ref())
    }

    #[inline]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Moves focus to `index`, clearing it from the previous entry.
    /// Out-of-range indices are ignored.
    pub fn focus(&mut self, index: usize) {
        if index >= self.entries.len() || self.focused == Some(index) {
            return;
        }
        if let Some(prev) = self.focused {
            self.entries[prev].item_mut().set_focused(false);
        }
        self.entries[index].item_mut().set_focused(true);
        self.focused = Some(index);
    }

    /// Cycles focus forward, or backward if `reverse`. With nothing focused
    /// the first (or last) entry is chosen.
    pub fn advance(&mut self, reverse: bool) {
        let n = self.entries.len();
        if n == 0 {
            return;
        }
        let next = match self.focused {
            None if reverse => n - 1,
            None => 0,
            Some(i) if reverse => (i + n - 1) % n,
            Some(i) => (i + 1) % n,
        };
        self.focus(next);
    }

    /// Routes one event: arrow keys move focus, cursor entry focuses, and
    /// everything else is offered to each entry in order.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        if event.is_key(Key::ArrowDown, TransitionKind::Pressed) {
            self.advance(false);
            return EventResult::Consumed;
        }
        if event.is_key(Key::ArrowUp, TransitionKind::Pressed) {
            self.advance(true);
            return EventResult::Consumed;
        }

        if let InputEvent::Moved(_) = event {
            return match self.entries.iter().position(|e| e.item().is_mouse_entering(event)) {
                Some(i) => {
                    self.focus(i);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            };
        }

        self.entries
            .iter_mut()
            .fold(EventResult::Ignored, |acc, entry| acc.or(entry.handle_event(event)))
    }

    /// Advances entry effects by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for entry in &mut self.entries {
            entry.update(dt);
        }
    }

    /// Subscribes a shared menu to key presses, button presses and cursor
    /// movement on `input`.
    ///
    /// A listener that finds the menu already borrowed (a listener re-entered
    /// the menu during dispatch) reports an error instead of panicking.
    pub fn attach<S: DeviceSource>(menu: &Rc<RefCell<Menu>>, input: &mut InputContext<S>) -> Vec<ListenerHandle> {
        [EventCategory::KeyPressed, EventCategory::ButtonPressed, EventCategory::Moved]
            .into_iter()
            .map(|category| {
                let menu = Rc::clone(menu);
                input.subscribe(category, move |event| {
                    menu.try_borrow_mut()
                        .context("menu borrowed during input dispatch")?
                        .handle_event(event);
                    Ok(())
                })
            })
            .collect()
    }
}
