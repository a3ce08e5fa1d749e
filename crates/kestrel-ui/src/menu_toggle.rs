use kestrel_engine::coords::Rect;

use crate::menu_item::{MenuEntry, MenuItem};

/// A menu item with an on/off state, flipped on every activation.
///
/// Displayed as `"<text> : On"` or `"<text> : Off"`.
pub struct MenuToggle {
    item: MenuItem,
    toggle_state: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl MenuToggle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            item: MenuItem::new(text),
            toggle_state: false,
            on_change: None,
        }
    }

    pub fn bounds(mut self, v: Rect) -> Self { self.item.bounds = v; self }
    pub fn toggle_state(mut self, v: bool) -> Self { self.toggle_state = v; self }

    /// Called with the new state after each flip.
    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn state(&self) -> bool {
        self.toggle_state
    }
}

impl MenuEntry for MenuToggle {
    fn item(&self) -> &MenuItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut MenuItem {
        &mut self.item
    }

    fn after_activation(&mut self) {
        self.toggle_state = !self.toggle_state;
        if let Some(f) = &mut self.on_change {
            f(self.toggle_state);
        }
    }

    fn display_text(&self) -> String {
        let state = if self.toggle_state { "On" } else { "Off" };
        format!("{} : {state}", self.item.text)
    }
}
