//! Kestrel UI: GUI elements driven by synthesized input events.
//!
//! Elements consume [`InputEvent`](kestrel_engine::input::InputEvent)s from an
//! [`InputContext`](kestrel_engine::input::InputContext) and expose numeric
//! state (display text, colours, scale, source rectangles) for a renderer.
//!
//! ```rust,ignore
//! let menu = Rc::new(RefCell::new(
//!     Menu::new()
//!         .with_entry(MenuItem::new("New game").bounds(Rect::new(0, 0, 512, 48)))
//!         .with_entry(MenuToggle::new("Music").bounds(Rect::new(0, 48, 512, 48))),
//! ));
//! Menu::attach(&menu, &mut input);
//! ```

pub mod event;
pub mod image;
pub mod menu;
pub mod menu_item;
pub mod menu_toggle;

pub mod prelude {
    pub use crate::event::EventResult;
    pub use crate::image::Image;
    pub use crate::menu::Menu;
    pub use crate::menu_item::{MenuEntry, MenuItem};
    pub use crate::menu_toggle::MenuToggle;

    pub use kestrel_engine::coords::{Point, Rect, Size};
    pub use kestrel_engine::paint::Color;
}
