//! Input subsystem.
//!
//! Once per tick the frame driver calls [`InputContext::tick`], which:
//! 1. samples the [`DeviceSource`] into a new current [`DeviceSnapshot`],
//!    demoting the old one to previous,
//! 2. classifies every key, mouse button and the cursor against its own
//!    previous state ([`classify`]),
//! 3. dispatches the resulting [`InputEvent`]s to registered listeners in a
//!    stable order ([`ListenerRegistry`]).
//!
//! Instant "is X down" reads go through [`InputQuery`] and never touch the
//! event stream. The public API is platform-agnostic; `platform` holds the
//! winit adapter.

mod classify;
mod context;
mod dispatch;
mod frame;
mod query;
mod sampler;
mod snapshot;
mod types;

pub mod platform;

pub use classify::classify;
pub use context::{InputConfig, InputContext};
pub use dispatch::{DispatchReport, EventCategory, ListenerHandle, ListenerRegistry};
pub use frame::InputFrame;
pub use query::InputQuery;
pub use sampler::{DeviceSampler, DeviceSource, ScriptedSource};
pub use snapshot::{DeviceSnapshot, SnapshotError};
pub use types::{
    ButtonEvent,
    InputEvent,
    Key,
    KeyEvent,
    MouseButton,
    MouseMoveEvent,
    TransitionKind,
};
