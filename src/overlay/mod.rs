//! Inline rich-text editor overlay.
//!
//! The controller is generic over its DOM, editor, scheduler and sanitizer so
//! the whole lifecycle runs natively under test; `browser` supplies the real
//! implementations.

mod bindings;
mod browser;
mod config;
mod controller;
mod dom;
mod geometry;
mod interaction;
mod schedule;

#[cfg(test)]
mod testing;

pub use bindings::{Disposer, Subscriptions};
pub(crate) use browser::{listen, InlineOverlay, HOST_ID};
pub use config::OverlayConfig;
pub use controller::{InlineEditorController, OverlayState, Phase};
pub use dom::{Draft, EditableTarget, EditorChange, EditorConfig, EditorMount, OverlayDom, Sanitize};
pub use geometry::{overlay_position, Position, Rect, Viewport};
pub use interaction::InteractionFlags;
pub use schedule::{Scheduler, Task, TaskId, TaskKind, Wake};
