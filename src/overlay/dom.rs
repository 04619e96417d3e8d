//! Capabilities the overlay controller needs from its surroundings.

use super::bindings::Disposer;
use super::geometry::{Rect, Viewport};
use std::cell::RefCell;
use std::rc::Rc;

/// A page element marked as inline-editable.
pub trait EditableTarget: Clone {
    /// Node identity, not content equality.
    fn same_node(&self, other: &Self) -> bool;
    fn inner_html(&self) -> String;
    fn set_inner_html(&self, html: &str);
    fn bounding_rect(&self) -> Rect;
}

/// Read/write access to the overlay's own DOM.
pub trait OverlayDom {
    type Target: EditableTarget;
    type Host;

    fn viewport(&self) -> Viewport;

    /// The node the rich-text editor mounts into; absent until the overlay renders.
    fn overlay_host(&self) -> Option<Self::Host>;

    /// Live HTML of the editor's content node, if it exists.
    fn content_html(&self) -> Option<String>;

    /// Returns `false` when there is no content node to write into.
    fn set_content_html(&self, html: &str) -> bool;

    /// Returns `true` when focus ended up inside the overlay.
    fn focus_content(&self) -> bool;
    fn select_all_content(&self);

    /// Whether a non-empty selection touches the editor content; `None`
    /// when there is no content node to check against.
    fn content_selection_active(&self) -> Option<bool>;
    fn overlay_contains_point(&self, x: f64, y: f64) -> bool;
}

/// Payload of the editor's change callback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorChange {
    pub html: String,
    pub markdown: String,
    pub text: String,
}

#[derive(Clone)]
pub struct EditorConfig {
    pub label: Option<String>,
    pub helper: Option<String>,
    pub placeholder: String,
    pub character_limit: u32,
    pub toolbar_items: Vec<String>,
    pub show_grid: bool,
    pub show_status: bool,
    pub on_change: Rc<dyn Fn(EditorChange)>,
}

impl std::fmt::Debug for EditorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorConfig")
            .field("label", &self.label)
            .field("helper", &self.helper)
            .field("placeholder", &self.placeholder)
            .field("character_limit", &self.character_limit)
            .field("toolbar_items", &self.toolbar_items)
            .field("show_grid", &self.show_grid)
            .field("show_status", &self.show_status)
            .finish_non_exhaustive()
    }
}

/// Rich-text editor mounting capability.
pub trait EditorMount {
    type Host;

    fn mount(&mut self, host: &Self::Host, config: EditorConfig) -> Disposer;
}

/// HTML sanitizer. Must be idempotent.
pub trait Sanitize {
    fn sanitize(&self, raw: &str) -> String;
}

/// In-progress overlay content.
///
/// Shared with the mounted editor's change callback, which may fire while the
/// controller itself is borrowed.
#[derive(Clone, Debug, Default)]
pub struct Draft(Rc<RefCell<String>>);

impl Draft {
    pub fn new(html: String) -> Self {
        Self(Rc::new(RefCell::new(html)))
    }

    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }

    pub fn set(&self, html: String) {
        *self.0.borrow_mut() = html;
    }
}
