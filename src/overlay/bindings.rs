//! Scoped ownership of listeners and mounted instances.
//!
//! Every `bind`/`mount` call hands back a [`Disposer`]; dropping it (or calling
//! [`Disposer::dispose`]) releases the resource exactly once.

use super::controller::InlineEditorController;
use super::dom::{EditableTarget, EditorMount, OverlayDom, Sanitize};
use super::schedule::Scheduler;

pub struct Disposer {
    release: Option<Box<dyn FnOnce()>>,
}

impl Disposer {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn dispose(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposer")
            .field("live", &self.release.is_some())
            .finish()
    }
}

/// Disposer list for a batch of bindings.
#[derive(Default, Debug)]
pub struct Subscriptions {
    items: Vec<Disposer>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, disposer: Disposer) {
        self.items.push(disposer);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dispose everything in registration order.
    pub fn clear(&mut self) {
        for d in self.items.drain(..) {
            d.dispose();
        }
    }

    /// Replace the current bindings, disposing the old ones first.
    pub fn replace(&mut self, next: Subscriptions) {
        self.clear();
        self.items = next.into_items();
    }

    fn into_items(mut self) -> Vec<Disposer> {
        std::mem::take(&mut self.items)
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.clear();
    }
}

// Trigger element handlers. The browser layer routes `mouseenter`,
// `mouseleave` and `click` of every `[data-ds-inline-edit]` element here.
impl<D, E, S, Z> InlineEditorController<D, E, S, Z>
where
    D: OverlayDom,
    E: EditorMount<Host = D::Host>,
    S: Scheduler,
    Z: Sanitize,
{
    /// Pointer entered a trigger element.
    pub fn trigger_enter(&mut self, target: &D::Target) {
        if !self.is_open_for(target) {
            self.open(target.clone(), false);
        }
        self.hover_enter();
    }

    pub fn trigger_leave(&mut self) {
        self.hover_leave();
    }

    /// Primary click on a trigger element; the caller suppresses the default action.
    pub fn trigger_click(&mut self, target: &D::Target) {
        if self.is_open_for(target) {
            self.request_focus();
        } else {
            self.open(target.clone(), true);
        }
        self.hover_enter();
    }

    pub fn is_open_for(&self, target: &D::Target) -> bool {
        self.state
            .target
            .as_ref()
            .is_some_and(|open| open.same_node(target))
    }
}
