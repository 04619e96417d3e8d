//! `web_sys` implementations of the overlay capabilities and the glue that
//! routes DOM events into the controller.

use super::bindings::{Disposer, Subscriptions};
use super::config::OverlayConfig;
use super::controller::InlineEditorController;
use super::dom::{EditableTarget, EditorConfig, EditorMount, OverlayDom, Sanitize};
use super::geometry::{Rect, Viewport};
use super::schedule::{Scheduler, Task, TaskId, Wake};
use crate::uikit;
use leptos::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(crate) const HOST_ID: &str = "inline-richtext-editor";
pub(crate) const OVERLAY_SELECTOR: &str = ".ds-inline-editor";
pub(crate) const CONTENT_SELECTOR: &str = "[data-ds-editor-content]";
pub(crate) const TRIGGER_SELECTOR: &str = "[data-ds-inline-edit]";

/// Attach `handler` to `event` on `target` until the returned disposer runs.
pub(crate) fn listen<E>(
    target: &web_sys::EventTarget,
    event: &'static str,
    mut handler: impl FnMut(E) + 'static,
) -> Disposer
where
    E: JsCast + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });

    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        tracing::warn!(event, error = ?e, "addEventListener failed");
        return Disposer::noop();
    }

    let target = target.clone();
    Disposer::new(move || {
        let _ = target.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    })
}

#[derive(Clone, Debug)]
pub(crate) struct BrowserTarget(pub web_sys::HtmlElement);

impl EditableTarget for BrowserTarget {
    fn same_node(&self, other: &Self) -> bool {
        js_sys::Object::is(self.0.as_ref(), other.0.as_ref())
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn bounding_rect(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect {
            left: r.left(),
            top: r.top(),
            right: r.right(),
            bottom: r.bottom(),
        }
    }
}

pub(crate) struct BrowserDom {
    document: web_sys::Document,
}

impl BrowserDom {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn overlay_element(&self) -> Option<web_sys::Element> {
        self.document.query_selector(OVERLAY_SELECTOR).ok().flatten()
    }

    fn content_element(&self) -> Option<web_sys::HtmlElement> {
        let host = self.document.get_element_by_id(HOST_ID)?;
        host.query_selector(CONTENT_SELECTOR)
            .ok()
            .flatten()?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }

    pub fn overlay_contains(&self, node: &web_sys::Node) -> bool {
        self.overlay_element()
            .is_some_and(|overlay| overlay.contains(Some(node)))
    }
}

impl OverlayDom for BrowserDom {
    type Target = BrowserTarget;
    type Host = web_sys::HtmlElement;

    fn viewport(&self) -> Viewport {
        let Some(window) = web_sys::window() else {
            return Viewport::default();
        };
        Viewport {
            width: window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0),
            scroll_x: window.scroll_x().unwrap_or(0.0),
            scroll_y: window.scroll_y().unwrap_or(0.0),
        }
    }

    fn overlay_host(&self) -> Option<web_sys::HtmlElement> {
        self.document
            .get_element_by_id(HOST_ID)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }

    fn content_html(&self) -> Option<String> {
        self.content_element().map(|el| el.inner_html())
    }

    fn set_content_html(&self, html: &str) -> bool {
        match self.content_element() {
            Some(el) => {
                el.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn focus_content(&self) -> bool {
        let Some(el) = self.content_element() else {
            return false;
        };
        if el.focus().is_err() {
            return false;
        }
        self.document
            .active_element()
            .is_some_and(|active| self.overlay_contains(&active))
    }

    fn select_all_content(&self) {
        let Some(content) = self.content_element() else {
            return;
        };
        if content.first_child().is_none() {
            return;
        }
        let Some(selection) = web_sys::window().and_then(|w| w.get_selection().ok().flatten())
        else {
            return;
        };
        let Ok(range) = self.document.create_range() else {
            return;
        };
        if range.select_node_contents(&content).is_ok() {
            let _ = selection.remove_all_ranges();
            let _ = selection.add_range(&range);
        }
    }

    fn content_selection_active(&self) -> Option<bool> {
        let content = self.content_element()?;
        let active = web_sys::window()
            .and_then(|w| w.get_selection().ok().flatten())
            .is_some_and(|s| {
                s.to_string().length() > 0
                    && s.contains_node_with_allow_partial_containment(&content, true)
                        .unwrap_or(false)
            });
        Some(active)
    }

    fn overlay_contains_point(&self, x: f64, y: f64) -> bool {
        self.document
            .element_from_point(x as f32, y as f32)
            .is_some_and(|el| self.overlay_contains(&el))
    }
}

pub(crate) struct UiKitEditor;

impl EditorMount for UiKitEditor {
    type Host = web_sys::HtmlElement;

    fn mount(&mut self, host: &web_sys::HtmlElement, config: EditorConfig) -> Disposer {
        uikit::mount_editor(host, config)
    }
}

pub(crate) struct UiKitSanitizer;

impl Sanitize for UiKitSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        uikit::sanitize_inline_html(raw)
    }
}

/// `setTimeout` takes an `i32`; longer delays saturate.
fn timer_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

enum Pending {
    Queued,
    Timer(i32),
}

/// Scheduler backed by the browser event loop.
///
/// Cancelled tasks are forgotten rather than unregistered (except timers), so
/// a late callback finds nothing pending and does nothing.
pub(crate) struct BrowserScheduler {
    dispatch: Rc<dyn Fn(Task)>,
    next_id: u64,
    pending: Rc<RefCell<HashMap<TaskId, Pending>>>,
}

impl BrowserScheduler {
    pub fn new(dispatch: Rc<dyn Fn(Task)>) -> Self {
        Self {
            dispatch,
            next_id: 0,
            pending: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, wake: Wake, task: Task) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);

        let pending = self.pending.clone();
        let dispatch = self.dispatch.clone();
        let fire = move || {
            let live = pending.borrow_mut().remove(&id).is_some();
            if live {
                dispatch(task);
            }
        };

        let Some(window) = web_sys::window() else {
            return id;
        };

        self.pending.borrow_mut().insert(id, Pending::Queued);
        let registered = match wake {
            Wake::Microtask => {
                leptos::task::spawn_local(async move { fire() });
                Ok(())
            }
            Wake::Frame => {
                let cb = Closure::once_into_js(fire);
                window.request_animation_frame(cb.unchecked_ref()).map(|_| ())
            }
            Wake::Delay(ms) => {
                let cb = Closure::once_into_js(fire);
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.unchecked_ref(),
                        timer_delay(ms),
                    )
                    .map(|handle| {
                        self.pending.borrow_mut().insert(id, Pending::Timer(handle));
                    })
            }
        };

        if let Err(e) = registered {
            tracing::warn!(?wake, error = ?e, "failed to schedule overlay task");
            self.pending.borrow_mut().remove(&id);
        }
        id
    }

    fn cancel(&mut self, id: TaskId) {
        let removed = self.pending.borrow_mut().remove(&id);
        if let (Some(Pending::Timer(handle)), Some(window)) = (removed, web_sys::window()) {
            window.clear_timeout_with_handle(handle);
        }
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

pub(crate) type BrowserController =
    InlineEditorController<BrowserDom, UiKitEditor, BrowserScheduler, UiKitSanitizer>;

/// What the page needs to render the overlay shell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct OverlayView {
    pub open: bool,
    pub left: f64,
    pub top: f64,
}

impl OverlayView {
    fn of(ctrl: &BrowserController) -> Self {
        let pos = ctrl.position();
        Self {
            open: ctrl.is_open(),
            left: pos.left,
            top: pos.top,
        }
    }
}

/// Shared handle to the page's inline editor controller.
#[derive(Clone)]
pub(crate) struct InlineOverlay {
    inner: Rc<RefCell<BrowserController>>,
    view: RwSignal<OverlayView>,
}

impl InlineOverlay {
    pub fn new(config: OverlayConfig, document: web_sys::Document) -> Self {
        let view = RwSignal::new(OverlayView::default());
        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<BrowserController>>| {
            let weak = weak.clone();
            let dispatch: Rc<dyn Fn(Task)> = Rc::new(move |task: Task| {
                if let Some(inner) = weak.upgrade() {
                    InlineOverlay { inner, view }.with(|c| c.run_task(task));
                }
            });
            RefCell::new(InlineEditorController::new(
                config,
                BrowserDom::new(document),
                UiKitEditor,
                BrowserScheduler::new(dispatch),
                UiKitSanitizer,
            ))
        });
        Self { inner, view }
    }

    pub fn view(&self) -> ReadSignal<OverlayView> {
        self.view.read_only()
    }

    /// Run `f` against the controller and publish the resulting view.
    ///
    /// Events that arrive while the controller is already borrowed (a
    /// synchronous blur during teardown, say) are dropped.
    pub fn with<R>(&self, f: impl FnOnce(&mut BrowserController) -> R) -> Option<R> {
        let (out, next) = {
            let Ok(mut ctrl) = self.inner.try_borrow_mut() else {
                tracing::debug!("inline editor busy; re-entrant event dropped");
                return None;
            };
            let out = f(&mut ctrl);
            let next = OverlayView::of(&ctrl);
            (out, next)
        };

        if self.view.try_get_untracked().is_some_and(|v| v != next) {
            let _ = self.view.try_set(next);
        }
        Some(out)
    }

    /// One-shot scan of the document for inline-editable elements.
    pub fn bind_triggers(&self, document: &web_sys::Document) -> Subscriptions {
        let mut subs = Subscriptions::new();
        let Ok(nodes) = document.query_selector_all(TRIGGER_SELECTOR) else {
            return subs;
        };

        for i in 0..nodes.length() {
            let Some(el) = nodes
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                continue;
            };
            let target = BrowserTarget(el.clone());
            let et: &web_sys::EventTarget = el.as_ref();

            let (overlay, t) = (self.clone(), target.clone());
            subs.push(listen(et, "mouseenter", move |_: web_sys::MouseEvent| {
                overlay.with(|c| c.trigger_enter(&t));
            }));

            let overlay = self.clone();
            subs.push(listen(et, "mouseleave", move |_: web_sys::MouseEvent| {
                overlay.with(|c| c.trigger_leave());
            }));

            let (overlay, t) = (self.clone(), target);
            subs.push(listen(et, "click", move |ev: web_sys::MouseEvent| {
                if ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                overlay.with(|c| c.trigger_click(&t));
            }));
        }

        tracing::debug!(triggers = nodes.length(), "inline editor triggers bound");
        subs
    }

    pub fn hover_enter(&self) {
        self.with(|c| c.hover_enter());
    }

    pub fn hover_leave(&self) {
        self.with(|c| c.hover_leave());
    }

    pub fn pointer_down(&self) {
        if self.with(|c| c.pointer_down()) != Some(true) {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        let overlay = self.clone();
        let cb = Closure::once_into_js(move || {
            overlay.with(|c| c.pointer_up());
        });
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_once(true);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "pointerup",
            cb.unchecked_ref(),
            &opts,
        ) {
            tracing::warn!(error = ?e, "failed to arm pointerup listener");
        }
    }

    pub fn pointer_move(&self, ev: &web_sys::PointerEvent) {
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        self.with(|c| c.pointer_move(x, y));
    }

    pub fn focus_in(&self) {
        self.with(|c| c.focus_in());
    }

    pub fn focus_out(&self, ev: &web_sys::FocusEvent) {
        let next = ev
            .related_target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        self.with(|c| {
            let inside = next.as_ref().is_some_and(|n| c.dom().overlay_contains(n));
            c.focus_out(inside);
        });
    }

    pub fn save(&self) {
        self.with(|c| c.save());
    }

    pub fn cancel(&self) {
        self.with(|c| c.cancel());
    }

    pub fn shutdown(&self) {
        self.with(|c| c.shutdown());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_delay_saturates() {
        assert_eq!(timer_delay(120), 120);
        assert_eq!(timer_delay(i32::MAX as u32), i32::MAX);
        assert_eq!(timer_delay(u32::MAX), i32::MAX);
    }
}
