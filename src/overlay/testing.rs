//! Native fakes for driving the overlay controller without a browser.

use super::bindings::Disposer;
use super::config::OverlayConfig;
use super::controller::InlineEditorController;
use super::dom::{EditableTarget, EditorChange, EditorConfig, EditorMount, OverlayDom, Sanitize};
use super::geometry::{Rect, Viewport};
use super::schedule::{Scheduler, Task, TaskId, Wake};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub(crate) type TestController =
    InlineEditorController<FakeDom, FakeEditor, ManualScheduler, MarkingSanitizer>;

#[derive(Debug)]
struct TargetInner {
    html: RefCell<String>,
    rect: Rect,
}

#[derive(Clone, Debug)]
pub(crate) struct FakeTarget(Rc<TargetInner>);

impl FakeTarget {
    pub fn new(html: &str, rect: Rect) -> Self {
        Self(Rc::new(TargetInner {
            html: RefCell::new(html.to_string()),
            rect,
        }))
    }

    pub fn html(&self) -> String {
        self.0.html.borrow().clone()
    }
}

impl EditableTarget for FakeTarget {
    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn inner_html(&self) -> String {
        self.html()
    }

    fn set_inner_html(&self, html: &str) {
        *self.0.html.borrow_mut() = html.to_string();
    }

    fn bounding_rect(&self) -> Rect {
        self.0.rect
    }
}

struct DomInner {
    viewport: Viewport,
    host_present: Cell<bool>,
    host_checks: Cell<u32>,
    content: RefCell<Option<String>>,
    focus_calls: Cell<u32>,
    select_all_calls: Cell<u32>,
    selection_empty: Cell<bool>,
    point_inside: Cell<bool>,
    focus_lands: Cell<bool>,
    on_focus: RefCell<Option<Rc<dyn Fn()>>>,
}

#[derive(Clone)]
pub(crate) struct FakeDom(Rc<DomInner>);

impl FakeDom {
    pub fn new(viewport: Viewport) -> Self {
        Self(Rc::new(DomInner {
            viewport,
            host_present: Cell::new(true),
            host_checks: Cell::new(0),
            content: RefCell::new(None),
            focus_calls: Cell::new(0),
            select_all_calls: Cell::new(0),
            selection_empty: Cell::new(true),
            point_inside: Cell::new(false),
            focus_lands: Cell::new(true),
            on_focus: RefCell::new(None),
        }))
    }

    pub fn set_host_present(&self, present: bool) {
        self.0.host_present.set(present);
    }

    pub fn host_checks(&self) -> u32 {
        self.0.host_checks.get()
    }

    pub fn content(&self) -> Option<String> {
        self.0.content.borrow().clone()
    }

    pub fn set_content(&self, html: Option<&str>) {
        *self.0.content.borrow_mut() = html.map(str::to_string);
    }

    pub fn focus_calls(&self) -> u32 {
        self.0.focus_calls.get()
    }

    pub fn select_all_calls(&self) -> u32 {
        self.0.select_all_calls.get()
    }

    pub fn set_selection_empty(&self, empty: bool) {
        self.0.selection_empty.set(empty);
    }

    pub fn set_point_inside(&self, inside: bool) {
        self.0.point_inside.set(inside);
    }

    pub fn set_focus_lands(&self, lands: bool) {
        self.0.focus_lands.set(lands);
    }

    /// Stands in for the `focusin` the browser dispatches synchronously from `focus()`.
    pub fn on_focus(&self, hook: impl Fn() + 'static) {
        *self.0.on_focus.borrow_mut() = Some(Rc::new(hook));
    }
}

impl OverlayDom for FakeDom {
    type Target = FakeTarget;
    type Host = ();

    fn viewport(&self) -> Viewport {
        self.0.viewport
    }

    fn overlay_host(&self) -> Option<()> {
        self.0.host_checks.set(self.0.host_checks.get() + 1);
        self.0.host_present.get().then_some(())
    }

    fn content_html(&self) -> Option<String> {
        self.content()
    }

    fn set_content_html(&self, html: &str) -> bool {
        let mut content = self.0.content.borrow_mut();
        match content.as_mut() {
            Some(c) => {
                *c = html.to_string();
                true
            }
            None => false,
        }
    }

    fn focus_content(&self) -> bool {
        self.0.focus_calls.set(self.0.focus_calls.get() + 1);
        let hook = self.0.on_focus.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
        self.0.content.borrow().is_some() && self.0.focus_lands.get()
    }

    fn select_all_content(&self) {
        self.0.select_all_calls.set(self.0.select_all_calls.get() + 1);
    }

    fn content_selection_active(&self) -> Option<bool> {
        self.0
            .content
            .borrow()
            .as_ref()
            .map(|_| !self.0.selection_empty.get())
    }

    fn overlay_contains_point(&self, _x: f64, _y: f64) -> bool {
        self.0.point_inside.get()
    }
}

#[derive(Default)]
struct EditorLog {
    mounts: Cell<u32>,
    disposals: Cell<u32>,
    live: Cell<i32>,
    max_live: Cell<i32>,
    events: RefCell<Vec<&'static str>>,
    last_config: RefCell<Option<EditorConfig>>,
}

/// Records mounts and disposals; a mounted instance owns the fake content node.
#[derive(Clone)]
pub(crate) struct FakeEditor {
    dom: FakeDom,
    log: Rc<EditorLog>,
}

impl FakeEditor {
    pub fn new(dom: FakeDom) -> Self {
        Self {
            dom,
            log: Rc::new(EditorLog::default()),
        }
    }

    pub fn mounts(&self) -> u32 {
        self.log.mounts.get()
    }

    pub fn disposals(&self) -> u32 {
        self.log.disposals.get()
    }

    pub fn live(&self) -> i32 {
        self.log.live.get()
    }

    pub fn max_live(&self) -> i32 {
        self.log.max_live.get()
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.log.events.borrow().clone()
    }

    pub fn last_character_limit(&self) -> Option<u32> {
        self.log
            .last_config
            .borrow()
            .as_ref()
            .map(|c| c.character_limit)
    }

    pub fn emit_change(&self, html: &str) {
        let on_change = self
            .log
            .last_config
            .borrow()
            .as_ref()
            .map(|c| c.on_change.clone());
        if let Some(on_change) = on_change {
            on_change(EditorChange {
                html: html.to_string(),
                ..Default::default()
            });
        }
    }
}

impl EditorMount for FakeEditor {
    type Host = ();

    fn mount(&mut self, _host: &(), config: EditorConfig) -> Disposer {
        let log = self.log.clone();
        log.mounts.set(log.mounts.get() + 1);
        log.live.set(log.live.get() + 1);
        log.max_live.set(log.max_live.get().max(log.live.get()));
        log.events.borrow_mut().push("mount");
        *log.last_config.borrow_mut() = Some(config);

        self.dom.set_content(Some("<p>placeholder</p>"));

        let dom = self.dom.clone();
        Disposer::new(move || {
            log.disposals.set(log.disposals.get() + 1);
            log.live.set(log.live.get() - 1);
            log.events.borrow_mut().push("dispose");
            dom.set_content(None);
        })
    }
}

/// Drops `<script>` blocks and tags the output so tests can tell it was sanitized.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MarkingSanitizer;

const SAFE_MARK: &str = "<!--safe-->";

impl Sanitize for MarkingSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        let mut out = String::new();
        let mut rest = raw.strip_prefix(SAFE_MARK).unwrap_or(raw);
        while let Some(start) = rest.find("<script") {
            out.push_str(&rest[..start]);
            rest = match rest[start..].find("</script>") {
                Some(end) => &rest[start + end + "</script>".len()..],
                None => "",
            };
        }
        out.push_str(rest);
        format!("{SAFE_MARK}{out}")
    }
}

struct Queued {
    id: TaskId,
    wake: Wake,
    due: f64,
    task: Task,
}

/// Scheduler with a fake clock; tasks run only when a test drives them.
pub(crate) struct ManualScheduler {
    now: f64,
    next_id: u64,
    queue: Vec<Queued>,
}

impl ManualScheduler {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: start_ms,
            next_id: 0,
            queue: Vec::new(),
        }
    }

    pub fn advance_clock(&mut self, ms: f64) {
        self.now += ms;
    }

    pub fn pop_microtask(&mut self) -> Option<Task> {
        let idx = self.queue.iter().position(|q| q.wake == Wake::Microtask)?;
        Some(self.queue.remove(idx).task)
    }

    pub fn take_frames(&mut self) -> Vec<Task> {
        let (frames, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.queue)
            .into_iter()
            .partition(|q| q.wake == Wake::Frame);
        self.queue = rest;
        frames.into_iter().map(|q| q.task).collect()
    }

    pub fn pop_due_delay(&mut self) -> Option<Task> {
        let now = self.now;
        let idx = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, q)| matches!(q.wake, Wake::Delay(_)) && q.due <= now)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due))
            .map(|(i, _)| i)?;
        Some(self.queue.remove(idx).task)
    }

    pub fn pending_delays(&self) -> usize {
        self.queue
            .iter()
            .filter(|q| matches!(q.wake, Wake::Delay(_)))
            .count()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, wake: Wake, task: Task) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        let due = match wake {
            Wake::Delay(ms) => self.now + f64::from(ms),
            Wake::Microtask | Wake::Frame => self.now,
        };
        self.queue.push(Queued {
            id,
            wake,
            due,
            task,
        });
        id
    }

    fn cancel(&mut self, id: TaskId) {
        self.queue.retain(|q| q.id != id);
    }

    fn now_ms(&self) -> f64 {
        self.now
    }
}

pub(crate) struct Harness {
    pub ctrl: TestController,
    pub dom: FakeDom,
    pub editor: FakeEditor,
    pub sanitizer: MarkingSanitizer,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(OverlayConfig::default())
    }

    pub fn with_config(config: OverlayConfig) -> Self {
        let dom = FakeDom::new(Viewport {
            width: 1280.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        });
        let editor = FakeEditor::new(dom.clone());
        let ctrl = InlineEditorController::new(
            config,
            dom.clone(),
            editor.clone(),
            ManualScheduler::new(1_000.0),
            MarkingSanitizer,
        );
        Self {
            ctrl,
            dom,
            editor,
            sanitizer: MarkingSanitizer,
        }
    }

    pub fn target(&self, html: &str) -> FakeTarget {
        FakeTarget::new(
            html,
            Rect {
                left: 100.0,
                top: 40.0,
                right: 400.0,
                bottom: 60.0,
            },
        )
    }

    pub fn run_one_microtask(&mut self) -> bool {
        match self.ctrl.scheduler_mut().pop_microtask() {
            Some(task) => {
                self.ctrl.run_task(task);
                true
            }
            None => false,
        }
    }

    pub fn flush_microtasks(&mut self) {
        while self.run_one_microtask() {}
    }

    /// Run the frame callbacks queued so far, then the microtasks they spawn.
    pub fn next_frame(&mut self) {
        self.flush_microtasks();
        for task in self.ctrl.scheduler_mut().take_frames() {
            self.ctrl.run_task(task);
        }
        self.flush_microtasks();
    }

    pub fn advance(&mut self, ms: f64) {
        self.flush_microtasks();
        self.ctrl.scheduler_mut().advance_clock(ms);
        while let Some(task) = self.ctrl.scheduler_mut().pop_due_delay() {
            self.ctrl.run_task(task);
            self.flush_microtasks();
        }
    }
}
