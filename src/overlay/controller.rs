use super::bindings::Disposer;
use super::config::OverlayConfig;
use super::dom::{
    Draft, EditableTarget, EditorChange, EditorConfig, EditorMount, OverlayDom, Sanitize,
};
use super::geometry::{overlay_position, Position};
use super::interaction::InteractionFlags;
use super::schedule::{Scheduler, Task, TaskId, TaskKind};
use std::rc::Rc;

/// Overlay lifecycle. `Closing` is never observable; teardown is synchronous.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    /// Waiting for the host node; `failed_checks` counts checks that found nothing.
    Opening { failed_checks: u32 },
    Mounted,
}

#[derive(Clone, Debug)]
pub struct OverlayState<T> {
    pub phase: Phase,
    pub target: Option<T>,
    pub draft: Draft,
    pub position: Position,
    pub focus_on_open: bool,
}

impl<T> OverlayState<T> {
    fn closed() -> Self {
        Self {
            phase: Phase::Closed,
            target: None,
            draft: Draft::default(),
            position: Position::default(),
            focus_on_open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }
}

/// Owns the floating inline editor: which element it edits, whether an editor
/// instance is attached, and when it should disappear.
///
/// Every browser event and every scheduled task is routed through `&mut self`,
/// so transitions are serialized by construction.
pub struct InlineEditorController<D, E, S, Z>
where
    D: OverlayDom,
    E: EditorMount<Host = D::Host>,
    S: Scheduler,
    Z: Sanitize,
{
    pub(super) config: OverlayConfig,
    pub(super) dom: D,
    pub(super) editor: E,
    pub(super) scheduler: S,
    pub(super) sanitizer: Z,

    pub(super) state: OverlayState<D::Target>,
    pub(super) flags: InteractionFlags,
    pub(super) hide_timer: Option<TaskId>,
    pub(super) instance: Option<Disposer>,

    /// Bumped on every open; tasks from older sessions are dropped.
    pub(super) session: u64,
    pub(super) pointer_up_armed: bool,
    pub(super) last_pointer: Option<(f64, f64)>,
}

impl<D, E, S, Z> InlineEditorController<D, E, S, Z>
where
    D: OverlayDom,
    E: EditorMount<Host = D::Host>,
    S: Scheduler,
    Z: Sanitize,
{
    pub fn new(config: OverlayConfig, dom: D, editor: E, scheduler: S, sanitizer: Z) -> Self {
        Self {
            config,
            dom,
            editor,
            scheduler,
            sanitizer,
            state: OverlayState::closed(),
            flags: InteractionFlags::default(),
            hide_timer: None,
            instance: None,
            session: 0,
            pointer_up_armed: false,
            last_pointer: None,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn state(&self) -> &OverlayState<D::Target> {
        &self.state
    }

    pub fn flags(&self) -> &InteractionFlags {
        &self.flags
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn draft(&self) -> String {
        self.state.draft.get()
    }

    pub fn has_editor(&self) -> bool {
        self.instance.is_some()
    }

    pub fn hide_pending(&self) -> bool {
        self.hide_timer.is_some()
    }

    /// Open the overlay for `target`, replacing whatever it currently edits.
    pub fn open(&mut self, target: D::Target, focus: bool) {
        if self.state.is_open() {
            // Never two editor instances at once.
            self.teardown();
        }

        self.session += 1;
        self.reset_interaction();

        let draft = self.sanitizer.sanitize(&target.inner_html());
        let position = overlay_position(&target.bounding_rect(), &self.dom.viewport(), &self.config);

        self.state = OverlayState {
            phase: Phase::Opening { failed_checks: 0 },
            target: Some(target),
            draft: Draft::new(draft),
            position,
            focus_on_open: focus,
        };

        tracing::debug!(
            session = self.session,
            focus,
            left = position.left,
            top = position.top,
            "inline editor opening"
        );

        self.schedule(TaskKind::MountCheck, |s, t| s.after_microtask(t));
    }

    /// Write the sanitized live content back to the target and close.
    pub fn save(&mut self) {
        if !self.state.is_open() {
            return;
        }

        let raw = self
            .dom
            .content_html()
            .unwrap_or_else(|| self.state.draft.get());
        let safe = self.sanitizer.sanitize(&raw);
        if let Some(target) = &self.state.target {
            target.set_inner_html(&safe);
        }

        tracing::debug!(session = self.session, "inline editor saved");
        self.teardown();
    }

    /// Close without writing anything back.
    pub fn cancel(&mut self) {
        if !self.state.is_open() {
            return;
        }
        tracing::debug!(session = self.session, "inline editor cancelled");
        self.teardown();
    }

    /// Component unmount: drop the timer and the editor instance.
    pub fn shutdown(&mut self) {
        self.teardown();
    }

    /// Entry point for every task handed to the scheduler.
    pub fn run_task(&mut self, task: Task) {
        if task.session != self.session || !self.state.is_open() {
            tracing::trace!(?task, session = self.session, "stale overlay task dropped");
            return;
        }

        match task.kind {
            TaskKind::MountCheck => self.check_mount(),
            TaskKind::FillContent => self.fill_content(),
            TaskKind::FocusContent => self.focus_content(),
            TaskKind::SelectAll => self.dom.select_all_content(),
            TaskKind::Hide => self.hide_fired(),
        }
    }

    /// Ask for focus on an overlay that is already open for the same target.
    pub(super) fn request_focus(&mut self) {
        self.state.focus_on_open = true;
        if self.state.phase == Phase::Mounted {
            self.schedule(TaskKind::FocusContent, |s, t| s.after_microtask(t));
        }
        // While still opening, the pending mount picks the flag up.
    }

    fn check_mount(&mut self) {
        let Phase::Opening { failed_checks } = self.state.phase else {
            return;
        };

        match self.dom.overlay_host() {
            Some(host) => self.attach(&host),
            None => {
                let failed_checks = failed_checks + 1;
                self.state.phase = Phase::Opening { failed_checks };
                if failed_checks < self.config.max_mount_attempts {
                    self.schedule(TaskKind::MountCheck, |s, t| s.after_frame(t));
                } else {
                    // Stays open but uneditable until closed or reopened.
                    tracing::warn!(
                        session = self.session,
                        attempts = failed_checks,
                        "inline editor host never appeared; mount abandoned"
                    );
                }
            }
        }
    }

    fn attach(&mut self, host: &D::Host) {
        if let Some(previous) = self.instance.take() {
            previous.dispose();
        }

        let draft = self.state.draft.clone();
        let config = EditorConfig {
            label: None,
            helper: None,
            placeholder: self.config.placeholder.clone(),
            character_limit: self.config.character_limit,
            toolbar_items: self.config.toolbar_items.clone(),
            show_grid: false,
            show_status: false,
            on_change: Rc::new(move |change: EditorChange| draft.set(change.html)),
        };

        self.instance = Some(self.editor.mount(host, config));
        self.state.phase = Phase::Mounted;
        tracing::debug!(session = self.session, "inline editor mounted");

        // The editor renders its own placeholder on attach; write the draft over it.
        self.schedule(TaskKind::FillContent, |s, t| s.after_microtask(t));
    }

    fn fill_content(&mut self) {
        if !self.dom.set_content_html(&self.state.draft.get()) {
            return;
        }
        if self.state.focus_on_open {
            self.focus_content();
        }
    }

    fn focus_content(&mut self) {
        // The focusin this raises reaches a controller that is still borrowed.
        if self.dom.focus_content() {
            self.flags.focused = true;
            self.cancel_hide();
        }
        self.schedule(TaskKind::SelectAll, |s, t| s.after_frame(t));
    }

    pub(super) fn schedule(
        &mut self,
        kind: TaskKind,
        submit: impl FnOnce(&mut S, Task) -> TaskId,
    ) -> TaskId {
        let task = Task {
            session: self.session,
            kind,
        };
        submit(&mut self.scheduler, task)
    }

    /// Close without saving; also the delayed-hide path.
    pub(super) fn teardown(&mut self) {
        if let Some(instance) = self.instance.take() {
            instance.dispose();
        }
        self.state = OverlayState::closed();
        self.reset_interaction();
    }
}

impl<D, E, S, Z> Drop for InlineEditorController<D, E, S, Z>
where
    D: OverlayDom,
    E: EditorMount<Host = D::Host>,
    S: Scheduler,
    Z: Sanitize,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
