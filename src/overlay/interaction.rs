use super::controller::InlineEditorController;
use super::dom::{EditorMount, OverlayDom, Sanitize};
use super::schedule::{Scheduler, TaskKind};

/// Signals that keep the overlay open. Any one set is a pin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionFlags {
    pub hovering: bool,
    pub pointer_down: bool,
    pub focused: bool,
    pub selection_active: bool,
    /// `0.0` until the first hover-enter of the session.
    pub last_hover_ms: f64,
}

impl InteractionFlags {
    pub fn pinned(&self) -> bool {
        self.hovering || self.pointer_down || self.focused || self.selection_active
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

impl<D, E, S, Z> InlineEditorController<D, E, S, Z>
where
    D: OverlayDom,
    E: EditorMount<Host = D::Host>,
    S: Scheduler,
    Z: Sanitize,
{
    /// Pointer entered the trigger or the overlay.
    pub fn hover_enter(&mut self) {
        if !self.state.is_open() {
            return;
        }
        self.flags.hovering = true;
        self.flags.last_hover_ms = self.scheduler.now_ms();
        self.cancel_hide();
    }

    pub fn hover_leave(&mut self) {
        if !self.state.is_open() {
            return;
        }
        // A drag-select may leave the overlay; the pointer-up decides.
        if self.flags.pointer_down || self.flags.selection_active {
            return;
        }
        self.flags.hovering = false;
        self.schedule_hide();
    }

    /// Pointer pressed inside the overlay.
    ///
    /// Returns `true` when the caller must arm a one-shot global pointer-up
    /// listener that calls [`Self::pointer_up`].
    pub fn pointer_down(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        self.flags.pointer_down = true;
        self.flags.hovering = true;
        // Provisional until pointer-up reads the real selection.
        self.flags.selection_active = true;
        self.cancel_hide();

        let arm = !self.pointer_up_armed;
        self.pointer_up_armed = true;
        arm
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.last_pointer = Some((x, y));
    }

    pub fn pointer_up(&mut self) {
        if !self.pointer_up_armed {
            return;
        }
        self.pointer_up_armed = false;
        if !self.state.is_open() {
            return;
        }

        self.flags.pointer_down = false;
        // Without a content node the provisional value stands.
        if let Some(active) = self.dom.content_selection_active() {
            self.flags.selection_active = active;
        }

        let inside = self
            .last_pointer
            .is_some_and(|(x, y)| self.dom.overlay_contains_point(x, y));
        self.flags.hovering = inside || self.released_within_grace();

        if !self.flags.selection_active {
            self.schedule_hide();
        }
    }

    pub fn focus_in(&mut self) {
        if !self.state.is_open() {
            return;
        }
        self.flags.focused = true;
        self.cancel_hide();
    }

    /// `next_inside` is whether the element receiving focus is still inside the overlay.
    pub fn focus_out(&mut self, next_inside: bool) {
        if !self.state.is_open() || next_inside {
            return;
        }
        self.flags.focused = false;
        self.flags.selection_active = false;
        self.schedule_hide();
    }

    /// Start the delayed close unless something pins the overlay.
    pub fn schedule_hide(&mut self) {
        if !self.state.is_open() || self.flags.pinned() {
            return;
        }
        self.cancel_hide();
        let delay = self.config.hide_delay_ms;
        let id = self.schedule(TaskKind::Hide, |s, t| s.after_delay(delay, t));
        self.hide_timer = Some(id);
    }

    pub(super) fn hide_fired(&mut self) {
        self.hide_timer = None;
        // Events may have landed during the delay.
        if self.flags.pinned() {
            return;
        }
        tracing::debug!(session = self.session, "inline editor hidden");
        self.teardown();
    }

    pub(super) fn cancel_hide(&mut self) {
        if let Some(id) = self.hide_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    pub(super) fn reset_interaction(&mut self) {
        self.flags = InteractionFlags::default();
        self.pointer_up_armed = false;
        self.last_pointer = None;
        self.cancel_hide();
    }

    fn released_within_grace(&self) -> bool {
        let last = self.flags.last_hover_ms;
        last > 0.0 && self.scheduler.now_ms() - last < f64::from(self.config.hover_grace_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::testing::{Harness, TestController};

    fn opened() -> Harness {
        let mut h = Harness::new();
        let a = h.target("<p>text</p>");
        h.ctrl.trigger_enter(&a);
        h.flush_microtasks();
        h
    }

    fn assert_closed_invariant(ctrl: &TestController) {
        if !ctrl.is_open() {
            assert!(ctrl.flags().is_clear(), "flags must reset on close");
            assert!(!ctrl.hide_pending(), "no hide timer while closed");
        }
    }

    #[test]
    fn test_schedule_hide_noop_while_pinned() {
        let mut h = opened();
        h.ctrl.focus_in();
        h.ctrl.hover_leave();
        assert!(!h.ctrl.hide_pending());
        h.advance(1000.0);
        assert!(h.ctrl.is_open());
    }

    #[test]
    fn test_single_hide_timer() {
        let mut h = opened();
        h.ctrl.hover_leave();
        h.ctrl.schedule_hide();
        h.ctrl.schedule_hide();
        assert_eq!(h.ctrl.scheduler().pending_delays(), 1);
    }

    #[test]
    fn test_hide_rechecks_pins_at_fire_time() {
        let mut h = opened();
        h.ctrl.hover_leave();
        assert!(h.ctrl.hide_pending());

        // A pin that landed without cancelling the timer.
        h.ctrl.flags.focused = true;
        h.advance(120.0);
        assert!(h.ctrl.is_open());
        assert!(!h.ctrl.hide_pending());

        h.ctrl.focus_out(false);
        h.advance(120.0);
        assert!(!h.ctrl.is_open());
    }

    #[test]
    fn test_focus_out_within_overlay_is_noop() {
        let mut h = opened();
        h.ctrl.focus_in();
        h.ctrl.hover_leave();
        h.ctrl.focus_out(true);
        h.advance(500.0);

        assert!(h.ctrl.is_open());
        assert!(h.ctrl.flags().focused);
    }

    #[test]
    fn test_focus_out_clears_selection() {
        let mut h = opened();
        h.ctrl.flags.selection_active = true;
        h.ctrl.focus_in();
        h.ctrl.flags.hovering = false;
        h.ctrl.focus_out(false);

        assert!(!h.ctrl.flags().selection_active);
        h.advance(120.0);
        assert!(!h.ctrl.is_open());
    }

    #[test]
    fn test_drag_out_keeps_open_until_release() {
        let mut h = opened();
        assert!(h.ctrl.pointer_down());
        h.ctrl.hover_leave();
        h.advance(500.0);
        assert!(h.ctrl.is_open());
        assert!(h.ctrl.flags().hovering);
    }

    #[test]
    fn test_pointer_down_arms_once() {
        let mut h = opened();
        assert!(h.ctrl.pointer_down());
        assert!(!h.ctrl.pointer_down());
        h.ctrl.pointer_up();
        assert!(h.ctrl.pointer_down());
    }

    #[test]
    fn test_release_outside_with_empty_selection_closes() {
        let mut h = opened();
        h.advance(1000.0);
        h.ctrl.pointer_down();
        h.ctrl.pointer_move(900.0, 900.0);
        h.dom.set_point_inside(false);
        h.ctrl.pointer_up();

        assert!(!h.ctrl.flags().hovering);
        assert!(h.ctrl.hide_pending());
        h.advance(120.0);
        assert!(!h.ctrl.is_open());
    }

    #[test]
    fn test_release_inside_keeps_hovering() {
        let mut h = opened();
        h.advance(1000.0);
        h.ctrl.pointer_down();
        h.ctrl.pointer_move(10.0, 10.0);
        h.dom.set_point_inside(true);
        h.ctrl.pointer_up();

        assert!(h.ctrl.flags().hovering);
        h.advance(1000.0);
        assert!(h.ctrl.is_open());
    }

    #[test]
    fn test_release_within_grace_counts_as_hover() {
        let mut h = opened();
        h.advance(1000.0);
        h.ctrl.hover_enter();
        h.ctrl.pointer_down();
        h.dom.set_point_inside(false);
        h.advance(249.0);
        h.ctrl.pointer_up();
        assert!(h.ctrl.flags().hovering);

        h.ctrl.hover_enter();
        h.ctrl.pointer_down();
        h.advance(250.0);
        h.ctrl.pointer_up();
        assert!(!h.ctrl.flags().hovering);
    }

    #[test]
    fn test_release_with_selection_stays_pinned() {
        let mut h = opened();
        h.advance(1000.0);
        h.ctrl.pointer_down();
        h.dom.set_selection_empty(false);
        h.dom.set_point_inside(false);
        h.ctrl.pointer_up();

        assert!(h.ctrl.flags().selection_active);
        assert!(!h.ctrl.hide_pending());
        h.advance(1000.0);
        assert!(h.ctrl.is_open());
    }

    #[test]
    fn test_release_without_content_keeps_selection_flag() {
        let mut h = opened();
        h.advance(1000.0);
        h.ctrl.pointer_down();
        h.dom.set_content(None);
        h.ctrl.pointer_up();

        assert!(h.ctrl.flags().selection_active);
        assert!(!h.ctrl.hide_pending());
    }

    #[test]
    fn test_release_with_selection_outside_content_unpins() {
        let mut h = opened();
        h.advance(1000.0);
        h.ctrl.pointer_down();
        // Content exists and holds no selection, whatever the rest of the page has.
        h.dom.set_selection_empty(true);
        h.ctrl.pointer_up();

        assert!(!h.ctrl.flags().selection_active);
        h.advance(120.0);
        assert!(!h.ctrl.is_open());
    }

    #[test]
    fn test_pointer_up_without_down_ignored() {
        let mut h = opened();
        h.ctrl.pointer_up();
        assert!(h.ctrl.flags().hovering);
        assert!(!h.ctrl.hide_pending());
    }

    #[test]
    fn test_events_while_closed_keep_flags_clear() {
        let mut h = Harness::new();
        h.ctrl.hover_enter();
        assert!(!h.ctrl.pointer_down());
        h.ctrl.focus_in();
        h.ctrl.schedule_hide();
        assert_closed_invariant(&h.ctrl);
    }

    #[derive(Clone, Copy, Debug)]
    enum Step {
        Enter,
        Leave,
        Down,
        UpInside,
        UpOutside,
        FocusIn,
        FocusOut,
        Wait,
    }

    const STEPS: [Step; 8] = [
        Step::Enter,
        Step::Leave,
        Step::Down,
        Step::UpInside,
        Step::UpOutside,
        Step::FocusIn,
        Step::FocusOut,
        Step::Wait,
    ];

    fn apply(h: &mut Harness, step: Step) {
        match step {
            Step::Enter => h.ctrl.hover_enter(),
            Step::Leave => h.ctrl.hover_leave(),
            Step::Down => {
                h.ctrl.pointer_down();
            }
            Step::UpInside => {
                h.dom.set_point_inside(true);
                h.ctrl.pointer_move(1.0, 1.0);
                h.ctrl.pointer_up();
            }
            Step::UpOutside => {
                h.dom.set_point_inside(false);
                h.ctrl.pointer_move(999.0, 999.0);
                h.ctrl.pointer_up();
            }
            Step::FocusIn => h.ctrl.focus_in(),
            Step::FocusOut => h.ctrl.focus_out(false),
            Step::Wait => {
                let was_open = h.ctrl.is_open();
                let was_pinned = h.ctrl.flags().pinned();
                h.advance(300.0);
                if was_open && was_pinned {
                    assert!(h.ctrl.is_open(), "closed while pinned");
                }
            }
        }
    }

    #[test]
    fn test_never_closes_while_pinned() {
        for a in STEPS {
            for b in STEPS {
                for c in STEPS {
                    for d in STEPS {
                        let mut h = opened();
                        for step in [a, b, c, d] {
                            apply(&mut h, step);
                            assert_closed_invariant(&h.ctrl);
                        }

                        h.advance(1000.0);
                        assert_eq!(
                            h.ctrl.is_open(),
                            h.ctrl.flags().pinned(),
                            "sequence {:?}",
                            [a, b, c, d]
                        );
                    }
                }
            }
        }
    }
}
