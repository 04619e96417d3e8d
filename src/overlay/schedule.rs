#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// When a scheduled task should run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wake {
    /// After the current event handler returns.
    Microtask,
    /// Before the next paint.
    Frame,
    /// After a timer of this many milliseconds.
    Delay(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    MountCheck,
    FillContent,
    FocusContent,
    SelectAll,
    Hide,
}

/// A deferred controller step, tagged with the open-session that scheduled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Task {
    pub session: u64,
    pub kind: TaskKind,
}

/// Cooperative suspension points used by the overlay controller.
///
/// Implementations deliver each task back through
/// `InlineEditorController::run_task` once its wake condition is met, unless it
/// was cancelled first.
pub trait Scheduler {
    fn schedule(&mut self, wake: Wake, task: Task) -> TaskId;

    /// Cancelling an id that already ran (or never existed) is a no-op.
    fn cancel(&mut self, id: TaskId);

    fn now_ms(&self) -> f64;

    fn after_microtask(&mut self, task: Task) -> TaskId {
        self.schedule(Wake::Microtask, task)
    }

    fn after_frame(&mut self, task: Task) -> TaskId {
        self.schedule(Wake::Frame, task)
    }

    fn after_delay(&mut self, ms: u32, task: Task) -> TaskId {
        self.schedule(Wake::Delay(ms), task)
    }
}
