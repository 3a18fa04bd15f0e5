//! Start control for a background task.
//!
//! A trigger is disabled while its task is in flight and shows a "busy"
//! caption; it is re-enabled with its idle caption when the task reaches a
//! terminal state. A disabled trigger is what keeps a second task from
//! starting. There is no queue or lock behind it.

/// Enabled/disabled state and caption of a trigger button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerControl {
    enabled: bool,
    idle_label: &'static str,
    busy_label: &'static str,
}

impl TriggerControl {
    /// Speed test trigger.
    pub const SPEED_TEST: Self = Self::new("Run Speed Test", "Running...");

    /// Weather lookup trigger.
    pub const WEATHER: Self = Self::new("Get Weather", "Fetching...");

    /// Create an enabled trigger.
    pub const fn new(idle_label: &'static str, busy_label: &'static str) -> Self {
        Self {
            enabled: true,
            idle_label,
            busy_label,
        }
    }

    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Caption for the current state.
    #[inline]
    pub const fn label(&self) -> &'static str {
        if self.enabled { self.idle_label } else { self.busy_label }
    }

    /// Mark the task as in flight.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Mark the task as finished and restore the idle caption.
    pub fn enable(&mut self) {
        self.enabled = true;
    }
}
