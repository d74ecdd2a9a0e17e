//! Reflow scheduling
//!
//! Re-annotation is driven by two triggers: viewport resizes (debounced, a
//! newer resize supersedes the pending one) and the one-shot "fonts ready"
//! signal (run once after the current task). The [`Scheduler`] capability
//! hides the host's timer API; the browser uses `setTimeout`, tests use
//! [`ManualScheduler`].

pub mod manual;

pub use manual::ManualScheduler;

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Resize,
    FontsReady,
}

pub trait Scheduler {
    /// Handle for cancelling a scheduled trigger
    type Token;

    /// Deliver `trigger` back to the session after `delay`.
    fn schedule(&mut self, trigger: Trigger, delay: Duration) -> Self::Token;

    /// Cancel a trigger that has not fired yet. Cancelling one that already
    /// fired is a no-op.
    fn cancel(&mut self, token: Self::Token);

    /// Deliver `trigger` as soon as the current task has finished.
    fn schedule_after_current_task(&mut self, trigger: Trigger) -> Self::Token {
        self.schedule(trigger, Duration::ZERO)
    }
}
