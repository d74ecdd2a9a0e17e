//! Virtual-clock scheduler
//!
//! Nothing fires on its own; `advance` moves the clock and hands back the
//! triggers that came due, in due order.

use super::{Scheduler, Trigger};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    token: u64,
    trigger: Trigger,
    due: Duration,
}

#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_token: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Triggers scheduled and not yet fired or cancelled
    pub fn pending(&self) -> Vec<Trigger> {
        self.pending.iter().map(|p| p.trigger).collect()
    }

    /// Move the clock forward and return every trigger now due.
    pub fn advance(&mut self, by: Duration) -> Vec<Trigger> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<Pending> = self.pending.iter().copied().filter(|p| p.due <= now).collect();
        self.pending.retain(|p| p.due > now);
        due.sort_by_key(|p| (p.due, p.token));
        due.into_iter().map(|p| p.trigger).collect()
    }
}

impl Scheduler for ManualScheduler {
    type Token = u64;

    fn schedule(&mut self, trigger: Trigger, delay: Duration) -> u64 {
        self.next_token += 1;
        self.pending.push(Pending {
            token: self.next_token,
            trigger,
            due: self.now + delay,
        });
        self.next_token
    }

    fn cancel(&mut self, token: u64) {
        self.pending.retain(|p| p.token != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_when_due() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Trigger::Resize, ms(150));
        assert!(scheduler.advance(ms(149)).is_empty());
        assert_eq!(scheduler.advance(ms(1)), vec![Trigger::Resize]);
        assert!(scheduler.pending().is_empty());
    }

    #[test]
    fn test_cancelled_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let token = scheduler.schedule(Trigger::Resize, ms(10));
        scheduler.cancel(token);
        assert!(scheduler.advance(ms(100)).is_empty());
    }

    #[test]
    fn test_due_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Trigger::Resize, ms(50));
        scheduler.schedule_after_current_task(Trigger::FontsReady);
        assert_eq!(scheduler.advance(ms(60)), vec![Trigger::FontsReady, Trigger::Resize]);
    }
}
