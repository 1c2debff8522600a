//! Periodic timers for the single-threaded event loop.
//!
//! Nothing here runs on its own. The owner asks for the [next deadline](Scheduler::next_deadline),
//! sleeps (or waits for input) until then, and [polls](Scheduler::poll) for what fired.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::ButtonId;

/// What a timer is for
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum TimerTarget {
    /// Flip a blinking button
    Blink(ButtonId),
    /// Resend the full LED state
    Render,
}

/// Identifies one started timer. Handles are never reused, so a handle of a cancelled timer
/// can't accidentally refer to a newer one.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Timer {
    target: TimerTarget,
    period: Duration,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_handle: u64,
    timers: BTreeMap<TimerHandle, Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a periodic timer. The first firing is one `period` after `now`.
    ///
    /// # Panics
    ///
    /// If `period` is zero
    pub fn start(&mut self, target: TimerTarget, period: Duration, now: Instant) -> TimerHandle {
        assert!(!period.is_zero(), "timer period must not be zero");

        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.insert(
            handle,
            Timer {
                target,
                period,
                deadline: now + period,
            },
        );
        log::trace!("Started timer {:?} for {:?} every {:?}", handle, target, period);
        handle
    }

    /// Stop a timer. It won't show up in any later [`Scheduler::poll`]. Cancelling twice is a
    /// no-op.
    pub fn cancel(&mut self, handle: TimerHandle) {
        if let Some(timer) = self.timers.remove(&handle) {
            log::trace!("Cancelled timer {:?} for {:?}", handle, timer.target);
        }
    }

    /// Change the period of a running timer. The already scheduled firing stays where it is.
    pub fn set_period(&mut self, handle: TimerHandle, period: Duration) {
        assert!(!period.is_zero(), "timer period must not be zero");

        if let Some(timer) = self.timers.get_mut(&handle) {
            timer.period = period;
        }
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// The earliest pending deadline, if any timer is running
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|timer| timer.deadline).min()
    }

    /// Collect every timer whose deadline is at or before `now`, ordered by deadline.
    ///
    /// Each timer fires at most once per poll. If a timer fell behind by several periods, the
    /// missed firings are skipped and its next deadline is the first one after `now`, so it
    /// stays in phase.
    pub fn poll(&mut self, now: Instant) -> Vec<(TimerHandle, TimerTarget)> {
        let mut due: Vec<(Instant, TimerHandle, TimerTarget)> = Vec::new();

        for (&handle, timer) in self.timers.iter_mut() {
            if timer.deadline > now {
                continue;
            }
            due.push((timer.deadline, handle, timer.target));

            let behind = now.duration_since(timer.deadline).as_nanos();
            let periods = behind / timer.period.as_nanos() + 1;
            timer.deadline += Duration::from_nanos((periods * timer.period.as_nanos()) as u64);
        }

        due.sort_by_key(|&(deadline, handle, _)| (deadline, handle));
        due.into_iter()
            .map(|(_, handle, target)| (handle, target))
            .collect()
    }

    /// Number of running timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_periodically() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        let handle = scheduler.start(TimerTarget::Render, 10 * MS, t0);

        assert_eq!(scheduler.next_deadline(), Some(t0 + 10 * MS));
        assert!(scheduler.poll(t0 + 9 * MS).is_empty());
        assert_eq!(
            scheduler.poll(t0 + 10 * MS),
            vec![(handle, TimerTarget::Render)]
        );
        assert_eq!(scheduler.next_deadline(), Some(t0 + 20 * MS));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        let handle = scheduler.start(TimerTarget::Render, 10 * MS, t0);
        scheduler.cancel(handle);
        scheduler.cancel(handle);

        assert!(!scheduler.is_active(handle));
        assert!(scheduler.poll(t0 + 100 * MS).is_empty());
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn missed_periods_are_skipped_in_phase() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        scheduler.start(TimerTarget::Render, 10 * MS, t0);

        assert_eq!(scheduler.poll(t0 + 35 * MS).len(), 1);
        assert_eq!(scheduler.next_deadline(), Some(t0 + 40 * MS));
    }

    #[test]
    fn set_period_keeps_pending_deadline() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        let handle = scheduler.start(TimerTarget::Render, 10 * MS, t0);
        scheduler.set_period(handle, 50 * MS);

        assert_eq!(scheduler.next_deadline(), Some(t0 + 10 * MS));
        scheduler.poll(t0 + 10 * MS);
        assert_eq!(scheduler.next_deadline(), Some(t0 + 60 * MS));
    }

    #[test]
    fn firings_are_ordered_by_deadline() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        let id = ButtonId::new(3).unwrap();
        let slow = scheduler.start(TimerTarget::Render, 20 * MS, t0);
        let fast = scheduler.start(TimerTarget::Blink(id), 5 * MS, t0);

        let fired = scheduler.poll(t0 + 20 * MS);
        assert_eq!(
            fired,
            vec![(fast, TimerTarget::Blink(id)), (slow, TimerTarget::Render)]
        );
    }
}
