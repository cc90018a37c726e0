//! Single-shot timers for the playback scheduler.
//!
//! The scheduler never sleeps or spawns threads. It asks a [`Timer`] to arm
//! a deadline and gets back a [`TimerHandle`]; whoever owns the event loop
//! later pops due handles and feeds them to
//! [`PlaybackScheduler::on_elapsed`](crate::player::scheduler::PlaybackScheduler::on_elapsed).
//!
//! Two implementations:
//! - [`DeadlineTimer`]: wall-clock deadlines for the interactive player loop
//! - [`ManualClock`]: virtual time that only moves when told to, for tests
//!   and the `simulate` command

use std::time::{Duration, Instant};

/// Identifies one armed timer. Handles are never reused by a timer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// "Call me back after N milliseconds", cancelable.
///
/// Contract:
/// - `arm` never fires synchronously; the handle becomes due once `delay`
///   has elapsed and is delivered by the event loop.
/// - After `cancel(handle)` the handle is never delivered.
/// - Cancelling an unknown or already delivered handle is a no-op.
pub trait Timer {
    fn arm(&mut self, delay: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// Pending deadlines, shared by both timer implementations.
///
/// `D` is the deadline type (`Instant` or virtual `Duration`).
#[derive(Debug)]
struct Deadlines<D> {
    next_id: u64,
    pending: Vec<(TimerHandle, D)>,
}

impl<D: Copy + Ord> Deadlines<D> {
    fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    fn insert(&mut self, deadline: D) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push((handle, deadline));
        handle
    }

    fn remove(&mut self, handle: TimerHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }

    /// Earliest deadline; ties go to the handle armed first.
    fn earliest(&self) -> Option<(TimerHandle, D)> {
        self.pending
            .iter()
            .copied()
            .min_by_key(|&(handle, deadline)| (deadline, handle))
    }

    fn pop_due(&mut self, now: D) -> Option<(TimerHandle, D)> {
        let (handle, deadline) = self.earliest()?;
        if deadline > now {
            return None;
        }
        self.remove(handle);
        Some((handle, deadline))
    }
}

/// Wall-clock timer driven by the interactive player's event loop.
#[derive(Debug)]
pub struct DeadlineTimer {
    deadlines: Deadlines<Instant>,
}

impl DeadlineTimer {
    pub fn new() -> Self {
        Self {
            deadlines: Deadlines::new(),
        }
    }

    /// How long the event loop may block before the next timer is due.
    ///
    /// `None` when nothing is armed. Zero when a deadline has already passed.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.deadlines
            .earliest()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Remove and return the earliest timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerHandle> {
        self.deadlines.pop_due(now).map(|(handle, _)| handle)
    }

    pub fn pending_count(&self) -> usize {
        self.deadlines.pending.len()
    }
}

impl Default for DeadlineTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for DeadlineTimer {
    fn arm(&mut self, delay: Duration) -> TimerHandle {
        self.deadlines.insert(Instant::now() + delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.deadlines.remove(handle);
    }
}

/// Virtual clock for deterministic playback.
///
/// Time starts at zero and only advances through [`ManualClock::pop_due`]
/// and [`ManualClock::advance_to`].
#[derive(Debug)]
pub struct ManualClock {
    now: Duration,
    deadlines: Deadlines<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            deadlines: Deadlines::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadline of the next timer to fire, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.deadlines.earliest().map(|(_, deadline)| deadline)
    }

    /// Pop the next timer due at or before `until`, moving the clock to its
    /// deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerHandle> {
        let (handle, deadline) = self.deadlines.pop_due(until)?;
        self.now = self.now.max(deadline);
        Some(handle)
    }

    /// Move the clock forward without firing anything. Never moves backwards.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    pub fn pending_count(&self) -> usize {
        self.deadlines.pending.len()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for ManualClock {
    fn arm(&mut self, delay: Duration) -> TimerHandle {
        self.deadlines.insert(self.now + delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.deadlines.remove(handle);
    }
}
