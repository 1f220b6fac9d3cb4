//! Leading-edge throttling for bursts of events.
//!
//! Scrolling produces a stream of notifications. Only the first one of a burst
//! is let through; everything that follows within the window is dropped, not
//! queued, and there is no trailing call once the burst ends. The gate is
//! evaluated lazily from timestamps, so no timer has to run in the background.

use log::trace;
use std::time::{Duration, Instant};

/// A reusable leading-edge gate.
///
/// # Examples
///
/// ```
/// use scrollquill::history::Debouncer;
/// use std::time::{Duration, Instant};
///
/// let mut gate = Debouncer::new(Duration::from_millis(1000));
/// let start = Instant::now();
///
/// assert_eq!(gate.trigger_at(start, || 1), Some(1));
/// assert_eq!(gate.trigger_at(start + Duration::from_millis(400), || 2), None);
/// assert_eq!(gate.trigger_at(start + Duration::from_millis(1000), || 3), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_fired_at: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired_at: None,
        }
    }

    pub fn from_millis(window_ms: u64) -> Self {
        Self::new(Duration::from_millis(window_ms))
    }

    /// Wraps `action` so that calling the result is throttled by `window`.
    pub fn wrap<F: FnMut()>(action: F, window: Duration) -> Debounced<F> {
        Debounced {
            action,
            gate: Self::new(window),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns true if a trigger at `now` would run its action.
    pub fn is_ready_at(&self, now: Instant) -> bool {
        match self.last_fired_at {
            None => true,
            Some(fired) => now.saturating_duration_since(fired) >= self.window,
        }
    }

    /// Runs `action` if the window since the last run has elapsed at `now`.
    ///
    /// Returns the action's result, or `None` when the call was dropped.
    pub fn trigger_at<R, F: FnOnce() -> R>(&mut self, now: Instant, action: F) -> Option<R> {
        if !self.is_ready_at(now) {
            trace!("debounce: dropped event inside {:?} window", self.window);
            return None;
        }
        self.last_fired_at = Some(now);
        Some(action())
    }

    /// Same as [`trigger_at`](Self::trigger_at) using the current time.
    pub fn trigger<R, F: FnOnce() -> R>(&mut self, action: F) -> Option<R> {
        self.trigger_at(Instant::now(), action)
    }
}

/// A zero-argument action behind a [`Debouncer`].
#[derive(Debug, Clone)]
pub struct Debounced<F> {
    action: F,
    gate: Debouncer,
}

impl<F: FnMut()> Debounced<F> {
    /// Invokes the action unless it ran less than a window ago.
    ///
    /// Returns true if the action ran.
    pub fn call(&mut self) -> bool {
        self.call_at(Instant::now())
    }

    pub fn call_at(&mut self, now: Instant) -> bool {
        let action = &mut self.action;
        self.gate.trigger_at(now, action).is_some()
    }
}
