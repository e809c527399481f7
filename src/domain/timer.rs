// SPDX-License-Identifier: MPL-2.0
//! Per-toast countdown state machine.
//!
//! A [`ToastTimer`] owns the lifetime of exactly one toast on screen:
//!
//! ```text
//! Entering -> Running <-> Paused
//!     \          |
//!      \         v
//!       `----> Exiting -> (removal request)
//! ```
//!
//! The timer is driven entirely by explicit [`Instant`]-carrying calls and
//! never reads the wall clock itself, so every transition is deterministic
//! under test. It knows nothing about other toasts; the registry owns the
//! collection, the timer owns one countdown.

use crate::config::defaults::{ENTER_DELAY, EXIT_DELAY};
use crate::domain::toast::{Toast, ToastId};
use std::time::{Duration, Instant};

/// Lifecycle phase of a rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Brief fixed-length entry transition; no user input possible.
    Entering,
    /// Countdown active; `remaining` decreases in real time.
    Running,
    /// Countdown suspended while the pointer hovers the toast.
    Paused,
    /// Fixed-length exit transition before the removal request fires.
    Exiting,
}

/// Countdown/pause/exit state machine for a single toast.
///
/// Created when its toast is first rendered and destroyed when the toast
/// leaves the registry; it must never outlive the toast.
#[derive(Debug, Clone)]
pub struct ToastTimer {
    toast_id: ToastId,
    revision: u64,
    duration: Duration,
    remaining: Duration,
    phase: Phase,
    phase_since: Instant,
    deadline: Option<Instant>,
    removal_requested: bool,
}

impl ToastTimer {
    /// Creates a timer in the entering phase for `toast`.
    #[must_use]
    pub fn new(toast: &Toast, now: Instant) -> Self {
        Self {
            toast_id: toast.id(),
            revision: toast.revision(),
            duration: toast.duration(),
            remaining: toast.duration(),
            phase: Phase::Entering,
            phase_since: now,
            deadline: None,
            removal_requested: false,
        }
    }

    /// Advances the state machine to `now`.
    ///
    /// Returns the toast's id exactly once, when the exit transition has
    /// completed and the toast should be removed from the registry. All
    /// later ticks return `None`.
    pub fn tick(&mut self, now: Instant) -> Option<ToastId> {
        match self.phase {
            Phase::Entering => {
                if now.saturating_duration_since(self.phase_since) >= ENTER_DELAY {
                    self.start_running(now);
                }
                None
            }
            Phase::Running => {
                if let Some(deadline) = self.deadline {
                    self.remaining = deadline.saturating_duration_since(now);
                    if self.remaining.is_zero() {
                        self.begin_exit(now);
                    }
                }
                None
            }
            Phase::Paused => None,
            Phase::Exiting => {
                if !self.removal_requested
                    && now.saturating_duration_since(self.phase_since) >= EXIT_DELAY
                {
                    self.removal_requested = true;
                    return Some(self.toast_id);
                }
                None
            }
        }
    }

    /// Pointer entered the toast: suspend the countdown.
    ///
    /// Only meaningful while running; the entering and exiting transitions
    /// are not pausable.
    pub fn pointer_entered(&mut self, now: Instant) {
        if self.phase == Phase::Running {
            if let Some(deadline) = self.deadline.take() {
                self.remaining = deadline.saturating_duration_since(now);
            }
            self.phase = Phase::Paused;
            self.phase_since = now;
        }
    }

    /// Pointer left the toast: resume from the frozen remaining time.
    ///
    /// The countdown picks up exactly where it paused; elapsed time is
    /// never discarded.
    pub fn pointer_left(&mut self, now: Instant) {
        if self.phase == Phase::Paused {
            self.start_running(now);
        }
    }

    /// Explicit close signal (user dismissal).
    ///
    /// Idempotent: a second close while already exiting is ignored and does
    /// not re-arm the removal delay.
    pub fn request_close(&mut self, now: Instant) {
        if self.phase != Phase::Exiting {
            self.begin_exit(now);
        }
    }

    /// Applies a registry refresh of this timer's toast.
    ///
    /// Restarts the countdown from the toast's (new) full duration. The
    /// pause state is preserved: a paused toast stays paused with a full
    /// clock. A toast already exiting stays on its way out; only the
    /// revision is acknowledged so the refresh is not re-applied.
    pub fn refresh(&mut self, toast: &Toast, now: Instant) {
        self.revision = toast.revision();
        if self.phase == Phase::Exiting {
            return;
        }

        self.duration = toast.duration();
        self.remaining = toast.duration();
        if self.phase == Phase::Running {
            self.deadline = Some(now + self.duration);
        }
        // Entering keeps its pending transition and starts the fresh
        // countdown when the entry delay elapses; Paused stays frozen.
    }

    fn start_running(&mut self, now: Instant) {
        self.phase = Phase::Running;
        self.phase_since = now;
        self.deadline = Some(now + self.remaining);
    }

    fn begin_exit(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline.take() {
            self.remaining = deadline.saturating_duration_since(now);
        }
        self.phase = Phase::Exiting;
        self.phase_since = now;
    }

    #[must_use]
    pub fn toast_id(&self) -> ToastId {
        self.toast_id
    }

    /// Revision of the toast this timer last observed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Remaining lifetime as of the last state change or tick.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Full requested lifetime backing the current countdown.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
