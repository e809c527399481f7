// SPDX-License-Identifier: MPL-2.0
//! Toast registry: the owner of the active-toast collection.
//!
//! The `Registry` is the sole source of truth for "is this toast still
//! active". It preserves insertion order (oldest first), applies the
//! deduplication policy on insertion, and removes entries on expiry or
//! explicit dismissal. It is an explicitly constructed store passed by
//! reference to consumers, scoped to one UI tree - not a process-wide
//! singleton.
//!
//! # Deduplication policy
//!
//! On `add` with a colliding `(message, kind)` key the existing entry is
//! refreshed in place: it keeps its id (and therefore its rendering
//! instance) and restarts its countdown from the newly requested duration.
//! The alternative replace-on-collision policy is intentionally not
//! implemented; see DESIGN.md for the behavioral difference under pause.

mod dispatch;

pub use dispatch::Dispatcher;

use crate::config::defaults::DEFAULT_TOAST_DURATION;
use crate::diagnostics::{DiagnosticsHandle, ToastEventKind};
use crate::domain::toast::{Toast, ToastId, ToastKind};
use dispatch::Request;
use std::time::Duration;
use tokio::sync::mpsc;

/// Ordered collection of active toasts plus the dispatch channel endpoints.
#[derive(Debug)]
pub struct Registry {
    toasts: Vec<Toast>,
    default_duration: Duration,
    request_tx: mpsc::UnboundedSender<Request>,
    request_rx: mpsc::UnboundedReceiver<Request>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Registry {
    /// Creates an empty registry with the standard 3s default lifetime.
    #[must_use]
    pub fn new() -> Self {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        Self {
            toasts: Vec::new(),
            default_duration: DEFAULT_TOAST_DURATION,
            request_tx,
            request_rx,
            diagnostics: None,
        }
    }

    /// Overrides the default lifetime applied when callers pass no
    /// duration. Zero is ignored and keeps the previous default.
    #[must_use]
    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        if !duration.is_zero() {
            self.default_duration = duration;
        }
        self
    }

    /// Sets the diagnostics handle used for logging lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Inserts a new toast or refreshes an existing one. Never fails.
    ///
    /// If an active toast carries the same `(message, kind)` pair, that
    /// entry keeps its id and sequence position, its duration is reset to
    /// the newly requested value, and its revision is bumped so the
    /// rendering layer restarts the countdown. Otherwise a new toast is
    /// appended at the end of the sequence with a fresh id.
    ///
    /// `None` and zero durations fall back to the registry default.
    pub fn add(&mut self, message: impl Into<String>, kind: ToastKind, duration: Option<Duration>) {
        let message = message.into();

        if let Some(existing) = self
            .toasts
            .iter_mut()
            .find(|t| t.matches(&message, kind))
        {
            existing.refresh(duration, self.default_duration);
            let id = existing.id();
            self.log(ToastEventKind::Refreshed { id });
            return;
        }

        let toast = Toast::new(message, kind, duration, self.default_duration);
        self.log(ToastEventKind::Created {
            id: toast.id(),
            kind: toast.kind(),
        });
        self.toasts.push(toast);
    }

    /// Adds a success toast with the default lifetime.
    pub fn push_success(&mut self, message: impl Into<String>) {
        self.add(message, ToastKind::Success, None);
    }

    /// Adds an error toast with the default lifetime.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.add(message, ToastKind::Error, None);
    }

    /// Adds a warning toast with the default lifetime.
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.add(message, ToastKind::Warning, None);
    }

    /// Adds an info toast with the default lifetime.
    pub fn push_info(&mut self, message: impl Into<String>) {
        self.add(message, ToastKind::Info, None);
    }

    /// Removes the toast with the given id.
    ///
    /// A missing id is a benign no-op, not an error: under the normal race
    /// between user dismissal and timer expiry both sides may request the
    /// same removal.
    pub fn remove(&mut self, id: ToastId) {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id() != id);
        if self.toasts.len() < before {
            self.log(ToastEventKind::Removed { id });
        }
    }

    /// Drops all active toasts at once.
    pub fn clear(&mut self) {
        let count = self.toasts.len();
        self.toasts.clear();
        if count > 0 {
            self.log(ToastEventKind::Cleared { count });
        }
    }

    /// Read-only ordered view of the active toasts, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Returns a cheap-to-clone fire-and-forget handle into this registry.
    ///
    /// Requests sent through the handle are applied by the next
    /// [`poll_dispatch`](Self::poll_dispatch) call.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.request_tx.clone())
    }

    /// Applies all pending dispatcher requests.
    ///
    /// Called by the overlay at the top of every tick, so dispatched toasts
    /// appear within one tick interval.
    pub fn poll_dispatch(&mut self) {
        let mut pending = Vec::new();
        while let Ok(request) = self.request_rx.try_recv() {
            pending.push(request);
        }
        for request in pending {
            match request {
                Request::Add {
                    message,
                    kind,
                    duration,
                } => self.add(message, kind, duration),
                Request::Remove(id) => self.remove(id),
            }
        }
    }

    fn log(&self, event: ToastEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
