// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for toast activity tracking.

use crate::domain::toast::{ToastId, ToastKind};
use std::time::Instant;

/// What happened to a toast, without any presentation detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEventKind {
    /// A new toast entered the registry.
    Created { id: ToastId, kind: ToastKind },
    /// An existing toast was refreshed by a colliding `add`.
    Refreshed { id: ToastId },
    /// A toast left the registry, by expiry or dismissal.
    Removed { id: ToastId },
    /// All toasts were dropped at once.
    Cleared { count: usize },
}

/// A single recorded lifecycle event.
///
/// Timestamps are monotonic; they order events within a session but carry
/// no wall-clock meaning.
#[derive(Debug, Clone)]
pub struct ToastEvent {
    at: Instant,
    kind: ToastEventKind,
}

impl ToastEvent {
    pub(crate) fn new(kind: ToastEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }

    /// When the event was recorded (monotonic).
    #[must_use]
    pub fn at(&self) -> Instant {
        self.at
    }

    /// The recorded event kind.
    #[must_use]
    pub fn kind(&self) -> &ToastEventKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_preserve_their_kind() {
        let id = ToastId::new();
        let event = ToastEvent::new(ToastEventKind::Removed { id });

        assert_eq!(*event.kind(), ToastEventKind::Removed { id });
    }
}
