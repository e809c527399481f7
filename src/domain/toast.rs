// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` value entity and the `ToastKind` enum
//! used throughout the notification system.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of a toast. Purely descriptive: it selects the visual styling and
/// is half of the dedup key, but never affects timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// Returns a stable lowercase name, used in diagnostics and tests.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

/// A single transient notification entity.
///
/// Identity is immutable once created. Within a registry's active set no
/// two toasts share the same `(message, kind)` pair; that pair is the dedup
/// key, not `id`.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    message: String,
    kind: ToastKind,
    duration: Duration,
    revision: u64,
}

impl Toast {
    /// Creates a new toast with a freshly assigned id.
    ///
    /// `requested` is the caller-supplied lifetime; `None` and zero both
    /// fall back to `default` rather than being rejected.
    pub fn new(
        message: impl Into<String>,
        kind: ToastKind,
        requested: Option<Duration>,
        default: Duration,
    ) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            kind,
            duration: normalize_duration(requested, default),
            revision: 0,
        }
    }

    /// Resets the requested lifetime in place, keeping the id.
    ///
    /// Bumps `revision` so the rendering layer observes the refresh even
    /// when the new duration equals the old one.
    pub(crate) fn refresh(&mut self, requested: Option<Duration>, default: Duration) {
        self.duration = normalize_duration(requested, default);
        self.revision += 1;
    }

    /// Returns true if `(message, kind)` equals this toast's dedup key.
    #[must_use]
    pub fn matches(&self, message: &str, kind: ToastKind) -> bool {
        self.kind == kind && self.message == message
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// The requested lifetime, already normalized to a positive duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Monotonic refresh counter, starting at zero.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Falls back to `default` for absent or non-positive lifetimes.
fn normalize_duration(requested: Option<Duration>, default: Duration) -> Duration {
    match requested {
        Some(d) if !d.is_zero() => d,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: Duration = Duration::from_millis(3000);

    #[test]
    fn toast_ids_are_unique() {
        let a = Toast::new("x", ToastKind::Info, None, DEFAULT);
        let b = Toast::new("x", ToastKind::Info, None, DEFAULT);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn missing_duration_falls_back_to_default() {
        let toast = Toast::new("x", ToastKind::Info, None, DEFAULT);
        assert_eq!(toast.duration(), DEFAULT);
    }

    #[test]
    fn zero_duration_falls_back_to_default() {
        let toast = Toast::new("x", ToastKind::Info, Some(Duration::ZERO), DEFAULT);
        assert_eq!(toast.duration(), DEFAULT);
    }

    #[test]
    fn explicit_duration_is_kept() {
        let toast = Toast::new("x", ToastKind::Info, Some(Duration::from_millis(1500)), DEFAULT);
        assert_eq!(toast.duration(), Duration::from_millis(1500));
    }

    #[test]
    fn refresh_keeps_id_and_bumps_revision() {
        let mut toast = Toast::new("x", ToastKind::Info, None, DEFAULT);
        let id = toast.id();

        toast.refresh(Some(Duration::from_millis(5000)), DEFAULT);

        assert_eq!(toast.id(), id);
        assert_eq!(toast.duration(), Duration::from_millis(5000));
        assert_eq!(toast.revision(), 1);
    }

    #[test]
    fn refresh_with_equal_duration_still_bumps_revision() {
        let mut toast = Toast::new("x", ToastKind::Info, None, DEFAULT);
        toast.refresh(None, DEFAULT);
        assert_eq!(toast.revision(), 1);
    }

    #[test]
    fn matches_compares_message_and_kind() {
        let toast = Toast::new("saved", ToastKind::Success, None, DEFAULT);

        assert!(toast.matches("saved", ToastKind::Success));
        assert!(!toast.matches("saved", ToastKind::Info));
        assert!(!toast.matches("failed", ToastKind::Success));
    }
}
