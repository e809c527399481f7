// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget dispatch handle into a [`Registry`](super::Registry).
//!
//! Background tasks and other out-of-tree callers cannot borrow the
//! registry directly; they hold a `Dispatcher` instead. Requests travel
//! over an unbounded channel and are applied at the next overlay tick.

use crate::domain::toast::{ToastId, ToastKind};
use std::time::Duration;
use tokio::sync::mpsc;

/// A queued registry mutation.
#[derive(Debug)]
pub(super) enum Request {
    Add {
        message: String,
        kind: ToastKind,
        duration: Option<Duration>,
    },
    Remove(ToastId),
}

/// Cheap-to-clone handle for dispatching toasts from anywhere.
///
/// A dispatcher is only valid while the registry that created it is alive.
/// Using one after the registry was torn down is a wiring defect, not a
/// runtime condition, and is surfaced immediately as a panic.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    request_tx: mpsc::UnboundedSender<Request>,
}

impl Dispatcher {
    pub(super) fn new(request_tx: mpsc::UnboundedSender<Request>) -> Self {
        Self { request_tx }
    }

    /// Requests a new toast (or a refresh of a colliding one).
    ///
    /// # Panics
    ///
    /// Panics if the registry behind this dispatcher has been torn down.
    pub fn add_toast(&self, message: impl Into<String>, kind: ToastKind, duration: Option<Duration>) {
        self.send(Request::Add {
            message: message.into(),
            kind,
            duration,
        });
    }

    /// Requests an explicit dismissal. Unknown ids are benign no-ops on the
    /// registry side.
    ///
    /// # Panics
    ///
    /// Panics if the registry behind this dispatcher has been torn down.
    pub fn remove_toast(&self, id: ToastId) {
        self.send(Request::Remove(id));
    }

    fn send(&self, request: Request) {
        self.request_tx
            .send(request)
            .expect("toast dispatcher used outside an active registry scope");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn dispatcher_outliving_its_registry_panics_on_use() {
        let registry = Registry::new();
        let dispatcher = registry.dispatcher();
        drop(registry);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            dispatcher.add_toast("late", ToastKind::Info, None);
        }));
        assert!(result.is_err());
    }

    #[test]
    fn dispatcher_is_cloneable() {
        let mut registry = Registry::new();
        let dispatcher = registry.dispatcher();
        let clone = dispatcher.clone();

        dispatcher.add_toast("a", ToastKind::Info, None);
        clone.add_toast("b", ToastKind::Info, None);
        registry.poll_dispatch();

        assert_eq!(registry.len(), 2);
    }
}
