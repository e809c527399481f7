// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording toast lifecycle activity.
//!
//! This module provides infrastructure for capturing lifecycle events
//! during operation and storing them in a memory-bounded circular buffer
//! for later inspection.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`ToastEvent`]: A recorded lifecycle event with a monotonic timestamp
//! - [`DiagnosticsHandle`]: Cheap-to-clone, non-blocking event producer
//! - [`DiagnosticsLog`]: Owner of the buffer; drains pending events on demand
//!
//! The handle feeds a bounded channel so producers never block the UI
//! thread; events are dropped if the channel is full.

mod buffer;
mod events;

pub use buffer::CircularBuffer;
pub use events::{ToastEvent, ToastEventKind};

use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TryRecvError};

/// Default number of retained events.
pub const DEFAULT_LOG_CAPACITY: usize = 1000;

/// Capacity of the producer channel between handles and the log.
const CHANNEL_CAPACITY: usize = 256;

/// Handle for logging diagnostic events.
///
/// Cheap to clone and safe to hand out to any component. Sends are
/// non-blocking; an event is dropped if the channel is full.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: SyncSender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Records a lifecycle event.
    pub fn log(&self, kind: ToastEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(ToastEvent::new(kind));
    }
}

/// Owns the event buffer and the receiving end of the producer channel.
#[derive(Debug)]
pub struct DiagnosticsLog {
    event_tx: SyncSender<ToastEvent>,
    event_rx: Receiver<ToastEvent>,
    buffer: CircularBuffer<ToastEvent>,
}

impl DiagnosticsLog {
    /// Creates a log retaining up to `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = sync_channel(CHANNEL_CAPACITY);
        Self {
            event_tx,
            event_rx,
            buffer: CircularBuffer::new(capacity),
        }
    }

    /// Returns a new producer handle bound to this log.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    pub fn drain(&mut self) {
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => self.buffer.push(event),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Returns the retained events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &ToastEvent> {
        self.buffer.iter()
    }

    /// Returns the number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::toast::ToastId;

    #[test]
    fn logged_events_appear_after_drain() {
        let mut log = DiagnosticsLog::new(10);
        let handle = log.handle();
        let id = ToastId::new();

        handle.log(ToastEventKind::Removed { id });
        assert!(log.is_empty());

        log.drain();
        assert_eq!(log.len(), 1);
        assert_eq!(*log.events().next().unwrap().kind(), ToastEventKind::Removed { id });
    }

    #[test]
    fn buffer_keeps_only_the_newest_events() {
        let mut log = DiagnosticsLog::new(2);
        let handle = log.handle();

        for _ in 0..3 {
            handle.log(ToastEventKind::Cleared { count: 0 });
        }
        log.drain();

        assert_eq!(log.len(), 2);
    }

    #[test]
    fn cloned_handles_feed_the_same_log() {
        let mut log = DiagnosticsLog::new(10);
        let first = log.handle();
        let second = first.clone();

        first.log(ToastEventKind::Cleared { count: 1 });
        second.log(ToastEventKind::Cleared { count: 2 });
        log.drain();

        assert_eq!(log.len(), 2);
    }
}
