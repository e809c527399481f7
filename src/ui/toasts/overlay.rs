// SPDX-License-Identifier: MPL-2.0
//! Overlay host: one countdown timer per active toast.
//!
//! The `Overlay` reconciles its timers against the registry snapshot,
//! advances them on every tick, and translates timer removal requests into
//! registry removals. Timers never outlive their toast: a toast removed
//! from the registry loses its timer at the next reconciliation, which is
//! also what cancels its pending scheduled work.

use super::widget;
use crate::config::{defaults, Config};
use crate::domain::timer::ToastTimer;
use crate::domain::toast::ToastId;
use crate::registry::Registry;
use crate::ui::design_tokens::sizing;
use iced::{time, Element, Subscription};
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Periodic wake-up carrying the current instant.
    Tick(Instant),
    /// Pointer entered a toast card: suspend its countdown.
    PointerEntered(ToastId),
    /// Pointer left a toast card: resume its countdown.
    PointerExited(ToastId),
    /// Close control pressed: start the exit transition.
    Dismiss(ToastId),
}

/// Rendering-layer host state for the toast system.
#[derive(Debug)]
pub struct Overlay {
    timers: Vec<ToastTimer>,
    tick_interval: Duration,
    show_remaining: bool,
    width: f32,
}

impl Overlay {
    /// Creates an overlay with default presentation settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            tick_interval: Duration::from_millis(defaults::DEFAULT_TICK_INTERVAL_MS),
            show_remaining: false,
            width: sizing::TOAST_WIDTH,
        }
    }

    /// Creates an overlay configured from host preferences.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            timers: Vec::new(),
            tick_interval: config.tick_interval(),
            show_remaining: config.display.show_remaining.unwrap_or(false),
            width: config.display.width.unwrap_or(sizing::TOAST_WIDTH),
        }
    }

    /// Handles a toast message using the wall clock for user events.
    ///
    /// Ticks carry their own instant; pointer and close events are stamped
    /// with `Instant::now()`. Hosts that need full determinism call
    /// [`apply`](Self::apply) directly.
    pub fn update(&mut self, registry: &mut Registry, message: Message) {
        let now = match message {
            Message::Tick(instant) => instant,
            _ => Instant::now(),
        };
        self.apply(registry, message, now);
    }

    /// Deterministic message handler: every transition happens at `now`.
    pub fn apply(&mut self, registry: &mut Registry, message: Message, now: Instant) {
        match message {
            Message::Tick(_) => {
                registry.poll_dispatch();
                self.sync(registry, now);

                let removals: Vec<ToastId> =
                    self.timers.iter_mut().filter_map(|t| t.tick(now)).collect();
                if !removals.is_empty() {
                    for id in removals {
                        registry.remove(id);
                    }
                    self.sync(registry, now);
                }
            }
            Message::PointerEntered(id) => {
                if let Some(timer) = self.timer_mut(id) {
                    timer.pointer_entered(now);
                }
            }
            Message::PointerExited(id) => {
                if let Some(timer) = self.timer_mut(id) {
                    timer.pointer_left(now);
                }
            }
            Message::Dismiss(id) => {
                if let Some(timer) = self.timer_mut(id) {
                    timer.request_close(now);
                }
            }
        }
    }

    /// Reconciles the timer set against the registry snapshot.
    ///
    /// Creates a timer for every new toast, refreshes timers whose toast
    /// revision advanced, and drops timers whose toast is gone.
    pub fn sync(&mut self, registry: &Registry, now: Instant) {
        self.timers
            .retain(|timer| registry.snapshot().iter().any(|t| t.id() == timer.toast_id()));

        for toast in registry.snapshot() {
            match self.timers.iter_mut().find(|t| t.toast_id() == toast.id()) {
                Some(timer) => {
                    if timer.revision() != toast.revision() {
                        timer.refresh(toast, now);
                    }
                }
                None => self.timers.push(ToastTimer::new(toast, now)),
            }
        }
    }

    /// Convenience wall-clock reconciliation.
    ///
    /// Hosts call this right after mutating the registry out of band (a
    /// direct `add`, or a `poll_dispatch` outside the tick path) so the new
    /// toast is rendered on the very next frame rather than the next tick.
    pub fn sync_now(&mut self, registry: &Registry) {
        self.sync(registry, Instant::now());
    }

    /// The timer bound to `id`, if that toast is alive and synced.
    #[must_use]
    pub fn timer(&self, id: ToastId) -> Option<&ToastTimer> {
        self.timers.iter().find(|t| t.toast_id() == id)
    }

    fn timer_mut(&mut self, id: ToastId) -> Option<&mut ToastTimer> {
        self.timers.iter_mut().find(|t| t.toast_id() == id)
    }

    /// Number of live timers (equals the number of rendered toasts).
    #[must_use]
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Whether to render the remaining-time caption.
    #[must_use]
    pub fn show_remaining(&self) -> bool {
        self.show_remaining
    }

    /// Toast card width in logical pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Periodic tick subscription while any toast is live.
    ///
    /// Returns [`Subscription::none`] when idle; dropping back to `none` is
    /// what cancels the repeating wake-up, so no callback can fire against
    /// torn-down toast state.
    pub fn subscription(&self, registry: &Registry) -> Subscription<Message> {
        if registry.is_empty() && self.timers.is_empty() {
            Subscription::none()
        } else {
            time::every(self.tick_interval).map(Message::Tick)
        }
    }

    /// Renders the toast overlay, bottom-right, oldest toast on top.
    pub fn view<'a>(&'a self, registry: &'a Registry) -> Element<'a, Message> {
        widget::view_overlay(self, registry)
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}
