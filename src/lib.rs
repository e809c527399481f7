// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a transient toast notification engine built with the
//! Iced GUI framework.
//!
//! Callers fire short-lived messages at a [`registry::Registry`]; each
//! active toast is displayed by the [`ui::toasts::Overlay`] for a bounded
//! lifetime with hover-to-pause, and removed automatically or on user
//! dismissal. Colliding `(message, kind)` pairs refresh the existing toast
//! instead of stacking duplicates.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod registry;
pub mod ui;
