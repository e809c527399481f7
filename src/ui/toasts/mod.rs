// SPDX-License-Identifier: MPL-2.0
//! Toast overlay for rendering and driving active notifications.
//!
//! This module is the rendering-layer host of the toast system. The
//! [`Overlay`] materializes one countdown timer per registry entry, routes
//! pointer and close events into the timers, and forwards removal requests
//! back to the registry.
//!
//! # Components
//!
//! - [`overlay`] - `Overlay` host state and its `Message` enum
//! - [`widget`] - Toast card rendering and styling
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::registry::Registry;
//! use iced_toasts::ui::toasts::{Message as ToastMessage, Overlay};
//!
//! let mut registry = Registry::new();
//! let mut overlay = Overlay::new();
//!
//! registry.push_success("Saved");
//! overlay.sync_now(&registry);
//!
//! // In your update function:
//! // overlay.update(&mut registry, toast_message);
//! // In your view function:
//! // let toast_layer = overlay.view(&registry).map(AppMessage::Toasts);
//! // In your subscription function:
//! // overlay.subscription(&registry).map(AppMessage::Toasts)
//! ```

mod overlay;
mod widget;

pub use overlay::{Message, Overlay};
