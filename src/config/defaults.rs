// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all timing and display constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Lifetime**: Toast display duration bounds
//! - **Transition**: Fixed entry/exit animation delays
//! - **Scheduling**: Countdown tick cadence

use std::time::Duration;

// ==========================================================================
// Lifetime Defaults
// ==========================================================================

/// Default toast lifetime in milliseconds, used whenever a caller requests
/// no duration or a non-positive one.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Minimum configurable toast lifetime in milliseconds.
pub const MIN_TOAST_DURATION_MS: u64 = 250;

/// Maximum configurable toast lifetime in milliseconds.
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Default toast lifetime as a [`Duration`].
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(DEFAULT_TOAST_DURATION_MS);

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Entry transition delay in milliseconds. Independent of the toast
/// lifetime; a toast is in the entering phase for exactly this long.
pub const ENTER_DELAY_MS: u64 = 50;

/// Exit transition delay in milliseconds. Elapses between the exit trigger
/// (expiry or close) and the removal request.
pub const EXIT_DELAY_MS: u64 = 300;

/// Entry transition delay as a [`Duration`].
pub const ENTER_DELAY: Duration = Duration::from_millis(ENTER_DELAY_MS);

/// Exit transition delay as a [`Duration`].
pub const EXIT_DELAY: Duration = Duration::from_millis(EXIT_DELAY_MS);

// ==========================================================================
// Scheduling Defaults
// ==========================================================================

/// Default countdown tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Minimum configurable tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum configurable tick interval in milliseconds.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Lifetime validation
    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(MAX_TOAST_DURATION_MS > MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);

    // Transition validation: both delays stay short of the minimum lifetime
    assert!(ENTER_DELAY_MS < MIN_TOAST_DURATION_MS);
    assert!(EXIT_DELAY_MS < MIN_TOAST_DURATION_MS);

    // Scheduling validation
    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
};
