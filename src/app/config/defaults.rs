// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast display window and fade-out
//! - **Animations**: Stat counters and progress bars
//! - **Search**: Live filter debounce

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays fully visible (in milliseconds).
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u64 = 5000;

/// Length of the toast fade-out phase (in milliseconds).
pub const DEFAULT_NOTIFICATION_FADE_MS: u64 = 300;

/// Upper bound for the display window (in milliseconds).
pub const MAX_NOTIFICATION_DISPLAY_MS: u64 = 60_000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Number of increments a stat counter takes to reach its target.
pub const DEFAULT_COUNTER_STEPS: u32 = 50;

/// Interval between counter increments (in milliseconds).
pub const DEFAULT_COUNTER_INTERVAL_MS: u64 = 30;

/// Delay between resetting a progress bar and growing it (in milliseconds).
pub const DEFAULT_PROGRESS_DELAY_MS: u64 = 100;

/// Duration of the progress bar growth (in milliseconds).
pub const DEFAULT_PROGRESS_DURATION_MS: u64 = 1000;

/// Delay after startup before progress bars animate (in milliseconds).
pub const DEFAULT_PROGRESS_START_MS: u64 = 500;

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Quiet period before the live course filter applies (in milliseconds).
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Interval of the UI tick while timers or animations are pending.
pub const TICK_INTERVAL_MS: u64 = 30;
