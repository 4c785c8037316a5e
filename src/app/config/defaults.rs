// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Relay used for remote fetches unless configured otherwise.
pub const DEFAULT_RELAY_URL: &str = crate::source::remote::DEFAULT_RELAY_URL;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Toasts shown at once; the rest are queued.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Auto-dismiss delay for success and info toasts, in milliseconds.
pub const NOTIFICATION_SHORT_MS: u64 = 3_000;

/// Auto-dismiss delay for warning toasts, in milliseconds.
pub const NOTIFICATION_LONG_MS: u64 = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_VISIBLE_NOTIFICATIONS > 0);
    assert!(NOTIFICATION_SHORT_MS < NOTIFICATION_LONG_MS);
};
