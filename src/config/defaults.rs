// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Stacking gap between toasts
//! - **Timing**: Mount, unmount and progress tick delays
//! - **Options**: Default notification option table

use crate::domain::{AnimationType, NotificationType, Position};
use std::time::Duration;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Pixel gap inserted before the first toast and between stacked toasts.
pub const TOAST_GAP: f64 = 12.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Wait between hiding a toast and detaching its container.
pub const UNMOUNT_GRACE_DELAY: Duration = Duration::from_millis(1000);

/// Deferred tick between `open` returning and the toast being mounted.
///
/// Lets the host layout settle before sibling heights are read.
pub const DEFAULT_MOUNT_DELAY: Duration = Duration::from_millis(1);

/// Progress tick used when no time remains on a timer.
pub const MIN_PROGRESS_TICK: Duration = Duration::from_millis(10);

/// Full progress value (percent of time remaining).
pub const FULL_PROGRESS: u8 = 100;

// ==========================================================================
// Option Defaults
// ==========================================================================

/// Default auto-dismiss duration in milliseconds.
pub const DEFAULT_DURATION_MS: i64 = 3000;

pub const DEFAULT_TYPE: NotificationType = NotificationType::Info;
pub const DEFAULT_POSITION: Position = Position::TopRight;
pub const DEFAULT_ANIMATION: AnimationType = AnimationType::Bounce;
pub const DEFAULT_SHOW_ICON: bool = true;
pub const DEFAULT_SHOW_CLOSE_BUTTON: bool = true;
pub const DEFAULT_SHOW_PROGRESS_BAR: bool = true;
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;

/// Colors, custom icon and container default to "unset".
pub const DEFAULT_EMPTY: &str = "";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_is_twelve_pixels() {
        assert_eq!(TOAST_GAP, 12.0);
    }

    #[test]
    fn grace_delay_outlasts_mount_delay() {
        assert!(UNMOUNT_GRACE_DELAY > DEFAULT_MOUNT_DELAY);
        assert_eq!(UNMOUNT_GRACE_DELAY.as_millis(), 1000);
    }

    #[test]
    fn option_table_matches_documented_defaults() {
        assert_eq!(DEFAULT_DURATION_MS, 3000);
        assert_eq!(DEFAULT_TYPE, NotificationType::Info);
        assert_eq!(DEFAULT_POSITION, Position::TopRight);
        assert_eq!(DEFAULT_ANIMATION, AnimationType::Bounce);
        assert!(DEFAULT_SHOW_PROGRESS_BAR);
    }
}
