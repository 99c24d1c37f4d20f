// SPDX-License-Identifier: MPL-2.0
//! Option resolution.
//!
//! Turns a partial [`NotificationRequest`] into a [`ResolvedConfig`]: every
//! unset field takes its default, then the progress bar rule is applied.
//! Title and message pass through untouched; validating them is the
//! caller's business.

use crate::config::defaults::{
    DEFAULT_ANIMATION, DEFAULT_DURATION_MS, DEFAULT_EMPTY, DEFAULT_PAUSE_ON_HOVER,
    DEFAULT_POSITION, DEFAULT_SHOW_CLOSE_BUTTON, DEFAULT_SHOW_ICON, DEFAULT_SHOW_PROGRESS_BAR,
    DEFAULT_TYPE,
};
use crate::domain::{NotificationRequest, ResolvedConfig, ResolvedOptions, ToastId};

/// Resolves `request` against the default table and tags it with `id`.
#[must_use]
pub fn resolve(request: &NotificationRequest, id: ToastId) -> ResolvedConfig {
    ResolvedConfig {
        id,
        options: resolve_options(request),
    }
}

/// Resolves every option without assigning an identifier.
#[must_use]
pub fn resolve_options(request: &NotificationRequest) -> ResolvedOptions {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| DEFAULT_EMPTY.to_string());
    let duration = request.duration.unwrap_or(DEFAULT_DURATION_MS);

    ResolvedOptions {
        title: request.title.clone(),
        message: request.message.clone(),
        kind: request.kind.unwrap_or(DEFAULT_TYPE),
        duration,
        position: request.position.unwrap_or(DEFAULT_POSITION),
        background_color: text(&request.background_color),
        text_color: text(&request.text_color),
        show_icon: request.show_icon.unwrap_or(DEFAULT_SHOW_ICON),
        custom_icon: text(&request.custom_icon),
        show_close_button: request
            .show_close_button
            .unwrap_or(DEFAULT_SHOW_CLOSE_BUTTON),
        animation: request.animation.unwrap_or(DEFAULT_ANIMATION),
        show_progress_bar: progress_bar_visible(duration, request.show_progress_bar),
        progress_bar_color: text(&request.progress_bar_color),
        pause_on_hover: request.pause_on_hover.unwrap_or(DEFAULT_PAUSE_ON_HOVER),
        container: text(&request.container),
    }
}

/// A toast that never expires has nothing to show progress for.
fn progress_bar_visible(duration: i64, requested: Option<bool>) -> bool {
    duration > 0 && requested.unwrap_or(DEFAULT_SHOW_PROGRESS_BAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnimationType, NotificationType, Position};

    fn minimal() -> NotificationRequest {
        NotificationRequest::new("Title", "Message")
    }

    #[test]
    fn merges_user_options_with_defaults() {
        let config = resolve(
            &minimal().kind(NotificationType::Success),
            ToastId::from("test-id-123"),
        );

        assert_eq!(config.id.as_str(), "test-id-123");
        assert_eq!(config.title, "Title");
        assert_eq!(config.kind, NotificationType::Success);
        assert_eq!(config.duration, DEFAULT_DURATION_MS);
        assert_eq!(config.position, Position::TopRight);
        assert_eq!(config.animation, AnimationType::Bounce);
        assert!(config.show_close_button);
        assert!(config.show_icon);
        assert!(config.pause_on_hover);
        assert!(config.show_progress_bar);
        assert_eq!(config.container, "");
    }

    #[test]
    fn honors_every_explicit_option() {
        let request = minimal()
            .kind(NotificationType::Error)
            .duration_ms(3000)
            .position(Position::BottomLeft)
            .background_color("#ff0000")
            .text_color("#ffffff")
            .show_icon(false)
            .show_close_button(false)
            .animation(AnimationType::Slide)
            .show_progress_bar(false)
            .progress_bar_color("#00ff00")
            .pause_on_hover(false)
            .container("#custom-container")
            .custom_icon("");

        let config = resolve(&request, ToastId::from("test-id"));

        assert_eq!(NotificationRequest::from(&config.options), request);
    }

    #[test]
    fn falsy_values_are_not_replaced_by_defaults() {
        let config = resolve(
            &minimal().show_icon(false).background_color(""),
            ToastId::new(),
        );
        assert!(!config.show_icon);
        assert_eq!(config.background_color, "");
    }

    #[test]
    fn zero_or_negative_duration_hides_progress_bar() {
        for duration in [0, -1, i64::MIN] {
            let config = resolve(
                &minimal().duration_ms(duration).show_progress_bar(true),
                ToastId::new(),
            );
            assert!(
                !config.show_progress_bar,
                "duration {duration} kept progress bar"
            );
        }
    }

    #[test]
    fn positive_duration_respects_explicit_progress_bar() {
        let hidden = resolve(
            &minimal().duration_ms(5000).show_progress_bar(false),
            ToastId::new(),
        );
        assert!(!hidden.show_progress_bar);

        let defaulted = resolve(&minimal().duration_ms(5000), ToastId::new());
        assert_eq!(defaulted.show_progress_bar, DEFAULT_SHOW_PROGRESS_BAR);
    }

    #[test]
    fn resolving_a_resolved_config_is_idempotent() {
        let first = resolve(
            &minimal().duration_ms(-5).position(Position::TopCenter),
            ToastId::from("a"),
        );
        let second = resolve(&NotificationRequest::from(&first.options), ToastId::from("b"));

        assert_eq!(first.options, second.options);
        assert_eq!(second.id.as_str(), "b");
    }

    #[test]
    fn missing_title_passes_through() {
        let config = resolve(&NotificationRequest::default(), ToastId::new());
        assert_eq!(config.title, "");
        assert_eq!(config.message, "");
    }
}
