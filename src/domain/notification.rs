// SPDX-License-Identifier: MPL-2.0
//! Notification request and configuration data structures.
//!
//! A [`NotificationRequest`] is what callers submit: a title, a message and
//! any subset of the optional fields. The resolver turns it into a
//! [`ResolvedConfig`] where every field is set.

use super::kinds::{AnimationType, NotificationType, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::time::Instant;

/// Unique identifier for a toast instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    /// Creates a new random (v4 UUID) identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Caller input: title and message plus optional overrides.
///
/// `None` means "use the default"; any `Some` value, including `Some(false)`
/// or `Some(String::new())`, is honored as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<NotificationType>,
    /// Milliseconds; zero or negative disables auto-dismiss.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_icon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_close_button: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_progress_bar: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_bar_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
    /// Selector of the mount point to render into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: NotificationType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration: i64) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = Some(show);
        self
    }

    #[must_use]
    pub fn custom_icon(mut self, icon: impl Into<String>) -> Self {
        self.custom_icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = Some(show);
        self
    }

    #[must_use]
    pub fn animation(mut self, animation: AnimationType) -> Self {
        self.animation = Some(animation);
        self
    }

    #[must_use]
    pub fn show_progress_bar(mut self, show: bool) -> Self {
        self.show_progress_bar = Some(show);
        self
    }

    #[must_use]
    pub fn progress_bar_color(mut self, color: impl Into<String>) -> Self {
        self.progress_bar_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn pause_on_hover(mut self, pause: bool) -> Self {
        self.pause_on_hover = Some(pause);
        self
    }

    #[must_use]
    pub fn container(mut self, selector: impl Into<String>) -> Self {
        self.container = Some(selector.into());
        self
    }

    /// Fills every field still unset from `other`, keeping the ones already set.
    #[must_use]
    pub fn or(self, other: NotificationRequest) -> Self {
        Self {
            title: self.title,
            message: self.message,
            kind: self.kind.or(other.kind),
            duration: self.duration.or(other.duration),
            position: self.position.or(other.position),
            background_color: self.background_color.or(other.background_color),
            text_color: self.text_color.or(other.text_color),
            show_icon: self.show_icon.or(other.show_icon),
            custom_icon: self.custom_icon.or(other.custom_icon),
            show_close_button: self.show_close_button.or(other.show_close_button),
            animation: self.animation.or(other.animation),
            show_progress_bar: self.show_progress_bar.or(other.show_progress_bar),
            progress_bar_color: self.progress_bar_color.or(other.progress_bar_color),
            pause_on_hover: self.pause_on_hover.or(other.pause_on_hover),
            container: self.container.or(other.container),
        }
    }
}

/// Fully resolved notification options plus the toast's identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub id: ToastId,
    #[serde(flatten)]
    pub options: ResolvedOptions,
}

/// Every option with its final value, without an identifier.
///
/// Presets store this shape; pairing it with an id yields a [`ResolvedConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub duration: i64,
    pub position: Position,
    pub background_color: String,
    pub text_color: String,
    pub show_icon: bool,
    pub custom_icon: String,
    pub show_close_button: bool,
    pub animation: AnimationType,
    pub show_progress_bar: bool,
    pub progress_bar_color: String,
    pub pause_on_hover: bool,
    pub container: String,
}

impl ResolvedOptions {
    /// Whether the toast dismisses itself after `duration` milliseconds.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        self.duration > 0
    }
}

impl std::ops::Deref for ResolvedConfig {
    type Target = ResolvedOptions;

    fn deref(&self) -> &Self::Target {
        &self.options
    }
}

impl From<&ResolvedOptions> for NotificationRequest {
    fn from(options: &ResolvedOptions) -> Self {
        Self {
            title: options.title.clone(),
            message: options.message.clone(),
            kind: Some(options.kind),
            duration: Some(options.duration),
            position: Some(options.position),
            background_color: Some(options.background_color.clone()),
            text_color: Some(options.text_color.clone()),
            show_icon: Some(options.show_icon),
            custom_icon: Some(options.custom_icon.clone()),
            show_close_button: Some(options.show_close_button),
            animation: Some(options.animation),
            show_progress_bar: Some(options.show_progress_bar),
            progress_bar_color: Some(options.progress_bar_color.clone()),
            pause_on_hover: Some(options.pause_on_hover),
            container: Some(options.container.clone()),
        }
    }
}

/// A resolved configuration stamped with its creation time.
///
/// The timestamp lets timers back-compute how much of the duration already
/// elapsed before the toast was rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveNotification {
    pub config: ResolvedConfig,
    pub created_at: Instant,
}

impl ActiveNotification {
    #[must_use]
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.config.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.config.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn builder_sets_only_requested_fields() {
        let request = NotificationRequest::new("Saved", "All good")
            .kind(NotificationType::Success)
            .show_progress_bar(false);

        assert_eq!(request.kind, Some(NotificationType::Success));
        assert_eq!(request.show_progress_bar, Some(false));
        assert!(request.duration.is_none());
        assert!(request.position.is_none());
    }

    #[test]
    fn or_keeps_explicit_values() {
        let base = NotificationRequest::new("t", "m").duration_ms(0);
        let merged = base.or(NotificationRequest::new("x", "y")
            .duration_ms(5000)
            .position(Position::BottomLeft));

        assert_eq!(merged.title, "t");
        assert_eq!(merged.duration, Some(0));
        assert_eq!(merged.position, Some(Position::BottomLeft));
    }

    #[test]
    fn request_deserializes_camel_case_json_like_toml() {
        let request: NotificationRequest = toml::from_str(
            "title = \"Hi\"\nmessage = \"There\"\ntype = \"error\"\nshowProgressBar = false\n",
        )
        .expect("request parses");
        assert_eq!(request.kind, Some(NotificationType::Error));
        assert_eq!(request.show_progress_bar, Some(false));
        assert!(request.pause_on_hover.is_none());
    }
}
