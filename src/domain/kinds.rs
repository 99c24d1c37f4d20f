// SPDX-License-Identifier: MPL-2.0
//! Closed enumerations used by notification options.
//!
//! Each enum serializes to the lowercase/kebab-case token hosts already use
//! (`"top-right"`, `"bounce"`, `"success"`), and parses back from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when parsing an option token that is not in its closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownToken {
    kind: &'static str,
    value: String,
}

// =============================================================================
// NotificationType
// =============================================================================

/// Kind of notification, selects the renderer's palette and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationType {
    pub const ALL: [NotificationType; 4] = [
        NotificationType::Success,
        NotificationType::Error,
        NotificationType::Warning,
        NotificationType::Info,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationType::Success => "success",
            NotificationType::Error => "error",
            NotificationType::Warning => "warning",
            NotificationType::Info => "info",
        }
    }
}

// =============================================================================
// Position
// =============================================================================

/// Screen anchor zone. Every position owns an independent stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    TopCenter,
    BottomLeft,
    BottomRight,
    BottomCenter,
}

/// Edge a position stacks away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Horizontal alignment of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomLeft,
        Position::BottomRight,
        Position::BottomCenter,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::TopCenter => "top-center",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::BottomCenter => "bottom-center",
        }
    }

    /// Dense index into per-position tables, in [`Position::ALL`] order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopRight => 1,
            Position::TopCenter => 2,
            Position::BottomLeft => 3,
            Position::BottomRight => 4,
            Position::BottomCenter => 5,
        }
    }

    /// The edge the offset is measured from.
    #[must_use]
    pub fn edge(self) -> VerticalEdge {
        match self {
            Position::TopLeft | Position::TopRight | Position::TopCenter => VerticalEdge::Top,
            Position::BottomLeft | Position::BottomRight | Position::BottomCenter => {
                VerticalEdge::Bottom
            }
        }
    }

    #[must_use]
    pub fn anchor(self) -> HorizontalAnchor {
        match self {
            Position::TopLeft | Position::BottomLeft => HorizontalAnchor::Left,
            Position::TopCenter | Position::BottomCenter => HorizontalAnchor::Center,
            Position::TopRight | Position::BottomRight => HorizontalAnchor::Right,
        }
    }
}

// =============================================================================
// AnimationType
// =============================================================================

/// Entrance/exit animation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    #[default]
    Bounce,
    Zoom,
    Slide,
    Fade,
}

impl AnimationType {
    pub const ALL: [AnimationType; 4] = [
        AnimationType::Bounce,
        AnimationType::Zoom,
        AnimationType::Slide,
        AnimationType::Fade,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationType::Bounce => "bounce",
            AnimationType::Zoom => "zoom",
            AnimationType::Slide => "slide",
            AnimationType::Fade => "fade",
        }
    }
}

macro_rules! token_impls {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|candidate| candidate.as_str() == s)
                    .ok_or_else(|| UnknownToken {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

token_impls!(NotificationType, "notification type");
token_impls!(Position, "position");
token_impls!(AnimationType, "animation");
