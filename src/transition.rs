// SPDX-License-Identifier: MPL-2.0
//! Entrance transition names.
//!
//! Renderers map a toast's position and animation family to a transition
//! class. Side-aware animations (`bounce`, `slide`) enter from the edge the
//! toast is anchored to; centered toasts enter vertically.

use crate::domain::{AnimationType, HorizontalAnchor, Position, VerticalEdge};

/// Prefix shared by every transition class.
pub const TRANSITION_PREFIX: &str = "mfk__";

/// Direction a side-aware animation enters from.
fn entrance_direction(position: Position) -> &'static str {
    match (position.anchor(), position.edge()) {
        (HorizontalAnchor::Left, _) => "Left",
        (HorizontalAnchor::Right, _) => "Right",
        (HorizontalAnchor::Center, VerticalEdge::Top) => "Down",
        (HorizontalAnchor::Center, VerticalEdge::Bottom) => "Up",
    }
}

/// Transition class for a toast at `position` using `animation`.
///
/// ```
/// use toast_stack::domain::{AnimationType, Position};
/// use toast_stack::transition::transition_name;
///
/// assert_eq!(
///     transition_name(Position::TopCenter, AnimationType::Bounce),
///     "mfk__bounceInDown"
/// );
/// ```
#[must_use]
pub fn transition_name(position: Position, animation: AnimationType) -> String {
    let base = match animation {
        AnimationType::Bounce => format!("bounceIn{}", entrance_direction(position)),
        AnimationType::Slide => format!("slideIn{}", entrance_direction(position)),
        AnimationType::Zoom => "zoomIn".to_string(),
        AnimationType::Fade => "fadeIn".to_string(),
    };
    format!("{TRANSITION_PREFIX}{base}")
}
