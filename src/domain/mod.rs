// SPDX-License-Identifier: MPL-2.0
//! Domain types shared by every layer of the toast engine.

mod kinds;
mod notification;

pub use kinds::{
    AnimationType, HorizontalAnchor, NotificationType, Position, UnknownToken, VerticalEdge,
};
pub use notification::{
    ActiveNotification, NotificationRequest, ResolvedConfig, ResolvedOptions, ToastId,
};
