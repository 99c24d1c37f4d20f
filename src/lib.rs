// SPDX-License-Identifier: MPL-2.0
//! `toast_stack` manages the lifecycle and on-screen stacking of toast
//! notifications.
//!
//! Toasts are opened through a [`Toaster`], stacked per screen position with
//! a fixed gap, dismissed by a pausable timer or on request, and unmounted
//! after their exit transition. Drawing is delegated to a [`render::Renderer`]
//! so the engine works with any UI layer.
//!
//! ```no_run
//! use std::sync::Arc;
//! use toast_stack::render::console::ConsoleRenderer;
//! use toast_stack::{NotificationRequest, Position, Toaster};
//!
//! # async fn demo() -> toast_stack::error::Result<()> {
//! let toaster = Toaster::new(Arc::new(ConsoleRenderer::stdout()))?;
//! toaster.success("Saved", "Your changes are stored", None);
//! let handle = toaster.open(
//!     &NotificationRequest::new("Heads up", "Sticky toast")
//!         .position(Position::BottomLeft)
//!         .duration_ms(0),
//! );
//! handle.close();
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/toast_stack/0.1.0")]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod layout;
pub mod options;
pub mod preset;
pub mod registry;
pub mod render;
pub mod timer;
pub mod toaster;
pub mod transition;

#[cfg(test)]
mod test_utils;

pub use api::{PluginHost, ToastPlugin};
pub use domain::{AnimationType, NotificationRequest, NotificationType, Position, ToastId};
pub use toaster::{ToastHandle, Toaster};
