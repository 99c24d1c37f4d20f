// SPDX-License-Identifier: MPL-2.0
//! Renderer collaborator interfaces.
//!
//! The engine never inspects markup. It asks a [`Renderer`] to create a
//! container at a [`MountPoint`], mount a visual element described by a
//! [`VisualDescriptor`] into it, and later unmount it. The resulting
//! [`VisualHandle`] is the only way the engine touches a live toast.
//!
//! # Components
//!
//! - [`Renderer`] - mount-point lookup, mount and unmount
//! - [`Container`] - the element a single toast is mounted into
//! - [`VisualHandle`] - live props (visible, offset) and rendered height
//! - [`console`] - text renderer used by the demo binary

pub mod console;

use crate::domain::{Position, ResolvedConfig, ToastId};
use crate::timer::TimerControl;
use std::fmt;
use std::sync::Weak;

/// Renderer-defined identifier of a place containers can be attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPoint(String);

impl MountPoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Receives close requests issued by rendered toasts.
pub trait CloseSink: Send + Sync {
    fn close(&self, id: &ToastId, position: Position);
}

/// Close command handed to the renderer with each toast.
///
/// Invoking it runs the same close sequence as timer expiry. It holds the
/// engine weakly, so a command outliving the engine does nothing.
#[derive(Clone)]
pub struct CloseCommand {
    id: ToastId,
    position: Position,
    sink: Weak<dyn CloseSink>,
}

impl CloseCommand {
    pub fn new(id: ToastId, position: Position, sink: Weak<dyn CloseSink>) -> Self {
        Self { id, position, sink }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn invoke(&self) {
        if let Some(sink) = self.sink.upgrade() {
            sink.close(&self.id, self.position);
        }
    }
}

impl fmt::Debug for CloseCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseCommand")
            .field("id", &self.id)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Everything a renderer needs to mount one toast.
#[derive(Debug, Clone)]
pub struct VisualDescriptor {
    pub config: ResolvedConfig,
    /// Distance from the position's anchor edge, in pixels.
    pub offset: f64,
    /// Always `false` at mount; flipped afterwards to run the entrance.
    pub visible: bool,
    pub transition: String,
    pub close: CloseCommand,
}

/// Element a single toast is mounted into.
pub trait Container: Send {
    fn mount_point(&self) -> &MountPoint;
    fn is_attached(&self) -> bool;
    /// Removes the container from its mount point. Repeated calls are no-ops.
    fn detach(&mut self);
}

/// Live handle to a mounted toast.
pub trait VisualHandle: Send {
    /// `None` until the renderer has laid the element out.
    fn rendered_height(&self) -> Option<f64>;
    /// `None` while the element is not mounted.
    fn offset(&self) -> Option<f64>;
    fn set_offset(&mut self, offset: f64);
    fn set_visible(&mut self, visible: bool);
    /// Hands over the auto-dismiss timer for pause-on-hover wiring.
    fn attach_timer(&mut self, _timer: TimerControl) {}
}

/// Rendering adapter for one target UI framework.
pub trait Renderer: Send + Sync {
    /// Resolves a container selector, `None` when nothing matches.
    fn query(&self, selector: &str) -> Option<MountPoint>;
    /// The document root, always available.
    fn root(&self) -> MountPoint;
    /// Creates a fresh container and attaches it to `mount_point`.
    fn create_container(&self, mount_point: &MountPoint) -> Box<dyn Container>;
    fn mount(
        &self,
        container: &mut dyn Container,
        descriptor: VisualDescriptor,
    ) -> Box<dyn VisualHandle>;
    /// Renders nothing into `container`; detaching is done by the caller.
    fn unmount(&self, container: &mut dyn Container);
}
