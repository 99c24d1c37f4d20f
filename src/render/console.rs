// SPDX-License-Identifier: MPL-2.0
//! Line-oriented text renderer.
//!
//! Prints one line per lifecycle event (mount, show, move, hide, unmount).
//! Heights are derived from the text so stacking behaves like a real layout.

use super::{Container, MountPoint, Renderer, VisualDescriptor, VisualHandle};
use crate::domain::{Position, ToastId};
use crate::timer::TimerControl;
use std::collections::HashSet;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Vertical padding around a toast's text.
const PADDING_PX: f64 = 16.0;
/// Height of one rendered text line.
const LINE_PX: f64 = 20.0;

const ROOT: &str = "body";

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

fn emit(sink: &Sink, line: std::fmt::Arguments<'_>) {
    let mut out = sink.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(err) = writeln!(out, "{line}") {
        tracing::debug!(%err, "console renderer write failed");
    }
}

/// Height a toast with `title` and `message` occupies.
#[must_use]
pub fn text_height(title: &str, message: &str) -> f64 {
    let title_lines = usize::from(!title.is_empty());
    let message_lines = message.lines().count().max(1);
    #[allow(clippy::cast_precision_loss)]
    let lines = (title_lines + message_lines) as f64;
    PADDING_PX + LINE_PX * lines
}

/// Renderer writing lifecycle events as text lines.
pub struct ConsoleRenderer {
    sink: Sink,
    selectors: HashSet<String>,
}

impl ConsoleRenderer {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(out))),
            selectors: HashSet::new(),
        }
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Registers a selector that [`Renderer::query`] will resolve.
    #[must_use]
    pub fn with_mount_point(mut self, selector: impl Into<String>) -> Self {
        self.selectors.insert(selector.into());
        self
    }
}

impl std::fmt::Debug for ConsoleRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleRenderer")
            .field("selectors", &self.selectors)
            .finish_non_exhaustive()
    }
}

struct ConsoleContainer {
    mount_point: MountPoint,
    attached: bool,
}

impl Container for ConsoleContainer {
    fn mount_point(&self) -> &MountPoint {
        &self.mount_point
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn detach(&mut self) {
        self.attached = false;
    }
}

struct ConsoleHandle {
    sink: Sink,
    id: ToastId,
    position: Position,
    height: f64,
    offset: f64,
    timer: Option<TimerControl>,
}

impl VisualHandle for ConsoleHandle {
    fn rendered_height(&self) -> Option<f64> {
        Some(self.height)
    }

    fn offset(&self) -> Option<f64> {
        Some(self.offset)
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
        emit(
            &self.sink,
            format_args!("[{}] move {} to {}px", self.position, self.id, offset),
        );
    }

    fn set_visible(&mut self, visible: bool) {
        if visible {
            emit(&self.sink, format_args!("[{}] show {}", self.position, self.id));
            return;
        }
        match self.timer.as_ref().and_then(TimerControl::progress) {
            Some(progress) => emit(
                &self.sink,
                format_args!("[{}] hide {} at {progress}%", self.position, self.id),
            ),
            None => emit(&self.sink, format_args!("[{}] hide {}", self.position, self.id)),
        }
    }

    fn attach_timer(&mut self, timer: TimerControl) {
        self.timer = Some(timer);
    }
}

impl Renderer for ConsoleRenderer {
    fn query(&self, selector: &str) -> Option<MountPoint> {
        self.selectors
            .contains(selector)
            .then(|| MountPoint::new(selector))
    }

    fn root(&self) -> MountPoint {
        MountPoint::new(ROOT)
    }

    fn create_container(&self, mount_point: &MountPoint) -> Box<dyn Container> {
        Box::new(ConsoleContainer {
            mount_point: mount_point.clone(),
            attached: true,
        })
    }

    fn mount(
        &self,
        container: &mut dyn Container,
        descriptor: VisualDescriptor,
    ) -> Box<dyn VisualHandle> {
        let config = &descriptor.config;
        emit(
            &self.sink,
            format_args!(
                "[{}] mount {} {} \"{}: {}\" at {}px in {} ({})",
                config.position,
                config.id,
                config.kind,
                config.title,
                config.message,
                descriptor.offset,
                container.mount_point(),
                descriptor.transition,
            ),
        );
        Box::new(ConsoleHandle {
            sink: Arc::clone(&self.sink),
            id: config.id.clone(),
            position: config.position,
            height: text_height(&config.title, &config.message),
            offset: descriptor.offset,
            timer: None,
        })
    }

    fn unmount(&self, container: &mut dyn Container) {
        emit(
            &self.sink,
            format_args!("unmount container in {}", container.mount_point()),
        );
    }
}
