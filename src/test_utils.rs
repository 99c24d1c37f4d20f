// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions, a recording renderer and async helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::domain::{NotificationRequest, NotificationType, Position, ToastId};
use crate::options::resolve;
use crate::registry::ToastRecord;
use crate::render::{
    CloseCommand, CloseSink, Container, MountPoint, Renderer, VisualDescriptor, VisualHandle,
};
use crate::timer::TimerControl;
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex, Weak};

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;

/// Height given to toasts whose title has no explicit height.
pub const FAKE_HEIGHT: f64 = 50.0;

/// Lets spawned tasks woken by a clock advance run to their next await.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// In-memory writer whose contents can be read back.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Observable state of one fake visual handle.
#[derive(Debug, Clone, Default)]
pub struct FakeToast {
    pub title: String,
    pub kind: Option<NotificationType>,
    pub position: Option<Position>,
    pub mount_point: Option<MountPoint>,
    pub offset: f64,
    pub visible: bool,
    pub visibility_changes: Vec<bool>,
    pub timer: Option<TimerControl>,
    pub close: Option<CloseCommand>,
}

#[derive(Default)]
struct FakeLog {
    toasts: HashMap<ToastId, FakeToast>,
    mount_order: Vec<ToastId>,
    unmounts: usize,
    detaches: usize,
}

/// Renderer that records everything the engine asks of it.
#[derive(Clone, Default)]
pub struct FakeRenderer {
    log: Arc<Mutex<FakeLog>>,
    heights: Arc<HashMap<String, f64>>,
    selectors: Arc<Vec<String>>,
    close_on_mount: Arc<Vec<String>>,
    close_on_move: Arc<Vec<String>>,
}

impl FakeRenderer {
    /// Toasts titled `title` render `height` pixels tall.
    pub fn height_for(mut self, title: &str, height: f64) -> Self {
        Arc::make_mut(&mut self.heights).insert(title.to_string(), height);
        self
    }

    pub fn with_selector(mut self, selector: &str) -> Self {
        Arc::make_mut(&mut self.selectors).push(selector.to_string());
        self
    }

    /// Toasts titled `title` invoke their close command from inside `mount`.
    pub fn closing_on_mount(mut self, title: &str) -> Self {
        Arc::make_mut(&mut self.close_on_mount).push(title.to_string());
        self
    }

    /// Toasts titled `title` invoke their close command whenever they move.
    pub fn closing_on_move(mut self, title: &str) -> Self {
        Arc::make_mut(&mut self.close_on_move).push(title.to_string());
        self
    }

    pub fn toast(&self, id: &ToastId) -> Option<FakeToast> {
        self.log.lock().unwrap().toasts.get(id).cloned()
    }

    pub fn mounted_ids(&self) -> Vec<ToastId> {
        self.log.lock().unwrap().mount_order.clone()
    }

    pub fn unmounts(&self) -> usize {
        self.log.lock().unwrap().unmounts
    }

    pub fn detaches(&self) -> usize {
        self.log.lock().unwrap().detaches
    }

    fn height(&self, title: &str) -> f64 {
        self.heights.get(title).copied().unwrap_or(FAKE_HEIGHT)
    }
}

struct FakeContainer {
    mount_point: MountPoint,
    attached: bool,
    log: Arc<Mutex<FakeLog>>,
}

impl Container for FakeContainer {
    fn mount_point(&self) -> &MountPoint {
        &self.mount_point
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.log.lock().unwrap().detaches += 1;
        }
    }
}

struct FakeHandle {
    id: ToastId,
    height: Option<f64>,
    offset: f64,
    close_on_move: Option<CloseCommand>,
    log: Arc<Mutex<FakeLog>>,
}

impl FakeHandle {
    fn update(&self, change: impl FnOnce(&mut FakeToast)) {
        if let Some(toast) = self.log.lock().unwrap().toasts.get_mut(&self.id) {
            change(toast);
        }
    }
}

impl VisualHandle for FakeHandle {
    fn rendered_height(&self) -> Option<f64> {
        self.height
    }

    fn offset(&self) -> Option<f64> {
        Some(self.offset)
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.update(|toast| toast.offset = offset);
        if let Some(close) = &self.close_on_move {
            close.invoke();
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.update(|toast| {
            toast.visible = visible;
            toast.visibility_changes.push(visible);
        });
    }

    fn attach_timer(&mut self, timer: TimerControl) {
        self.update(|toast| toast.timer = Some(timer));
    }
}

impl Renderer for FakeRenderer {
    fn query(&self, selector: &str) -> Option<MountPoint> {
        self.selectors
            .iter()
            .any(|known| known == selector)
            .then(|| MountPoint::new(selector))
    }

    fn root(&self) -> MountPoint {
        MountPoint::new("body")
    }

    fn create_container(&self, mount_point: &MountPoint) -> Box<dyn Container> {
        Box::new(FakeContainer {
            mount_point: mount_point.clone(),
            attached: true,
            log: Arc::clone(&self.log),
        })
    }

    fn mount(
        &self,
        container: &mut dyn Container,
        descriptor: VisualDescriptor,
    ) -> Box<dyn VisualHandle> {
        let id = descriptor.config.id.clone();
        let title = descriptor.config.title.clone();
        {
            let mut log = self.log.lock().unwrap();
            log.mount_order.push(id.clone());
            log.toasts.insert(
                id.clone(),
                FakeToast {
                    title: title.clone(),
                    kind: Some(descriptor.config.kind),
                    position: Some(descriptor.config.position),
                    mount_point: Some(container.mount_point().clone()),
                    offset: descriptor.offset,
                    visible: descriptor.visible,
                    visibility_changes: Vec::new(),
                    timer: None,
                    close: Some(descriptor.close.clone()),
                },
            );
        }
        if self.close_on_mount.contains(&title) {
            descriptor.close.invoke();
        }
        Box::new(FakeHandle {
            id,
            height: Some(self.height(&title)),
            offset: descriptor.offset,
            close_on_move: self
                .close_on_move
                .contains(&title)
                .then(|| descriptor.close.clone()),
            log: Arc::clone(&self.log),
        })
    }

    fn unmount(&self, _container: &mut dyn Container) {
        self.log.lock().unwrap().unmounts += 1;
    }
}

struct NoopSink;

impl CloseSink for NoopSink {
    fn close(&self, _id: &ToastId, _position: Position) {}
}

/// Descriptor for a default request at `position`, wired to nothing.
pub fn descriptor(id: &str, position: Position, offset: f64) -> VisualDescriptor {
    let config = resolve(
        &NotificationRequest::new("Title", "Message").position(position),
        ToastId::from(id),
    );
    let sink: Weak<dyn CloseSink> = Weak::<NoopSink>::new();
    VisualDescriptor {
        close: CloseCommand::new(config.id.clone(), position, sink),
        transition: crate::transition::transition_name(position, config.animation),
        config,
        offset,
        visible: false,
    }
}

/// Mounted record for `id` with a fixed height and offset.
pub fn record(renderer: &FakeRenderer, id: &str, height: f64, offset: f64) -> ToastRecord {
    let container = renderer.create_container(&renderer.root());
    let handle = Box::new(FakeHandle {
        id: ToastId::from(id),
        height: Some(height),
        offset,
        close_on_move: None,
        log: Arc::clone(&renderer.log),
    });
    ToastRecord::new(ToastId::from(id), handle, container)
}
