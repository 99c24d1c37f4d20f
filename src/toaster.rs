// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Toaster`] opens toasts (deferred mount, register, reveal, start the
//! auto-dismiss timer), closes them (unregister, reflow siblings, hide,
//! unmount after a grace delay) and clears every active toast at once.
//!
//! All work for one position happens under that position's registry lock,
//! so stacking offsets are never computed against a half-updated stack.
//! Renderers are called under that lock, so a close a renderer issues
//! through its [`CloseCommand`] is queued on the runtime, never run inline.

use crate::config::defaults::{TOAST_GAP, UNMOUNT_GRACE_DELAY};
use crate::config::Config;
use crate::domain::{ActiveNotification, NotificationRequest, Position, ResolvedConfig, ToastId};
use crate::error::Result;
use crate::layout::{self, Stackable};
use crate::options::resolve;
use crate::registry::{Registry, Slot, ToastRecord};
use crate::render::{CloseCommand, CloseSink, MountPoint, Renderer, VisualDescriptor};
use crate::timer::{Callback, Timer};
use crate::transition::transition_name;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, warn};

struct Inner {
    registry: Registry,
    renderer: Arc<dyn Renderer>,
    runtime: Handle,
    mount_delay: Duration,
    /// Selector from the settings file, used when no override is set.
    configured_container: Option<String>,
    container_override: Mutex<Option<MountPoint>>,
    this: Weak<Inner>,
}

impl Inner {
    /// Mounts every toast queued at `position` up to and including `id`.
    ///
    /// Draining in queue order keeps stacking order equal to open order even
    /// if deferred mounts wake out of order.
    fn mount_pending(&self, position: Position, id: &ToastId) {
        let mut slot = self.registry.slot(position);
        for notification in slot.take_pending_through(id) {
            self.mount(&mut slot, notification);
        }
    }

    fn mount(&self, slot: &mut Slot, notification: ActiveNotification) {
        let ActiveNotification { config, created_at } = notification;
        let id = config.id.clone();
        let position = config.position;

        let offset = layout::offset_for_insert(slot.records(), TOAST_GAP);
        let mount_point = self.mount_point(&config);
        let mut container = self.renderer.create_container(&mount_point);

        let sink: Weak<dyn CloseSink> = self.this.clone();
        let descriptor = VisualDescriptor {
            transition: transition_name(position, config.animation),
            close: CloseCommand::new(id.clone(), position, sink),
            config: config.clone(),
            offset,
            visible: false,
        };
        let handle = self.renderer.mount(container.as_mut(), descriptor);
        let mut record = ToastRecord::new(id.clone(), handle, container);
        record.handle_mut().set_visible(true);

        if let Some(delay) = auto_dismiss_delay(&config) {
            let timer = Timer::since(
                self.runtime.clone(),
                delay,
                created_at,
                self.expiry_callback(id.clone(), position),
            );
            record.handle_mut().attach_timer(timer.control());
            timer.start();
            record.set_timer(timer);
        }

        debug!(%id, %position, offset, mount_point = %mount_point, "toast mounted");
        slot.insert(record);
    }

    fn expiry_callback(&self, id: ToastId, position: Position) -> Callback {
        let this = self.this.clone();
        Arc::new(move || {
            if let Some(inner) = this.upgrade() {
                debug!(%id, %position, "toast expired");
                inner.close_toast(&id, position);
            }
        })
    }

    /// Requested container, then the global default, then the document root.
    fn mount_point(&self, config: &ResolvedConfig) -> MountPoint {
        if let Some(mount_point) = self.query(&config.container) {
            return mount_point;
        }
        let overridden = self
            .container_override
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(mount_point) = overridden {
            return mount_point;
        }
        if let Some(mount_point) = self
            .configured_container
            .as_deref()
            .and_then(|selector| self.query(selector))
        {
            return mount_point;
        }
        self.renderer.root()
    }

    fn query(&self, selector: &str) -> Option<MountPoint> {
        if selector.is_empty() {
            return None;
        }
        let found = self.renderer.query(selector);
        if found.is_none() {
            warn!(selector, "toast container not found, falling back");
        }
        found
    }

    fn close_toast(&self, id: &ToastId, position: Position) {
        let mut slot = self.registry.slot(position);
        if slot.cancel_pending(id) {
            debug!(%id, %position, "toast closed before mount");
            return;
        }
        let Some((index, mut record)) = slot.remove_by_id(id) else {
            return;
        };
        let height = record.rendered_height().unwrap_or(0.0);
        layout::reflow_after_remove(index, slot.records_mut(), height, TOAST_GAP);
        drop(slot);

        record.handle_mut().set_visible(false);
        debug!(%id, %position, "toast closing");

        let renderer = Arc::clone(&self.renderer);
        self.runtime.spawn(async move {
            tokio::time::sleep(UNMOUNT_GRACE_DELAY).await;
            unmount(renderer.as_ref(), record);
        });
    }

    fn clear_all(&self) {
        for position in Position::ALL {
            let (pending, mounted) = {
                let slot = self.registry.slot(position);
                (slot.pending_ids(), slot.ids())
            };
            for id in pending.iter().chain(&mounted) {
                self.close_toast(id, position);
            }
        }
    }
}

impl CloseSink for Inner {
    fn close(&self, id: &ToastId, position: Position) {
        let Some(inner) = self.this.upgrade() else {
            return;
        };
        let id = id.clone();
        self.runtime.spawn(async move {
            inner.close_toast(&id, position);
        });
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        for position in Position::ALL {
            let records = self.registry.slot(position).take_records();
            for record in records {
                unmount(self.renderer.as_ref(), record);
            }
        }
    }
}

fn auto_dismiss_delay(config: &ResolvedConfig) -> Option<Duration> {
    u64::try_from(config.duration)
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

fn unmount(renderer: &dyn Renderer, mut record: ToastRecord) {
    renderer.unmount(record.container_mut());
    record.container_mut().detach();
    debug!(id = %record.id(), "toast unmounted");
}

/// Entry point for opening and closing toasts.
///
/// Cheap to clone; clones share the same registry. Bound to the tokio runtime
/// it was created on, where deferred mounts, timers and unmounts run.
#[derive(Clone)]
pub struct Toaster {
    inner: Arc<Inner>,
}

impl Toaster {
    /// Creates a toaster with default settings on the current runtime.
    pub fn new(renderer: Arc<dyn Renderer>) -> Result<Self> {
        Self::with_config(renderer, &Config::default())
    }

    /// Creates a toaster on the current runtime using `config`.
    pub fn with_config(renderer: Arc<dyn Renderer>, config: &Config) -> Result<Self> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_runtime(renderer, config, runtime))
    }

    #[must_use]
    pub fn with_runtime(renderer: Arc<dyn Renderer>, config: &Config, runtime: Handle) -> Self {
        let mount_delay = config.mount_delay();
        let configured_container = config.default_container().map(str::to_string);
        Self {
            inner: Arc::new_cyclic(|this| Inner {
                registry: Registry::new(),
                renderer,
                runtime,
                mount_delay,
                configured_container,
                container_override: Mutex::new(None),
                this: this.clone(),
            }),
        }
    }

    /// Opens a toast. Mounting happens on a short deferred tick.
    pub fn open(&self, request: &NotificationRequest) -> ToastHandle {
        let id = ToastId::new();
        let config = resolve(request, id.clone());
        let position = config.position;
        debug!(%id, %position, kind = %config.kind, duration = config.duration, "toast opened");

        self.inner
            .registry
            .slot(position)
            .add_pending(ActiveNotification::new(config));

        let inner = Arc::clone(&self.inner);
        let pending = id.clone();
        self.inner.runtime.spawn(async move {
            tokio::time::sleep(inner.mount_delay).await;
            inner.mount_pending(position, &pending);
        });

        ToastHandle {
            id,
            position,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Closes a toast. Unknown or already closed ids are ignored.
    pub fn close(&self, id: &ToastId, position: Position) {
        self.inner.close_toast(id, position);
    }

    /// Closes every active toast, including ones not mounted yet.
    pub fn clear_all(&self) {
        self.inner.clear_all();
    }

    /// Overrides the default mount point for toasts naming no container.
    pub fn set_default_container(&self, mount_point: Option<MountPoint>) {
        *self
            .inner
            .container_override
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = mount_point;
    }

    /// Mounted toast ids at `position`, in stacking order.
    #[must_use]
    pub fn ids(&self, position: Position) -> Vec<ToastId> {
        self.inner.registry.ids(position)
    }

    /// Number of mounted toasts across all positions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.inner.registry.len()
    }

    #[must_use]
    pub fn is_active(&self, id: &ToastId) -> bool {
        self.inner.registry.contains(id)
    }
}

impl std::fmt::Debug for Toaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toaster")
            .field("registry", &self.inner.registry)
            .field("mount_delay", &self.inner.mount_delay)
            .finish_non_exhaustive()
    }
}

/// Returned by [`Toaster::open`]; closes the toast it was issued for.
#[derive(Clone)]
pub struct ToastHandle {
    id: ToastId,
    position: Position,
    inner: Weak<Inner>,
}

impl ToastHandle {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Runs the close sequence. Safe to call repeatedly.
    pub fn close(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.close_toast(&self.id, self.position);
        }
    }
}

impl std::fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastHandle")
            .field("id", &self.id)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
