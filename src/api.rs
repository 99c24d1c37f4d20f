// SPDX-License-Identifier: MPL-2.0
//! Convenience surface over [`Toaster::open`].
//!
//! `success`, `error`, `info` and `warning` open a toast with the type filled
//! in. [`ToastPlugin`] exposes `open` to a host application under a global
//! property name and an injection key.

use crate::domain::{NotificationRequest, NotificationType};
use crate::toaster::{ToastHandle, Toaster};
use std::sync::Arc;

/// Name of the global property the plugin registers.
pub const GLOBAL_PROPERTY: &str = "$mfkToast";

/// Key the plugin provides the notifier under.
pub const INJECTION_KEY: &str = "mfkToast";

/// Shareable function opening a toast.
pub type Notifier = Arc<dyn Fn(&NotificationRequest) -> ToastHandle + Send + Sync>;

impl Toaster {
    /// Opens a success toast. Fields set in `options` win over the defaults,
    /// including the type.
    pub fn success(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Option<NotificationRequest>,
    ) -> ToastHandle {
        self.open_typed(NotificationType::Success, title.into(), message.into(), options)
    }

    pub fn error(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Option<NotificationRequest>,
    ) -> ToastHandle {
        self.open_typed(NotificationType::Error, title.into(), message.into(), options)
    }

    pub fn info(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Option<NotificationRequest>,
    ) -> ToastHandle {
        self.open_typed(NotificationType::Info, title.into(), message.into(), options)
    }

    pub fn warning(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Option<NotificationRequest>,
    ) -> ToastHandle {
        self.open_typed(NotificationType::Warning, title.into(), message.into(), options)
    }

    fn open_typed(
        &self,
        kind: NotificationType,
        title: String,
        message: String,
        options: Option<NotificationRequest>,
    ) -> ToastHandle {
        let options = options.unwrap_or_default();
        let request = NotificationRequest {
            title,
            message,
            kind: options.kind.or(Some(kind)),
            ..options
        };
        self.open(&request)
    }

    /// Closes every active toast. Same as [`Toaster::clear_all`].
    pub fn clear(&self) {
        self.clear_all();
    }

    /// [`Toaster::open`] as a standalone function.
    #[must_use]
    pub fn notifier(&self) -> Notifier {
        let toaster = self.clone();
        Arc::new(move |request: &NotificationRequest| toaster.open(request))
    }
}

/// Application the plugin can be installed into.
pub trait PluginHost {
    /// Makes `notifier` reachable from every component as `name`.
    fn register_global(&mut self, name: &str, notifier: Notifier);
    /// Makes `notifier` injectable under `key`.
    fn provide(&mut self, key: &str, notifier: Notifier);
}

/// Installs a [`Toaster`] into a [`PluginHost`].
#[derive(Debug, Clone)]
pub struct ToastPlugin {
    toaster: Toaster,
}

impl ToastPlugin {
    #[must_use]
    pub fn new(toaster: Toaster) -> Self {
        Self { toaster }
    }

    pub fn install(&self, host: &mut dyn PluginHost) {
        host.register_global(GLOBAL_PROPERTY, self.toaster.notifier());
        host.provide(INJECTION_KEY, self.toaster.notifier());
        tracing::debug!(
            global = GLOBAL_PROPERTY,
            key = INJECTION_KEY,
            "toast plugin installed"
        );
    }
}
