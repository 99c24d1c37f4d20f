// SPDX-License-Identifier: MPL-2.0
//! Named notification presets.
//!
//! A [`Preset`] snapshots a fully resolved option set under a name so the
//! same toast can be reopened later. [`PresetStore`] persists presets as a
//! `presets.toml` file next to the settings file.

use crate::domain::{NotificationRequest, ResolvedOptions};
use crate::error::Result;
use crate::options::resolve_options;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PRESETS_FILE: &str = "presets.toml";
const APP_NAME: &str = "ToastStack";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub config: ResolvedOptions,
    pub created_at: DateTime<Utc>,
}

impl Preset {
    /// Resolves `request` and stores the result under `name`.
    pub fn new(name: impl Into<String>, request: &NotificationRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            config: resolve_options(request),
            created_at: Utc::now(),
        }
    }

    /// A request reproducing this preset when opened.
    #[must_use]
    pub fn request(&self) -> NotificationRequest {
        NotificationRequest::from(&self.config)
    }
}

/// Ordered collection of presets, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetStore {
    #[serde(default)]
    presets: Vec<Preset>,
}

impl PresetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn add(&mut self, preset: Preset) {
        self.presets.push(preset);
    }

    /// Removes the preset with `id`, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Preset> {
        let index = self.presets.iter().position(|preset| preset.id == id)?;
        Some(self.presets.remove(index))
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

fn get_default_presets_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(PRESETS_FILE);
        path
    })
}

pub fn load() -> Result<PresetStore> {
    if let Some(path) = get_default_presets_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(PresetStore::default())
}

pub fn save(store: &PresetStore) -> Result<()> {
    if let Some(path) = get_default_presets_path() {
        return save_to_path(store, &path);
    }
    Ok(())
}

/// Reads a preset file. Unlike settings, a malformed file is an error: the
/// caller would otherwise overwrite the user's presets on the next save.
pub fn load_from_path(path: &Path) -> Result<PresetStore> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(store: &PresetStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(store)?;
    fs::write(path, content)?;
    Ok(())
}
