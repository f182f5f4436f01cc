//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `WIDGETS_DATA_DIR`, `WIDGETS_QUOTA_BYTES`, `WIDGETS_DEBOUNCE_MS`.
//! 2. **Config file**: `widgets.toml` in the OS config directory (via `directories`).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Directory holding the widget files |
//! | `quota_bytes` | `5242880` | Maximum serialized size of the collection |
//! | `debounce_ms` | `500` | Quiet window before an edit is written |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::store::widget_store::{StoreOptions, DEFAULT_QUOTA_BYTES};

pub const CONFIG_FILE_NAME: &str = "widgets.toml";

/// Configuration for the widget store, stored in `widgets.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WidgetsConfig {
    /// Directory holding the widget files. When absent, the OS data
    /// directory is used.
    #[config(env = "WIDGETS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Maximum serialized size of the widget collection, in bytes.
    #[config(default = 5242880, env = "WIDGETS_QUOTA_BYTES")]
    pub quota_bytes: usize,

    /// Quiet window in milliseconds before a debounced edit is written.
    #[config(default = 500, env = "WIDGETS_DEBOUNCE_MS")]
    pub debounce_ms: u64,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            quota_bytes: DEFAULT_QUOTA_BYTES,
            debounce_ms: 500,
        }
    }
}

impl WidgetsConfig {
    /// Load from the environment layered over `file` (if it exists) and
    /// the compiled defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            quota_bytes: self.quota_bytes,
            ..Default::default()
        }
    }
}
