//! # Data Directory Resolution
//!
//! Widgets live in a single directory holding two files, one per storage key:
//!
//! ```text
//! <data_dir>/
//!   text-widgets.json         # primary collection
//!   text-widgets-backup.json  # backup record written before every save
//! ```
//!
//! The directory is resolved during [`initialize`]:
//! 1. If `data_override` is provided (the CLI `--data` flag) → use it directly.
//! 2. If the configuration names a `data_dir` (file or `WIDGETS_DATA_DIR`) → use that.
//! 3. Otherwise → the OS-appropriate data directory (via the `directories` crate).
//!
//! Configuration itself is read from `widgets.toml` in the OS config directory,
//! with environment variables layered on top. A broken config file is logged
//! and replaced by the defaults; it never prevents the store from opening.

use crate::api::WidgetsApi;
use crate::config::{WidgetsConfig, CONFIG_FILE_NAME};
use crate::error::{Result, StoreError};
use crate::store::fs_backend::FsBackend;
use crate::store::widget_store::WidgetStore;
use crate::store::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct WidgetsContext {
    pub api: WidgetsApi<FileStore>,
    pub config: WidgetsConfig,
    pub data_dir: PathBuf,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "widgets", "widgets")
}

/// Path of the user config file, if the OS exposes a config directory.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load configuration from the user config file and environment.
pub fn load_config() -> WidgetsConfig {
    let file = config_file();
    match WidgetsConfig::load(file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable configuration");
            WidgetsConfig::default()
        }
    }
}

/// Resolve the data directory, highest priority first.
pub fn resolve_data_dir(
    data_override: Option<PathBuf>,
    config: &WidgetsConfig,
) -> Result<PathBuf> {
    if let Some(path) = data_override.or_else(|| config.data_dir.clone()) {
        return Ok(path);
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            StoreError::StorageUnavailable("could not determine a data directory".into())
        })
}

/// Initialize the widget context from the user's configuration.
pub fn initialize(data_override: Option<PathBuf>) -> Result<WidgetsContext> {
    initialize_with(load_config(), data_override)
}

/// Initialize the widget context from an explicit configuration.
pub fn initialize_with(
    config: WidgetsConfig,
    data_override: Option<PathBuf>,
) -> Result<WidgetsContext> {
    let data_dir = resolve_data_dir(data_override, &config)?;
    debug!(data_dir = %data_dir.display(), "opening widget store");

    let store = WidgetStore::with_options(FsBackend::new(data_dir.clone()), config.store_options());
    let api = WidgetsApi::new(store).with_debounce(config.debounce());

    Ok(WidgetsContext {
        api,
        config,
        data_dir,
    })
}
