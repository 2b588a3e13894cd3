//! Builder for configuring FileShortcutApi initialization.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CoreSettings;
use crate::content::{ContentStore, SqliteContentStore};
use crate::error::{Result, ShortcutError};
use crate::platform::{HostCapabilities, StorageRoots};
use crate::FileShortcutApi;

enum StoreSource {
    Provided(Arc<dyn ContentStore>),
    Sqlite(PathBuf),
    InMemory,
}

/// Builder for configuring FileShortcutApi initialization.
///
/// # Example
///
/// ```rust,ignore
/// let api = FileShortcutApi::builder()
///     .sqlite_store("/data/local/tmp/content.db")
///     .capabilities(HostCapabilities::legacy(IconLimits::default()))
///     .storage_roots(StorageRoots::new("/sdcard", None))
///     .build()?;
/// ```
pub struct FileShortcutApiBuilder {
    store: Option<StoreSource>,
    capabilities: Option<HostCapabilities>,
    settings: Option<CoreSettings>,
    storage_roots: Option<StorageRoots>,
}

impl FileShortcutApiBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            capabilities: None,
            settings: None,
            storage_roots: None,
        }
    }

    /// Use a host-provided content store (normally the platform resolver).
    pub fn content_store(mut self, store: Arc<dyn ContentStore>) -> Self {
        self.store = Some(StoreSource::Provided(store));
        self
    }

    /// Open (or create) a SQLite content store at `path`.
    pub fn sqlite_store(mut self, path: impl Into<PathBuf>) -> Self {
        self.store = Some(StoreSource::Sqlite(path.into()));
        self
    }

    /// Use an empty in-memory SQLite content store.
    pub fn in_memory_store(mut self) -> Self {
        self.store = Some(StoreSource::InMemory);
        self
    }

    /// What the host launcher supports. Required.
    pub fn capabilities(mut self, capabilities: HostCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Runtime settings.
    ///
    /// Default: [`CoreSettings::from_env`]
    pub fn settings(mut self, settings: CoreSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Override the storage roots from the settings.
    pub fn storage_roots(mut self, roots: StorageRoots) -> Self {
        self.storage_roots = Some(roots);
        self
    }

    /// Build the FileShortcutApi instance.
    pub fn build(self) -> Result<FileShortcutApi> {
        let capabilities = self.capabilities.ok_or_else(|| ShortcutError::Config {
            message: "Host capabilities must be set".to_string(),
        })?;
        capabilities.icon_limits.validate()?;

        let mut settings = self.settings.unwrap_or_else(CoreSettings::from_env);
        if let Some(roots) = self.storage_roots {
            settings.storage = roots;
        }

        let store: Arc<dyn ContentStore> = match self.store {
            Some(StoreSource::Provided(store)) => store,
            Some(StoreSource::Sqlite(path)) => Arc::new(SqliteContentStore::open(&path)?),
            Some(StoreSource::InMemory) => Arc::new(SqliteContentStore::open_in_memory()?),
            None => {
                return Err(ShortcutError::Config {
                    message: "A content store must be configured".to_string(),
                })
            }
        };

        tracing::debug!(
            "Building FileShortcutApi (native_shortcuts={}, pin_supported={})",
            capabilities.native_shortcuts,
            capabilities.pin_supported
        );

        Ok(FileShortcutApi::from_parts(store, capabilities, settings))
    }
}

impl Default for FileShortcutApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}
