//! File Shortcut Core - headless logic behind the File Shortcut launcher app.
//!
//! The host application picks a file through the system chooser and hands the
//! content reference to this crate, which:
//! - resolves the reference to a filesystem path (or explains why it can't)
//! - infers a MIME type and suggests an icon
//! - builds a launcher shortcut and submits it through the host, branching on
//!   what the launcher supports
//!
//! # Example
//!
//! ```rust,ignore
//! use fileshortcut_core::{ContentReference, FileShortcutApi, HostCapabilities, IconLimits};
//!
//! let api = FileShortcutApi::builder()
//!     .in_memory_store()
//!     .capabilities(HostCapabilities::native(true, IconLimits::default()))
//!     .build()?;
//!
//! let reference = ContentReference::parse(
//!     "content://com.android.externalstorage.documents/document/primary%3ADownload%2Fa.pdf",
//! )?;
//! let draft = api.prepare(&reference)?;
//! println!("{} ({})", draft.name, draft.mime_type);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod mime;
pub mod platform;
pub mod shortcut;

mod api;

// Re-export commonly used types
pub use api::{FileShortcutApiBuilder, TargetDraft};
pub use config::CoreSettings;
pub use content::{
    is_local, ContentReference, ContentResolver, ContentStore, DataQuery, ResolvedTarget,
    SqliteContentStore, UnsupportedReason,
};
pub use error::{Result, ShortcutError};
pub use mime::{bundled_icon_category, mime_type_for_path, IconCategory};
pub use platform::{HostCapabilities, StorageRoots};
pub use shortcut::{
    history_available, EditDraft, IconLimits, IconSuggestion, LaunchTarget, LegacyShortcutBundle,
    PinnedShortcut, RegistrationMode, RegistrationOutcome, ShortcutHistory, ShortcutHost,
    ShortcutIcon, ShortcutId, ShortcutRecord, ShortcutRegistrar, ShortcutRequest, ShortcutTarget,
    ViewRequest,
};

use std::sync::Arc;

/// Main entry point for the host application.
///
/// Holds the resolver (with its content store and storage roots) and the
/// registrar configured for the host's capabilities. All calls are
/// synchronous and independent of each other.
pub struct FileShortcutApi {
    resolver: ContentResolver,
    registrar: ShortcutRegistrar,
    settings: CoreSettings,
}

impl FileShortcutApi {
    /// Create a builder for FileShortcutApi.
    pub fn builder() -> FileShortcutApiBuilder {
        FileShortcutApiBuilder::new()
    }

    /// Create an API over `store` with settings read from the environment.
    pub fn new(store: Arc<dyn ContentStore>, capabilities: HostCapabilities) -> Self {
        Self::from_parts(store, capabilities, CoreSettings::from_env())
    }

    pub(crate) fn from_parts(
        store: Arc<dyn ContentStore>,
        capabilities: HostCapabilities,
        settings: CoreSettings,
    ) -> Self {
        Self {
            resolver: ContentResolver::new(store, settings.storage.clone()),
            registrar: ShortcutRegistrar::new(capabilities),
            settings,
        }
    }

    pub fn resolver(&self) -> &ContentResolver {
        &self.resolver
    }

    pub fn registrar(&self) -> &ShortcutRegistrar {
        &self.registrar
    }

    pub fn capabilities(&self) -> &HostCapabilities {
        self.registrar.capabilities()
    }

    pub fn settings(&self) -> &CoreSettings {
        &self.settings
    }
}

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
