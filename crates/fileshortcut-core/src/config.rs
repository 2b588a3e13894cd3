//! Centralized configuration for the file shortcut core.
//!
//! Constant tables for provider authorities, launch extras and MIME sets,
//! plus [`CoreSettings`], the runtime settings a host hands to the core.

use crate::error::{Result, ShortcutError};
use crate::platform::StorageRoots;
use serde::{Deserialize, Serialize};

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    /// Prefix of generated shortcut identifiers.
    pub const SHORTCUT_ID_PREFIX: &'static str = "id_";
}

/// Content provider authorities and fixed content addresses.
pub struct ProviderConfig;

impl ProviderConfig {
    pub const EXTERNAL_STORAGE_DOCUMENTS: &'static str = "com.android.externalstorage.documents";
    pub const DOWNLOADS_DOCUMENTS: &'static str = "com.android.providers.downloads.documents";
    pub const MEDIA_DOCUMENTS: &'static str = "com.android.providers.media.documents";
    pub const GOOGLE_DRIVE_STORAGE: &'static str = "com.google.android.apps.docs.storage";
    pub const GOOGLE_PHOTOS_CONTENT: &'static str = "com.google.android.apps.photos.content";

    /// Volume prefix of the primary external storage document ids.
    pub const PRIMARY_VOLUME: &'static str = "primary";

    pub const PUBLIC_DOWNLOADS_URI: &'static str = "content://downloads/public_downloads";
    pub const IMAGES_EXTERNAL_URI: &'static str = "content://media/external/images/media";
    pub const VIDEO_EXTERNAL_URI: &'static str = "content://media/external/video/media";
    pub const AUDIO_EXTERNAL_URI: &'static str = "content://media/external/audio/media";

    /// The well-known path column queried by the generic lookup.
    pub const DATA_COLUMN: &'static str = "_data";
    /// Row id column used as the lookup filter.
    pub const ID_COLUMN: &'static str = "_id";
}

/// Intent actions and extras used by shortcuts.
pub struct LaunchConfig;

impl LaunchConfig {
    pub const EXTRA_PATH: &'static str = "com.nagopy.android.fileshortcut.EXTRA_PATH";
    pub const EXTRA_MIMETYPE: &'static str = "com.nagopy.android.fileshortcut.EXTRA_MIMETYPE";
    pub const EXTRA_ICON: &'static str = "com.nagopy.android.fileshortcut.EXTRA_ICON";

    pub const ACTION_MAIN: &'static str = "android.intent.action.MAIN";
    pub const ACTION_VIEW: &'static str = "android.intent.action.VIEW";
    pub const ACTION_CREATE_SHORTCUT: &'static str = "android.intent.action.CREATE_SHORTCUT";
    pub const ACTION_INSTALL_SHORTCUT: &'static str =
        "com.android.launcher.action.INSTALL_SHORTCUT";

    pub const EXTRA_SHORTCUT_INTENT: &'static str = "android.intent.extra.shortcut.INTENT";
    pub const EXTRA_SHORTCUT_ICON: &'static str = "android.intent.extra.shortcut.ICON";
    pub const EXTRA_SHORTCUT_NAME: &'static str = "android.intent.extra.shortcut.NAME";

    pub const FLAG_ACTIVITY_NEW_TASK: u32 = 0x1000_0000;
    pub const FLAG_ACTIVITY_CLEAR_TOP: u32 = 0x0400_0000;
}

/// MIME type tables.
pub struct MimeConfig;

impl MimeConfig {
    pub const UNKNOWN_MIME_TYPE: &'static str = "application/octet-stream";

    pub const PDF: &'static [&'static str] = &["application/pdf", "application/x-pdf"];

    pub const DOCUMENT: &'static [&'static str] = &[
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "application/vnd.ms-word.document.macroEnabled.12",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.template",
        "application/vnd.ms-word.template.macroEnabled.12",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ];

    pub const SPREADSHEET: &'static [&'static str] = &[
        "application/xlc",
        "application/msexcel",
        "application/x-msexcel",
        "application/vnd.ms-excel.sheet.macroEnabled.12",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.template",
        "application/vnd.ms-excel.template.macroEnabled.12",
        "application/vnd.ms-excel.sheet.binary.macroEnabled.12",
        "application/vnd.ms-excel.addin.macroEnabled.12",
    ];

    pub const PRESENTATION: &'static [&'static str] = &[
        "application/pot",
        "application/powerpoint",
        "application/pps",
        "application/ppt",
        "application/mspowerpoint",
        "application/vnd.ms-powerpoint",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "application/vnd.ms-powerpoint.presentation.macroEnabled.12",
        "application/vnd.openxmlformats-officedocument.presentationml.slideshow",
        "application/vnd.ms-powerpoint.slideshow.macroEnabled.12",
        "application/vnd.openxmlformats-officedocument.presentationml.template",
        "application/vnd.ms-powerpoint.template.macroEnabled.12",
        "application/vnd.ms-powerpoint.addin.macroEnabled.12",
        "application/vnd.openxmlformats-officedocument.presentationml.slide",
        "application/vnd.ms-powerpoint.slide.macroEnabled.12",
    ];
}

/// Icon defaults.
pub struct IconConfig;

impl IconConfig {
    /// Launcher icon bound used when the host does not report one (xxxhdpi).
    pub const DEFAULT_MAX_EDGE: u32 = 192;
}

/// Runtime settings supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct CoreSettings {
    /// Storage roots used to rebuild external-storage document paths.
    pub storage: StorageRoots,
}

impl CoreSettings {
    /// Build settings from the process environment.
    pub fn from_env() -> Self {
        Self {
            storage: StorageRoots::from_env(),
        }
    }

    /// Parse settings from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: CoreSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.storage.external_root.trim().is_empty() {
            return Err(ShortcutError::Config {
                message: "storage.external_root must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
