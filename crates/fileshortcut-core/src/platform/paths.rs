//! Storage volume roots.
//!
//! External-storage document ids name a volume and a volume-relative path
//! (`primary:Download/a.txt`). Rebuilding a filesystem path needs the root
//! of each volume, which only the host knows.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the primary external storage root.
pub const EXTERNAL_STORAGE_ENV: &str = "EXTERNAL_STORAGE";

/// Environment variable holding the secondary storage roots (`:`-separated).
pub const SECONDARY_STORAGE_ENV: &str = "SECONDARY_STORAGE";

/// Root used when the host does not report one.
pub const DEFAULT_EXTERNAL_ROOT: &str = "/storage/emulated/0";

/// Filesystem roots of the storage volumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct StorageRoots {
    /// Root of the primary external storage volume.
    pub external_root: String,
    /// Root of the secondary storage volume (removable SD card), if known.
    pub secondary_root: Option<String>,
}

impl Default for StorageRoots {
    fn default() -> Self {
        Self {
            external_root: DEFAULT_EXTERNAL_ROOT.to_string(),
            secondary_root: None,
        }
    }
}

impl StorageRoots {
    /// Create roots from explicit values.
    pub fn new(external_root: impl Into<String>, secondary_root: Option<String>) -> Self {
        Self {
            external_root: external_root.into(),
            secondary_root,
        }
    }

    /// Read the roots from `EXTERNAL_STORAGE` and `SECONDARY_STORAGE`.
    pub fn from_env() -> Self {
        Self::from_env_values(
            env::var(EXTERNAL_STORAGE_ENV).ok(),
            env::var(SECONDARY_STORAGE_ENV).ok(),
        )
    }

    /// Build roots from raw environment values.
    ///
    /// `SECONDARY_STORAGE` may list several volumes; only the first one is
    /// used.
    pub fn from_env_values(external: Option<String>, secondary: Option<String>) -> Self {
        let external_root = external
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EXTERNAL_ROOT.to_string());

        let secondary_root = secondary.and_then(|value| {
            value
                .split(':')
                .map(str::trim)
                .find(|entry| !entry.is_empty())
                .map(str::to_string)
        });

        Self {
            external_root,
            secondary_root,
        }
    }

    /// Path of `relative` on the primary volume.
    pub fn primary_path(&self, relative: &str) -> String {
        join_root(&self.external_root, relative)
    }

    /// Path of `relative` on the secondary volume, if one is known.
    pub fn secondary_path(&self, relative: &str) -> Option<String> {
        self.secondary_root
            .as_deref()
            .map(|root| join_root(root, relative))
    }
}

fn join_root(root: &str, relative: &str) -> String {
    format!("{}/{}", root.trim_end_matches('/'), relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_path() {
        let roots = StorageRoots::new("/storage/emulated/0", None);
        assert_eq!(
            roots.primary_path("Download/a.txt"),
            "/storage/emulated/0/Download/a.txt"
        );
    }

    #[test]
    fn test_trailing_slash_on_root() {
        let roots = StorageRoots::new("/sdcard/", None);
        assert_eq!(roots.primary_path("a.txt"), "/sdcard/a.txt");
    }

    #[test]
    fn test_secondary_path_requires_root() {
        let roots = StorageRoots::default();
        assert_eq!(roots.secondary_path("a.txt"), None);
    }

    #[test]
    fn test_from_env_values_takes_first_secondary_entry() {
        let roots = StorageRoots::from_env_values(
            Some("/sdcard".to_string()),
            Some(":/storage/extSdCard:/storage/usb".to_string()),
        );
        assert_eq!(roots.external_root, "/sdcard");
        assert_eq!(roots.secondary_root.as_deref(), Some("/storage/extSdCard"));
    }

    #[test]
    fn test_from_env_values_defaults() {
        let roots = StorageRoots::from_env_values(None, Some("   ".to_string()));
        assert_eq!(roots, StorageRoots::default());
    }
}
