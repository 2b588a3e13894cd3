//! History of pinned shortcuts and re-editing.

use super::icon::ShortcutIcon;
use super::record::ShortcutId;
use crate::config::LaunchConfig;
use crate::platform::HostCapabilities;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// A pinned shortcut as reported by the launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedShortcut {
    pub id: String,
    pub label: String,
    /// Launch intent extras.
    #[serde(default)]
    pub extras: BTreeMap<String, String>,
    pub last_changed_millis: i64,
}

impl PinnedShortcut {
    pub fn last_changed(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.last_changed_millis)
    }

    pub fn path(&self) -> Option<&str> {
        self.extras.get(LaunchConfig::EXTRA_PATH).map(String::as_str)
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.extras.get(LaunchConfig::EXTRA_MIMETYPE).map(String::as_str)
    }

    /// Decoded icon; `None` if absent or undecodable.
    pub fn icon(&self) -> Option<ShortcutIcon> {
        let encoded = self.extras.get(LaunchConfig::EXTRA_ICON)?;
        match ShortcutIcon::from_base64(encoded) {
            Ok(icon) => Some(icon),
            Err(e) => {
                warn!("Ignoring undecodable icon on shortcut {}: {}", self.id, e);
                None
            }
        }
    }
}

/// Values to pre-fill when editing an existing shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: ShortcutId,
    pub path: Option<String>,
    pub name: String,
    pub mime_type: Option<String>,
    pub icon: Option<ShortcutIcon>,
}

impl From<&PinnedShortcut> for EditDraft {
    fn from(pinned: &PinnedShortcut) -> Self {
        Self {
            id: ShortcutId::from_existing(pinned.id.clone()),
            path: pinned.path().map(str::to_string),
            name: pinned.label.clone(),
            mime_type: pinned.mime_type().map(str::to_string),
            icon: pinned.icon(),
        }
    }
}

/// Pinned shortcuts, most recently changed first.
#[derive(Debug, Clone, Default)]
pub struct ShortcutHistory {
    entries: Vec<PinnedShortcut>,
}

impl ShortcutHistory {
    pub fn new(mut pinned: Vec<PinnedShortcut>) -> Self {
        pinned.sort_by(|a, b| b.last_changed_millis.cmp(&a.last_changed_millis));
        Self { entries: pinned }
    }

    pub fn entries(&self) -> &[PinnedShortcut] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&PinnedShortcut> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn edit_draft(&self, id: &str) -> Option<EditDraft> {
        self.find(id).map(EditDraft::from)
    }
}

/// Whether the history screen should be offered.
pub fn history_available(
    capabilities: &HostCapabilities,
    launched_from_launcher: bool,
    pinned_count: usize,
) -> bool {
    capabilities.native_shortcuts && launched_from_launcher && pinned_count > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcut::{IconLimits, LaunchTarget, ShortcutTarget};
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    fn pinned(id: &str, millis: i64, extras: BTreeMap<String, String>) -> PinnedShortcut {
        PinnedShortcut {
            id: id.to_string(),
            label: format!("label {}", id),
            extras,
            last_changed_millis: millis,
        }
    }

    #[test]
    fn test_sorted_newest_first() {
        let history = ShortcutHistory::new(vec![
            pinned("a", 100, BTreeMap::new()),
            pinned("b", 300, BTreeMap::new()),
            pinned("c", 200, BTreeMap::new()),
        ]);
        let ids: Vec<&str> = history.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_edit_draft_reads_launch_extras() {
        let mut png = Vec::new();
        DynamicImage::ImageRgb8(image::RgbImage::new(4, 4))
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        let icon = ShortcutIcon::from_image_bytes(&png).unwrap();
        let launch = LaunchTarget::native(
            ShortcutTarget::from_saved("/sdcard/a.pdf").unwrap(),
            "application/pdf",
            &icon,
        );

        let history = ShortcutHistory::new(vec![pinned("id_1", 1, launch.extras())]);
        let draft = history.edit_draft("id_1").unwrap();

        assert_eq!(draft.id.as_str(), "id_1");
        assert_eq!(draft.path.as_deref(), Some("/sdcard/a.pdf"));
        assert_eq!(draft.mime_type.as_deref(), Some("application/pdf"));
        assert_eq!(draft.name, "label id_1");
        assert_eq!(draft.icon, Some(icon));
    }

    #[test]
    fn test_bad_icon_fails_softly() {
        let mut extras = BTreeMap::new();
        extras.insert(LaunchConfig::EXTRA_ICON.to_string(), "%%%".to_string());
        let draft = EditDraft::from(&pinned("x", 0, extras));
        assert_eq!(draft.icon, None);
        assert_eq!(draft.path, None);
    }

    #[test]
    fn test_last_changed() {
        let entry = pinned("x", 1_700_000_000_000, BTreeMap::new());
        assert_eq!(entry.last_changed().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_history_available() {
        let native = HostCapabilities::native(true, IconLimits::default());
        let legacy = HostCapabilities::legacy(IconLimits::default());

        assert!(history_available(&native, true, 1));
        assert!(!history_available(&native, false, 1));
        assert!(!history_available(&native, true, 0));
        assert!(!history_available(&legacy, true, 3));
    }

    #[test]
    fn test_missing_id() {
        assert!(ShortcutHistory::default().edit_draft("nope").is_none());
    }
}
