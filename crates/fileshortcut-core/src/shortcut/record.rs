//! Shortcut records handed to the launcher.

use super::icon::ShortcutIcon;
use super::launch::LaunchTarget;
use crate::config::{AppConfig, LaunchConfig};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a pinned shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutId(String);

impl ShortcutId {
    /// A fresh id: prefix, creation time in milliseconds, random suffix.
    pub fn generate() -> Self {
        Self(format!(
            "{}{}_{:04x}",
            AppConfig::SHORTCUT_ID_PREFIX,
            Utc::now().timestamp_millis(),
            rand::random::<u16>()
        ))
    }

    /// Wrap an id the launcher already knows about.
    pub fn from_existing(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A native shortcut ready for the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutRecord {
    pub id: ShortcutId,
    pub label: String,
    pub launch: LaunchTarget,
    /// Already scaled to the host's icon bound.
    pub icon: ShortcutIcon,
}

/// The install payload used by launchers without native shortcut support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyShortcutBundle {
    pub name: String,
    pub launch: LaunchTarget,
    pub icon: ShortcutIcon,
}

impl LegacyShortcutBundle {
    /// Extra keys the bundle is written under.
    pub const NAME_KEY: &'static str = LaunchConfig::EXTRA_SHORTCUT_NAME;
    pub const INTENT_KEY: &'static str = LaunchConfig::EXTRA_SHORTCUT_INTENT;
    pub const ICON_KEY: &'static str = LaunchConfig::EXTRA_SHORTCUT_ICON;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_distinct() {
        let a = ShortcutId::generate();
        let b = ShortcutId::generate();
        assert!(a.as_str().starts_with("id_"));
        // Same millisecond is likely here; the random suffix keeps them apart
        // except in the 1 in 65536 case, so retry once.
        if a == b {
            assert_ne!(a, ShortcutId::generate());
        } else {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_existing_id_display() {
        let id = ShortcutId::from_existing("id_1700000000000");
        assert_eq!(id.to_string(), "id_1700000000000");
    }
}
