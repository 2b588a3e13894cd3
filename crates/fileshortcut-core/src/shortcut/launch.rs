//! Launch targets carried by shortcuts, and how they are reopened.

use super::icon::ShortcutIcon;
use crate::config::LaunchConfig;
use crate::content::{is_local, ResolvedTarget};
use crate::error::{Result, ShortcutError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// The value a shortcut reopens.
///
/// Only built from a successful classification or from a path this crate
/// stored in an earlier shortcut; never from an unsupported reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutTarget(String);

impl ShortcutTarget {
    pub fn from_resolved(resolved: ResolvedTarget) -> Result<Self> {
        match resolved {
            ResolvedTarget::LocalPath(path) | ResolvedTarget::RemoteReference(path) => {
                Self::from_saved(path)
            }
            ResolvedTarget::Unsupported(reason) => {
                Err(ShortcutError::UnsupportedSource { reason })
            }
        }
    }

    /// Rebuild a target from a path read back out of launch extras.
    pub fn from_saved(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(ShortcutError::validation("target", "path must not be empty"));
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_local(&self) -> bool {
        is_local(Some(&self.0))
    }
}

impl TryFrom<ResolvedTarget> for ShortcutTarget {
    type Error = ShortcutError;

    fn try_from(resolved: ResolvedTarget) -> Result<Self> {
        Self::from_resolved(resolved)
    }
}

/// The launch payload stored inside a shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchTarget {
    /// Intent action; native shortcuts require one, legacy ones carry none.
    pub action: Option<String>,
    pub target: ShortcutTarget,
    pub mime_type: String,
    /// Base64 PNG, read back when the shortcut is edited.
    pub icon: Option<String>,
}

impl LaunchTarget {
    /// Launch target for a native shortcut record.
    pub fn native(
        target: ShortcutTarget,
        mime_type: impl Into<String>,
        icon: &ShortcutIcon,
    ) -> Self {
        Self {
            action: Some(LaunchConfig::ACTION_MAIN.to_string()),
            target,
            mime_type: mime_type.into(),
            icon: Some(icon.to_base64()),
        }
    }

    /// Launch target nested in a legacy install bundle.
    pub fn legacy(target: ShortcutTarget, mime_type: impl Into<String>) -> Self {
        Self {
            action: None,
            target,
            mime_type: mime_type.into(),
            icon: None,
        }
    }

    /// String extras as written into the launch intent.
    pub fn extras(&self) -> BTreeMap<String, String> {
        let mut extras = BTreeMap::new();
        extras.insert(
            LaunchConfig::EXTRA_PATH.to_string(),
            self.target.as_str().to_string(),
        );
        extras.insert(
            LaunchConfig::EXTRA_MIMETYPE.to_string(),
            self.mime_type.clone(),
        );
        if let Some(icon) = &self.icon {
            extras.insert(LaunchConfig::EXTRA_ICON.to_string(), icon.clone());
        }
        extras
    }

    /// Read a launch target back out of intent extras.
    pub fn from_extras(extras: &BTreeMap<String, String>) -> Result<Self> {
        let path = extras
            .get(LaunchConfig::EXTRA_PATH)
            .ok_or_else(|| ShortcutError::validation("launch_target", "missing path extra"))?;
        let mime_type = extras
            .get(LaunchConfig::EXTRA_MIMETYPE)
            .cloned()
            .unwrap_or_default();

        Ok(Self {
            action: None,
            target: ShortcutTarget::from_saved(path.clone())?,
            mime_type,
            icon: extras.get(LaunchConfig::EXTRA_ICON).cloned(),
        })
    }
}

/// What the launcher activity hands to the system to open a shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRequest {
    pub action: String,
    pub uri: String,
    /// Only set for `file://` URIs built from a bare path.
    pub mime_type: Option<String>,
    pub flags: u32,
}

impl ViewRequest {
    /// Build the view request for a stored path.
    ///
    /// A value with a URI scheme is opened as-is without a type. An absolute
    /// path becomes a `file://` URI typed with `mime_type`. Anything else is
    /// not launchable.
    pub fn from_launch(path: &str, mime_type: Option<&str>) -> Result<Self> {
        let (uri, mime_type) = match Url::parse(path) {
            Ok(url) => (url.to_string(), None),
            Err(_) => {
                let url = Url::from_file_path(path).map_err(|_| {
                    ShortcutError::validation(
                        "launch_target",
                        format!("'{}' is neither a URI nor an absolute path", path),
                    )
                })?;
                (
                    url.to_string(),
                    mime_type.filter(|m| !m.is_empty()).map(str::to_string),
                )
            }
        };

        Ok(Self {
            action: LaunchConfig::ACTION_VIEW.to_string(),
            uri,
            mime_type,
            flags: LaunchConfig::FLAG_ACTIVITY_NEW_TASK | LaunchConfig::FLAG_ACTIVITY_CLEAR_TOP,
        })
    }

    pub fn from_launch_target(launch: &LaunchTarget) -> Result<Self> {
        Self::from_launch(launch.target.as_str(), Some(&launch.mime_type))
    }
}
