//! Host capability description.

use crate::shortcut::IconLimits;
use serde::{Deserialize, Serialize};

/// What the host launcher platform can do.
///
/// The host fills this in once (typically from its SDK level and the
/// shortcut service); the registrar branches on it instead of on version
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HostCapabilities {
    /// Native shortcut APIs (shortcut records built by the platform) exist.
    pub native_shortcuts: bool,
    /// The launcher accepts pin requests.
    pub pin_supported: bool,
    /// Largest icon the launcher accepts.
    pub icon_limits: IconLimits,
}

impl HostCapabilities {
    /// A host with pinned-shortcut support.
    pub fn native(pin_supported: bool, icon_limits: IconLimits) -> Self {
        Self {
            native_shortcuts: true,
            pin_supported,
            icon_limits,
        }
    }

    /// A host that only understands the install-shortcut broadcast.
    pub fn legacy(icon_limits: IconLimits) -> Self {
        Self {
            native_shortcuts: false,
            pin_supported: false,
            icon_limits,
        }
    }
}
