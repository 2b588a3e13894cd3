//! Launcher shortcut building and registration.
//!
//! - [`icon`]: icon rasters and the post-pick icon suggestion
//! - [`launch`]: the launch payload and the view request that reopens it
//! - [`record`]: native records and legacy install bundles
//! - [`registrar`]: capability-branched submission to the host
//! - [`history`]: pinned shortcut history and re-editing

pub mod history;
pub mod icon;
pub mod launch;
pub mod record;
pub mod registrar;

pub use history::{history_available, EditDraft, PinnedShortcut, ShortcutHistory};
pub use icon::{suggest_icon, IconLimits, IconSuggestion, ShortcutIcon};
pub use launch::{LaunchTarget, ShortcutTarget, ViewRequest};
pub use record::{LegacyShortcutBundle, ShortcutId, ShortcutRecord};
pub use registrar::{
    RegistrationMode, RegistrationOutcome, ShortcutHost, ShortcutRegistrar, ShortcutRequest,
};
