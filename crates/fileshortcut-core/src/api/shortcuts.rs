//! Shortcut creation, editing and reopening.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::mime::mime_type_for_path;
use crate::shortcut::{
    history_available, LaunchTarget, PinnedShortcut, RegistrationMode, RegistrationOutcome,
    ShortcutHistory, ShortcutHost, ShortcutIcon, ShortcutId, ShortcutRequest, ShortcutTarget,
    ViewRequest,
};
use crate::FileShortcutApi;

impl FileShortcutApi {
    /// Build a shortcut for `target` and submit it through `host`.
    ///
    /// The MIME type is inferred from the target path.
    pub fn create_shortcut(
        &self,
        host: &dyn ShortcutHost,
        mode: RegistrationMode,
        target: ShortcutTarget,
        label: &str,
        icon: ShortcutIcon,
    ) -> Result<RegistrationOutcome> {
        let request = Self::request(target, label, icon);
        self.registrar().register(host, mode, &request)
    }

    /// Re-publish the pinned shortcut `existing_id` with new values.
    pub fn update_shortcut(
        &self,
        host: &dyn ShortcutHost,
        existing_id: ShortcutId,
        target: ShortcutTarget,
        label: &str,
        icon: ShortcutIcon,
    ) -> Result<RegistrationOutcome> {
        let request = Self::request(target, label, icon);
        self.registrar().update(host, existing_id, &request)
    }

    /// Pinned shortcuts, most recently changed first.
    pub fn history(&self, pinned: Vec<PinnedShortcut>) -> ShortcutHistory {
        ShortcutHistory::new(pinned)
    }

    /// Whether to offer the history screen.
    pub fn history_available(&self, launched_from_launcher: bool, pinned_count: usize) -> bool {
        history_available(self.capabilities(), launched_from_launcher, pinned_count)
    }

    /// Turn the extras of a fired shortcut into the request that opens it.
    pub fn view_request(&self, extras: &BTreeMap<String, String>) -> Result<ViewRequest> {
        let launch = LaunchTarget::from_extras(extras)?;
        ViewRequest::from_launch_target(&launch)
    }

    fn request(target: ShortcutTarget, label: &str, icon: ShortcutIcon) -> ShortcutRequest {
        let mime_type = mime_type_for_path(Some(target.as_str()));
        ShortcutRequest::new(target, label, mime_type, icon)
    }
}
