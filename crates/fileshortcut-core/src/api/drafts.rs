//! Resolving picked content into a shortcut draft.

use serde::Serialize;
use tracing::debug;

use crate::content::{is_local, ContentReference, ResolvedTarget};
use crate::error::Result;
use crate::mime::mime_type_for_path;
use crate::shortcut::{suggest_icon, IconSuggestion, ShortcutTarget};
use crate::FileShortcutApi;

/// Pre-filled shortcut fields shown to the user after picking a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDraft {
    /// The picked reference, as received.
    pub reference: String,
    pub target: ShortcutTarget,
    /// Suggested label: the file name for local paths, the value otherwise.
    pub name: String,
    pub mime_type: String,
    pub icon: IconSuggestion,
}

impl FileShortcutApi {
    /// Classify and resolve a content reference.
    pub fn resolve(&self, reference: &ContentReference) -> Result<ResolvedTarget> {
        self.resolver().resolve(reference)
    }

    /// Resolve a picked reference and derive the editable shortcut fields.
    ///
    /// Unsupported references become [`crate::ShortcutError::UnsupportedSource`].
    pub fn prepare(&self, reference: &ContentReference) -> Result<TargetDraft> {
        let resolved = self.resolver().resolve(reference)?.into_result()?;
        let target = ShortcutTarget::from_resolved(resolved)?;

        let path = target.as_str();
        let mime_type = mime_type_for_path(Some(path));
        let name = if is_local(Some(path)) {
            file_name(path).to_string()
        } else {
            path.to_string()
        };
        let icon = suggest_icon(&mime_type, reference.as_str(), Some(path));

        debug!("Prepared draft '{}' ({}) for {}", name, mime_type, reference);

        Ok(TargetDraft {
            reference: reference.as_str().to_string(),
            target,
            name,
            mime_type,
            icon,
        })
    }

    /// Same as [`Self::prepare`] for a stream shared from another app.
    pub fn prepare_shared(&self, uri: &str) -> Result<TargetDraft> {
        let reference = ContentReference::parse(uri)?;
        self.prepare(&reference)
    }
}

fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((_, name)) => name,
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/sdcard/Download/a.txt"), "a.txt");
        assert_eq!(file_name("/sdcard/Download/"), "Download");
        assert_eq!(file_name("12345"), "12345");
    }
}
