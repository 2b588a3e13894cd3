//! MIME type inference and bundled icon families.

use crate::config::MimeConfig;
use serde::{Deserialize, Serialize};

/// Infer a MIME type from the extension of `path`.
///
/// The extension is the text after the last `.` anywhere in the string,
/// lower-cased. No dot, or a dot at index 0, yields
/// `application/octet-stream`, as does an unknown extension.
pub fn mime_type_for_path(path: Option<&str>) -> String {
    let Some(path) = path else {
        return MimeConfig::UNKNOWN_MIME_TYPE.to_string();
    };

    match path.rfind('.') {
        Some(dot) if dot > 0 => {
            let extension = path[dot + 1..].to_ascii_lowercase();
            mime_guess::from_ext(&extension)
                .first_raw()
                .unwrap_or(MimeConfig::UNKNOWN_MIME_TYPE)
                .to_string()
        }
        _ => MimeConfig::UNKNOWN_MIME_TYPE.to_string(),
    }
}

/// Icon families shipped with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    Text,
    Audio,
    Pdf,
    Document,
    Spreadsheet,
    Presentation,
}

impl IconCategory {
    /// Drawable resource name of the bundled icon.
    pub fn resource_name(&self) -> &'static str {
        match self {
            IconCategory::Text => "ic_text",
            IconCategory::Audio => "ic_audio",
            IconCategory::Pdf => "ic_pdf",
            IconCategory::Document => "ic_document",
            IconCategory::Spreadsheet => "ic_spreadsheet",
            IconCategory::Presentation => "ic_presentation",
        }
    }
}

enum Matcher {
    Prefix(&'static str),
    OneOf(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, mime_type: &str) -> bool {
        match self {
            Matcher::Prefix(prefix) => mime_type.starts_with(prefix),
            Matcher::OneOf(set) => set.contains(&mime_type),
        }
    }
}

/// Checked in order; the first match wins.
const ICON_RULES: &[(Matcher, IconCategory)] = &[
    (Matcher::Prefix("text/"), IconCategory::Text),
    (Matcher::Prefix("audio/"), IconCategory::Audio),
    (Matcher::OneOf(MimeConfig::PDF), IconCategory::Pdf),
    (Matcher::OneOf(MimeConfig::DOCUMENT), IconCategory::Document),
    (Matcher::OneOf(MimeConfig::SPREADSHEET), IconCategory::Spreadsheet),
    (Matcher::OneOf(MimeConfig::PRESENTATION), IconCategory::Presentation),
];

/// Pick the bundled icon family for a MIME type, if any.
pub fn bundled_icon_category(mime_type: &str) -> Option<IconCategory> {
    classify(ICON_RULES, mime_type)
}

fn classify(rules: &[(Matcher, IconCategory)], mime_type: &str) -> Option<IconCategory> {
    rules
        .iter()
        .find(|(matcher, _)| matcher.matches(mime_type))
        .map(|(_, category)| *category)
}
