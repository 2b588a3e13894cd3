//! Content references as handed over by the system picker.

use crate::error::{Result, ShortcutError};
use std::fmt;
use url::Url;

/// URI scheme of a content reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    /// `file:`, a direct filesystem reference.
    File,
    /// `content:`, resolved through a content provider.
    Content,
    /// Anything else (`http`, `https`, vendor schemes, ...).
    Other(String),
}

impl Scheme {
    /// Parse a scheme name, case-insensitively.
    pub fn parse(scheme: &str) -> Self {
        if scheme.eq_ignore_ascii_case("file") {
            Scheme::File
        } else if scheme.eq_ignore_ascii_case("content") {
            Scheme::Content
        } else {
            Scheme::Other(scheme.to_ascii_lowercase())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Scheme::File => "file",
            Scheme::Content => "content",
            Scheme::Other(other) => other,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque, provider-scoped reference to a piece of content.
///
/// Path and segments are stored percent-decoded; `uri` keeps the form the
/// provider expects to be queried with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReference {
    uri: String,
    scheme: Scheme,
    authority: String,
    path: String,
    segments: Vec<String>,
}

impl ContentReference {
    /// Parse a URI string such as
    /// `content://com.android.externalstorage.documents/document/primary%3Aa.txt`.
    pub fn parse(uri: &str) -> Result<Self> {
        let url = Url::parse(uri).map_err(|e| ShortcutError::InvalidReference {
            reference: uri.to_string(),
            message: e.to_string(),
        })?;

        // `Url` collapses dot segments; the path is taken from the raw text.
        let raw = raw_path(uri);
        let path = decode(uri, raw)?;
        let segments = raw
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| decode(uri, segment))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            uri: uri.to_string(),
            scheme: Scheme::parse(url.scheme()),
            authority: url.host_str().unwrap_or_default().to_string(),
            path,
            segments,
        })
    }

    /// Build a reference from already-decoded parts.
    pub fn new(scheme: &str, authority: impl Into<String>, segments: Vec<String>) -> Self {
        let scheme = Scheme::parse(scheme);
        let authority = authority.into();
        let segments: Vec<String> = segments.into_iter().filter(|s| !s.is_empty()).collect();
        let path = format!("/{}", segments.join("/"));
        let encoded: Vec<String> = segments
            .iter()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        let uri = format!("{}://{}/{}", scheme, authority, encoded.join("/"));

        Self {
            uri,
            scheme,
            authority,
            path,
            segments,
        }
    }

    /// A `file:` reference whose path is kept exactly as given.
    pub fn from_file_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            uri: format!("file://{}", path),
            scheme: Scheme::File,
            authority: String::new(),
            path,
            segments,
        }
    }

    /// A document-provider reference (`<authority>/document/<id>`).
    pub fn document(authority: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self::new(
            "content",
            authority,
            vec!["document".to_string(), document_id.into()],
        )
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Decoded path component.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded, non-empty path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn last_path_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The document id, if this is a document or tree-document reference.
    ///
    /// `document/<id>` and `tree/<tree-id>/document/<id>` are recognised.
    pub fn document_id(&self) -> Option<&str> {
        if self.scheme != Scheme::Content {
            return None;
        }
        match self.segments.as_slice() {
            [kind, id] if kind == "document" => Some(id.as_str()),
            [tree, _, kind, id] if tree == "tree" && kind == "document" => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn is_document(&self) -> bool {
        self.document_id().is_some()
    }
}

impl fmt::Display for ContentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

/// Path component exactly as written, without query or fragment.
fn raw_path(uri: &str) -> &str {
    let rest = uri.split_once(':').map_or(uri, |(_, rest)| rest);
    let rest = match rest.strip_prefix("//") {
        Some(after) => match after.find(|c: char| matches!(c, '/' | '?' | '#')) {
            Some(start) => &after[start..],
            None => "",
        },
        None => rest,
    };
    let end = rest.find(|c: char| matches!(c, '?' | '#')).unwrap_or(rest.len());
    &rest[..end]
}

fn decode(uri: &str, value: &str) -> Result<String> {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ShortcutError::InvalidReference {
            reference: uri.to_string(),
            message: format!("invalid percent-encoding: {}", e),
        })
}

/// Whether a resolved value refers to something on this device.
///
/// Only `http://` and `https://` values count as remote; callers still need a
/// scheme check before opening the value as a file.
pub fn is_local(url: Option<&str>) -> bool {
    match url {
        Some(url) => !url.starts_with("http://") && !url.starts_with("https://"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external_storage_document() {
        let reference = ContentReference::parse(
            "content://com.android.externalstorage.documents/document/primary%3ADownload%2Fa.txt",
        )
        .unwrap();

        assert_eq!(reference.scheme(), &Scheme::Content);
        assert_eq!(reference.authority(), "com.android.externalstorage.documents");
        assert_eq!(reference.document_id(), Some("primary:Download/a.txt"));
        assert_eq!(reference.last_path_segment(), Some("primary:Download/a.txt"));
    }

    #[test]
    fn test_parse_tree_document() {
        let reference = ContentReference::parse(
            "content://com.android.externalstorage.documents/tree/primary%3ADownload/document/primary%3ADownload%2Fb.pdf",
        )
        .unwrap();
        assert_eq!(reference.document_id(), Some("primary:Download/b.pdf"));
    }

    #[test]
    fn test_parse_file_uri_decodes_path() {
        let reference = ContentReference::parse("file:///sdcard/My%20Files/a.txt").unwrap();
        assert_eq!(reference.scheme(), &Scheme::File);
        assert_eq!(reference.path(), "/sdcard/My Files/a.txt");
        assert!(!reference.is_document());
    }

    #[test]
    fn test_parse_file_uri_keeps_dot_segments() {
        let reference = ContentReference::parse("file:///sdcard/../etc/a.txt").unwrap();
        assert_eq!(reference.path(), "/sdcard/../etc/a.txt");
        assert_eq!(reference.segments(), ["sdcard", "..", "etc", "a.txt"]);

        let reference = ContentReference::parse("file:///sdcard/./x/a.txt?v=1#top").unwrap();
        assert_eq!(reference.path(), "/sdcard/./x/a.txt");
    }

    #[test]
    fn test_raw_path() {
        assert_eq!(raw_path("content://host/a/b?q"), "/a/b");
        assert_eq!(raw_path("content://host"), "");
        assert_eq!(raw_path("content://host?q=/x"), "");
        assert_eq!(raw_path("file:/sdcard/a.txt"), "/sdcard/a.txt");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(Scheme::parse("CONTENT"), Scheme::Content);
        assert_eq!(Scheme::parse("File"), Scheme::File);
        assert_eq!(Scheme::parse("HTTPS"), Scheme::Other("https".into()));
    }

    #[test]
    fn test_parse_rejects_relative() {
        let result = ContentReference::parse("/sdcard/a.txt");
        assert!(matches!(result, Err(ShortcutError::InvalidReference { .. })));
    }

    #[test]
    fn test_constructed_reference_encodes_uri() {
        let reference =
            ContentReference::document("com.android.providers.media.documents", "image:42");
        assert_eq!(
            reference.as_str(),
            "content://com.android.providers.media.documents/document/image%3A42"
        );
        assert_eq!(reference.document_id(), Some("image:42"));
    }

    #[test]
    fn test_non_document_content() {
        let reference =
            ContentReference::parse("content://com.example.files/shared/report.pdf").unwrap();
        assert_eq!(reference.document_id(), None);
        assert_eq!(reference.segments(), ["shared", "report.pdf"]);
    }

    #[test]
    fn test_is_local() {
        assert!(is_local(Some("/sdcard/a.txt")));
        assert!(is_local(Some("content://media/external/images/media/1")));
        assert!(!is_local(Some("http://example.com/a.txt")));
        assert!(!is_local(Some("https://example.com/a.txt")));
        assert!(!is_local(None));
    }
}
