//! Content reference classification and path resolution.
//!
//! Given a reference produced by the system picker, the resolver decides
//! which strategy applies:
//! - `file:` references are already paths
//! - known document providers are decoded from their document id
//! - other `content:` references go through the generic `_data` lookup
//!
//! Failures are values, not faults: unresolvable references come back as
//! [`ResolvedTarget::Unsupported`] with a reason.

mod authority;
mod reference;
mod resolver;
pub mod store;

pub use authority::{KnownAuthority, MediaTable};
pub use reference::{is_local, ContentReference, Scheme};
pub use resolver::ContentResolver;
pub use store::{ContentStore, DataQuery, SqliteContentStore};

use crate::error::{Result, ShortcutError};
use std::fmt;

/// Why a reference could not be turned into a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// Cloud drive documents have no local path.
    CloudStorage,
    /// Neither `file:` nor `content:`.
    UnknownScheme,
    /// A media document id named a table outside image/video/audio.
    UnknownMediaType(String),
    /// The document id did not have the shape the provider uses.
    MalformedDocumentId(String),
    /// A secondary volume was referenced but its root is unknown.
    SecondaryStorageUnavailable,
    /// The reference had no segment to return.
    MissingSegment,
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedReason::CloudStorage => {
                write!(f, "cloud storage documents are not supported")
            }
            UnsupportedReason::UnknownScheme => write!(f, "unknown scheme"),
            UnsupportedReason::UnknownMediaType(kind) => write!(f, "unknown media type '{}'", kind),
            UnsupportedReason::MalformedDocumentId(id) => {
                write!(f, "malformed document id '{}'", id)
            }
            UnsupportedReason::SecondaryStorageUnavailable => {
                write!(f, "secondary storage root is unknown")
            }
            UnsupportedReason::MissingSegment => write!(f, "reference has no path segment"),
        }
    }
}

/// Outcome of classifying a content reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// A filesystem path on this device.
    LocalPath(String),
    /// An opaque value owned by a remote service. Not a filesystem path.
    RemoteReference(String),
    /// The reference cannot be resolved.
    Unsupported(UnsupportedReason),
}

impl ResolvedTarget {
    /// The resolved value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            ResolvedTarget::LocalPath(value) | ResolvedTarget::RemoteReference(value) => {
                Some(value)
            }
            ResolvedTarget::Unsupported(_) => None,
        }
    }

    pub fn is_local_path(&self) -> bool {
        matches!(self, ResolvedTarget::LocalPath(_))
    }

    /// Turn `Unsupported` into an `UnsupportedSource` error.
    pub fn into_result(self) -> Result<ResolvedTarget> {
        match self {
            ResolvedTarget::Unsupported(reason) => Err(ShortcutError::UnsupportedSource { reason }),
            resolved => Ok(resolved),
        }
    }
}
