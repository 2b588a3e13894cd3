//! URI classifier and path resolver.

use super::authority::{KnownAuthority, MediaTable};
use super::reference::{ContentReference, Scheme};
use super::store::{ContentStore, DataQuery};
use super::{ResolvedTarget, UnsupportedReason};
use crate::config::ProviderConfig;
use crate::error::{Result, ShortcutError};
use crate::platform::StorageRoots;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves content references to filesystem paths.
///
/// Read-only: a resolver can be shared between threads and calls are
/// independent of each other.
pub struct ContentResolver {
    store: Arc<dyn ContentStore>,
    roots: StorageRoots,
}

impl ContentResolver {
    pub fn new(store: Arc<dyn ContentStore>, roots: StorageRoots) -> Self {
        Self { store, roots }
    }

    pub fn storage_roots(&self) -> &StorageRoots {
        &self.roots
    }

    /// Classify and resolve a reference.
    ///
    /// `Err` is only returned for lookups that found no row
    /// ([`ShortcutError::NoDataFound`]) or a failing store.
    pub fn resolve(&self, reference: &ContentReference) -> Result<ResolvedTarget> {
        debug!(
            scheme = %reference.scheme(),
            authority = reference.authority(),
            segments = ?reference.segments(),
            "Resolving content reference"
        );

        if *reference.scheme() == Scheme::File {
            return Ok(ResolvedTarget::LocalPath(reference.path().to_string()));
        }

        if *reference.scheme() != Scheme::Content {
            return Ok(ResolvedTarget::Unsupported(UnsupportedReason::UnknownScheme));
        }

        let authority = KnownAuthority::classify(reference.authority());

        if authority == Some(KnownAuthority::GoogleDrive) {
            debug!("Google Drive references have no local path");
            return Ok(ResolvedTarget::Unsupported(UnsupportedReason::CloudStorage));
        }

        if let (Some(authority), Some(document_id)) = (authority, reference.document_id()) {
            if authority.is_document_provider() {
                return self.resolve_document(authority, document_id);
            }
        }

        if authority == Some(KnownAuthority::GooglePhotos) {
            return Ok(match reference.last_path_segment() {
                Some(segment) => ResolvedTarget::RemoteReference(segment.to_string()),
                None => ResolvedTarget::Unsupported(UnsupportedReason::MissingSegment),
            });
        }

        self.lookup(&DataQuery::first_row(reference.as_str()))
    }

    /// Parse a URI string and resolve it.
    pub fn resolve_uri(&self, uri: &str) -> Result<ResolvedTarget> {
        let reference = ContentReference::parse(uri)?;
        self.resolve(&reference)
    }

    /// Resolve to a bare value, or `None` if nothing could be resolved.
    ///
    /// The value may be a [`ResolvedTarget::RemoteReference`]; callers must
    /// check locality before opening it as a file.
    pub fn resolve_path(&self, reference: &ContentReference) -> Option<String> {
        match self.resolve(reference) {
            Ok(ResolvedTarget::LocalPath(path)) | Ok(ResolvedTarget::RemoteReference(path)) => {
                Some(path)
            }
            Ok(ResolvedTarget::Unsupported(reason)) => {
                warn!("Unsupported content reference {}: {}", reference, reason);
                None
            }
            Err(e) => {
                warn!("Failed to resolve {}: {}", reference, e);
                None
            }
        }
    }

    fn resolve_document(
        &self,
        authority: KnownAuthority,
        document_id: &str,
    ) -> Result<ResolvedTarget> {
        match authority {
            KnownAuthority::ExternalStorage => Ok(self.resolve_external_storage(document_id)),
            KnownAuthority::Downloads => match document_id.parse::<i64>() {
                Ok(row_id) => {
                    self.lookup(&DataQuery::by_id(ProviderConfig::PUBLIC_DOWNLOADS_URI, row_id))
                }
                Err(_) => Ok(malformed(document_id)),
            },
            KnownAuthority::Media => self.resolve_media(document_id),
            KnownAuthority::GoogleDrive => {
                Ok(ResolvedTarget::Unsupported(UnsupportedReason::CloudStorage))
            }
            KnownAuthority::GooglePhotos => {
                Ok(ResolvedTarget::Unsupported(UnsupportedReason::UnknownScheme))
            }
        }
    }

    fn resolve_external_storage(&self, document_id: &str) -> ResolvedTarget {
        let Some((volume, relative)) = document_id.split_once(':') else {
            return malformed(document_id);
        };

        if volume.eq_ignore_ascii_case(ProviderConfig::PRIMARY_VOLUME) {
            return ResolvedTarget::LocalPath(self.roots.primary_path(relative));
        }

        match self.roots.secondary_path(relative) {
            Some(path) => ResolvedTarget::LocalPath(path),
            None => {
                warn!(
                    "Document {} is on volume '{}' but no secondary storage root is known",
                    document_id, volume
                );
                ResolvedTarget::Unsupported(UnsupportedReason::SecondaryStorageUnavailable)
            }
        }
    }

    fn resolve_media(&self, document_id: &str) -> Result<ResolvedTarget> {
        let Some((media_type, id)) = document_id.split_once(':') else {
            return Ok(malformed(document_id));
        };

        let Some(table) = MediaTable::from_type(media_type) else {
            // The media provider only issues image/video/audio ids
            warn!("Unknown media content type: {}", media_type);
            return Ok(ResolvedTarget::Unsupported(
                UnsupportedReason::UnknownMediaType(media_type.to_string()),
            ));
        };

        match id.parse::<i64>() {
            Ok(row_id) => self.lookup(&DataQuery::by_id(table.content_uri(), row_id)),
            Err(_) => Ok(malformed(document_id)),
        }
    }

    fn lookup(&self, query: &DataQuery) -> Result<ResolvedTarget> {
        match self.store.query_data_column(query)? {
            Some(path) => Ok(ResolvedTarget::LocalPath(path)),
            None => Err(ShortcutError::NoDataFound {
                address: query.to_string(),
            }),
        }
    }
}

fn malformed(document_id: &str) -> ResolvedTarget {
    ResolvedTarget::Unsupported(UnsupportedReason::MalformedDocumentId(
        document_id.to_string(),
    ))
}
