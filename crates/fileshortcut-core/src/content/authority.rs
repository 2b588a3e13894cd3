//! Known provider authorities.

use crate::config::ProviderConfig;

/// The closed set of provider authorities with special resolution rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownAuthority {
    /// Storage Access Framework view of the external storage volumes.
    ExternalStorage,
    /// The downloads provider.
    Downloads,
    /// The media store documents provider.
    Media,
    /// Google Drive document storage. Never resolvable to a path.
    GoogleDrive,
    /// Google Photos content. Resolves to a remote reference only.
    GooglePhotos,
}

impl KnownAuthority {
    /// Classify an authority string.
    pub fn classify(authority: &str) -> Option<Self> {
        match authority {
            ProviderConfig::EXTERNAL_STORAGE_DOCUMENTS => Some(KnownAuthority::ExternalStorage),
            ProviderConfig::DOWNLOADS_DOCUMENTS => Some(KnownAuthority::Downloads),
            ProviderConfig::MEDIA_DOCUMENTS => Some(KnownAuthority::Media),
            ProviderConfig::GOOGLE_DRIVE_STORAGE => Some(KnownAuthority::GoogleDrive),
            ProviderConfig::GOOGLE_PHOTOS_CONTENT => Some(KnownAuthority::GooglePhotos),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KnownAuthority::ExternalStorage => ProviderConfig::EXTERNAL_STORAGE_DOCUMENTS,
            KnownAuthority::Downloads => ProviderConfig::DOWNLOADS_DOCUMENTS,
            KnownAuthority::Media => ProviderConfig::MEDIA_DOCUMENTS,
            KnownAuthority::GoogleDrive => ProviderConfig::GOOGLE_DRIVE_STORAGE,
            KnownAuthority::GooglePhotos => ProviderConfig::GOOGLE_PHOTOS_CONTENT,
        }
    }

    /// Whether this authority is a document provider family member.
    pub fn is_document_provider(&self) -> bool {
        !matches!(self, KnownAuthority::GooglePhotos)
    }
}

/// Media store tables addressable from a media document id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTable {
    Images,
    Video,
    Audio,
}

impl MediaTable {
    /// Map the type prefix of a media document id (`image:42`).
    pub fn from_type(media_type: &str) -> Option<Self> {
        match media_type {
            "image" => Some(MediaTable::Images),
            "video" => Some(MediaTable::Video),
            "audio" => Some(MediaTable::Audio),
            _ => None,
        }
    }

    /// External content address of the table.
    pub fn content_uri(&self) -> &'static str {
        match self {
            MediaTable::Images => ProviderConfig::IMAGES_EXTERNAL_URI,
            MediaTable::Video => ProviderConfig::VIDEO_EXTERNAL_URI,
            MediaTable::Audio => ProviderConfig::AUDIO_EXTERNAL_URI,
        }
    }
}
