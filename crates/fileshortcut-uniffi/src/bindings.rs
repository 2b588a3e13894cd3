//! FFI wrapper types and exported functions.
//!
//! Core types carrying maps, images or closed Rust enums are flattened here:
//! maps become `Vec<FfiExtra>`, icons become PNG byte vectors, and errors
//! carry the message key the host looks up in its string resources.

use std::collections::BTreeMap;
use std::sync::Arc;

use fileshortcut_core::config::LaunchConfig;
use fileshortcut_core::error::message;
use fileshortcut_core::{
    bundled_icon_category, mime_type_for_path, ContentResolver, ContentStore, CoreSettings,
    DataQuery, EditDraft, FileShortcutApi, HostCapabilities, IconLimits, IconSuggestion,
    LegacyShortcutBundle, PinnedShortcut, RegistrationMode, RegistrationOutcome, ResolvedTarget,
    ShortcutError, ShortcutIcon, ShortcutId, ShortcutRecord, ShortcutRegistrar, ShortcutRequest,
    ShortcutTarget, StorageRoots, TargetDraft, ViewRequest,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// FFI-friendly error type.
///
/// Every variant carries the user-facing message key from
/// `ShortcutError::user_message` so the host never has to classify errors
/// itself.
#[derive(Debug, Clone, uniffi::Error, thiserror::Error)]
pub enum FfiError {
    #[error("Unsupported: {message}")]
    Unsupported { message: String, message_key: String },

    #[error("Not found: {message}")]
    NotFound { message: String, message_key: String },

    #[error("Capability missing: {message}")]
    CapabilityMissing { message: String, message_key: String },

    #[error("Invalid input: {message}")]
    Invalid { message: String, message_key: String },

    #[error("Internal error: {message}")]
    Internal { message: String, message_key: String },
}

impl FfiError {
    pub fn message_key(&self) -> &str {
        match self {
            FfiError::Unsupported { message_key, .. }
            | FfiError::NotFound { message_key, .. }
            | FfiError::CapabilityMissing { message_key, .. }
            | FfiError::Invalid { message_key, .. }
            | FfiError::Internal { message_key, .. } => message_key,
        }
    }
}

impl From<ShortcutError> for FfiError {
    fn from(err: ShortcutError) -> Self {
        let message = err.to_string();
        let message_key = err.user_message().to_string();

        match err {
            ShortcutError::UnsupportedSource { .. } | ShortcutError::InvalidReference { .. } => {
                FfiError::Unsupported { message, message_key }
            }
            ShortcutError::NoDataFound { .. } => FfiError::NotFound { message, message_key },
            ShortcutError::PlatformCapabilityMissing { .. } => {
                FfiError::CapabilityMissing { message, message_key }
            }
            ShortcutError::Validation { .. } => FfiError::Invalid { message, message_key },
            _ => FfiError::Internal { message, message_key },
        }
    }
}

impl From<uniffi::UnexpectedUniFFICallbackError> for FfiError {
    fn from(err: uniffi::UnexpectedUniFFICallbackError) -> Self {
        FfiError::Internal {
            message: err.reason,
            message_key: message::UNKNOWN_ERROR.to_string(),
        }
    }
}

/// Result type for FFI operations.
pub type FfiResult<T> = Result<T, FfiError>;

// =============================================================================
// Host-implemented content store
// =============================================================================

/// Column lookup implemented by the host over the platform content resolver.
///
/// Must read the `_data` column of the first row at `address` (filtered by
/// `_id = row_id` when given) and close its cursor before returning.
#[uniffi::export(with_foreign)]
pub trait FfiContentStore: Send + Sync {
    fn query_data_column(&self, address: String, row_id: Option<i64>) -> FfiResult<Option<String>>;
}

struct ForeignContentStore(Arc<dyn FfiContentStore>);

impl ContentStore for ForeignContentStore {
    fn query_data_column(&self, query: &DataQuery) -> fileshortcut_core::Result<Option<String>> {
        self.0
            .query_data_column(query.address.clone(), query.row_id)
            .map_err(|e| {
                warn!("Host content query {} failed: {}", query, e);
                ShortcutError::Database {
                    message: format!("Host content query failed: {}", e),
                    source: None,
                }
            })
    }
}

// =============================================================================
// FFI records
// =============================================================================

/// A launch intent extra.
///
/// Used instead of `BTreeMap<String, String>`.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiExtra {
    pub key: String,
    pub value: String,
}

fn to_ffi_extras(extras: BTreeMap<String, String>) -> Vec<FfiExtra> {
    extras
        .into_iter()
        .map(|(key, value)| FfiExtra { key, value })
        .collect()
}

fn from_ffi_extras(extras: Vec<FfiExtra>) -> BTreeMap<String, String> {
    extras.into_iter().map(|e| (e.key, e.value)).collect()
}

#[derive(Debug, Clone, Copy, uniffi::Record)]
pub struct FfiHostCapabilities {
    pub native_shortcuts: bool,
    pub pin_supported: bool,
    pub max_icon_width: u32,
    pub max_icon_height: u32,
}

impl From<FfiHostCapabilities> for HostCapabilities {
    fn from(caps: FfiHostCapabilities) -> Self {
        HostCapabilities {
            native_shortcuts: caps.native_shortcuts,
            pin_supported: caps.pin_supported,
            icon_limits: IconLimits::new(caps.max_icon_width, caps.max_icon_height),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStorageRoots {
    pub external_root: String,
    pub secondary_root: Option<String>,
}

impl From<FfiStorageRoots> for StorageRoots {
    fn from(roots: FfiStorageRoots) -> Self {
        StorageRoots::new(roots.external_root, roots.secondary_root)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum FfiResolvedTarget {
    LocalPath { path: String },
    RemoteReference { value: String },
    Unsupported { reason: String, message_key: String },
}

impl From<ResolvedTarget> for FfiResolvedTarget {
    fn from(resolved: ResolvedTarget) -> Self {
        match resolved {
            ResolvedTarget::LocalPath(path) => FfiResolvedTarget::LocalPath { path },
            ResolvedTarget::RemoteReference(value) => FfiResolvedTarget::RemoteReference { value },
            ResolvedTarget::Unsupported(reason) => {
                let message_key = ShortcutError::UnsupportedSource {
                    reason: reason.clone(),
                }
                .user_message()
                .to_string();
                FfiResolvedTarget::Unsupported {
                    reason: reason.to_string(),
                    message_key,
                }
            }
        }
    }
}

/// PNG icon.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiIcon {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl From<&ShortcutIcon> for FfiIcon {
    fn from(icon: &ShortcutIcon) -> Self {
        Self {
            png: icon.png_bytes().to_vec(),
            width: icon.width(),
            height: icon.height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum FfiIconSuggestion {
    PickedContent { uri: String },
    VideoThumbnail { path: String },
    Bundled { resource_name: String },
    AppIcon,
}

impl From<IconSuggestion> for FfiIconSuggestion {
    fn from(suggestion: IconSuggestion) -> Self {
        match suggestion {
            IconSuggestion::PickedContent(uri) => FfiIconSuggestion::PickedContent { uri },
            IconSuggestion::VideoThumbnail(path) => FfiIconSuggestion::VideoThumbnail { path },
            IconSuggestion::Bundled(category) => FfiIconSuggestion::Bundled {
                resource_name: category.resource_name().to_string(),
            },
            IconSuggestion::AppIcon => FfiIconSuggestion::AppIcon,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTargetDraft {
    pub path: String,
    pub name: String,
    pub mime_type: String,
    pub icon: FfiIconSuggestion,
}

impl From<TargetDraft> for FfiTargetDraft {
    fn from(draft: TargetDraft) -> Self {
        Self {
            path: draft.target.as_str().to_string(),
            name: draft.name,
            mime_type: draft.mime_type,
            icon: draft.icon.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiOutcomeKind {
    /// Set as the activity result (native record).
    NativeResult,
    /// Pass to `ShortcutManager.requestPinShortcut`.
    PinRequest,
    /// Set as the activity result (legacy bundle).
    LegacyResult,
    /// Send as a broadcast with `broadcast_action`.
    LegacyBroadcast,
    /// Pass to `ShortcutManager.updateShortcuts`.
    Updated,
}

/// What the host must submit to the launcher.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRegistrationPlan {
    pub kind: FfiOutcomeKind,
    /// Set for native records only.
    pub shortcut_id: Option<String>,
    pub label: String,
    pub launch_action: Option<String>,
    pub broadcast_action: Option<String>,
    pub extras: Vec<FfiExtra>,
    pub icon: FfiIcon,
}

impl FfiRegistrationPlan {
    fn from_record(kind: FfiOutcomeKind, record: ShortcutRecord) -> Self {
        Self {
            kind,
            shortcut_id: Some(record.id.to_string()),
            launch_action: record.launch.action.clone(),
            broadcast_action: None,
            extras: to_ffi_extras(record.launch.extras()),
            icon: FfiIcon::from(&record.icon),
            label: record.label,
        }
    }

    fn from_bundle(kind: FfiOutcomeKind, bundle: LegacyShortcutBundle) -> Self {
        let broadcast_action = (kind == FfiOutcomeKind::LegacyBroadcast)
            .then(|| LaunchConfig::ACTION_INSTALL_SHORTCUT.to_string());
        Self {
            kind,
            shortcut_id: None,
            launch_action: bundle.launch.action.clone(),
            broadcast_action,
            extras: to_ffi_extras(bundle.launch.extras()),
            icon: FfiIcon::from(&bundle.icon),
            label: bundle.name,
        }
    }
}

impl From<RegistrationOutcome> for FfiRegistrationPlan {
    fn from(outcome: RegistrationOutcome) -> Self {
        match outcome {
            RegistrationOutcome::NativeResult(r) => {
                Self::from_record(FfiOutcomeKind::NativeResult, r)
            }
            RegistrationOutcome::PinRequest(r) => Self::from_record(FfiOutcomeKind::PinRequest, r),
            RegistrationOutcome::Updated(r) => Self::from_record(FfiOutcomeKind::Updated, r),
            RegistrationOutcome::LegacyResult(b) => {
                Self::from_bundle(FfiOutcomeKind::LegacyResult, b)
            }
            RegistrationOutcome::LegacyBroadcast(b) => {
                Self::from_bundle(FfiOutcomeKind::LegacyBroadcast, b)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiViewRequest {
    pub action: String,
    pub uri: String,
    pub mime_type: Option<String>,
    pub flags: u32,
}

impl From<ViewRequest> for FfiViewRequest {
    fn from(request: ViewRequest) -> Self {
        Self {
            action: request.action,
            uri: request.uri,
            mime_type: request.mime_type,
            flags: request.flags,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPinnedShortcut {
    pub id: String,
    pub label: String,
    pub extras: Vec<FfiExtra>,
    pub last_changed_millis: i64,
}

impl From<FfiPinnedShortcut> for PinnedShortcut {
    fn from(pinned: FfiPinnedShortcut) -> Self {
        PinnedShortcut {
            id: pinned.id,
            label: pinned.label,
            extras: from_ffi_extras(pinned.extras),
            last_changed_millis: pinned.last_changed_millis,
        }
    }
}

impl From<PinnedShortcut> for FfiPinnedShortcut {
    fn from(pinned: PinnedShortcut) -> Self {
        Self {
            id: pinned.id,
            label: pinned.label,
            extras: to_ffi_extras(pinned.extras),
            last_changed_millis: pinned.last_changed_millis,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEditDraft {
    pub id: String,
    pub path: Option<String>,
    pub name: String,
    pub mime_type: Option<String>,
    pub icon: Option<FfiIcon>,
}

impl From<EditDraft> for FfiEditDraft {
    fn from(draft: EditDraft) -> Self {
        Self {
            id: draft.id.to_string(),
            path: draft.path,
            name: draft.name,
            mime_type: draft.mime_type,
            icon: draft.icon.as_ref().map(FfiIcon::from),
        }
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Install a `tracing` subscriber writing to stderr.
///
/// `filter` uses `RUST_LOG` syntax; an invalid filter falls back to `info`.
/// Returns false if a subscriber was already installed.
#[uniffi::export]
pub fn init_logging(filter: String) -> bool {
    let filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Parse `uri` and resolve it through the host's content store.
#[uniffi::export]
pub fn parse_and_resolve(
    store: Arc<dyn FfiContentStore>,
    roots: FfiStorageRoots,
    uri: String,
) -> FfiResult<FfiResolvedTarget> {
    let resolver = ContentResolver::new(Arc::new(ForeignContentStore(store)), roots.into());
    Ok(resolver.resolve_uri(&uri)?.into())
}

/// MIME type inferred from the extension of `path`.
#[uniffi::export]
pub fn mime_type(path: Option<String>) -> String {
    mime_type_for_path(path.as_deref())
}

/// Drawable resource name of the bundled icon for `mime_type`, if any.
#[uniffi::export]
pub fn bundled_icon(mime_type: String) -> Option<String> {
    bundled_icon_category(&mime_type).map(|category| category.resource_name().to_string())
}

#[uniffi::export]
pub fn is_local(url: Option<String>) -> bool {
    fileshortcut_core::is_local(url.as_deref())
}

/// Plan a new shortcut for `path` without going through an API handle.
#[uniffi::export]
pub fn plan_registration(
    capabilities: FfiHostCapabilities,
    action: Option<String>,
    path: String,
    label: String,
    icon_png: Vec<u8>,
) -> FfiResult<FfiRegistrationPlan> {
    let registrar = ShortcutRegistrar::new(capabilities.into());
    let request = shortcut_request(path, label, &icon_png)?;
    let mode = RegistrationMode::from_action(action.as_deref());
    Ok(registrar.plan(mode, &request)?.into())
}

/// The view request that opens a stored shortcut path.
#[uniffi::export]
pub fn view_request(path: String, mime_type: Option<String>) -> FfiResult<FfiViewRequest> {
    Ok(ViewRequest::from_launch(&path, mime_type.as_deref())?.into())
}

/// Decode an image and scale it to fit the launcher's icon bound.
#[uniffi::export]
pub fn prepare_icon(image_bytes: Vec<u8>, max_width: u32, max_height: u32) -> FfiResult<FfiIcon> {
    let icon = ShortcutIcon::from_image_bytes(&image_bytes)?
        .fit_within(IconLimits::new(max_width, max_height))?;
    Ok(FfiIcon::from(&icon))
}

fn shortcut_request(path: String, label: String, icon_png: &[u8]) -> FfiResult<ShortcutRequest> {
    let mime_type = mime_type_for_path(Some(&path));
    let target = ShortcutTarget::from_saved(path)?;
    let icon = ShortcutIcon::from_image_bytes(icon_png)?;
    Ok(ShortcutRequest::new(target, label, mime_type, icon))
}

// =============================================================================
// FfiFileShortcut: API handle exposed to the host
// =============================================================================

/// The File Shortcut API handle.
///
/// # Example (Kotlin)
///
/// ```kotlin
/// val api = FfiFileShortcut(store, capabilities, roots)
/// val draft = api.prepare(uri.toString())
/// val plan = api.planRegistration(intent.action, draft.path, draft.name, iconPng)
/// ```
#[derive(uniffi::Object)]
pub struct FfiFileShortcut {
    inner: FileShortcutApi,
}

#[uniffi::export]
impl FfiFileShortcut {
    #[uniffi::constructor]
    pub fn new(
        store: Arc<dyn FfiContentStore>,
        capabilities: FfiHostCapabilities,
        roots: FfiStorageRoots,
    ) -> FfiResult<Arc<Self>> {
        let inner = FileShortcutApi::builder()
            .content_store(Arc::new(ForeignContentStore(store)))
            .capabilities(capabilities.into())
            .settings(CoreSettings::default())
            .storage_roots(roots.into())
            .build()?;
        Ok(Arc::new(Self { inner }))
    }

    /// Build from a JSON settings document (`{"storage": {...}}`).
    #[uniffi::constructor]
    pub fn with_settings_json(
        store: Arc<dyn FfiContentStore>,
        capabilities: FfiHostCapabilities,
        settings_json: String,
    ) -> FfiResult<Arc<Self>> {
        let inner = FileShortcutApi::builder()
            .content_store(Arc::new(ForeignContentStore(store)))
            .capabilities(capabilities.into())
            .settings(CoreSettings::from_json(&settings_json)?)
            .build()?;
        Ok(Arc::new(Self { inner }))
    }

    pub fn resolve(&self, uri: String) -> FfiResult<FfiResolvedTarget> {
        Ok(self.inner.resolver().resolve_uri(&uri)?.into())
    }

    /// Resolved value or nothing; failures are logged, not returned.
    pub fn resolve_path(&self, uri: String) -> Option<String> {
        match fileshortcut_core::ContentReference::parse(&uri) {
            Ok(reference) => self.inner.resolver().resolve_path(&reference),
            Err(e) => {
                warn!("Cannot parse {}: {}", uri, e);
                None
            }
        }
    }

    /// Resolve picked or shared content into editable shortcut fields.
    pub fn prepare(&self, uri: String) -> FfiResult<FfiTargetDraft> {
        Ok(self.inner.prepare_shared(&uri)?.into())
    }

    pub fn plan_registration(
        &self,
        action: Option<String>,
        path: String,
        label: String,
        icon_png: Vec<u8>,
    ) -> FfiResult<FfiRegistrationPlan> {
        let request = shortcut_request(path, label, &icon_png)?;
        let mode = RegistrationMode::from_action(action.as_deref());
        Ok(self.inner.registrar().plan(mode, &request)?.into())
    }

    pub fn plan_update(
        &self,
        shortcut_id: String,
        path: String,
        label: String,
        icon_png: Vec<u8>,
    ) -> FfiResult<FfiRegistrationPlan> {
        let request = shortcut_request(path, label, &icon_png)?;
        Ok(self
            .inner
            .registrar()
            .plan_update(ShortcutId::from_existing(shortcut_id), &request)?
            .into())
    }

    /// The view request for the extras of a fired shortcut.
    pub fn view_request(&self, extras: Vec<FfiExtra>) -> FfiResult<FfiViewRequest> {
        Ok(self.inner.view_request(&from_ffi_extras(extras))?.into())
    }

    /// Pinned shortcuts sorted newest first.
    pub fn history(&self, pinned: Vec<FfiPinnedShortcut>) -> Vec<FfiPinnedShortcut> {
        let pinned = pinned.into_iter().map(PinnedShortcut::from).collect();
        self.inner
            .history(pinned)
            .entries()
            .iter()
            .cloned()
            .map(FfiPinnedShortcut::from)
            .collect()
    }

    pub fn edit_draft(&self, pinned: FfiPinnedShortcut) -> FfiEditDraft {
        EditDraft::from(&PinnedShortcut::from(pinned)).into()
    }

    pub fn history_available(&self, launched_from_launcher: bool, pinned_count: u32) -> bool {
        self.inner
            .history_available(launched_from_launcher, pinned_count as usize)
    }
}
