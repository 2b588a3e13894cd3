//! Integration tests for the FileShortcutApi public interface.
//!
//! These run the whole pick → resolve → draft → register → reopen flow
//! against a SQLite content store and a recording launcher host.

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use fileshortcut_core::config::ProviderConfig;
use fileshortcut_core::{
    ContentReference, CoreSettings, FileShortcutApi, HostCapabilities, IconCategory, IconLimits,
    IconSuggestion, LegacyShortcutBundle, PinnedShortcut, RegistrationMode, RegistrationOutcome,
    ResolvedTarget, Result, ShortcutError, ShortcutHost, ShortcutIcon, ShortcutId,
    ShortcutRecord, SqliteContentStore, StorageRoots, UnsupportedReason,
};
use image::{DynamicImage, ImageFormat};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingHost {
    results: Mutex<usize>,
    pinned: Mutex<Vec<ShortcutRecord>>,
    broadcasts: Mutex<Vec<String>>,
    updated: Mutex<Vec<ShortcutRecord>>,
}

impl ShortcutHost for RecordingHost {
    fn set_result(&self, _outcome: &RegistrationOutcome) -> Result<()> {
        *self.results.lock().unwrap() += 1;
        Ok(())
    }

    fn request_pin_shortcut(&self, record: &ShortcutRecord) -> Result<()> {
        self.pinned.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn send_broadcast(&self, action: &str, _bundle: &LegacyShortcutBundle) -> Result<()> {
        self.broadcasts.lock().unwrap().push(action.to_string());
        Ok(())
    }

    fn update_shortcut(&self, record: &ShortcutRecord) -> Result<()> {
        self.updated.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Create a SQLite store seeded with a download and a media row.
fn create_test_store(temp_dir: &TempDir) -> Arc<SqliteContentStore> {
    let store = SqliteContentStore::open(temp_dir.path().join("content.db")).unwrap();
    store
        .upsert_row(
            ProviderConfig::PUBLIC_DOWNLOADS_URI,
            5,
            Some("/storage/emulated/0/Download/manual.pdf"),
        )
        .unwrap();
    store
        .upsert_row(
            ProviderConfig::IMAGES_EXTERNAL_URI,
            42,
            Some("/storage/emulated/0/DCIM/cat.jpg"),
        )
        .unwrap();
    Arc::new(store)
}

fn create_api(temp_dir: &TempDir, capabilities: HostCapabilities) -> FileShortcutApi {
    FileShortcutApi::builder()
        .content_store(create_test_store(temp_dir))
        .capabilities(capabilities)
        .settings(CoreSettings::default())
        .storage_roots(StorageRoots::new("/storage/emulated/0", None))
        .build()
        .unwrap()
}

fn test_icon(width: u32, height: u32) -> ShortcutIcon {
    let mut png = Vec::new();
    DynamicImage::ImageRgb8(image::RgbImage::new(width, height))
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();
    ShortcutIcon::from_image_bytes(&png).unwrap()
}

#[test]
fn test_prepare_external_storage_document() {
    let temp_dir = TempDir::new().unwrap();
    let api = create_api(&temp_dir, HostCapabilities::native(true, IconLimits::default()));

    let draft = api
        .prepare_shared(
            "content://com.android.externalstorage.documents/document/primary%3ADownload%2Fnotes.txt",
        )
        .unwrap();

    assert_eq!(draft.target.as_str(), "/storage/emulated/0/Download/notes.txt");
    assert_eq!(draft.name, "notes.txt");
    assert_eq!(draft.mime_type, "text/plain");
    assert_eq!(draft.icon, IconSuggestion::Bundled(IconCategory::Text));
}

#[test]
fn test_prepare_download_goes_through_store() {
    let temp_dir = TempDir::new().unwrap();
    let api = create_api(&temp_dir, HostCapabilities::native(true, IconLimits::default()));

    let reference = ContentReference::document(ProviderConfig::DOWNLOADS_DOCUMENTS, "5");
    let draft = api.prepare(&reference).unwrap();

    assert_eq!(draft.target.as_str(), "/storage/emulated/0/Download/manual.pdf");
    assert_eq!(draft.mime_type, "application/pdf");
    assert_eq!(draft.icon, IconSuggestion::Bundled(IconCategory::Pdf));
}

#[test]
fn test_prepare_image_suggests_picked_content() {
    let temp_dir = TempDir::new().unwrap();
    let api = create_api(&temp_dir, HostCapabilities::native(true, IconLimits::default()));

    let reference = ContentReference::document(ProviderConfig::MEDIA_DOCUMENTS, "image:42");
    let draft = api.prepare(&reference).unwrap();

    assert_eq!(draft.name, "cat.jpg");
    assert_eq!(
        draft.icon,
        IconSuggestion::PickedContent(reference.as_str().to_string())
    );
}

#[test]
fn test_google_drive_is_rejected_with_drive_message() {
    let temp_dir = TempDir::new().unwrap();
    let api = create_api(&temp_dir, HostCapabilities::native(true, IconLimits::default()));

    let reference =
        ContentReference::document(ProviderConfig::GOOGLE_DRIVE_STORAGE, "acc=1;doc=abc");
    assert_eq!(
        api.resolve(&reference).unwrap(),
        ResolvedTarget::Unsupported(UnsupportedReason::CloudStorage)
    );

    let err = api.prepare(&reference).unwrap_err();
    assert_eq!(err.user_message(), "msg_not_supported_on_google_drive");
}

#[test]
fn test_missing_download_row_is_file_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let api = create_api(&temp_dir, HostCapabilities::native(true, IconLimits::default()));

    let reference = ContentReference::document(ProviderConfig::DOWNLOADS_DOCUMENTS, "999");
    let err = api.prepare(&reference).unwrap_err();

    assert!(matches!(err, ShortcutError::NoDataFound { .. }));
    assert_eq!(err.user_message(), "msg_file_not_found");
}

#[test]
fn test_pin_then_reopen_then_edit() {
    let temp_dir = TempDir::new().unwrap();
    let api = create_api(&temp_dir, HostCapabilities::native(true, IconLimits::new(64, 64)));
    let host = RecordingHost::default();

    let draft = api
        .prepare(&ContentReference::from_file_path("/sdcard/Books/novel.pdf"))
        .unwrap();
    let outcome = api
        .create_shortcut(
            &host,
            RegistrationMode::Install,
            draft.target.clone(),
            &draft.name,
            test_icon(256, 256),
        )
        .unwrap();

    let record = host.pinned.lock().unwrap()[0].clone();
    assert!(matches!(outcome, RegistrationOutcome::PinRequest(_)));
    assert_eq!((record.icon.width(), record.icon.height()), (64, 64));

    // The launcher fires the shortcut with the extras we wrote
    let extras = record.launch.extras();
    let view = api.view_request(&extras).unwrap();
    assert_eq!(view.uri, "file:///sdcard/Books/novel.pdf");
    assert_eq!(view.mime_type.as_deref(), Some("application/pdf"));

    // History lists it and turns it back into an edit draft
    let history = api.history(vec![
        PinnedShortcut {
            id: "id_old".to_string(),
            label: "old".to_string(),
            extras: Default::default(),
            last_changed_millis: 1,
        },
        PinnedShortcut {
            id: record.id.to_string(),
            label: record.label.clone(),
            extras,
            last_changed_millis: 2,
        },
    ]);
    assert!(api.history_available(true, history.len()));
    assert_eq!(history.entries()[0].id, record.id.as_str());

    let edit = history.edit_draft(record.id.as_str()).unwrap();
    assert_eq!(edit.path.as_deref(), Some("/sdcard/Books/novel.pdf"));
    assert_eq!(edit.icon.as_ref(), Some(&record.icon));

    api.update_shortcut(
        &host,
        edit.id.clone(),
        draft.target,
        "Novel",
        edit.icon.unwrap(),
    )
    .unwrap();
    let updated = host.updated.lock().unwrap();
    assert_eq!(updated[0].id, record.id);
    assert_eq!(updated[0].label, "Novel");
}

#[test]
fn test_legacy_host_broadcasts() {
    let temp_dir = TempDir::new().unwrap();
    let api = create_api(&temp_dir, HostCapabilities::legacy(IconLimits::default()));
    let host = RecordingHost::default();

    let draft = api
        .prepare(&ContentReference::from_file_path("/sdcard/song.mp3"))
        .unwrap();
    api.create_shortcut(
        &host,
        RegistrationMode::from_action(None),
        draft.target.clone(),
        &draft.name,
        test_icon(16, 16),
    )
    .unwrap();
    api.create_shortcut(
        &host,
        RegistrationMode::from_action(Some("android.intent.action.CREATE_SHORTCUT")),
        draft.target,
        &draft.name,
        test_icon(16, 16),
    )
    .unwrap();

    assert_eq!(
        *host.broadcasts.lock().unwrap(),
        vec!["com.android.launcher.action.INSTALL_SHORTCUT".to_string()]
    );
    assert_eq!(*host.results.lock().unwrap(), 1);
    assert!(!api.history_available(true, 5));

    let err = api
        .update_shortcut(
            &host,
            ShortcutId::from_existing("id_1"),
            fileshortcut_core::ShortcutTarget::from_saved("/sdcard/song.mp3").unwrap(),
            "song",
            test_icon(16, 16),
        )
        .unwrap_err();
    assert!(matches!(err, ShortcutError::PlatformCapabilityMissing { .. }));
}

#[test]
fn test_native_without_pin_support() {
    let temp_dir = TempDir::new().unwrap();
    let api = create_api(&temp_dir, HostCapabilities::native(false, IconLimits::default()));
    let host = RecordingHost::default();

    let draft = api
        .prepare(&ContentReference::from_file_path("/sdcard/a.txt"))
        .unwrap();
    let err = api
        .create_shortcut(
            &host,
            RegistrationMode::Install,
            draft.target,
            &draft.name,
            test_icon(8, 8),
        )
        .unwrap_err();

    assert_eq!(err.user_message(), "msg_pin_shortcut_not_supported");
    assert!(host.pinned.lock().unwrap().is_empty());
    assert_eq!(*host.results.lock().unwrap(), 0);
}

#[test]
fn test_version() {
    assert!(!fileshortcut_core::version().is_empty());
}
