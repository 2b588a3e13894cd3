/// Bindgen entry point for the fileshortcut-uniffi cdylib.
///
/// Usage:
///   cargo run -p fileshortcut-uniffi --features cli --bin fileshortcut-uniffi-bindgen -- \
///     generate --library -l kotlin -o app/src/main/java \
///     target/aarch64-linux-android/release/libfileshortcut_uniffi.so
fn main() {
    uniffi::uniffi_bindgen_main();
}
