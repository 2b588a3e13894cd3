//! UniFFI bindings for fileshortcut-core.
//!
//! The Android host calls into the core through these bindings. The host
//! keeps ownership of everything the OS provides: it implements
//! [`FfiContentStore`] over the platform content resolver and performs the
//! launcher calls described by the [`FfiRegistrationPlan`] it gets back.
//!
//! # Usage
//!
//! Generate Kotlin bindings using `--library` mode:
//!
//! ```bash
//! cargo build -p fileshortcut-uniffi --release --target aarch64-linux-android
//!
//! fileshortcut-uniffi-bindgen generate --library --language kotlin \
//!     --out-dir app/src/main/java \
//!     target/aarch64-linux-android/release/libfileshortcut_uniffi.so
//! ```

// UniFFI scaffolding - this generates the FFI glue code
uniffi::setup_scaffolding!();

#[cfg(feature = "bindings")]
mod bindings;

#[cfg(feature = "bindings")]
pub use bindings::*;

/// Get the version of the fileshortcut-uniffi bindings.
#[uniffi::export]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
