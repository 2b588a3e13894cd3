//! API implementation submodules.
//!
//! Each submodule contains `impl FileShortcutApi` blocks. The struct itself
//! is defined in `lib.rs`.

mod builder;
mod drafts;
mod shortcuts;

pub use builder::FileShortcutApiBuilder;
pub use drafts::TargetDraft;
