//! Platform abstraction layer.
//!
//! Everything the core knows about the host device lives here: the storage
//! volume roots and the capability flags that decide how shortcuts are
//! registered. Version-number checks stay in the host; the core only sees
//! the resulting [`HostCapabilities`] value.

pub mod capabilities;
pub mod paths;

pub use capabilities::HostCapabilities;
pub use paths::StorageRoots;
