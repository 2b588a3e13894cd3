//! Data store seam for the generic column lookup.
//!
//! On a device the store is the platform content resolver (implemented by the
//! host). [`SqliteContentStore`] keeps provider rows in a local SQLite
//! database for hosts that mirror provider metadata, and for tests.

mod sqlite;
mod traits;

pub use sqlite::SqliteContentStore;
pub use traits::{ContentStore, DataQuery};
