//! Content store trait and query type.

use crate::config::ProviderConfig;
use crate::error::Result;
use std::fmt;

/// A single-row, single-column lookup of the `_data` path column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQuery {
    /// Content address to query (`content://...`).
    pub address: String,
    /// Optional `_id` filter.
    pub row_id: Option<i64>,
}

impl DataQuery {
    /// Query the first row at `address`.
    pub fn first_row(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            row_id: None,
        }
    }

    /// Query the row with `_id = row_id` at `address`.
    pub fn by_id(address: impl Into<String>, row_id: i64) -> Self {
        Self {
            address: address.into(),
            row_id: Some(row_id),
        }
    }

    /// Name of the column being read.
    pub fn column(&self) -> &'static str {
        ProviderConfig::DATA_COLUMN
    }
}

impl fmt::Display for DataQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row_id {
            Some(id) => write!(f, "{} [{}={}]", self.address, ProviderConfig::ID_COLUMN, id),
            None => f.write_str(&self.address),
        }
    }
}

/// Backend for the generic column lookup.
///
/// Implementations must release any query handle before returning, whether
/// or not a row was read.
pub trait ContentStore: Send + Sync {
    /// Read the `_data` column of the first matching row.
    ///
    /// Returns `None` if no row matches or the column is null.
    fn query_data_column(&self, query: &DataQuery) -> Result<Option<String>>;
}
