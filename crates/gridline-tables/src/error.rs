//! Table configuration errors
//!
//! Running a table never fails. Only building one from structurally invalid
//! configuration does.

use thiserror::Error;

/// Errors raised while building a [`DataTable`](crate::DataTable)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// Page size must be positive
	#[error("Invalid page size: {0} (must be greater than zero)")]
	InvalidPageSize(usize),

	/// Two columns share a key
	#[error("Duplicate column key: {0}")]
	DuplicateColumn(String),

	/// Two filter descriptors share a key
	#[error("Duplicate filter key: {0}")]
	DuplicateFilter(String),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
