//! # Gridline
//!
//! In-memory data tables for Rust.
//!
//! Gridline takes a collection of records and the viewing criteria of one
//! table (free-text search, per-field filters, a single sort and a page) and
//! computes the rows to display along with a serializable view model for
//! whatever presentation layer draws them.
//!
//! ## Feature Flags
//!
//! - `tables` - The table engine ([`gridline_tables`])
//! - `conf` - Table settings loaded from code, files or the environment ([`gridline_conf`])
//! - `full` (default) - All of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use gridline::prelude::*;
//!
//! let clients: Vec<JsonRecord> = serde_json::from_str(
//!     r#"[
//!         {"id": 1, "company": "Acme Corp", "status": "active"},
//!         {"id": 2, "company": "Globex", "status": "inactive"}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let mut table = DataTable::builder()
//!     .settings(&TableSettings::default().with_page_size(25))
//!     .fields(FieldMap::json(["company", "status"]))
//!     .column(Column::new("company", "Company").sortable(true))
//!     .column(Column::new("status", "Status"))
//!     .build()
//!     .unwrap();
//!
//! table.set_search("acme");
//! let page = table.compute_visible(&clients);
//! assert_eq!(page.total_count, 1);
//! ```

#![warn(missing_docs)]

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "tables")]
pub mod tables;

// Re-export settings from dedicated crate
#[cfg(feature = "conf")]
pub use gridline_conf::{Collation, SettingsError, TableLabels, TableSettings};

// Re-export table types
#[cfg(feature = "tables")]
pub use gridline_tables::{
	Column, DataTable, DataTableBuilder, FieldMap, FieldValue, FilterDescriptor, FilterSelection,
	JsonRecord, Record, RowAction, SortCriterion, SortDirection, TableBody, TableError, TableView,
};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use crate::{Collation, TableLabels, TableSettings};

	#[cfg(feature = "tables")]
	pub use crate::{
		Column, DataTable, FieldMap, FieldValue, FilterDescriptor, FilterSelection, JsonRecord,
		Record, RowAction, SortCriterion, SortDirection, TableBody, TableView,
	};
}
