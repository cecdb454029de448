//! In-memory data tables for Gridline
//!
//! This crate turns a collection of records into the rows a table view should
//! show. The records stay untouched; the table only holds the viewing
//! criteria and recomputes the visible page whenever it is asked.
//!
//! # Features
//!
//! - **Search**: case-insensitive substring match across text fields and record ids
//! - **Filtering**: exact match on the string form of a field, one control per key
//! - **Sorting**: stable single-key sort with toggling direction
//! - **Pagination**: fixed-size pages and a bounded window of page buttons
//! - **Rendering**: a serializable view model for any presentation layer
//!
//! # Architecture
//!
//! ```mermaid
//! graph LR
//!     A[Records] --> B[Search]
//!     B --> C[Filter]
//!     C --> D[Sort]
//!     D --> E[Paginate]
//!     E --> F[TableView]
//!     G[FieldMap] -.-> B
//!     G -.-> C
//!     G -.-> D
//! ```
//!
//! Every stage is also available as a free function ([`search::apply_search`],
//! [`filtering::apply_filters`], [`sorting::apply_sort`],
//! [`pagination::paginate`]).
//!
//! # Example
//!
//! ```rust
//! use gridline_tables::{Column, DataTable, FieldMap, FilterDescriptor, JsonRecord, TableBody};
//!
//! let sales: Vec<JsonRecord> = serde_json::from_str(
//!     r#"[
//!         {"id": 1, "company": "Acme Corp", "status": "paid", "amount": 1500},
//!         {"id": 2, "company": "Globex", "status": "pending", "amount": 320},
//!         {"id": 3, "company": "Initech", "status": "paid", "amount": 980}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let mut table = DataTable::builder()
//!     .fields(FieldMap::json(["company", "status", "amount"]))
//!     .column(Column::new("company", "Company"))
//!     .column(Column::new("amount", "Amount").sortable(true))
//!     .filter(FilterDescriptor::new("status", "Status").option("paid", "Paid"))
//!     .build()
//!     .unwrap();
//!
//! table.set_filter("status", "paid");
//! table.set_sort("amount");
//!
//! let view = table.render(&sales, false);
//! let TableBody::Rows { rows } = view.body else { panic!("expected rows") };
//! assert_eq!(rows[0].cells, vec!["Initech", "980"]);
//! assert!(view.pagination.is_none());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod field;
pub mod filtering;
pub mod pagination;
pub mod record;
pub mod search;
pub mod sorting;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use column::{Column, RowAction};
pub use error::{Result, TableError};
pub use field::FieldMap;
pub use filtering::{FilterDescriptor, FilterOption, FilterSelection, FilterState};
pub use gridline_conf::{Collation, TableLabels, TableSettings};
pub use pagination::{Page, PageState};
pub use record::{JsonRecord, Record};
pub use sorting::{SortCriterion, SortDirection};
pub use table::{
	DataTable, DataTableBuilder, FilterControl, HeaderCell, PageButton, PaginationBar,
	RenderedRow, SearchBox, TableBody, TableView,
};
pub use value::FieldValue;
