//! The data table engine
//!
//! [`DataTable`] owns the criteria of one table view (search query, filter
//! selections, sort, page) and runs the stage pipeline over whatever record
//! collection it is handed:
//!
//! ```text
//! records -> search -> filter -> sort -> paginate -> visible page
//! ```
//!
//! Mutators never fail. Search and filter changes return to page 1; sorting
//! keeps the current page.

mod builder;
mod view;

pub use builder::DataTableBuilder;
pub use view::{
	FilterControl, HeaderCell, PageButton, PaginationBar, RenderedRow, SearchBox, TableBody,
	TableView,
};

use crate::column::{ActionRenderer, Column};
use crate::field::FieldMap;
use crate::filtering::{FilterDescriptor, FilterSelection, FilterState, apply_filters};
use crate::pagination::{Page, PageState, paginate, total_pages};
use crate::record::Record;
use crate::search::apply_search;
use crate::sorting::{Collation, SortCriterion, apply_sort};
use gridline_conf::TableLabels;
use std::fmt;

/// Search, filter, sort and paginate state for one table view
///
/// # Example
///
/// ```rust
/// use gridline_tables::{Column, DataTable, FieldMap, Record};
/// use std::borrow::Cow;
///
/// struct Sale {
///     id: String,
///     company: String,
///     amount: i64,
/// }
///
/// impl Record for Sale {
///     fn id(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.id)
///     }
/// }
///
/// let mut table = DataTable::builder()
///     .fields(
///         FieldMap::new()
///             .field("company", |s: &Sale| s.company.as_str().into())
///             .field("amount", |s: &Sale| s.amount.into()),
///     )
///     .column(Column::new("company", "Company"))
///     .column(Column::new("amount", "Amount").sortable(true))
///     .page_size(2)
///     .build()
///     .unwrap();
///
/// let sales: Vec<Sale> = (1..=5)
///     .map(|n| Sale { id: n.to_string(), company: format!("Client {}", n), amount: 100 * n })
///     .collect();
///
/// table.set_sort("amount");
/// table.set_sort("amount");
/// let page = table.compute_visible(&sales);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.items[0].amount, 500);
/// ```
pub struct DataTable<R> {
	columns: Vec<Column<R>>,
	filters: Vec<FilterDescriptor>,
	fields: FieldMap<R>,
	row_actions: Option<ActionRenderer<R>>,
	labels: TableLabels,
	collation: Collation,
	search: String,
	filter_state: FilterState,
	sort: Option<SortCriterion>,
	page: PageState,
}

impl<R> DataTable<R> {
	/// Starts configuring a table
	pub fn builder() -> DataTableBuilder<R> {
		DataTableBuilder::new()
	}

	// -------------------------------------------------------------------------
	// Mutators
	// -------------------------------------------------------------------------

	/// Sets the free-text query and returns to page 1
	pub fn set_search(&mut self, query: impl Into<String>) {
		self.search = query.into();
		self.page.current_page = 1;
		tracing::debug!(query = %self.search, "table search changed");
	}

	/// Selects a filter option and returns to page 1
	///
	/// `"all"` (or [`FilterSelection::All`]) removes the constraint on `key`.
	pub fn set_filter(&mut self, key: impl Into<String>, selection: impl Into<FilterSelection>) {
		let key = key.into();
		let selection = selection.into();
		tracing::debug!(
			key = %key,
			value = %selection.as_option_value(),
			"table filter changed"
		);
		self.filter_state.set(key, selection);
		self.page.current_page = 1;
	}

	/// Resets every filter to "all" and returns to page 1
	pub fn clear_filters(&mut self) {
		self.filter_state.reset_all();
		self.page.current_page = 1;
		tracing::debug!("table filters cleared");
	}

	/// Requests a sort on `key`
	///
	/// Repeating the current key flips the direction; a new key starts
	/// ascending. Requests for a column configured as non-sortable are
	/// ignored. The current page is kept.
	pub fn set_sort(&mut self, key: &str) {
		let refused = self
			.columns
			.iter()
			.any(|column| column.key() == key && !column.is_sortable());
		if refused {
			tracing::warn!(key, "ignoring sort request on a non-sortable column");
			return;
		}

		let criterion = SortCriterion::toggled(self.sort.as_ref(), key);
		tracing::debug!(key, direction = ?criterion.direction, "table sort changed");
		self.sort = Some(criterion);
	}

	/// Moves to page `page`, treating 0 as 1
	///
	/// Pages past the end are clamped when the table is projected.
	pub fn set_page(&mut self, page: usize) {
		self.page.current_page = page.max(1);
		tracing::debug!(page = self.page.current_page, "table page changed");
	}

	/// Moves one page forward, staying within `total_pages`
	pub fn next_page(&mut self, total_pages: usize) {
		let last = total_pages.max(1);
		let current = self.page.current_page.min(last);
		self.set_page((current + 1).min(last));
	}

	/// Moves one page back, staying on page 1 at the start
	pub fn previous_page(&mut self) {
		self.set_page(self.page.current_page.saturating_sub(1));
	}

	// -------------------------------------------------------------------------
	// State access
	// -------------------------------------------------------------------------

	/// Current free-text query
	pub fn search_query(&self) -> &str {
		&self.search
	}

	/// Current filter selections
	pub fn filter_state(&self) -> &FilterState {
		&self.filter_state
	}

	/// Current sort, if any
	pub fn sort(&self) -> Option<&SortCriterion> {
		self.sort.as_ref()
	}

	/// Requested page and page size
	pub fn page_state(&self) -> PageState {
		self.page
	}

	/// All columns, hidden ones included
	pub fn columns(&self) -> &[Column<R>] {
		&self.columns
	}

	/// Columns shown to the user, in configuration order
	pub fn visible_columns(&self) -> impl Iterator<Item = &Column<R>> {
		self.columns.iter().filter(|column| !column.is_hidden())
	}

	/// Filter descriptors
	pub fn filters(&self) -> &[FilterDescriptor] {
		&self.filters
	}

	/// Field accessors
	pub fn fields(&self) -> &FieldMap<R> {
		&self.fields
	}

	/// Presentation labels
	pub fn labels(&self) -> &TableLabels {
		&self.labels
	}

	/// String collation used for sorting
	pub fn collation(&self) -> Collation {
		self.collation
	}

	/// Whether a per-row action renderer is configured
	pub fn has_row_actions(&self) -> bool {
		self.row_actions.is_some()
	}
}

impl<R: Record> DataTable<R> {
	// -------------------------------------------------------------------------
	// Projection
	// -------------------------------------------------------------------------

	/// Runs the pipeline over `records` and returns the visible page
	///
	/// A requested page past the end is clamped to the last page.
	pub fn compute_visible<'a>(&self, records: &'a [R]) -> Page<'a, R> {
		let rows: Vec<&'a R> = records.iter().collect();
		let rows = apply_search(rows, &self.search, &self.fields);
		let rows = apply_filters(rows, &self.filter_state, &self.fields);
		let rows = apply_sort(rows, self.sort.as_ref(), &self.fields, self.collation);

		let last_page = total_pages(rows.len(), self.page.page_size);
		let state = PageState {
			current_page: self.page.current_page.min(last_page),
			..self.page
		};

		tracing::trace!(
			source = records.len(),
			matched = rows.len(),
			page = state.current_page,
			total_pages = last_page,
			"table pipeline computed"
		);

		paginate(rows, state)
	}
}

impl<R> fmt::Debug for DataTable<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DataTable")
			.field("columns", &self.columns)
			.field("filters", &self.filters)
			.field("fields", &self.fields)
			.field("row_actions", &self.row_actions.is_some())
			.field("collation", &self.collation)
			.field("search", &self.search)
			.field("filter_state", &self.filter_state)
			.field("sort", &self.sort)
			.field("page", &self.page)
			.finish()
	}
}
