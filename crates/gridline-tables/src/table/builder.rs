//! Builder for [`DataTable`]

use super::DataTable;
use crate::column::{ActionRenderer, Column, RowAction};
use crate::error::{Result, TableError};
use crate::field::FieldMap;
use crate::filtering::{FilterDescriptor, FilterState};
use crate::pagination::PageState;
use crate::sorting::{Collation, SortCriterion};
use crate::value::FieldValue;
use gridline_conf::{DEFAULT_PAGE_SIZE, TableLabels, TableSettings};
use std::collections::HashSet;
use std::sync::Arc;

/// Collects the configuration of a [`DataTable`]
pub struct DataTableBuilder<R> {
	columns: Vec<Column<R>>,
	filters: Vec<FilterDescriptor>,
	fields: FieldMap<R>,
	row_actions: Option<ActionRenderer<R>>,
	labels: TableLabels,
	collation: Collation,
	page_size: usize,
	sort: Option<SortCriterion>,
}

impl<R> DataTableBuilder<R> {
	/// Starts from the default settings
	pub fn new() -> Self {
		Self {
			columns: Vec::new(),
			filters: Vec::new(),
			fields: FieldMap::new(),
			row_actions: None,
			labels: TableLabels::default(),
			collation: Collation::default(),
			page_size: DEFAULT_PAGE_SIZE,
			sort: None,
		}
	}

	/// Replaces all field accessors
	pub fn fields(mut self, fields: FieldMap<R>) -> Self {
		self.fields = fields;
		self
	}

	/// Registers one field accessor
	pub fn field<F>(mut self, key: impl Into<String>, accessor: F) -> Self
	where
		F: Fn(&R) -> FieldValue + Send + Sync + 'static,
	{
		self.fields.insert(key, accessor);
		self
	}

	/// Appends a column
	pub fn column(mut self, column: Column<R>) -> Self {
		self.columns.push(column);
		self
	}

	/// Appends several columns
	pub fn columns(mut self, columns: impl IntoIterator<Item = Column<R>>) -> Self {
		self.columns.extend(columns);
		self
	}

	/// Appends a filter control
	pub fn filter(mut self, filter: FilterDescriptor) -> Self {
		self.filters.push(filter);
		self
	}

	/// Rows per page
	pub fn page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	/// Presentation labels
	pub fn labels(mut self, labels: TableLabels) -> Self {
		self.labels = labels;
		self
	}

	/// String collation for sorting
	pub fn collation(mut self, collation: Collation) -> Self {
		self.collation = collation;
		self
	}

	/// Sort applied before the first request
	pub fn initial_sort(mut self, criterion: SortCriterion) -> Self {
		self.sort = Some(criterion);
		self
	}

	/// Sets the per-row action renderer
	///
	/// Configuring one adds an actions column to the rendered table.
	pub fn row_actions<F>(mut self, renderer: F) -> Self
	where
		F: Fn(&R) -> Vec<RowAction> + Send + Sync + 'static,
	{
		self.row_actions = Some(Arc::new(renderer));
		self
	}

	/// Takes page size, collation and labels from `settings`
	pub fn settings(mut self, settings: &TableSettings) -> Self {
		self.page_size = settings.page_size;
		self.collation = settings.collation;
		self.labels = settings.labels.clone();
		self
	}

	/// Validates the configuration and builds the table
	///
	/// # Errors
	///
	/// Returns an error when the page size is zero or when two columns or two
	/// filters share a key. Keys without a registered field accessor are
	/// accepted and logged.
	pub fn build(self) -> Result<DataTable<R>> {
		if self.page_size == 0 {
			return Err(TableError::InvalidPageSize(self.page_size));
		}

		let mut seen = HashSet::new();
		for column in &self.columns {
			if !seen.insert(column.key()) {
				return Err(TableError::DuplicateColumn(column.key().to_string()));
			}
			let reads_field = !column.has_custom_cell() || column.is_sortable();
			if reads_field && !self.fields.contains(column.key()) {
				tracing::warn!(key = column.key(), "column has no field accessor");
			}
		}

		let mut seen = HashSet::new();
		for filter in &self.filters {
			if !seen.insert(filter.key.as_str()) {
				return Err(TableError::DuplicateFilter(filter.key.clone()));
			}
			if !self.fields.contains(&filter.key) {
				tracing::warn!(key = %filter.key, "filter has no field accessor");
			}
		}

		tracing::debug!(
			columns = self.columns.len(),
			filters = self.filters.len(),
			fields = self.fields.len(),
			page_size = self.page_size,
			"data table built"
		);

		Ok(DataTable {
			columns: self.columns,
			filters: self.filters,
			fields: self.fields,
			row_actions: self.row_actions,
			labels: self.labels,
			collation: self.collation,
			search: String::new(),
			filter_state: FilterState::new(),
			sort: self.sort,
			page: PageState::new(self.page_size),
		})
	}
}

impl<R> Default for DataTableBuilder<R> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Row {
		name: String,
	}

	fn builder() -> DataTableBuilder<Row> {
		DataTableBuilder::new().field("name", |r: &Row| r.name.as_str().into())
	}

	#[rstest]
	fn test_defaults() {
		let table = builder().build().unwrap();
		assert_eq!(table.page_state(), PageState::new(DEFAULT_PAGE_SIZE));
		assert_eq!(table.collation(), Collation::Binary);
		assert_eq!(table.search_query(), "");
		assert!(table.sort().is_none());
		assert!(table.filter_state().is_empty());
		assert!(!table.has_row_actions());
	}

	#[rstest]
	fn test_zero_page_size_is_rejected() {
		let err = builder().page_size(0).build().unwrap_err();
		assert_eq!(err, TableError::InvalidPageSize(0));
	}

	#[rstest]
	fn test_duplicate_column_is_rejected() {
		let err = builder()
			.column(Column::new("name", "Name"))
			.column(Column::new("name", "Again"))
			.build()
			.unwrap_err();
		assert_eq!(err, TableError::DuplicateColumn("name".to_string()));
	}

	#[rstest]
	fn test_duplicate_filter_is_rejected() {
		let err = builder()
			.filter(FilterDescriptor::new("name", "Name"))
			.filter(FilterDescriptor::new("name", "Name"))
			.build()
			.unwrap_err();
		assert_eq!(err, TableError::DuplicateFilter("name".to_string()));
	}

	#[rstest]
	fn test_unregistered_keys_are_accepted() {
		let table = builder()
			.column(Column::new("region", "Region"))
			.filter(FilterDescriptor::new("region", "Region"))
			.build()
			.unwrap();
		assert_eq!(table.columns().len(), 1);
		assert_eq!(table.filters().len(), 1);
	}

	#[rstest]
	fn test_settings_are_applied() {
		let mut labels = TableLabels::default();
		labels.no_data_message = "Nothing".to_string();
		let settings = TableSettings::default()
			.with_page_size(25)
			.with_collation(Collation::CaseInsensitive)
			.with_labels(labels);

		let table = builder().settings(&settings).build().unwrap();
		assert_eq!(table.page_state().page_size, 25);
		assert_eq!(table.collation(), Collation::CaseInsensitive);
		assert_eq!(table.labels().no_data_message, "Nothing");
	}

	#[rstest]
	fn test_initial_sort() {
		let table = builder()
			.initial_sort(SortCriterion::descending("name"))
			.build()
			.unwrap();
		assert_eq!(table.sort(), Some(&SortCriterion::descending("name")));
	}
}
