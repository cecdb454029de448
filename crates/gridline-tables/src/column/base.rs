//! Column descriptor

use crate::field::FieldMap;
use crate::value::FieldValue;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Renders the cell of one column for one record
pub type CellRenderer<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Describes how one field is labelled, sorted, hidden and rendered
///
/// Without a custom cell renderer the column shows the string coercion of
/// the field registered under its key, or the empty-cell placeholder when the
/// field is missing, null or empty.
///
/// # Example
///
/// ```rust
/// use gridline_tables::{Column, FieldMap};
///
/// struct Sale {
///     amount: i64,
///     status: String,
/// }
///
/// let fields = FieldMap::new().field("status", |s: &Sale| s.status.as_str().into());
///
/// let amount = Column::new("amount", "Amount")
///     .sortable(true)
///     .cell(|s: &Sale| format!("${}", s.amount));
/// let status = Column::new("status", "Status");
///
/// let sale = Sale { amount: 300, status: String::new() };
/// assert_eq!(amount.render(&sale, &fields, "-"), "$300");
/// assert_eq!(status.render(&sale, &fields, "-"), "-");
/// ```
pub struct Column<R> {
	key: String,
	header: String,
	cell: Option<CellRenderer<R>>,
	sortable: bool,
	hidden: bool,
}

impl<R> Column<R> {
	/// Creates a visible, non-sortable column using default rendering
	pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			header: header.into(),
			cell: None,
			sortable: false,
			hidden: false,
		}
	}

	/// Sets a custom cell renderer
	pub fn cell<F>(mut self, renderer: F) -> Self
	where
		F: Fn(&R) -> String + Send + Sync + 'static,
	{
		self.cell = Some(Arc::new(renderer));
		self
	}

	/// Sets whether the header offers sorting
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether the column is left out of the visible set
	///
	/// Hidden columns can still be sorted on.
	pub fn hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}

	/// Field key this column reads
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Header text
	pub fn header(&self) -> &str {
		&self.header
	}

	/// Whether the column can be sorted
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Whether the column is hidden
	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	/// Whether a custom cell renderer is set
	pub fn has_custom_cell(&self) -> bool {
		self.cell.is_some()
	}

	/// Renders the cell for `record`
	pub fn render(&self, record: &R, fields: &FieldMap<R>, placeholder: &str) -> String {
		if let Some(cell) = &self.cell {
			return cell(record);
		}

		let value = fields.value(record, &self.key);
		if matches!(value, FieldValue::Null) {
			return placeholder.to_string();
		}
		match value.coerce() {
			Some(text) if !text.is_empty() => text.into_owned(),
			_ => placeholder.to_string(),
		}
	}
}

impl<R> Clone for Column<R> {
	fn clone(&self) -> Self {
		Self {
			key: self.key.clone(),
			header: self.header.clone(),
			cell: self.cell.clone(),
			sortable: self.sortable,
			hidden: self.hidden,
		}
	}
}

impl<R> Debug for Column<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("key", &self.key)
			.field("header", &self.header)
			.field("custom_cell", &self.cell.is_some())
			.field("sortable", &self.sortable)
			.field("hidden", &self.hidden)
			.finish()
	}
}
