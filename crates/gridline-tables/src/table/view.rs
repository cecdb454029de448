//! Render-ready view of a data table
//!
//! [`DataTable::render`] turns the table state plus a record collection into
//! a [`TableView`]: plain data describing the search box, filter controls,
//! header row, body and pagination bar. Every type serializes, so the view can
//! be handed to a template engine or sent to a client as JSON.

use super::DataTable;
use crate::column::RowAction;
use crate::filtering::{ALL_OPTION_VALUE, FilterOption};
use crate::pagination::Page;
use crate::record::Record;
use crate::sorting::SortDirection;
use serde::Serialize;

/// Everything needed to draw one table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
	/// Free-text search control
	pub search: SearchBox,
	/// One control per configured filter, in configuration order
	pub filters: Vec<FilterControl>,
	/// Header cells of the visible columns
	pub headers: Vec<HeaderCell>,
	/// Whether an actions column follows the data columns
	pub has_actions: bool,
	/// Number of columns a full-width body cell must span
	pub column_span: usize,
	/// Table body
	pub body: TableBody,
	/// Pagination bar, absent when everything fits on one page
	pub pagination: Option<PaginationBar>,
}

/// Search input state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBox {
	/// Placeholder text
	pub placeholder: String,
	/// Current query
	pub query: String,
}

/// One filter select
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterControl {
	/// Field key
	pub key: String,
	/// Control label
	pub label: String,
	/// Options, starting with the "all" entry
	pub options: Vec<FilterOption>,
	/// Value of the selected option
	pub selected: String,
}

/// One header cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
	/// Column key
	pub key: String,
	/// Header text
	pub label: String,
	/// Whether clicking the header requests a sort
	pub sortable: bool,
	/// Direction indicator, set only on the sorted column
	pub sort: Option<SortDirection>,
}

/// What the table body shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TableBody {
	/// The record collection is still loading
	Loading {
		/// Text spanning the whole body
		message: String,
	},
	/// No record survived search and filters
	Empty {
		/// Text spanning the whole body
		message: String,
	},
	/// Rows of the current page
	Rows {
		/// Rendered rows in display order
		rows: Vec<RenderedRow>,
	},
}

/// One body row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
	/// Record id
	pub id: String,
	/// Cell text per visible column
	pub cells: Vec<String>,
	/// Actions offered for this record
	pub actions: Vec<RowAction>,
}

/// Pagination controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationBar {
	/// 1-based index of the first record shown
	pub start: usize,
	/// 1-based index of the last record shown
	pub end: usize,
	/// Records across all pages
	pub total: usize,
	/// Page currently shown
	pub current_page: usize,
	/// Number of pages
	pub total_pages: usize,
	/// Page number buttons
	pub pages: Vec<PageButton>,
	/// Whether "previous" is enabled
	pub has_previous: bool,
	/// Whether "next" is enabled
	pub has_next: bool,
}

/// One page number button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
	/// Page number
	pub number: usize,
	/// Whether this is the page shown
	pub current: bool,
}

impl<R: Record> DataTable<R> {
	/// Builds the view of the current page of `records`
	///
	/// While `loading` is set no stage runs: the body shows the loading
	/// message and there is no pagination bar. The controls still reflect the
	/// current state.
	pub fn render(&self, records: &[R], loading: bool) -> TableView {
		let has_actions = self.row_actions.is_some();
		let headers = self.header_cells();

		let (body, pagination) = if loading {
			let body = TableBody::Loading {
				message: self.labels.loading_message.clone(),
			};
			(body, None)
		} else {
			let page = self.compute_visible(records);
			let body = if page.total_count == 0 {
				TableBody::Empty {
					message: self.labels.no_data_message.clone(),
				}
			} else {
				TableBody::Rows {
					rows: page.items.iter().map(|record| self.render_row(*record)).collect(),
				}
			};
			(body, pagination_bar(&page))
		};

		TableView {
			search: SearchBox {
				placeholder: self.labels.search_placeholder.clone(),
				query: self.search.clone(),
			},
			filters: self.filter_controls(),
			column_span: headers.len() + usize::from(has_actions),
			headers,
			has_actions,
			body,
			pagination,
		}
	}

	fn header_cells(&self) -> Vec<HeaderCell> {
		self.visible_columns()
			.map(|column| {
				let sort = self
					.sort
					.as_ref()
					.filter(|criterion| column.is_sortable() && criterion.key == column.key())
					.map(|criterion| criterion.direction);
				HeaderCell {
					key: column.key().to_string(),
					label: column.header().to_string(),
					sortable: column.is_sortable(),
					sort,
				}
			})
			.collect()
	}

	fn filter_controls(&self) -> Vec<FilterControl> {
		self.filters
			.iter()
			.map(|filter| {
				let mut options = Vec::with_capacity(filter.options.len() + 1);
				options.push(FilterOption::new(
					ALL_OPTION_VALUE,
					self.labels.all_option_label.clone(),
				));
				options.extend(filter.options.iter().cloned());
				FilterControl {
					key: filter.key.clone(),
					label: filter.label.clone(),
					options,
					selected: self
						.filter_state
						.selection(&filter.key)
						.as_option_value()
						.to_string(),
				}
			})
			.collect()
	}

	fn render_row(&self, record: &R) -> RenderedRow {
		RenderedRow {
			id: record.id().into_owned(),
			cells: self
				.visible_columns()
				.map(|column| column.render(record, &self.fields, &self.labels.empty_cell))
				.collect(),
			actions: self
				.row_actions
				.as_ref()
				.map(|actions| actions(record))
				.unwrap_or_default(),
		}
	}
}

fn pagination_bar<R>(page: &Page<'_, R>) -> Option<PaginationBar> {
	if page.total_pages <= 1 {
		return None;
	}

	Some(PaginationBar {
		start: page.start_index(),
		end: page.end_index(),
		total: page.total_count,
		current_page: page.current_page,
		total_pages: page.total_pages,
		pages: page
			.window()
			.into_iter()
			.map(|number| PageButton {
				number,
				current: number == page.current_page,
			})
			.collect(),
		has_previous: page.has_previous(),
		has_next: page.has_next(),
	})
}
