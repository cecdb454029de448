//! Pagination functionality for tables

use serde::{Deserialize, Serialize};

/// Maximum number of page-number controls shown at once
pub const PAGE_WINDOW_SIZE: usize = 5;

/// Pagination configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
	/// Current page number (1-indexed)
	pub current_page: usize,
	/// Number of items per page
	pub page_size: usize,
}

impl PageState {
	/// Starts on page 1
	///
	/// # Arguments
	///
	/// * `page_size` - Number of items per page
	pub fn new(page_size: usize) -> Self {
		Self {
			current_page: 1,
			page_size,
		}
	}

	/// Returns the offset of the first item on the current page (0-indexed)
	pub fn offset(&self) -> usize {
		self.current_page
			.saturating_sub(1)
			.saturating_mul(self.page_size)
	}
}

/// Number of pages needed for `total_count` items, never less than 1
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
	total_count.div_ceil(page_size.max(1)).max(1)
}

/// One window of a record collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, R> {
	/// Records on this page
	pub items: Vec<&'a R>,
	/// Total number of pages, at least 1
	pub total_pages: usize,
	/// Number of records across all pages
	pub total_count: usize,
	/// Page number this window was cut for (1-indexed)
	pub current_page: usize,
	/// Items per page
	pub page_size: usize,
}

impl<'a, R> Page<'a, R> {
	/// Returns the 1-based index of the first item on this page, 0 when empty
	pub fn start_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			self.current_page.saturating_sub(1) * self.page_size + 1
		}
	}

	/// Returns the 1-based index of the last item on this page, 0 when empty
	pub fn end_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			self.start_index() + self.items.len() - 1
		}
	}

	/// Whether a previous page exists
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	/// Whether a next page exists
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages
	}

	/// Page numbers to show as controls, see [`page_window`]
	pub fn window(&self) -> Vec<usize> {
		page_window(self.current_page, self.total_pages)
	}

	/// Whether this page holds no records
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

/// Cuts the page described by `state` out of `records`
///
/// The slice is clamped to the available records; a page past the end is
/// empty rather than an error.
///
/// # Example
///
/// ```rust
/// use gridline_tables::pagination::{paginate, PageState};
///
/// let rows: Vec<u32> = (1..=12).collect();
/// let state = PageState { current_page: 2, page_size: 10 };
///
/// let page = paginate(rows.iter().collect(), state);
/// assert_eq!(page.total_pages, 2);
/// assert_eq!(page.items, vec![&11, &12]);
/// ```
pub fn paginate<'a, R>(records: Vec<&'a R>, state: PageState) -> Page<'a, R> {
	let total_count = records.len();
	let page_size = state.page_size.max(1);

	let items = records
		.into_iter()
		.skip(state.offset())
		.take(page_size)
		.collect();

	Page {
		items,
		total_pages: total_pages(total_count, page_size),
		total_count,
		current_page: state.current_page,
		page_size,
	}
}

/// Page numbers shown as controls for `current` out of `total` pages
///
/// At most [`PAGE_WINDOW_SIZE`] numbers. With more pages than that the first
/// and last page are always shown:
///
/// - near the start (`current <= 3`): `1 2 3 4 N`
/// - near the end (`current >= N - 2`): `1 N-3 N-2 N-1 N`
/// - otherwise: `1 k-1 k k+1 N`
///
/// ```rust
/// use gridline_tables::pagination::page_window;
///
/// assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 10]);
/// assert_eq!(page_window(5, 10), vec![1, 4, 5, 6, 10]);
/// assert_eq!(page_window(10, 10), vec![1, 7, 8, 9, 10]);
/// ```
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
	if total <= PAGE_WINDOW_SIZE {
		return (1..=total).collect();
	}

	if current <= 3 {
		vec![1, 2, 3, 4, total]
	} else if current >= total - 2 {
		vec![1, total - 3, total - 2, total - 1, total]
	} else {
		vec![1, current - 1, current, current + 1, total]
	}
}
