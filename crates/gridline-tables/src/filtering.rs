//! Filtering functionality for tables
//!
//! A [`FilterDescriptor`] declares a filter control and its options. The
//! current choice per key lives in [`FilterState`], where
//! [`FilterSelection::All`] means "no constraint".

use crate::field::FieldMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Option value the presentation layer uses for [`FilterSelection::All`]
pub const ALL_OPTION_VALUE: &str = "all";

/// The selected option of one filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterSelection {
	/// No constraint on this key
	#[default]
	All,
	/// Keep records whose field coerces to exactly this string
	Value(String),
}

impl FilterSelection {
	/// Selects a concrete option value
	pub fn value(value: impl Into<String>) -> Self {
		Self::Value(value.into())
	}

	/// Parses an option value coming from a filter control
	///
	/// [`ALL_OPTION_VALUE`] maps to [`FilterSelection::All`].
	pub fn from_option_value(value: &str) -> Self {
		if value == ALL_OPTION_VALUE {
			Self::All
		} else {
			Self::Value(value.to_string())
		}
	}

	/// The option value to mark as selected in a filter control
	pub fn as_option_value(&self) -> &str {
		match self {
			Self::All => ALL_OPTION_VALUE,
			Self::Value(v) => v,
		}
	}

	/// Whether this selection imposes no constraint
	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}
}

impl From<&str> for FilterSelection {
	fn from(value: &str) -> Self {
		Self::from_option_value(value)
	}
}

impl From<String> for FilterSelection {
	fn from(value: String) -> Self {
		if value == ALL_OPTION_VALUE {
			Self::All
		} else {
			Self::Value(value)
		}
	}
}

/// One choice of a filter control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
	/// Value compared against the coerced field
	pub value: String,
	/// Text shown to the user
	pub label: String,
}

impl FilterOption {
	/// Creates a filter option
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// Declares a filter control over one field
///
/// # Example
///
/// ```rust
/// use gridline_tables::FilterDescriptor;
///
/// let status = FilterDescriptor::new("status", "Status")
///     .option("paid", "Paid")
///     .option("pending", "Pending");
///
/// assert_eq!(status.options.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDescriptor {
	/// Field key the filter compares
	pub key: String,
	/// Label of the control
	pub label: String,
	/// Options in display order
	pub options: Vec<FilterOption>,
}

impl FilterDescriptor {
	/// Creates a filter without options
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			options: Vec::new(),
		}
	}

	/// Appends an option
	pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
		self.options.push(FilterOption::new(value, label));
		self
	}

	/// Replaces all options at once
	pub fn with_options(mut self, options: Vec<FilterOption>) -> Self {
		self.options = options;
		self
	}
}

/// Current selection per filter key
///
/// Entries are added or overwritten, never removed; resetting a key means
/// setting it back to [`FilterSelection::All`]. Absent keys impose no
/// constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
	entries: IndexMap<String, FilterSelection>,
}

impl FilterState {
	/// Creates an empty state
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the selection for `key`
	pub fn set(&mut self, key: impl Into<String>, selection: FilterSelection) {
		self.entries.insert(key.into(), selection);
	}

	/// Selection for `key`, if one was ever made
	pub fn get(&self, key: &str) -> Option<&FilterSelection> {
		self.entries.get(key)
	}

	/// Selection for `key`, `All` when none was made
	pub fn selection(&self, key: &str) -> FilterSelection {
		self.entries.get(key).cloned().unwrap_or_default()
	}

	/// Resets every entry to `All`
	pub fn reset_all(&mut self) {
		for selection in self.entries.values_mut() {
			*selection = FilterSelection::All;
		}
	}

	/// Entries that constrain the result, as `(key, value)`
	pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().filter_map(|(key, selection)| match selection {
			FilterSelection::All => None,
			FilterSelection::Value(value) => Some((key.as_str(), value.as_str())),
		})
	}

	/// Whether no entry constrains the result
	pub fn is_unconstrained(&self) -> bool {
		self.active().next().is_none()
	}

	/// All entries in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterSelection)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of entries, including those set to `All`
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no selection was ever made
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Keeps the records matching every active filter
///
/// A record passes a filter when the string coercion of its field equals the
/// selected value exactly. Missing fields have no coercion and fail every
/// active filter on their key. Order is preserved.
pub fn apply_filters<'a, R>(
	records: Vec<&'a R>,
	state: &FilterState,
	fields: &FieldMap<R>,
) -> Vec<&'a R> {
	state.active().fold(records, |records, (key, expected)| {
		records
			.into_iter()
			.filter(|record| {
				fields
					.value(*record, key)
					.coerce()
					.is_some_and(|actual| actual == expected)
			})
			.collect()
	})
}
