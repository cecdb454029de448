//! Sorting functionality for tables

use crate::field::FieldMap;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub use gridline_conf::Collation;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Applies the direction to an ascending comparison
	pub fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}

	/// Parses a sort direction from a query parameter
	///
	/// Returns `Ascending` for plain field names and `Descending` for names
	/// prefixed with `-` (e.g., "name" -> Ascending, "-name" -> Descending)
	pub fn parse_from_query(s: &str) -> (Self, &str) {
		if let Some(field) = s.strip_prefix('-') {
			(Self::Descending, field)
		} else {
			(Self::Ascending, s)
		}
	}
}

/// The single active sort of a table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortCriterion {
	/// Field key to sort on
	pub key: String,
	/// Sort direction
	pub direction: SortDirection,
}

impl SortCriterion {
	/// Ascending sort on `key`
	pub fn ascending(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			direction: SortDirection::Ascending,
		}
	}

	/// Descending sort on `key`
	pub fn descending(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			direction: SortDirection::Descending,
		}
	}

	/// The criterion that follows a sort request on `key`
	///
	/// Requesting the current key flips its direction; any other key starts
	/// ascending.
	///
	/// ```rust
	/// use gridline_tables::{SortCriterion, SortDirection};
	///
	/// let first = SortCriterion::toggled(None, "amount");
	/// let second = SortCriterion::toggled(Some(&first), "amount");
	/// assert_eq!(second.direction, SortDirection::Descending);
	///
	/// let other = SortCriterion::toggled(Some(&second), "date");
	/// assert_eq!(other, SortCriterion::ascending("date"));
	/// ```
	pub fn toggled(current: Option<&SortCriterion>, key: &str) -> Self {
		match current {
			Some(current) if current.key == key => Self {
				key: current.key.clone(),
				direction: current.direction.toggle(),
			},
			_ => Self::ascending(key),
		}
	}

	/// Parses `field` or `-field`; an empty field yields `None`
	pub fn parse_from_query(s: &str) -> Option<Self> {
		let (direction, key) = SortDirection::parse_from_query(s.trim());
		if key.is_empty() {
			return None;
		}
		Some(Self {
			key: key.to_string(),
			direction,
		})
	}

	/// Formats the criterion as `field` or `-field`
	pub fn to_query(&self) -> String {
		match self.direction {
			SortDirection::Ascending => self.key.clone(),
			SortDirection::Descending => format!("-{}", self.key),
		}
	}
}

/// Orders records by the field named in `criterion`
///
/// `None` returns the input unchanged. The sort is stable, so records with
/// equal keys keep their relative input order in both directions.
pub fn apply_sort<'a, R>(
	records: Vec<&'a R>,
	criterion: Option<&SortCriterion>,
	fields: &FieldMap<R>,
	collation: Collation,
) -> Vec<&'a R> {
	let Some(criterion) = criterion else {
		return records;
	};

	let mut keyed: Vec<(FieldValue, &'a R)> = records
		.into_iter()
		.map(|record| (fields.value(record, &criterion.key), record))
		.collect();

	keyed.sort_by(|(a, _), (b, _)| criterion.direction.apply(a.compare(b, collation)));

	keyed.into_iter().map(|(_, record)| record).collect()
}
