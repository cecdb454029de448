//! Free-text search stage

use crate::field::FieldMap;
use crate::record::Record;
use crate::value::FieldValue;

/// Keeps the records with at least one text field containing `query`
///
/// Matching is a case-insensitive substring test: both sides are lower-cased,
/// with no locale-aware folding. The `Text` values of the registered fields
/// are inspected, then the strings of [`Record::search_text`] (the record id
/// by default). An empty query returns the input unchanged. Order is
/// preserved.
///
/// # Example
///
/// ```rust
/// use gridline_tables::{FieldMap, Record, search::apply_search};
/// use std::borrow::Cow;
///
/// struct Client {
///     id: &'static str,
///     company: &'static str,
///     seats: i64,
/// }
///
/// impl Record for Client {
///     fn id(&self) -> Cow<'_, str> {
///         Cow::Borrowed(self.id)
///     }
/// }
///
/// let clients = [
///     Client { id: "c-1", company: "Acme Corp", seats: 10 },
///     Client { id: "c-2", company: "Globex", seats: 10 },
/// ];
/// let fields = FieldMap::new()
///     .field("company", |c: &Client| c.company.into())
///     .field("seats", |c: &Client| c.seats.into());
///
/// let found = apply_search(clients.iter().collect(), "ACME", &fields);
/// assert_eq!(found.len(), 1);
///
/// // The id is searched too
/// assert_eq!(apply_search(clients.iter().collect(), "c-2", &fields).len(), 1);
///
/// // Numbers are never searched
/// assert!(apply_search(clients.iter().collect(), "10", &fields).is_empty());
/// ```
pub fn apply_search<'a, R: Record>(
	records: Vec<&'a R>,
	query: &str,
	fields: &FieldMap<R>,
) -> Vec<&'a R> {
	if query.is_empty() {
		return records;
	}

	let needle = query.to_lowercase();
	records
		.into_iter()
		.filter(|record| matches_any_text(*record, &needle, fields))
		.collect()
}

fn matches_any_text<R: Record>(record: &R, needle: &str, fields: &FieldMap<R>) -> bool {
	let in_fields = fields.iter().any(|(_, accessor)| match accessor(record) {
		FieldValue::Text(text) => text.to_lowercase().contains(needle),
		_ => false,
	});
	in_fields
		|| record
			.search_text()
			.iter()
			.any(|text| text.to_lowercase().contains(needle))
}
