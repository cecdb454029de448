//! Records and row identity
//!
//! Tables never mutate records. The only thing they require of a record type
//! is a stable identifier used as the rendering key of its row. The
//! identifier is also searchable, along with any extra text a record type
//! exposes through [`Record::search_text`].

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A row of domain data flowing through a table
///
/// # Example
///
/// ```rust
/// use gridline_tables::Record;
/// use std::borrow::Cow;
///
/// struct Client {
///     id: String,
///     company: String,
/// }
///
/// impl Record for Client {
///     fn id(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.id)
///     }
/// }
/// ```
pub trait Record {
	/// Unique, stable identifier of this record
	///
	/// Duplicate identifiers within one collection are a caller error.
	fn id(&self) -> Cow<'_, str>;

	/// Text the free-text search inspects besides the registered text fields
	///
	/// Defaults to the identifier.
	fn search_text(&self) -> Vec<Cow<'_, str>> {
		vec![self.id()]
	}
}

impl<T: Record + ?Sized> Record for &T {
	fn id(&self) -> Cow<'_, str> {
		(**self).id()
	}

	fn search_text(&self) -> Vec<Cow<'_, str>> {
		(**self).search_text()
	}
}

/// A record backed by a JSON object
///
/// Payloads from a remote API can be fed to a table without declaring a
/// struct. The `id` member may be a string or a number; anything else yields
/// an empty identifier. Search sees every string member, whether or not an
/// accessor is registered for it.
///
/// ```rust
/// use gridline_tables::{JsonRecord, Record};
///
/// let records: Vec<JsonRecord> =
///     serde_json::from_str(r#"[{"id": 7, "company": "Acme Corp"}]"#).unwrap();
/// assert_eq!(records[0].id(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonRecord(serde_json::Map<String, serde_json::Value>);

impl JsonRecord {
	/// Wraps a JSON object
	pub fn new(object: serde_json::Map<String, serde_json::Value>) -> Self {
		Self(object)
	}

	/// Wraps a JSON value if it is an object
	pub fn from_value(value: serde_json::Value) -> Option<Self> {
		match value {
			serde_json::Value::Object(object) => Some(Self(object)),
			_ => None,
		}
	}

	/// Raw member lookup
	pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
		self.0.get(key)
	}

	/// Member lookup as a [`FieldValue`], `Missing` when absent
	pub fn field(&self, key: &str) -> FieldValue {
		self.0.get(key).map_or(FieldValue::Missing, FieldValue::from)
	}

	/// Member names in document order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Unwraps the JSON object
	pub fn into_inner(self) -> serde_json::Map<String, serde_json::Value> {
		self.0
	}
}

impl From<serde_json::Map<String, serde_json::Value>> for JsonRecord {
	fn from(object: serde_json::Map<String, serde_json::Value>) -> Self {
		Self(object)
	}
}

impl Record for JsonRecord {
	fn id(&self) -> Cow<'_, str> {
		match self.0.get("id") {
			Some(serde_json::Value::String(s)) => Cow::Borrowed(s.as_str()),
			Some(serde_json::Value::Number(n)) => Cow::Owned(n.to_string()),
			_ => Cow::Borrowed(""),
		}
	}

	fn search_text(&self) -> Vec<Cow<'_, str>> {
		self.0
			.values()
			.filter_map(|value| value.as_str().map(Cow::Borrowed))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!({"id": "sale-1"}), "sale-1")]
	#[case(json!({"id": 42}), "42")]
	#[case(json!({"id": null}), "")]
	#[case(json!({"name": "no id"}), "")]
	fn test_json_record_id(#[case] value: serde_json::Value, #[case] expected: &str) {
		let record = JsonRecord::from_value(value).unwrap();
		assert_eq!(record.id(), expected);
	}

	#[rstest]
	fn test_json_record_rejects_non_objects() {
		assert!(JsonRecord::from_value(json!([1, 2, 3])).is_none());
	}

	#[rstest]
	fn test_json_record_field() {
		let record = JsonRecord::from_value(json!({"id": "1", "amount": 250})).unwrap();
		assert_eq!(record.field("amount"), FieldValue::Integer(250));
		assert_eq!(record.field("status"), FieldValue::Missing);
		assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "amount"]);
	}

	#[rstest]
	fn test_json_record_search_text_is_string_members() {
		let record = JsonRecord::from_value(json!({
			"id": "sale-1",
			"amount": 250,
			"email": "ops@acme.test",
			"tags": ["vip"],
		}))
		.unwrap();
		assert_eq!(record.search_text(), vec!["sale-1", "ops@acme.test"]);

		let numeric = JsonRecord::from_value(json!({"id": 7})).unwrap();
		assert!(numeric.search_text().is_empty());
	}
}
