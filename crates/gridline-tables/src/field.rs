//! Field accessors
//!
//! A [`FieldMap`] maps each field key to a function that extracts the field
//! from a record. Columns, filters, search and sort all reach record data
//! through it, so a table stays generic over the record type without looking
//! fields up by name at runtime.

use crate::record::JsonRecord;
use crate::value::FieldValue;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Extracts one field from a record
pub type Accessor<R> = Arc<dyn Fn(&R) -> FieldValue + Send + Sync>;

/// Ordered mapping from field key to accessor
///
/// # Example
///
/// ```rust
/// use gridline_tables::{FieldMap, FieldValue};
///
/// struct Sale {
///     id: String,
///     amount: i64,
///     company: String,
/// }
///
/// let fields = FieldMap::new()
///     .field("amount", |s: &Sale| s.amount.into())
///     .field("company", |s: &Sale| s.company.as_str().into());
///
/// let sale = Sale { id: "1".into(), amount: 300, company: "Acme".into() };
/// assert_eq!(fields.value(&sale, "amount"), FieldValue::Integer(300));
/// assert_eq!(fields.value(&sale, "status"), FieldValue::Missing);
/// ```
pub struct FieldMap<R> {
	accessors: IndexMap<String, Accessor<R>>,
}

impl<R> FieldMap<R> {
	/// Creates an empty map
	pub fn new() -> Self {
		Self {
			accessors: IndexMap::new(),
		}
	}

	/// Registers an accessor, builder style
	///
	/// Registering a key twice replaces the earlier accessor but keeps its
	/// position.
	pub fn field<F>(mut self, key: impl Into<String>, accessor: F) -> Self
	where
		F: Fn(&R) -> FieldValue + Send + Sync + 'static,
	{
		self.insert(key, accessor);
		self
	}

	/// Registers an accessor
	pub fn insert<F>(&mut self, key: impl Into<String>, accessor: F)
	where
		F: Fn(&R) -> FieldValue + Send + Sync + 'static,
	{
		self.accessors.insert(key.into(), Arc::new(accessor));
	}

	/// Reads `key` from `record`, `Missing` when no accessor is registered
	pub fn value(&self, record: &R, key: &str) -> FieldValue {
		self.accessors
			.get(key)
			.map_or(FieldValue::Missing, |accessor| accessor(record))
	}

	/// Returns the accessor registered for `key`
	pub fn get(&self, key: &str) -> Option<&Accessor<R>> {
		self.accessors.get(key)
	}

	/// Returns whether an accessor is registered for `key`
	pub fn contains(&self, key: &str) -> bool {
		self.accessors.contains_key(key)
	}

	/// Registered keys in registration order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.accessors.keys().map(String::as_str)
	}

	/// Iterates over `(key, accessor)` pairs in registration order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Accessor<R>)> {
		self.accessors.iter().map(|(k, a)| (k.as_str(), a))
	}

	/// Number of registered fields
	pub fn len(&self) -> usize {
		self.accessors.len()
	}

	/// Returns true when no field is registered
	pub fn is_empty(&self) -> bool {
		self.accessors.is_empty()
	}
}

impl FieldMap<JsonRecord> {
	/// Registers a member lookup for each key
	///
	/// ```rust
	/// use gridline_tables::{FieldMap, JsonRecord};
	///
	/// let fields = FieldMap::<JsonRecord>::json(["company", "status"]);
	/// assert!(fields.contains("status"));
	/// ```
	pub fn json<I, K>(keys: I) -> Self
	where
		I: IntoIterator<Item = K>,
		K: Into<String>,
	{
		let mut map = Self::new();
		for key in keys {
			let key = key.into();
			let lookup = key.clone();
			map.insert(key, move |record: &JsonRecord| record.field(&lookup));
		}
		map
	}
}

impl<R> Default for FieldMap<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> Clone for FieldMap<R> {
	fn clone(&self) -> Self {
		Self {
			accessors: self.accessors.clone(),
		}
	}
}

impl<R> fmt::Debug for FieldMap<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldMap")
			.field("keys", &self.accessors.keys().collect::<Vec<_>>())
			.finish_non_exhaustive()
	}
}
