//! Field values
//!
//! Accessors turn a record field into a [`FieldValue`]. The stages only ever
//! look at records through these values: search inspects `Text`, filters
//! compare string coercions, and the sort stage uses [`FieldValue::compare`].

use gridline_conf::Collation;
use std::borrow::Cow;
use std::cmp::Ordering;

/// A single field of a record as seen by the table stages
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
	/// A string value
	Text(String),
	/// An integral number
	Integer(i64),
	/// A floating point number
	Float(f64),
	/// A boolean
	Bool(bool),
	/// Structured data (objects and arrays)
	Nested(serde_json::Value),
	/// The field exists but holds no value
	Null,
	/// The record has no such field
	#[default]
	Missing,
}

impl FieldValue {
	/// Returns the string slice of a `Text` value
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Returns true for [`FieldValue::Missing`]
	pub fn is_missing(&self) -> bool {
		matches!(self, Self::Missing)
	}

	/// Coerces the value to its string representation
	///
	/// `Missing` has no representation, so it can never equal a filter
	/// option value.
	///
	/// ```rust
	/// use gridline_tables::FieldValue;
	///
	/// assert_eq!(FieldValue::Float(1500.0).coerce().as_deref(), Some("1500"));
	/// assert_eq!(FieldValue::Bool(true).coerce().as_deref(), Some("true"));
	/// assert_eq!(FieldValue::Missing.coerce(), None);
	/// ```
	pub fn coerce(&self) -> Option<Cow<'_, str>> {
		match self {
			Self::Text(s) => Some(Cow::Borrowed(s.as_str())),
			Self::Integer(n) => Some(Cow::Owned(n.to_string())),
			Self::Float(f) => Some(Cow::Owned(format_float(*f))),
			Self::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
			Self::Nested(v) => Some(Cow::Owned(v.to_string())),
			Self::Null => Some(Cow::Borrowed("null")),
			Self::Missing => None,
		}
	}

	/// Total order used by the sort stage
	///
	/// Numbers compare numerically across `Integer` and `Float`, strings
	/// lexicographically under `collation`, booleans `false < true`. Values of
	/// different kinds are ordered by kind, with `Null` and `Missing` last.
	pub fn compare(&self, other: &Self, collation: Collation) -> Ordering {
		match (self, other) {
			(Self::Text(a), Self::Text(b)) => match collation {
				Collation::Binary => a.cmp(b),
				Collation::CaseInsensitive => a.to_lowercase().cmp(&b.to_lowercase()),
			},
			(Self::Integer(a), Self::Integer(b)) => a.cmp(b),
			(Self::Integer(a), Self::Float(b)) => (*a as f64).total_cmp(b),
			(Self::Float(a), Self::Integer(b)) => a.total_cmp(&(*b as f64)),
			(Self::Float(a), Self::Float(b)) => a.total_cmp(b),
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			(Self::Nested(a), Self::Nested(b)) => a.to_string().cmp(&b.to_string()),
			_ => self.kind_rank().cmp(&other.kind_rank()),
		}
	}

	fn kind_rank(&self) -> u8 {
		match self {
			Self::Bool(_) => 0,
			Self::Integer(_) | Self::Float(_) => 1,
			Self::Text(_) => 2,
			Self::Nested(_) => 3,
			Self::Null => 4,
			Self::Missing => 5,
		}
	}
}

// Integral floats print without a fractional part ("1500", not "1500.0").
// Plain notation covers magnitudes in [1e-6, 1e21); anything else uses an
// exponent with an explicit sign ("1e+21", "1e-7").
fn format_float(f: f64) -> String {
	if f.is_nan() {
		return "NaN".to_string();
	}
	if f.is_infinite() {
		let sign = if f > 0.0 { "" } else { "-" };
		return format!("{}Infinity", sign);
	}
	if f == 0.0 {
		return "0".to_string();
	}

	// Shortest round-trip digits, e.g. "1.5e3"
	let scientific = format!("{:e}", f.abs());
	let Some((mantissa, exponent)) = scientific.split_once('e') else {
		return f.to_string();
	};
	let Ok(exponent) = exponent.parse::<i32>() else {
		return f.to_string();
	};
	let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
	let len = digits.len() as i32;
	// Position of the decimal point relative to the first digit
	let point = exponent + 1;

	let body = if len <= point && point <= 21 {
		format!("{}{}", digits, "0".repeat((point - len) as usize))
	} else if 0 < point && point <= 21 {
		let (int, frac) = digits.split_at(point as usize);
		format!("{}.{}", int, frac)
	} else if -6 < point && point <= 0 {
		format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
	} else {
		let (first, rest) = digits.split_at(1);
		let dot = if rest.is_empty() { "" } else { "." };
		let exp_sign = if exponent < 0 { "-" } else { "+" };
		format!("{}{}{}e{}{}", first, dot, rest, exp_sign, exponent.unsigned_abs())
	};

	let sign = if f < 0.0 { "-" } else { "" };
	format!("{}{}", sign, body)
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<&String> for FieldValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<i64> for FieldValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<i32> for FieldValue {
	fn from(value: i32) -> Self {
		Self::Integer(i64::from(value))
	}
}

impl From<u32> for FieldValue {
	fn from(value: u32) -> Self {
		Self::Integer(i64::from(value))
	}
}

impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl From<&serde_json::Value> for FieldValue {
	fn from(value: &serde_json::Value) -> Self {
		use serde_json::Value;

		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(*b),
			Value::Number(n) => match n.as_i64() {
				Some(i) => Self::Integer(i),
				None => n.as_f64().map_or(Self::Null, Self::Float),
			},
			Value::String(s) => Self::Text(s.clone()),
			Value::Array(_) | Value::Object(_) => Self::Nested(value.clone()),
		}
	}
}

impl From<serde_json::Value> for FieldValue {
	fn from(value: serde_json::Value) -> Self {
		Self::from(&value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(FieldValue::Text("Acme".into()), Some("Acme"))]
	#[case(FieldValue::Integer(-42), Some("-42"))]
	#[case(FieldValue::Float(1500.0), Some("1500"))]
	#[case(FieldValue::Float(12.5), Some("12.5"))]
	#[case(FieldValue::Float(-0.0), Some("0"))]
	#[case(FieldValue::Float(f64::NAN), Some("NaN"))]
	#[case(FieldValue::Float(f64::NEG_INFINITY), Some("-Infinity"))]
	#[case(FieldValue::Float(0.1), Some("0.1"))]
	#[case(FieldValue::Float(-980.5), Some("-980.5"))]
	#[case(FieldValue::Float(1e20), Some("100000000000000000000"))]
	#[case(FieldValue::Float(1e21), Some("1e+21"))]
	#[case(FieldValue::Float(-2.5e25), Some("-2.5e+25"))]
	#[case(FieldValue::Float(0.000001), Some("0.000001"))]
	#[case(FieldValue::Float(1e-7), Some("1e-7"))]
	#[case(FieldValue::Float(1.23e-18), Some("1.23e-18"))]
	#[case(FieldValue::Bool(false), Some("false"))]
	#[case(FieldValue::Null, Some("null"))]
	#[case(FieldValue::Missing, None)]
	fn test_coerce(#[case] value: FieldValue, #[case] expected: Option<&str>) {
		assert_eq!(value.coerce().as_deref(), expected);
	}

	#[rstest]
	fn test_coerce_nested_is_compact_json() {
		let value = FieldValue::from(json!({"city": "Oslo"}));
		assert_eq!(value.coerce().as_deref(), Some(r#"{"city":"Oslo"}"#));
	}

	#[rstest]
	fn test_compare_numbers_across_kinds() {
		let int = FieldValue::Integer(10);
		let float = FieldValue::Float(9.5);
		assert_eq!(int.compare(&float, Collation::Binary), Ordering::Greater);
		assert_eq!(float.compare(&int, Collation::Binary), Ordering::Less);
		assert_eq!(
			FieldValue::Integer(3).compare(&FieldValue::Float(3.0), Collation::Binary),
			Ordering::Equal
		);
	}

	#[rstest]
	fn test_compare_text_collation() {
		let a = FieldValue::from("apple");
		let b = FieldValue::from("Banana");
		assert_eq!(a.compare(&b, Collation::Binary), Ordering::Greater);
		assert_eq!(a.compare(&b, Collation::CaseInsensitive), Ordering::Less);
	}

	#[rstest]
	fn test_missing_sorts_after_values() {
		let missing = FieldValue::Missing;
		for value in [
			FieldValue::Bool(true),
			FieldValue::Integer(1),
			FieldValue::from("x"),
			FieldValue::Null,
		] {
			assert_eq!(value.compare(&missing, Collation::Binary), Ordering::Less);
			assert_eq!(missing.compare(&value, Collation::Binary), Ordering::Greater);
		}
		assert_eq!(missing.compare(&missing, Collation::Binary), Ordering::Equal);
	}

	#[rstest]
	fn test_from_json_values() {
		assert_eq!(FieldValue::from(json!(7)), FieldValue::Integer(7));
		assert_eq!(FieldValue::from(json!(7.25)), FieldValue::Float(7.25));
		assert_eq!(FieldValue::from(json!(null)), FieldValue::Null);
		assert_eq!(FieldValue::from(json!("x")), FieldValue::Text("x".into()));
		assert!(matches!(FieldValue::from(json!([1, 2])), FieldValue::Nested(_)));
	}

	#[rstest]
	fn test_from_option() {
		assert_eq!(FieldValue::from(Some(5i64)), FieldValue::Integer(5));
		assert_eq!(FieldValue::from(None::<String>), FieldValue::Null);
	}
}
