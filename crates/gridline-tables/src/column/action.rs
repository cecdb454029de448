//! Per-row actions

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Produces the actions offered for one visible record
pub type ActionRenderer<R> = Arc<dyn Fn(&R) -> Vec<RowAction> + Send + Sync>;

/// One entry of a row's action menu
///
/// The presentation layer decides how an action looks and what it does; the
/// table only carries the name it dispatches on and the text it shows.
///
/// ```rust
/// use gridline_tables::RowAction;
///
/// let delete = RowAction::new("delete", "Delete").destructive();
/// assert!(delete.destructive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAction {
	/// Identifier the presentation layer dispatches on
	pub name: String,
	/// Text shown to the user
	pub label: String,
	/// Whether the action needs confirmation (deleting, cancelling)
	pub destructive: bool,
}

impl RowAction {
	/// Creates a non-destructive action
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			destructive: false,
		}
	}

	/// Marks the action as destructive
	pub fn destructive(mut self) -> Self {
		self.destructive = true;
		self
	}
}
