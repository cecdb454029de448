//! Column and row action configuration
//!
//! - [`Column`]: how one field is labelled, sorted, hidden and rendered
//! - [`RowAction`]: an entry of the optional per-row action menu

pub mod action;
pub mod base;

pub use action::{ActionRenderer, RowAction};
pub use base::{CellRenderer, Column};
