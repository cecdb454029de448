//! Data table engine module.
//!
//! This module provides search, filtering, sorting and pagination over
//! in-memory record collections.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gridline::tables::{Column, DataTable, FieldMap};
//! ```

#[cfg(feature = "tables")]
pub use gridline_tables::*;
