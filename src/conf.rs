//! Settings module.
//!
//! This module provides table settings loaded from code, TOML/JSON files or
//! `GRIDLINE_*` environment variables.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gridline::conf::TableSettings;
//!
//! let settings = TableSettings::from_env().unwrap();
//! ```

#[cfg(feature = "conf")]
pub use gridline_conf::*;
