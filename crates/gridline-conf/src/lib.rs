//! Settings for gridline data tables
//!
//! Table behaviour that is not tied to a particular record type lives here:
//! the page size, the text shown by the presentation layer, and the string
//! collation used when sorting. Settings can be built in code, loaded from a
//! TOML or JSON file, or read from `GRIDLINE_*` environment variables.
//!
//! # Example
//!
//! ```rust
//! use gridline_conf::{Collation, TableSettings};
//!
//! let settings = TableSettings::default()
//!     .with_page_size(25)
//!     .with_collation(Collation::CaseInsensitive);
//!
//! assert!(settings.validate().is_ok());
//! assert_eq!(settings.labels.all_option_label, "All");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod settings;

pub use error::{Result, SettingsError};
pub use settings::{Collation, DEFAULT_PAGE_SIZE, TableLabels, TableSettings};
