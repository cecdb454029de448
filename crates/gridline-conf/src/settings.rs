//! Table settings
//!
//! [`TableSettings`] carries everything a data table needs that does not
//! depend on the record type. Every field has a default, so a settings file
//! only has to mention the values it wants to change:
//!
//! ```toml
//! page_size = 25
//! collation = "case_insensitive"
//!
//! [labels]
//! no_data_message = "Nothing here yet"
//! ```

use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// String collation used by the sort stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collation {
	/// Native byte-wise ordering of strings
	#[default]
	Binary,
	/// Strings are lower-cased before they are compared
	CaseInsensitive,
}

impl fmt::Display for Collation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Binary => f.write_str("binary"),
			Self::CaseInsensitive => f.write_str("case_insensitive"),
		}
	}
}

impl FromStr for Collation {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.trim().to_lowercase().replace('-', "_").as_str() {
			"binary" => Ok(Self::Binary),
			"case_insensitive" => Ok(Self::CaseInsensitive),
			other => Err(format!(
				"unknown collation '{}' (expected 'binary' or 'case_insensitive')",
				other
			)),
		}
	}
}

/// Text rendered by the presentation layer around the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLabels {
	/// Placeholder of the search box
	pub search_placeholder: String,
	/// Body text when no record survives search and filters
	pub no_data_message: String,
	/// Label of the "no constraint" entry of every filter control
	pub all_option_label: String,
	/// Cell text for missing or empty field values
	pub empty_cell: String,
	/// Body text while the record collection is still loading
	pub loading_message: String,
}

impl Default for TableLabels {
	fn default() -> Self {
		Self {
			search_placeholder: "Search...".to_string(),
			no_data_message: "No data to display".to_string(),
			all_option_label: "All".to_string(),
			empty_cell: "-".to_string(),
			loading_message: "Loading...".to_string(),
		}
	}
}

/// Settings shared by every data table built from them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSettings {
	/// Rows per page, must be positive
	#[serde(default = "default_page_size")]
	pub page_size: usize,

	/// String collation for sorting
	#[serde(default)]
	pub collation: Collation,

	/// Presentation labels
	#[serde(default)]
	pub labels: TableLabels,
}

fn default_page_size() -> usize {
	DEFAULT_PAGE_SIZE
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			collation: Collation::default(),
			labels: TableLabels::default(),
		}
	}
}

impl TableSettings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the page size
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	/// Set the sort collation
	pub fn with_collation(mut self, collation: Collation) -> Self {
		self.collation = collation;
		self
	}

	/// Replace the presentation labels
	pub fn with_labels(mut self, labels: TableLabels) -> Self {
		self.labels = labels;
		self
	}

	/// Validate settings
	pub fn validate(&self) -> Result<()> {
		if self.page_size == 0 {
			return Err(SettingsError::ValidationError(
				"page_size must be greater than zero".to_string(),
			));
		}

		if self.labels.all_option_label.trim().is_empty() {
			return Err(SettingsError::ValidationError(
				"labels.all_option_label must not be blank".to_string(),
			));
		}

		Ok(())
	}

	/// Load settings from `GRIDLINE_*` environment variables
	///
	/// Recognised variables: `GRIDLINE_PAGE_SIZE`, `GRIDLINE_COLLATION`,
	/// `GRIDLINE_SEARCH_PLACEHOLDER`, `GRIDLINE_NO_DATA_MESSAGE`,
	/// `GRIDLINE_ALL_OPTION_LABEL`, `GRIDLINE_EMPTY_CELL` and
	/// `GRIDLINE_LOADING_MESSAGE`. Unset variables keep their defaults.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Load settings from an arbitrary variable lookup
	///
	/// Same rules as [`TableSettings::from_env`], reading through `lookup`
	/// instead of the process environment.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut settings = Self::default();

		if let Some(raw) = lookup("GRIDLINE_PAGE_SIZE") {
			settings.page_size = raw.trim().parse().map_err(|e| SettingsError::EnvError {
				var: "GRIDLINE_PAGE_SIZE".to_string(),
				message: format!("{}", e),
			})?;
		}

		if let Some(raw) = lookup("GRIDLINE_COLLATION") {
			settings.collation = raw.parse().map_err(|message| SettingsError::EnvError {
				var: "GRIDLINE_COLLATION".to_string(),
				message,
			})?;
		}

		let labels = &mut settings.labels;
		if let Some(value) = lookup("GRIDLINE_SEARCH_PLACEHOLDER") {
			labels.search_placeholder = value;
		}
		if let Some(value) = lookup("GRIDLINE_NO_DATA_MESSAGE") {
			labels.no_data_message = value;
		}
		if let Some(value) = lookup("GRIDLINE_ALL_OPTION_LABEL") {
			labels.all_option_label = value;
		}
		if let Some(value) = lookup("GRIDLINE_EMPTY_CELL") {
			labels.empty_cell = value;
		}
		if let Some(value) = lookup("GRIDLINE_LOADING_MESSAGE") {
			labels.loading_message = value;
		}

		tracing::debug!(
			page_size = settings.page_size,
			collation = %settings.collation,
			"loaded table settings from environment"
		);

		Ok(settings)
	}

	/// Load settings from a `.toml` or `.json` file
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		let settings: TableSettings = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => toml::from_str(&contents)
				.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))?,
			Some("json") => serde_json::from_str(&contents)
				.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?,
			_ => {
				return Err(SettingsError::UnsupportedFormat(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};

		tracing::debug!(path = %path.display(), "loaded table settings from file");

		Ok(settings)
	}
}
