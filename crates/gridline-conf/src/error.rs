//! Settings errors

use thiserror::Error;

/// Errors that can occur while loading or validating table settings
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read
	#[error("File error: {0}")]
	FileError(String),

	/// The settings file could not be parsed
	#[error("Parse error: {0}")]
	ParseError(String),

	/// The settings file has an extension we do not know how to parse
	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),

	/// The settings were parsed but are not usable
	#[error("Validation error: {0}")]
	ValidationError(String),

	/// An environment variable holds a value that cannot be parsed
	#[error("Invalid value for {var}: {message}")]
	EnvError {
		/// Name of the offending variable
		var: String,
		/// Why the value was rejected
		message: String,
	},
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;
