//! Configuration for the in-memory history.
//!
//! ```
//! use pathsync_history::HistoryConfig;
//!
//! let config = HistoryConfig::from_toml_str(
//!     r#"
//!     initial_location = "/dashboard?tab=recent"
//!     title = "Dashboard"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.initial_location, "/dashboard?tab=recent");
//! assert_eq!(config.origin, "http://localhost");
//! ```

use serde::Deserialize;

/// Error type for history configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The TOML document could not be parsed.
	#[error("invalid history config: {0}")]
	Parse(#[from] toml::de::Error),

	/// The origin is not an absolute URL.
	#[error("invalid origin '{origin}': {source}")]
	InvalidOrigin {
		/// The configured origin.
		origin: String,
		/// Parse failure.
		source: url::ParseError,
	},

	/// The origin has no scheme, host and port to compare commits against
	/// (`file:`, `data:` and similar URLs).
	#[error("origin '{origin}' is opaque; use an http(s) origin")]
	OpaqueOrigin {
		/// The configured origin.
		origin: String,
	},

	/// The initial location cannot be resolved against the origin.
	#[error("invalid initial location '{location}': {source}")]
	InvalidLocation {
		/// The configured location.
		location: String,
		/// Parse failure.
		source: url::ParseError,
	},
}

/// Settings for a [`MemoryHistory`](crate::MemoryHistory).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
	/// Location of the first history entry.
	pub initial_location: String,
	/// Document title passed through on commits.
	pub title: String,
	/// Origin relative targets are resolved against. Must be a tuple origin
	/// (scheme, host, port); commits that leave it are rejected.
	pub origin: String,
}

impl Default for HistoryConfig {
	fn default() -> Self {
		Self {
			initial_location: "/".to_string(),
			title: String::new(),
			origin: "http://localhost".to_string(),
		}
	}
}

impl HistoryConfig {
	/// Creates a configuration starting at `initial_location`.
	pub fn new(initial_location: impl Into<String>) -> Self {
		Self {
			initial_location: initial_location.into(),
			..Self::default()
		}
	}

	/// Sets the document title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Sets the origin.
	pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
		self.origin = origin.into();
		self
	}

	/// Parses a configuration from TOML. Missing keys take their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}
}
