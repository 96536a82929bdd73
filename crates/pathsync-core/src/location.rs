//! Location value and the fullpath codec.
//!
//! A [`Location`] splits a navigable target into its path, query string and
//! hash fragment. The combined form (`fullpath`) is always derived from the
//! three parts with [`encode`], so a snapshot can never carry a stale
//! `fullpath`.
//!
//! ## Example
//!
//! ```
//! use pathsync_core::location::{Location, decode, encode};
//!
//! let location = decode("/users/42?tab=posts#latest");
//! assert_eq!(location.path(), "/users/42");
//! assert_eq!(location.query(), "tab=posts");
//! assert_eq!(location.hash(), "latest");
//!
//! assert_eq!(encode("/users/42", "", "latest"), "/users/42#latest");
//! ```

use serde::Serialize;
use std::fmt;

/// Structured decomposition of a navigable target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Location {
	path: String,
	query: String,
	hash: String,
	fullpath: String,
}

impl Location {
	/// Creates a location from its parts.
	///
	/// `query` must not carry a leading `?` and `hash` must not carry a
	/// leading `#`.
	pub fn new(path: impl Into<String>, query: impl Into<String>, hash: impl Into<String>) -> Self {
		let path = path.into();
		let query = query.into();
		let hash = hash.into();
		let fullpath = encode(&path, &query, &hash);

		Self {
			path,
			query,
			hash,
			fullpath,
		}
	}

	/// Parses an encoded fullpath. Alias for [`decode`].
	pub fn parse(fullpath: &str) -> Self {
		decode(fullpath)
	}

	/// Returns the path component.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the query string without the leading `?`.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Returns the hash fragment without the leading `#`.
	pub fn hash(&self) -> &str {
		&self.hash
	}

	/// Returns the encoded `path?query#hash` form.
	pub fn fullpath(&self) -> &str {
		&self.fullpath
	}

	/// Consumes the location and returns the encoded form.
	pub fn into_fullpath(self) -> String {
		self.fullpath
	}
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.fullpath)
	}
}

impl From<&str> for Location {
	fn from(fullpath: &str) -> Self {
		decode(fullpath)
	}
}

/// Splits an encoded fullpath into a [`Location`].
///
/// The hash is everything after the first `#`; the query is everything
/// between the first `?` (before the hash) and the hash. Missing segments
/// decode to empty strings.
pub fn decode(fullpath: &str) -> Location {
	let (rest, hash) = fullpath.split_once('#').unwrap_or((fullpath, ""));
	let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
	Location::new(path, query, hash)
}

/// Joins path, query and hash into an encoded fullpath.
///
/// Empty query or hash contribute nothing, so there is never a dangling
/// `?` or `#`.
pub fn encode(path: &str, query: &str, hash: &str) -> String {
	let mut fullpath = String::with_capacity(path.len() + query.len() + hash.len() + 2);
	fullpath.push_str(path);
	if !query.is_empty() {
		fullpath.push('?');
		fullpath.push_str(query);
	}
	if !hash.is_empty() {
		fullpath.push('#');
		fullpath.push_str(hash);
	}
	fullpath
}
