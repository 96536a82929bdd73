//! Navigation intents.
//!
//! A caller asks for a new location either with a complete target
//! ([`NavigationIntent::FullTarget`]) or with a partial update
//! ([`NavigationIntent::Partial`]) that is merged against the caller's last
//! known snapshot.
//!
//! ## Merge rules for partial updates
//!
//! - Setting `path` clears `query` and `hash` unless they are set in the same
//!   update.
//! - Setting `query` without `path` clears `hash` unless it is set in the same
//!   update. The current `path` is kept.
//! - Anything still unset is inherited from the current snapshot.
//!
//! ```
//! use pathsync_core::{Location, NavigationIntent, PartialLocation};
//!
//! let current = Location::new("/current", "val1=2", "");
//!
//! let intent = NavigationIntent::from(PartialLocation::new().hash("top"));
//! assert_eq!(intent.resolve(&current).fullpath(), "/current?val1=2#top");
//!
//! let intent = NavigationIntent::from(PartialLocation::new().path("/new"));
//! assert_eq!(intent.resolve(&current).fullpath(), "/new");
//! ```

use crate::location::{Location, decode};

/// A request to change the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
	/// An encoded `path?query#hash` target replacing the whole location.
	FullTarget(String),
	/// A partial update merged against the current snapshot.
	Partial(PartialLocation),
}

impl NavigationIntent {
	/// Resolves the intent to a complete location.
	///
	/// `current` is the snapshot unset fields are inherited from.
	pub fn resolve(&self, current: &Location) -> Location {
		match self {
			Self::FullTarget(fullpath) => decode(fullpath),
			Self::Partial(partial) => partial.resolve(current),
		}
	}
}

impl From<&str> for NavigationIntent {
	fn from(fullpath: &str) -> Self {
		Self::FullTarget(fullpath.to_string())
	}
}

impl From<String> for NavigationIntent {
	fn from(fullpath: String) -> Self {
		Self::FullTarget(fullpath)
	}
}

impl From<&String> for NavigationIntent {
	fn from(fullpath: &String) -> Self {
		Self::FullTarget(fullpath.clone())
	}
}

impl From<Location> for NavigationIntent {
	fn from(location: Location) -> Self {
		Self::FullTarget(location.into_fullpath())
	}
}

impl From<&Location> for NavigationIntent {
	fn from(location: &Location) -> Self {
		Self::FullTarget(location.fullpath().to_string())
	}
}

impl From<PartialLocation> for NavigationIntent {
	fn from(partial: PartialLocation) -> Self {
		Self::Partial(partial)
	}
}

/// A partial location update.
///
/// An empty update inherits everything and re-targets the current location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialLocation {
	path: Option<String>,
	query: Option<String>,
	hash: Option<String>,
}

impl PartialLocation {
	/// Creates an empty update.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the path.
	pub fn path(mut self, path: impl Into<String>) -> Self {
		self.path = Some(path.into());
		self
	}

	/// Sets the query string (without the leading `?`).
	pub fn query(mut self, query: impl Into<String>) -> Self {
		self.query = Some(query.into());
		self
	}

	/// Sets the hash fragment (without the leading `#`).
	pub fn hash(mut self, hash: impl Into<String>) -> Self {
		self.hash = Some(hash.into());
		self
	}

	/// Returns `true` if no field is set.
	pub fn is_empty(&self) -> bool {
		self.path.is_none() && self.query.is_none() && self.hash.is_none()
	}

	/// Merges this update against `current`.
	///
	/// A field set to an empty string still counts as set: `path("")` clears
	/// query and hash, and `query("")` clears the hash.
	pub fn resolve(&self, current: &Location) -> Location {
		let mut query = self.query.clone();
		let mut hash = self.hash.clone();

		// A new path starts a fresh location; a new query drops the fragment.
		if self.path.is_some() {
			query.get_or_insert_with(String::new);
			hash.get_or_insert_with(String::new);
		} else if query.is_some() {
			hash.get_or_insert_with(String::new);
		}

		let path = self.path.as_deref().unwrap_or(current.path());
		let query = query.as_deref().unwrap_or(current.query());
		let hash = hash.as_deref().unwrap_or(current.hash());
		Location::new(path, query, hash)
	}
}
