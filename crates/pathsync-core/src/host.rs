//! Host navigation source abstraction.
//!
//! A [`NavigationHost`] is the single source of truth for the current
//! location: the browser's `window.location` and `window.history`, or an
//! in-memory stand-in. Everything in this crate reads and commits through
//! this trait.

use crate::error::Result;
use std::fmt;
use std::rc::Rc;

/// Callback fired by the host on back/forward traversal.
pub type ChangeListener = Rc<dyn Fn()>;

/// Identifier of a change listener installed on a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
	/// Wraps a host-assigned listener number.
	pub const fn new(id: u64) -> Self {
		Self(id)
	}

	/// Returns the raw listener number.
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for ListenerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "listener#{}", self.0)
	}
}

/// Raw location strings as the host reports them.
///
/// `search` keeps its leading `?` and `hash` its leading `#`, like
/// `window.location.search` and `window.location.hash`. Either may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostLocation {
	/// Path component (`window.location.pathname`).
	pub pathname: String,
	/// Query string including the leading `?`, or empty.
	pub search: String,
	/// Hash fragment including the leading `#`, or empty.
	pub hash: String,
}

impl HostLocation {
	/// Creates a host location from raw strings.
	pub fn new(
		pathname: impl Into<String>,
		search: impl Into<String>,
		hash: impl Into<String>,
	) -> Self {
		Self {
			pathname: pathname.into(),
			search: search.into(),
			hash: hash.into(),
		}
	}
}

/// The ambient navigation source.
///
/// Change listeners must fire only on history traversal (back, forward,
/// `go`). Programmatic commits through [`push_entry`](Self::push_entry) and
/// [`replace_entry`](Self::replace_entry) never fire them.
pub trait NavigationHost {
	/// Returns the current location.
	fn location(&self) -> HostLocation;

	/// Returns the document title passed through on commits.
	fn title(&self) -> String;

	/// Appends a history entry targeting `target`.
	fn push_entry(&self, title: &str, target: &str) -> Result<()>;

	/// Overwrites the current history entry with `target`.
	fn replace_entry(&self, title: &str, target: &str) -> Result<()>;

	/// Returns the number of entries in the session history.
	fn history_length(&self) -> usize;

	/// Installs a traversal listener.
	fn add_change_listener(&self, listener: ChangeListener) -> ListenerId;

	/// Removes a traversal listener. Returns `false` if it was not installed.
	fn remove_change_listener(&self, id: ListenerId) -> bool;
}
