//! In-memory session history.
//!
//! [`MemoryHistory`] behaves like a browser tab's history without a browser:
//! an entry stack with a cursor, commit targets resolved relative to the
//! current entry, and traversal listeners fired on [`back`](MemoryHistory::back),
//! [`forward`](MemoryHistory::forward) and [`go`](MemoryHistory::go) but never on
//! commits.

use crate::config::{ConfigError, HistoryConfig};
use pathsync_core::host::{ChangeListener, HostLocation, ListenerId, NavigationHost};
use pathsync_core::{NavigationError, Result};
use std::cell::{Cell, RefCell};
use std::fmt;
use url::Url;

/// An in-process [`NavigationHost`].
pub struct MemoryHistory {
	entries: RefCell<Vec<Url>>,
	index: Cell<usize>,
	title: RefCell<String>,
	listeners: RefCell<Vec<(ListenerId, ChangeListener)>>,
	next_listener: Cell<u64>,
}

impl MemoryHistory {
	/// Creates a history with a single entry at `initial_location`.
	pub fn new(initial_location: &str) -> std::result::Result<Self, ConfigError> {
		Self::from_config(&HistoryConfig::new(initial_location))
	}

	/// Creates a history from `config`.
	pub fn from_config(config: &HistoryConfig) -> std::result::Result<Self, ConfigError> {
		let origin = Url::parse(&config.origin).map_err(|source| ConfigError::InvalidOrigin {
			origin: config.origin.clone(),
			source,
		})?;
		if !origin.origin().is_tuple() {
			return Err(ConfigError::OpaqueOrigin {
				origin: config.origin.clone(),
			});
		}
		let initial =
			origin
				.join(&config.initial_location)
				.map_err(|source| ConfigError::InvalidLocation {
					location: config.initial_location.clone(),
					source,
				})?;

		Ok(Self {
			entries: RefCell::new(vec![initial]),
			index: Cell::new(0),
			title: RefCell::new(config.title.clone()),
			listeners: RefCell::new(Vec::new()),
			next_listener: Cell::new(0),
		})
	}

	/// Sets the document title passed through on later commits.
	pub fn set_title(&self, title: impl Into<String>) {
		*self.title.borrow_mut() = title.into();
	}

	/// Moves one entry back. Returns `false` at the first entry.
	pub fn back(&self) -> bool {
		self.go(-1)
	}

	/// Moves one entry forward. Returns `false` at the last entry.
	pub fn forward(&self) -> bool {
		self.go(1)
	}

	/// Moves the cursor by `delta` entries and notifies traversal listeners.
	///
	/// Out-of-range moves and `go(0)` do nothing and return `false`.
	pub fn go(&self, delta: isize) -> bool {
		let len = self.entries.borrow().len();
		let target = match self.index.get().checked_add_signed(delta) {
			Some(target) if delta != 0 && target < len => target,
			_ => return false,
		};
		self.index.set(target);
		tracing::debug!(delta, index = target, "history traversal");

		let listeners: Vec<ChangeListener> = self
			.listeners
			.borrow()
			.iter()
			.map(|(_, listener)| listener.clone())
			.collect();
		for listener in listeners {
			listener();
		}
		true
	}

	/// Returns the cursor position.
	pub fn index(&self) -> usize {
		self.index.get()
	}

	/// Returns every entry as an encoded `path?query#hash` string.
	pub fn entries(&self) -> Vec<String> {
		self.entries.borrow().iter().map(relative).collect()
	}

	/// Returns the current entry as an encoded string.
	pub fn current(&self) -> String {
		relative(&self.current_url())
	}

	/// Returns the number of installed traversal listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	fn current_url(&self) -> Url {
		self.entries.borrow()[self.index.get()].clone()
	}

	fn resolve(&self, target: &str) -> Result<Url> {
		let base = self.current_url();
		let resolved = base
			.join(target)
			.map_err(|err| NavigationError::Commit(format!("invalid target '{target}': {err}")))?;
		if resolved.origin() != base.origin() {
			return Err(NavigationError::Commit(format!(
				"target '{target}' leaves origin {}",
				base.origin().ascii_serialization()
			)));
		}
		Ok(resolved)
	}
}

/// Encodes `url` without scheme and origin.
fn relative(url: &Url) -> String {
	let mut out = url.path().to_string();
	if let Some(query) = url.query().filter(|q| !q.is_empty()) {
		out.push('?');
		out.push_str(query);
	}
	if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
		out.push('#');
		out.push_str(fragment);
	}
	out
}

impl NavigationHost for MemoryHistory {
	fn location(&self) -> HostLocation {
		let url = self.current_url();
		let search = url
			.query()
			.filter(|q| !q.is_empty())
			.map(|q| format!("?{q}"))
			.unwrap_or_default();
		let hash = url
			.fragment()
			.filter(|f| !f.is_empty())
			.map(|f| format!("#{f}"))
			.unwrap_or_default();
		HostLocation::new(url.path(), search, hash)
	}

	fn title(&self) -> String {
		self.title.borrow().clone()
	}

	fn push_entry(&self, title: &str, target: &str) -> Result<()> {
		let url = self.resolve(target)?;
		let mut entries = self.entries.borrow_mut();
		entries.truncate(self.index.get() + 1);
		entries.push(url);
		self.index.set(entries.len() - 1);
		tracing::trace!(title, target, length = entries.len(), "pushed history entry");
		Ok(())
	}

	fn replace_entry(&self, title: &str, target: &str) -> Result<()> {
		let url = self.resolve(target)?;
		self.entries.borrow_mut()[self.index.get()] = url;
		tracing::trace!(title, target, "replaced history entry");
		Ok(())
	}

	fn history_length(&self) -> usize {
		self.entries.borrow().len()
	}

	fn add_change_listener(&self, listener: ChangeListener) -> ListenerId {
		let id = ListenerId::new(self.next_listener.get());
		self.next_listener.set(id.get() + 1);
		self.listeners.borrow_mut().push((id, listener));
		id
	}

	fn remove_change_listener(&self, id: ListenerId) -> bool {
		let mut listeners = self.listeners.borrow_mut();
		let before = listeners.len();
		listeners.retain(|(installed, _)| *installed != id);
		listeners.len() < before
	}
}

impl fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryHistory")
			.field("entries", &self.entries())
			.field("index", &self.index.get())
			.field("listeners", &self.listener_count())
			.finish()
	}
}
