//! Minimal in-memory host for unit tests.

use crate::error::{NavigationError, Result};
use crate::host::{ChangeListener, HostLocation, ListenerId, NavigationHost};
use crate::location::decode;
use std::cell::{Cell, RefCell};

pub(crate) struct TestHost {
	entries: RefCell<Vec<String>>,
	cursor: Cell<usize>,
	listeners: RefCell<Vec<(ListenerId, ChangeListener)>>,
	next_listener: Cell<u64>,
	reject_commits: Cell<bool>,
}

impl TestHost {
	pub(crate) fn new(initial: &str) -> Self {
		Self {
			entries: RefCell::new(vec![initial.to_string()]),
			cursor: Cell::new(0),
			listeners: RefCell::new(Vec::new()),
			next_listener: Cell::new(0),
			reject_commits: Cell::new(false),
		}
	}

	pub(crate) fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	pub(crate) fn reject_commits(&self) {
		self.reject_commits.set(true);
	}

	pub(crate) fn go(&self, delta: isize) {
		let target = self.cursor.get().checked_add_signed(delta);
		match target {
			Some(index) if index < self.entries.borrow().len() => self.cursor.set(index),
			_ => return,
		}
		let listeners: Vec<ChangeListener> = self
			.listeners
			.borrow()
			.iter()
			.map(|(_, listener)| listener.clone())
			.collect();
		for listener in listeners {
			listener();
		}
	}

	fn check(&self) -> Result<()> {
		if self.reject_commits.get() {
			return Err(NavigationError::Commit("rejected by test host".to_string()));
		}
		Ok(())
	}
}

impl NavigationHost for TestHost {
	fn location(&self) -> HostLocation {
		let entry = self.entries.borrow()[self.cursor.get()].clone();
		let location = decode(&entry);
		let search = if location.query().is_empty() {
			String::new()
		} else {
			format!("?{}", location.query())
		};
		let hash = if location.hash().is_empty() {
			String::new()
		} else {
			format!("#{}", location.hash())
		};
		HostLocation::new(location.path(), search, hash)
	}

	fn title(&self) -> String {
		"test".to_string()
	}

	fn push_entry(&self, _title: &str, target: &str) -> Result<()> {
		self.check()?;
		let mut entries = self.entries.borrow_mut();
		entries.truncate(self.cursor.get() + 1);
		entries.push(target.to_string());
		self.cursor.set(entries.len() - 1);
		Ok(())
	}

	fn replace_entry(&self, _title: &str, target: &str) -> Result<()> {
		self.check()?;
		self.entries.borrow_mut()[self.cursor.get()] = target.to_string();
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
