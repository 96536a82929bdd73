//! Browser History API host.
//!
//! Reads `window.location`, commits through `history.pushState` /
//! `history.replaceState` and listens for `popstate`, which browsers fire on
//! back/forward traversal only.

use pathsync_core::host::{ChangeListener, HostLocation, ListenerId, NavigationHost};
use pathsync_core::{NavigationError, Result};
use std::cell::{Cell, RefCell};
use std::fmt;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, History, Window};

type PopStateClosure = Closure<dyn FnMut(Event)>;

/// [`NavigationHost`] backed by the page's `window`.
pub struct BrowserHistory {
	window: Window,
	listeners: RefCell<Vec<(ListenerId, PopStateClosure)>>,
	next_listener: Cell<u64>,
}

impl BrowserHistory {
	/// Binds to the global `window`.
	pub fn new() -> Result<Self> {
		let window = web_sys::window()
			.ok_or_else(|| NavigationError::HostUnavailable("no global window".to_string()))?;
		Ok(Self {
			window,
			listeners: RefCell::new(Vec::new()),
			next_listener: Cell::new(0),
		})
	}

	fn history(&self) -> Result<History> {
		self.window
			.history()
			.map_err(|err| NavigationError::HostUnavailable(js_message(&err)))
	}
}

fn js_message(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl NavigationHost for BrowserHistory {
	fn location(&self) -> HostLocation {
		let location = self.window.location();
		HostLocation::new(
			location.pathname().unwrap_or_default(),
			location.search().unwrap_or_default(),
			location.hash().unwrap_or_default(),
		)
	}

	fn title(&self) -> String {
		self.window
			.document()
			.map(|document| document.title())
			.unwrap_or_default()
	}

	fn push_entry(&self, title: &str, target: &str) -> Result<()> {
		self.history()?
			.push_state_with_url(&JsValue::NULL, title, Some(target))
			.map_err(|err| NavigationError::Commit(js_message(&err)))
	}

	fn replace_entry(&self, title: &str, target: &str) -> Result<()> {
		self.history()?
			.replace_state_with_url(&JsValue::NULL, title, Some(target))
			.map_err(|err| NavigationError::Commit(js_message(&err)))
	}

	fn history_length(&self) -> usize {
		self.history()
			.and_then(|history| {
				history
					.length()
					.map_err(|err| NavigationError::HostUnavailable(js_message(&err)))
			})
			.map(|length| length as usize)
			.unwrap_or_else(|err| {
				tracing::warn!(error = %err, "failed to read history length");
				0
			})
	}

	fn add_change_listener(&self, listener: ChangeListener) -> ListenerId {
		let id = ListenerId::new(self.next_listener.get());
		self.next_listener.set(id.get() + 1);

		let closure = PopStateClosure::new(move |_event: Event| listener());
		if let Err(err) = self
			.window
			.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
		{
			tracing::warn!(error = %js_message(&err), "failed to add popstate listener");
		}
		self.listeners.borrow_mut().push((id, closure));
		id
	}

	fn remove_change_listener(&self, id: ListenerId) -> bool {
		let closure = {
			let mut listeners = self.listeners.borrow_mut();
			let Some(index) = listeners.iter().position(|(installed, _)| *installed == id) else {
				return false;
			};
			listeners.remove(index).1
		};
		if let Err(err) = self
			.window
			.remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
		{
			tracing::warn!(error = %js_message(&err), "failed to remove popstate listener");
		}
		true
	}
}

impl Drop for BrowserHistory {
	fn drop(&mut self) {
		for (_, closure) in self.listeners.get_mut().drain(..) {
			let _ = self
				.window
				.remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
		}
	}
}

impl fmt::Debug for BrowserHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BrowserHistory")
			.field("listeners", &self.listeners.borrow().len())
			.finish()
	}
}
