//! Subscriber registry.
//!
//! Every mounted consumer registers one callback here. The registry owns a
//! single host change listener, installed when the first subscriber attaches
//! and removed when the last one detaches; when the host fires it, every
//! subscriber receives [`Action::Resync`].
//!
//! Broadcasts iterate over a snapshot of the subscriber list, so callbacks
//! may attach or detach subscribers (including themselves) while a broadcast
//! is running without any other subscriber being skipped or called twice.

use crate::host::{ListenerId, NavigationHost};
use crate::navigator::Action;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// A subscriber callback.
///
/// Identity is the `Rc` allocation: detaching removes exactly one entry that
/// points to the same allocation.
pub type Subscriber = Rc<dyn Fn(&Action)>;

struct RegistryInner {
	host: Rc<dyn NavigationHost>,
	subscribers: RefCell<Vec<Subscriber>>,
	listener: Cell<Option<ListenerId>>,
}

impl RegistryInner {
	fn attach(self: &Rc<Self>, callback: Subscriber) {
		let count = {
			let mut subscribers = self.subscribers.borrow_mut();
			subscribers.push(callback);
			subscribers.len()
		};
		tracing::trace!(subscribers = count, "attached subscriber");

		if count == 1 {
			self.install_listener();
		}
	}

	fn detach(&self, callback: &Subscriber) -> bool {
		let remaining = {
			let mut subscribers = self.subscribers.borrow_mut();
			let Some(index) = subscribers.iter().position(|s| Rc::ptr_eq(s, callback)) else {
				return false;
			};
			subscribers.remove(index);
			subscribers.len()
		};
		tracing::trace!(subscribers = remaining, "detached subscriber");

		if remaining == 0 {
			self.remove_listener();
		}
		true
	}

	fn install_listener(self: &Rc<Self>) {
		if self.listener.get().is_some() {
			return;
		}
		let registry = Rc::downgrade(self);
		let id = self.host.add_change_listener(Rc::new(move || {
			if let Some(registry) = registry.upgrade() {
				registry.broadcast(&Action::Resync);
			}
		}));
		self.listener.set(Some(id));
		tracing::debug!(listener = %id, "installed host change listener");
	}

	fn remove_listener(&self) {
		if let Some(id) = self.listener.take() {
			self.host.remove_change_listener(id);
			tracing::debug!(listener = %id, "removed host change listener");
		}
	}

	fn broadcast(&self, action: &Action) {
		let snapshot: Vec<Subscriber> = self.subscribers.borrow().clone();
		tracing::trace!(subscribers = snapshot.len(), ?action, "broadcasting");
		for subscriber in snapshot {
			subscriber(action);
		}
	}
}

impl Drop for RegistryInner {
	fn drop(&mut self) {
		self.remove_listener();
	}
}

/// Process-wide list of mounted consumers for one navigation host.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone)]
pub struct SubscriberRegistry {
	inner: Rc<RegistryInner>,
}

impl SubscriberRegistry {
	/// Creates an empty registry over `host`. No listener is installed yet.
	pub fn new(host: Rc<dyn NavigationHost>) -> Self {
		Self {
			inner: Rc::new(RegistryInner {
				host,
				subscribers: RefCell::new(Vec::new()),
				listener: Cell::new(None),
			}),
		}
	}

	/// Registers `callback` and returns the handle that detaches it.
	///
	/// The first attachment installs the host change listener.
	pub fn attach(&self, callback: Subscriber) -> Subscription {
		self.inner.attach(Rc::clone(&callback));
		Subscription {
			registry: Rc::downgrade(&self.inner),
			callback: Some(callback),
		}
	}

	/// Registers a closure. Shorthand for [`attach`](Self::attach).
	pub fn subscribe<F>(&self, callback: F) -> Subscription
	where
		F: Fn(&Action) + 'static,
	{
		self.attach(Rc::new(callback))
	}

	/// Detaches the subscriber behind `subscription`.
	///
	/// Equivalent to dropping the subscription.
	pub fn detach(&self, subscription: Subscription) {
		subscription.detach();
	}

	/// Sends [`Action::Resync`] to every currently registered subscriber.
	pub fn resync_all(&self) {
		self.inner.broadcast(&Action::Resync);
	}

	pub(crate) fn broadcast(&self, action: &Action) {
		self.inner.broadcast(action);
	}

	/// Returns the number of registered subscribers.
	pub fn len(&self) -> usize {
		self.inner.subscribers.borrow().len()
	}

	/// Returns `true` if no subscriber is registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns `true` while the host change listener is installed.
	pub fn is_listening(&self) -> bool {
		self.inner.listener.get().is_some()
	}

	/// Returns the host this registry listens to.
	pub fn host(&self) -> &Rc<dyn NavigationHost> {
		&self.inner.host
	}
}

impl fmt::Debug for SubscriberRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SubscriberRegistry")
			.field("subscribers", &self.len())
			.field("listener", &self.inner.listener.get())
			.finish()
	}
}

/// Detach handle returned by [`SubscriberRegistry::attach`].
///
/// Dropping the handle detaches the subscriber, so every unmount path
/// releases its registration.
#[must_use = "dropping a Subscription detaches the subscriber immediately"]
pub struct Subscription {
	registry: Weak<RegistryInner>,
	callback: Option<Subscriber>,
}

impl Subscription {
	/// Detaches the subscriber now.
	pub fn detach(mut self) {
		self.release();
	}

	/// Returns `true` while the owning registry is alive.
	pub fn is_active(&self) -> bool {
		self.callback.is_some() && self.registry.strong_count() > 0
	}

	fn release(&mut self) {
		if let Some(callback) = self.callback.take()
			&& let Some(registry) = self.registry.upgrade()
		{
			registry.detach(&callback);
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.release();
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.is_active())
			.finish()
	}
}
