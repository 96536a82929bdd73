//! Shared navigation context.
//!
//! A [`PathContext`] ties one [`NavigationHost`] to its
//! [`SubscriberRegistry`]. Consumers mounted against the same context observe
//! the same navigation source.
//!
//! One context can be installed per thread as the process-wide default used by
//! [`use_path`](crate::use_path). Tests install their own host and call
//! [`PathContext::reset`] afterwards.

use crate::host::NavigationHost;
use crate::location::Location;
use crate::navigator::Navigator;
use crate::registry::SubscriberRegistry;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
	static CURRENT: RefCell<Option<PathContext>> = const { RefCell::new(None) };
}

/// A navigation host together with its subscriber registry.
///
/// Cloning is cheap and yields a handle to the same registry.
#[derive(Clone, Debug)]
pub struct PathContext {
	navigator: Navigator,
}

impl PathContext {
	/// Creates a context over `host`.
	pub fn new<H>(host: H) -> Self
	where
		H: NavigationHost + 'static,
	{
		Self::from_shared(Rc::new(host))
	}

	/// Creates a context over an already shared host.
	pub fn from_shared(host: Rc<dyn NavigationHost>) -> Self {
		Self {
			navigator: Navigator::new(SubscriberRegistry::new(host)),
		}
	}

	/// Returns the navigator committing to this context's host.
	pub fn navigator(&self) -> &Navigator {
		&self.navigator
	}

	/// Returns the subscriber registry.
	pub fn registry(&self) -> &SubscriberRegistry {
		self.navigator.registry()
	}

	/// Returns the navigation host.
	pub fn host(&self) -> &Rc<dyn NavigationHost> {
		self.registry().host()
	}

	/// Reads the current location.
	pub fn location(&self) -> Location {
		self.navigator.snapshot()
	}

	/// Installs this context as the thread's default and returns the one it
	/// replaced.
	pub fn install(self) -> Option<PathContext> {
		tracing::debug!("installing path context");
		CURRENT.with(|current| current.borrow_mut().replace(self))
	}

	/// Returns the installed default context.
	pub fn current() -> Option<PathContext> {
		CURRENT.with(|current| current.borrow().clone())
	}

	/// Removes the installed default context.
	pub fn reset() -> Option<PathContext> {
		CURRENT.with(|current| current.borrow_mut().take())
	}
}
