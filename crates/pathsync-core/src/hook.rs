//! Per-consumer adapter.
//!
//! [`UsePath`] binds one consumer to a [`PathContext`]: mounting registers a
//! subscriber, dropping the handle unregisters it. The handle exposes the
//! consumer's last known location and the two navigation entry points.
//!
//! ```ignore
//! use pathsync_core::{PartialLocation, PathContext, UsePath};
//!
//! let context = PathContext::new(host);
//! let path = UsePath::mount(&context);
//!
//! path.set_path(PartialLocation::new().hash("top"))?;
//! assert_eq!(path.location().fullpath(), "/current?val1=2#top");
//! ```

use crate::context::PathContext;
use crate::error::{NavigationError, Result};
use crate::intent::NavigationIntent;
use crate::location::Location;
use crate::navigator::{Action, NavigationKind, Navigator, transition};
use crate::registry::Subscription;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A mounted consumer of the shared location.
///
/// Dropping the handle unmounts the consumer.
pub struct UsePath {
	navigator: Navigator,
	state: Rc<RefCell<Location>>,
	subscription: Subscription,
}

impl UsePath {
	/// Mounts a consumer on `context`.
	pub fn mount(context: &PathContext) -> Self {
		Self::mount_with(context, |_| {})
	}

	/// Mounts a consumer that runs `on_change` after every re-read.
	///
	/// `on_change` plays the role of the consumer's re-render and receives
	/// the fresh location.
	pub fn mount_with<F>(context: &PathContext, on_change: F) -> Self
	where
		F: Fn(&Location) + 'static,
	{
		let navigator = context.navigator().clone();
		let state = Rc::new(RefCell::new(navigator.snapshot()));

		let subscription = context.registry().subscribe({
			let host = Rc::clone(context.host());
			let state = Rc::clone(&state);
			move |_signal: &Action| {
				// Subscribers only ever re-read; commits happen once, in dispatch.
				match transition(host.as_ref(), &Action::Resync) {
					Ok(next) => {
						*state.borrow_mut() = next.clone();
						on_change(&next);
					}
					Err(err) => tracing::warn!(error = %err, "resync failed"),
				}
			}
		});

		Self {
			navigator,
			state,
			subscription,
		}
	}

	/// Returns this consumer's last known location.
	pub fn location(&self) -> Location {
		self.state.borrow().clone()
	}

	/// Commits `intent` as a new history entry.
	///
	/// Partial intents are resolved against this consumer's last known
	/// location.
	pub fn set_path(&self, intent: impl Into<NavigationIntent>) -> Result<()> {
		self.dispatch(NavigationKind::Push, intent.into())
	}

	/// Overwrites the current history entry with `intent`.
	pub fn replace_path(&self, intent: impl Into<NavigationIntent>) -> Result<()> {
		self.dispatch(NavigationKind::Replace, intent.into())
	}

	/// Returns `true` while the consumer is registered.
	pub fn is_mounted(&self) -> bool {
		self.subscription.is_active()
	}

	fn dispatch(&self, kind: NavigationKind, intent: NavigationIntent) -> Result<()> {
		let current = self.location();
		self.navigator.dispatch(kind, intent, &current)?;
		Ok(())
	}
}

impl fmt::Debug for UsePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("UsePath")
			.field("location", &*self.state.borrow())
			.field("mounted", &self.is_mounted())
			.finish()
	}
}

/// Mounts a consumer on the thread's installed [`PathContext`].
///
/// Fails with [`NavigationError::NoContext`] when none is installed.
pub fn use_path() -> Result<UsePath> {
	let context = PathContext::current().ok_or(NavigationError::NoContext)?;
	Ok(UsePath::mount(&context))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::host::NavigationHost;
	use crate::intent::PartialLocation;
	use crate::testing::TestHost;
	use rstest::rstest;
	use serial_test::serial;
	use std::cell::Cell;

	fn context(initial: &str) -> (Rc<TestHost>, PathContext) {
		let host = Rc::new(TestHost::new(initial));
		let context = PathContext::from_shared(host.clone());
		(host, context)
	}

	#[rstest]
	fn test_mount_reads_current_location() {
		let (_host, context) = context("/component1/component2?query1=a&query2=b#hashvalue");

		let path = UsePath::mount(&context);

		let location = path.location();
		assert_eq!(location.path(), "/component1/component2");
		assert_eq!(location.query(), "query1=a&query2=b");
		assert_eq!(location.hash(), "hashvalue");
	}

	#[rstest]
	fn test_mount_and_drop_track_registry() {
		// Arrange
		let (host, context) = context("/");

		// Act
		let first = UsePath::mount(&context);
		let second = UsePath::mount(&context);

		// Assert
		assert_eq!(context.registry().len(), 2);
		assert_eq!(host.listener_count(), 1);
		drop(first);
		assert_eq!(host.listener_count(), 1);
		drop(second);
		assert_eq!(host.listener_count(), 0);
		assert!(context.registry().is_empty());
	}

	#[rstest]
	fn test_set_path_updates_all_consumers() {
		// Arrange
		let (_host, context) = context("/");
		let renders = Rc::new(Cell::new(0));
		let a = UsePath::mount(&context);
		let b = UsePath::mount_with(&context, {
			let renders = Rc::clone(&renders);
			move |_| renders.set(renders.get() + 1)
		});

		// Act
		a.set_path("/next?x=1").unwrap();

		// Assert
		assert_eq!(a.location().fullpath(), "/next?x=1");
		assert_eq!(b.location().fullpath(), "/next?x=1");
		assert_eq!(renders.get(), 1);
	}

	#[rstest]
	fn test_replace_path_keeps_history_length() {
		// Arrange
		let (host, context) = context("/current?val1=2");
		let path = UsePath::mount(&context);
		let before = host.history_length();

		// Act
		path.replace_path(PartialLocation::new().query("abc=5")).unwrap();

		// Assert
		assert_eq!(host.history_length(), before);
		assert_eq!(path.location().fullpath(), "/current?abc=5");
	}

	#[rstest]
	fn test_set_path_grows_history_by_one() {
		let (host, context) = context("/");
		let path = UsePath::mount(&context);
		let before = host.history_length();

		path.set_path(PartialLocation::new().path("/new")).unwrap();

		assert_eq!(host.history_length(), before + 1);
	}

	#[rstest]
	fn test_partial_intent_resolves_against_own_snapshot() {
		// Arrange
		let (host, context) = context("/first?q=1");
		let path = UsePath::mount(&context);
		// A commit the registry never hears about leaves the consumer stale.
		host.push_entry("", "/elsewhere").unwrap();

		// Act
		path.set_path(PartialLocation::new().hash("h")).unwrap();

		// Assert
		assert_eq!(path.location().fullpath(), "/first?q=1#h");
	}

	#[rstest]
	fn test_host_traversal_updates_consumers() {
		// Arrange
		let (host, context) = context("/start");
		let path = UsePath::mount(&context);
		path.set_path("/abc/def/ghi?jkl=mno#pqr").unwrap();
		path.set_path("/after-push").unwrap();

		// Act
		host.go(-1);

		// Assert
		assert_eq!(path.location().fullpath(), "/abc/def/ghi?jkl=mno#pqr");

		host.go(1);
		let location = path.location();
		assert_eq!(location.path(), "/after-push");
		assert_eq!(location.query(), "");
		assert_eq!(location.hash(), "");
	}

	#[rstest]
	fn test_unmounted_consumer_is_not_updated() {
		let (host, context) = context("/start");
		let renders = Rc::new(Cell::new(0));
		let watcher = UsePath::mount_with(&context, {
			let renders = Rc::clone(&renders);
			move |_| renders.set(renders.get() + 1)
		});
		let driver = UsePath::mount(&context);
		host.push_entry("", "/next").unwrap();

		drop(watcher);
		host.go(-1);
		driver.set_path("/again").unwrap();

		assert_eq!(renders.get(), 0);
	}

	#[rstest]
	fn test_commit_error_is_returned() {
		let (host, context) = context("/");
		let path = UsePath::mount(&context);
		host.reject_commits();

		let result = path.set_path("/blocked");

		assert!(matches!(result, Err(NavigationError::Commit(_))));
		assert_eq!(path.location().fullpath(), "/");
	}

	#[rstest]
	#[serial(path_context)]
	fn test_use_path_requires_installed_context() {
		// Arrange
		PathContext::reset();

		// Act
		let missing = use_path();

		// Assert
		assert!(matches!(missing, Err(NavigationError::NoContext)));

		PathContext::new(TestHost::new("/global")).install();
		let path = use_path().unwrap();
		assert_eq!(path.location().fullpath(), "/global");
		drop(path);
		PathContext::reset();
	}
}
