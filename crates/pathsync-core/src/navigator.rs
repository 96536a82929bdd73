//! Navigation controller.
//!
//! The controller is a small state machine over the last known
//! [`Location`]. Every action produces a fresh snapshot read from the host;
//! `Push` and `Replace` commit to the host history first.
//!
//! A dispatch resolves the intent, commits it, and then sends
//! [`Action::Resync`] to every subscriber of the registry (not only the
//! caller), all before returning. No subscriber can observe the previous
//! target once `dispatch` has returned.

use crate::error::{NavigationError, Result};
use crate::host::NavigationHost;
use crate::intent::NavigationIntent;
use crate::location::Location;
use crate::registry::SubscriberRegistry;
use crate::snapshot;
use std::fmt;
use std::str::FromStr;

/// How a navigation is committed to the host history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKind {
	/// Append a new history entry.
	Push,
	/// Overwrite the current history entry.
	Replace,
}

impl NavigationKind {
	/// Returns the action name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Push => "push",
			Self::Replace => "replace",
		}
	}
}

impl fmt::Display for NavigationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for NavigationKind {
	type Err = NavigationError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"push" => Ok(Self::Push),
			"replace" => Ok(Self::Replace),
			other => Err(NavigationError::UnknownAction(other.to_string())),
		}
	}
}

/// Input of the navigation state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Commit a new entry, then re-read.
	Push(Location),
	/// Overwrite the current entry, then re-read.
	Replace(Location),
	/// Re-read without committing.
	Resync,
}

impl Action {
	/// Builds an action from its name.
	///
	/// `target` is ignored for `resync`. Any name other than `push`,
	/// `replace` or `resync` is a caller bug and yields
	/// [`NavigationError::UnknownAction`].
	pub fn from_name(name: &str, target: Location) -> Result<Self> {
		match name {
			"resync" => Ok(Self::Resync),
			other => Ok(Self::commit(other.parse()?, target)),
		}
	}

	/// Builds the commit action for `kind`.
	pub fn commit(kind: NavigationKind, target: Location) -> Self {
		match kind {
			NavigationKind::Push => Self::Push(target),
			NavigationKind::Replace => Self::Replace(target),
		}
	}

	/// Returns the action name.
	pub const fn name(&self) -> &'static str {
		match self {
			Self::Push(_) => "push",
			Self::Replace(_) => "replace",
			Self::Resync => "resync",
		}
	}
}

/// Applies `action` against `host` and returns the resulting snapshot.
///
/// This is the transition function: all three actions end with a fresh
/// [`snapshot::read`]; `Push` and `Replace` commit their target before it.
/// The host title is passed through unchanged.
pub fn transition(host: &dyn NavigationHost, action: &Action) -> Result<Location> {
	match action {
		Action::Push(target) => {
			host.push_entry(&host.title(), target.fullpath())?;
		}
		Action::Replace(target) => {
			host.replace_entry(&host.title(), target.fullpath())?;
		}
		Action::Resync => {}
	}
	Ok(snapshot::read(host))
}

/// Commits navigation intents and fans the result out to subscribers.
#[derive(Clone, Debug)]
pub struct Navigator {
	registry: SubscriberRegistry,
}

impl Navigator {
	/// Creates a navigator broadcasting through `registry`.
	pub fn new(registry: SubscriberRegistry) -> Self {
		Self { registry }
	}

	/// Returns the registry this navigator broadcasts to.
	pub fn registry(&self) -> &SubscriberRegistry {
		&self.registry
	}

	/// Reads the current location from the host.
	pub fn snapshot(&self) -> Location {
		snapshot::read(self.registry.host().as_ref())
	}

	/// Runs one state machine transition without broadcasting.
	pub fn apply(&self, action: &Action) -> Result<Location> {
		transition(self.registry.host().as_ref(), action)
	}

	/// Re-reads the host location. Calling it twice without an intervening
	/// commit yields equal locations.
	pub fn resync(&self) -> Location {
		self.snapshot()
	}

	/// Resolves `intent` against `current`, commits it and re-synchronizes
	/// every subscriber.
	///
	/// Returns the snapshot read right after the commit. On a failed commit
	/// nothing is broadcast.
	pub fn dispatch(
		&self,
		kind: NavigationKind,
		intent: impl Into<NavigationIntent>,
		current: &Location,
	) -> Result<Location> {
		let target = intent.into().resolve(current);
		tracing::debug!(%kind, target = %target, "committing navigation");

		let next = self
			.apply(&Action::commit(kind, target))
			.inspect_err(|err| tracing::warn!(%kind, error = %err, "navigation commit failed"))?;

		self.registry.broadcast(&Action::Resync);
		Ok(next)
	}

	/// Dispatches a [`NavigationKind::Push`].
	pub fn push(
		&self,
		intent: impl Into<NavigationIntent>,
		current: &Location,
	) -> Result<Location> {
		self.dispatch(NavigationKind::Push, intent, current)
	}

	/// Dispatches a [`NavigationKind::Replace`].
	pub fn replace(
		&self,
		intent: impl Into<NavigationIntent>,
		current: &Location,
	) -> Result<Location> {
		self.dispatch(NavigationKind::Replace, intent, current)
	}
}
