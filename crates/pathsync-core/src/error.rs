//! Error types for navigation operations.

/// Error type for navigation operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
	/// The host rejected a history commit.
	#[error("navigation commit failed: {0}")]
	Commit(String),

	/// An action name outside `push`, `replace` and `resync`.
	///
	/// The typed API cannot produce this; it is only reachable when an
	/// action is parsed from a string and indicates a caller bug.
	#[error("unknown action '{0}'")]
	UnknownAction(String),

	/// The host environment cannot be reached (no window, no history).
	#[error("navigation host unavailable: {0}")]
	HostUnavailable(String),

	/// No [`PathContext`](crate::PathContext) is installed on this thread.
	#[error("no path context installed")]
	NoContext,
}

/// Result alias for navigation operations.
pub type Result<T> = std::result::Result<T, NavigationError>;
