//! # Pathsync
//!
//! A reactive view of a browser-style location shared by every mounted
//! consumer.
//!
//! Each consumer mounts a [`UsePath`] against a [`PathContext`]. The handle
//! exposes the current [`Location`] (path, query, hash, fullpath) and two
//! navigation entry points:
//!
//! - [`UsePath::set_path`] appends a history entry
//! - [`UsePath::replace_path`] overwrites the current entry
//!
//! Either call re-synchronizes every mounted consumer before it returns. Host
//! back/forward traversal re-synchronizes them as well.
//!
//! ## Crates
//!
//! - [`pathsync_core`]: codec, registry, navigator and the consumer adapter
//! - [`pathsync_history`]: navigation hosts (in-memory, browser)
//!
//! ## Example
//!
//! ```
//! use pathsync::prelude::*;
//! use std::rc::Rc;
//!
//! let history = Rc::new(MemoryHistory::new("/current?val1=2").unwrap());
//! let context = PathContext::from_shared(history.clone());
//!
//! let header = UsePath::mount(&context);
//! let sidebar = UsePath::mount(&context);
//!
//! header.set_path(PartialLocation::new().hash("top")).unwrap();
//! assert_eq!(sidebar.location().fullpath(), "/current?val1=2#top");
//!
//! sidebar.set_path(PartialLocation::new().path("/new")).unwrap();
//! assert_eq!(header.location().fullpath(), "/new");
//! ```

pub mod core;
pub mod history;

pub use pathsync_core::{
	Location, NavigationError, NavigationIntent, PartialLocation, PathContext, Result, UsePath,
	use_path,
};
pub use pathsync_history::{HistoryConfig, MemoryHistory};

#[cfg(target_arch = "wasm32")]
pub use pathsync_history::BrowserHistory;

/// Commonly used types.
pub mod prelude {
	pub use crate::{
		HistoryConfig, Location, MemoryHistory, NavigationError, NavigationIntent,
		PartialLocation, PathContext, UsePath, use_path,
	};

	#[cfg(target_arch = "wasm32")]
	pub use crate::BrowserHistory;
}
