//! Navigation hosts.
//!
//! This module provides access to `pathsync-history`: the in-memory session
//! history and, on `wasm32`, the browser History API binding.
//!
//! # Examples
//!
//! ```rust
//! use pathsync::history::{HistoryConfig, MemoryHistory};
//!
//! let config = HistoryConfig::new("/inbox").with_title("Inbox");
//! let history = MemoryHistory::from_config(&config).unwrap();
//! assert_eq!(history.current(), "/inbox");
//! ```

pub use pathsync_history::*;
