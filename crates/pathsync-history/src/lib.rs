//! # Pathsync History
//!
//! Navigation hosts for `pathsync-core`.
//!
//! - [`MemoryHistory`]: an in-process session history with an entry stack,
//!   relative target resolution and simulated back/forward traversal. Used in
//!   tests and on native targets.
//! - `BrowserHistory` (`wasm32` only): the page's `window.history`,
//!   `window.location` and `popstate` event.
//!
//! ## Example
//!
//! ```
//! use pathsync_core::{PathContext, UsePath};
//! use pathsync_history::MemoryHistory;
//! use std::rc::Rc;
//!
//! let history = Rc::new(MemoryHistory::new("/").unwrap());
//! let context = PathContext::from_shared(history.clone());
//! let path = UsePath::mount(&context);
//!
//! path.set_path("/articles?page=2").unwrap();
//! history.back();
//! assert_eq!(path.location().fullpath(), "/");
//! ```

pub mod config;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;
pub use config::{ConfigError, HistoryConfig};
pub use memory::MemoryHistory;
