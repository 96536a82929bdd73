//! # Pathsync Core
//!
//! A reactive view of a browser-style location (path, query string, hash
//! fragment) shared by every mounted consumer.
//!
//! ## Architecture
//!
//! ```text
//! host traversal ──► SubscriberRegistry ──► every UsePath re-reads the host
//!                          ▲
//! UsePath::set_path ──► Navigator::dispatch ──► commit to host
//! ```
//!
//! - [`location`]: the [`Location`] value and the fullpath codec
//! - [`snapshot`]: reads the host into a [`Location`]
//! - [`intent`]: full and partial navigation requests
//! - [`registry`]: subscriber list and the shared host listener
//! - [`navigator`]: the push/replace/resync state machine
//! - [`context`]: a host bound to its registry, optionally installed per thread
//! - [`hook`]: the per-consumer adapter
//!
//! Everything runs on one thread; the types are `!Send`.

pub mod context;
pub mod error;
pub mod hook;
pub mod host;
pub mod intent;
pub mod location;
pub mod navigator;
pub mod registry;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod testing;

pub use context::PathContext;
pub use error::{NavigationError, Result};
pub use hook::{UsePath, use_path};
pub use host::{ChangeListener, HostLocation, ListenerId, NavigationHost};
pub use intent::{NavigationIntent, PartialLocation};
pub use location::Location;
pub use navigator::{Action, NavigationKind, Navigator};
pub use registry::{Subscriber, SubscriberRegistry, Subscription};
