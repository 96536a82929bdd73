//! Location codec, subscriber registry, navigator and consumer adapter.
//!
//! This module provides access to everything in `pathsync-core`.
//!
//! # Examples
//!
//! ```rust
//! use pathsync::core::location::{decode, encode};
//! use pathsync::core::navigator::NavigationKind;
//!
//! assert_eq!(decode("/a?b=c#d").query(), "b=c");
//! assert_eq!(encode("/a", "", "d"), "/a#d");
//! assert_eq!("replace".parse::<NavigationKind>(), Ok(NavigationKind::Replace));
//! ```

pub use pathsync_core::*;
