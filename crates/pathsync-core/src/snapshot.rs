//! Snapshot reader.

use crate::host::NavigationHost;
use crate::location::Location;

/// Reads the host's current location into a fresh [`Location`].
///
/// The leading `?` and `#` are stripped and `fullpath` is re-derived from the
/// three parts, so a bare trailing `?` or `#` on the host URL does not leak
/// into the snapshot.
pub fn read(host: &dyn NavigationHost) -> Location {
	let raw = host.location();
	let query = raw.search.strip_prefix('?').unwrap_or(&raw.search);
	let hash = raw.hash.strip_prefix('#').unwrap_or(&raw.hash);
	Location::new(raw.pathname.as_str(), query, hash)
}
