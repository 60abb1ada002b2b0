//! Reference normalization and lookup.

use super::types::{Snapshot, SnapshotNode};

/// Strip the optional leading `@` marker: `@e3` and `e3` are equivalent.
pub fn normalize_ref(r: &str) -> &str {
    r.strip_prefix('@').unwrap_or(r)
}

/// Direct lookup against the snapshot's ref index. A miss is the caller's
/// signal to regenerate; there is no fallback to a live selector search.
pub fn find_by_ref<'a>(snapshot: &'a Snapshot, r: &str) -> Option<&'a SnapshotNode> {
    snapshot.refs.get(normalize_ref(r))
}
