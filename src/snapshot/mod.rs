//! Snapshot model, single-slot store, and reference resolution.

pub mod resolve;
pub mod store;
pub mod types;

pub use resolve::{find_by_ref, normalize_ref};
pub use store::SnapshotStore;
pub use types::{Snapshot, SnapshotNode, SnapshotOptions};
