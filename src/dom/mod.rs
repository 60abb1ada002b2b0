//! DOM capture model and the snapshot walker.

pub mod name;
pub mod raw;
pub mod role;
pub mod selector;
pub mod types;
pub mod walker;

pub use raw::{RawDocument, RawElement, RawStyle};
pub use types::{Bbox, BoundingBox, NodeAttributes, Viewport};
pub use walker::{WalkOutcome, Walker};
