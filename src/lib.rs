//! Ref-addressed page snapshots and action replay.
//!
//! A remote caller drives a live web page by short-lived references
//! (`e1`, `e2`, ...) instead of fragile CSS selectors: one call builds a
//! deterministic snapshot of the document, later calls replay actions
//! against the refs it handed out.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐   capture (serialized)   ┌──────────────────┐
//! │  SnapshotController  │ ◄──────────────────────── │    PageDriver    │
//! │   walker → store     │ ────────────────────────► │ (CDP, Playwright,│
//! │   resolver → dispatch│   click/fill/... by       │   test fake)     │
//! └──────────────────────┘   resolved selector       └──────────────────┘
//! ```
//!
//! The walker never touches the live page: the driver serializes the
//! document once per capture (element tree, computed styles, layout boxes,
//! form state), and the walk, compaction, and ref assignment all happen on
//! that payload. Dispatch resolves a ref to the selector recorded at
//! generation time and delegates to the driver; nothing re-verifies the
//! page in between, so a stale selector fails with whatever error the
//! driver reports.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pagelens::{ActionRequest, SnapshotController, SnapshotOptions};
//!
//! let controller = SnapshotController::new(driver);
//! let snapshot = controller.generate(&SnapshotOptions::default().interactive(true)).await?;
//! println!("{}", snapshot.to_text());
//! controller.dispatch(ActionRequest::new("@e1", "click")).await?;
//! ```

pub mod actions;
pub mod controller;
pub mod dom;
pub mod error;
pub mod page;
pub mod snapshot;

pub use actions::{ActionReceipt, ActionRequest, SUPPORTED_ACTIONS, VALUE_ACTIONS};
pub use controller::SnapshotController;
pub use dom::{RawDocument, RawElement, RawStyle, Viewport};
pub use error::{DispatchError, PageError, SnapshotError};
pub use page::PageDriver;
pub use snapshot::{Snapshot, SnapshotNode, SnapshotOptions, SnapshotStore, find_by_ref, normalize_ref};
