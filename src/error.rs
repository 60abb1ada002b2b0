//! Error types, one enum per layer.

use thiserror::Error;

/// Failures surfaced by the page-control collaborator.
#[derive(Debug, Error)]
pub enum PageError {
    /// The selector no longer matches anything on the live page.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// The page operation itself failed.
    #[error("Action failed: {0}")]
    ActionFailed(String),

    /// Document capture failed.
    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    /// No page is attached.
    #[error("Page not connected")]
    NotConnected,
}

/// Snapshot generation failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Page(#[from] PageError),
}

/// Action dispatch failures, in the order the dispatch state machine
/// produces them. None of these are retried internally; the caller decides
/// whether to regenerate and try again.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required request field is missing.
    #[error("{0}")]
    Validation(String),

    /// Nothing is stored; the caller must generate a snapshot first.
    #[error("no snapshot available; generate one first")]
    NoSnapshot,

    /// The reference is absent from the current snapshot.
    #[error("ref '{0}' not found in snapshot")]
    NotFound(String),

    /// The action literal is not in the supported set.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The page operation failed. Surfaced verbatim: a stale element is a
    /// common cause but is not classified specially.
    #[error(transparent)]
    Page(#[from] PageError),
}
