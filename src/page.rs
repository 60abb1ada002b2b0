//! The page-control boundary.
//!
//! Everything that touches a live page goes through [`PageDriver`]: one
//! capture call that serializes the document for the walker, and the action
//! primitives the dispatcher delegates to. Implementations sit outside this
//! crate (CDP session, Playwright bridge, test fake); each primitive either
//! succeeds or returns an error, with no retry behavior expected.

use async_trait::async_trait;

use crate::dom::raw::RawDocument;
use crate::error::PageError;

/// External page-control capability.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Serialize the current document: element tree with computed styles,
    /// layout boxes, attributes, and form state.
    async fn capture(&self) -> Result<RawDocument, PageError>;

    async fn click(&self, selector: &str) -> Result<(), PageError>;

    async fn dblclick(&self, selector: &str) -> Result<(), PageError>;

    async fn hover(&self, selector: &str) -> Result<(), PageError>;

    async fn focus(&self, selector: &str) -> Result<(), PageError>;

    /// Replace the element's value with `value`.
    async fn fill(&self, selector: &str, value: &str) -> Result<(), PageError>;

    /// Type `value` into the element, keystroke by keystroke.
    async fn type_text(&self, selector: &str, value: &str) -> Result<(), PageError>;

    async fn check(&self, selector: &str) -> Result<(), PageError>;

    async fn uncheck(&self, selector: &str) -> Result<(), PageError>;

    /// Select the option with the given value in a `<select>`.
    async fn select_option(&self, selector: &str, value: &str) -> Result<(), PageError>;
}
