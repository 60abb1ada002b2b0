//! Action request and receipt types.

use serde::{Deserialize, Serialize};

/// The supported action literals.
pub const SUPPORTED_ACTIONS: [&str; 9] = [
    "click", "dblclick", "hover", "focus", "fill", "type", "check", "uncheck", "select",
];

/// Actions that require a `value`.
pub const VALUE_ACTIONS: [&str; 3] = ["fill", "type", "select"];

/// One action request against the current snapshot.
///
/// `ref` and `action` are optional here so that missing fields surface as
/// validation errors in the dispatcher rather than as deserialization
/// failures; `action` stays a free string so an unsupported literal reaches
/// the unknown-action state in its specified position.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionRequest {
    /// Reference id, with or without the `@` marker (`e1`, `@e1`).
    pub r#ref: Option<String>,
    /// Action literal, one of [`SUPPORTED_ACTIONS`].
    pub action: Option<String>,
    /// Value for fill/type/select.
    pub value: Option<String>,
}

impl ActionRequest {
    pub fn new(r: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            r#ref: Some(r.into()),
            action: Some(action.into()),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Successful dispatch result: what was done, and against which selector.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionReceipt {
    pub r#ref: String,
    pub action: String,
    pub selector: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
