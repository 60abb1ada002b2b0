//! Serialized page state crossing the script-engine boundary.
//!
//! The walker cannot share closures with the page's script sandbox, so the
//! page driver serializes the document once per capture: element tree with
//! computed style, layout boxes, attributes, and form state. Everything the
//! walker needs is in this payload; no further round trips happen during a
//! walk.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{BoundingBox, Viewport};

/// One captured page document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Page URL at capture time.
    pub url: String,
    /// Page title at capture time.
    pub title: String,
    /// Viewport dimensions.
    #[serde(default)]
    pub viewport: Viewport,
    /// The `<body>` element and its subtree.
    pub body: RawElement,
}

impl RawDocument {
    /// Find the first element (document order) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&RawElement> {
        self.body.find(&|el| el.id() == Some(id))
    }

    /// Find the first element (document order) matching a predicate.
    pub fn find_first(&self, pred: &dyn Fn(&RawElement) -> bool) -> Option<&RawElement> {
        self.body.find(pred)
    }
}

/// Computed style fields relevant to the visibility policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStyle {
    #[serde(default = "default_display")]
    pub display: String,
    #[serde(default = "default_visibility")]
    pub visibility: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_display() -> String {
    "block".to_string()
}

fn default_visibility() -> String {
    "visible".to_string()
}

fn default_opacity() -> f64 {
    1.0
}

impl Default for RawStyle {
    fn default() -> Self {
        Self {
            display: default_display(),
            visibility: default_visibility(),
            opacity: default_opacity(),
        }
    }
}

/// One serialized element.
///
/// `attrs` holds HTML attributes verbatim; `value`, `checked` and `disabled`
/// are live form state (DOM properties, not attributes) and are only set for
/// elements that have such state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawElement {
    /// Lowercase tag name.
    pub tag: String,
    #[serde(default)]
    pub attrs: HashMap<String, String>,
    #[serde(default)]
    pub style: RawStyle,
    /// Border box, viewport-relative.
    #[serde(default)]
    pub bbox: BoundingBox,
    /// Direct text content (not including descendants).
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub children: Vec<RawElement>,
}

impl RawElement {
    /// Create an element with the given tag and empty everything else.
    ///
    /// The zero-sized default bbox makes an untouched element fail the
    /// visibility test; drivers always report real layout boxes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: HashMap::new(),
            style: RawStyle::default(),
            bbox: BoundingBox::default(),
            text: String::new(),
            value: None,
            checked: None,
            disabled: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute (builder style, for drivers and tests).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set direct text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the layout box.
    pub fn with_bbox(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.bbox = BoundingBox::new(x, y, width, height);
        self
    }

    /// Set computed style fields.
    pub fn with_style(mut self, style: RawStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: RawElement) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Non-empty id attribute, if any.
    pub fn id(&self) -> Option<&str> {
        self.attr("id").filter(|v| !v.is_empty())
    }

    /// Whether the element is editable content (`contenteditable` present
    /// without an explicit opt-out value).
    pub fn is_content_editable(&self) -> bool {
        matches!(self.attr("contenteditable"), Some("") | Some("true"))
    }

    /// Full text content: direct text plus all descendants, document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Depth-first pre-order search for the first matching element.
    pub fn find(&self, pred: &dyn Fn(&RawElement) -> bool) -> Option<&RawElement> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }
}
