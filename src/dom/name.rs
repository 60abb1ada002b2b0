//! Accessible-name resolution.
//!
//! The first non-empty source wins, in this order: `aria-label`, the text of
//! the element referenced by `aria-labelledby`, a `<label for=...>` pointing
//! at this element, an enclosing `<label>`, `placeholder`, `title`, `alt`,
//! the `value` of button-type inputs, and finally the element's own text
//! content capped at 100 characters.

use super::raw::{RawDocument, RawElement};

/// Maximum length of the text-content fallback name.
const NAME_TEXT_CAP: usize = 100;

const BUTTON_INPUT_TYPES: [&str; 3] = ["button", "submit", "reset"];

/// Compute the accessible name of `el`.
///
/// `ancestors` is the walk stack from the root (first) down to the direct
/// parent (last); it supplies the enclosing-label lookup. Document-wide
/// lookups (`aria-labelledby`, `label[for]`) go through `doc`.
pub fn accessible_name(el: &RawElement, ancestors: &[&RawElement], doc: &RawDocument) -> String {
    if let Some(label) = el.attr("aria-label").filter(|v| !v.is_empty()) {
        return label.to_string();
    }

    if let Some(target_id) = el.attr("aria-labelledby") {
        if let Some(target) = doc.find_by_id(target_id) {
            let text = target.text_content().trim().to_string();
            if !text.is_empty() {
                return text;
            }
        }
    }

    if let Some(id) = el.id() {
        if let Some(label) = doc.find_first(&|e| e.tag == "label" && e.attr("for") == Some(id)) {
            let text = label.text_content().trim().to_string();
            if !text.is_empty() {
                return text;
            }
        }
    }

    if let Some(label) = ancestors.iter().rev().find(|a| a.tag == "label") {
        let text = label.text_content().trim().to_string();
        if !text.is_empty() {
            return text;
        }
    }

    for attr in ["placeholder", "title", "alt"] {
        if let Some(value) = el.attr(attr).filter(|v| !v.is_empty()) {
            return value.to_string();
        }
    }

    if el.tag == "input"
        && BUTTON_INPUT_TYPES.contains(&el.attr("type").unwrap_or_default())
    {
        if let Some(value) = el.value.as_deref().filter(|v| !v.is_empty()) {
            return value.to_string();
        }
    }

    el.text_content()
        .trim()
        .chars()
        .take(NAME_TEXT_CAP)
        .collect()
}
