//! CSS selector computation for re-locating snapshot nodes.

use super::raw::RawElement;

/// Compute a selector for `el`.
///
/// An element with an id gets `#id` directly. Otherwise the selector is the
/// ancestor chain from the element up to (excluding) the walk root, joined
/// with ` > `, where each step is `tag` or `tag:nth-of-type(n)` when the
/// element has same-tag siblings. The chain stops early at the first
/// ancestor that has an id, which is rendered as `#id`.
///
/// `ancestors` runs from the walk root (first) to the direct parent (last).
pub fn compute_selector(el: &RawElement, ancestors: &[&RawElement]) -> String {
    if let Some(id) = el.id() {
        return format!("#{}", css_escape(id));
    }

    let mut path = Vec::new();
    let mut current = el;
    // Walk upward: each ancestor slot is the parent of `current`. The root
    // itself (index 0) never becomes part of the chain.
    for i in (0..ancestors.len()).rev() {
        let parent = ancestors[i];
        path.push(element_step(current, parent));
        if i == 0 {
            break;
        }
        current = parent;
        if let Some(id) = current.id() {
            path.push(format!("#{}", css_escape(id)));
            break;
        }
    }
    path.reverse();

    if path.is_empty() {
        el.tag.clone()
    } else {
        path.join(" > ")
    }
}

/// One chain step: the tag, qualified with `:nth-of-type(n)` when the parent
/// has more than one child with the same tag.
fn element_step(el: &RawElement, parent: &RawElement) -> String {
    let same_tag: Vec<&RawElement> = parent
        .children
        .iter()
        .filter(|c| c.tag == el.tag)
        .collect();
    if same_tag.len() > 1 {
        let index = same_tag
            .iter()
            .position(|c| std::ptr::eq(*c, el))
            .map(|i| i + 1)
            .unwrap_or(1);
        format!("{}:nth-of-type({})", el.tag, index)
    } else {
        el.tag.clone()
    }
}

/// Escape an identifier for use in a CSS selector, following the
/// `CSS.escape` algorithm.
pub fn css_escape(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let chars: Vec<char> = ident.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\0' => out.push('\u{FFFD}'),
            '\u{1}'..='\u{1f}' | '\u{7f}' => out.push_str(&format!("\\{:x} ", c as u32)),
            '0'..='9' if i == 0 || (i == 1 && chars[0] == '-') => {
                out.push_str(&format!("\\{:x} ", c as u32));
            }
            '-' if i == 0 && chars.len() == 1 => out.push_str("\\-"),
            c if c.is_ascii_alphanumeric() || c == '_' || c == '-' || (c as u32) >= 0x80 => {
                out.push(c);
            }
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }
    out
}
