//! The DOM walker: one pass over a captured document that produces the
//! snapshot tree and its flat ref index.
//!
//! Policy applied per element, in order: visibility exclusion, depth limit,
//! interactive-only splicing, materialization (ref assignment), recursion,
//! then bottom-up compaction. Refs are numbered pre-order at the moment a
//! node materializes; a node later dropped by compaction keeps its number
//! out of the index, leaving a gap.

use std::collections::HashMap;

use tracing::debug;

use super::name::accessible_name;
use super::raw::{RawDocument, RawElement};
use super::role::{is_focusable, is_interactive, resolve_role};
use super::selector::compute_selector;
use super::types::NodeAttributes;
use crate::snapshot::types::{SnapshotNode, SnapshotOptions};

/// Result of visiting one element.
pub enum WalkOutcome {
    /// The element materialized as a node.
    Node(Box<SnapshotNode>),
    /// The element was transparent; these are its surviving descendants.
    Spliced(Vec<SnapshotNode>),
    /// Nothing survived beneath this element.
    Dropped,
}

/// Walks a captured document under the configured policy.
pub struct Walker<'a> {
    doc: &'a RawDocument,
    options: &'a SnapshotOptions,
    counter: u32,
    refs: HashMap<String, SnapshotNode>,
}

impl<'a> Walker<'a> {
    pub fn new(doc: &'a RawDocument, options: &'a SnapshotOptions) -> Self {
        Self {
            doc,
            options,
            counter: 0,
            refs: HashMap::new(),
        }
    }

    /// Run the walk, consuming the walker.
    ///
    /// Returns the root-level node list (document order) and the flat ref
    /// index containing exactly the surviving materialized nodes.
    pub fn run(mut self) -> (Vec<SnapshotNode>, HashMap<String, SnapshotNode>) {
        let root = self.resolve_root();
        let mut ancestors: Vec<&'a RawElement> = vec![root];
        let mut tree = Vec::new();
        for child in &root.children {
            match self.visit(child, 0, &mut ancestors) {
                WalkOutcome::Node(node) => tree.push(*node),
                WalkOutcome::Spliced(nodes) => tree.extend(nodes),
                WalkOutcome::Dropped => {}
            }
        }
        debug!(
            nodes = self.refs.len(),
            assigned = self.counter,
            "walk complete"
        );
        (tree, self.refs)
    }

    /// The configured walk root: first match of the scoping selector, else
    /// the document body.
    fn resolve_root(&self) -> &'a RawElement {
        if let Some(selector) = self.options.selector.as_deref() {
            if let Some(found) = find_simple(&self.doc.body, selector) {
                return found;
            }
        }
        &self.doc.body
    }

    fn visit(
        &mut self,
        el: &'a RawElement,
        depth: u32,
        ancestors: &mut Vec<&'a RawElement>,
    ) -> WalkOutcome {
        if let Some(max) = self.options.depth {
            if depth > max {
                return WalkOutcome::Dropped;
            }
        }
        if !is_visible(el) {
            return WalkOutcome::Dropped;
        }

        let role = resolve_role(el);
        let interactive = is_interactive(el, &role);

        // Interactive-only mode makes non-interactive wrappers transparent:
        // their surviving descendants splice into the parent's child list.
        if self.options.interactive && !interactive {
            ancestors.push(el);
            let mut spliced = Vec::new();
            for child in &el.children {
                match self.visit(child, depth + 1, ancestors) {
                    WalkOutcome::Node(node) => spliced.push(*node),
                    WalkOutcome::Spliced(nodes) => spliced.extend(nodes),
                    WalkOutcome::Dropped => {}
                }
            }
            ancestors.pop();
            return if spliced.is_empty() {
                WalkOutcome::Dropped
            } else {
                WalkOutcome::Spliced(spliced)
            };
        }

        self.counter += 1;
        let mut node = SnapshotNode {
            r#ref: format!("e{}", self.counter),
            role,
            name: accessible_name(el, ancestors, self.doc),
            tag: el.tag.clone(),
            selector: compute_selector(el, ancestors),
            bbox: el.bbox.rounded(),
            visible: el.bbox.intersects(&self.doc.viewport.bounds()),
            focusable: is_focusable(el),
            attributes: extract_attributes(el),
            children: Vec::new(),
        };

        ancestors.push(el);
        for child in &el.children {
            match self.visit(child, depth + 1, ancestors) {
                WalkOutcome::Node(child_node) => node.children.push(*child_node),
                WalkOutcome::Spliced(nodes) => node.children.extend(nodes),
                WalkOutcome::Dropped => {}
            }
        }
        ancestors.pop();

        if self.options.compact && !interactive {
            // An unnamed leaf carries no information; its tentative ref is
            // discarded and never enters the index.
            if node.name.is_empty() && node.children.is_empty() {
                return WalkOutcome::Dropped;
            }
            // A single-child wrapper is replaced by that child, which keeps
            // its own ref.
            if node.children.len() == 1 {
                let child = node.children.remove(0);
                return WalkOutcome::Node(Box::new(child));
            }
        }

        self.refs.insert(node.r#ref.clone(), node.clone());
        WalkOutcome::Node(Box::new(node))
    }
}

/// Visibility policy: an element is excluded (with its whole subtree) when
/// its computed display is `none`, visibility is `hidden`, opacity is zero,
/// or its box has both zero width and zero height.
fn is_visible(el: &RawElement) -> bool {
    if el.style.display == "none" {
        return false;
    }
    if el.style.visibility == "hidden" {
        return false;
    }
    if el.style.opacity == 0.0 {
        return false;
    }
    if el.bbox.width == 0.0 && el.bbox.height == 0.0 {
        return false;
    }
    true
}

fn extract_attributes(el: &RawElement) -> NodeAttributes {
    let non_empty = |name: &str| {
        el.attr(name)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    NodeAttributes {
        id: non_empty("id"),
        class: non_empty("class"),
        href: non_empty("href"),
        r#type: non_empty("type"),
        value: el
            .value
            .clone()
            .filter(|v| !v.is_empty())
            .or_else(|| non_empty("value")),
        placeholder: non_empty("placeholder"),
        checked: el.checked,
        disabled: el.disabled,
    }
}

/// Match a scoping selector against the tree, document order, first match
/// wins. Supported forms: `#id`, `tag`, `.class`, `tag.class`.
fn find_simple<'a>(root: &'a RawElement, selector: &str) -> Option<&'a RawElement> {
    let selector = selector.trim();
    if selector.is_empty() {
        return None;
    }
    if let Some(id) = selector.strip_prefix('#') {
        return root.find(&|el| el.id() == Some(id));
    }
    let (tag, class) = match selector.split_once('.') {
        Some((tag, class)) => (tag, Some(class)),
        None => (selector, None),
    };
    root.find(&|el| {
        if !tag.is_empty() && el.tag != tag {
            return false;
        }
        match class {
            Some(class) => el
                .attr("class")
                .is_some_and(|cs| cs.split_whitespace().any(|c| c == class)),
            None => true,
        }
    })
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
