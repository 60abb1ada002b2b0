//! Snapshot data model: the generated tree, its flat ref index, and the
//! generation options.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dom::types::{Bbox, NodeAttributes, Viewport};

/// Options controlling one snapshot generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotOptions {
    /// Only materialize interactive elements; non-interactive wrappers
    /// become transparent.
    pub interactive: bool,
    /// Collapse uninformative and single-child non-interactive nodes.
    pub compact: bool,
    /// Maximum tree depth, counted from the walk root's children (depth 0).
    pub depth: Option<u32>,
    /// Scope generation to the first element matching this selector.
    pub selector: Option<String>,
}

impl SnapshotOptions {
    pub fn interactive(mut self, on: bool) -> Self {
        self.interactive = on;
        self
    }

    pub fn compact(mut self, on: bool) -> Self {
        self.compact = on;
        self
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }
}

/// One materialized element in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotNode {
    /// Reference id, unique within one snapshot generation (`e1`, `e2`, ...).
    pub r#ref: String,
    /// Semantic role (explicit `role` attribute or inferred from the tag).
    pub role: String,
    /// Accessible name.
    pub name: String,
    /// Lowercase tag name.
    pub tag: String,
    /// CSS selector to re-locate the element.
    pub selector: String,
    /// Bounding box, viewport-relative, rounded.
    pub bbox: Bbox,
    /// Whether the element currently intersects the viewport.
    pub visible: bool,
    /// Whether the element can receive keyboard focus.
    pub focusable: bool,
    /// Sparse element attributes.
    pub attributes: NodeAttributes,
    /// Child nodes, document order; omitted from serialization when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotNode>,
}

/// A generated snapshot: the tree plus a flat index of every materialized
/// node, keyed by ref.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub url: String,
    pub title: String,
    pub viewport: Viewport,
    /// RFC 3339 generation time.
    pub timestamp: String,
    pub tree: Vec<SnapshotNode>,
    pub refs: HashMap<String, SnapshotNode>,
}

impl Snapshot {
    /// Direct ref lookup (accepts the `@` marker).
    pub fn find_by_ref(&self, r: &str) -> Option<&SnapshotNode> {
        super::resolve::find_by_ref(self, r)
    }

    /// Compact human-readable outline of the tree, one node per line:
    /// `- role "name" [ref]`, indented by depth.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Page: {}\n", self.title));
        out.push_str(&format!("URL: {}\n", self.url));
        for node in &self.tree {
            render_node(node, 0, &mut out);
        }
        out
    }
}

fn render_node(node: &SnapshotNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    if node.name.is_empty() {
        out.push_str(&format!("- {} [{}]\n", node.role, node.r#ref));
    } else {
        out.push_str(&format!("- {} \"{}\" [{}]\n", node.role, node.name, node.r#ref));
    }
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}
