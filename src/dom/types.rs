//! Shared DOM types: viewport, bounding boxes, and node attributes.

use serde::{Deserialize, Serialize};

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Viewport {
    /// The viewport rectangle with its origin at (0, 0).
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox {
            x: 0.0,
            y: 0.0,
            width: self.width as f64,
            height: self.height as f64,
        }
    }
}

/// Bounding box for an element, viewport-relative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this bounding box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Get the center point of this bounding box.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if this box intersects with another (strict: edge contact does not count).
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Round to integer coordinates for snapshot output.
    pub fn rounded(&self) -> Bbox {
        Bbox {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            width: self.width.round() as i32,
            height: self.height.round() as i32,
        }
    }
}

/// Integer bounding box as emitted in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Bbox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Sparse element attributes carried on a snapshot node.
///
/// Only attributes that are present and non-empty on the element are set;
/// absent fields are omitted from serialized output.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NodeAttributes {
    /// Element ID attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Element class names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Href for links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Type attribute (inputs and buttons).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Current value for form controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Checked state (checkboxes and radios).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Disabled state (form controls).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}
