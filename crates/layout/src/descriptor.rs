//! Declarative layout descriptors.
//!
//! These mirror the JSON a host application writes to describe a layout:
//!
//! ```json
//! { "type": "border", "gap": ["4", "4"],
//!   "top": { "type": "element", "name": "toolbar", "preferredHeight": "40px" },
//!   "center": { "type": "grid", "columns": 3, "elements": ["cell[1-9]"] } }
//! ```
use crate::node_kind::NodeKind;
use crate::nodes::BorderSlot;
use liquid_style::UnitValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of an `elements` list or a border slot: either a bare element
/// name or a full descriptor.
///
/// Anything else (a number, an object with a non-string `type`, a field of the
/// wrong shape) lands in `Other`; the builder warns and drops it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ElementEntry {
    Name(String),
    Node(Box<NodeDescriptor>),
    Other(Value),
}

impl ElementEntry {
    /// The `type` tag this entry would be dispatched on.
    pub fn kind(&self) -> String {
        match self {
            ElementEntry::Name(_) => NodeKind::Element.as_str().to_string(),
            ElementEntry::Node(descriptor) => descriptor.kind.clone(),
            ElementEntry::Other(value) => match value.get("type") {
                Some(tag) => tag.to_string(),
                None => value.to_string(),
            },
        }
    }
}

/// The `elements` field. A value that is not an array is kept so the builder
/// can report it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ElementList {
    Entries(Vec<ElementEntry>),
    Malformed(Value),
}

impl From<&str> for ElementEntry {
    fn from(name: &str) -> Self {
        ElementEntry::Name(name.to_string())
    }
}

impl From<String> for ElementEntry {
    fn from(name: String) -> Self {
        ElementEntry::Name(name)
    }
}

impl From<NodeDescriptor> for ElementEntry {
    fn from(descriptor: NodeDescriptor) -> Self {
        ElementEntry::Node(Box::new(descriptor))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    /// `element`, `border`, `grid` or `layer`. Missing is the same as unknown.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_width: Option<UnitValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_height: Option<UnitValue>,
    /// Left, top, right, bottom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insets: Option<Vec<UnitValue>>,
    /// Horizontal, vertical.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Vec<UnitValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<ElementList>,

    // Grid only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,

    // Border only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<ElementEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<ElementEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Box<ElementEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Box<ElementEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Box<ElementEntry>>,
}

impl NodeDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// The descriptor a bare name string stands for.
    pub fn element(name: impl Into<String>) -> Self {
        Self::new("element").with_name(name)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_preferred_size(
        mut self,
        width: impl Into<UnitValue>,
        height: impl Into<UnitValue>,
    ) -> Self {
        self.preferred_width = Some(width.into());
        self.preferred_height = Some(height.into());
        self
    }

    pub fn with_insets<V: Into<UnitValue>>(mut self, insets: impl IntoIterator<Item = V>) -> Self {
        self.insets = Some(insets.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_gap(mut self, horizontal: impl Into<UnitValue>, vertical: impl Into<UnitValue>) -> Self {
        self.gap = Some(vec![horizontal.into(), vertical.into()]);
        self
    }

    pub fn with_elements<E: Into<ElementEntry>>(mut self, elements: impl IntoIterator<Item = E>) -> Self {
        self.elements = Some(ElementList::Entries(
            elements.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Fixes the row count of a grid; the column count grows with the
    /// number of children.
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Fills one region of a border.
    pub fn with_slot(mut self, slot: BorderSlot, entry: impl Into<ElementEntry>) -> Self {
        let entry = Some(Box::new(entry.into()));
        match slot {
            BorderSlot::Top => self.top = entry,
            BorderSlot::Bottom => self.bottom = entry,
            BorderSlot::Left => self.left = entry,
            BorderSlot::Right => self.right = entry,
            BorderSlot::Center => self.center = entry,
        }
        self
    }
}
