use crate::LayoutError;
use crate::descriptor::{ElementEntry, ElementList, NodeDescriptor};
use crate::diagnostics::{self, LayoutWarning};
use crate::interface::NodeVariant;
use crate::node_kind::NodeKind;
use crate::nodes::ElementNode;
use crate::tree::{LayoutNode, LayoutTree, NodeId};
use liquid_style::{Gap, Insets, Unit, UnitValue};

/// Parses a descriptor (or a bare element name) into a new layout tree.
///
/// Recoverable problems are recorded on the tree, see
/// [`LayoutTree::warnings`]. A grid without rows or columns aborts the whole
/// parse.
pub fn parse(entry: &ElementEntry) -> Result<LayoutTree, LayoutError> {
    let mut nodes = Vec::new();
    let mut warnings = Vec::new();

    let root = TreeBuilder::new(&mut nodes, &mut warnings).build_entry(entry, None)?;
    let root = root.ok_or_else(|| LayoutError::UnknownRootType(entry.kind()))?;

    Ok(LayoutTree {
        nodes,
        root,
        warnings,
    })
}

/// Appends nodes built from descriptors to a tree's arena.
pub struct TreeBuilder<'t> {
    nodes: &'t mut Vec<LayoutNode>,
    warnings: &'t mut Vec<LayoutWarning>,
}

impl<'t> TreeBuilder<'t> {
    pub(crate) fn new(nodes: &'t mut Vec<LayoutNode>, warnings: &'t mut Vec<LayoutWarning>) -> Self {
        Self { nodes, warnings }
    }

    /// Builds one entry with `parent` as its back-reference. The caller
    /// decides where the new node is attached.
    ///
    /// Returns `Ok(None)` when the entry names an unknown node type.
    pub fn build_entry(
        &mut self,
        entry: &ElementEntry,
        parent: Option<NodeId>,
    ) -> Result<Option<NodeId>, LayoutError> {
        match entry {
            ElementEntry::Name(name) => self.build_descriptor(&NodeDescriptor::element(name), parent),
            ElementEntry::Node(descriptor) => self.build_descriptor(descriptor, parent),
            ElementEntry::Other(_) => {
                self.warn(LayoutWarning::UnknownNodeType { kind: entry.kind() });
                Ok(None)
            }
        }
    }

    pub fn build_descriptor(
        &mut self,
        descriptor: &NodeDescriptor,
        parent: Option<NodeId>,
    ) -> Result<Option<NodeId>, LayoutError> {
        let Some(kind) = NodeKind::from_type(&descriptor.kind) else {
            self.warn(LayoutWarning::UnknownNodeType {
                kind: descriptor.kind.clone(),
            });
            return Ok(None);
        };

        let id = NodeId(self.nodes.len());
        self.nodes
            .push(LayoutNode::new(NodeVariant::Element(ElementNode), parent));

        self.parse_common(descriptor, id)?;
        let variant = NodeVariant::parse(kind, descriptor, self, id)?;
        self.nodes[id.0].variant = variant;

        Ok(Some(id))
    }

    /// Builds `entry` as a child of `parent` and appends it to `parent`'s
    /// children. Returns the child, if one was built.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        entry: &ElementEntry,
    ) -> Result<Option<NodeId>, LayoutError> {
        let child = self.build_entry(entry, Some(parent))?;
        if let Some(child) = child {
            self.nodes[parent.0].children.push(child);
        }
        Ok(child)
    }

    pub fn warn(&mut self, warning: LayoutWarning) {
        diagnostics::report(self.warnings, warning);
    }

    /// Fields shared by every variant: insets, gap, preferred size, name and
    /// the `elements` list.
    fn parse_common(&mut self, descriptor: &NodeDescriptor, id: NodeId) -> Result<(), LayoutError> {
        let label = descriptor.name.clone().unwrap_or_default();

        if let Some(values) = &descriptor.insets {
            if values.len() != 4 {
                self.warn(LayoutWarning::InsetsArity {
                    name: label.clone(),
                    found: values.len(),
                });
            }
            self.nodes[id.0].insets = Insets::new(
                unit_at(values, 0),
                unit_at(values, 1),
                unit_at(values, 2),
                unit_at(values, 3),
            );
        }

        if let Some(values) = &descriptor.gap {
            if values.len() != 2 {
                self.warn(LayoutWarning::GapArity {
                    name: label,
                    found: values.len(),
                });
            }
            self.nodes[id.0].gap = Gap::new(unit_at(values, 0), unit_at(values, 1));
        }

        let node = &mut self.nodes[id.0];
        if let Some(width) = &descriptor.preferred_width {
            node.preferred_width.set_value(width.clone());
        }
        if let Some(height) = &descriptor.preferred_height {
            node.preferred_height.set_value(height.clone());
        }
        if let Some(name) = &descriptor.name {
            node.name = name.clone();
        }

        match &descriptor.elements {
            Some(ElementList::Entries(elements)) => self.parse_elements(elements, id)?,
            Some(ElementList::Malformed(_)) => self.warn(LayoutWarning::ElementsNotArray {
                name: descriptor.name.clone().unwrap_or_default(),
            }),
            None => {}
        }
        Ok(())
    }

    fn parse_elements(&mut self, elements: &[ElementEntry], id: NodeId) -> Result<(), LayoutError> {
        for entry in elements {
            match entry {
                ElementEntry::Name(pattern) if pattern.contains('[') && pattern.contains(']') => {
                    match split_range(pattern) {
                        Some((prefix, from, to)) => {
                            let to = if to.saturating_sub(from) >= MAX_RANGE_LEN {
                                self.warn(LayoutWarning::RangeTooLarge {
                                    pattern: pattern.clone(),
                                    limit: MAX_RANGE_LEN,
                                });
                                from + MAX_RANGE_LEN - 1
                            } else {
                                to
                            };
                            for i in from..=to {
                                self.add_child(id, &ElementEntry::Name(format!("{prefix}{i}")))?;
                            }
                        }
                        None => {
                            self.warn(LayoutWarning::MalformedRange {
                                pattern: pattern.clone(),
                            });
                            self.add_child(id, entry)?;
                        }
                    }
                }
                _ => {
                    self.add_child(id, entry)?;
                }
            }
        }
        Ok(())
    }
}

/// Most children a single `prefix[a-b]` pattern expands to. Longer ranges are
/// cut to the first `MAX_RANGE_LEN` names.
pub const MAX_RANGE_LEN: i64 = 10_000;

/// A missing value leaves the unit unset.
fn unit_at(values: &[UnitValue], index: usize) -> Unit {
    values.get(index).map(Unit::from).unwrap_or_default()
}

/// Splits `prefix[from-to]`. The bracket pair is the last `]` and the last `[`
/// before it; text after the closing bracket is ignored.
fn split_range(pattern: &str) -> Option<(&str, i64, i64)> {
    let close = pattern.rfind(']')?;
    let open = pattern[..close].rfind('[')?;
    let mut bounds = pattern[open + 1..close].split('-');

    let (Some(from), Some(to), None) = (bounds.next(), bounds.next(), bounds.next()) else {
        return None;
    };
    let from = from.trim().parse().ok()?;
    let to = to.trim().parse().ok()?;
    Some((&pattern[..open], from, to))
}
