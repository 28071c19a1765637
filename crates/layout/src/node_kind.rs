/// Represents the structural kind of a layout node.
///
/// The descriptor `type` tag is resolved to this enum once, while building the
/// tree, so the engine never compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Border,
    Grid,
    Layer,
}

impl NodeKind {
    /// Resolves a descriptor `type` tag. Unknown tags yield `None`.
    pub fn from_type(tag: &str) -> Option<Self> {
        match tag {
            "element" => Some(NodeKind::Element),
            "border" => Some(NodeKind::Border),
            "grid" => Some(NodeKind::Grid),
            "layer" => Some(NodeKind::Layer),
            _ => None,
        }
    }

    /// Returns the descriptor tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Element => "element",
            NodeKind::Border => "border",
            NodeKind::Grid => "grid",
            NodeKind::Layer => "layer",
        }
    }
}
