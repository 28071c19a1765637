//! The four node variants and their measure/arrange algorithms.

pub mod border;
pub mod element;
pub mod grid;
pub mod layer;

pub use border::{BorderNode, BorderSlot};
pub use element::ElementNode;
pub use grid::{GridNode, GridTracks};
pub use layer::LayerNode;
