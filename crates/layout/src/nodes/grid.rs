//! Grid layout: equal cells, one axis count fixed, the other grown to fit.
//!
//! ```text
//!     rows: 3                      columns: 3
//!
//!     +--------+-----...           +------+------+------+
//!     |  row1  |                   | col1 | col2 | col3 |
//!     +--------+-----...           +------+------+------+
//!     |  row2  |                   |      |      |      |
//!     +--------+-----...           .      .      .      .
//!     |  row3  |
//!     +--------+-----...
//! ```
use crate::LayoutError;
use crate::builder::TreeBuilder;
use crate::descriptor::NodeDescriptor;
use crate::diagnostics::LayoutWarning;
use crate::interface::{LayoutVariant, NodeVariant};
use crate::tree::{LayoutTree, NodeId};
use liquid_types::geometry::Dimension;
use std::num::NonZeroU32;

/// Row and column counts for the current number of children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridTracks {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridNode {
    /// `true` when the row count is fixed and columns grow.
    along_rows: bool,
    fixed_axis_count: NonZeroU32,
    /// Refreshed by every measure and arrange pass.
    tracks: GridTracks,
}

impl GridNode {
    pub fn new(along_rows: bool, fixed_axis_count: NonZeroU32) -> Self {
        Self {
            along_rows,
            fixed_axis_count,
            tracks: GridTracks::default(),
        }
    }

    pub fn along_rows(&self) -> bool {
        self.along_rows
    }

    pub fn fixed_axis_count(&self) -> NonZeroU32 {
        self.fixed_axis_count
    }

    /// Counts from the last layout pass.
    pub fn tracks(&self) -> GridTracks {
        self.tracks
    }

    /// The fixed count, and the other one grown to `ceil(children / fixed)`.
    pub fn tracks_for(&self, children: usize) -> GridTracks {
        let fixed = self.fixed_axis_count.get() as usize;
        let grown = (fixed + children - 1) / fixed;
        if self.along_rows {
            GridTracks {
                rows: fixed,
                columns: grown,
            }
        } else {
            GridTracks {
                rows: grown,
                columns: fixed,
            }
        }
    }

    fn store_tracks(&self, tree: &mut LayoutTree, id: NodeId, tracks: GridTracks) {
        tree.node_mut(id).variant = NodeVariant::Grid(GridNode { tracks, ..*self });
    }
}

impl LayoutVariant for GridNode {
    fn parse(
        descriptor: &NodeDescriptor,
        builder: &mut TreeBuilder<'_>,
        _id: NodeId,
    ) -> Result<Self, LayoutError> {
        let name = descriptor.name.clone().unwrap_or_default();
        let (along_rows, count) = match (descriptor.rows, descriptor.columns) {
            (Some(_), Some(columns)) => {
                builder.warn(LayoutWarning::GridAxisConflict { name: name.clone() });
                (false, columns)
            }
            (None, Some(columns)) => (false, columns),
            (Some(rows), None) => (true, rows),
            (None, None) => (false, 0),
        };

        let fixed_axis_count =
            NonZeroU32::new(count).ok_or(LayoutError::GridAxisMissing { name })?;
        Ok(GridNode::new(along_rows, fixed_axis_count))
    }

    /// The largest child, repeated over every cell, plus interior gaps and
    /// insets.
    fn measure(&self, tree: &mut LayoutTree, id: NodeId) -> Dimension {
        let children = tree.node(id).children().to_vec();
        let tracks = self.tracks_for(children.len());

        let mut largest = Dimension::zero();
        for child in children {
            let d = tree.measure(child);
            largest.width = largest.width.max(d.width);
            largest.height = largest.height.max(d.height);
        }

        let (h_gap, v_gap) = tree.resolved_gap(id);
        let mut size = tree.insets_size(id);
        size.width += tracks.columns as f32 * largest.width
            + tracks.columns.saturating_sub(1) as f32 * h_gap;
        size.height +=
            tracks.rows as f32 * largest.height + tracks.rows.saturating_sub(1) as f32 * v_gap;

        let preferred = tree.preferred_size(id);
        size.width = size.width.max(preferred.width);
        size.height = size.height.max(preferred.height);

        self.store_tracks(tree, id, tracks);
        size
    }

    /// Cells are filled column by column, top to bottom, but the child placed
    /// in cell `(row, column)` is always `children[row * columns + column]`.
    fn arrange(&self, tree: &mut LayoutTree, id: NodeId) {
        let children = tree.node(id).children().to_vec();
        if children.is_empty() {
            return;
        }

        let tracks = self.tracks_for(children.len());
        self.store_tracks(tree, id, tracks);
        let GridTracks { rows, columns } = tracks;

        let node = tree.node(id);
        let bounds = *node.bounds();
        let inset_left = node.insets().left.resolve(bounds.width());
        let inset_top = node.insets().top.resolve(bounds.height());
        let insets = tree.insets_size(id);
        let (h_gap, v_gap) = tree.resolved_gap(id);

        let total_gaps_width = (columns - 1) as f32 * h_gap;
        let inner_width = bounds.width() - insets.width;
        let cell_width = ((inner_width - total_gaps_width) / columns as f32).floor();
        let extra_width =
            ((inner_width - (cell_width * columns as f32 + total_gaps_width)) / 2.0).floor();

        let total_gaps_height = (rows - 1) as f32 * v_gap;
        let inner_height = bounds.height() - insets.height;
        let cell_height = ((inner_height - total_gaps_height) / rows as f32).floor();
        let extra_height =
            ((inner_height - (cell_height * rows as f32 + total_gaps_height)) / 2.0).floor();

        let mut x = inset_left + extra_width;
        for column in 0..columns {
            let mut y = inset_top + extra_height;
            for row in 0..rows {
                if let Some(&child) = children.get(row * columns + column) {
                    tree.set_bounds(
                        child,
                        bounds.x() + x,
                        bounds.y() + y,
                        cell_width,
                        cell_height,
                    );
                    tree.arrange(child);
                }
                y += cell_height + v_gap;
            }
            x += cell_width + h_gap;
        }
    }
}
