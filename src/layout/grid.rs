// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::collections::HashMap;

use smallvec::SmallVec;

use super::visibility::VisibleNode;
use crate::model::NodeId;

/// Column/row slot of one visible node, plus the structural facts derived while assigning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    column: usize,
    row: usize,
    depth: usize,
    root_index: usize,
    local_index: usize,
    parent: Option<usize>,
}

impl GridCell {
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Distance to the chain's root (0 for roots).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Index of the root that starts this node's chain.
    pub fn root_index(&self) -> usize {
        self.root_index
    }

    pub fn local_index(&self) -> usize {
        self.local_index
    }

    /// Index of the parent's cell in the same assignment, if the parent is visible.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Assigns a column and a row to every visible node.
///
/// The output has one cell per input node, in input order. Guarantees:
/// - roots sit on row 0, root `i` in column `i`;
/// - a child sits one column right of its parent and never on a row above it;
/// - rows are unique within a column;
/// - siblings keep their original order when nothing forces otherwise.
///
/// Parents must precede their children in `visible` (as produced by
/// [`resolve_visible`](super::visibility::resolve_visible)). A node whose parent id does not
/// resolve to an earlier node is laid out as an extra root after the regular ones.
pub fn assign_grid(visible: &[VisibleNode<'_>]) -> Vec<GridCell> {
    let mut cells = assign_columns(visible);

    let Some(max_column) = cells.iter().map(|cell| cell.column).max() else {
        return cells;
    };

    let mut columns = vec![SmallVec::<[usize; 8]>::new(); max_column + 1];
    for (idx, cell) in cells.iter().enumerate() {
        columns[cell.column].push(idx);
    }

    // Column k+1 sorts on the final rows of column k, so columns must be resolved in order.
    for (column, members) in columns.iter_mut().enumerate() {
        members.sort_by(|&a, &b| column_order(&cells, a, b));

        let mut next_row = 0usize;
        for &idx in members.iter() {
            let row = match cells[idx].parent {
                None => 0,
                Some(parent) => next_row.max(cells[parent].row),
            };
            cells[idx].row = row;
            next_row = row + 1;
        }

        tracing::trace!(column, nodes = members.len(), rows = next_row, "assigned column rows");
    }

    cells
}

fn assign_columns(visible: &[VisibleNode<'_>]) -> Vec<GridCell> {
    let root_count = visible.iter().filter(|node| node.parent_id().is_none()).count();
    let mut next_root_index = 0usize;
    let mut next_orphan_index = root_count;

    let mut index_by_id = HashMap::<&NodeId, usize>::with_capacity(visible.len());
    let mut cells = Vec::<GridCell>::with_capacity(visible.len());

    for (idx, node) in visible.iter().enumerate() {
        let parent = node.parent_id().and_then(|parent_id| index_by_id.get(parent_id).copied());

        let cell = match parent {
            Some(parent) => {
                let parent_cell = &cells[parent];
                GridCell {
                    column: parent_cell.column + 1,
                    row: 0,
                    depth: parent_cell.depth + 1,
                    root_index: parent_cell.root_index,
                    local_index: node.local_index(),
                    parent: Some(parent),
                }
            }
            None => {
                let root_index = if let Some(parent_id) = node.parent_id() {
                    tracing::debug!(
                        node_id = %node.id(),
                        parent_id = %parent_id,
                        "parent not visible; laying out node as a root"
                    );
                    next_orphan_index += 1;
                    next_orphan_index - 1
                } else {
                    next_root_index += 1;
                    next_root_index - 1
                };
                GridCell {
                    column: root_index,
                    row: 0,
                    depth: 0,
                    root_index,
                    local_index: node.local_index(),
                    parent: None,
                }
            }
        };

        index_by_id.insert(node.id(), idx);
        cells.push(cell);
    }

    cells
}

/// Roots first, then by the parent's (already final) row, then by sibling position.
fn column_order(cells: &[GridCell], a: usize, b: usize) -> Ordering {
    let (cell_a, cell_b) = (&cells[a], &cells[b]);
    match (cell_a.parent, cell_b.parent) {
        (None, None) => cell_a.local_index.cmp(&cell_b.local_index),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(parent_a), Some(parent_b)) => cells[parent_a]
            .row
            .cmp(&cells[parent_b].row)
            .then_with(|| cell_a.local_index.cmp(&cell_b.local_index)),
    }
}
