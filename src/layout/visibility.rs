// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::{NodeId, TraceForest, TraceNode};

/// Ids of nodes whose descendants are currently hidden.
///
/// Ordered so that serialization and debugging output are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollapsedSet {
    ids: BTreeSet<NodeId>,
}

impl CollapsedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, node_id: &NodeId) -> bool {
        self.ids.contains(node_id)
    }

    /// Returns `true` if the id was not yet collapsed.
    pub fn insert(&mut self, node_id: NodeId) -> bool {
        self.ids.insert(node_id)
    }

    /// Returns `true` if the id was collapsed.
    pub fn remove(&mut self, node_id: &NodeId) -> bool {
        self.ids.remove(node_id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.ids.iter()
    }
}

impl FromIterator<NodeId> for CollapsedSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}

/// A node selected for drawing, with the structural facts the grid assigner needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleNode<'a> {
    node: &'a TraceNode,
    parent_id: Option<&'a NodeId>,
    local_index: usize,
}

impl<'a> VisibleNode<'a> {
    pub fn new(node: &'a TraceNode, parent_id: Option<&'a NodeId>, local_index: usize) -> Self {
        Self { node, parent_id, local_index }
    }

    pub fn node(&self) -> &'a TraceNode {
        self.node
    }

    pub fn id(&self) -> &'a NodeId {
        self.node.id()
    }

    pub fn parent_id(&self) -> Option<&'a NodeId> {
        self.parent_id
    }

    /// Position among siblings (or among roots for root nodes).
    pub fn local_index(&self) -> usize {
        self.local_index
    }

    pub fn has_children(&self) -> bool {
        self.node.has_children()
    }
}

/// Lists the nodes to draw, in depth-first pre-order.
///
/// Roots are always visible. A child is visible iff its parent is visible and not collapsed; a
/// collapsed node stays visible itself. Parents always precede their children in the output.
pub fn resolve_visible<'a>(
    forest: &'a TraceForest,
    collapsed: &CollapsedSet,
) -> Vec<VisibleNode<'a>> {
    let mut out = Vec::<VisibleNode<'a>>::with_capacity(forest.roots().len());
    let mut stack = forest
        .roots()
        .iter()
        .enumerate()
        .rev()
        .map(|(local_index, node)| VisibleNode::new(node, None, local_index))
        .collect::<Vec<_>>();

    while let Some(visible) = stack.pop() {
        let node = visible.node;
        out.push(visible);

        if collapsed.contains(node.id()) {
            continue;
        }

        for (local_index, child) in node.children().iter().enumerate().rev() {
            stack.push(VisibleNode::new(child, Some(node.id()), local_index));
        }
    }

    out
}
