// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use serde::Serialize;

use super::config::LayoutConfig;
use super::connector::{route_connector, Connector, NodeBox};
use super::coords::{cell_to_pixels, Direction};
use super::edges::{build_edges, Edge};
use super::grid::assign_grid;
use super::visibility::{resolve_visible, CollapsedSet};
use crate::model::{NodeId, TraceForest, TraceStatus};

/// One visible trace node with its grid slot, pixel position and render flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    id: NodeId,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    status: TraceStatus,
    column: usize,
    row: usize,
    x: f64,
    y: f64,
    parent_id: Option<NodeId>,
    local_index: usize,
    depth: usize,
    root_index: usize,
    is_root: bool,
    is_first: bool,
    is_last: bool,
    has_children: bool,
    is_collapsed: bool,
    is_selected: bool,
}

impl LayoutNode {
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn status(&self) -> TraceStatus {
        self.status
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Parent id as given by the trace. Present for orphans too, whose parent is not visible.
    pub fn parent_id(&self) -> Option<&NodeId> {
        self.parent_id.as_ref()
    }

    pub fn local_index(&self) -> usize {
        self.local_index
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn root_index(&self) -> usize {
        self.root_index
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// First root of the root chain.
    pub fn is_first(&self) -> bool {
        self.is_first
    }

    /// Last root of the root chain.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    pub fn has_children(&self) -> bool {
        self.has_children
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn node_box(&self, config: &LayoutConfig) -> NodeBox {
        NodeBox::new(self.x, self.y, config.node_size.width, config.node_size.height)
    }
}

/// Inputs of one layout pass besides the forest itself.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRequest<'a> {
    pub direction: Direction,
    pub collapsed: &'a CollapsedSet,
    pub selected: Option<&'a NodeId>,
}

impl<'a> LayoutRequest<'a> {
    pub fn new(collapsed: &'a CollapsedSet) -> Self {
        Self { direction: Direction::default(), collapsed, selected: None }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_selected(mut self, selected: Option<&'a NodeId>) -> Self {
        self.selected = selected;
        self
    }
}

/// One generation of layout output: positioned nodes plus the edges between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceLayout {
    direction: Direction,
    nodes: Vec<LayoutNode>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index_by_id: HashMap<NodeId, usize>,
}

impl TraceLayout {
    fn new(direction: Direction, nodes: Vec<LayoutNode>, edges: Vec<Edge>) -> Self {
        let index_by_id =
            nodes.iter().enumerate().map(|(idx, node)| (node.id.clone(), idx)).collect();
        Self { direction, nodes, edges, index_by_id }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Nodes in depth-first pre-order; parents precede their children.
    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&LayoutNode> {
        self.index_by_id.get(node_id).map(|&idx| &self.nodes[idx])
    }

    pub fn contains(&self, node_id: &NodeId) -> bool {
        self.index_by_id.contains_key(node_id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of columns in use (0 for an empty layout).
    pub fn column_count(&self) -> usize {
        self.nodes.iter().map(|node| node.column + 1).max().unwrap_or(0)
    }

    /// Number of rows in use (0 for an empty layout).
    pub fn row_count(&self) -> usize {
        self.nodes.iter().map(|node| node.row + 1).max().unwrap_or(0)
    }

    /// Re-derives render flags and visibility for a new collapsed set and selection without
    /// moving anything.
    ///
    /// Nodes below a collapsed node are dropped along with their edges; every remaining node keeps
    /// its slot and pixel position. Expanding nodes that are not part of this generation cannot
    /// reveal anything here; that needs a fresh [`layout_trace`] pass.
    pub fn project(&self, collapsed: &CollapsedSet, selected: Option<&NodeId>) -> TraceLayout {
        let mut kept = HashSet::<&NodeId>::with_capacity(self.nodes.len());
        let mut nodes = Vec::<LayoutNode>::with_capacity(self.nodes.len());

        for node in &self.nodes {
            let visible = node.is_root
                || node
                    .parent_id
                    .as_ref()
                    .is_some_and(|parent| kept.contains(parent) && !collapsed.contains(parent));
            if !visible {
                continue;
            }
            kept.insert(&node.id);

            let mut node = node.clone();
            node.is_collapsed = node.has_children && collapsed.contains(&node.id);
            node.is_selected = selected == Some(&node.id);
            nodes.push(node);
        }

        let edges = self
            .edges
            .iter()
            .filter(|edge| kept.contains(edge.source_id()) && kept.contains(edge.target_id()))
            .cloned()
            .collect();

        TraceLayout::new(self.direction, nodes, edges)
    }

    /// Connector geometry for every edge, from the nodes' final pixel boxes.
    pub fn connectors(&self, config: &LayoutConfig) -> Vec<Connector> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let source = self.node(edge.source_id())?.node_box(config);
                let target = self.node(edge.target_id())?.node_box(config);
                Some(route_connector(edge, &source, &target, &config.connector, &config.palette))
            })
            .collect()
    }
}

/// Runs the full pipeline: visibility, grid slots, pixel positions and edges.
///
/// Never fails: an empty forest yields an empty layout, and a node whose parent is missing is
/// laid out as an extra root.
pub fn layout_trace(
    forest: &TraceForest,
    request: &LayoutRequest<'_>,
    config: &LayoutConfig,
) -> TraceLayout {
    let _span = tracing::debug_span!(
        "trace_layout",
        direction = %request.direction,
        roots = forest.roots().len(),
        collapsed = request.collapsed.len()
    )
    .entered();

    let visible = resolve_visible(forest, request.collapsed);
    let cells = assign_grid(&visible);
    let gaps = config.gaps(request.direction);

    let first_root = cells.iter().filter(|cell| cell.is_root()).map(|cell| cell.root_index()).min();
    let last_root = cells.iter().filter(|cell| cell.is_root()).map(|cell| cell.root_index()).max();

    let nodes = visible
        .iter()
        .zip(&cells)
        .map(|(visible, cell)| {
            let node = visible.node();
            let position = cell_to_pixels(cell, request.direction, gaps);
            let is_root = cell.is_root();
            LayoutNode {
                id: node.id().clone(),
                name: node.name().to_owned(),
                kind: node.kind().to_owned(),
                status: node.status(),
                column: cell.column(),
                row: cell.row(),
                x: position.x,
                y: position.y,
                parent_id: visible.parent_id().cloned(),
                local_index: cell.local_index(),
                depth: cell.depth(),
                root_index: cell.root_index(),
                is_root,
                is_first: is_root && Some(cell.root_index()) == first_root,
                is_last: is_root && Some(cell.root_index()) == last_root,
                has_children: visible.has_children(),
                is_collapsed: visible.has_children() && request.collapsed.contains(node.id()),
                is_selected: request.selected == Some(node.id()),
            }
        })
        .collect::<Vec<_>>();

    let edges = build_edges(&nodes, &config.palette);

    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "trace layout computed");

    TraceLayout::new(request.direction, nodes, edges)
}

/// Lays out independent traces in parallel. Output order matches input order.
pub fn layout_traces(
    forests: &[TraceForest],
    request: &LayoutRequest<'_>,
    config: &LayoutConfig,
) -> Vec<TraceLayout> {
    forests.par_iter().map(|forest| layout_trace(forest, request, config)).collect()
}
