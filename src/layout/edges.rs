// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};

use super::config::EdgePalette;
use super::trace::LayoutNode;
use crate::model::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeClass {
    /// Connects consecutive roots in root order.
    RootChain,
    /// Connects a visible node to its visible parent.
    ParentChild,
}

/// Symbolic stroke color, resolved against an [`EdgePalette`] by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Accent,
    /// Slot into the depth palette.
    Depth(usize),
}

impl ColorKey {
    pub fn resolve<'p>(&self, palette: &'p EdgePalette) -> &'p str {
        match self {
            Self::Accent => palette.accent.as_str(),
            Self::Depth(slot) => palette.depth.get(*slot).unwrap_or(&palette.accent).as_str(),
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accent => f.write_str("accent"),
            Self::Depth(slot) => write!(f, "depth-{slot}"),
        }
    }
}

impl Serialize for ColorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Palette slot for a parent-child edge whose target sits at `depth`; cycles past the end of
/// the palette. An empty palette falls back to the accent color.
pub fn depth_color(depth: usize, palette_len: usize) -> ColorKey {
    if palette_len == 0 {
        return ColorKey::Accent;
    }
    ColorKey::Depth(depth % palette_len)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    id: String,
    source_id: NodeId,
    target_id: NodeId,
    class: EdgeClass,
    color_key: ColorKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_index: Option<usize>,
    animated: bool,
}

impl Edge {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_id(&self) -> &NodeId {
        &self.source_id
    }

    pub fn target_id(&self) -> &NodeId {
        &self.target_id
    }

    pub fn class(&self) -> EdgeClass {
        self.class
    }

    pub fn color_key(&self) -> ColorKey {
        self.color_key
    }

    /// 1-based sibling position of the target; parent-child edges only.
    pub fn label_index(&self) -> Option<usize> {
        self.label_index
    }

    pub fn animated(&self) -> bool {
        self.animated
    }
}

/// Derives the root-chain and parent-child edges for a set of laid-out nodes.
///
/// Root-chain edges come first, in root order; parent-child edges follow in node order. An edge
/// is only emitted when both endpoints are present in `nodes`.
///
/// Edge ids never embed a pair of node ids: a root-chain edge is keyed by its target's root index
/// (`chain:<i>`), a parent-child edge by its target id (`e:<id>`), since a node has one parent.
pub fn build_edges(nodes: &[LayoutNode], palette: &EdgePalette) -> Vec<Edge> {
    let mut edges = Vec::<Edge>::with_capacity(nodes.len());

    let mut roots = nodes.iter().filter(|node| node.is_root()).collect::<Vec<_>>();
    roots.sort_by_key(|node| node.root_index());
    for pair in roots.windows(2) {
        let (source, target) = (pair[0], pair[1]);
        edges.push(Edge {
            id: format!("chain:{}", target.root_index()),
            source_id: source.id().clone(),
            target_id: target.id().clone(),
            class: EdgeClass::RootChain,
            color_key: ColorKey::Accent,
            label_index: None,
            animated: target.status().is_running(),
        });
    }

    let present = nodes.iter().map(LayoutNode::id).collect::<HashSet<_>>();
    for node in nodes.iter().filter(|node| !node.is_root()) {
        let Some(parent_id) = node.parent_id() else {
            continue;
        };
        if !present.contains(parent_id) {
            continue;
        }
        edges.push(Edge {
            id: format!("e:{}", node.id()),
            source_id: parent_id.clone(),
            target_id: node.id().clone(),
            class: EdgeClass::ParentChild,
            color_key: depth_color(node.depth(), palette.depth.len()),
            label_index: Some(node.local_index() + 1),
            animated: node.status().is_running(),
        });
    }

    edges
}
