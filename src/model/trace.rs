// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ids::NodeId;

/// Execution status of a trace node. Presentation only, except that `Running` marks edges as
/// animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceStatus {
    Pending,
    Running,
    Success,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TraceStatus {
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Success => "success",
            Self::Error => "error",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TraceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraceStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "pending" => Self::Pending,
            "running" => Self::Running,
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Unknown,
        })
    }
}

/// One invocation in an execution trace (tool call, agent step, LLM request, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceNode {
    id: NodeId,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    status: TraceStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<TraceNode>,
}

impl TraceNode {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: String::new(),
            status: TraceStatus::Unknown,
            children: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_status(mut self, status: TraceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_children(mut self, children: Vec<TraceNode>) -> Self {
        self.children = children;
        self
    }

    pub fn push_child(&mut self, child: TraceNode) {
        self.children.push(child);
    }

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

    pub fn children(&self) -> &[TraceNode] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A complete trace snapshot: an ordered list of root nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraceForest {
    nodes: Vec<TraceNode>,
}

impl TraceForest {
    pub fn new(nodes: Vec<TraceNode>) -> Self {
        Self { nodes }
    }

    pub fn roots(&self) -> &[TraceNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of nodes in the forest (all depths).
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Pre-order, depth-first iterator over every node of the forest.
    pub fn iter(&self) -> TraceIter<'_> {
        TraceIter { stack: self.nodes.iter().rev().collect() }
    }

    pub fn find(&self, node_id: &NodeId) -> Option<&TraceNode> {
        self.iter().find(|node| node.id() == node_id)
    }

    /// Builds a lookup of child counts by id, used to answer "can this node collapse?" without
    /// walking the forest again.
    pub fn child_counts(&self) -> HashMap<NodeId, usize> {
        self.iter().map(|node| (node.id().clone(), node.children().len())).collect()
    }
}

pub struct TraceIter<'a> {
    stack: Vec<&'a TraceNode>,
}

impl<'a> Iterator for TraceIter<'a> {
    type Item = &'a TraceNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
