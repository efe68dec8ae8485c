// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::{Connector, Direction, Edge, LayoutConfig, LayoutNode, TraceLayout};
use crate::model::{NodeId, TraceForest, TraceNode};

#[derive(Debug)]
pub enum TraceFormatError {
    Io { path: PathBuf, source: io::Error },
    Json { source: serde_json::Error },
    DuplicateId { node_id: NodeId },
}

impl fmt::Display for TraceFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Json { source } => write!(f, "invalid trace json: {source}"),
            Self::DuplicateId { node_id } => write!(f, "trace contains node id {node_id} twice"),
        }
    }
}

impl std::error::Error for TraceFormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source } => Some(source),
            Self::DuplicateId { .. } => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ForestJson {
    Wrapped { nodes: Vec<TraceNode> },
    Bare(Vec<TraceNode>),
}

/// Parses a trace snapshot: either `{ "nodes": [...] }` or a bare array of root nodes.
///
/// Ids must be non-empty and unique across the whole forest.
pub fn parse_trace_forest(input: &str) -> Result<TraceForest, TraceFormatError> {
    let parsed = serde_json::from_str::<ForestJson>(input)
        .map_err(|source| TraceFormatError::Json { source })?;
    let roots = match parsed {
        ForestJson::Wrapped { nodes } | ForestJson::Bare(nodes) => nodes,
    };
    let forest = TraceForest::new(roots);

    let mut seen = HashSet::<&NodeId>::new();
    for node in forest.iter() {
        if !seen.insert(node.id()) {
            return Err(TraceFormatError::DuplicateId { node_id: node.id().clone() });
        }
    }

    Ok(forest)
}

pub fn load_trace_forest(path: impl AsRef<Path>) -> Result<TraceForest, TraceFormatError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)
        .map_err(|source| TraceFormatError::Io { path: path.to_owned(), source })?;
    parse_trace_forest(&input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    /// Include connector geometry for renderers without a diagramming library.
    pub connectors: bool,
    pub pretty: bool,
}

/// Output document handed to the rendering side.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutDocument<'a> {
    pub direction: Direction,
    pub nodes: &'a [LayoutNode],
    pub edges: &'a [Edge],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectors: Option<Vec<Connector>>,
}

pub fn export_layout_json(
    layout: &TraceLayout,
    config: &LayoutConfig,
    options: ExportOptions,
) -> Result<String, TraceFormatError> {
    let document = LayoutDocument {
        direction: layout.direction(),
        nodes: layout.nodes(),
        edges: layout.edges(),
        connectors: options.connectors.then(|| layout.connectors(config)),
    };
    let out = if options.pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    out.map_err(|source| TraceFormatError::Json { source })
}
