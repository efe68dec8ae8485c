// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tunables for the layout pass and connector geometry.
//!
//! Every field has a default, so a partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};

use super::coords::Direction;

const DEFAULT_NODE_WIDTH: f64 = 220.0;
const DEFAULT_NODE_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub horizontal: Gaps,
    pub vertical: Gaps,
    pub node_size: NodeSize,
    pub connector: ConnectorStyle,
    pub palette: EdgePalette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal: Gaps { column_gap: 280.0, row_gap: 120.0 },
            vertical: Gaps { column_gap: 160.0, row_gap: 280.0 },
            node_size: NodeSize::default(),
            connector: ConnectorStyle::default(),
            palette: EdgePalette::default(),
        }
    }
}

impl LayoutConfig {
    pub fn gaps(&self, direction: Direction) -> Gaps {
        match direction {
            Direction::Horizontal => self.horizontal,
            Direction::Vertical => self.vertical,
        }
    }
}

/// Pixel distance between adjacent columns and adjacent rows.
///
/// Under `Horizontal` the column gap runs along x and must exceed the node width; under
/// `Vertical` it runs along y and must exceed the node height (and the row gap the reverse).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gaps {
    pub column_gap: f64,
    pub row_gap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSize {
    pub width: f64,
    pub height: f64,
}

impl Default for NodeSize {
    fn default() -> Self {
        Self { width: DEFAULT_NODE_WIDTH, height: DEFAULT_NODE_HEIGHT }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectorStyle {
    /// Gap between the source box edge and the connector start.
    pub start_padding: f64,
    /// Gap between the connector end and the target box edge, leaving room for the arrowhead.
    pub arrow_padding: f64,
    /// Radius of the filled circle behind a connector's index label.
    pub label_radius: f64,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self { start_padding: 0.0, arrow_padding: 6.0, label_radius: 10.0 }
    }
}

/// Stroke colors: one accent for the root chain, a depth-cycled palette for parent-child edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgePalette {
    pub accent: String,
    pub depth: Vec<String>,
}

impl Default for EdgePalette {
    fn default() -> Self {
        Self {
            accent: "#f59e0b".to_owned(),
            depth: ["#6366f1", "#10b981", "#ec4899", "#0ea5e9", "#8b5cf6", "#14b8a6"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}
