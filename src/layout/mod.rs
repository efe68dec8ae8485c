// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Trace layout pipeline.
//!
//! visibility → grid slots → pixel coordinates → edges (+ optional connector geometry). Each pass
//! is a pure function of the forest snapshot, the collapsed set and the direction.

pub mod config;
pub mod connector;
pub mod coords;
pub mod edges;
pub mod grid;
pub mod trace;
pub mod visibility;

pub use config::{ConnectorStyle, EdgePalette, Gaps, LayoutConfig, NodeSize};
pub use connector::{
    route_connector, Axis, Connector, ConnectorLabel, ConnectorPath, NodeBox, Point,
};
pub use coords::{to_pixels, Direction, ParseDirectionError, Position};
pub use edges::{build_edges, depth_color, ColorKey, Edge, EdgeClass};
pub use grid::{assign_grid, GridCell};
pub use trace::{layout_trace, layout_traces, LayoutNode, LayoutRequest, TraceLayout};
pub use visibility::{resolve_visible, CollapsedSet, VisibleNode};
