// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracegraph: deterministic layout for collapsible execution-trace graphs.
//!
//! A trace is a forest of nested tool/agent/LLM invocations. The engine assigns every visible
//! node a column/row slot and pixel position, derives the edges between them, and keeps that
//! arrangement consistent as subtrees are collapsed or expanded.

pub mod format;
pub mod layout;
pub mod model;
pub mod ops;

pub use layout::{
    layout_trace, CollapsedSet, Direction, LayoutConfig, LayoutRequest, TraceLayout,
};
pub use model::{NodeId, TraceForest, TraceNode, TraceStatus};
pub use ops::{CollapseAction, CollapseController};
