// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Collapse/expand state transitions.
//!
//! Collapsing only filters the current generation; expanding (or an explicit recompute) reruns
//! the whole layout pipeline, because revealed nodes can push rows down in later columns.

use crate::layout::CollapsedSet;
use crate::model::NodeId;

mod controller;

pub use controller::CollapseController;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollapseAction {
    /// Hide the node's descendants.
    Collapse(NodeId),
    /// Reveal the node's descendants.
    Expand(NodeId),
    /// Collapse if expanded, expand if collapsed.
    Toggle(NodeId),
    /// Rerun the pipeline without touching the collapsed set (direction switch, "reset view").
    ForceRecompute,
}

/// What a [`reduce`] step did and what the caller has to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reduced {
    /// The collapsed set changed.
    pub changed: bool,
    /// The full layout pipeline must run again.
    pub recompute: bool,
}

impl Reduced {
    const NOOP: Self = Self { changed: false, recompute: false };
    const FILTER: Self = Self { changed: true, recompute: false };
    const RELAYOUT: Self = Self { changed: true, recompute: true };
}

/// Applies one action to the collapsed set.
///
/// `has_children` decides whether a node can collapse at all; actions on leaves and unknown ids
/// are no-ops. Redundant actions (collapsing a collapsed node, expanding an expanded one) are
/// no-ops as well.
pub fn reduce(
    collapsed: &mut CollapsedSet,
    action: &CollapseAction,
    has_children: impl Fn(&NodeId) -> bool,
) -> Reduced {
    let outcome = match action {
        CollapseAction::ForceRecompute => Reduced { changed: false, recompute: true },
        CollapseAction::Collapse(node_id)
        | CollapseAction::Expand(node_id)
        | CollapseAction::Toggle(node_id)
            if !has_children(node_id) =>
        {
            Reduced::NOOP
        }
        CollapseAction::Collapse(node_id) => collapse(collapsed, node_id),
        CollapseAction::Expand(node_id) => expand(collapsed, node_id),
        CollapseAction::Toggle(node_id) => {
            if collapsed.contains(node_id) {
                expand(collapsed, node_id)
            } else {
                collapse(collapsed, node_id)
            }
        }
    };

    tracing::debug!(
        ?action,
        changed = outcome.changed,
        recompute = outcome.recompute,
        collapsed = collapsed.len(),
        "collapse action reduced"
    );

    outcome
}

fn collapse(collapsed: &mut CollapsedSet, node_id: &NodeId) -> Reduced {
    if collapsed.insert(node_id.clone()) {
        Reduced::FILTER
    } else {
        Reduced::NOOP
    }
}

fn expand(collapsed: &mut CollapsedSet, node_id: &NodeId) -> Reduced {
    if collapsed.remove(node_id) {
        Reduced::RELAYOUT
    } else {
        Reduced::NOOP
    }
}

#[cfg(test)]
mod tests;
