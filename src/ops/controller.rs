// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::sync::Arc;

use super::{reduce, CollapseAction, Reduced};
use crate::layout::{
    layout_trace, CollapsedSet, Direction, LayoutConfig, LayoutRequest, TraceLayout,
};
use crate::model::{NodeId, TraceForest};

/// Owns the collapsed set and the current layout generation for one trace.
///
/// Each full recompute replaces the generation wholesale; collapsing only changes what
/// [`view`](Self::view) filters out of it.
#[derive(Debug, Clone)]
pub struct CollapseController {
    forest: Arc<TraceForest>,
    child_counts: HashMap<NodeId, usize>,
    config: LayoutConfig,
    direction: Direction,
    selected: Option<NodeId>,
    collapsed: CollapsedSet,
    current: TraceLayout,
    generation: u64,
}

impl CollapseController {
    /// Lays out `forest` fully expanded in the default direction.
    pub fn new(forest: impl Into<Arc<TraceForest>>, config: LayoutConfig) -> Self {
        Self::with_state(forest, config, Direction::default(), CollapsedSet::new())
    }

    pub fn with_state(
        forest: impl Into<Arc<TraceForest>>,
        config: LayoutConfig,
        direction: Direction,
        collapsed: CollapsedSet,
    ) -> Self {
        let forest = forest.into();
        let child_counts = forest.child_counts();
        let request = LayoutRequest::new(&collapsed).with_direction(direction);
        let current = layout_trace(&forest, &request, &config);
        Self {
            forest,
            child_counts,
            config,
            direction,
            selected: None,
            collapsed,
            current,
            generation: 1,
        }
    }

    pub fn forest(&self) -> &Arc<TraceForest> {
        &self.forest
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn collapsed(&self) -> &CollapsedSet {
        &self.collapsed
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// Bumped once per full recompute.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The generation as computed by the last full pass, including nodes hidden since.
    pub fn layout(&self) -> &TraceLayout {
        &self.current
    }

    /// Render-ready projection of the current generation under the current collapsed set and
    /// selection.
    pub fn view(&self) -> TraceLayout {
        self.current.project(&self.collapsed, self.selected.as_ref())
    }

    pub fn has_children(&self, node_id: &NodeId) -> bool {
        can_collapse(&self.child_counts, node_id)
    }

    pub fn is_collapsed(&self, node_id: &NodeId) -> bool {
        self.collapsed.contains(node_id)
    }

    /// Applies `action` and reruns the pipeline if the reducer asks for it.
    pub fn dispatch(&mut self, action: CollapseAction) -> Reduced {
        let child_counts = &self.child_counts;
        let outcome =
            reduce(&mut self.collapsed, &action, |node_id| can_collapse(child_counts, node_id));
        if outcome.recompute {
            self.recompute();
        }
        outcome
    }

    pub fn toggle(&mut self, node_id: NodeId) -> Reduced {
        self.dispatch(CollapseAction::Toggle(node_id))
    }

    /// Switches the reading direction. Returns `true` if a recompute ran.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        self.recompute();
        true
    }

    /// Marks a node for highlighting. Never triggers a recompute.
    pub fn select(&mut self, node_id: Option<NodeId>) {
        self.selected = node_id;
    }

    /// Swaps in a new snapshot of the same trace and recomputes.
    ///
    /// Collapsed ids are kept even if the new snapshot lacks them, so a subtree that reappears
    /// later comes back collapsed.
    pub fn replace_forest(&mut self, forest: impl Into<Arc<TraceForest>>) {
        self.forest = forest.into();
        self.child_counts = self.forest.child_counts();
        self.recompute();
    }

    /// Expands everything and recomputes ("reset view").
    pub fn reset(&mut self) {
        self.collapsed.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        let request = LayoutRequest::new(&self.collapsed).with_direction(self.direction);
        self.current = layout_trace(&self.forest, &request, &self.config);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            nodes = self.current.nodes().len(),
            "layout generation replaced"
        );
    }
}

fn can_collapse(child_counts: &HashMap<NodeId, usize>, node_id: &NodeId) -> bool {
    child_counts.get(node_id).is_some_and(|&count| count > 0)
}
