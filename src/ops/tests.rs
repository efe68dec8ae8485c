// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{reduce, CollapseAction, CollapseController, Reduced};
use crate::layout::{CollapsedSet, Direction, LayoutConfig, TraceLayout};
use crate::model::fixtures::{nid, staircase_forest, two_root_forest};
use crate::model::{NodeId, TraceForest};

#[fixture]
fn controller() -> CollapseController {
    CollapseController::new(two_root_forest(), LayoutConfig::default())
}

fn view_ids(controller: &CollapseController) -> Vec<String> {
    controller.view().nodes().iter().map(|node| node.id().to_string()).collect()
}

fn slots(layout: &TraceLayout) -> Vec<(String, usize, usize)> {
    layout
        .nodes()
        .iter()
        .map(|node| (node.id().to_string(), node.column(), node.row()))
        .collect()
}

fn everything_has_children(_: &NodeId) -> bool {
    true
}

#[test]
fn reduce_collapse_filters_and_expand_relayouts() {
    let mut collapsed = CollapsedSet::new();

    let outcome =
        reduce(&mut collapsed, &CollapseAction::Collapse(nid("A")), everything_has_children);
    assert_eq!(outcome, Reduced { changed: true, recompute: false });
    assert!(collapsed.contains(&nid("A")));

    let outcome =
        reduce(&mut collapsed, &CollapseAction::Expand(nid("A")), everything_has_children);
    assert_eq!(outcome, Reduced { changed: true, recompute: true });
    assert!(collapsed.is_empty());
}

#[test]
fn reduce_redundant_actions_are_noops() {
    let mut collapsed = [nid("A")].into_iter().collect::<CollapsedSet>();

    let outcome =
        reduce(&mut collapsed, &CollapseAction::Collapse(nid("A")), everything_has_children);
    assert_eq!(outcome, Reduced::default());

    let outcome =
        reduce(&mut collapsed, &CollapseAction::Expand(nid("B")), everything_has_children);
    assert_eq!(outcome, Reduced::default());
    assert_eq!(collapsed.len(), 1);
}

#[test]
fn reduce_ignores_leaves() {
    let mut collapsed = CollapsedSet::new();
    for action in [
        CollapseAction::Collapse(nid("leaf")),
        CollapseAction::Toggle(nid("leaf")),
        CollapseAction::Expand(nid("leaf")),
    ] {
        let outcome = reduce(&mut collapsed, &action, |_| false);
        assert_eq!(outcome, Reduced::default(), "{action:?}");
    }
    assert!(collapsed.is_empty());
}

#[test]
fn reduce_force_recompute_leaves_set_alone() {
    let mut collapsed = [nid("A")].into_iter().collect::<CollapsedSet>();
    let outcome = reduce(&mut collapsed, &CollapseAction::ForceRecompute, |_| false);
    assert_eq!(outcome, Reduced { changed: false, recompute: true });
    assert_eq!(collapsed.len(), 1);
}

#[rstest]
fn initial_generation_is_fully_expanded(controller: CollapseController) {
    assert_eq!(controller.generation(), 1);
    assert_eq!(view_ids(&controller), ["R1", "R2", "A", "A1", "B"]);
    assert!(controller.collapsed().is_empty());
}

#[rstest]
fn collapse_is_a_filter_without_relayout(mut controller: CollapseController) {
    let before = controller.layout().clone();

    let outcome = controller.toggle(nid("R2"));
    assert_eq!(outcome, Reduced { changed: true, recompute: false });
    assert_eq!(controller.generation(), 1);
    assert_eq!(controller.layout(), &before);

    let view = controller.view();
    assert_eq!(view_ids(&controller), ["R1", "R2"]);
    assert!(view.node(&nid("R2")).expect("R2").is_collapsed());
    let edge_ids = view.edges().iter().map(|edge| edge.id().to_owned()).collect::<Vec<_>>();
    assert_eq!(edge_ids, ["chain:1"]);
}

#[rstest]
fn collapsing_a_hides_only_a1(mut controller: CollapseController) {
    controller.dispatch(CollapseAction::Collapse(nid("A")));
    assert_eq!(view_ids(&controller), ["R1", "R2", "A", "B"]);
}

#[rstest]
fn expand_recomputes(mut controller: CollapseController) {
    controller.toggle(nid("A"));
    let outcome = controller.toggle(nid("A"));

    assert_eq!(outcome, Reduced { changed: true, recompute: true });
    assert_eq!(controller.generation(), 2);
    assert_eq!(view_ids(&controller), ["R1", "R2", "A", "A1", "B"]);
}

#[rstest]
fn toggling_a_leaf_is_a_noop(mut controller: CollapseController) {
    let outcome = controller.toggle(nid("B"));
    assert_eq!(outcome, Reduced::default());
    assert!(controller.collapsed().is_empty());
    assert_eq!(controller.generation(), 1);
    assert!(!controller.has_children(&nid("B")));
    assert!(!controller.has_children(&nid("missing")));
}

#[test]
fn collapse_then_expand_matches_never_collapsing() {
    let forest = staircase_forest();
    let untouched = CollapseController::new(forest.clone(), LayoutConfig::default());

    let mut controller = CollapseController::new(forest, LayoutConfig::default());
    controller.toggle(nid("P.0"));
    controller.toggle(nid("P.0"));

    assert_eq!(slots(&controller.view()), slots(&untouched.view()));
    assert_eq!(controller.view(), untouched.view());
}

#[test]
fn expanding_after_relayout_pushes_rows_down() {
    // Start collapsed so the first generation is compact.
    let collapsed = [nid("P.0")].into_iter().collect::<CollapsedSet>();
    let mut controller = CollapseController::with_state(
        staircase_forest(),
        LayoutConfig::default(),
        Direction::Horizontal,
        collapsed,
    );
    assert!(!controller.layout().contains(&nid("P.0.0")));

    controller.dispatch(CollapseAction::Expand(nid("P.0")));
    let view = controller.view();
    let p00 = view.node(&nid("P.0.0")).expect("P.0.0 revealed");
    assert_eq!((p00.column(), p00.row()), (2, 2));
}

#[rstest]
fn direction_switch_recomputes_once(mut controller: CollapseController) {
    assert!(controller.set_direction(Direction::Vertical));
    assert_eq!(controller.generation(), 2);
    assert!(!controller.set_direction(Direction::Vertical));
    assert_eq!(controller.generation(), 2);
    assert_eq!(controller.view().direction(), Direction::Vertical);
}

#[rstest]
fn selection_does_not_recompute(mut controller: CollapseController) {
    controller.select(Some(nid("A1")));
    assert_eq!(controller.generation(), 1);
    assert_eq!(controller.selected(), Some(&nid("A1")));

    let view = controller.view();
    let selected = view.nodes().iter().filter(|node| node.is_selected()).collect::<Vec<_>>();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id().as_str(), "A1");

    controller.select(None);
    assert!(controller.view().nodes().iter().all(|node| !node.is_selected()));
}

#[rstest]
fn force_recompute_and_reset(mut controller: CollapseController) {
    controller.toggle(nid("R2"));
    controller.dispatch(CollapseAction::ForceRecompute);
    assert_eq!(controller.generation(), 2);
    assert!(!controller.layout().contains(&nid("A")));

    controller.reset();
    assert_eq!(controller.generation(), 3);
    assert!(controller.collapsed().is_empty());
    assert_eq!(view_ids(&controller), ["R1", "R2", "A", "A1", "B"]);
}

#[rstest]
fn replacing_the_forest_keeps_collapsed_ids(mut controller: CollapseController) {
    controller.toggle(nid("A"));
    controller.replace_forest(TraceForest::default());
    assert!(controller.view().is_empty());
    assert!(controller.is_collapsed(&nid("A")));

    controller.replace_forest(two_root_forest());
    assert_eq!(view_ids(&controller), ["R1", "R2", "A", "B"]);
    assert_eq!(controller.generation(), 3);
}

#[rstest]
fn has_children_agrees_with_what_dispatch_can_collapse(controller: CollapseController) {
    for node in controller.forest().iter() {
        let mut scratch = controller.clone();
        let outcome = scratch.dispatch(CollapseAction::Collapse(node.id().clone()));
        assert_eq!(controller.has_children(node.id()), outcome.changed, "{}", node.id());
    }
    let mut unknown = controller.clone();
    assert_eq!(unknown.dispatch(CollapseAction::Collapse(nid("missing"))), Reduced::default());
}
