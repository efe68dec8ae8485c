// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NodeId;
use super::trace::{TraceForest, TraceNode, TraceStatus};

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn leaf(id: &str) -> TraceNode {
    TraceNode::new(nid(id), id.to_lowercase()).with_kind("tool").with_status(TraceStatus::Success)
}

pub(crate) fn branch(id: &str, children: Vec<TraceNode>) -> TraceNode {
    leaf(id).with_kind("agent").with_children(children)
}

/// `R1` (leaf) and `R2` with children `A` (child `A1`) and `B`.
pub(crate) fn two_root_forest() -> TraceForest {
    TraceForest::new(vec![
        leaf("R1"),
        branch("R2", vec![branch("A", vec![leaf("A1")]), leaf("B")]),
    ])
}

/// A root whose first child has a deep subtree, pushing its later siblings (and the next root's
/// children) further down the rows.
pub(crate) fn staircase_forest() -> TraceForest {
    TraceForest::new(vec![
        branch(
            "P",
            vec![
                branch("P.0", vec![leaf("P.0.0"), leaf("P.0.1"), leaf("P.0.2")]),
                leaf("P.1"),
            ],
        ),
        branch("Q", vec![leaf("Q.0"), leaf("Q.1")]),
    ])
}

#[cfg(test)]
mod tests {
    use super::{staircase_forest, two_root_forest};

    #[test]
    fn fixtures_have_expected_shapes() {
        assert_eq!(two_root_forest().node_count(), 5);
        assert_eq!(staircase_forest().node_count(), 9);
    }
}
