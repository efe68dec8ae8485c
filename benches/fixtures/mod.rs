// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

pub mod trace {
    use tracegraph::{CollapsedSet, NodeId, TraceForest, TraceNode, TraceStatus};

    const KINDS: [&str; 4] = ["agent", "tool", "llm", "retriever"];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub roots: usize,
        pub fanout: usize,
        pub depth: usize,
        /// Every n-th node is marked running; 0 disables.
        pub running_every: usize,
    }

    impl Params {
        pub const fn new(roots: usize, fanout: usize, depth: usize, running_every: usize) -> Self {
            Self { roots, fanout, depth, running_every }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        WideAgents,
        DeepChain,
        Staircase,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::WideAgents => "wide_agents",
                Self::DeepChain => "deep_chain",
                Self::Staircase => "staircase",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(3, 3, 3, 7),
                Self::WideAgents => Params::new(8, 12, 2, 13),
                Self::DeepChain => Params::new(2, 1, 400, 0),
                Self::Staircase => Params::new(40, 2, 4, 31),
            }
        }

        pub const ALL: [Case; 4] =
            [Self::Small, Self::WideAgents, Self::DeepChain, Self::Staircase];
    }

    pub fn root_id(index: usize) -> NodeId {
        NodeId::new(format!("r{index:03}")).expect("valid node id")
    }

    /// Deterministic forest generator.
    ///
    /// Ids are dotted paths (`r001.0.2`), so a node's depth is its number of dots.
    pub fn forest(params: Params) -> TraceForest {
        let mut counter = 0usize;
        let roots = (0..params.roots)
            .map(|index| {
                let id = format!("r{index:03}");
                build(&id, 0, params, &mut counter)
            })
            .collect();
        TraceForest::new(roots)
    }

    fn build(id: &str, depth: usize, params: Params, counter: &mut usize) -> TraceNode {
        let ordinal = *counter;
        *counter += 1;

        let status = if params.running_every > 0 && ordinal % params.running_every == 0 {
            TraceStatus::Running
        } else {
            TraceStatus::Success
        };
        let node_id = NodeId::new(id).expect("valid node id");
        let mut node = TraceNode::new(node_id, format!("step {id}"))
            .with_kind(KINDS[ordinal % KINDS.len()])
            .with_status(status);

        if depth < params.depth {
            for k in 0..params.fanout {
                node.push_child(build(&format!("{id}.{k}"), depth + 1, params, counter));
            }
        }
        node
    }

    pub fn fixture(case: Case) -> TraceForest {
        forest(case.params())
    }

    /// Ids of every parent exactly `depth` levels below its root.
    pub fn ids_at_depth(forest: &TraceForest, depth: usize) -> Vec<NodeId> {
        forest
            .iter()
            .filter(|node| node.has_children())
            .filter(|node| node.id().as_str().matches('.').count() == depth)
            .map(|node| node.id().clone())
            .collect()
    }

    /// Collapses every other parent at `depth`.
    pub fn alternating_collapse(forest: &TraceForest, depth: usize) -> CollapsedSet {
        ids_at_depth(forest, depth).into_iter().step_by(2).collect()
    }
}
