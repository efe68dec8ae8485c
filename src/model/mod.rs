// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input data model: execution traces as a forest of nodes.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod trace;

pub use ids::{Id, IdError, NodeId};
pub use trace::{TraceForest, TraceIter, TraceNode, TraceStatus};
