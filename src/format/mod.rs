// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Trace snapshot parsing and layout export.

pub mod json;

pub use json::{
    export_layout_json, load_trace_forest, parse_trace_forest, ExportOptions, LayoutDocument,
    TraceFormatError,
};
