// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::Gaps;
use super::grid::GridCell;

/// Reading direction of the laid-out trace.
///
/// This is the only place (together with the connector axis test) where direction matters; the
/// grid itself is direction-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Columns advance along x, rows along y.
    #[default]
    Horizontal,
    /// Columns advance along y, rows along x.
    Vertical,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    value: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown layout direction '{}' (expected horizontal or vertical)", self.value)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" | "h" | "LR" => Ok(Self::Horizontal),
            "vertical" | "v" | "TB" => Ok(Self::Vertical),
            _ => Err(ParseDirectionError { value: s.to_owned() }),
        }
    }
}

/// Top-left corner of a node box, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps a grid slot to pixels:
/// - horizontal: `x = column * column_gap`, `y = row * row_gap`
/// - vertical: `x = row * row_gap`, `y = column * column_gap`
pub fn to_pixels(column: usize, row: usize, direction: Direction, gaps: Gaps) -> Position {
    let along_columns = column as f64 * gaps.column_gap;
    let along_rows = row as f64 * gaps.row_gap;
    match direction {
        Direction::Horizontal => Position::new(along_columns, along_rows),
        Direction::Vertical => Position::new(along_rows, along_columns),
    }
}

pub fn cell_to_pixels(cell: &GridCell, direction: Direction, gaps: Gaps) -> Position {
    to_pixels(cell.column(), cell.row(), direction, gaps)
}
