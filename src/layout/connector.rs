// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector geometry for renderers that draw plain lines/curves between node boxes.
//!
//! Only final pixel boxes matter here; nothing in this module looks at columns or rows.

use std::fmt::Write as _;

use serde::Serialize;

use super::config::{ConnectorStyle, EdgePalette};
use super::edges::{Edge, EdgeClass};
use crate::model::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Axis-aligned node footprint; `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NodeBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Axis carrying the larger share of the center-to-center delta. Ties go horizontal.
pub fn dominant_axis(from: Point, to: Point) -> Axis {
    if (to.x - from.x).abs() >= (to.y - from.y).abs() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConnectorPath {
    Line { start: Point, end: Point },
    /// Cubic Bézier S-curve.
    Curve { start: Point, control1: Point, control2: Point, end: Point },
}

impl ConnectorPath {
    pub fn start(&self) -> Point {
        match self {
            Self::Line { start, .. } | Self::Curve { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Self::Line { end, .. } | Self::Curve { end, .. } => *end,
        }
    }

    /// Point at `t = 0.5` along the path.
    pub fn midpoint(&self) -> Point {
        match *self {
            Self::Line { start, end } => start.midpoint(end),
            Self::Curve { start, control1, control2, end } => Point::new(
                (start.x + 3.0 * control1.x + 3.0 * control2.x + end.x) / 8.0,
                (start.y + 3.0 * control1.y + 3.0 * control2.y + end.y) / 8.0,
            ),
        }
    }

    /// SVG path data (`d` attribute).
    pub fn svg_d(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Line { start, end } => {
                let _ = write!(out, "M {} {} L {} {}", start.x, start.y, end.x, end.y);
            }
            Self::Curve { start, control1, control2, end } => {
                let _ = write!(
                    out,
                    "M {} {} C {} {}, {} {}, {} {}",
                    start.x, start.y, control1.x, control1.y, control2.x, control2.y, end.x, end.y
                );
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectorLabel {
    pub index: usize,
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub edge_id: String,
    pub source_id: NodeId,
    pub target_id: NodeId,
    pub stroke: String,
    pub animated: bool,
    pub axis: Axis,
    pub path: ConnectorPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<ConnectorLabel>,
}

/// Clips a connector between two boxes to their near edges.
///
/// The start sits `start_padding` outside the source box, the end `arrow_padding` short of the
/// target box, both on the center line of the dominant axis.
pub fn clip_endpoints(
    source: &NodeBox,
    target: &NodeBox,
    style: &ConnectorStyle,
) -> (Axis, Point, Point) {
    let from = source.center();
    let to = target.center();
    let axis = dominant_axis(from, to);

    let (start, end) = match axis {
        Axis::Horizontal => {
            let sign = if to.x >= from.x { 1.0 } else { -1.0 };
            (
                Point::new(from.x + sign * (source.width / 2.0 + style.start_padding), from.y),
                Point::new(to.x - sign * (target.width / 2.0 + style.arrow_padding), to.y),
            )
        }
        Axis::Vertical => {
            let sign = if to.y >= from.y { 1.0 } else { -1.0 };
            (
                Point::new(from.x, from.y + sign * (source.height / 2.0 + style.start_padding)),
                Point::new(to.x, to.y - sign * (target.height / 2.0 + style.arrow_padding)),
            )
        }
    };

    (axis, start, end)
}

/// S-curve between two clipped endpoints: both control points sit halfway along the dominant
/// axis, each keeping its own endpoint's offset on the perpendicular axis.
pub fn s_curve(axis: Axis, start: Point, end: Point) -> ConnectorPath {
    let (control1, control2) = match axis {
        Axis::Horizontal => {
            let mid_x = (start.x + end.x) / 2.0;
            (Point::new(mid_x, start.y), Point::new(mid_x, end.y))
        }
        Axis::Vertical => {
            let mid_y = (start.y + end.y) / 2.0;
            (Point::new(start.x, mid_y), Point::new(end.x, mid_y))
        }
    };
    ConnectorPath::Curve { start, control1, control2, end }
}

/// Full connector geometry for one edge. Root-chain edges are straight; parent-child edges are
/// curved and carry their sibling index in a label circle at the path midpoint.
pub fn route_connector(
    edge: &Edge,
    source: &NodeBox,
    target: &NodeBox,
    style: &ConnectorStyle,
    palette: &EdgePalette,
) -> Connector {
    let (axis, start, end) = clip_endpoints(source, target, style);
    let path = match edge.class() {
        EdgeClass::RootChain => ConnectorPath::Line { start, end },
        EdgeClass::ParentChild => s_curve(axis, start, end),
    };
    let label = edge.label_index().map(|index| ConnectorLabel {
        index,
        center: path.midpoint(),
        radius: style.label_radius,
    });

    Connector {
        edge_id: edge.id().to_owned(),
        source_id: edge.source_id().clone(),
        target_id: edge.target_id().clone(),
        stroke: edge.color_key().resolve(palette).to_owned(),
        animated: edge.animated(),
        axis,
        path,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::{clip_endpoints, dominant_axis, s_curve, Axis, ConnectorPath, NodeBox, Point};
    use crate::layout::config::ConnectorStyle;

    const STYLE: ConnectorStyle =
        ConnectorStyle { start_padding: 0.0, arrow_padding: 6.0, label_radius: 10.0 };

    #[test]
    fn axis_follows_the_larger_delta() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(dominant_axis(origin, Point::new(10.0, 3.0)), Axis::Horizontal);
        assert_eq!(dominant_axis(origin, Point::new(-2.0, -30.0)), Axis::Vertical);
        assert_eq!(dominant_axis(origin, Point::new(5.0, 5.0)), Axis::Horizontal);
        assert_eq!(dominant_axis(origin, origin), Axis::Horizontal);
    }

    #[test]
    fn clips_to_near_edges_left_to_right() {
        let source = NodeBox::new(0.0, 0.0, 200.0, 80.0);
        let target = NodeBox::new(300.0, 120.0, 200.0, 80.0);
        let (axis, start, end) = clip_endpoints(&source, &target, &STYLE);

        assert_eq!(axis, Axis::Horizontal);
        assert_eq!(start, Point::new(200.0, 40.0));
        assert_eq!(end, Point::new(294.0, 160.0));
    }

    #[test]
    fn clips_to_near_edges_bottom_to_top() {
        let source = NodeBox::new(0.0, 400.0, 200.0, 80.0);
        let target = NodeBox::new(0.0, 0.0, 200.0, 80.0);
        let (axis, start, end) = clip_endpoints(&source, &target, &STYLE);

        assert_eq!(axis, Axis::Vertical);
        assert_eq!(start, Point::new(100.0, 400.0));
        assert_eq!(end, Point::new(100.0, 86.0));
    }

    #[test]
    fn s_curve_controls_sit_on_the_dominant_midline() {
        let path = s_curve(Axis::Horizontal, Point::new(200.0, 40.0), Point::new(300.0, 160.0));
        let ConnectorPath::Curve { control1, control2, .. } = path else {
            panic!("expected a curve, got {path:?}");
        };
        assert_eq!(control1, Point::new(250.0, 40.0));
        assert_eq!(control2, Point::new(250.0, 160.0));
        assert_eq!(path.midpoint(), Point::new(250.0, 100.0));

        let path = s_curve(Axis::Vertical, Point::new(0.0, 0.0), Point::new(40.0, 100.0));
        let ConnectorPath::Curve { control1, control2, .. } = path else {
            panic!("expected a curve, got {path:?}");
        };
        assert_eq!(control1, Point::new(0.0, 50.0));
        assert_eq!(control2, Point::new(40.0, 50.0));
    }

    #[test]
    fn svg_path_data() {
        let line = ConnectorPath::Line { start: Point::new(0.0, 1.5), end: Point::new(10.0, 1.5) };
        assert_eq!(line.svg_d(), "M 0 1.5 L 10 1.5");

        let curve = s_curve(Axis::Horizontal, Point::new(0.0, 0.0), Point::new(10.0, 20.0));
        assert_eq!(curve.svg_d(), "M 0 0 C 5 0, 5 20, 10 20");
        assert_eq!(curve.start(), Point::new(0.0, 0.0));
        assert_eq!(curve.end(), Point::new(10.0, 20.0));
    }
}
