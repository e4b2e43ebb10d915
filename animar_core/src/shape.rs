// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape primitives: geometry, style, and stable identity.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Rect};
use peniko::{Brush, Color};

/// A stable shape identity.
///
/// Chart generators derive ids deterministically (base + offset) so the same
/// inputs always produce the same ids. Transition directives address shapes by
/// id, and two scenes built from identical inputs compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl ShapeId {
    /// Creates a shape id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text anchoring, matching the SVG `text-anchor` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor at the start of the text.
    Start,
    /// Anchor at the horizontal center of the text.
    Middle,
    /// Anchor at the end of the text.
    End,
}

/// Vertical text baseline, matching the SVG `dominant-baseline` values we use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// Baseline through the vertical center.
    Middle,
    /// Standard alphabetic baseline.
    Alphabetic,
    /// Hanging baseline (text hangs below the anchor point).
    Hanging,
}

/// Paint and stroke attributes shared by all shape kinds.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates. `0.0` means no visible stroke.
    pub stroke_width: f64,
    /// Optional dash pattern as `(on, off)` lengths.
    pub dash: Option<(f64, f64)>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Brush::Solid(Color::BLACK),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
            dash: None,
        }
    }
}

impl Style {
    /// A fill-only style.
    pub fn filled(fill: impl Into<Brush>) -> Self {
        Self {
            fill: fill.into(),
            ..Self::default()
        }
    }

    /// A stroke-only style (transparent fill).
    pub fn stroked(stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: stroke.into(),
            stroke_width,
            dash: None,
        }
    }

    /// Sets the stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets a dash pattern as `(on, off)` lengths.
    pub fn with_dash(mut self, on: f64, off: f64) -> Self {
        self.dash = Some((on, off));
        self
    }
}

/// Shape geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// An axis-aligned rectangle, with an optional corner radius.
    Rect {
        /// Rectangle extents in scene coordinates.
        rect: Rect,
        /// Corner radius applied to all four corners.
        corner_radius: f64,
    },
    /// A straight line segment.
    Line {
        /// Start point.
        p0: Point,
        /// End point.
        p1: Point,
    },
    /// An unshaped text run.
    Text {
        /// Anchor position.
        pos: Point,
        /// Text content.
        text: String,
        /// Font size in scene coordinates.
        font_size: f64,
        /// Horizontal anchoring.
        anchor: TextAnchor,
        /// Vertical baseline.
        baseline: TextBaseline,
        /// Rotation in degrees around `pos` (clockwise, SVG convention).
        angle: f64,
    },
}

/// A drawable shape: identity, render order, style, and geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Stable identity.
    pub id: ShapeId,
    /// Render order hint; sinks sort by `(z_index, id)`.
    pub z_index: i32,
    /// Paint attributes.
    pub style: Style,
    /// Geometry.
    pub geometry: Geometry,
}

impl Shape {
    /// Creates a rectangle shape.
    pub fn rect(id: ShapeId, z_index: i32, rect: Rect, style: Style) -> Self {
        Self {
            id,
            z_index,
            style,
            geometry: Geometry::Rect {
                rect,
                corner_radius: 0.0,
            },
        }
    }

    /// Creates a line shape.
    pub fn line(id: ShapeId, z_index: i32, p0: Point, p1: Point, style: Style) -> Self {
        Self {
            id,
            z_index,
            style,
            geometry: Geometry::Line { p0, p1 },
        }
    }

    /// Creates a text shape with a start anchor and alphabetic baseline.
    pub fn text(id: ShapeId, z_index: i32, pos: Point, text: String, font_size: f64) -> Self {
        Self {
            id,
            z_index,
            style: Style::default(),
            geometry: Geometry::Text {
                pos,
                text,
                font_size,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Alphabetic,
                angle: 0.0,
            },
        }
    }

    /// Sets the corner radius (rect shapes only; otherwise a no-op).
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        if let Geometry::Rect {
            corner_radius: r, ..
        } = &mut self.geometry
        {
            *r = corner_radius;
        }
        self
    }

    /// Sets the text anchor and baseline (text shapes only; otherwise a no-op).
    pub fn with_text_layout(mut self, anchor: TextAnchor, baseline: TextBaseline) -> Self {
        if let Geometry::Text {
            anchor: a,
            baseline: b,
            ..
        } = &mut self.geometry
        {
            *a = anchor;
            *b = baseline;
        }
        self
    }

    /// Sets the rotation angle in degrees (text shapes only; otherwise a no-op).
    pub fn with_angle(mut self, angle: f64) -> Self {
        if let Geometry::Text { angle: a, .. } = &mut self.geometry {
            *a = angle;
        }
        self
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Returns geometry bounds, if the shape has well-defined extents.
    ///
    /// Text bounds depend on shaping and are not estimated here; sinks that
    /// need them should apply their own metrics.
    pub fn bounds(&self) -> Option<Rect> {
        match &self.geometry {
            Geometry::Rect { rect, .. } => Some(*rect),
            Geometry::Line { p0, p1 } => Some(Rect::new(
                p0.x.min(p1.x),
                p0.y.min(p1.y),
                p0.x.max(p1.x),
                p0.y.max(p1.y),
            )),
            Geometry::Text { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn corner_radius_only_applies_to_rects() {
        let line = Shape::line(
            ShapeId(1),
            0,
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Style::default(),
        )
        .with_corner_radius(2.0);
        assert!(matches!(line.geometry, Geometry::Line { .. }));

        let rect = Shape::rect(
            ShapeId(2),
            0,
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Style::default(),
        )
        .with_corner_radius(2.0);
        match rect.geometry {
            Geometry::Rect { corner_radius, .. } => assert_eq!(corner_radius, 2.0),
            _ => panic!("expected rect geometry"),
        }
    }

    #[test]
    fn line_bounds_are_normalized() {
        let line = Shape::line(
            ShapeId(1),
            0,
            Point::new(10.0, 0.0),
            Point::new(0.0, 5.0),
            Style::default(),
        );
        assert_eq!(line.bounds(), Some(Rect::new(0.0, 0.0, 10.0, 5.0)));
    }
}
