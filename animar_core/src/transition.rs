// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition directives.
//!
//! A transition is pure data: it names a target shape, the attributes to
//! interpolate with their explicit start and end values, and a duration.
//! The scene builder records the directive and returns; the rendering sink
//! owns the clock. Interpolation is linear with no delay or stagger.

extern crate alloc;

use kurbo::Point;
use peniko::Brush;
use smallvec::SmallVec;

use crate::shape::ShapeId;

/// One interpolated attribute with explicit endpoints.
///
/// Start values are recorded alongside end values so a sink can replay the
/// directive without inspecting the shape list, and so two scenes built from
/// identical inputs compare equal transition-for-transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Interp {
    /// Fill paint.
    Fill {
        /// Start paint.
        from: Brush,
        /// End paint.
        to: Brush,
    },
    /// Stroke paint.
    Stroke {
        /// Start paint.
        from: Brush,
        /// End paint.
        to: Brush,
    },
    /// Stroke width.
    StrokeWidth {
        /// Start width.
        from: f64,
        /// End width.
        to: f64,
    },
    /// Line endpoints (line shapes only).
    Endpoints {
        /// Start `(p0, p1)`.
        from: (Point, Point),
        /// End `(p0, p1)`.
        to: (Point, Point),
    },
}

/// A transition directive for a single shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Target shape.
    pub shape: ShapeId,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    /// Attributes to interpolate. Most directives carry one or two.
    pub interps: SmallVec<[Interp; 4]>,
}

impl Transition {
    /// Creates an empty directive for a shape.
    pub fn new(shape: ShapeId, duration_ms: f64) -> Self {
        Self {
            shape,
            duration_ms,
            interps: SmallVec::new(),
        }
    }

    /// Adds a fill interpolation.
    pub fn fill(mut self, from: impl Into<Brush>, to: impl Into<Brush>) -> Self {
        self.interps.push(Interp::Fill {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Adds a stroke paint interpolation.
    pub fn stroke(mut self, from: impl Into<Brush>, to: impl Into<Brush>) -> Self {
        self.interps.push(Interp::Stroke {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Adds a stroke width interpolation.
    pub fn stroke_width(mut self, from: f64, to: f64) -> Self {
        self.interps.push(Interp::StrokeWidth { from, to });
        self
    }

    /// Adds a line endpoint interpolation.
    pub fn endpoints(mut self, from: (Point, Point), to: (Point, Point)) -> Self {
        self.interps.push(Interp::Endpoints { from, to });
        self
    }

    /// Returns `true` if no attributes are interpolated.
    pub fn is_empty(&self) -> bool {
        self.interps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::Color;

    use super::*;

    #[test]
    fn builder_records_interps_in_order() {
        let t = Transition::new(ShapeId(7), 500.0)
            .stroke(Color::TRANSPARENT, Color::BLACK)
            .stroke_width(0.0, 5.0);
        assert_eq!(t.interps.len(), 2);
        assert!(matches!(t.interps[0], Interp::Stroke { .. }));
        assert!(matches!(
            t.interps[1],
            Interp::StrokeWidth { from: 0.0, to: 5.0 }
        ));
    }

    #[test]
    fn empty_directive_reports_empty() {
        assert!(Transition::new(ShapeId(1), 100.0).is_empty());
    }
}
