// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene container.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::shape::{Shape, ShapeId};
use crate::transition::Transition;

/// An immutable scene description: shapes plus transition directives.
///
/// A scene is a value. Each render call builds a fresh one from its inputs;
/// nothing is shared across calls and a new scene does not cancel directives
/// issued by a previous one. Callers that re-render into the same sink are
/// responsible for clearing it first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
    transitions: Vec<Transition>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Appends several shapes.
    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    /// Records a transition directive.
    ///
    /// Empty directives are dropped so sinks never see a no-op.
    pub fn animate(&mut self, transition: Transition) {
        if !transition.is_empty() {
            self.transitions.push(transition);
        }
    }

    /// Returns the shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the transition directives in issue order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Looks up a shape by id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Returns shape references sorted by `(z_index, id)` for painting.
    pub fn shapes_ordered(&self) -> Vec<&Shape> {
        let mut out: Vec<&Shape> = self.shapes.iter().collect();
        out.sort_by_key(|s| (s.z_index, s.id));
        out
    }

    /// Returns the transition directives targeting a shape.
    pub fn transitions_for(&self, id: ShapeId) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.shape == id)
    }

    /// Returns the union of all shape bounds, ignoring text shapes.
    pub fn bounds(&self) -> Option<Rect> {
        let mut out: Option<Rect> = None;
        for shape in &self.shapes {
            let Some(b) = shape.bounds() else {
                continue;
            };
            out = Some(match out {
                None => b,
                Some(r) => Rect::new(
                    r.x0.min(b.x0),
                    r.y0.min(b.y0),
                    r.x1.max(b.x1),
                    r.y1.max(b.y1),
                ),
            });
        }
        out
    }

    /// Returns `true` if the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;

    use crate::shape::Style;
    use crate::transition::Transition;

    use super::*;

    #[test]
    fn ordered_sorts_by_z_then_id() {
        let mut scene = Scene::new();
        scene.push(Shape::rect(
            ShapeId(2),
            10,
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Style::default(),
        ));
        scene.push(Shape::rect(
            ShapeId(1),
            10,
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Style::default(),
        ));
        scene.push(Shape::rect(
            ShapeId(9),
            -1,
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Style::default(),
        ));

        let ids: Vec<u64> = scene.shapes_ordered().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, std::vec![9, 1, 2]);
    }

    #[test]
    fn empty_transitions_are_dropped() {
        let mut scene = Scene::new();
        scene.animate(Transition::new(ShapeId(1), 200.0));
        assert!(scene.transitions().is_empty());
    }

    #[test]
    fn bounds_skip_text() {
        let mut scene = Scene::new();
        scene.push(Shape::text(
            ShapeId(1),
            0,
            Point::new(100.0, 100.0),
            alloc::string::String::from("label"),
            10.0,
        ));
        assert_eq!(scene.bounds(), None);

        scene.push(Shape::rect(
            ShapeId(2),
            0,
            Rect::new(1.0, 2.0, 3.0, 4.0),
            Style::default(),
        ));
        assert_eq!(scene.bounds(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
    }
}
