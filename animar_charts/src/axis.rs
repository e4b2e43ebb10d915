// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis shape generation.
//!
//! This chart family uses exactly two guides: a bottom band axis over the
//! categories (labels optionally rotated to avoid overlap) and a left linear
//! axis over values. Both generate plain `animar_core` shapes; there is no
//! layout negotiation, the caller reserves margin space up front.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use animar_core::{Shape, ShapeId, Style, TextAnchor, TextBaseline};

use crate::format::format_tick_with_step;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::z_order;

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Paint for the domain line and tick marks.
    pub rule: Brush,
    /// Stroke width for the domain line and tick marks.
    pub rule_width: f64,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: Brush::Solid(css::BLACK),
            rule_width: 1.0,
            label_fill: Brush::Solid(css::BLACK),
            label_font_size: 10.0,
        }
    }
}

#[derive(Clone, Debug)]
enum AxisScale {
    /// Bottom band axis: one tick per category, at band centers.
    BottomBand {
        band: ScaleBand,
        labels: Vec<String>,
    },
    /// Left linear axis with generated ticks.
    LeftLinear { scale: ScaleLinear },
}

/// An axis specification.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// Stable-id base; each generated shape uses a deterministic offset.
    pub id_base: u64,
    scale: AxisScale,
    /// Tick line length.
    pub tick_size: f64,
    /// Padding between tick end and label.
    pub tick_padding: f64,
    /// Approximate tick count (linear axis only).
    pub tick_count: usize,
    /// Tick label rotation in degrees (band axis only).
    pub label_angle: f64,
    /// Horizontal label offset applied before rotation (band axis only).
    pub label_dx: f64,
    /// Styling.
    pub style: AxisStyle,
}

impl AxisSpec {
    /// Creates a bottom band axis over category labels.
    pub fn bottom(id_base: u64, band: ScaleBand, labels: Vec<String>) -> Self {
        Self {
            id_base,
            scale: AxisScale::BottomBand { band, labels },
            tick_size: 6.0,
            tick_padding: 3.0,
            tick_count: 10,
            label_angle: 0.0,
            label_dx: 0.0,
            style: AxisStyle::default(),
        }
    }

    /// Creates a left linear axis.
    pub fn left(id_base: u64, scale: ScaleLinear) -> Self {
        Self {
            id_base,
            scale: AxisScale::LeftLinear { scale },
            tick_size: 6.0,
            tick_padding: 3.0,
            tick_count: 10,
            label_angle: 0.0,
            label_dx: 0.0,
            style: AxisStyle::default(),
        }
    }

    /// Sets tick label rotation and pre-rotation x offset (band axis).
    pub fn with_label_angle(mut self, angle_degrees: f64, label_dx: f64) -> Self {
        self.label_angle = angle_degrees;
        self.label_dx = label_dx;
        self
    }

    /// Sets the approximate tick count (linear axis).
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Generates axis shapes for the given plot rectangle.
    pub fn shapes(&self, plot: Rect) -> Vec<Shape> {
        match &self.scale {
            AxisScale::BottomBand { band, labels } => self.shapes_bottom(plot, band, labels),
            AxisScale::LeftLinear { scale } => self.shapes_left(plot, scale),
        }
    }

    fn rule_style(&self) -> Style {
        Style::stroked(self.style.rule.clone(), self.style.rule_width)
    }

    fn label_shape(&self, offset: u64, pos: Point, text: String) -> Shape {
        Shape::text(
            ShapeId(self.id_base + 1000 + offset),
            z_order::AXIS_LABELS,
            pos,
            text,
            self.style.label_font_size,
        )
        .with_style(Style::filled(self.style.label_fill.clone()))
    }

    fn shapes_bottom(&self, plot: Rect, band: &ScaleBand, labels: &[String]) -> Vec<Shape> {
        let y = plot.y1;
        let mut out = Vec::new();

        // Domain line.
        out.push(Shape::line(
            ShapeId(self.id_base),
            z_order::AXIS_RULES,
            Point::new(plot.x0, y),
            Point::new(plot.x1, y),
            self.rule_style(),
        ));

        for (i, label) in labels.iter().enumerate() {
            let cx = band.center(i);
            out.push(Shape::line(
                ShapeId(self.id_base + 100 + i as u64),
                z_order::AXIS_RULES,
                Point::new(cx, y),
                Point::new(cx, y + self.tick_size),
                self.rule_style(),
            ));

            let rotated = self.label_angle != 0.0;
            let (anchor, baseline) = if rotated {
                (TextAnchor::End, TextBaseline::Hanging)
            } else {
                (TextAnchor::Middle, TextBaseline::Hanging)
            };
            out.push(
                self.label_shape(
                    i as u64,
                    Point::new(cx + self.label_dx, y + self.tick_size + self.tick_padding),
                    label.clone(),
                )
                .with_text_layout(anchor, baseline)
                .with_angle(self.label_angle),
            );
        }
        out
    }

    fn shapes_left(&self, plot: Rect, scale: &ScaleLinear) -> Vec<Shape> {
        let x = plot.x0;
        let mut out = Vec::new();

        out.push(Shape::line(
            ShapeId(self.id_base),
            z_order::AXIS_RULES,
            Point::new(x, plot.y0),
            Point::new(x, plot.y1),
            self.rule_style(),
        ));

        let ticks = scale.ticks(self.tick_count);
        let step = tick_step(&ticks);
        for (i, v) in ticks.iter().copied().enumerate() {
            let ty = scale.map(v);
            if ty < plot.y0 - 1.0e-9 || ty > plot.y1 + 1.0e-9 {
                continue;
            }
            out.push(Shape::line(
                ShapeId(self.id_base + 100 + i as u64),
                z_order::AXIS_RULES,
                Point::new(x, ty),
                Point::new(x - self.tick_size, ty),
                self.rule_style(),
            ));
            out.push(
                self.label_shape(
                    i as u64,
                    Point::new(x - self.tick_size - self.tick_padding, ty),
                    format_tick_with_step(v, step),
                )
                .with_text_layout(TextAnchor::End, TextBaseline::Middle),
            );
        }
        out
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use animar_core::Geometry;

    use super::*;

    #[test]
    fn bottom_axis_emits_domain_tick_and_label_per_category() {
        let band = ScaleBand::new((0.0, 100.0), 2).with_padding(0.2, 0.2);
        let labels = vec!["A".to_string(), "B".to_string()];
        let axis = AxisSpec::bottom(0, band, labels).with_label_angle(-45.0, -10.0);
        let shapes = axis.shapes(Rect::new(0.0, 0.0, 100.0, 50.0));

        // 1 domain line + 2 ticks + 2 labels.
        assert_eq!(shapes.len(), 5);
        let rotated: Vec<_> = shapes
            .iter()
            .filter_map(|s| match &s.geometry {
                Geometry::Text { angle, .. } => Some(*angle),
                _ => None,
            })
            .collect();
        assert_eq!(rotated, vec![-45.0, -45.0]);
    }

    #[test]
    fn left_axis_keeps_ticks_inside_the_plot() {
        let scale = ScaleLinear::new((0.0, 10.0), (50.0, 0.0));
        let axis = AxisSpec::left(500, scale).with_tick_count(5);
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        for shape in axis.shapes(plot) {
            if let Geometry::Line { p0, p1 } = shape.geometry {
                assert!(p0.y >= -1e-9 && p0.y <= 50.0 + 1e-9, "tick outside plot");
                assert!(p1.y >= -1e-9 && p1.y <= 50.0 + 1e-9, "tick outside plot");
            }
        }
    }
}
