// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend shape generation.
//!
//! A single horizontal row of swatch+label pairs, centered under the plot
//! area. Only rendered when a series channel is present; the item list must
//! come from the same ordinal scale the bars used so colors line up.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::{Brush, Color};
use peniko::color::palette::css;

use animar_core::{Shape, ShapeId, Style, TextAnchor, TextBaseline};

use crate::z_order;

/// A simple legend row item.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill color.
    pub fill: Color,
}

impl LegendItem {
    /// Convenience constructor.
    pub fn new(label: impl Into<String>, fill: Color) -> Self {
        Self {
            label: label.into(),
            fill,
        }
    }
}

/// A horizontal legend row: color swatches with text labels, centered.
#[derive(Clone, Debug)]
pub struct LegendRowSpec {
    /// Stable-id base; each generated shape uses a deterministic offset.
    pub id_base: u64,
    /// Horizontal space reserved per item.
    pub item_width: f64,
    /// Gap between items.
    pub item_gap: f64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Swatch corner radius.
    pub swatch_radius: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendRowSpec {
    /// Creates a legend row with the fixed layout defaults.
    pub fn new(id_base: u64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            item_width: 80.0,
            item_gap: 10.0,
            swatch_size: 10.0,
            swatch_radius: 1.5,
            label_dx: 15.0,
            font_size: 10.0,
            text_fill: Brush::Solid(css::BLACK),
            items,
        }
    }

    /// Total width of the row (items plus gaps).
    pub fn row_width(&self) -> f64 {
        let n = self.items.len() as f64;
        if n == 0.0 {
            return 0.0;
        }
        n * self.item_width + (n - 1.0) * self.item_gap
    }

    /// Generates swatch and label shapes.
    ///
    /// `origin` is the left edge and text baseline of the row's reserved
    /// strip; the row centers itself within `strip_width`.
    pub fn shapes(&self, origin: Point, strip_width: f64) -> Vec<Shape> {
        let lead = (strip_width - self.row_width()) / 2.0;
        let mut out = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            let x = origin.x + lead + i as f64 * (self.item_width + self.item_gap);
            // The swatch rides slightly above the text baseline.
            let swatch_y = origin.y - 9.0;
            out.push(
                Shape::rect(
                    ShapeId(self.id_base + i as u64),
                    z_order::LEGEND_SWATCHES,
                    Rect::new(x, swatch_y, x + self.swatch_size, swatch_y + self.swatch_size),
                    Style::filled(item.fill),
                )
                .with_corner_radius(self.swatch_radius),
            );
            out.push(
                Shape::text(
                    ShapeId(self.id_base + 1000 + i as u64),
                    z_order::LEGEND_LABELS,
                    Point::new(x + self.label_dx, origin.y),
                    item.label.clone(),
                    self.font_size,
                )
                .with_style(Style::filled(self.text_fill.clone()))
                .with_text_layout(TextAnchor::Start, TextBaseline::Alphabetic),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use animar_core::Geometry;

    use crate::palette::CATEGORY10;

    use super::*;

    #[test]
    fn row_is_centered_in_the_strip() {
        let items = vec![
            LegendItem::new("s1", CATEGORY10[0]),
            LegendItem::new("s2", CATEGORY10[1]),
        ];
        let spec = LegendRowSpec::new(0, items);
        assert_eq!(spec.row_width(), 170.0);

        let shapes = spec.shapes(Point::new(0.0, 100.0), 300.0);
        assert_eq!(shapes.len(), 4);
        // First swatch starts at the centering lead-in: (300 - 170) / 2.
        match shapes[0].geometry {
            Geometry::Rect { rect, .. } => assert_eq!(rect.x0, 65.0),
            _ => panic!("expected rect geometry"),
        }
        // Second item is one slot (80 + 10) further right.
        match shapes[2].geometry {
            Geometry::Rect { rect, .. } => assert_eq!(rect.x0, 155.0),
            _ => panic!("expected rect geometry"),
        }
    }

    #[test]
    fn empty_legend_emits_nothing() {
        let spec = LegendRowSpec::new(0, vec![]);
        assert_eq!(spec.row_width(), 0.0);
        assert!(spec.shapes(Point::new(0.0, 0.0), 100.0).is_empty());
    }
}
