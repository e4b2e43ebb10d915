// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar shape generation (aggregated, no-series case).

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;

use animar_core::{Shape, ShapeId, Style};

use crate::palette::CATEGORY10;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::shaping::AggregatedRow;

/// A vertical bar spec over aggregated rows.
///
/// Generates one rect shape per row, positioned by band index and spanning
/// from the zero baseline to the row's value. Shape ids are `id_base + index`
/// so a highlight pass can re-derive them from the same row order.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Stable-id base; bar `i` gets `id_base + i`.
    pub id_base: u64,
    /// Band scale for bar positions along x.
    pub band: ScaleBand,
    /// Linear scale for bar positions along y.
    pub y_scale: ScaleLinear,
    /// Fill color for all bars.
    pub fill: Color,
    /// Rendering order hint.
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar spec with the default single-series fill.
    pub fn new(id_base: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            id_base,
            band,
            y_scale,
            fill: CATEGORY10[0],
            z_index: crate::z_order::BARS,
        }
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the shape id for the bar at `index`.
    pub fn shape_id(&self, index: usize) -> ShapeId {
        ShapeId(self.id_base + index as u64)
    }

    /// Generates one rect shape per aggregated row, in row order.
    pub fn shapes(&self, rows: &[AggregatedRow]) -> Vec<Shape> {
        let bw = self.band.band_width();
        let baseline = self.y_scale.map(0.0);
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let x = self.band.x(i);
                let y = self.y_scale.map(row.value);
                Shape::rect(
                    self.shape_id(i),
                    self.z_index,
                    Rect::new(x, y.min(baseline), x + bw, y.max(baseline)),
                    Style::filled(self.fill),
                )
            })
            .collect()
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
    fn one_bar_per_row_spanning_to_baseline() {
        let rows = vec![
            AggregatedRow {
                category: "A".to_string(),
                value: 10.0,
            },
            AggregatedRow {
                category: "B".to_string(),
                value: 20.0,
            },
        ];
        let band = ScaleBand::new((0.0, 100.0), 2).with_padding(0.0, 0.0);
        let y = ScaleLinear::new((0.0, 20.0), (100.0, 0.0));
        let shapes = BarMarkSpec::new(100, band, y).shapes(&rows);

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].id, ShapeId(100));
        match shapes[1].geometry {
            Geometry::Rect { rect, .. } => {
                assert_eq!(rect, Rect::new(50.0, 0.0, 100.0, 100.0));
            }
            _ => panic!("expected rect geometry"),
        }
    }
}
