// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar shape generation (series case).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use animar_core::{Shape, ShapeId, Style};

use crate::palette::OrdinalColorScale;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::shaping::StackLayer;

/// Id stride between stack layers, leaving room for per-category offsets.
const LAYER_STRIDE: u64 = 1000;

/// A stacked bar spec over stack layers.
///
/// Generates one rect shape per `(category, series)` segment. Segment width
/// is the band width minus one pixel so adjacent layers read as separate
/// spans. A pair absent from the input has no segment and so no shape.
#[derive(Clone, Debug)]
pub struct StackedBarMarkSpec {
    /// Stable-id base; the segment for layer `l` and category index `c`
    /// gets `id_base + l * 1000 + c`.
    pub id_base: u64,
    /// Band scale for positions along x.
    pub band: ScaleBand,
    /// Linear scale for cumulative bounds along y.
    pub y_scale: ScaleLinear,
    /// Rendering order hint.
    pub z_index: i32,
}

impl StackedBarMarkSpec {
    /// Creates a stacked bar spec.
    pub fn new(id_base: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            id_base,
            band,
            y_scale,
            z_index: crate::z_order::BARS,
        }
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the shape id for a `(layer, category index)` segment.
    pub fn shape_id(&self, layer: usize, cat_index: usize) -> ShapeId {
        ShapeId(self.id_base + layer as u64 * LAYER_STRIDE + cat_index as u64)
    }

    /// Generates segment shapes for all layers.
    ///
    /// `categories` must be the same first-seen-ordered list the layers were
    /// stacked against; it fixes each segment's band index and shape id.
    /// Layer fills come from the palette by layer index.
    pub fn shapes(&self, layers: &[StackLayer], categories: &[String]) -> Vec<Shape> {
        let bw = (self.band.band_width() - 1.0).max(0.0);
        let mut out = Vec::new();
        for (li, layer) in layers.iter().enumerate() {
            let fill = OrdinalColorScale::by_index(li);
            for segment in &layer.segments {
                let Some(ci) = categories.iter().position(|c| *c == segment.category) else {
                    continue;
                };
                let x = self.band.x(ci);
                let y0 = self.y_scale.map(segment.y0);
                let y1 = self.y_scale.map(segment.y1);
                out.push(Shape::rect(
                    self.shape_id(li, ci),
                    self.z_index,
                    Rect::new(x, y0.min(y1), x + bw, y0.max(y1)),
                    Style::filled(fill),
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use animar_core::Geometry;

    use crate::palette::CATEGORY10;
    use crate::shaping::StackSegment;

    use super::*;

    fn layers() -> Vec<StackLayer> {
        vec![
            StackLayer {
                series: "s1".to_string(),
                segments: vec![
                    StackSegment {
                        category: "A".to_string(),
                        y0: 0.0,
                        y1: 3.0,
                    },
                    StackSegment {
                        category: "B".to_string(),
                        y0: 0.0,
                        y1: 2.0,
                    },
                ],
            },
            StackLayer {
                series: "s2".to_string(),
                segments: vec![StackSegment {
                    category: "A".to_string(),
                    y0: 3.0,
                    y1: 5.0,
                }],
            },
        ]
    }

    #[test]
    fn one_shape_per_present_segment() {
        let cats = vec!["A".to_string(), "B".to_string()];
        let band = ScaleBand::new((10.0, 30.0), 2).with_padding(0.0, 0.0);
        let y = ScaleLinear::new((0.0, 5.0), (100.0, 0.0));
        let spec = StackedBarMarkSpec::new(2000, band, y);
        let shapes = spec.shapes(&layers(), &cats);

        // 2 segments in layer 0, 1 in layer 1; the absent (B, s2) pair has none.
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].id, spec.shape_id(0, 0));
        assert_eq!(shapes[2].id, spec.shape_id(1, 0));

        // Layer 1's A segment spans y in [3, 5] => mapped [40, 0].
        match shapes[2].geometry {
            Geometry::Rect { rect, .. } => {
                assert_eq!(rect.y0, 0.0);
                assert_eq!(rect.y1, 40.0);
                // Band width minus one pixel of separation.
                assert_eq!(rect.width(), 9.0);
            }
            _ => panic!("expected rect geometry"),
        }
    }

    #[test]
    fn layer_fills_follow_the_palette() {
        let cats = vec!["A".to_string(), "B".to_string()];
        let band = ScaleBand::new((0.0, 20.0), 2);
        let y = ScaleLinear::new((0.0, 5.0), (100.0, 0.0));
        let shapes = StackedBarMarkSpec::new(0, band, y).shapes(&layers(), &cats);
        assert_eq!(shapes[0].style.fill, peniko::Brush::Solid(CATEGORY10[0]));
        assert_eq!(shapes[2].style.fill, peniko::Brush::Solid(CATEGORY10[1]));
    }
}
