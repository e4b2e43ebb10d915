// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bar chart animator: data in, scene out.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Rect};
use peniko::color::palette::css;

use animar_core::{Scene, Shape, ShapeId, Style};

use crate::axis::AxisSpec;
use crate::bar_mark::BarMarkSpec;
use crate::datum::Row;
use crate::encoding::Encoding;
use crate::highlight::{AnimationSpec, HighlightSpec, resolve_selection};
use crate::legend::{LegendItem, LegendRowSpec};
use crate::palette::OrdinalColorScale;
use crate::scale::{ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec};
use crate::shaping::{
    aggregate_rows, categories, series_keys, stack_rows, stacked_total,
};
use crate::stacked_bar_mark::StackedBarMarkSpec;
use crate::z_order;

/// Outer margins around the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

/// Fixed margins; the bottom edge leaves room for rotated category labels.
pub const MARGIN: Margin = Margin {
    top: 10.0,
    right: 10.0,
    bottom: 40.0,
    left: 40.0,
};

/// Extra inset subtracted from both plot dimensions, clear of the axes.
const AXIS_OFFSET: f64 = 20.0;
/// Height of the legend strip reserved below the plot.
const LEGEND_STRIP: f64 = 40.0;
/// Tick count requested from the value axis.
const TICK_COUNT: usize = 10;

/// Vertical offset from the plot bottom to the legend row baseline.
const LEGEND_DY: f64 = 60.0;

// Stable-id bases per mark group. Category axes use `base + 100` for ticks
// and `base + 1000` for labels, stacked bars use `base + layer * 1000`, so
// the bases are spaced to keep every group's ids disjoint.
const PLACEHOLDER_ID: u64 = 1;
const CATEGORY_AXIS_ID_BASE: u64 = 10_000;
const VALUE_AXIS_ID_BASE: u64 = 20_000;
const BAR_ID_BASE: u64 = 100_000;
const REFERENCE_LINE_ID_BASE: u64 = 900_000;
const LEGEND_ID_BASE: u64 = 910_000;

/// Renders an animated bar chart comparing two categories.
///
/// `render` is a pure function of its inputs: the same data, encoding, and
/// animation spec always produce structurally equal scenes, transition
/// directives included. The caller owns the scene and hands it to a sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarChartAnimator {
    /// Total surface width, margins and legend strip included.
    pub width: f64,
    /// Total surface height, margins and legend strip included.
    pub height: f64,
}

impl BarChartAnimator {
    /// Creates an animator rendering into a `width` by `height` surface.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn plot_size(&self) -> (f64, f64) {
        let w = self.width - MARGIN.left - MARGIN.right - AXIS_OFFSET;
        let h = self.height - MARGIN.top - MARGIN.bottom - AXIS_OFFSET - LEGEND_STRIP;
        (w, h)
    }

    /// Builds the scene for one render.
    ///
    /// With a series channel in the encoding the bars stack per category;
    /// without one the rows aggregate to a single bar per category. Exactly
    /// one highlight effect applies, over the two selected categories. When
    /// the data holds fewer than two distinct categories the selection is
    /// undefined and the chart renders without a highlight.
    pub fn render(&self, data: &[Row], encoding: &Encoding, animation: &AnimationSpec) -> Scene {
        let mut scene = Scene::default();
        let (inner_w, inner_h) = self.plot_size();

        if !encoding.is_valid() {
            // Incomplete encodings get a full-surface placeholder instead of
            // a broken chart.
            scene.push(Shape::rect(
                ShapeId(PLACEHOLDER_ID),
                z_order::PLACEHOLDER,
                Rect::new(
                    0.0,
                    0.0,
                    inner_w + MARGIN.left + MARGIN.right,
                    inner_h + MARGIN.top + MARGIN.bottom,
                ),
                Style::filled(css::PINK),
            ));
            return scene;
        }

        let plot = Rect::new(
            MARGIN.left,
            MARGIN.top,
            MARGIN.left + inner_w,
            MARGIN.top + inner_h,
        );
        let cats = categories(data, encoding);
        let band = ScaleBandSpec::new(cats.len())
            .with_padding(0.2, 0.2)
            .instantiate((plot.x0, plot.x1));

        let highlight = resolve_selection(&cats, animation)
            .ok()
            .map(|(category1, category2)| HighlightSpec {
                effect: animation.effect,
                category1,
                category2,
                duration_ms: animation.duration_ms,
                line_id_base: REFERENCE_LINE_ID_BASE,
                value_axis_x: plot.x0,
            });

        if encoding.has_series() {
            let layers = stack_rows(data, encoding);
            let max = cats
                .iter()
                .filter_map(|c| stacked_total(&layers, c))
                .fold(0.0, f64::max);
            // Only the stacked variant nices its value domain.
            let y = ScaleLinearSpec::new((0.0, max))
                .with_nice(true)
                .instantiate_resolved((plot.y1, plot.y0), TICK_COUNT);

            let bars = StackedBarMarkSpec::new(BAR_ID_BASE, band, y);
            scene.extend(bars.shapes(&layers, &cats));
            push_axes(&mut scene, plot, band, y, &cats);
            if let Some(highlight) = &highlight {
                highlight.apply_stacked(&mut scene, &bars, &layers, &cats);
            }
            push_legend(&mut scene, plot, inner_w, data, encoding);
        } else {
            let rows = aggregate_rows(data, encoding);
            let max = rows.iter().map(|r| r.value).fold(0.0, f64::max);
            let y = ScaleLinearSpec::new((0.0, max)).instantiate((plot.y1, plot.y0));

            let bars = BarMarkSpec::new(BAR_ID_BASE, band, y);
            scene.extend(bars.shapes(&rows));
            push_axes(&mut scene, plot, band, y, &cats);
            if let Some(highlight) = &highlight {
                highlight.apply_aggregated(&mut scene, &bars, &rows);
            }
        }

        scene
    }
}

fn push_axes(scene: &mut Scene, plot: Rect, band: ScaleBand, y: ScaleLinear, cats: &[String]) {
    scene.extend(
        AxisSpec::bottom(CATEGORY_AXIS_ID_BASE, band, cats.to_vec())
            .with_label_angle(-45.0, -10.0)
            .shapes(plot),
    );
    scene.extend(
        AxisSpec::left(VALUE_AXIS_ID_BASE, y)
            .with_tick_count(TICK_COUNT)
            .shapes(plot),
    );
}

fn push_legend(scene: &mut Scene, plot: Rect, inner_w: f64, data: &[Row], encoding: &Encoding) {
    let keys = series_keys(data, encoding);
    let items = keys
        .iter()
        .enumerate()
        .map(|(i, key)| LegendItem::new(key.clone(), OrdinalColorScale::by_index(i)))
        .collect();
    let origin = Point::new(plot.x0, plot.y1 + LEGEND_DY);
    scene.extend(LegendRowSpec::new(LEGEND_ID_BASE, items).shapes(origin, inner_w));
}
