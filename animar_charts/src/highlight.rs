// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The highlight animation state machine.
//!
//! Exactly one of two effects runs per render, over exactly two selected
//! categories:
//! - **Superposition** outlines the selected bars in place (yellow stroke,
//!   width 5) and dims everything else to light gray.
//! - **Difference** dims everything else and draws two dashed red reference
//!   lines, one per selected category, each growing from the right edge of
//!   its bar's top toward the value axis.
//!
//! Both effects emit a single linear transition of `duration_ms` per shape,
//! with no stagger and no delay. The directives are recorded on the scene
//! and interpolated by the rendering sink; this module never blocks or
//! schedules.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Color;

use animar_core::{Scene, Shape, ShapeId, Style, Transition};

use crate::bar_mark::BarMarkSpec;
use crate::palette::{OrdinalColorScale, dim_color, outline_color, reference_color};
use crate::scale::{ScaleBand, ScaleLinear};
use crate::shaping::{AggregatedRow, StackLayer, stacked_total};
use crate::stacked_bar_mark::StackedBarMarkSpec;
use crate::z_order;

/// Stroke width applied to selected bars by the superposition effect.
const OUTLINE_WIDTH: f64 = 5.0;
/// Reference line stroke width.
const REFERENCE_WIDTH: f64 = 2.0;
/// Reference line dash pattern (on, off).
const REFERENCE_DASH: (f64, f64) = (5.0, 5.0);

/// The two highlight effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HighlightEffect {
    /// Outline the selected bars in place; dim the rest.
    Superposition,
    /// Dim the rest and draw comparison reference lines.
    #[default]
    Difference,
}

impl HighlightEffect {
    /// Parses an effect name.
    ///
    /// Unknown names resolve to [`Self::Difference`]. This is a deliberate
    /// fallback arm, not an error: the behavior this component replaces
    /// treated every non-superposition value as the difference effect.
    pub fn from_name(name: &str) -> Self {
        match name {
            "superposition" => Self::Superposition,
            _ => Self::Difference,
        }
    }
}

/// A declarative animation request.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSpec {
    /// Which effect to run.
    pub effect: HighlightEffect,
    /// First selected category; defaults to the first category in the data.
    pub category1: Option<String>,
    /// Second selected category; defaults to the second category in the data.
    pub category2: Option<String>,
    /// Transition duration in milliseconds.
    pub duration_ms: f64,
}

impl AnimationSpec {
    /// Creates an animation spec with default (first two) categories.
    pub fn new(effect: HighlightEffect, duration_ms: f64) -> Self {
        Self {
            effect,
            category1: None,
            category2: None,
            duration_ms,
        }
    }

    /// Selects the two categories to compare.
    pub fn with_categories(
        mut self,
        category1: impl Into<String>,
        category2: impl Into<String>,
    ) -> Self {
        self.category1 = Some(category1.into());
        self.category2 = Some(category2.into());
        self
    }
}

/// Errors from resolving the selected categories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// The data holds fewer than two distinct categories, so a pairwise
    /// comparison is undefined.
    InsufficientCategories {
        /// How many distinct categories the data actually holds.
        available: usize,
    },
}

/// Resolves the two selected categories against the data's category list.
///
/// Missing `category1`/`category2` default to the first two distinct
/// categories in first-seen order. With fewer than two distinct categories
/// the comparison is undefined and an explicit error is returned; callers
/// are expected to degrade (render without a highlight) rather than fail.
pub fn resolve_selection(
    categories: &[String],
    spec: &AnimationSpec,
) -> Result<(String, String), SelectionError> {
    let fallback = |explicit: &Option<String>, index: usize| {
        explicit
            .clone()
            .or_else(|| categories.get(index).cloned())
            .ok_or(SelectionError::InsufficientCategories {
                available: categories.len(),
            })
    };
    let c1 = fallback(&spec.category1, 0)?;
    let c2 = fallback(&spec.category2, 1)?;
    Ok((c1, c2))
}

/// A resolved highlight, ready to apply to generated bar shapes.
#[derive(Clone, Debug)]
pub struct HighlightSpec {
    /// Which effect to run.
    pub effect: HighlightEffect,
    /// First selected category.
    pub category1: String,
    /// Second selected category.
    pub category2: String,
    /// Transition duration in milliseconds.
    pub duration_ms: f64,
    /// Stable-id base for reference line shapes.
    pub line_id_base: u64,
    /// X coordinate of the value axis; reference lines grow left to here.
    pub value_axis_x: f64,
}

impl HighlightSpec {
    fn matches(&self, category: &str) -> bool {
        category == self.category1 || category == self.category2
    }

    /// Applies the highlight to aggregated bars.
    pub fn apply_aggregated(
        &self,
        scene: &mut Scene,
        bars: &BarMarkSpec,
        rows: &[AggregatedRow],
    ) {
        match self.effect {
            HighlightEffect::Superposition => {
                for (i, row) in rows.iter().enumerate() {
                    let matched = self.matches(&row.category);
                    let to_fill = if matched { bars.fill } else { dim_color() };
                    scene.animate(
                        Transition::new(bars.shape_id(i), self.duration_ms)
                            .stroke(Color::TRANSPARENT, outline_color())
                            .stroke_width(0.0, if matched { OUTLINE_WIDTH } else { 0.0 })
                            .fill(bars.fill, to_fill),
                    );
                }
            }
            HighlightEffect::Difference => {
                for (i, row) in rows.iter().enumerate() {
                    // The selected bars' fill is re-asserted explicitly here;
                    // the stacked path leaves selected fills untouched.
                    let to_fill = if self.matches(&row.category) {
                        bars.fill
                    } else {
                        dim_color()
                    };
                    scene.animate(
                        Transition::new(bars.shape_id(i), self.duration_ms)
                            .fill(bars.fill, to_fill),
                    );
                }
                let value_of = |category: &str| {
                    rows.iter()
                        .find(|r| r.category == category)
                        .map(|r| r.value)
                };
                self.reference_lines(scene, bars.band, value_of, &bars.y_scale, rows_index(rows));
            }
        }
    }

    /// Applies the highlight to stacked bar segments.
    pub fn apply_stacked(
        &self,
        scene: &mut Scene,
        bars: &StackedBarMarkSpec,
        layers: &[StackLayer],
        categories: &[String],
    ) {
        match self.effect {
            HighlightEffect::Superposition => {
                for (li, layer) in layers.iter().enumerate() {
                    let fill = OrdinalColorScale::by_index(li);
                    for segment in &layer.segments {
                        let Some(ci) = position(categories, &segment.category) else {
                            continue;
                        };
                        let matched = self.matches(&segment.category);
                        let mut t = Transition::new(bars.shape_id(li, ci), self.duration_ms)
                            .stroke(Color::TRANSPARENT, outline_color())
                            .stroke_width(0.0, if matched { OUTLINE_WIDTH } else { 0.0 });
                        // Matched segments keep their series fill untouched;
                        // only the rest are dimmed.
                        if !matched {
                            t = t.fill(fill, dim_color());
                        }
                        scene.animate(t);
                    }
                }
            }
            HighlightEffect::Difference => {
                for (li, layer) in layers.iter().enumerate() {
                    let fill = OrdinalColorScale::by_index(li);
                    for segment in &layer.segments {
                        let Some(ci) = position(categories, &segment.category) else {
                            continue;
                        };
                        if !self.matches(&segment.category) {
                            scene.animate(
                                Transition::new(bars.shape_id(li, ci), self.duration_ms)
                                    .fill(fill, dim_color()),
                            );
                        }
                    }
                }
                self.reference_lines(
                    scene,
                    bars.band,
                    |category| stacked_total(layers, category),
                    &bars.y_scale,
                    |c| position(categories, c),
                );
            }
        }
    }

    /// Emits the two dashed reference lines for the difference effect.
    ///
    /// Each line starts collapsed at the right edge of its category's band,
    /// at the category's value height, and grows left to the value axis. A
    /// selected category with no value (absent from every layer) gets no
    /// line; the chart stays degenerate-but-valid.
    fn reference_lines(
        &self,
        scene: &mut Scene,
        band: ScaleBand,
        value_of: impl Fn(&str) -> Option<f64>,
        y_scale: &ScaleLinear,
        index_of: impl Fn(&str) -> Option<usize>,
    ) {
        let selected = [self.category1.as_str(), self.category2.as_str()];
        for (k, category) in selected.into_iter().enumerate() {
            let (Some(ci), Some(value)) = (index_of(category), value_of(category)) else {
                continue;
            };
            let y = y_scale.map(value);
            let x_right = band.x(ci) + band.band_width();
            let anchor = Point::new(x_right, y);
            let id = ShapeId(self.line_id_base + k as u64);
            scene.push(Shape::line(
                id,
                z_order::REFERENCE_LINES,
                anchor,
                anchor,
                Style::stroked(reference_color(), REFERENCE_WIDTH)
                    .with_dash(REFERENCE_DASH.0, REFERENCE_DASH.1),
            ));
            scene.animate(Transition::new(id, self.duration_ms).endpoints(
                (anchor, anchor),
                (anchor, Point::new(self.value_axis_x, y)),
            ));
        }
    }
}

fn position(categories: &[String], category: &str) -> Option<usize> {
    categories.iter().position(|c| c == category)
}

fn rows_index(rows: &[AggregatedRow]) -> impl Fn(&str) -> Option<usize> + '_ {
    move |category| rows.iter().position(|r| r.category == category)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn cats() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    #[test]
    fn unknown_effect_names_fall_back_to_difference() {
        assert_eq!(
            HighlightEffect::from_name("superposition"),
            HighlightEffect::Superposition
        );
        assert_eq!(
            HighlightEffect::from_name("difference"),
            HighlightEffect::Difference
        );
        assert_eq!(
            HighlightEffect::from_name("wobble"),
            HighlightEffect::Difference
        );
    }

    #[test]
    fn selection_defaults_to_first_two_categories() {
        let spec = AnimationSpec::new(HighlightEffect::Superposition, 500.0);
        let (c1, c2) = resolve_selection(&cats(), &spec).unwrap();
        assert_eq!(c1, "A");
        assert_eq!(c2, "B");
    }

    #[test]
    fn explicit_selection_wins() {
        let spec =
            AnimationSpec::new(HighlightEffect::Difference, 500.0).with_categories("C", "A");
        let (c1, c2) = resolve_selection(&cats(), &spec).unwrap();
        assert_eq!(c1, "C");
        assert_eq!(c2, "A");
    }

    #[test]
    fn one_category_is_insufficient() {
        let spec = AnimationSpec::new(HighlightEffect::Difference, 500.0);
        let err = resolve_selection(&["only".to_string()], &spec).unwrap_err();
        assert_eq!(err, SelectionError::InsufficientCategories { available: 1 });
    }

    #[test]
    fn explicit_categories_do_not_need_data_to_resolve() {
        // Resolution only falls back to the data when a slot is missing.
        let spec = AnimationSpec::new(HighlightEffect::Difference, 500.0)
            .with_categories("X", "Y");
        let (c1, c2) = resolve_selection(&[], &spec).unwrap();
        assert_eq!((c1.as_str(), c2.as_str()), ("X", "Y"));
    }
}
