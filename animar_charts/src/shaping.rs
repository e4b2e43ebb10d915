// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data shaping: aggregation and stacking.
//!
//! Two mutually exclusive algorithms, selected by the presence of the series
//! channel:
//! - **Aggregation** groups rows by category and sums the y field, keeping
//!   categories in first-seen order.
//! - **Stacking** accumulates per-series values into cumulative `[y0, y1)`
//!   spans per category, with layers in first-seen series order so the top
//!   layer's upper bound is the per-category total.
//!
//! Both are pure functions of `(data, encoding)`; input rows are never
//! mutated. A `(category, series)` pair absent from the input produces no
//! stack segment, and sparse layers are expected downstream.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::datum::Row;
use crate::encoding::Encoding;

/// One aggregated bar: a category and its summed value.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedRow {
    /// Category key.
    pub category: String,
    /// Sum of the y field across rows in this category.
    pub value: f64,
}

/// One stacked segment: the cumulative span for a `(category, series)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct StackSegment {
    /// Category key.
    pub category: String,
    /// Lower cumulative bound.
    pub y0: f64,
    /// Upper cumulative bound.
    pub y1: f64,
}

/// One stack layer: a series key plus its per-category segments.
#[derive(Clone, Debug, PartialEq)]
pub struct StackLayer {
    /// Series key.
    pub series: String,
    /// Segments in category first-seen order. Sparse: categories without a
    /// row for this series have no segment.
    pub segments: Vec<StackSegment>,
}

impl StackLayer {
    /// Returns the segment for a category, if this layer has one.
    pub fn segment(&self, category: &str) -> Option<&StackSegment> {
        self.segments.iter().find(|s| s.category == category)
    }
}

/// Returns the distinct x-channel keys in first-seen order.
pub fn categories(data: &[Row], encoding: &Encoding) -> Vec<String> {
    distinct_keys(data, &encoding.x.field)
}

/// Returns the distinct series keys in first-seen order.
///
/// Returns an empty list when the encoding has no series channel.
pub fn series_keys(data: &[Row], encoding: &Encoding) -> Vec<String> {
    match &encoding.color {
        Some(color) => distinct_keys(data, &color.field),
        None => Vec::new(),
    }
}

fn distinct_keys(data: &[Row], field: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for row in data {
        let Some(key) = row.key(field) else {
            continue;
        };
        if seen.insert(key.clone()) {
            out.push(key);
        }
    }
    out
}

/// Groups rows by the x field and sums the y field per group.
///
/// Rows whose y field is missing or non-numeric contribute nothing to the
/// sum; a category whose rows are all non-numeric still appears, with a sum
/// of `0.0`.
pub fn aggregate_rows(data: &[Row], encoding: &Encoding) -> Vec<AggregatedRow> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<AggregatedRow> = Vec::new();
    for row in data {
        let Some(category) = row.key(&encoding.x.field) else {
            continue;
        };
        let value = row.num(&encoding.y.field).unwrap_or(0.0);
        match index.get(&category) {
            Some(&i) => out[i].value += value,
            None => {
                index.insert(category.clone(), out.len());
                out.push(AggregatedRow { category, value });
            }
        }
    }
    out
}

/// Stacks rows into cumulative per-category spans across series layers.
///
/// Layers are ordered by first-seen series key, segments within a layer by
/// first-seen category key, so stacking order is deterministic. Multiple
/// rows for the same `(category, series)` pair are summed before stacking.
/// Non-numeric y values count as `0.0` so later layers are not poisoned by
/// `NaN` bounds.
pub fn stack_rows(data: &[Row], encoding: &Encoding) -> Vec<StackLayer> {
    let Some(color) = &encoding.color else {
        return Vec::new();
    };

    let cats = categories(data, encoding);
    let series = distinct_keys(data, &color.field);
    let cat_index: HashMap<&str, usize> = cats
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();
    let series_index: HashMap<&str, usize> = series
        .iter()
        .enumerate()
        .map(|(i, s)| (s.as_str(), i))
        .collect();

    // values[series][category]: None means the pair is absent from the input.
    let mut values: Vec<Vec<Option<f64>>> = alloc::vec![alloc::vec![None; cats.len()]; series.len()];
    for row in data {
        let (Some(cat), Some(ser)) = (row.key(&encoding.x.field), row.key(&color.field)) else {
            continue;
        };
        let (Some(&ci), Some(&si)) = (cat_index.get(cat.as_str()), series_index.get(ser.as_str()))
        else {
            continue;
        };
        let value = row.num(&encoding.y.field).unwrap_or(0.0);
        let slot = &mut values[si][ci];
        *slot = Some(slot.unwrap_or(0.0) + value);
    }
    // `series_index` borrows `series`, which is moved into the layers below.
    drop(series_index);

    let mut totals = alloc::vec![0.0_f64; cats.len()];
    series
        .into_iter()
        .enumerate()
        .map(|(si, series_key)| {
            let segments = cats
                .iter()
                .enumerate()
                .filter_map(|(ci, category)| {
                    let value = values[si][ci]?;
                    let y0 = totals[ci];
                    let y1 = y0 + value;
                    totals[ci] = y1;
                    Some(StackSegment {
                        category: category.clone(),
                        y0,
                        y1,
                    })
                })
                .collect();
            StackLayer {
                series: series_key,
                segments,
            }
        })
        .collect()
}

/// Returns the per-category stacked total, read from the topmost layer that
/// carries the category.
///
/// Returns `None` for a category no layer carries.
pub fn stacked_total(layers: &[StackLayer], category: &str) -> Option<f64> {
    layers
        .iter()
        .rev()
        .find_map(|layer| layer.segment(category).map(|s| s.y1))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn plain_rows() -> Vec<Row> {
        vec![
            Row::new().with("cat", "A").with("val", 10.0),
            Row::new().with("cat", "B").with("val", 20.0),
            Row::new().with("cat", "C").with("val", 5.0),
            Row::new().with("cat", "A").with("val", 2.0),
        ]
    }

    fn series_rows() -> Vec<Row> {
        vec![
            Row::new().with("cat", "A").with("series", "s1").with("val", 10.0),
            Row::new().with("cat", "B").with("series", "s1").with("val", 20.0),
            Row::new().with("cat", "A").with("series", "s2").with("val", 5.0),
            Row::new().with("cat", "B").with("series", "s2").with("val", 1.0),
        ]
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let enc = Encoding::new("cat", "val");
        assert_eq!(categories(&plain_rows(), &enc), vec!["A", "B", "C"]);
    }

    #[test]
    fn aggregation_sums_per_category() {
        let enc = Encoding::new("cat", "val");
        let rows = aggregate_rows(&plain_rows(), &enc);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], AggregatedRow { category: "A".into(), value: 12.0 });
        assert_eq!(rows[1].value, 20.0);
        assert_eq!(rows[2].value, 5.0);
    }

    #[test]
    fn aggregation_skips_non_numeric_values() {
        let enc = Encoding::new("cat", "val");
        let rows = vec![
            Row::new().with("cat", "A").with("val", "oops"),
            Row::new().with("cat", "A").with("val", 3.0),
        ];
        let out = aggregate_rows(&rows, &enc);
        assert_eq!(out, vec![AggregatedRow { category: "A".into(), value: 3.0 }]);
    }

    #[test]
    fn stacking_accumulates_per_category() {
        let enc = Encoding::new("cat", "val").with_color("series");
        let layers = stack_rows(&series_rows(), &enc);
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].series, "s1");
        assert_eq!(layers[0].segment("A").unwrap().y0, 0.0);
        assert_eq!(layers[0].segment("A").unwrap().y1, 10.0);
        assert_eq!(layers[1].segment("A").unwrap().y0, 10.0);
        assert_eq!(layers[1].segment("A").unwrap().y1, 15.0);
        // Top layer's upper bound is the per-category total.
        assert_eq!(stacked_total(&layers, "B"), Some(21.0));
    }

    #[test]
    fn layers_carry_series_keys_in_first_seen_order() {
        let enc = Encoding::new("cat", "val").with_color("series");
        let mut rows = series_rows();
        rows.push(Row::new().with("cat", "A").with("series", "s1").with("val", 4.0));
        let layers = stack_rows(&rows, &enc);
        assert_eq!(layers[0].series, "s1");
        assert_eq!(layers[1].series, "s2");
        // Duplicate pairs are summed before stacking.
        assert_eq!(layers[0].segment("A").unwrap().y1, 14.0);
        assert_eq!(layers[1].segment("A").unwrap().y0, 14.0);
    }

    #[test]
    fn sparse_pairs_produce_no_segment() {
        let enc = Encoding::new("cat", "val").with_color("series");
        let mut rows = series_rows();
        rows.push(Row::new().with("cat", "C").with("series", "s1").with("val", 7.0));
        let layers = stack_rows(&rows, &enc);
        assert!(layers[0].segment("C").is_some());
        assert!(layers[1].segment("C").is_none());
        // The total falls back to the highest layer that has the category.
        assert_eq!(stacked_total(&layers, "C"), Some(7.0));
    }

    #[test]
    fn no_series_channel_means_no_layers() {
        let enc = Encoding::new("cat", "val");
        assert!(stack_rows(&plain_rows(), &enc).is_empty());
        assert!(series_keys(&plain_rows(), &enc).is_empty());
    }
}
