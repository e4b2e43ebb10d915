// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated category-comparison bar charts for `animar_core`.
//!
//! This crate is a small, reusable layer above `animar_core`:
//! - **Encodings** declare which row fields map to which visual channel.
//! - **Shaping** turns rows into aggregated or stacked series data.
//! - **Scales** map data values into screen coordinates.
//! - **Guides** (axes, legend) and **marks** (bars, stacked bars) generate
//!   `animar_core::Shape`s.
//! - The **highlight** module is the animation state machine: it selects two
//!   categories and emits one of two mutually exclusive transition effects.
//!
//! [`BarChartAnimator`] composes all of the above into a single render call
//! that returns a caller-owned [`animar_core::Scene`].

#![no_std]

extern crate alloc;

mod axis;
mod bar_mark;
mod chart;
mod datum;
mod encoding;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod highlight;
mod legend;
mod palette;
mod scale;
mod shaping;
mod stacked_bar_mark;
mod z_order;

pub use axis::{AxisSpec, AxisStyle};
pub use bar_mark::BarMarkSpec;
pub use chart::{BarChartAnimator, MARGIN, Margin};
pub use datum::{Row, Value};
pub use encoding::{ChannelDef, Encoding};
pub use highlight::{
    AnimationSpec, HighlightEffect, HighlightSpec, SelectionError, resolve_selection,
};
pub use legend::{LegendItem, LegendRowSpec};
pub use palette::{CATEGORY10, OrdinalColorScale, dim_color, outline_color, reference_color};
pub use scale::{ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec, nice_ticks};
pub use shaping::{
    AggregatedRow, StackLayer, StackSegment, aggregate_rows, categories, series_keys, stack_rows,
    stacked_total,
};
pub use stacked_bar_mark::StackedBarMarkSpec;
pub use z_order::*;
