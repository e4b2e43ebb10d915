// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated shapes.
//!
//! `animar_core` shapes carry an explicit `z_index` for render ordering. The
//! chart layer sets z-indexes consistently so callers don't have to hand-tune
//! paint order. Sinks sort by `(z_index, ShapeId)` for a deterministic
//! tie-break.

/// Placeholder fills (invalid-encoding rectangle).
pub const PLACEHOLDER: i32 = -100;

/// Bar fills (aggregated bars and stacked segments).
pub const BARS: i32 = 0;
/// Highlight reference lines drawn above bars.
pub const REFERENCE_LINES: i32 = 10;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
