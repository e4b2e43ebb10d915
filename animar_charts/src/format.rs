// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using the tick step to pick a decimal count.
///
/// Ticks along one axis share a step, so labels format consistently:
/// integral steps print without a fractional part, fractional steps print
/// just enough decimals to distinguish adjacent ticks.
pub(crate) fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let decimals = step_decimals(step);
    if decimals == 0 {
        format!("{}", v.round())
    } else {
        format!("{v:.decimals$}")
    }
}

fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    let d = (-step.log10()).ceil();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to a small non-negative range"
    )]
    {
        d.clamp(0.0, 6.0) as usize
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integral_steps_format_without_decimals() {
        assert_eq!(format_tick_with_step(20.0, 5.0), "20");
        assert_eq!(format_tick_with_step(0.0, 1.0), "0");
    }

    #[test]
    fn fractional_steps_format_with_step_decimals() {
        assert_eq!(format_tick_with_step(0.5, 0.25), "0.5");
        assert_eq!(format_tick_with_step(0.1, 0.1), "0.1");
        assert_eq!(format_tick_with_step(0.05, 0.05), "0.05");
    }
}
