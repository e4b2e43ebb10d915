// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color channel: the fixed categorical palette and highlight colors.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

/// The fixed ten-color categorical palette (d3 `schemeCategory10`), indexed
/// by series layer. Repeats if a chart carries more than ten series.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// Dim color applied to non-selected bars during a highlight.
pub const fn dim_color() -> Color {
    css::LIGHT_GRAY
}

/// Outline color applied to selected bars by the superposition effect.
pub const fn outline_color() -> Color {
    css::YELLOW
}

/// Stroke color of the difference effect's reference lines.
pub const fn reference_color() -> Color {
    css::RED
}

/// An ordinal scale from keys to palette colors, in key order.
///
/// The legend re-instantiates this scale from the same key list the bars
/// used, so swatch colors match bar colors by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrdinalColorScale {
    keys: Vec<String>,
}

impl OrdinalColorScale {
    /// Creates an ordinal scale over the given keys, in order.
    pub fn from_keys(keys: Vec<String>) -> Self {
        Self { keys }
    }

    /// Returns the palette color at an index (wrapping past ten).
    pub fn by_index(index: usize) -> Color {
        CATEGORY10[index % CATEGORY10.len()]
    }

    /// Returns the color for a key.
    ///
    /// Unknown keys map to the first palette entry, matching the constant
    /// single color used when no series channel is present.
    pub fn color(&self, key: &str) -> Color {
        match self.keys.iter().position(|k| k == key) {
            Some(i) => Self::by_index(i),
            None => CATEGORY10[0],
        }
    }

    /// Returns the keys in scale order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn colors_assigned_in_key_order() {
        let scale =
            OrdinalColorScale::from_keys(vec!["s1".to_string(), "s2".to_string()]);
        assert_eq!(scale.color("s1"), CATEGORY10[0]);
        assert_eq!(scale.color("s2"), CATEGORY10[1]);
        assert_eq!(scale.color("unknown"), CATEGORY10[0]);
    }

    #[test]
    fn palette_wraps_past_ten() {
        assert_eq!(OrdinalColorScale::by_index(10), CATEGORY10[0]);
        assert_eq!(OrdinalColorScale::by_index(13), CATEGORY10[3]);
    }
}
