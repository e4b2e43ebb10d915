// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field-to-channel encodings.
//!
//! An encoding declares which row fields feed which visual channel, in the
//! Vega-Lite sense: `x` is the categorical channel, `y` the numeric
//! aggregation target, and `color` the optional series discriminator.

extern crate alloc;

use alloc::string::String;

/// A single channel descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelDef {
    /// The row field feeding this channel.
    pub field: String,
}

impl ChannelDef {
    /// Creates a channel descriptor for a field.
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    fn is_empty(&self) -> bool {
        self.field.is_empty()
    }
}

/// A declarative chart encoding.
///
/// If `color` is present the data is treated as multi-series and stacked;
/// otherwise rows are aggregated per category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Encoding {
    /// Categorical channel.
    pub x: ChannelDef,
    /// Numeric channel (aggregation target).
    pub y: ChannelDef,
    /// Optional series discriminator.
    pub color: Option<ChannelDef>,
}

impl Encoding {
    /// Creates an encoding from x and y field names.
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: ChannelDef::field(x),
            y: ChannelDef::field(y),
            color: None,
        }
    }

    /// Adds a series discriminator channel.
    pub fn with_color(mut self, field: impl Into<String>) -> Self {
        self.color = Some(ChannelDef::field(field));
        self
    }

    /// Returns `true` if a series channel is present.
    pub fn has_series(&self) -> bool {
        self.color.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Returns `true` if both required channels name a field.
    ///
    /// This is the render-or-placeholder gate: an invalid encoding does not
    /// raise an error, it degrades to a placeholder rectangle upstream.
    pub fn is_valid(&self) -> bool {
        !self.x.is_empty() && !self.y.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn validity_requires_both_channels() {
        assert!(Encoding::new("cat", "val").is_valid());
        assert!(!Encoding::default().is_valid());
        assert!(!Encoding::new("", "val").is_valid());
        assert!(!Encoding::new("cat", "").is_valid());
    }

    #[test]
    fn empty_color_field_is_not_a_series() {
        let enc = Encoding::new("cat", "val").with_color("");
        assert!(!enc.has_series());
        assert!(Encoding::new("cat", "val").with_color("series").has_series());
    }
}
