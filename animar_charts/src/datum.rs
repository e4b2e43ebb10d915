// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input rows: opaque field-name to scalar mappings.
//!
//! Rows are the renderer's only view of the data and are never mutated.
//! Field order is preserved, and the order in which category/series values
//! first appear across rows defines every downstream ordering (band layout,
//! stacking order, default selection).

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A scalar field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A string value.
    Str(String),
    /// A numeric value.
    Num(f64),
}

impl Value {
    /// Returns the numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    /// Returns the value as a category/series key.
    ///
    /// Numbers use their shortest display form (`10`, not `10.0`), matching
    /// string coercion of keys in loosely-typed chart specs.
    pub fn key(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Num(n) => {
                let mut out = String::new();
                // `Display` for f64 already prints integral values without a
                // fractional part.
                core::fmt::write(&mut out, format_args!("{n}")).ok();
                out
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Num(value as f64)
    }
}

/// A single input row: an ordered list of `(field, value)` pairs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, builder-style.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Returns a field value as a category/series key.
    pub fn key(&self, field: &str) -> Option<String> {
        self.get(field).map(Value::key)
    }

    /// Returns a field value as a number, if present and numeric.
    pub fn num(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn numeric_keys_use_shortest_form() {
        assert_eq!(Value::Num(10.0).key(), "10");
        assert_eq!(Value::Num(2.5).key(), "2.5");
    }

    #[test]
    fn row_lookup_by_field_name() {
        let row = Row::new().with("cat", "A").with("val", 10.0);
        assert_eq!(row.key("cat").as_deref(), Some("A"));
        assert_eq!(row.num("val"), Some(10.0));
        assert_eq!(row.num("cat"), None);
        assert!(row.get("missing").is_none());
    }
}
