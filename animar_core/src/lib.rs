// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable scene model for animated charts.
//!
//! This crate is the lowering target for the `animar` chart layer:
//! - **Shapes** are plain data (geometry + style) with stable identity and an
//!   explicit z-index for render ordering.
//! - **Transitions** are directives: a target shape, a start state, an end
//!   state, and a duration in milliseconds.
//!
//! Nothing here draws or schedules. A rendering sink (SVG, canvas, a native
//! surface) walks the shape list in z-order and performs interpolation for the
//! transition directives on its own clock. Building the scene is synchronous
//! and returns immediately; issuing a transition never blocks.
//!
//! Text shaping and layout are out of scope; text shapes store unshaped
//! strings.

#![no_std]

extern crate alloc;

mod scene;
mod shape;
mod transition;

pub use scene::Scene;
pub use shape::{Geometry, Shape, ShapeId, Style, TextAnchor, TextBaseline};
pub use transition::{Interp, Transition};
