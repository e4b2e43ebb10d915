// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `animar_charts_demo`.
//!
//! Transition directives become SMIL `<animate>` children of their target
//! element, so the written SVG plays the highlight effect when opened in a
//! browser.

use peniko::Brush;

use animar_core::{Geometry, Interp, Scene, Shape, TextAnchor, TextBaseline};

pub(crate) fn scene_to_svg(scene: &Scene, width: f64, height: f64) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}" preserveAspectRatio="xMinYMin meet">"#
    ));
    out.push('\n');

    for shape in scene.shapes_ordered() {
        write_shape(&mut out, scene, shape);
    }

    out.push_str("</svg>\n");
    out
}

fn write_shape(out: &mut String, scene: &Scene, shape: &Shape) {
    match &shape.geometry {
        Geometry::Rect {
            rect,
            corner_radius,
        } => {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
            ));
            if *corner_radius > 0.0 {
                out.push_str(&format!(r#" rx="{corner_radius}""#));
            }
            write_style_attrs(out, scene, shape);
            close_with_animations(out, scene, shape, None);
        }
        Geometry::Line { p0, p1 } => {
            out.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                p0.x, p0.y, p1.x, p1.y
            ));
            write_style_attrs(out, scene, shape);
            close_with_animations(out, scene, shape, None);
        }
        Geometry::Text {
            pos,
            text,
            font_size,
            anchor,
            baseline,
            angle,
        } => {
            let baseline = match baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
            };
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                pos.x, pos.y, font_size, baseline
            ));
            if *angle != 0.0 {
                out.push_str(&format!(
                    r#" transform="rotate({} {} {})""#,
                    angle, pos.x, pos.y
                ));
            }
            out.push_str(match anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &shape.style.fill);
            close_with_animations(out, scene, shape, Some(text));
        }
    }
}

/// Closes the current element, expanding to open/close tags when transition
/// directives (or text content) need children.
fn close_with_animations(out: &mut String, scene: &Scene, shape: &Shape, text: Option<&str>) {
    let mut animations = String::new();
    for transition in scene.transitions_for(shape.id) {
        for interp in &transition.interps {
            write_interp(&mut animations, interp, transition.duration_ms);
        }
    }

    if animations.is_empty() && text.is_none() {
        out.push_str("/>\n");
        return;
    }
    out.push('>');
    if let Some(text) = text {
        out.push_str(&escape_xml(text));
    }
    if !animations.is_empty() {
        out.push('\n');
        out.push_str(&animations);
    }
    out.push_str(match text {
        Some(_) => "</text>\n",
        None => match shape.geometry {
            Geometry::Rect { .. } => "</rect>\n",
            _ => "</line>\n",
        },
    });
}

fn write_interp(out: &mut String, interp: &Interp, duration_ms: f64) {
    match interp {
        Interp::Fill { from, to } => write_animate(out, "fill", &paint(from), &paint(to), duration_ms),
        Interp::Stroke { from, to } => {
            write_animate(out, "stroke", &paint(from), &paint(to), duration_ms);
        }
        Interp::StrokeWidth { from, to } => {
            write_animate(
                out,
                "stroke-width",
                &from.to_string(),
                &to.to_string(),
                duration_ms,
            );
        }
        Interp::Endpoints { from, to } => {
            let pairs = [
                ("x1", from.0.x, to.0.x),
                ("y1", from.0.y, to.0.y),
                ("x2", from.1.x, to.1.x),
                ("y2", from.1.y, to.1.y),
            ];
            for (name, from, to) in pairs {
                if from != to {
                    write_animate(out, name, &from.to_string(), &to.to_string(), duration_ms);
                }
            }
        }
    }
}

fn write_animate(out: &mut String, name: &str, from: &str, to: &str, duration_ms: f64) {
    out.push_str(&format!(
        r#"<animate attributeName="{name}" from="{from}" to="{to}" dur="{duration_ms}ms" fill="freeze"/>"#
    ));
    out.push('\n');
}

fn write_style_attrs(out: &mut String, scene: &Scene, shape: &Shape) {
    write_paint_attr(out, "fill", &shape.style.fill);
    // Animated strokes start invisible but still need the attributes declared
    // so the SMIL timeline has something to drive.
    let animates_stroke = scene.transitions_for(shape.id).any(|t| {
        t.interps
            .iter()
            .any(|i| matches!(i, Interp::Stroke { .. } | Interp::StrokeWidth { .. }))
    });
    if shape.style.stroke_width > 0.0 || animates_stroke {
        write_paint_attr(out, "stroke", &shape.style.stroke);
        out.push_str(&format!(r#" stroke-width="{}""#, shape.style.stroke_width));
    }
    if let Some((on, off)) = shape.style.dash {
        out.push_str(&format!(r#" stroke-dasharray="{on},{off}""#));
    }
}

fn paint(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                "none".to_string()
            } else {
                format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
            }
        }
        _ => "none".to_string(),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            out.push_str(&format!(r#" {name}="{value}""#));
            if rgba.a != 255 {
                out.push_str(&format!(
                    r#" {name}-opacity="{}""#,
                    f64::from(rgba.a) / 255.0
                ));
            }
        }
        _ => out.push_str(&format!(r#" {name}="none""#)),
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use animar_core::{ShapeId, Style, Transition};
    use kurbo::{Point, Rect};
    use peniko::Color;

    use super::*;

    #[test]
    fn transitions_become_smil_animate_children() {
        let mut scene = Scene::new();
        let id = ShapeId(1);
        scene.push(Shape::rect(
            id,
            0,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Style::filled(Color::BLACK),
        ));
        scene.animate(Transition::new(id, 500.0).stroke_width(0.0, 5.0));

        let svg = scene_to_svg(&scene, 20.0, 20.0);
        assert!(svg.contains(r#"<animate attributeName="stroke-width" from="0" to="5" dur="500ms" fill="freeze"/>"#));
        assert!(svg.contains("</rect>"));
    }

    #[test]
    fn endpoint_interps_only_animate_changed_attributes() {
        let mut scene = Scene::new();
        let id = ShapeId(2);
        let p = Point::new(100.0, 30.0);
        scene.push(Shape::line(id, 0, p, p, Style::stroked(Color::BLACK, 2.0)));
        scene.animate(
            Transition::new(id, 500.0).endpoints((p, p), (p, Point::new(40.0, 30.0))),
        );

        let svg = scene_to_svg(&scene, 200.0, 60.0);
        assert!(svg.contains(r#"attributeName="x2""#));
        assert!(!svg.contains(r#"attributeName="y2""#));
        assert!(!svg.contains(r#"attributeName="x1""#));
    }
}
