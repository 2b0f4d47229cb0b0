// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SVG output for a [`Scene`].
//!
//! The document scales to its container (`width="100%"`) and keeps the
//! scene's own units in the `viewBox`. Bonds become `<line>` elements, each
//! atom a `<g>` holding its `<circle>` and `<text>`, in scene order.

use super::{Primitive, RenderStyle, Scene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize `scene` with the paint from `style`.
pub fn to_svg(scene: &Scene, style: &RenderStyle) -> String {
    let mut svg = String::with_capacity(256 + scene.len() * 96);
    svg.push_str(&format!(
        "<svg xmlns=\"{}\" width=\"100%\" height=\"100%\" viewBox=\"0 0 {} {}\" style=\"display:block\">",
        SVG_NS,
        num(scene.width),
        num(scene.height)
    ));

    let mut primitives = scene.primitives().iter().peekable();
    while let Some(primitive) = primitives.next() {
        match primitive {
            Primitive::Line(line) => svg.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                num(line.x1),
                num(line.y1),
                num(line.x2),
                num(line.y2),
                escape_xml(&style.bond_stroke),
                num(style.bond_stroke_width)
            )),
            Primitive::Circle(circle) => {
                svg.push_str("<g>");
                svg.push_str(&format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    num(circle.cx),
                    num(circle.cy),
                    num(circle.r),
                    escape_xml(&style.atom_fill),
                    escape_xml(&style.atom_stroke),
                    num(style.atom_stroke_width)
                ));
                // The renderer always follows a circle with its label.
                if let Some(Primitive::Label(label)) = primitives.peek() {
                    push_label(&mut svg, label, style);
                    primitives.next();
                }
                svg.push_str("</g>");
            }
            Primitive::Label(label) => push_label(&mut svg, label, style),
        }
    }

    svg.push_str("</svg>");
    svg
}

fn push_label(svg: &mut String, label: &super::Label, style: &RenderStyle) {
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-weight=\"{}\">{}</text>",
        num(label.x),
        num(label.y + style.label_baseline_offset),
        num(style.label_font_size),
        escape_xml(&style.label_fill),
        style.label_font_weight,
        escape_xml(&label.text)
    ));
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
