// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flat 2D molecule drawings.
//!
//! [`render`] turns a [`Molecule`] into a [`Scene`]: bonds as lines, atoms as
//! labeled circles, scaled uniformly to fit the canvas inside a fixed padding.
//! It never fails. No atoms gives an empty scene, dangling bonds are dropped,
//! a single atom or a perfectly straight chain still gets a sensible scale.
//!
//! [`Surface`] is the stateful end: a fixed-size target that always shows
//! exactly one drawing. Each [`Surface::draw`] throws the previous one away.

mod layout;
mod scene;
pub mod svg;

pub use layout::{Bounds, CanvasSize, Viewport, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use scene::{Circle, Label, Line, Primitive, Scene};

use crate::types::Molecule;

/// Presentation constants for a drawing.
///
/// Geometry (`padding`, `atom_radius`) shapes the scene itself. The rest is
/// paint, used by surfaces like [`svg::to_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub padding: f64,
    pub atom_radius: f64,
    pub atom_fill: String,
    pub atom_stroke: String,
    pub atom_stroke_width: f64,
    pub bond_stroke: String,
    pub bond_stroke_width: f64,
    pub label_font_size: f64,
    pub label_font_weight: u16,
    pub label_fill: String,
    /// Shift from circle center to text baseline, so the glyphs look centered.
    pub label_baseline_offset: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            padding: 30.0,
            atom_radius: 18.0,
            atom_fill: "#1f2937".to_string(),
            atom_stroke: "#2b3946".to_string(),
            atom_stroke_width: 1.0,
            bond_stroke: "#9aa5b2".to_string(),
            bond_stroke_width: 3.0,
            label_font_size: 14.0,
            label_font_weight: 700,
            label_fill: "#e6eef8".to_string(),
            label_baseline_offset: 6.0,
        }
    }
}

/// Draw `molecule` for a `width` x `height` canvas with the default style.
pub fn render(molecule: &Molecule, width: f64, height: f64) -> Scene {
    render_with_style(molecule, CanvasSize::new(width, height), &RenderStyle::default())
}

/// Draw `molecule` with an explicit canvas size and style.
pub fn render_with_style(molecule: &Molecule, canvas: CanvasSize, style: &RenderStyle) -> Scene {
    let Some(bounds) = Bounds::of_atoms(&molecule.atoms) else {
        return Scene::empty(canvas.width, canvas.height);
    };
    let viewport = Viewport::fit(&bounds, canvas, style.padding);

    let mut scene = Scene::with_capacity(
        canvas.width,
        canvas.height,
        molecule.bonds.len() + 2 * molecule.atoms.len(),
    );

    // Bonds go down first so atoms cover their ends.
    for (index, bond) in molecule.bonds.iter().enumerate() {
        let (Some(a), Some(b)) = (molecule.atom(bond.from), molecule.atom(bond.to)) else {
            log::debug!(
                "skipping bond #{} ({} -> {}): molecule has {} atoms",
                index,
                bond.from,
                bond.to,
                molecule.atoms.len()
            );
            continue;
        };
        let (x1, y1) = viewport.map_atom(a);
        let (x2, y2) = viewport.map_atom(b);
        scene.push(Primitive::Line(Line { x1, y1, x2, y2 }));
    }

    for atom in &molecule.atoms {
        let (cx, cy) = viewport.map_atom(atom);
        scene.push(Primitive::Circle(Circle {
            cx,
            cy,
            r: style.atom_radius,
        }));
        scene.push(Primitive::Label(Label {
            x: cx,
            y: cy,
            text: atom.element.clone(),
        }));
    }

    scene
}

/// A fixed-size render target holding the current drawing.
#[derive(Debug, Clone)]
pub struct Surface {
    canvas: CanvasSize,
    style: RenderStyle,
    scene: Scene,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_style(CanvasSize::new(width, height), RenderStyle::default())
    }

    pub fn with_style(canvas: CanvasSize, style: RenderStyle) -> Self {
        Self {
            canvas,
            style,
            scene: Scene::empty(canvas.width, canvas.height),
        }
    }

    /// Replace whatever is on the surface with `molecule`.
    pub fn draw(&mut self, molecule: &Molecule) -> &Scene {
        self.scene = render_with_style(molecule, self.canvas, &self.style);
        &self.scene
    }

    /// Wipe the surface.
    pub fn clear(&mut self) {
        self.scene = Scene::empty(self.canvas.width, self.canvas.height);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Current drawing as an SVG document.
    pub fn to_svg(&self) -> String {
        svg::to_svg(&self.scene, &self.style)
    }
}
