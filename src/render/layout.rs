// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fitting molecule coordinates onto a canvas.
//!
//! World space is the molecule's own coordinate system: y grows upward.
//! Canvas space is pixels: y grows downward from the top-left corner. A
//! [`Viewport`] maps one onto the other with a single uniform scale, so
//! angles and distance ratios survive any canvas shape.

use crate::types::Atom;

/// Canvas used when the caller's dimension is zero, negative or not finite.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 200.0;

/// Target size in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Size with unusable dimensions replaced by the defaults, one axis at a time.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: usable(width).unwrap_or(DEFAULT_CANVAS_WIDTH),
            height: usable(height).unwrap_or(DEFAULT_CANVAS_HEIGHT),
        }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

fn usable(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Box around every atom, missing coordinates read as zero.
    ///
    /// `None` for an empty slice. There is no meaningful box around nothing.
    pub fn of_atoms(atoms: &[Atom]) -> Option<Self> {
        let (first, rest) = atoms.split_first()?;
        let (x, y) = first.position();
        let start = Bounds {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        };

        Some(rest.iter().fold(start, |b, atom| {
            let (x, y) = atom.position();
            Bounds {
                min_x: b.min_x.min(x),
                max_x: b.max_x.max(x),
                min_y: b.min_y.min(y),
                max_y: b.max_y.max(y),
            }
        }))
    }

    /// Horizontal span. Clamped to `f64::MAX` when the difference overflows.
    #[inline]
    pub fn width(&self) -> f64 {
        offset(self.max_x, self.min_x)
    }

    /// Vertical span. Clamped to `f64::MAX` when the difference overflows.
    #[inline]
    pub fn height(&self) -> f64 {
        offset(self.max_y, self.min_y)
    }
}

/// Uniform world-to-canvas transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas units per world unit, same on both axes.
    pub scale: f64,
    min_x: f64,
    min_y: f64,
    /// Canvas x of the box's left edge.
    left: f64,
    /// Canvas y of the box's bottom edge.
    bottom: f64,
}

impl Viewport {
    /// Fit `bounds` inside `canvas` minus `padding` on every side.
    ///
    /// Each axis gets its own candidate scale; the smaller one wins so the
    /// box fits both ways. A zero span counts as 1 world unit, which keeps a
    /// single atom (or a straight chain) from dividing by zero. The box is
    /// centered along whichever axis has room left over.
    pub fn fit(bounds: &Bounds, canvas: CanvasSize, padding: f64) -> Self {
        let inner_width = (canvas.width - 2.0 * padding).max(0.0);
        let inner_height = (canvas.height - 2.0 * padding).max(0.0);

        let scale_x = axis_scale(inner_width, bounds.width());
        let scale_y = axis_scale(inner_height, bounds.height());
        let scale = scale_x.min(scale_y);

        let slack_x = (inner_width - bounds.width() * scale).max(0.0) / 2.0;
        let slack_y = (inner_height - bounds.height() * scale).max(0.0) / 2.0;

        Self {
            scale,
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            left: padding + slack_x,
            bottom: canvas.height - padding - slack_y,
        }
    }

    /// Map a world point to canvas space. World up is canvas up.
    #[inline]
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.left + offset(x, self.min_x) * self.scale,
            self.bottom - offset(y, self.min_y) * self.scale,
        )
    }

    #[inline]
    pub fn map_atom(&self, atom: &Atom) -> (f64, f64) {
        let (x, y) = atom.position();
        self.to_canvas(x, y)
    }
}

/// `value - origin` for finite inputs, saturating instead of overflowing to infinity.
#[inline]
fn offset(value: f64, origin: f64) -> f64 {
    (value - origin).clamp(-f64::MAX, f64::MAX)
}

/// Canvas units per world unit along one axis. Subnormal spans would blow
/// the ratio up to infinity, so it is capped at `f64::MAX`.
fn axis_scale(inner: f64, span: f64) -> f64 {
    (inner / nonzero_span(span)).min(f64::MAX)
}

fn nonzero_span(span: f64) -> f64 {
    if span > 0.0 {
        span
    } else {
        1.0
    }
}
