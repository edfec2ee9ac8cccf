//! Mapping from data coordinates into a screen-space preview.
//!
//! Screen y grows downward, so the data y axis is flipped.

use serde::Serialize;

use crate::point::Point2d;
use crate::result::FitResult;

/// Fraction of the larger data extent added as margin on every side.
const PAD_FRACTION: f64 = 0.1;
/// Fraction of the viewport the padded data may occupy.
const FILL_FRACTION: f64 = 0.9;

/// Affine data-to-screen transform for a `width` × `height` viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Viewport {
    /// Fit the points, and the fitted circle if any, into the viewport.
    ///
    /// Returns `None` when there is nothing to show or the bounds or
    /// viewport size are not usable.
    pub fn fit(points: &[Point2d], result: &FitResult, width: f64, height: f64) -> Option<Self> {
        if points.is_empty() || !(width > 0.0 && height > 0.0) {
            return None;
        }
        if !(width.is_finite() && height.is_finite()) {
            return None;
        }

        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        if let Some(circle) = result.circle() {
            let r = circle.radius;
            min_x = min_x.min(circle.center.x - r);
            max_x = max_x.max(circle.center.x + r);
            min_y = min_y.min(circle.center.y - r);
            max_y = max_y.max(circle.center.y + r);
        }
        if ![min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite()) {
            return None;
        }

        let extent = PAD_FRACTION * (max_x - min_x).max(max_y - min_y);
        let pad = if extent > 0.0 { extent } else { 1.0 };
        min_x -= pad;
        max_x += pad;
        min_y -= pad;
        max_y += pad;

        let data_w = max_x - min_x;
        let data_h = max_y - min_y;
        let scale = FILL_FRACTION * (width / data_w).min(height / data_h);

        Some(Self {
            width,
            height,
            scale,
            offset_x: (width - data_w * scale) / 2.0 - min_x * scale,
            offset_y: (height - data_h * scale) / 2.0 + max_y * scale,
        })
    }

    /// Screen pixels per data unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn to_screen(&self, p: &Point2d) -> (f64, f64) {
        (
            p.x * self.scale + self.offset_x,
            -p.y * self.scale + self.offset_y,
        )
    }

    /// Length of a data-space distance on screen.
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.scale
    }
}

/// The fitted circle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenCircle {
    pub center: (f64, f64),
    pub radius: f64,
}

/// Everything a renderer needs to draw the preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub points: Vec<(f64, f64)>,
    pub circle: Option<ScreenCircle>,
}

impl Overlay {
    /// Build the overlay. An unfit result draws the points only.
    pub fn build(points: &[Point2d], result: &FitResult, viewport: &Viewport) -> Self {
        Self {
            points: points.iter().map(|p| viewport.to_screen(p)).collect(),
            circle: result.circle().map(|c| ScreenCircle {
                center: viewport.to_screen(&c.center),
                radius: viewport.scale_length(c.radius),
            }),
        }
    }
}
