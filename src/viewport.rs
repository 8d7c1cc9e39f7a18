use glam::DVec2;
use num_complex::Complex64;

use crate::point::CanvasPoint;

const EPSILON_SMALL: f64 = 1e-6;

/// World units shown between the canvas center and its nearest edge.
pub const DEFAULT_WORLD_EXTENT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Maps the complex plane onto a canvas.
///
/// The origin sits at the canvas center and the imaginary axis points up.
/// `half_extent` world units span half of the shorter canvas side, so the
/// drawing keeps its aspect ratio whatever the canvas shape.
pub struct Viewport {
    /// Center position (world units)
    pub center: DVec2,
    /// World units between the center and the nearest canvas edge.
    pub half_extent: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_EXTENT)
    }
}

impl Viewport {
    pub fn new(half_extent: f64) -> Self {
        let half_extent = if half_extent.is_finite() {
            half_extent.max(EPSILON_SMALL)
        } else {
            DEFAULT_WORLD_EXTENT
        };
        Self {
            center: DVec2::ZERO,
            half_extent,
        }
    }

    /// Pixels per world unit for a canvas of the given size.
    pub fn scale(&self, width: f32, height: f32) -> f64 {
        let shorter = width.min(height).max(0.0) as f64;
        shorter / 2.0 / self.half_extent
    }

    /// Convert a complex-plane point into canvas coordinates.
    ///
    /// Only multiplies by the canvas size, so a zero-sized canvas maps
    /// every point onto its origin.
    pub fn to_canvas(&self, z: Complex64, width: f32, height: f32) -> CanvasPoint {
        let scale = self.scale(width, height);
        let screen_center = DVec2::new(width.max(0.0) as f64, height.max(0.0) as f64) / 2.0;
        // Flip Y
        let offset = (DVec2::new(z.re, z.im) - self.center) * DVec2::new(scale, -scale);
        let screen = screen_center + offset;
        CanvasPoint::new(screen.x as f32, screen.y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_canvas_center() {
        let p = Viewport::default().to_canvas(Complex64::new(0.0, 0.0), 400.0, 300.0);
        assert_eq!(p, CanvasPoint::new(200.0, 150.0));
    }

    #[test]
    fn unit_extent_reaches_shorter_edge() {
        let viewport = Viewport::default();
        let right = viewport.to_canvas(Complex64::new(1.0, 0.0), 400.0, 300.0);
        let up = viewport.to_canvas(Complex64::new(0.0, 1.0), 400.0, 300.0);
        assert_eq!(right, CanvasPoint::new(350.0, 150.0));
        assert_eq!(up, CanvasPoint::new(200.0, 0.0));
    }

    #[test]
    fn zero_sized_canvas_collapses_to_origin() {
        let p = Viewport::default().to_canvas(Complex64::new(3.0, -7.0), 0.0, 0.0);
        assert_eq!(p, CanvasPoint::new(0.0, 0.0));
        assert!(p.u.is_finite() && p.v.is_finite());
    }

    #[test]
    fn degenerate_extent_is_clamped() {
        assert!(Viewport::new(0.0).half_extent > 0.0);
        assert_eq!(Viewport::new(f64::NAN).half_extent, DEFAULT_WORLD_EXTENT);
    }
}
