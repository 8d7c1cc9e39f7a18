use num_complex::Complex64;

use crate::{
    fourier::Epicycles,
    point::{CanvasPoint, Segment, chain_segments},
    surface::{StrokeStyle, Surface},
    trail::Trail,
    viewport::Viewport,
};

/// Styling and sizing options for an [`EpicycleRenderer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Revolutions per second of the base frequency.
    pub speed: f64,
    /// Number of traced points kept in the trail.
    pub trail_capacity: usize,
    /// Style of the rotating vectors.
    pub vector_style: StrokeStyle,
    /// Style of the traced trail.
    pub trail_style: StrokeStyle,
    /// Fade the trail from transparent (oldest) to opaque (newest).
    pub trail_fade: bool,
    /// Maps the complex plane onto the canvas.
    pub viewport: Viewport,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            speed: crate::fourier::DEFAULT_SPEED,
            trail_capacity: crate::trail::TRAIL_CAPACITY,
            vector_style: StrokeStyle::default(),
            trail_style: StrokeStyle::default(),
            trail_fade: false,
            viewport: Viewport::default(),
        }
    }
}

/// Owns the epicycle stepper and its trail, and draws them frame by frame.
#[derive(Debug, Clone)]
pub struct EpicycleRenderer {
    epicycles: Epicycles,
    trail: Trail,
    options: RenderOptions,
    /// Vector chain computed by the last [`EpicycleRenderer::step`].
    points: Vec<CanvasPoint>,
    /// Canvas size used by the last step.
    size: (f32, f32),
}

impl EpicycleRenderer {
    pub fn new(coefficients: Vec<Complex64>, options: RenderOptions) -> Self {
        let frequency_count = coefficients.len().saturating_sub(1) / 2;
        log::debug!(
            "building epicycle renderer: {} coefficients, {} frequency pairs, trail of {}",
            coefficients.len(),
            frequency_count,
            options.trail_capacity,
        );
        Self {
            epicycles: Epicycles::new(coefficients, frequency_count, options.speed),
            trail: Trail::new(options.trail_capacity),
            options,
            points: Vec::new(),
            size: (0.0, 0.0),
        }
    }

    /// Replace the coefficients, discarding the current phase and trail.
    pub fn rebuild(&mut self, coefficients: Vec<Complex64>) {
        *self = Self::new(coefficients, self.options);
    }

    pub fn epicycles(&self) -> &Epicycles {
        &self.epicycles
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Vector chain points from the last step, root first and tip last.
    pub fn points(&self) -> &[CanvasPoint] {
        &self.points
    }

    /// Advance the simulation by one frame and record the new tip.
    pub fn step(&mut self, frame_millis: f64, width: f32, height: f32) {
        self.epicycles.advance(frame_millis / 1000.0);
        self.size = (width, height);
        self.points = self
            .epicycles
            .current_points(&self.options.viewport, width, height);
        if let Some(&tip) = self.points.last() {
            self.trail.push(tip);
        }
        log::trace!(
            "stepped {frame_millis:.3} ms to t = {:.3} s",
            self.epicycles.elapsed()
        );
    }

    /// Clear `surface` and draw the trail and the vector chain.
    pub fn paint(&self, surface: &mut dyn Surface) {
        let (width, height) = self.size;
        surface.clear(width, height);
        self.paint_trail(surface);
        surface.stroke(&chain_segments(&self.points), &self.options.vector_style);
    }

    /// Produce one complete frame.
    ///
    /// `progress` is accepted for drivers that report it, but does not affect
    /// the drawing.
    pub fn draw_frame(
        &mut self,
        surface: &mut dyn Surface,
        width: f32,
        height: f32,
        _progress: f32,
        frame_millis: f64,
    ) {
        self.step(frame_millis, width, height);
        self.paint(surface);
    }

    fn paint_trail(&self, surface: &mut dyn Surface) {
        let style = self.options.trail_style;
        if !self.options.trail_fade {
            let segments: Vec<Segment> = self.trail.segments().collect();
            surface.stroke(&segments, &style);
            return;
        }

        // Each segment gets its own alpha, so each is its own path.
        let slots = self.trail.len() as f32;
        for (index, pair) in self.trail.iter().zip(self.trail.iter().skip(1)).enumerate() {
            if let (Some(from), Some(to)) = pair {
                let alpha = (index + 2) as f32 / slots;
                surface.stroke(&[Segment::new(from, to)], &style.with_alpha(alpha));
            }
        }
    }
}
