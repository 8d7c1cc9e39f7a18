use std::sync::atomic::{AtomicU64, Ordering};

use iced::{
    Element, Length, Rectangle, Renderer, Size, Theme, mouse,
    widget::canvas::{self, Canvas, Geometry},
    window,
};
use num_complex::Complex64;

use crate::{
    clock::FrameClock,
    renderer::{EpicycleRenderer, RenderOptions},
    surface::{FrameSurface, Surface},
};

/// Draws the static layer underneath the epicycles.
///
/// Called every frame with the canvas width and height, before the epicycles.
pub type BackgroundDraw = fn(&mut dyn Surface, f32, f32);

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

fn no_background(_surface: &mut dyn Surface, _width: f32, _height: f32) {}

/// A fixed-size canvas animating a Fourier series as a chain of epicycles.
///
/// The stepper is built on the first frame and then mutated in place. Changing
/// the coefficients afterwards requires [`EpicycleWidget::set_coefficients`].
pub struct EpicycleWidget {
    pub(crate) coefficients: Vec<Complex64>,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) options: RenderOptions,
    pub(crate) animate: bool,
    pub(crate) background: BackgroundDraw,
    /// Bumped whenever the stepper must be rebuilt.
    pub(crate) generation: u64,
}

impl EpicycleWidget {
    /// Create a widget of `width` x `height` pixels with default styling.
    pub fn new(coefficients: Vec<Complex64>, width: f32, height: f32) -> Self {
        Self {
            coefficients,
            width,
            height,
            options: RenderOptions::default(),
            animate: true,
            background: no_background,
            generation: next_generation(),
        }
    }

    pub fn coefficients(&self) -> &[Complex64] {
        &self.coefficients
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn is_animating(&self) -> bool {
        self.animate
    }

    /// Replace the coefficients and rebuild the stepper and trail from scratch.
    pub fn set_coefficients(&mut self, coefficients: Vec<Complex64>) {
        self.coefficients = coefficients;
        self.generation = next_generation();
    }

    /// Start or stop the animation. A stopped widget keeps its last frame.
    pub fn set_animating(&mut self, animate: bool) {
        self.animate = animate;
    }

    /// View the widget.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(self.width))
            .height(Length::Fixed(self.height))
            .into()
    }
}

/// Per-instance state kept by iced between frames.
#[derive(Default)]
pub struct EpicycleState {
    renderer: Option<EpicycleRenderer>,
    generation: u64,
    clock: Option<FrameClock>,
    /// Whether the previous redraw advanced the animation.
    was_animating: bool,
}

impl EpicycleState {
    /// Build the renderer on first use, or rebuild it after the widget changed
    /// its coefficients.
    fn sync(&mut self, widget: &EpicycleWidget) {
        if self.generation != widget.generation {
            if self.renderer.is_some() {
                log::debug!("coefficients changed, rebuilding epicycles");
            }
            self.renderer = None;
            self.clock = None;
            self.generation = widget.generation;
        }
        if self.renderer.is_none() {
            self.renderer = Some(EpicycleRenderer::new(
                widget.coefficients.clone(),
                widget.options,
            ));
        }
    }
}

impl<Message> canvas::Program<Message> for EpicycleWidget {
    type State = EpicycleState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let iced::Event::Window(window::Event::RedrawRequested(now)) = event else {
            return None;
        };

        let first_frame = state.renderer.is_none() || state.generation != self.generation;
        state.sync(self);

        let speed = self.options.speed;
        let was_animating = std::mem::replace(&mut state.was_animating, self.animate);
        let clock = state
            .clock
            .get_or_insert_with(|| FrameClock::for_speed(speed));
        if self.animate && !was_animating {
            // Don't replay a pause as one long frame.
            clock.reset();
        }
        let timing = clock.tick(*now);

        let renderer = state.renderer.as_mut()?;
        if !self.animate {
            // Stopped widgets still show the chain once.
            if first_frame {
                renderer.step(0.0, bounds.width, bounds.height);
                return Some(canvas::Action::request_redraw());
            }
            return None;
        }

        renderer.step(timing.frame_millis, bounds.width, bounds.height);
        Some(canvas::Action::request_redraw())
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();

        let mut background = FrameSurface::new(renderer, size);
        (self.background)(&mut background, size.width, size.height);

        let mut foreground = FrameSurface::new(renderer, size);
        if let Some(epicycles) = &state.renderer {
            epicycles.paint(&mut foreground);
        }
        vec![background.into_geometry(), foreground.into_geometry()]
    }
}
