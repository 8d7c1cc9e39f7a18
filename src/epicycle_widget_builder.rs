use num_complex::Complex64;

use crate::{
    Color,
    epicycle_widget::{BackgroundDraw, EpicycleWidget},
    renderer::RenderOptions,
    surface::StrokeStyle,
    viewport::Viewport,
};

/// Errors that can occur when building an [`EpicycleWidget`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EpicycleError {
    /// No coefficients were provided.
    #[error("no Fourier coefficients provided")]
    NoCoefficients,
    /// Coefficients must come in `±k` pairs around a zero-frequency term.
    #[error("expected an odd number of Fourier coefficients, got {0}")]
    EvenCoefficientCount(usize),
    /// Speed must be finite and positive.
    #[error("invalid rotation speed {0}")]
    InvalidSpeed(f64),
    /// Canvas width and height must be finite and not negative.
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
}

/// Builder for configuring and constructing an [`EpicycleWidget`].
///
/// Unlike [`EpicycleWidget::new`], [`EpicycleWidgetBuilder::build`] checks the
/// configuration before handing out a widget.
///
/// # Example
///
/// ```
/// use iced_epicycles::{Color, Complex64, EpicycleWidgetBuilder};
///
/// let widget = EpicycleWidgetBuilder::new()
///     .with_coefficients(vec![
///         Complex64::new(0.0, 0.0),
///         Complex64::new(0.0, 0.0),
///         Complex64::new(0.8, 0.0),
///     ])
///     .with_size(400.0, 400.0)
///     .with_trail_color(Color::from_rgb(1.0, 0.8, 0.2))
///     .build()
///     .unwrap();
/// assert!(widget.is_animating());
/// ```
pub struct EpicycleWidgetBuilder {
    coefficients: Vec<Complex64>,
    width: f32,
    height: f32,
    options: RenderOptions,
    animate: bool,
    background: Option<BackgroundDraw>,
}

impl Default for EpicycleWidgetBuilder {
    fn default() -> Self {
        Self {
            coefficients: Vec::new(),
            width: 400.0,
            height: 400.0,
            options: RenderOptions::default(),
            animate: true,
            background: None,
        }
    }
}

impl EpicycleWidgetBuilder {
    /// Create a new EpicycleWidgetBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Fourier coefficients, ordered from the most negative frequency
    /// to the most positive one.
    pub fn with_coefficients(mut self, coefficients: impl Into<Vec<Complex64>>) -> Self {
        self.coefficients = coefficients.into();
        self
    }

    /// Set the canvas size in pixels.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the base rotation speed in revolutions per second.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.options.speed = speed;
        self
    }

    /// Set how many traced points the trail keeps.
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.options.trail_capacity = capacity.max(1);
        self
    }

    pub fn with_vector_style(mut self, style: StrokeStyle) -> Self {
        self.options.vector_style = style;
        self
    }

    pub fn with_vector_color(mut self, color: Color) -> Self {
        self.options.vector_style.color = color;
        self
    }

    pub fn with_trail_style(mut self, style: StrokeStyle) -> Self {
        self.options.trail_style = style;
        self
    }

    pub fn with_trail_color(mut self, color: Color) -> Self {
        self.options.trail_style.color = color;
        self
    }

    /// Fade the trail out towards its oldest points. Disabled by default.
    pub fn with_trail_fade(mut self, enabled: bool) -> Self {
        self.options.trail_fade = enabled;
        self
    }

    /// Set how many world units fit between the canvas center and its nearest edge.
    pub fn with_world_extent(mut self, half_extent: f64) -> Self {
        self.options.viewport = Viewport::new(half_extent);
        self
    }

    /// Enable or disable the animation. Enabled by default.
    pub fn with_animation(mut self, enabled: bool) -> Self {
        self.animate = enabled;
        self
    }

    /// Draw a static layer underneath the epicycles.
    pub fn with_background(mut self, background: BackgroundDraw) -> Self {
        self.background = Some(background);
        self
    }

    /// Build the EpicycleWidget with the configured settings.
    pub fn build(self) -> Result<EpicycleWidget, EpicycleError> {
        match self.coefficients.len() {
            0 => return Err(EpicycleError::NoCoefficients),
            n if n % 2 == 0 => return Err(EpicycleError::EvenCoefficientCount(n)),
            _ => {}
        }
        if !self.options.speed.is_finite() || self.options.speed <= 0.0 {
            return Err(EpicycleError::InvalidSpeed(self.options.speed));
        }
        let size_ok = |v: f32| v.is_finite() && v >= 0.0;
        if !size_ok(self.width) || !size_ok(self.height) {
            return Err(EpicycleError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        let mut widget = EpicycleWidget::new(self.coefficients, self.width, self.height);
        widget.options = self.options;
        widget.animate = self.animate;
        if let Some(background) = self.background {
            widget.background = background;
        }
        Ok(widget)
    }
}
