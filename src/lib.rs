//! An animated Fourier-series epicycle widget for Iced.
//!
//! - A chain of rotating vectors, one per frequency pair, drawn every frame
//! - A fixed-size trail of the most recently traced points
//! - A surface-agnostic renderer, so frames can be drawn or recorded headless
//!
//! Quick start:
//!
//! ```no_run
//! use iced_epicycles::{Complex64, EpicycleWidgetBuilder};
//!
//! let widget = EpicycleWidgetBuilder::new()
//!     .with_coefficients(vec![
//!         Complex64::new(0.0, 0.0),
//!         Complex64::new(0.0, 0.0),
//!         Complex64::new(0.8, 0.0),
//!     ])
//!     .with_size(600.0, 600.0)
//!     .build()
//!     .unwrap();
//! ```
//!
//! See `demos/` for a complete application.
pub mod clock;
pub mod fourier;
pub mod point;
pub mod renderer;
pub mod surface;
pub mod trail;
pub mod viewport;

#[cfg(feature = "canvas")]
pub mod epicycle_widget;
#[cfg(feature = "canvas")]
pub mod epicycle_widget_builder;

// Iced re-exports.
pub use iced::Color;

pub use num_complex::Complex64;

// Re-exports of public types.
pub use clock::{FrameClock, FrameTiming};
#[cfg(feature = "canvas")]
pub use epicycle_widget::{BackgroundDraw, EpicycleWidget};
#[cfg(feature = "canvas")]
pub use epicycle_widget_builder::{EpicycleError, EpicycleWidgetBuilder};
pub use fourier::Epicycles;
pub use point::{CanvasPoint, Segment};
pub use renderer::{EpicycleRenderer, RenderOptions};
pub use surface::{DrawCommand, RecordingSurface, StrokeStyle, Surface};
pub use trail::Trail;
pub use viewport::Viewport;
