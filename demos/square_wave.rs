//! Traces a few Fourier curves with epicycles; the buttons pause the
//! animation and switch to the next curve.
use std::f64::consts::PI;

use iced::{
    Element,
    widget::{button, column, row},
};
use iced_epicycles::{
    CanvasPoint, Color, Complex64, EpicycleWidget, EpicycleWidgetBuilder, Segment, StrokeStyle,
    Surface,
};

fn main() -> iced::Result {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    iced::application(App::new, App::update, App::view).run()
}

#[derive(Debug, Clone)]
enum Message {
    ToggleAnimation,
    NextCurve,
}

struct App {
    widget: EpicycleWidget,
    curve: usize,
}

/// Square wave along the real axis, with a slow vertical drift so the trail
/// does not retrace itself.
fn square_wave(terms: usize) -> Vec<Complex64> {
    let n = terms as i64;
    (-n..=n)
        .map(|k| match k {
            // Odd harmonics of a square wave, split between ±k.
            k if k % 2 != 0 => Complex64::new(0.0, -2.0 / (PI * k as f64)) * 0.8,
            -2 => Complex64::new(0.0, 0.15),
            _ => Complex64::new(0.0, 0.0),
        })
        .collect()
}

fn trefoil() -> Vec<Complex64> {
    let mut coefficients = vec![Complex64::new(0.0, 0.0); 5];
    coefficients[3] = Complex64::new(0.5, 0.0);
    coefficients[0] = Complex64::new(0.35, 0.0);
    coefficients
}

fn curve(index: usize) -> Vec<Complex64> {
    match index % 2 {
        0 => square_wave(15),
        _ => trefoil(),
    }
}

/// Faint axes through the canvas center.
fn axes(surface: &mut dyn Surface, width: f32, height: f32) {
    let (cx, cy) = (width / 2.0, height / 2.0);
    surface.stroke(
        &[
            Segment::new(CanvasPoint::new(0.0, cy), CanvasPoint::new(width, cy)),
            Segment::new(CanvasPoint::new(cx, 0.0), CanvasPoint::new(cx, height)),
        ],
        &StrokeStyle::new(Color::from_rgba(1.0, 1.0, 1.0, 0.15), 1.0),
    );
}

impl App {
    fn new() -> Self {
        let widget = EpicycleWidgetBuilder::new()
            .with_coefficients(curve(0))
            .with_size(600.0, 600.0)
            .with_trail_style(StrokeStyle::new(Color::from_rgb(1.0, 0.8, 0.3), 1.5))
            .with_trail_fade(true)
            .with_background(axes)
            .build()
            .unwrap();
        Self { widget, curve: 0 }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ToggleAnimation => {
                let animate = !self.widget.is_animating();
                log::info!("animation {}", if animate { "resumed" } else { "paused" });
                self.widget.set_animating(animate);
            }
            Message::NextCurve => {
                self.curve += 1;
                self.widget.set_coefficients(curve(self.curve));
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let label = if self.widget.is_animating() {
            "Pause"
        } else {
            "Resume"
        };
        column![
            row![
                button(label).on_press(Message::ToggleAnimation),
                button("Next curve").on_press(Message::NextCurve),
            ]
            .spacing(8),
            self.widget.view(),
        ]
        .spacing(8)
        .padding(8)
        .into()
    }
}
