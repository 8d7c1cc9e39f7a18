//! Drawing surfaces the epicycle renderer can paint on.

use crate::{Color, point::Segment};

/// Stroke color and line width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            width: 1.0,
        }
    }
}

impl StrokeStyle {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Same style with the color's alpha multiplied by `alpha`.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color.a *= alpha.clamp(0.0, 1.0);
        self
    }
}

/// The drawing operations the renderer needs.
pub trait Surface {
    /// Erase the whole `width` x `height` area.
    fn clear(&mut self, width: f32, height: f32);

    /// Stroke all `segments` as a single path.
    fn stroke(&mut self, segments: &[Segment], style: &StrokeStyle);
}

/// A command recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Stroke { segments: Vec<Segment>, style: StrokeStyle },
}

/// A surface that records every command instead of drawing.
///
/// Useful for headless rendering and for inspecting what a frame would draw.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the most recent clear, excluding the clear itself.
    pub fn since_last_clear(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    /// Every stroked segment since the most recent clear, in drawing order.
    pub fn stroked_segments(&self) -> Vec<Segment> {
        self.since_last_clear()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke { segments, .. } => Some(segments.iter().copied()),
                DrawCommand::Clear { .. } => None,
            })
            .flatten()
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn stroke(&mut self, segments: &[Segment], style: &StrokeStyle) {
        if segments.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Stroke {
            segments: segments.to_vec(),
            style: *style,
        });
    }
}

#[cfg(feature = "canvas")]
pub use frame::FrameSurface;

#[cfg(feature = "canvas")]
mod frame {
    use iced::{
        Size,
        widget::canvas::{Frame, Geometry, Path, Stroke},
    };

    use super::{StrokeStyle, Surface};
    use crate::point::Segment;

    /// A [`Surface`] backed by an iced canvas [`Frame`].
    pub struct FrameSurface<'a> {
        renderer: &'a iced::Renderer,
        frame: Frame,
    }

    impl<'a> FrameSurface<'a> {
        pub fn new(renderer: &'a iced::Renderer, size: Size) -> Self {
            Self {
                renderer,
                frame: Frame::new(renderer, size),
            }
        }

        pub fn into_geometry(self) -> Geometry {
            self.frame.into_geometry()
        }
    }

    impl Surface for FrameSurface<'_> {
        fn clear(&mut self, width: f32, height: f32) {
            // A canvas frame cannot be wiped in place; start over with an empty one.
            self.frame = Frame::new(self.renderer, Size::new(width.max(0.0), height.max(0.0)));
        }

        fn stroke(&mut self, segments: &[Segment], style: &StrokeStyle) {
            if segments.is_empty() {
                return;
            }
            let path = Path::new(|builder| {
                for segment in segments {
                    builder.move_to(segment.from.into());
                    builder.line_to(segment.to.into());
                }
            });
            self.frame.stroke(
                &path,
                Stroke::default()
                    .with_color(style.color)
                    .with_width(style.width),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::CanvasPoint;

    #[test]
    fn empty_strokes_are_not_recorded() {
        let mut surface = RecordingSurface::new();
        surface.stroke(&[], &StrokeStyle::default());
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn stroked_segments_restart_after_clear() {
        let a = CanvasPoint::new(0.0, 0.0);
        let b = CanvasPoint::new(1.0, 1.0);
        let mut surface = RecordingSurface::new();
        surface.stroke(&[Segment::new(a, b)], &StrokeStyle::default());
        surface.clear(10.0, 10.0);
        assert!(surface.stroked_segments().is_empty());
        surface.stroke(&[Segment::new(b, a)], &StrokeStyle::default());
        assert_eq!(surface.stroked_segments(), vec![Segment::new(b, a)]);
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn alpha_is_scaled_and_clamped() {
        let style = StrokeStyle::default().with_alpha(0.5);
        assert_eq!(style.color.a, 0.5);
        assert_eq!(StrokeStyle::default().with_alpha(2.0).color.a, 1.0);
    }
}
