//! Painter capability interface.

use std::any::Any;

use glaze_paint::{Canvas, Offset, Size};

/// A paint delegate for custom-drawn content.
///
/// Concrete painters conform to this interface instead of extending a base
/// class. `should_repaint` compares against the delegate it replaced,
/// downcasting through [`Painter::as_any`] when the decision depends on
/// concrete fields.
pub trait Painter {
    /// Draw onto `canvas` within `size`.
    fn paint(&mut self, canvas: &mut dyn Canvas, size: Size);

    /// Whether a repaint is needed after this delegate replaced `previous`.
    fn should_repaint(&self, previous: &dyn Painter) -> bool;

    /// Hit-test `position`, or `None` to defer to the default behavior.
    fn hit_test(&self, position: Offset) -> Option<bool> {
        let _ = position;
        None
    }

    /// The painter as [`Any`], for `should_repaint` downcasts.
    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
mod tests {
    use glaze_paint::{Color, Paint, Rect};

    use super::*;

    struct FillPainter {
        color: Color,
    }

    impl Painter for FillPainter {
        fn paint(&mut self, canvas: &mut dyn Canvas, size: Size) {
            let paint = Paint {
                color: self.color,
                ..Paint::default()
            };
            canvas.draw_rect(Rect::new(0.0, 0.0, size.width, size.height), &paint);
        }

        fn should_repaint(&self, previous: &dyn Painter) -> bool {
            match previous.as_any().downcast_ref::<FillPainter>() {
                Some(previous) => previous.color != self.color,
                None => true,
            }
        }

        fn hit_test(&self, _position: Offset) -> Option<bool> {
            Some(true)
        }

        fn as_any(&self) -> &dyn Any {
            self as &dyn Any
        }
    }

    #[derive(Default)]
    struct RecordingCanvas {
        rects: Vec<(Rect, Color)>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
            self.rects.push((rect, paint.color));
        }

        fn draw_line(&mut self, _from: Offset, _to: Offset, _paint: &Paint) {}

        fn draw_circle(&mut self, _center: Offset, _radius: f32, _paint: &Paint) {}

        fn clip_rect(&mut self, _rect: Rect, _clip: glaze_paint::Clip) {}
    }

    #[test]
    fn test_paint_reaches_canvas() {
        let mut painter = FillPainter {
            color: Color::BLACK,
        };
        let mut canvas = RecordingCanvas::default();
        painter.paint(&mut canvas, Size::new(10.0, 20.0));

        assert_eq!(
            canvas.rects,
            vec![(Rect::new(0.0, 0.0, 10.0, 20.0), Color::BLACK)]
        );
    }

    #[test]
    fn test_should_repaint_compares_fields() {
        let black = FillPainter {
            color: Color::BLACK,
        };
        let white = FillPainter {
            color: Color::WHITE,
        };
        let black_again = FillPainter {
            color: Color::BLACK,
        };

        assert!(white.should_repaint(&black));
        assert!(!black_again.should_repaint(&black));
    }

    #[test]
    fn test_hit_test_override_and_default() {
        struct Passive;
        impl Painter for Passive {
            fn paint(&mut self, _canvas: &mut dyn Canvas, _size: Size) {}
            fn should_repaint(&self, _previous: &dyn Painter) -> bool {
                false
            }
            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        let fill = FillPainter {
            color: Color::BLACK,
        };
        assert_eq!(fill.hit_test(Offset::ZERO), Some(true));
        assert_eq!(Passive.hit_test(Offset::ZERO), None);
    }
}
