// SPDX-License-Identifier: MPL-2.0
//! T-shirt illustration drawn on a canvas.
//!
//! Used as the preview placeholder, the loading logo and the swaying shirt
//! of the saved modal.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Outline of a shirt in a unit square, clockwise from the left of the collar.
const OUTLINE: [(f32, f32); 11] = [
    (0.38, 0.08),
    (0.18, 0.14),
    (0.02, 0.32),
    (0.14, 0.44),
    (0.24, 0.37),
    (0.24, 0.95),
    (0.76, 0.95),
    (0.76, 0.37),
    (0.86, 0.44),
    (0.98, 0.32),
    (0.82, 0.14),
];

/// Right edge of the collar; the neckline curves back to the start.
const COLLAR_RIGHT: (f32, f32) = (0.62, 0.08);
const COLLAR_DIP: (f32, f32) = (0.5, 0.2);

/// Center of the chest print, in unit coordinates.
const PRINT_CENTER: (f32, f32) = (0.5, 0.55);
const PRINT_RADIUS: f32 = 0.1;

/// A drawn t-shirt.
#[derive(Debug, Clone, Copy)]
pub struct Shirt {
    fill: Color,
    outline: Color,
    offset_x: f32,
    print_scale: Option<f32>,
}

impl Shirt {
    #[must_use]
    pub fn new(fill: Color, outline: Color) -> Self {
        Self {
            fill,
            outline,
            offset_x: 0.0,
            print_scale: None,
        }
    }

    /// Shifts the shirt horizontally, in logical pixels.
    #[must_use]
    pub fn with_offset(mut self, offset_x: f32) -> Self {
        self.offset_x = offset_x;
        self
    }

    /// Draws a round print on the chest at the given scale.
    #[must_use]
    pub fn with_print(mut self, scale: f32) -> Self {
        self.print_scale = Some(scale);
        self
    }

    /// Creates a square canvas of the given side.
    pub fn into_element<'a, Message: 'a>(self, size: f32) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Creates a canvas filling the available space.
    pub fn into_fill_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Origin and side of the square the shirt is drawn in.
fn square(bounds: Size, offset_x: f32) -> (Point, f32) {
    let side = bounds.width.min(bounds.height);
    let origin = Point::new(
        (bounds.width - side) / 2.0 + offset_x,
        (bounds.height - side) / 2.0,
    );
    (origin, side)
}

fn outline_path(origin: Point, side: f32) -> Path {
    let at = |(x, y): (f32, f32)| Point::new(origin.x + x * side, origin.y + y * side);

    Path::new(|builder| {
        builder.move_to(at(OUTLINE[0]));
        for point in &OUTLINE[1..] {
            builder.line_to(at(*point));
        }
        builder.line_to(at(COLLAR_RIGHT));
        builder.quadratic_curve_to(at(COLLAR_DIP), at(OUTLINE[0]));
        builder.close();
    })
}

impl<Message> canvas::Program<Message> for Shirt {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let (origin, side) = square(bounds.size(), self.offset_x);

        let shirt = outline_path(origin, side);
        frame.fill(&shirt, self.fill);
        frame.stroke(
            &shirt,
            Stroke::default()
                .with_width((side / 40.0).max(1.5))
                .with_color(self.outline)
                .with_line_join(canvas::LineJoin::Round),
        );

        if let Some(scale) = self.print_scale {
            let center = Point::new(
                origin.x + PRINT_CENTER.0 * side,
                origin.y + PRINT_CENTER.1 * side,
            );
            frame.fill(
                &Path::circle(center, PRINT_RADIUS * side * scale),
                self.outline,
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_centered_in_wide_bounds() {
        let (origin, side) = square(Size::new(200.0, 100.0), 0.0);
        assert_eq!(side, 100.0);
        assert_eq!(origin, Point::new(50.0, 0.0));
    }

    #[test]
    fn offset_moves_square_horizontally() {
        let (origin, _) = square(Size::new(100.0, 100.0), -10.0);
        assert_eq!(origin, Point::new(-10.0, 0.0));
    }

    #[test]
    fn outline_stays_in_unit_square() {
        for (x, y) in OUTLINE.iter().chain([&COLLAR_RIGHT, &COLLAR_DIP]) {
            assert!((0.0..=1.0).contains(x) && (0.0..=1.0).contains(y));
        }
    }
}
