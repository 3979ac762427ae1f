// SPDX-License-Identifier: MPL-2.0
//! Bouncing dots shown under the loading heading, drawn on a canvas.

use crate::config::DOT_BOUNCE_HEIGHT;
use crate::ui::animation::{dot_lift, dot_visible, LOADING_DOT_COUNT};
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::time::Duration;

/// Three dots bouncing one after the other.
#[derive(Debug, Clone, Copy)]
pub struct LoadingDots {
    color: Color,
    elapsed: Duration,
}

impl LoadingDots {
    /// Creates the dots at the given point of their animation.
    #[must_use]
    pub fn new(color: Color, elapsed: Duration) -> Self {
        Self { color, elapsed }
    }

    /// Canvas wide enough for the dots and tall enough for the bounce.
    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        #[allow(clippy::cast_precision_loss)]
        let count = LOADING_DOT_COUNT as f32;
        let width = count * sizing::LOADING_DOT + (count - 1.0) * spacing::SM;
        let height = sizing::LOADING_DOT + DOT_BOUNCE_HEIGHT;
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for LoadingDots {
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
        let radius = sizing::LOADING_DOT / 2.0;
        let baseline = frame.height() - radius;

        for index in 0..LOADING_DOT_COUNT {
            if !dot_visible(self.elapsed, index) {
                continue;
            }
            #[allow(clippy::cast_precision_loss)]
            let x = radius + index as f32 * (sizing::LOADING_DOT + spacing::SM);
            let y = baseline - dot_lift(self.elapsed, index);
            frame.fill(&Path::circle(Point::new(x, y), radius), self.color);
        }

        vec![frame.into_geometry()]
    }
}
