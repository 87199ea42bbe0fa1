// SPDX-License-Identifier: MPL-2.0
//! Canvas program painting one analog face.
//!
//! Geometry is laid out in a 200×200 view box and scaled to whatever square
//! fits the widget bounds.

use crate::clock::angles::{
    self, HandAngles, CENTER, CENTER_DOT_RADIUS, FACE_RADIUS, FACE_STROKE_WIDTH,
    HOUR_HAND_LENGTH, HOUR_HAND_WIDTH, MARKER_STROKE_WIDTH, MINUTE_HAND_LENGTH,
    MINUTE_HAND_WIDTH, SECOND_HAND_LENGTH, SECOND_HAND_WIDTH, VIEW_BOX,
};
use crate::ui::theming::ClockPalette;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Maps view-box coordinates onto a frame of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ViewBox {
    scale: f32,
    origin: Vector,
}

impl ViewBox {
    // View-box values are small constants, f32 is plenty
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn fit(size: Size) -> Self {
        let side = size.width.min(size.height);
        let scale = side / VIEW_BOX as f32;
        Self {
            scale,
            origin: Vector::new((size.width - side) / 2.0, (size.height - side) / 2.0),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn point(&self, (x, y): (f64, f64)) -> Point {
        Point::new(
            self.origin.x + x as f32 * self.scale,
            self.origin.y + y as f32 * self.scale,
        )
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn length(&self, value: f64) -> f32 {
        value as f32 * self.scale
    }
}

/// One frame's worth of drawing input.
///
/// The cache is borrowed from the owning clock view so the face survives
/// across frames; `hands` is `None` until the clock has mounted.
pub struct ClockFace<'a> {
    pub(crate) cache: &'a Cache,
    pub(crate) palette: ClockPalette,
    pub(crate) hands: Option<HandAngles>,
}

impl ClockFace<'_> {
    fn draw_face(&self, frame: &mut Frame) {
        let vb = ViewBox::fit(frame.size());
        let center = vb.point((CENTER, CENTER));

        let face = Path::circle(center, vb.length(FACE_RADIUS));
        frame.fill(&face, self.palette.face);
        frame.stroke(
            &face,
            Stroke::default()
                .with_width(vb.length(FACE_STROKE_WIDTH))
                .with_color(self.palette.face_stroke),
        );

        for marker in angles::hour_markers() {
            let line = Path::line(vb.point(marker.outer), vb.point(marker.inner));
            frame.stroke(
                &line,
                Stroke::default()
                    .with_width(vb.length(MARKER_STROKE_WIDTH))
                    .with_color(self.palette.marker)
                    .with_line_cap(canvas::LineCap::Round),
            );
        }
    }

    fn draw_hands(&self, frame: &mut Frame, hands: HandAngles) {
        let vb = ViewBox::fit(frame.size());
        let center = vb.point((CENTER, CENTER));

        let hand = |frame: &mut Frame, angle: f64, length: f64, width: f64, color: Color| {
            let tip = vb.point(angles::hand_tip(angle, length));
            frame.stroke(
                &Path::line(center, tip),
                Stroke::default()
                    .with_width(vb.length(width))
                    .with_color(color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        };

        hand(frame, hands.hour, HOUR_HAND_LENGTH, HOUR_HAND_WIDTH, self.palette.hour_hand);
        hand(
            frame,
            hands.minute,
            MINUTE_HAND_LENGTH,
            MINUTE_HAND_WIDTH,
            self.palette.minute_hand,
        );
        hand(
            frame,
            hands.second,
            SECOND_HAND_LENGTH,
            SECOND_HAND_WIDTH,
            self.palette.second_hand,
        );

        frame.fill(
            &Path::circle(center, vb.length(CENTER_DOT_RADIUS)),
            self.palette.center_dot,
        );
    }
}

impl<Message> canvas::Program<Message> for ClockFace<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let face = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| self.draw_face(frame));

        let Some(hands) = self.hands else {
            return vec![face];
        };

        let mut frame = Frame::new(renderer, bounds.size());
        self.draw_hands(&mut frame, hands);

        vec![face, frame.into_geometry()]
    }
}
