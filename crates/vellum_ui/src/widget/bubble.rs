//! Speech-bubble geometry.

use vellum_scene::{BoundingBox, Point2D, Rect};

use crate::config::TooltipStyle;

/// Resolved geometry of a tooltip bubble.
///
/// All shape coordinates are local to the tooltip group; `origin` is where
/// the group itself goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleLayout {
    /// Body rectangle.
    pub body: Rect,
    /// Tail vertices: left base, apex, right base.
    pub tail: [Point2D; 3],
    /// Mask vertices, same order as `tail`.
    pub mask: [Point2D; 3],
    /// Anchor of the text line.
    pub text_position: Point2D,
    /// Anchor of the label line.
    pub label_position: Point2D,
    /// Group position.
    pub origin: Point2D,
}

impl BubbleLayout {
    /// Lays out a bubble whose body bottom-center sits on `anchor`.
    ///
    /// `body_origin` is the body's current local position, `text` and
    /// `label` are the measured boxes of the two lines.
    #[must_use]
    pub fn compute(
        style: &TooltipStyle,
        anchor: Point2D,
        body_origin: Point2D,
        text: BoundingBox,
        label: BoundingBox,
    ) -> Self {
        let (ctw, cth) = (text.width(), text.height());
        let (vtw, vth) = (label.width(), label.height());

        let rw = ctw.max(vtw) + style.padding_width;
        let rh = cth + vth + style.padding_height + style.line_gap;
        let (rx, ry) = (body_origin.x, body_origin.y);
        let mid = rx + rw / 2.0;

        let size = style.tail_size;
        // The apex is measured from the body height alone, not from ry.
        let tail = [
            Point2D::new(mid - size, ry + rh),
            Point2D::new(mid, rh + size),
            Point2D::new(mid + size, ry + rh),
        ];

        let inset = style.mask_inset;
        let mask = [
            Point2D::new(mid - size - inset, ry + rh - inset),
            Point2D::new(mid, rh + size - inset),
            Point2D::new(mid + size + inset, ry + rh - inset),
        ];

        let vty = rh / 2.0 - vth / 2.0;
        let label_position = Point2D::new(rw / 2.0 - vtw / 2.0, vty - style.label_lift);
        let text_position = Point2D::new(rw / 2.0 - ctw / 2.0, vty + cth + style.text_gap);

        Self {
            body: Rect::new(rx, ry, rw, rh),
            tail,
            mask,
            text_position,
            label_position,
            origin: Point2D::new(anchor.x - rw / 2.0, anchor.y - rh),
        }
    }

    /// Body rectangle in the group's parent coordinates.
    #[must_use]
    pub fn absolute_body(&self) -> Rect {
        self.body.translate(self.origin.x, self.origin.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(text: (f32, f32), label: (f32, f32)) -> BubbleLayout {
        BubbleLayout::compute(
            &TooltipStyle::default(),
            Point2D::new(100.0, 50.0),
            Point2D::ORIGIN,
            BoundingBox::from_size(text.0, text.1),
            BoundingBox::from_size(label.0, label.1),
        )
    }

    #[test]
    fn test_body_size_from_text() {
        let bubble = layout((40.0, 12.0), (60.0, 12.0));

        assert_eq!(bubble.body.width, 85.0);
        assert_eq!(bubble.body.height, 51.0);
    }

    #[test]
    fn test_empty_text_gives_padding_only() {
        let bubble = layout((0.0, 0.0), (0.0, 0.0));

        assert_eq!(bubble.body, Rect::new(0.0, 0.0, 25.0, 27.0));
        assert_eq!(bubble.origin, Point2D::new(87.5, 23.0));
    }

    #[test]
    fn test_tail_hangs_below_body_center() {
        let bubble = layout((30.0, 10.0), (10.0, 10.0));
        let (rw, rh) = (bubble.body.width, bubble.body.height);

        assert_eq!(bubble.tail[0], Point2D::new(rw / 2.0 - 10.0, rh));
        assert_eq!(bubble.tail[1], Point2D::new(rw / 2.0, rh + 10.0));
        assert_eq!(bubble.tail[2], Point2D::new(rw / 2.0 + 10.0, rh));

        assert_eq!(bubble.mask[0], Point2D::new(rw / 2.0 - 13.0, rh - 3.0));
        assert_eq!(bubble.mask[1], Point2D::new(rw / 2.0, rh + 7.0));
        assert_eq!(bubble.mask[2], Point2D::new(rw / 2.0 + 13.0, rh - 3.0));
    }

    #[test]
    fn test_lines_are_centered() {
        let bubble = layout((30.0, 10.0), (50.0, 8.0));
        let (rw, rh) = (bubble.body.width, bubble.body.height);
        let vty = rh / 2.0 - 4.0;

        assert_eq!(bubble.label_position, Point2D::new(rw / 2.0 - 25.0, vty - 1.0));
        assert_eq!(bubble.text_position, Point2D::new(rw / 2.0 - 15.0, vty + 10.0 + 2.0));
    }

    #[test]
    fn test_absolute_body_bottom_center_is_anchor() {
        let bubble = layout((33.0, 11.0), (17.0, 9.0));
        let body = bubble.absolute_body();

        assert!((body.center().x - 100.0).abs() < 1e-4);
        assert!((body.bottom() - 50.0).abs() < 1e-4);
    }
}
