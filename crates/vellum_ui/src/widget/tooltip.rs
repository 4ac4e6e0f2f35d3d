//! Speech-bubble tooltip.
//!
//! The tooltip's group sits on its layer exactly while the tooltip is
//! shown. Every call that cannot apply (no layer, already hidden, ...) is a
//! silent no-op; mutators return `&mut Self` for chaining.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use vellum_scene::{
    BoundingBox, Group, GroupKind, Layer, LayerHandle, MonospaceMetrics, Point2D, Primitive,
    Rect, Rectangle, SharedGroup, Text, TextAlign, TextBaseline, TextMeasure, Triangle,
};

use super::bubble::BubbleLayout;
use crate::config::TooltipStyle;

/// Default half-base (and height) of the tail.
pub const TRIANGLE_SIZE: f32 = 10.0;

const BODY: usize = 0;
const TAIL: usize = 1;
const MASK: usize = 2;
const TEXT: usize = 3;
const LABEL: usize = 4;

/// Whether the tooltip is on its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Off the layer.
    #[default]
    Hidden,
    /// On the layer, laid out at the last shown position.
    Shown,
}

impl Visibility {
    /// Returns true for [`Visibility::Shown`].
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Tooltip drawn as a rounded body with a tail pointing at its anchor.
///
/// The bold label line sits above the normal text line. Both are measured
/// on every layout, so the bubble always fits its content.
pub struct Tooltip {
    group: SharedGroup,
    layer: Option<Weak<RefCell<Layer>>>,
    visibility: Visibility,
    last_position: Point2D,
    text: String,
    label: String,
    style: TooltipStyle,
    measure: Box<dyn TextMeasure>,
}

impl Tooltip {
    /// Creates a hidden, unattached tooltip with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(TooltipStyle::default())
    }

    /// Creates a hidden tooltip bound to `layer`.
    #[must_use]
    pub fn with_layer(layer: &LayerHandle) -> Self {
        let mut tooltip = Self::new();
        tooltip.attach_to(Some(layer));
        tooltip
    }

    /// Creates a hidden, unattached tooltip with a custom style.
    #[must_use]
    pub fn with_style(style: TooltipStyle) -> Self {
        let mut group = Group::new(GroupKind::Tooltip);
        let unit = Point2D::new(1.0, 1.0);

        group.add(
            Rectangle::new(1.0, 1.0)
                .with_fill(style.fill)
                .with_corner_radius(style.corner_radius)
                .with_stroke(style.stroke, style.stroke_width)
                .with_shadow(style.shadow),
        );
        group.add(
            Triangle::new(unit, unit, unit)
                .with_fill(style.fill)
                .with_stroke(style.stroke, style.stroke_width)
                .with_shadow(style.shadow),
        );
        group.add(Triangle::new(unit, unit, unit).with_fill(style.fill));
        group.add(
            Text::new("", style.text_font())
                .with_fill(style.text_color)
                .with_align(TextAlign::Left)
                .with_baseline(TextBaseline::Middle),
        );
        group.add(
            Text::new("", style.label_font())
                .with_fill(style.text_color)
                .with_align(TextAlign::Left)
                .with_baseline(TextBaseline::Middle),
        );
        group.set_listening(false);

        Self {
            group: group.into_shared(),
            layer: None,
            visibility: Visibility::Hidden,
            last_position: Point2D::ORIGIN,
            text: String::new(),
            label: String::new(),
            style,
            measure: Box::new(MonospaceMetrics::default()),
        }
    }

    /// Replaces the text measurer used for layout.
    #[must_use]
    pub fn with_measurer(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    /// Rebinds the tooltip to another layer, or to none.
    ///
    /// While shown the group moves from the old layer to the new one. While
    /// hidden only the binding changes.
    pub fn attach_to(&mut self, layer: Option<&LayerHandle>) -> &mut Self {
        let same = match (&self.layer, layer) {
            (None, None) => true,
            (Some(current), Some(next)) => std::ptr::eq(current.as_ptr(), Rc::as_ptr(next)),
            _ => false,
        };
        if same {
            return self;
        }

        let shown = self.visibility.is_shown();
        let id = self.group.borrow().id();

        if shown {
            if let Some(old) = self.live_layer() {
                let mut old = old.borrow_mut();
                old.remove(id);
                old.batch();
            }
        }

        self.layer = layer.map(Rc::downgrade);

        if shown {
            if let Some(new) = self.live_layer() {
                let mut new = new.borrow_mut();
                new.add(&self.group);
                new.batch();
            }
        }

        tracing::debug!(group = id.raw(), attached = self.layer.is_some(), shown, "tooltip rebound");
        self
    }

    /// Shows the tooltip with its bottom-center at `(x, y)`.
    ///
    /// No-op if already shown; use [`Self::show_forced`] to re-layout.
    pub fn show(&mut self, x: f32, y: f32) -> &mut Self {
        self.show_with(x, y, false)
    }

    /// Shows the tooltip, re-laying it out even if already shown.
    pub fn show_forced(&mut self, x: f32, y: f32) -> &mut Self {
        self.show_with(x, y, true)
    }

    /// Lays out the bubble at `(x, y)` and puts it on top of its layer.
    ///
    /// Does nothing without a live layer, or if already shown and `force` is
    /// false.
    pub fn show_with(&mut self, x: f32, y: f32, force: bool) -> &mut Self {
        let Some(layer) = self.live_layer() else {
            return self;
        };
        if self.visibility.is_shown() && !force {
            return self;
        }

        let id = self.group.borrow().id();
        if self.visibility.is_shown() {
            let mut layer = layer.borrow_mut();
            layer.remove(id);
            layer.batch();
        }

        self.last_position = Point2D::new(x, y);
        self.visibility = Visibility::Shown;
        let bubble = self.layout();

        {
            let mut layer = layer.borrow_mut();
            layer.add(&self.group);
            layer.move_to_top(id);
            layer.batch();
        }

        tracing::debug!(
            group = id.raw(),
            x,
            y,
            width = bubble.body.width,
            height = bubble.body.height,
            "tooltip shown"
        );
        self
    }

    /// Takes the tooltip off its layer.
    pub fn hide(&mut self) -> &mut Self {
        let Some(layer) = self.live_layer() else {
            return self;
        };
        if !self.visibility.is_shown() {
            return self;
        }

        self.visibility = Visibility::Hidden;
        let id = self.group.borrow().id();
        {
            let mut layer = layer.borrow_mut();
            layer.remove(id);
            layer.batch();
        }

        tracing::debug!(group = id.raw(), "tooltip hidden");
        self
    }

    /// Replaces both lines; `None` clears a line.
    ///
    /// A shown tooltip is re-laid out at its last position.
    pub fn set_values(&mut self, text: Option<&str>, label: Option<&str>) -> &mut Self {
        text.unwrap_or_default().clone_into(&mut self.text);
        label.unwrap_or_default().clone_into(&mut self.label);

        if self.visibility.is_shown() {
            let Point2D { x, y } = self.last_position;
            self.show_forced(x, y);
        }
        self
    }

    /// Current visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns true while shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visibility.is_shown()
    }

    /// Anchor of the most recent layout.
    #[must_use]
    pub const fn last_position(&self) -> Point2D {
        self.last_position
    }

    /// Current text line.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current label line.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Style the shapes were built with.
    #[must_use]
    pub const fn style(&self) -> &TooltipStyle {
        &self.style
    }

    /// Bound layer, if it is still alive.
    #[must_use]
    pub fn layer(&self) -> Option<LayerHandle> {
        self.live_layer()
    }

    /// The tooltip's group.
    #[must_use]
    pub fn group(&self) -> &SharedGroup {
        &self.group
    }

    /// Snapshot of the body rectangle.
    #[must_use]
    pub fn body(&self) -> Option<Rectangle> {
        self.group.borrow().child(BODY).and_then(Primitive::as_rectangle).cloned()
    }

    /// Snapshot of the tail triangle.
    #[must_use]
    pub fn tail(&self) -> Option<Triangle> {
        self.group.borrow().child(TAIL).and_then(Primitive::as_triangle).cloned()
    }

    /// Snapshot of the seam mask triangle.
    #[must_use]
    pub fn mask(&self) -> Option<Triangle> {
        self.group.borrow().child(MASK).and_then(Primitive::as_triangle).cloned()
    }

    /// Snapshot of the text line shape.
    #[must_use]
    pub fn text_shape(&self) -> Option<Text> {
        self.group.borrow().child(TEXT).and_then(Primitive::as_text).cloned()
    }

    /// Snapshot of the label line shape.
    #[must_use]
    pub fn label_shape(&self) -> Option<Text> {
        self.group.borrow().child(LABEL).and_then(Primitive::as_text).cloned()
    }

    /// Body rectangle in layer coordinates.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let group = self.group.borrow();
        group
            .child(BODY)
            .and_then(Primitive::as_rectangle)
            .map(|body| body.bounds().translate(group.x, group.y))
    }

    fn live_layer(&self) -> Option<LayerHandle> {
        self.layer.as_ref().and_then(Weak::upgrade)
    }

    /// Pushes the current values into the shapes and resizes everything.
    fn layout(&self) -> BubbleLayout {
        let mut group = self.group.borrow_mut();
        let measure = self.measure.as_ref();

        let text_box = Self::set_line(&mut group, TEXT, &self.text, measure);
        let label_box = Self::set_line(&mut group, LABEL, &self.label, measure);

        let body_origin = group
            .child(BODY)
            .and_then(Primitive::as_rectangle)
            .map_or(Point2D::ORIGIN, |body| Point2D::new(body.x, body.y));

        let bubble = BubbleLayout::compute(
            &self.style,
            self.last_position,
            body_origin,
            text_box,
            label_box,
        );

        if let Some(body) = group.child_mut(BODY).and_then(Primitive::as_rectangle_mut) {
            body.set_size(bubble.body.width, bubble.body.height);
            body.corner_radius = self.style.corner_radius;
        }
        if let Some(tail) = group.child_mut(TAIL).and_then(Primitive::as_triangle_mut) {
            let [a, b, c] = bubble.tail;
            tail.set_points(a, b, c);
        }
        if let Some(mask) = group.child_mut(MASK).and_then(Primitive::as_triangle_mut) {
            let [a, b, c] = bubble.mask;
            mask.set_points(a, b, c);
        }
        if let Some(text) = group.child_mut(TEXT).and_then(Primitive::as_text_mut) {
            text.set_position(bubble.text_position.x, bubble.text_position.y);
        }
        if let Some(label) = group.child_mut(LABEL).and_then(Primitive::as_text_mut) {
            label.set_position(bubble.label_position.x, bubble.label_position.y);
        }
        group.set_position(bubble.origin.x, bubble.origin.y);

        tracing::trace!(?bubble, "tooltip laid out");
        bubble
    }

    fn set_line(group: &mut Group, index: usize, value: &str, measure: &dyn TextMeasure) -> BoundingBox {
        group
            .child_mut(index)
            .and_then(Primitive::as_text_mut)
            .map_or(BoundingBox::EMPTY, |line| {
                line.set_content(value);
                line.bounding_box(measure)
            })
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tooltip")
            .field("group", &self.group.borrow().id())
            .field("attached", &self.live_layer().is_some())
            .field("visibility", &self.visibility)
            .field("last_position", &self.last_position)
            .field("text", &self.text)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_scene::FixedMetrics;

    fn attached() -> (LayerHandle, Tooltip) {
        let layer = Layer::shared();
        let tooltip = Tooltip::with_layer(&layer).with_measurer(FixedMetrics::new(40.0, 12.0));
        (layer, tooltip)
    }

    fn group_id(tooltip: &Tooltip) -> vellum_scene::NodeId {
        tooltip.group().borrow().id()
    }

    #[test]
    fn test_starts_hidden_and_off_layer() {
        let (layer, tooltip) = attached();

        assert_eq!(tooltip.visibility(), Visibility::Hidden);
        assert!(layer.borrow().is_empty());
        assert_eq!(layer.borrow().batch_count(), 0);
        assert!(!tooltip.group().borrow().is_listening());
        assert_eq!(tooltip.group().borrow().kind(), GroupKind::Tooltip);
        assert_eq!(tooltip.group().borrow().len(), 5);
    }

    #[test]
    fn test_unattached_show_is_noop() {
        let mut tooltip = Tooltip::new();
        tooltip.show(100.0, 50.0);

        assert!(!tooltip.is_visible());
        assert!(tooltip.layer().is_none());
    }

    #[test]
    fn test_second_unforced_show_changes_nothing() {
        let (layer, mut tooltip) = attached();
        tooltip.set_values(Some("a"), Some("b")).show(100.0, 50.0);
        let batches = layer.borrow().batch_count();
        let bounds = tooltip.bounds();

        tooltip.show(300.0, 300.0);

        assert_eq!(layer.borrow().batch_count(), batches);
        assert_eq!(tooltip.bounds(), bounds);
        assert_eq!(tooltip.last_position(), Point2D::new(100.0, 50.0));
    }

    #[test]
    fn test_forced_show_moves_bubble() {
        let (layer, mut tooltip) = attached();
        tooltip.show(100.0, 50.0);
        tooltip.show_forced(200.0, 80.0);

        let bounds = tooltip.bounds().unwrap();
        assert_eq!(bounds.center().x, 200.0);
        assert_eq!(bounds.bottom(), 80.0);
        assert_eq!(layer.borrow().len(), 1);
        // show, then remove + show
        assert_eq!(layer.borrow().batch_count(), 3);
    }

    #[test]
    fn test_hide_twice_batches_once() {
        let (layer, mut tooltip) = attached();
        tooltip.show(10.0, 10.0);
        tooltip.hide().hide();

        assert!(!layer.borrow().contains(group_id(&tooltip)));
        assert_eq!(layer.borrow().batch_count(), 2);
    }

    #[test]
    fn test_set_values_relayouts_when_shown() {
        let (_layer, mut tooltip) = attached();
        tooltip.show(100.0, 50.0);
        assert_eq!(tooltip.body().unwrap().width, 25.0);

        tooltip.set_values(Some("value"), None);

        let body = tooltip.body().unwrap();
        assert_eq!(body.width, 65.0);
        assert_eq!(body.height, 39.0);
        assert_eq!(tooltip.text_shape().unwrap().content, "value");
        assert_eq!(tooltip.label_shape().unwrap().content, "");
    }

    #[test]
    fn test_set_values_while_hidden_only_stores() {
        let (layer, mut tooltip) = attached();
        tooltip.set_values(Some("x"), Some("y"));

        assert_eq!((tooltip.text(), tooltip.label()), ("x", "y"));
        assert!(!tooltip.is_visible());
        assert_eq!(layer.borrow().batch_count(), 0);
        assert_eq!(tooltip.text_shape().unwrap().content, "");
    }

    #[test]
    fn test_show_raises_above_siblings() {
        let (layer, mut tooltip) = attached();
        let other = Group::new(GroupKind::Generic).into_shared();

        tooltip.show(0.0, 0.0);
        layer.borrow_mut().add(&other);
        tooltip.show_forced(5.0, 5.0);

        assert_eq!(layer.borrow().index_of(group_id(&tooltip)), Some(1));
    }

    #[test]
    fn test_dropped_layer_detaches() {
        let (layer, mut tooltip) = attached();
        drop(layer);

        tooltip.show(1.0, 1.0);
        assert!(!tooltip.is_visible());
        assert!(tooltip.layer().is_none());
    }
}
