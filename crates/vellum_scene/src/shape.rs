//! Shape primitives.
//!
//! Coordinates are local to the group that holds the shape.

use crate::geometry::{BoundingBox, Point2D, Rect};
use crate::render::{RenderCommand, SceneRenderer};
use crate::style::{Color, Font, Shadow, TextAlign, TextBaseline};
use crate::text::TextMeasure;

/// Rectangle with optionally rounded corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
    /// Corner radius (0 = square).
    pub corner_radius: f32,
    /// Fill color.
    pub fill: Color,
    /// Stroke color; `None` draws no outline.
    pub stroke: Option<Color>,
    /// Stroke width.
    pub stroke_width: f32,
    /// Drop shadow.
    pub shadow: Option<Shadow>,
}

impl Rectangle {
    /// Creates a black rectangle at the origin.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            corner_radius: 0.0,
            fill: Color::BLACK,
            stroke: None,
            stroke_width: 1.0,
            shadow: None,
        }
    }

    /// Sets the fill color.
    #[must_use]
    pub const fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the corner radius.
    #[must_use]
    pub const fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the stroke.
    #[must_use]
    pub const fn with_stroke(mut self, stroke: Option<Color>, width: f32) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }

    /// Sets the drop shadow.
    #[must_use]
    pub const fn with_shadow(mut self, shadow: Option<Shadow>) -> Self {
        self.shadow = shadow;
        self
    }

    /// Resizes the rectangle, keeping its position.
    pub fn set_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Local bounds.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn emit(&self, renderer: &mut SceneRenderer) {
        renderer.push(RenderCommand::RoundedRect {
            bounds: self.bounds(),
            fill: self.fill,
            stroke: self.stroke,
            stroke_width: self.stroke_width,
            corner_radius: self.corner_radius,
            shadow: self.shadow,
        });
    }
}

/// Filled triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices.
    pub points: [Point2D; 3],
    /// Fill color.
    pub fill: Color,
    /// Stroke color; `None` draws no outline.
    pub stroke: Option<Color>,
    /// Stroke width (0 = no stroke).
    pub stroke_width: f32,
    /// Drop shadow.
    pub shadow: Option<Shadow>,
}

impl Triangle {
    /// Creates a black, unstroked triangle.
    #[must_use]
    pub const fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self {
            points: [a, b, c],
            fill: Color::BLACK,
            stroke: None,
            stroke_width: 0.0,
            shadow: None,
        }
    }

    /// Sets the fill color.
    #[must_use]
    pub const fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the stroke.
    #[must_use]
    pub const fn with_stroke(mut self, stroke: Option<Color>, width: f32) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }

    /// Sets the drop shadow.
    #[must_use]
    pub const fn with_shadow(mut self, shadow: Option<Shadow>) -> Self {
        self.shadow = shadow;
        self
    }

    /// Replaces all three vertices.
    pub fn set_points(&mut self, a: Point2D, b: Point2D, c: Point2D) -> &mut Self {
        self.points = [a, b, c];
        self
    }

    fn emit(&self, renderer: &mut SceneRenderer) {
        renderer.push(RenderCommand::Polygon {
            points: self.points.to_vec(),
            fill: self.fill,
            stroke: self.stroke,
            stroke_width: self.stroke_width,
            shadow: self.shadow,
        });
    }
}

/// Single text run.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Content.
    pub content: String,
    /// Anchor X position.
    pub x: f32,
    /// Anchor Y position.
    pub y: f32,
    /// Font.
    pub font: Font,
    /// Fill color.
    pub fill: Color,
    /// Horizontal anchoring.
    pub align: TextAlign,
    /// Vertical anchoring.
    pub baseline: TextBaseline,
}

impl Text {
    /// Creates black, left/alphabetic-anchored text at the origin.
    #[must_use]
    pub fn new(content: impl Into<String>, font: Font) -> Self {
        Self {
            content: content.into(),
            x: 0.0,
            y: 0.0,
            font,
            fill: Color::BLACK,
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
        }
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets horizontal anchoring.
    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Sets vertical anchoring.
    #[must_use]
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Replaces the content.
    pub fn set_content(&mut self, content: &str) -> &mut Self {
        content.clone_into(&mut self.content);
        self
    }

    /// Moves the anchor point.
    pub fn set_position(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Bounding box relative to the anchor point.
    ///
    /// Width and height come from `measure`; the box is shifted according to
    /// the alignment and baseline.
    #[must_use]
    pub fn bounding_box(&self, measure: &dyn TextMeasure) -> BoundingBox {
        let size = measure.measure(&self.content, &self.font);
        let (w, h) = (size.width(), size.height());

        let min_x = match self.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -w * 0.5,
            TextAlign::Right => -w,
        };
        let min_y = match self.baseline {
            TextBaseline::Top => 0.0,
            TextBaseline::Middle => -h * 0.5,
            TextBaseline::Alphabetic | TextBaseline::Bottom => -h,
        };

        BoundingBox {
            min_x,
            min_y,
            max_x: min_x + w,
            max_y: min_y + h,
        }
    }

    fn emit(&self, renderer: &mut SceneRenderer) {
        if self.content.is_empty() {
            return;
        }
        renderer.push(RenderCommand::Text {
            text: self.content.clone(),
            x: self.x,
            y: self.y,
            font: self.font.clone(),
            color: self.fill,
            align: self.align,
            baseline: self.baseline,
        });
    }
}

/// Any shape a group can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Rectangle.
    Rectangle(Rectangle),
    /// Triangle.
    Triangle(Triangle),
    /// Text.
    Text(Text),
}

impl Primitive {
    /// Returns the rectangle, if this is one.
    #[must_use]
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Self::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the rectangle mutably, if this is one.
    pub fn as_rectangle_mut(&mut self) -> Option<&mut Rectangle> {
        match self {
            Self::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the triangle, if this is one.
    #[must_use]
    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Self::Triangle(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the triangle mutably, if this is one.
    pub fn as_triangle_mut(&mut self) -> Option<&mut Triangle> {
        match self {
            Self::Triangle(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the text, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the text mutably, if this is one.
    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Records the draw command for this shape.
    pub fn emit(&self, renderer: &mut SceneRenderer) {
        match self {
            Self::Rectangle(r) => r.emit(renderer),
            Self::Triangle(t) => t.emit(renderer),
            Self::Text(t) => t.emit(renderer),
        }
    }
}

impl From<Rectangle> for Primitive {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Self::Triangle(t)
    }
}

impl From<Text> for Primitive {
    fn from(t: Text) -> Self {
        Self::Text(t)
    }
}
