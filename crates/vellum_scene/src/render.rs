//! Render command recording.
//!
//! Layers draw into a [`SceneRenderer`], which records commands for a
//! backend to replay. Shape coordinates stay group-local; groups wrap their
//! children in a translate push/pop pair.

use crate::geometry::{Point2D, Rect};
use crate::style::{Color, Font, Shadow, TextAlign, TextBaseline};

/// A render command for the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle with optional rounded corners.
    RoundedRect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        fill: Color,
        /// Stroke color, if stroked.
        stroke: Option<Color>,
        /// Stroke width.
        stroke_width: f32,
        /// Corner radius.
        corner_radius: f32,
        /// Drop shadow.
        shadow: Option<Shadow>,
    },
    /// Filled closed polygon.
    Polygon {
        /// Vertices in drawing order.
        points: Vec<Point2D>,
        /// Fill color.
        fill: Color,
        /// Stroke color, if stroked.
        stroke: Option<Color>,
        /// Stroke width.
        stroke_width: f32,
        /// Drop shadow.
        shadow: Option<Shadow>,
    },
    /// Text run.
    Text {
        /// Text content.
        text: String,
        /// Anchor X position.
        x: f32,
        /// Anchor Y position.
        y: f32,
        /// Font.
        font: Font,
        /// Fill color.
        color: Color,
        /// Horizontal anchoring.
        align: TextAlign,
        /// Vertical anchoring.
        baseline: TextBaseline,
    },
    /// Offset every following command until the matching pop.
    PushTranslate {
        /// X offset.
        dx: f32,
        /// Y offset.
        dy: f32,
    },
    /// Pop translation.
    PopTranslate,
}

/// A batch of render commands submitted together.
#[derive(Debug, Clone, Default)]
pub struct RenderBatch {
    /// Commands in this batch.
    pub commands: Vec<RenderCommand>,
}

/// Renderer that collects commands for one frame.
pub struct SceneRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Accumulated translations.
    translate_stack: Vec<Point2D>,
    /// Final batches for rendering.
    batches: Vec<RenderBatch>,
}

impl SceneRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
            translate_stack: Vec::with_capacity(8),
            batches: Vec::with_capacity(1),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.translate_stack.clear();
        self.batches.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Pushes a translation on top of the current one.
    pub fn push_translate(&mut self, dx: f32, dy: f32) {
        let total = self.current_offset().offset(dx, dy);
        self.translate_stack.push(total);
        self.commands.push(RenderCommand::PushTranslate { dx, dy });
    }

    /// Pops the current translation.
    pub fn pop_translate(&mut self) {
        self.translate_stack.pop();
        self.commands.push(RenderCommand::PopTranslate);
    }

    /// Returns the accumulated translation.
    #[must_use]
    pub fn current_offset(&self) -> Point2D {
        self.translate_stack.last().copied().unwrap_or(Point2D::ORIGIN)
    }

    /// Ends the frame and returns batches for rendering.
    pub fn end_frame(&mut self) -> &[RenderBatch] {
        let batch = RenderBatch {
            commands: std::mem::take(&mut self.commands),
        };

        self.translate_stack.clear();
        self.batches.clear();
        self.batches.push(batch);

        &self.batches
    }

    /// Returns the number of commands recorded so far this frame.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}
