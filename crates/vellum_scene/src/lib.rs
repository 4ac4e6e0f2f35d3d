//! # Vellum Scene
//!
//! Retained 2D scene primitives that widgets are composed from:
//! - Shapes (rounded rectangles, triangles, text)
//! - Groups that position a set of shapes as a unit
//! - Layers that own the stacking order and collect redraw requests
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    SCENE PIPELINE                     │
//! ├──────────────────────────────────────────────────────┤
//! │  Shapes → Group → Layer ──batch()──→ draw()          │
//! │                     ↓                   ↓            │
//! │              stacking order     Render Commands      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here runs on the UI thread. Shared nodes are
//! `Rc<RefCell<_>>`; a layer and the widget that built a group both hold
//! the same group handle.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod geometry;
pub mod group;
pub mod layer;
pub mod node;
pub mod render;
pub mod shape;
pub mod style;
pub mod text;

pub use error::{SceneError, SceneResult};
pub use geometry::{BoundingBox, Point2D, Rect};
pub use group::{Group, GroupKind, SharedGroup};
pub use layer::{Layer, LayerHandle};
pub use node::NodeId;
pub use render::{RenderBatch, RenderCommand, SceneRenderer};
pub use shape::{Primitive, Rectangle, Text, Triangle};
pub use style::{Color, Font, FontStyle, Shadow, TextAlign, TextBaseline};
pub use text::{FixedMetrics, MonospaceMetrics, TextMeasure};
