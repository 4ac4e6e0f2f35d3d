//! # Vellum UI
//!
//! Widgets built from [`vellum_scene`] primitives.
//!
//! ## Tooltip
//!
//! A speech bubble: rounded body, a tail pointing down at the anchor, a
//! bold label line and a normal text line. It sizes itself from the
//! measured text every time it is shown and appears on its layer only
//! while shown.
//!
//! ```rust,ignore
//! use vellum_scene::Layer;
//! use vellum_ui::Tooltip;
//!
//! let layer = Layer::shared();
//! let mut tip = Tooltip::with_layer(&layer);
//! tip.set_values(Some("42.0 ms"), Some("Frame time")).show(120.0, 80.0);
//! // ... later
//! tip.hide();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod widget;

pub use config::TooltipStyle;
pub use error::{UiError, UiResult};
pub use widget::{BubbleLayout, Tooltip, Visibility, TRIANGLE_SIZE};
