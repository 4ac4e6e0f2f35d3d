//! Widget system.
//!
//! Widgets own a group of scene shapes and put it on a layer while visible.

mod bubble;
mod tooltip;

pub use bubble::BubbleLayout;
pub use tooltip::{Tooltip, Visibility, TRIANGLE_SIZE};
