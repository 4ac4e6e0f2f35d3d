//! Layers: the redrawable surface groups are stacked on.
//!
//! A layer owns the stacking order of its groups and counts redraw
//! requests. `batch()` only marks the layer dirty; the host loop decides
//! when to call [`Layer::draw`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::group::SharedGroup;
use crate::node::NodeId;
use crate::render::SceneRenderer;

/// Layer handle passed to widgets. Widgets keep a weak reference.
pub type LayerHandle = Rc<RefCell<Layer>>;

/// Ordered set of groups drawn back to front.
#[derive(Debug)]
pub struct Layer {
    id: NodeId,
    /// Back-to-front; the last entry is on top.
    children: Vec<SharedGroup>,
    dirty: bool,
    batch_count: u64,
}

impl Layer {
    /// Creates an empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NodeId::next(),
            children: Vec::with_capacity(16),
            dirty: false,
            batch_count: 0,
        }
    }

    /// Creates an empty layer behind a shared handle.
    #[must_use]
    pub fn shared() -> LayerHandle {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Returns the node ID.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Adds a group on top of the stack.
    ///
    /// A group already on this layer is moved to the top instead of being
    /// added twice.
    pub fn add(&mut self, group: &SharedGroup) {
        let id = group.borrow().id();
        if let Some(index) = self.index_of(id) {
            self.children.remove(index);
        }
        self.children.push(Rc::clone(group));
        tracing::trace!(layer = self.id.raw(), group = id.raw(), "group added");
    }

    /// Removes a group. Returns false if it was not on this layer.
    pub fn remove(&mut self, id: NodeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.children.remove(index);
        tracing::trace!(layer = self.id.raw(), group = id.raw(), "group removed");
        true
    }

    /// Returns true if the group is on this layer.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.index_of(id).is_some()
    }

    /// Stacking position of a group (0 = bottom).
    #[must_use]
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.children.iter().position(|g| g.borrow().id() == id)
    }

    /// Raises a group above all its siblings. Returns false if absent.
    pub fn move_to_top(&mut self, id: NodeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let group = self.children.remove(index);
        self.children.push(group);
        true
    }

    /// Groups back to front.
    #[must_use]
    pub fn children(&self) -> &[SharedGroup] {
        &self.children
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if no groups are on the layer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Requests a redraw.
    pub fn batch(&mut self) {
        self.dirty = true;
        self.batch_count += 1;
        tracing::trace!(layer = self.id.raw(), requests = self.batch_count, "redraw requested");
    }

    /// Total redraw requests since creation.
    #[must_use]
    pub const fn batch_count(&self) -> u64 {
        self.batch_count
    }

    /// Returns true if a redraw was requested since the last draw.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records every group back to front and clears the dirty flag.
    pub fn draw(&mut self, renderer: &mut SceneRenderer) {
        for group in &self.children {
            group.borrow().draw(renderer);
        }
        self.dirty = false;
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}
