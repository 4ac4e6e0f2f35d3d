//! Groups: ordered shape containers positioned as a unit.

use std::cell::RefCell;
use std::rc::Rc;

use crate::node::NodeId;
use crate::render::SceneRenderer;
use crate::shape::Primitive;

/// Group handle shared between a layer and the widget that owns the group.
pub type SharedGroup = Rc<RefCell<Group>>;

/// What a group represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupKind {
    /// Plain container.
    #[default]
    Generic,
    /// Tooltip bubble.
    Tooltip,
}

/// Ordered list of shapes drawn with a shared offset.
#[derive(Debug, Clone)]
pub struct Group {
    id: NodeId,
    kind: GroupKind,
    /// Offset applied to every child.
    pub x: f32,
    /// Offset applied to every child.
    pub y: f32,
    listening: bool,
    children: Vec<Primitive>,
}

impl Group {
    /// Creates an empty group at the origin.
    #[must_use]
    pub fn new(kind: GroupKind) -> Self {
        Self {
            id: NodeId::next(),
            kind,
            x: 0.0,
            y: 0.0,
            listening: true,
            children: Vec::with_capacity(8),
        }
    }

    /// Wraps the group in a shared handle.
    #[must_use]
    pub fn into_shared(self) -> SharedGroup {
        Rc::new(RefCell::new(self))
    }

    /// Returns the node ID.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the group kind.
    #[must_use]
    pub const fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Appends a child; returns its index.
    pub fn add(&mut self, child: impl Into<Primitive>) -> usize {
        self.children.push(child.into());
        self.children.len() - 1
    }

    /// Returns the child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&Primitive> {
        self.children.get(index)
    }

    /// Returns the child at `index` mutably.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Primitive> {
        self.children.get_mut(index)
    }

    /// Children in drawing order.
    #[must_use]
    pub fn children(&self) -> &[Primitive] {
        &self.children
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Moves the group.
    pub fn set_position(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Includes or excludes the group from hit-testing.
    pub fn set_listening(&mut self, listening: bool) -> &mut Self {
        self.listening = listening;
        self
    }

    /// Returns true if the group takes part in hit-testing.
    #[must_use]
    pub const fn is_listening(&self) -> bool {
        self.listening
    }

    /// Records the group's children, offset by the group position.
    pub fn draw(&self, renderer: &mut SceneRenderer) {
        renderer.push_translate(self.x, self.y);
        for child in &self.children {
            child.emit(renderer);
        }
        renderer.pop_translate();
    }
}
