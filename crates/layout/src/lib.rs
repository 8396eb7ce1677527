//! Layout queries consumed by the editing core, plus a small flow layout
//! that answers them for a plain document tree.

use dom::NodeRef;

mod flow;
mod text;

pub use flow::FlowLayout;
pub use text::{FixedAdvance, TextMeasurer};

/// A rectangle in CSS px units (we'll treat everything as px for now).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// What the editing core needs to know from the render tree.
pub trait LayoutQuery {
    /// Whether the node has a box the layout engine can place on screen.
    fn has_renderer(&self, node: &NodeRef) -> bool;

    /// Caret geometry at `offset` inside `node`, or `None` if the node is not
    /// rendered.
    fn caret_rect(&self, node: &NodeRef, offset: usize) -> Option<Rect>;

    /// Mark the node's box for relayout after a mutation.
    fn set_needs_layout(&mut self, node: &NodeRef);
}
