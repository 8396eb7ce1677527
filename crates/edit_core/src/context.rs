use crate::host::FrameHost;
use dom::{Document, NodeRef};
use layout::LayoutQuery;

/// Borrowed view of everything a caret, selection or command touches while
/// handling one event.
pub struct EditContext<'a> {
    pub document: &'a Document,
    pub layout: &'a mut dyn LayoutQuery,
    pub host: &'a mut dyn FrameHost,
}

impl<'a> EditContext<'a> {
    pub fn new(
        document: &'a Document,
        layout: &'a mut dyn LayoutQuery,
        host: &'a mut dyn FrameHost,
    ) -> Self {
        Self {
            document,
            layout,
            host,
        }
    }

    /// Mark `node` dirty and ask layout to recompute its box.
    pub fn notify_changed(&mut self, node: &NodeRef) {
        node.set_changed(true);
        self.layout.set_needs_layout(node);
    }

    /// Mark every node from `start` through `end` in document order.
    pub fn notify_range_changed(&mut self, start: &NodeRef, end: &NodeRef) {
        let mut current = Some(start.clone());
        while let Some(node) = current {
            self.notify_changed(&node);
            if node.ptr_eq(end) {
                break;
            }
            current = node.next_in_order();
        }
    }

    /// Detach `node` from the tree after marking its parent dirty. No-op for
    /// a node that is already detached.
    pub fn remove_node(&mut self, node: &NodeRef) {
        let Some(parent) = node.parent() else {
            return;
        };
        self.notify_changed(&parent);
        node.remove();
    }
}
