use crate::dom_utils::outline_from_dom;
use crate::node::{Id, NodeId, NodeKind, NodeRef};
use std::cell::{Cell, RefCell};
use std::sync::Arc;

/// Owner of a node tree.
///
/// The document holds the root and hands out counted [`NodeRef`] handles.
/// It also tracks which node currently has input focus.
#[derive(Debug)]
pub struct Document {
    root: NodeRef,
    next_id: Cell<NodeId>,
    focus: RefCell<Option<NodeRef>>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            root: NodeRef::new(Id(1), NodeKind::Document),
            next_id: Cell::new(2),
            focus: RefCell::new(None),
        }
    }

    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    fn alloc_id(&self) -> Id {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        Id(id)
    }

    pub fn create_element(&self, name: &str) -> NodeRef {
        NodeRef::new(
            self.alloc_id(),
            NodeKind::Element {
                name: Arc::from(name.to_ascii_lowercase()),
            },
        )
    }

    pub fn create_text(&self, text: impl Into<String>) -> NodeRef {
        NodeRef::new(self.alloc_id(), NodeKind::Text { text: text.into() })
    }

    pub fn create_comment(&self, text: impl Into<String>) -> NodeRef {
        NodeRef::new(self.alloc_id(), NodeKind::Comment { text: text.into() })
    }

    /// True if `node` is attached to this document's tree.
    pub fn is_connected(&self, node: &NodeRef) -> bool {
        self.root.contains(node)
    }

    pub fn focus_node(&self) -> Option<NodeRef> {
        self.focus.borrow().clone()
    }

    pub fn set_focus_node(&self, node: Option<NodeRef>) {
        *self.focus.borrow_mut() = node;
    }

    /// Indented one-node-per-line dump of the tree, for logs and tests.
    pub fn outline(&self) -> String {
        outline_from_dom(&self.root, usize::MAX).join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
