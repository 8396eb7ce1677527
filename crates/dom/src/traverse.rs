use crate::NodeRef;

impl NodeRef {
    /// Next node in pre-order, descending into children first.
    pub fn next_in_order(&self) -> Option<NodeRef> {
        if let Some(child) = self.first_child() {
            return Some(child);
        }
        let mut current = self.clone();
        loop {
            if let Some(sibling) = current.next_sibling() {
                return Some(sibling);
            }
            current = current.parent()?;
        }
    }

    /// Previous node in pre-order: the deepest last descendant of the
    /// previous sibling, or the parent.
    pub fn previous_in_order(&self) -> Option<NodeRef> {
        match self.previous_sibling() {
            Some(sibling) => Some(sibling.last_descendant()),
            None => self.parent(),
        }
    }

    pub fn last_descendant(&self) -> NodeRef {
        let mut current = self.clone();
        while let Some(child) = current.last_child() {
            current = child;
        }
        current
    }

    /// Next childless node after this one in document order.
    pub fn next_leaf(&self) -> Option<NodeRef> {
        let mut current = self.next_in_order();
        while let Some(node) = current {
            if !node.has_children() {
                return Some(node);
            }
            current = node.next_in_order();
        }
        None
    }

    /// Previous childless node before this one in document order.
    pub fn previous_leaf(&self) -> Option<NodeRef> {
        let mut current = self.previous_in_order();
        while let Some(node) = current {
            if !node.has_children() {
                return Some(node);
            }
            current = node.previous_in_order();
        }
        None
    }
}
