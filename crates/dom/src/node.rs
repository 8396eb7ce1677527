use crate::error::DomError;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::rc::{Rc, Weak};
use std::sync::Arc;

pub type NodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub NodeId);

#[derive(Debug)]
pub enum NodeKind {
    Document,
    Element { name: Arc<str> },
    Text { text: String },
    Comment { text: String },
}

struct NodeData {
    id: Id,
    kind: RefCell<NodeKind>,
    parent: RefCell<Weak<NodeData>>,
    children: RefCell<Vec<NodeRef>>,
    changed: Cell<bool>,
}

/// Strong, counted handle to a node.
///
/// Cloning a `NodeRef` acquires another reference and dropping it releases
/// one; a node stays alive while the document tree or any editing position
/// still holds it. Parent links are weak so the tree never forms a cycle.
///
/// Equality and hashing are by identity, not by content.
#[derive(Clone)]
pub struct NodeRef(Rc<NodeData>);

impl NodeRef {
    pub(crate) fn new(id: Id, kind: NodeKind) -> Self {
        NodeRef(Rc::new(NodeData {
            id,
            kind: RefCell::new(kind),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            changed: Cell::new(false),
        }))
    }

    pub fn id(&self) -> Id {
        self.0.id
    }

    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of strong handles currently held on this node.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    pub fn is_document(&self) -> bool {
        matches!(*self.0.kind.borrow(), NodeKind::Document)
    }

    pub fn is_element(&self) -> bool {
        matches!(*self.0.kind.borrow(), NodeKind::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(*self.0.kind.borrow(), NodeKind::Text { .. })
    }

    pub fn is_comment(&self) -> bool {
        matches!(*self.0.kind.borrow(), NodeKind::Comment { .. })
    }

    pub fn is_element_named(&self, target: &str) -> bool {
        match &*self.0.kind.borrow() {
            NodeKind::Element { name, .. } => name.eq_ignore_ascii_case(target),
            _ => false,
        }
    }

    pub fn element_name(&self) -> Option<Arc<str>> {
        match &*self.0.kind.borrow() {
            NodeKind::Element { name } => Some(Arc::clone(name)),
            _ => None,
        }
    }

    pub fn is_line_break(&self) -> bool {
        self.is_element_named("br")
    }

    // ---------------------------------------------------------------------
    // Character data
    // ---------------------------------------------------------------------

    /// Runs `f` over the node's character data. `None` for element and
    /// document nodes.
    pub fn with_text<R>(&self, f: impl FnOnce(&str) -> R) -> Option<R> {
        match &*self.0.kind.borrow() {
            NodeKind::Text { text } | NodeKind::Comment { text } => Some(f(text)),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<String> {
        self.with_text(str::to_owned)
    }

    /// Length in bytes of a text node's data; 0 for anything else.
    pub fn text_len(&self) -> usize {
        match &*self.0.kind.borrow() {
            NodeKind::Text { text } => text.len(),
            _ => 0,
        }
    }

    pub fn caret_min_offset(&self) -> usize {
        0
    }

    /// Last valid caret offset. Only text nodes have addressable positions
    /// past 0.
    pub fn caret_max_offset(&self) -> usize {
        self.text_len()
    }

    pub fn insert_data(&self, offset: usize, data: &str) -> Result<(), DomError> {
        let mut kind = self.0.kind.borrow_mut();
        let NodeKind::Text { text } = &mut *kind else {
            return Err(DomError::NotText(self.id()));
        };
        checked_range(text, offset, 0)?;
        text.insert_str(offset, data);
        Ok(())
    }

    /// Removes up to `count` bytes starting at `offset`. A count running past
    /// the end is clamped, like the DOM's `deleteData`.
    pub fn delete_data(&self, offset: usize, count: usize) -> Result<(), DomError> {
        let mut kind = self.0.kind.borrow_mut();
        let NodeKind::Text { text } = &mut *kind else {
            return Err(DomError::NotText(self.id()));
        };
        let range = checked_range(text, offset, count)?;
        text.replace_range(range, "");
        Ok(())
    }

    pub fn substring_data(&self, offset: usize, count: usize) -> Result<String, DomError> {
        let kind = self.0.kind.borrow();
        let NodeKind::Text { text } = &*kind else {
            return Err(DomError::NotText(self.id()));
        };
        let range = checked_range(text, offset, count)?;
        Ok(text[range].to_owned())
    }

    pub fn set_text(&self, data: &str) -> Result<(), DomError> {
        let mut kind = self.0.kind.borrow_mut();
        match &mut *kind {
            NodeKind::Text { text } => {
                text.clear();
                text.push_str(data);
                Ok(())
            }
            _ => Err(DomError::NotText(self.id())),
        }
    }

    // ---------------------------------------------------------------------
    // Dirty tracking
    // ---------------------------------------------------------------------

    pub fn is_changed(&self) -> bool {
        self.0.changed.get()
    }

    pub fn set_changed(&self, changed: bool) {
        self.0.changed.set(changed);
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    pub fn parent(&self) -> Option<NodeRef> {
        self.0.parent.borrow().upgrade().map(NodeRef)
    }

    pub fn first_child(&self) -> Option<NodeRef> {
        self.0.children.borrow().first().cloned()
    }

    pub fn last_child(&self) -> Option<NodeRef> {
        self.0.children.borrow().last().cloned()
    }

    pub fn has_children(&self) -> bool {
        !self.0.children.borrow().is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.0.children.borrow().len()
    }

    pub fn children(&self) -> Vec<NodeRef> {
        self.0.children.borrow().clone()
    }

    pub fn index_in_parent(&self) -> Option<usize> {
        let parent = self.parent()?;
        let siblings = parent.0.children.borrow();
        siblings.iter().position(|c| c.ptr_eq(self))
    }

    pub fn next_sibling(&self) -> Option<NodeRef> {
        let parent = self.parent()?;
        let siblings = parent.0.children.borrow();
        let index = siblings.iter().position(|c| c.ptr_eq(self))?;
        siblings.get(index + 1).cloned()
    }

    pub fn previous_sibling(&self) -> Option<NodeRef> {
        let parent = self.parent()?;
        let siblings = parent.0.children.borrow();
        let index = siblings.iter().position(|c| c.ptr_eq(self))?;
        index.checked_sub(1).and_then(|i| siblings.get(i).cloned())
    }

    /// True if `other` is this node or one of its descendants.
    pub fn contains(&self, other: &NodeRef) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node.ptr_eq(self) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Number of ancestors between this node and its root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(node) = current {
            depth += 1;
            current = node.parent();
        }
        depth
    }

    pub fn root(&self) -> NodeRef {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    pub fn append_child(&self, child: &NodeRef) -> Result<(), DomError> {
        self.check_insertable(child)?;
        child.remove();
        self.0.children.borrow_mut().push(child.clone());
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        Ok(())
    }

    /// Inserts `child` before `reference`, or appends when `reference` is
    /// `None`. A child that already has a parent is moved.
    pub fn insert_before(
        &self,
        child: &NodeRef,
        reference: Option<&NodeRef>,
    ) -> Result<(), DomError> {
        let Some(reference) = reference else {
            return self.append_child(child);
        };
        if child.ptr_eq(reference) {
            return Ok(());
        }
        self.check_insertable(child)?;
        if !reference.parent().is_some_and(|p| p.ptr_eq(self)) {
            return Err(DomError::NotAChild {
                parent: self.id(),
                child: reference.id(),
            });
        }
        child.remove();
        let mut siblings = self.0.children.borrow_mut();
        let index = siblings
            .iter()
            .position(|c| c.ptr_eq(reference))
            .ok_or(DomError::NotAChild {
                parent: self.id(),
                child: reference.id(),
            })?;
        siblings.insert(index, child.clone());
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        Ok(())
    }

    pub fn remove_child(&self, child: &NodeRef) -> Result<(), DomError> {
        if !child.parent().is_some_and(|p| p.ptr_eq(self)) {
            return Err(DomError::NotAChild {
                parent: self.id(),
                child: child.id(),
            });
        }
        child.remove();
        Ok(())
    }

    /// Detaches this node (and its subtree) from its parent. No-op for a
    /// node without a parent.
    pub fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent.0.children.borrow_mut().retain(|c| !c.ptr_eq(self));
        *self.0.parent.borrow_mut() = Weak::new();
    }

    fn allows_children(&self) -> bool {
        matches!(
            *self.0.kind.borrow(),
            NodeKind::Document | NodeKind::Element { .. }
        )
    }

    fn check_insertable(&self, child: &NodeRef) -> Result<(), DomError> {
        if !self.allows_children() {
            return Err(DomError::InvalidParent(self.id()));
        }
        if child.contains(self) {
            return Err(DomError::CycleDetected {
                parent: self.id(),
                child: child.id(),
            });
        }
        Ok(())
    }
}

fn checked_range(text: &str, offset: usize, count: usize) -> Result<Range<usize>, DomError> {
    if offset > text.len() {
        return Err(DomError::IndexSize {
            offset,
            len: text.len(),
        });
    }
    let end = offset.saturating_add(count).min(text.len());
    if !text.is_char_boundary(offset) {
        return Err(DomError::NotCharBoundary(offset));
    }
    if !text.is_char_boundary(end) {
        return Err(DomError::NotCharBoundary(end));
    }
    Ok(offset..end)
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for NodeRef {}

impl Hash for NodeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0.kind.borrow() {
            NodeKind::Document => write!(f, "#{} #document", self.0.id.0),
            NodeKind::Element { name } => write!(f, "#{} <{name}>", self.0.id.0),
            NodeKind::Text { text } => write!(f, "#{} {text:?}", self.0.id.0),
            NodeKind::Comment { text } => write!(f, "#{} <!--{text}-->", self.0.id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Document, DomError};

    #[test]
    fn text_data_edits_respect_char_boundaries() {
        let doc = Document::new();
        let t = doc.create_text("a€b");

        assert_eq!(t.insert_data(2, "x"), Err(DomError::NotCharBoundary(2)));
        assert_eq!(t.delete_data(1, 1), Err(DomError::NotCharBoundary(2)));

        t.insert_data(4, "x").unwrap();
        assert_eq!(t.text().as_deref(), Some("a€xb"));

        t.delete_data(1, 3).unwrap();
        assert_eq!(t.text().as_deref(), Some("axb"));
        assert_eq!(t.substring_data(1, 100).unwrap(), "xb");
    }

    #[test]
    fn text_data_rejects_offsets_past_end() {
        let doc = Document::new();
        let t = doc.create_text("ab");
        assert_eq!(
            t.insert_data(3, "x"),
            Err(DomError::IndexSize { offset: 3, len: 2 })
        );
        assert_eq!(t.text().as_deref(), Some("ab"));
    }

    #[test]
    fn data_primitives_reject_elements() {
        let doc = Document::new();
        let br = doc.create_element("br");
        assert_eq!(br.insert_data(0, "x"), Err(DomError::NotText(br.id())));
        assert_eq!(br.caret_max_offset(), 0);
    }

    #[test]
    fn sibling_navigation_follows_child_order() {
        let doc = Document::new();
        let p = doc.create_element("p");
        let a = doc.create_text("a");
        let b = doc.create_element("br");
        let c = doc.create_text("c");
        doc.root().append_child(&p).unwrap();
        p.append_child(&a).unwrap();
        p.append_child(&c).unwrap();
        p.insert_before(&b, Some(&c)).unwrap();

        assert_eq!(p.children(), vec![a.clone(), b.clone(), c.clone()]);
        assert_eq!(a.next_sibling(), Some(b.clone()));
        assert_eq!(c.previous_sibling(), Some(b.clone()));
        assert_eq!(a.previous_sibling(), None);
        assert_eq!(c.next_sibling(), None);
        assert_eq!(b.index_in_parent(), Some(1));
        assert_eq!(c.depth(), 2);
    }

    #[test]
    fn append_moves_an_attached_child() {
        let doc = Document::new();
        let left = doc.create_element("div");
        let right = doc.create_element("div");
        let t = doc.create_text("t");
        doc.root().append_child(&left).unwrap();
        doc.root().append_child(&right).unwrap();
        left.append_child(&t).unwrap();

        right.append_child(&t).unwrap();

        assert!(!left.has_children());
        assert_eq!(t.parent(), Some(right));
    }

    #[test]
    fn insertion_rejects_cycles_and_leaf_parents() {
        let doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        let t = doc.create_text("t");
        outer.append_child(&inner).unwrap();

        assert_eq!(
            inner.append_child(&outer),
            Err(DomError::CycleDetected {
                parent: inner.id(),
                child: outer.id()
            })
        );
        assert_eq!(
            t.append_child(&inner),
            Err(DomError::InvalidParent(t.id()))
        );
    }

    #[test]
    fn removal_releases_the_tree_reference() {
        let doc = Document::new();
        let t = doc.create_text("t");
        doc.root().append_child(&t).unwrap();
        assert_eq!(t.ref_count(), 2);

        doc.root().remove_child(&t).unwrap();

        assert_eq!(t.ref_count(), 1);
        assert!(t.parent().is_none());
        assert!(doc.root().remove_child(&t).is_err());
        t.remove();
    }
}
