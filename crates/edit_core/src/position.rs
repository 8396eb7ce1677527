use crate::text::clamp_to_char_boundary;
use dom::NodeRef;

/// A caret or selection endpoint: a node and an offset into it.
///
/// A null position has no node and offset 0. A non-null one always holds an
/// offset within the node's `[caret_min_offset, caret_max_offset]` range,
/// on a character boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    node: Option<NodeRef>,
    offset: usize,
}

impl Position {
    pub fn null() -> Self {
        Self::default()
    }

    /// Position at `offset` in `node`, clamped into the node's caret range.
    pub fn clamped(node: NodeRef, offset: usize) -> Self {
        let offset = offset.clamp(node.caret_min_offset(), node.caret_max_offset());
        let offset = node
            .with_text(|text| clamp_to_char_boundary(text, offset))
            .unwrap_or(offset);
        Self {
            node: Some(node),
            offset,
        }
    }

    pub(crate) fn from_parts(node: Option<&NodeRef>, offset: usize) -> Self {
        match node {
            Some(node) => Self::clamped(node.clone(), offset),
            None => Self::null(),
        }
    }

    pub fn node(&self) -> Option<&NodeRef> {
        self.node.as_ref()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_null(&self) -> bool {
        self.node.is_none()
    }
}
