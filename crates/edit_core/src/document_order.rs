//! Relative order of nodes and positions in a document.

use crate::position::Position;
use dom::NodeRef;

/// Where one node sits relative to another in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeOrder {
    Before,
    Same,
    After,
    /// The nodes do not share a root.
    Disconnected,
}

/// Pre-order comparison of `a` against `b`. An ancestor comes before its
/// descendants.
pub fn tree_order(a: &NodeRef, b: &NodeRef) -> TreeOrder {
    if a.ptr_eq(b) {
        return TreeOrder::Same;
    }

    let (depth_a, depth_b) = (a.depth(), b.depth());
    let mut x = a.clone();
    let mut y = b.clone();
    for _ in depth_b..depth_a {
        match x.parent() {
            Some(parent) => x = parent,
            None => return TreeOrder::Disconnected,
        }
    }
    for _ in depth_a..depth_b {
        match y.parent() {
            Some(parent) => y = parent,
            None => return TreeOrder::Disconnected,
        }
    }

    // One node is an ancestor of the other.
    if x.ptr_eq(&y) {
        return if depth_a < depth_b {
            TreeOrder::Before
        } else {
            TreeOrder::After
        };
    }

    loop {
        let (Some(px), Some(py)) = (x.parent(), y.parent()) else {
            return TreeOrder::Disconnected;
        };
        if px.ptr_eq(&py) {
            for child in px.children() {
                if child.ptr_eq(&x) {
                    return TreeOrder::Before;
                }
                if child.ptr_eq(&y) {
                    return TreeOrder::After;
                }
            }
            return TreeOrder::Disconnected;
        }
        x = px;
        y = py;
    }
}

/// True if `a` does not come after `b`.
///
/// A missing node precedes everything, and everything precedes a missing
/// node. Nodes in different trees precede nothing; use [`tree_order`] to
/// tell that case apart.
pub fn precedes(a: Option<&NodeRef>, b: Option<&NodeRef>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => matches!(tree_order(a, b), TreeOrder::Before | TreeOrder::Same),
        _ => true,
    }
}

/// Like [`precedes`], breaking ties within one node by offset.
pub fn position_precedes(a: &Position, b: &Position) -> bool {
    match (a.node(), b.node()) {
        (Some(x), Some(y)) if x.ptr_eq(y) => a.offset() <= b.offset(),
        (x, y) => precedes(x, y),
    }
}
