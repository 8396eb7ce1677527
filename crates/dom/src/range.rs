//! Range content primitives.
//!
//! Boundary points are `(node, offset)` pairs on leaves. For a text node the
//! offset indexes its data; for any other leaf the point sits just before the
//! node, so a range starting on a `<br>` covers the `<br>` itself.

use crate::{DomError, NodeRef};

/// Nodes strictly between `start` and `end` in document order, or an error if
/// `end` is not reachable from `start`.
fn nodes_between(start: &NodeRef, end: &NodeRef) -> Result<Vec<NodeRef>, DomError> {
    let mut out = Vec::new();
    let mut current = start.next_in_order();
    while let Some(node) = current {
        if node.ptr_eq(end) {
            return Ok(out);
        }
        current = node.next_in_order();
        out.push(node);
    }
    Err(DomError::InvalidRange {
        start: start.id(),
        end: end.id(),
    })
}

/// Removes the content between two boundary points.
///
/// Trailing data of a text `start`, every node fully inside the range and
/// leading data of a text `end` are deleted. Ancestors of `end` survive, as
/// does any node partially covered. The range is validated before the tree
/// is touched.
pub fn delete_range(
    start: &NodeRef,
    start_offset: usize,
    end: &NodeRef,
    end_offset: usize,
) -> Result<(), DomError> {
    if start.ptr_eq(end) {
        if start.is_text() && end_offset > start_offset {
            start.delete_data(start_offset, end_offset - start_offset)?;
        }
        return Ok(());
    }

    let between = nodes_between(start, end)?;
    if start.is_text() {
        check_offset(start, start_offset)?;
    }
    if end.is_text() {
        check_offset(end, end_offset)?;
    }

    let mut doomed: Vec<NodeRef> = Vec::new();
    if !start.is_text() && !start.has_children() && !start.contains(end) {
        doomed.push(start.clone());
    }
    for node in between {
        if node.contains(end) || doomed.iter().any(|d| d.contains(&node)) {
            continue;
        }
        doomed.push(node);
    }

    log::trace!(
        target: "dom.range",
        "delete range {:?}@{} .. {:?}@{}: removing {} node(s)",
        start,
        start_offset,
        end,
        end_offset,
        doomed.len()
    );

    if start.is_text() {
        let len = start.text_len();
        start.delete_data(start_offset, len - start_offset)?;
    }
    if end.is_text() {
        end.delete_data(0, end_offset)?;
    }
    for node in doomed {
        node.remove();
    }
    Ok(())
}

/// Character data covered by the range, concatenated in document order.
pub fn range_text(
    start: &NodeRef,
    start_offset: usize,
    end: &NodeRef,
    end_offset: usize,
) -> Result<String, DomError> {
    if start.ptr_eq(end) {
        if !start.is_text() || end_offset <= start_offset {
            return Ok(String::new());
        }
        return start.substring_data(start_offset, end_offset - start_offset);
    }

    let between = nodes_between(start, end)?;
    let mut out = String::new();
    if start.is_text() {
        out.push_str(&start.substring_data(start_offset, usize::MAX)?);
    }
    for node in between.iter().filter(|n| n.is_text()) {
        node.with_text(|t| out.push_str(t));
    }
    if end.is_text() {
        out.push_str(&end.substring_data(0, end_offset)?);
    }
    Ok(out)
}

fn check_offset(node: &NodeRef, offset: usize) -> Result<(), DomError> {
    let len = node.text_len();
    if offset > len {
        return Err(DomError::IndexSize { offset, len });
    }
    let on_boundary = node.with_text(|t| t.is_char_boundary(offset)).unwrap_or(true);
    if !on_boundary {
        return Err(DomError::NotCharBoundary(offset));
    }
    Ok(())
}
