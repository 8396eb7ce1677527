use super::{check_range, delete_selection, place_caret, prune_empty_nodes};
use crate::error::EditError;
use crate::frame::Frame;
use crate::host::FrameHost;
use crate::selection::{Selection, SelectionState};
use crate::text::prev_cursor_boundary;
use dom::NodeRef;
use layout::LayoutQuery;

pub(super) fn apply<H: FrameHost, L: LayoutQuery>(
    frame: &mut Frame<H, L>,
    selection: &Selection,
) -> Result<(), EditError> {
    if selection.state() == SelectionState::Range {
        check_range(selection)?;
        let start = selection.start();
        frame.move_caret_to(start.node(), start.offset(), false);
        delete_selection(frame, selection)?;
        prune_empty_nodes(frame);
        return Ok(());
    }

    let Some(node) = frame.caret().node().cloned() else {
        return Err(EditError::NothingToDelete);
    };
    let offset = frame.caret().offset();

    if node.is_text() && offset > 0 {
        delete_char_before(frame, &node, offset)?;
        prune_empty_nodes(frame);
        return Ok(());
    }

    if let Some(previous) = node.previous_sibling().filter(|n| n.is_line_break()) {
        frame.context().remove_node(&previous);
        frame.invalidate_caret();
        frame.adjust_caret_position();
        return Ok(());
    }

    let mut candidate = node.previous_leaf();
    while let Some(leaf) = candidate {
        if leaf.is_text() && leaf.text_len() == 0 {
            candidate = leaf.previous_leaf();
            continue;
        }
        if !leaf.is_text() {
            break;
        }
        let len = leaf.text_len();
        delete_char_before(frame, &leaf, len)?;
        prune_empty_nodes(frame);
        return Ok(());
    }

    Err(EditError::NothingToDelete)
}

/// Remove the character ending at `offset` in `node` and put the caret
/// where it was.
fn delete_char_before<H: FrameHost, L: LayoutQuery>(
    frame: &mut Frame<H, L>,
    node: &NodeRef,
    offset: usize,
) -> Result<(), EditError> {
    let start = node
        .with_text(|text| prev_cursor_boundary(text, offset))
        .unwrap_or(0);
    node.delete_data(start, offset - start)?;
    place_caret(frame, node, start);
    frame.context().notify_changed(node);
    Ok(())
}
