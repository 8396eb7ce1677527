//! Undoable text edits.
//!
//! A command captures a copy of the frame's selection when it is created and
//! applies against that snapshot later. Commands mark every node they touch
//! as changed so layout can catch up.

mod delete_text;
mod input_text;

use crate::document_order::{TreeOrder, tree_order};
use crate::error::EditError;
use crate::frame::Frame;
use crate::host::FrameHost;
use crate::selection::Selection;
use dom::{DomError, NodeRef};
use layout::LayoutQuery;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandId {
    InputText,
    DeleteText,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditCommandKind {
    /// Insert text at the caret, replacing a range selection. `"\n"` splits
    /// the text node around a `<br>`.
    InputText { text: String },
    /// Backspace: remove the range selection, or the character before the
    /// caret.
    DeleteText,
}

#[derive(Clone, Debug)]
pub struct EditCommand {
    kind: EditCommandKind,
    selection: Selection,
}

impl EditCommand {
    pub fn input_text<H: FrameHost, L: LayoutQuery>(
        frame: &Frame<H, L>,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        if cfg!(debug_assertions) && text.is_empty() {
            log::warn!(target: "edit.command", "input text command created with no text");
        }
        Self::new(frame, EditCommandKind::InputText { text })
    }

    pub fn delete_text<H: FrameHost, L: LayoutQuery>(frame: &Frame<H, L>) -> Self {
        Self::new(frame, EditCommandKind::DeleteText)
    }

    fn new<H: FrameHost, L: LayoutQuery>(frame: &Frame<H, L>, kind: EditCommandKind) -> Self {
        Self {
            kind,
            selection: frame.selection().clone(),
        }
    }

    pub fn command_id(&self) -> CommandId {
        match self.kind {
            EditCommandKind::InputText { .. } => CommandId::InputText,
            EditCommandKind::DeleteText => CommandId::DeleteText,
        }
    }

    pub fn kind(&self) -> &EditCommandKind {
        &self.kind
    }

    /// The selection as it was when the command was created.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn can_undo(&self) -> bool {
        true
    }

    /// Apply the edit to `frame`.
    ///
    /// Fails without touching the tree when no view is attached, the
    /// insertion point is unusable or the captured range no longer fits the
    /// tree. On success the frame's selection collapses onto the caret.
    pub fn apply<H: FrameHost, L: LayoutQuery>(
        &self,
        frame: &mut Frame<H, L>,
    ) -> Result<(), EditError> {
        if !frame.host().has_view() {
            return Err(EditError::NoView);
        }
        let result = match &self.kind {
            EditCommandKind::InputText { text } => input_text::apply(frame, &self.selection, text),
            EditCommandKind::DeleteText => delete_text::apply(frame, &self.selection),
        };
        match &result {
            Ok(()) => {
                let caret = frame.caret().position().clone();
                frame.set_selection(caret.node(), caret.offset());
                log::debug!(
                    target: "edit.command",
                    "{:?} applied, caret at {:?}",
                    self.command_id(),
                    caret
                );
            }
            Err(err) => log::debug!(
                target: "edit.command",
                "{:?} not applied: {err}",
                self.command_id()
            ),
        }
        result
    }

    /// [`apply`](Self::apply), reduced to whether it succeeded.
    pub fn apply_bool<H: FrameHost, L: LayoutQuery>(&self, frame: &mut Frame<H, L>) -> bool {
        self.apply(frame).is_ok()
    }
}

/// Move the caret, repainting it even if the position is unchanged, since
/// the tree around it may have moved.
fn place_caret<H: FrameHost, L: LayoutQuery>(
    frame: &mut Frame<H, L>,
    node: &NodeRef,
    offset: usize,
) {
    if !frame.move_caret_to(Some(node), offset, false) {
        frame.invalidate_caret();
    }
}

/// Reject a captured range that is no longer a forward span of one tree
/// with offsets inside its nodes.
fn check_range(selection: &Selection) -> Result<(), EditError> {
    let (start, end) = (selection.start(), selection.end());
    let (Some(start_node), Some(end_node)) = (start.node(), end.node()) else {
        return Ok(());
    };
    match tree_order(start_node, end_node) {
        TreeOrder::Before | TreeOrder::Same => {}
        TreeOrder::After | TreeOrder::Disconnected => {
            return Err(DomError::InvalidRange {
                start: start_node.id(),
                end: end_node.id(),
            }
            .into());
        }
    }
    for (node, offset) in [(start_node, start.offset()), (end_node, end.offset())] {
        let len = node.caret_max_offset();
        if offset > len {
            return Err(DomError::IndexSize { offset, len }.into());
        }
        if !node.with_text(|t| t.is_char_boundary(offset)).unwrap_or(true) {
            return Err(DomError::NotCharBoundary(offset).into());
        }
    }
    Ok(())
}

/// Remove the content of a range `selection`, collapsing the frame's own
/// selection to its start.
fn delete_selection<H: FrameHost, L: LayoutQuery>(
    frame: &mut Frame<H, L>,
    selection: &Selection,
) -> Result<(), EditError> {
    check_range(selection)?;
    let (start, end) = (selection.start(), selection.end());
    let (Some(start_node), Some(end_node)) = (start.node(), end.node()) else {
        return Ok(());
    };
    frame.context().notify_range_changed(start_node, end_node);
    frame.set_selection(Some(start_node), start.offset());
    dom::delete_range(start_node, start.offset(), end_node, end.offset())?;
    Ok(())
}

/// Walk back from the caret removing empty text and childless elements,
/// then park the caret at the end of the first survivor.
fn prune_empty_nodes<H: FrameHost, L: LayoutQuery>(frame: &mut Frame<H, L>) {
    let Some(mut node) = frame.caret().node().cloned() else {
        return;
    };
    let mut pruned = false;
    loop {
        let empty = if node.is_text() {
            node.text_len() == 0
        } else {
            !node.has_children()
        };
        if !empty || node.parent().is_none() {
            break;
        }
        let Some(previous) = node.previous_in_order() else {
            break;
        };
        log::trace!(target: "edit.command", "pruning empty {node:?}");
        frame.context().remove_node(&node);
        node = previous;
        pruned = true;
    }

    if pruned {
        place_caret(frame, &node, node.caret_max_offset());
        frame.context().notify_changed(&node);
    }
}
