use crate::blink::BlinkState;
use crate::config::CaretConfig;
use crate::context::EditContext;
use crate::host::{FrameHost, TimerId};
use crate::position::Position;
use crate::selection::Selection;
use crate::text::{next_cursor_boundary, prev_cursor_boundary};
use dom::NodeRef;

/// The insertion point of a frame.
///
/// A caret always rests on a node that has a renderer, or on nothing.
#[derive(Debug)]
pub struct Caret {
    position: Position,
    blink: BlinkState,
}

impl Caret {
    pub fn new(config: &CaretConfig) -> Self {
        Self {
            position: Position::null(),
            blink: BlinkState::new(config.blink_interval(), config.blink, config.visible),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn node(&self) -> Option<&NodeRef> {
        self.position.node()
    }

    pub fn offset(&self) -> usize {
        self.position.offset()
    }

    pub fn blink(&self) -> &BlinkState {
        &self.blink
    }

    pub fn is_visible(&self) -> bool {
        self.blink.is_visible()
    }

    /// Place the caret at `offset` in `node`, or in the first rendered leaf
    /// after it. Returns whether the position changed.
    ///
    /// When `clear_selection` is given, focus follows the caret and that
    /// selection is cleared.
    pub fn move_to(
        &mut self,
        cx: &mut EditContext<'_>,
        node: Option<&NodeRef>,
        offset: usize,
        clear_selection: Option<&mut Selection>,
    ) -> bool {
        let mut target = node.cloned();
        while let Some(candidate) = target.take() {
            if cx.layout.has_renderer(&candidate) {
                target = Some(candidate);
                break;
            }
            target = candidate.next_leaf();
        }

        let position = Position::from_parts(target.as_ref(), offset);
        let changed = position != self.position;
        self.position = position;

        if let Some(selection) = clear_selection {
            if let Some(node) = self.position.node().cloned() {
                ensure_node_has_focus(cx, &node);
            }
            selection.clear(cx);
        }

        if changed {
            log::trace!(target: "edit.caret", "caret at {:?}", self.position);
            self.invalidate(cx);
            cx.host.caret_position_changed();
        }
        changed
    }

    /// Step one character forward. At the end of a node, park at the start
    /// of the next rendered leaf that can hold a caret inside it.
    pub fn move_forward_by_character(&mut self, cx: &mut EditContext<'_>) -> bool {
        let Some(node) = self.position.node().cloned() else {
            return false;
        };
        let offset = self.position.offset();
        if offset < node.caret_max_offset() {
            let next = node
                .with_text(|text| next_cursor_boundary(text, offset))
                .unwrap_or(offset + 1);
            return self.move_to(cx, Some(&node), next, None);
        }

        let mut candidate = node.next_leaf();
        while let Some(leaf) = candidate {
            if leaf.caret_min_offset() < leaf.caret_max_offset() && cx.layout.has_renderer(&leaf) {
                return self.move_to(cx, Some(&leaf), leaf.caret_min_offset(), None);
            }
            candidate = leaf.next_leaf();
        }
        false
    }

    /// Mirror of [`move_forward_by_character`](Self::move_forward_by_character).
    pub fn move_backward_by_character(&mut self, cx: &mut EditContext<'_>) -> bool {
        let Some(node) = self.position.node().cloned() else {
            return false;
        };
        let offset = self.position.offset();
        if offset > node.caret_min_offset() {
            let previous = node
                .with_text(|text| prev_cursor_boundary(text, offset))
                .unwrap_or(offset - 1);
            return self.move_to(cx, Some(&node), previous, None);
        }

        let mut candidate = node.previous_leaf();
        while let Some(leaf) = candidate {
            if leaf.caret_min_offset() < leaf.caret_max_offset() && cx.layout.has_renderer(&leaf) {
                return self.move_to(cx, Some(&leaf), leaf.caret_max_offset(), None);
            }
            candidate = leaf.previous_leaf();
        }
        false
    }

    /// At offset 0, drop empty text siblings before the caret and move to
    /// the end of the preceding text node, so typing continues it.
    pub fn adjust_position(&mut self, cx: &mut EditContext<'_>) {
        let Some(node) = self.position.node().cloned() else {
            return;
        };
        if self.position.offset() != 0 {
            return;
        }

        let mut previous = node.previous_sibling();
        while let Some(sibling) = previous.clone() {
            if !sibling.is_text() || sibling.text_len() > 0 {
                break;
            }
            previous = sibling.previous_sibling();
            cx.remove_node(&sibling);
        }

        if let Some(sibling) = previous.filter(|s| s.is_text()) {
            self.move_to(cx, Some(&sibling), sibling.caret_max_offset(), None);
        }
    }

    pub fn set_visible(&mut self, cx: &mut EditContext<'_>, visible: bool) {
        self.blink.set_visible(visible);
        self.invalidate(cx);
    }

    /// Recompute caret geometry and repaint.
    pub fn invalidate(&mut self, cx: &mut EditContext<'_>) {
        let target = self.position.node().map(|node| (node, self.position.offset()));
        self.blink.invalidate(cx, target);
    }

    pub fn on_blink_timer(&mut self, host: &mut dyn FrameHost, id: TimerId) -> bool {
        self.blink.tick(host, id)
    }

    pub(crate) fn release_timer(&mut self, host: &mut dyn FrameHost) {
        self.blink.release_timer(host);
    }
}

/// Give focus to the nearest rendered element at or above `node`.
///
/// Nothing happens if that element already has focus. With no such element
/// the document loses focus.
pub fn ensure_node_has_focus(cx: &mut EditContext<'_>, node: &NodeRef) {
    let mut current = Some(node.clone());
    while let Some(candidate) = current {
        if candidate.is_element() && cx.layout.has_renderer(&candidate) {
            if cx.document.focus_node().as_ref() == Some(&candidate) {
                return;
            }
            log::debug!(target: "edit.caret", "focus moves to {candidate:?}");
            cx.document.set_focus_node(Some(candidate.clone()));
            cx.host.node_activated(&candidate);
            return;
        }
        current = candidate.parent();
    }
    cx.document.set_focus_node(None);
}
