//! Selection state.
//!
//! A selection is an ordered pair of endpoints: `base`, where it was
//! anchored, and `extent`, where it currently ends. Either may come first in
//! the document; `start`/`end` give them in document order.
//!
//! All setters clamp offsets into the target node and then re-derive the
//! ordering and [`SelectionState`].

use crate::blink::BlinkState;
use crate::config::CaretConfig;
use crate::context::EditContext;
use crate::document_order::position_precedes;
use crate::host::{FrameHost, TimerId};
use crate::position::Position;
use dom::NodeRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    /// Both endpoints are null.
    None,
    /// Both endpoints are equal; the selection draws a caret.
    Caret,
    Range,
}

#[derive(Debug)]
pub struct Selection {
    base: Position,
    extent: Position,
    base_is_first: bool,
    state: SelectionState,
    blink: BlinkState,
}

impl Selection {
    /// Empty selection. It starts hidden; a frame's caret is drawn by its
    /// [`Caret`](crate::Caret).
    pub fn new(config: &CaretConfig) -> Self {
        Self {
            base: Position::null(),
            extent: Position::null(),
            base_is_first: true,
            state: SelectionState::None,
            blink: BlinkState::new(config.blink_interval(), config.blink, false),
        }
    }

    pub fn base(&self) -> &Position {
        &self.base
    }

    pub fn extent(&self) -> &Position {
        &self.extent
    }

    pub fn start(&self) -> &Position {
        if self.base_is_first { &self.base } else { &self.extent }
    }

    pub fn end(&self) -> &Position {
        if self.base_is_first { &self.extent } else { &self.base }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn base_is_first(&self) -> bool {
        self.base_is_first
    }

    /// True when both endpoints are null.
    pub fn is_empty(&self) -> bool {
        self.state == SelectionState::None
    }

    pub fn is_range(&self) -> bool {
        self.state == SelectionState::Range
    }

    pub fn blink(&self) -> &BlinkState {
        &self.blink
    }

    /// Collapse to a caret at `offset` in `node`.
    pub fn set_caret(&mut self, cx: &mut EditContext<'_>, node: Option<&NodeRef>, offset: usize) {
        let position = Position::from_parts(node, offset);
        self.base = position.clone();
        self.extent = position;
        self.invalidate(cx);
    }

    pub fn set_range(
        &mut self,
        cx: &mut EditContext<'_>,
        base_node: Option<&NodeRef>,
        base_offset: usize,
        extent_node: Option<&NodeRef>,
        extent_offset: usize,
    ) {
        self.base = Position::from_parts(base_node, base_offset);
        self.extent = Position::from_parts(extent_node, extent_offset);
        self.invalidate(cx);
    }

    pub fn set_base(&mut self, cx: &mut EditContext<'_>, node: Option<&NodeRef>, offset: usize) {
        self.base = Position::from_parts(node, offset);
        self.invalidate(cx);
    }

    pub fn set_extent(&mut self, cx: &mut EditContext<'_>, node: Option<&NodeRef>, offset: usize) {
        self.extent = Position::from_parts(node, offset);
        self.invalidate(cx);
    }

    /// Null both endpoints and tell the host.
    pub fn clear(&mut self, cx: &mut EditContext<'_>) {
        self.base = Position::null();
        self.extent = Position::null();
        self.invalidate(cx);
        log::trace!(target: "edit.selection", "selection cleared");
        cx.host.selection_cleared();
    }

    pub fn set_visible(&mut self, cx: &mut EditContext<'_>, visible: bool) {
        self.blink.set_visible(visible);
        self.invalidate(cx);
    }

    /// Re-derive ordering and state, then repaint the collapsed caret if
    /// there is one.
    pub fn invalidate(&mut self, cx: &mut EditContext<'_>) {
        self.derive();
        log::trace!(
            target: "edit.selection",
            "{:?}: base {:?} extent {:?}",
            self.state,
            self.base,
            self.extent
        );
        let target = match self.state {
            SelectionState::Caret => self.base.node().map(|node| (node, self.base.offset())),
            SelectionState::None | SelectionState::Range => None,
        };
        self.blink.invalidate(cx, target);
    }

    /// Text covered by a range selection; empty otherwise.
    pub fn text(&self) -> String {
        if self.state != SelectionState::Range {
            return String::new();
        }
        let (start, end) = (self.start(), self.end());
        let (Some(start_node), Some(end_node)) = (start.node(), end.node()) else {
            return String::new();
        };
        dom::range_text(start_node, start.offset(), end_node, end.offset()).unwrap_or_else(|err| {
            log::debug!(target: "edit.selection", "selection text unavailable: {err}");
            String::new()
        })
    }

    pub fn on_blink_timer(&mut self, host: &mut dyn FrameHost, id: TimerId) -> bool {
        self.blink.tick(host, id)
    }

    pub(crate) fn release_timer(&mut self, host: &mut dyn FrameHost) {
        self.blink.release_timer(host);
    }

    fn derive(&mut self) {
        match (self.base.is_null(), self.extent.is_null()) {
            (true, false) => self.base = self.extent.clone(),
            (false, true) => self.extent = self.base.clone(),
            _ => {}
        }
        self.base_is_first = position_precedes(&self.base, &self.extent);
        self.state = if self.base.is_null() {
            SelectionState::None
        } else if self.base == self.extent {
            SelectionState::Caret
        } else {
            SelectionState::Range
        };
    }
}

/// Copies share endpoints but not paint or timer state.
impl Clone for Selection {
    fn clone(&self) -> Self {
        let mut copy = Self {
            base: self.base.clone(),
            extent: self.extent.clone(),
            base_is_first: true,
            state: SelectionState::None,
            blink: self.blink.fresh(),
        };
        copy.derive();
        copy
    }
}
