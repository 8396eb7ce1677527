use crate::caret::{Caret, ensure_node_has_focus};
use crate::config::EditorConfig;
use crate::context::EditContext;
use crate::host::{FrameHost, TimerId};
use crate::selection::Selection;
use dom::{Document, NodeRef};
use layout::LayoutQuery;

/// One editable document view: the tree, its layout, the host it paints
/// into, and the frame's single caret and selection.
pub struct Frame<H: FrameHost, L: LayoutQuery> {
    document: Document,
    layout: L,
    host: H,
    caret: Caret,
    selection: Selection,
    saved_selection: Option<Selection>,
    config: EditorConfig,
}

impl<H: FrameHost, L: LayoutQuery> Frame<H, L> {
    pub fn new(document: Document, layout: L, host: H, config: EditorConfig) -> Self {
        log::debug!(target: "edit.caret", "new frame, caret config {:?}", config.caret);
        Self {
            caret: Caret::new(&config.caret),
            selection: Selection::new(&config.caret),
            saved_selection: None,
            document,
            layout,
            host,
            config,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn caret(&self) -> &Caret {
        &self.caret
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn context(&mut self) -> EditContext<'_> {
        EditContext::new(&self.document, &mut self.layout, &mut self.host)
    }

    fn parts(&mut self) -> (EditContext<'_>, &mut Caret, &mut Selection) {
        let Self {
            document,
            layout,
            host,
            caret,
            selection,
            ..
        } = self;
        (EditContext::new(document, layout, host), caret, selection)
    }

    /// See [`Caret::move_to`]. With `clear_selection`, the frame's selection
    /// is cleared and focus follows the caret.
    pub fn move_caret_to(
        &mut self,
        node: Option<&NodeRef>,
        offset: usize,
        clear_selection: bool,
    ) -> bool {
        let (mut cx, caret, selection) = self.parts();
        caret.move_to(&mut cx, node, offset, clear_selection.then_some(selection))
    }

    pub fn move_caret_forward(&mut self) -> bool {
        let (mut cx, caret, _) = self.parts();
        caret.move_forward_by_character(&mut cx)
    }

    pub fn move_caret_backward(&mut self) -> bool {
        let (mut cx, caret, _) = self.parts();
        caret.move_backward_by_character(&mut cx)
    }

    pub fn adjust_caret_position(&mut self) {
        let (mut cx, caret, _) = self.parts();
        caret.adjust_position(&mut cx);
    }

    pub fn set_caret_visible(&mut self, visible: bool) {
        let (mut cx, caret, _) = self.parts();
        caret.set_visible(&mut cx, visible);
    }

    pub fn invalidate_caret(&mut self) {
        let (mut cx, caret, _) = self.parts();
        caret.invalidate(&mut cx);
    }

    /// Collapse the selection to `offset` in `node`.
    pub fn set_selection(&mut self, node: Option<&NodeRef>, offset: usize) {
        let (mut cx, _, selection) = self.parts();
        selection.set_caret(&mut cx, node, offset);
    }

    pub fn set_selection_range(
        &mut self,
        base_node: Option<&NodeRef>,
        base_offset: usize,
        extent_node: Option<&NodeRef>,
        extent_offset: usize,
    ) {
        let (mut cx, _, selection) = self.parts();
        selection.set_range(&mut cx, base_node, base_offset, extent_node, extent_offset);
    }

    pub fn set_selection_base(&mut self, node: Option<&NodeRef>, offset: usize) {
        let (mut cx, _, selection) = self.parts();
        selection.set_base(&mut cx, node, offset);
    }

    pub fn set_selection_extent(&mut self, node: Option<&NodeRef>, offset: usize) {
        let (mut cx, _, selection) = self.parts();
        selection.set_extent(&mut cx, node, offset);
    }

    pub fn clear_selection(&mut self) {
        let (mut cx, _, selection) = self.parts();
        selection.clear(&mut cx);
    }

    pub fn set_selection_visible(&mut self, visible: bool) {
        let (mut cx, _, selection) = self.parts();
        selection.set_visible(&mut cx, visible);
    }

    /// Focus the nearest rendered element around `node`.
    pub fn focus_node_at(&mut self, node: &NodeRef) {
        ensure_node_has_focus(&mut self.context(), node);
    }

    /// Route a host timer tick to whichever caret owns it.
    pub fn timer_fired(&mut self, id: TimerId) -> bool {
        self.caret.on_blink_timer(&mut self.host, id)
            || self.selection.on_blink_timer(&mut self.host, id)
    }

    /// The view lost keyboard focus: remember the selection and hide the
    /// caret.
    pub fn focus_out(&mut self) {
        log::debug!(target: "edit.caret", "focus out");
        self.saved_selection = Some(self.selection.clone());
        self.set_caret_visible(false);
    }

    /// The view regained keyboard focus: restore the saved selection and
    /// show the caret again.
    pub fn focus_in(&mut self) {
        log::debug!(target: "edit.caret", "focus in");
        if let Some(saved) = self.saved_selection.take() {
            self.set_selection_range(
                saved.base().node(),
                saved.base().offset(),
                saved.extent().node(),
                saved.extent().offset(),
            );
        }
        self.set_caret_visible(self.config.caret.visible);
    }

    /// A pointer press at `offset` in `node`. With `extend`, a range
    /// selection keeps its base and moves its extent to the click; otherwise
    /// a new range is anchored at the caret.
    pub fn click(&mut self, node: &NodeRef, offset: usize, extend: bool) {
        if !extend {
            self.move_caret_to(Some(node), offset, true);
            return;
        }
        if !self.selection.is_range() {
            let anchor = self.caret.position().clone();
            self.set_selection(anchor.node(), anchor.offset());
        }
        self.move_caret_to(Some(node), offset, false);
        let focus = self.caret.position().clone();
        self.set_selection_extent(focus.node(), focus.offset());
    }
}

impl<H: FrameHost, L: LayoutQuery> Drop for Frame<H, L> {
    fn drop(&mut self) {
        self.caret.release_timer(&mut self.host);
        self.selection.release_timer(&mut self.host);
    }
}
