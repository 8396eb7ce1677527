use crate::text::{FixedAdvance, TextMeasurer};
use crate::{LayoutQuery, Rect};
use dom::dom_utils::{is_block_element, is_non_rendering_element};
use dom::{Id, NodeRef};

const DEFAULT_CARET_WIDTH: f32 = 1.0;

/// Single-column flow layout.
///
/// Text and inline leaves run left to right on the current line; `<br>`
/// ends the line, and block elements start and finish on a line of their
/// own. Geometry is recomputed from the tree on every query, so relayout
/// marks are only recorded, never needed for correctness.
#[derive(Debug)]
pub struct FlowLayout<M: TextMeasurer = FixedAdvance> {
    measurer: M,
    caret_width: f32,
    needs_layout: Vec<Id>,
}

impl FlowLayout<FixedAdvance> {
    pub fn new() -> Self {
        Self::with_measurer(FixedAdvance::default())
    }
}

impl Default for FlowLayout<FixedAdvance> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Pen {
    x: f32,
    y: f32,
    line_has_content: bool,
}

impl Pen {
    fn break_line(&mut self, line_height: f32) {
        self.x = 0.0;
        self.y += line_height;
        self.line_has_content = false;
    }

    fn end_block(&mut self, line_height: f32) {
        if self.line_has_content {
            self.break_line(line_height);
        }
    }
}

impl<M: TextMeasurer> FlowLayout<M> {
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            measurer,
            caret_width: DEFAULT_CARET_WIDTH,
            needs_layout: Vec::new(),
        }
    }

    pub fn with_caret_width(mut self, caret_width: f32) -> Self {
        self.caret_width = caret_width;
        self
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn needs_layout(&self, node: &NodeRef) -> bool {
        self.needs_layout.contains(&node.id())
    }

    /// Drain the nodes marked since the last call.
    pub fn take_needs_layout(&mut self) -> Vec<Id> {
        std::mem::take(&mut self.needs_layout)
    }

    fn caret_at(&self, pen: &Pen) -> Rect {
        Rect::new(pen.x, pen.y, self.caret_width, self.measurer.line_height())
    }

    fn place(
        &self,
        node: &NodeRef,
        target: &NodeRef,
        offset: usize,
        pen: &mut Pen,
    ) -> Option<Rect> {
        let line_height = self.measurer.line_height();
        let is_target = node.ptr_eq(target);

        if node.is_document() {
            return self.place_children(node, target, offset, pen);
        }
        if node.is_text() {
            let text = node.text().unwrap_or_default();
            if is_target {
                let mut end = offset.min(text.len());
                while !text.is_char_boundary(end) {
                    end -= 1;
                }
                let mut at = *pen;
                at.x += self.measurer.measure(&text[..end]);
                return Some(self.caret_at(&at));
            }
            pen.x += self.measurer.measure(&text);
            pen.line_has_content |= !text.is_empty();
            return None;
        }
        if node.is_comment() || is_non_rendering_element(node) {
            return None;
        }
        if node.is_line_break() {
            if is_target {
                return Some(self.caret_at(pen));
            }
            pen.break_line(line_height);
            return None;
        }
        if is_block_element(node) {
            pen.end_block(line_height);
            if is_target {
                return Some(self.caret_at(pen));
            }
            let found = self.place_children(node, target, offset, pen);
            if found.is_none() {
                pen.end_block(line_height);
            }
            return found;
        }

        // Inline element: a container flows its children, a childless one
        // (an image, say) occupies a square one line high.
        if is_target {
            return Some(self.caret_at(pen));
        }
        if node.has_children() {
            return self.place_children(node, target, offset, pen);
        }
        pen.x += line_height;
        pen.line_has_content = true;
        None
    }

    fn place_children(
        &self,
        node: &NodeRef,
        target: &NodeRef,
        offset: usize,
        pen: &mut Pen,
    ) -> Option<Rect> {
        node.children()
            .iter()
            .find_map(|child| self.place(child, target, offset, pen))
    }
}

impl<M: TextMeasurer> LayoutQuery for FlowLayout<M> {
    fn has_renderer(&self, node: &NodeRef) -> bool {
        if node.is_document() || node.is_comment() {
            return false;
        }
        let mut current = Some(node.clone());
        while let Some(n) = current {
            if is_non_rendering_element(&n) {
                return false;
            }
            if n.is_document() {
                return true;
            }
            current = n.parent();
        }
        // Detached subtree.
        false
    }

    fn caret_rect(&self, node: &NodeRef, offset: usize) -> Option<Rect> {
        if !self.has_renderer(node) {
            return None;
        }
        let mut pen = Pen::default();
        self.place(&node.root(), node, offset, &mut pen)
    }

    fn set_needs_layout(&mut self, node: &NodeRef) {
        let id = node.id();
        if !self.needs_layout.contains(&id) {
            self.needs_layout.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::Document;

    // <body><p>"ab"<br>"cde"</p><p>"f"</p></body>
    fn fixture() -> (Document, Vec<NodeRef>) {
        let doc = Document::new();
        let body = doc.create_element("body");
        let p1 = doc.create_element("p");
        let ab = doc.create_text("ab");
        let br = doc.create_element("br");
        let cde = doc.create_text("cde");
        let p2 = doc.create_element("p");
        let f = doc.create_text("f");
        doc.root().append_child(&body).unwrap();
        body.append_child(&p1).unwrap();
        p1.append_child(&ab).unwrap();
        p1.append_child(&br).unwrap();
        p1.append_child(&cde).unwrap();
        body.append_child(&p2).unwrap();
        p2.append_child(&f).unwrap();
        (doc, vec![ab, br, cde, f])
    }

    #[test]
    fn caret_advances_with_text_and_wraps_at_line_breaks() {
        let (_doc, n) = fixture();
        let layout = FlowLayout::new();

        let at = |x, y| Some(Rect::new(x, y, 1.0, 16.0));
        assert_eq!(layout.caret_rect(&n[0], 1), at(8.0, 0.0));
        assert_eq!(layout.caret_rect(&n[1], 0), at(16.0, 0.0));
        assert_eq!(layout.caret_rect(&n[2], 3), at(24.0, 16.0));
        assert_eq!(layout.caret_rect(&n[3], 0), at(0.0, 32.0));
    }

    #[test]
    fn offsets_past_the_end_clamp_to_the_text() {
        let (_doc, n) = fixture();
        let layout = FlowLayout::new();
        assert_eq!(layout.caret_rect(&n[0], 99), layout.caret_rect(&n[0], 2));
    }

    #[test]
    fn hidden_and_detached_nodes_have_no_renderer() {
        let doc = Document::new();
        let head = doc.create_element("head");
        let title = doc.create_text("title");
        let loose = doc.create_text("loose");
        doc.root().append_child(&head).unwrap();
        head.append_child(&title).unwrap();
        let layout = FlowLayout::new();

        assert!(!layout.has_renderer(doc.root()));
        assert!(!layout.has_renderer(&title));
        assert!(!layout.has_renderer(&loose));
        assert_eq!(layout.caret_rect(&title, 0), None);
    }

    #[test]
    fn custom_metrics_and_caret_width() {
        let (_doc, n) = fixture();
        let layout = FlowLayout::with_measurer(FixedAdvance {
            advance: 10.0,
            line_height: 20.0,
        })
        .with_caret_width(2.0);

        assert_eq!(
            layout.caret_rect(&n[2], 1),
            Some(Rect::new(10.0, 20.0, 2.0, 20.0))
        );
    }

    #[test]
    fn relayout_marks_are_recorded_once() {
        let (_doc, n) = fixture();
        let mut layout = FlowLayout::new();
        layout.set_needs_layout(&n[0]);
        layout.set_needs_layout(&n[0]);

        assert!(layout.needs_layout(&n[0]));
        assert_eq!(layout.take_needs_layout(), vec![n[0].id()]);
        assert!(!layout.needs_layout(&n[0]));
    }
}
