use super::{delete_selection, place_caret};
use crate::error::EditError;
use crate::frame::Frame;
use crate::host::FrameHost;
use crate::selection::{Selection, SelectionState};
use dom::NodeRef;
use layout::LayoutQuery;

pub(super) fn apply<H: FrameHost, L: LayoutQuery>(
    frame: &mut Frame<H, L>,
    selection: &Selection,
    text: &str,
) -> Result<(), EditError> {
    let replacing = selection.state() == SelectionState::Range;
    let insertion = if replacing {
        selection.start()
    } else {
        frame.caret().position()
    };
    let node = insertion
        .node()
        .filter(|node| node.is_text())
        .cloned()
        .ok_or(EditError::NotInTextNode)?;
    let line_break = text == "\n";
    if line_break && node.parent().is_none() {
        return Err(EditError::Detached);
    }

    if replacing {
        let start = selection.start();
        delete_selection(frame, selection)?;
        frame.move_caret_to(start.node(), start.offset(), false);
        frame.adjust_caret_position();
    }

    let (node, offset) = match frame.caret().node() {
        Some(node) if node.is_text() => (node.clone(), frame.caret().offset()),
        _ => return Err(EditError::NotInTextNode),
    };
    if line_break {
        insert_line_break(frame, &node, offset)
    } else {
        insert_text(frame, &node, offset, text)
    }
}

fn insert_text<H: FrameHost, L: LayoutQuery>(
    frame: &mut Frame<H, L>,
    node: &NodeRef,
    offset: usize,
    text: &str,
) -> Result<(), EditError> {
    node.insert_data(offset, text)?;
    place_caret(frame, node, offset + text.len());
    frame.context().notify_changed(node);
    Ok(())
}

/// Split `node` at `offset`: the text before it moves into a new node,
/// followed by a `<br>`, and the caret lands at the start of what remains.
fn insert_line_break<H: FrameHost, L: LayoutQuery>(
    frame: &mut Frame<H, L>,
    node: &NodeRef,
    offset: usize,
) -> Result<(), EditError> {
    let parent = node.parent().ok_or(EditError::Detached)?;
    let head = node.substring_data(0, offset)?;
    let before = frame.document().create_text(head);
    let br = frame.document().create_element("br");

    node.delete_data(0, offset)?;
    parent.insert_before(&before, Some(node))?;
    parent.insert_before(&br, Some(node))?;

    place_caret(frame, node, 0);
    let mut cx = frame.context();
    for changed in [&before, &br, node] {
        cx.notify_changed(changed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::command::EditCommand;
    use crate::error::EditError;
    use crate::test_utils::{frame, paragraph};
    use dom::Document;

    #[test]
    fn inserts_at_the_caret_and_advances_it() {
        let doc = Document::new();
        let text = doc.create_text("hllo");
        paragraph(&doc, &[&text]);
        let (mut frame, _host) = frame(doc);
        frame.move_caret_to(Some(&text), 1, false);

        EditCommand::input_text(&frame, "e").apply(&mut frame).unwrap();

        assert_eq!(text.text().as_deref(), Some("hello"));
        assert_eq!(frame.caret().offset(), 2);
        assert!(text.is_changed());
        assert!(frame.layout().needs_layout(&text));
    }

    #[test]
    fn multibyte_input_moves_by_its_byte_length() {
        let doc = Document::new();
        let text = doc.create_text("ab");
        paragraph(&doc, &[&text]);
        let (mut frame, _host) = frame(doc);
        frame.move_caret_to(Some(&text), 1, false);

        EditCommand::input_text(&frame, "€").apply(&mut frame).unwrap();

        assert_eq!(text.text().as_deref(), Some("a€b"));
        assert_eq!(frame.caret().offset(), 4);
    }

    #[test]
    fn newline_splits_around_a_line_break() {
        let doc = Document::new();
        let text = doc.create_text("hello");
        let p = paragraph(&doc, &[&text]);
        let (mut frame, _host) = frame(doc);
        frame.move_caret_to(Some(&text), 2, false);

        EditCommand::input_text(&frame, "\n").apply(&mut frame).unwrap();

        let children = p.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].text().as_deref(), Some("he"));
        assert!(children[1].is_line_break());
        assert_eq!(children[2], text);
        assert_eq!(text.text().as_deref(), Some("llo"));
        assert_eq!((frame.caret().node(), frame.caret().offset()), (Some(&text), 0));
        assert!(children.iter().all(|n| n.is_changed()));
    }

    #[test]
    fn newline_at_offset_zero_still_repaints_the_caret() {
        let doc = Document::new();
        let text = doc.create_text("hi");
        paragraph(&doc, &[&text]);
        let (mut frame, _host) = frame(doc);
        frame.move_caret_to(Some(&text), 0, false);
        let before = frame.caret().blink().rect();

        EditCommand::input_text(&frame, "\n").apply(&mut frame).unwrap();

        assert_eq!(frame.caret().offset(), 0);
        assert!(frame.caret().blink().rect().y > before.y);
    }

    #[test]
    fn typing_over_a_range_replaces_it() {
        let doc = Document::new();
        let text = doc.create_text("hello world");
        paragraph(&doc, &[&text]);
        let (mut frame, _host) = frame(doc);
        frame.move_caret_to(Some(&text), 11, false);
        frame.set_selection_range(Some(&text), 6, Some(&text), 11);

        EditCommand::input_text(&frame, "there").apply(&mut frame).unwrap();

        assert_eq!(text.text().as_deref(), Some("hello there"));
        assert_eq!(frame.caret().offset(), 11);
        assert!(!frame.selection().is_range());
    }

    #[test]
    fn non_text_insertion_point_is_rejected_untouched() {
        let doc = Document::new();
        let text = doc.create_text("ab");
        let br = doc.create_element("br");
        let p = paragraph(&doc, &[&text, &br]);
        let (mut frame, _host) = frame(doc);
        frame.move_caret_to(Some(&br), 0, false);

        let err = EditCommand::input_text(&frame, "x").apply(&mut frame).unwrap_err();

        assert_eq!(err, EditError::NotInTextNode);
        assert_eq!(p.children(), vec![text.clone(), br]);
        assert_eq!(text.text().as_deref(), Some("ab"));
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let doc = Document::new();
        let text = doc.create_text("ab");
        paragraph(&doc, &[&text]);
        let (mut frame, _host) = frame(doc);
        frame.move_caret_to(Some(&text), 1, false);

        assert!(EditCommand::input_text(&frame, "").apply_bool(&mut frame));
        assert_eq!(text.text().as_deref(), Some("ab"));
        assert_eq!(frame.caret().offset(), 1);
    }
}
