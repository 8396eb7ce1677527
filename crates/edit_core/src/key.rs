use crate::command::EditCommand;
use crate::error::EditError;
use crate::frame::Frame;
use crate::host::FrameHost;
use layout::LayoutQuery;

/// Editing keys a host forwards to a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditKey {
    /// Committed text, typically one character.
    Text(String),
    Enter,
    Backspace,
    /// With `extend`, the selection follows the caret (shift held).
    Left { extend: bool },
    Right { extend: bool },
}

impl<H: FrameHost, L: LayoutQuery> Frame<H, L> {
    pub fn handle_key(&mut self, key: EditKey) -> Result<(), EditError> {
        log::trace!(target: "edit.command", "key {key:?}");
        match key {
            EditKey::Text(text) => EditCommand::input_text(self, text).apply(self),
            EditKey::Enter => EditCommand::input_text(self, "\n").apply(self),
            EditKey::Backspace => EditCommand::delete_text(self).apply(self),
            EditKey::Left { extend } => {
                self.step_caret(false, extend);
                Ok(())
            }
            EditKey::Right { extend } => {
                self.step_caret(true, extend);
                Ok(())
            }
        }
    }

    fn step_caret(&mut self, forward: bool, extend: bool) {
        if extend && !self.selection().is_range() {
            let anchor = self.caret().position().clone();
            self.set_selection(anchor.node(), anchor.offset());
        }

        if forward {
            self.move_caret_forward();
        } else {
            self.move_caret_backward();
        }

        if extend {
            let focus = self.caret().position().clone();
            self.set_selection_extent(focus.node(), focus.offset());
        } else if !self.selection().is_empty() {
            self.clear_selection();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{frame, paragraph};
    use dom::Document;

    #[test]
    fn typing_enter_and_backspace() {
        let doc = Document::new();
        let text = doc.create_text("");
        let p = paragraph(&doc, &[&text]);
        let (mut frame, _host) = frame(doc);
        frame.move_caret_to(Some(&text), 0, false);

        for key in ["a", "b"] {
            frame.handle_key(EditKey::Text(key.into())).unwrap();
        }
        frame.handle_key(EditKey::Enter).unwrap();
        frame.handle_key(EditKey::Text("c".into())).unwrap();
        assert_eq!(p.child_count(), 3);
        assert_eq!(text.text().as_deref(), Some("c"));

        // Emptying the second line prunes it together with the <br>.
        frame.handle_key(EditKey::Backspace).unwrap();
        assert_eq!(p.child_count(), 1);
        assert_eq!(frame.caret().node().and_then(|n| n.text()).as_deref(), Some("ab"));
        assert_eq!(frame.caret().offset(), 2);

        frame.handle_key(EditKey::Backspace).unwrap();
        assert_eq!(frame.caret().node().and_then(|n| n.text()).as_deref(), Some("a"));
    }

    #[test]
    fn shift_arrows_grow_a_selection_and_plain_arrows_drop_it() {
        let doc = Document::new();
        let text = doc.create_text("hello");
        paragraph(&doc, &[&text]);
        let (mut frame, _host) = frame(doc);
        frame.move_caret_to(Some(&text), 1, false);

        frame.handle_key(EditKey::Right { extend: true }).unwrap();
        frame.handle_key(EditKey::Right { extend: true }).unwrap();
        assert_eq!(frame.selection().text(), "el");

        frame.handle_key(EditKey::Left { extend: false }).unwrap();
        assert!(frame.selection().is_empty());
        assert_eq!(frame.caret().offset(), 2);
    }
}
