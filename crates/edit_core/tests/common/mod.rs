#![allow(dead_code)]

use dom::{Document, NodeRef};
use edit_core::{EditorConfig, Frame, FrameHost, TimerId};
use layout::{FlowLayout, Rect};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct Paints {
    next_timer: u64,
    pub live_timers: Vec<TimerId>,
    pub updates: Vec<Rect>,
    pub repaints: Vec<Rect>,
    pub caret_moves: usize,
}

/// Minimal host: hands out timer ids and records repaint requests.
#[derive(Clone, Debug, Default)]
pub struct TestHost {
    pub paints: Rc<RefCell<Paints>>,
}

impl FrameHost for TestHost {
    fn start_timer(&mut self, _interval: Duration) -> TimerId {
        let mut paints = self.paints.borrow_mut();
        paints.next_timer += 1;
        let id = TimerId::from_raw(paints.next_timer);
        paints.live_timers.push(id);
        id
    }

    fn kill_timer(&mut self, id: TimerId) {
        self.paints.borrow_mut().live_timers.retain(|t| *t != id);
    }

    fn update_contents(&mut self, rect: Rect) {
        self.paints.borrow_mut().updates.push(rect);
    }

    fn repaint_contents(&mut self, rect: Rect) {
        self.paints.borrow_mut().repaints.push(rect);
    }

    fn caret_position_changed(&mut self) {
        self.paints.borrow_mut().caret_moves += 1;
    }
}

pub type TestFrame = Frame<TestHost, FlowLayout>;

/// `<html><body>` with one `<p>` per entry, each holding a text node.
/// Returns the document and the text nodes.
pub fn paragraphs(texts: &[&str]) -> (Document, Vec<NodeRef>) {
    let doc = Document::new();
    let html = doc.create_element("html");
    let body = doc.create_element("body");
    doc.root().append_child(&html).unwrap();
    html.append_child(&body).unwrap();
    let nodes = texts
        .iter()
        .map(|t| {
            let p = doc.create_element("p");
            let text = doc.create_text(*t);
            body.append_child(&p).unwrap();
            p.append_child(&text).unwrap();
            text
        })
        .collect();
    (doc, nodes)
}

pub fn frame(doc: Document) -> (TestFrame, TestHost) {
    let host = TestHost::default();
    let frame = Frame::new(doc, FlowLayout::new(), host.clone(), EditorConfig::default());
    (frame, host)
}
