use crate::host::{FrameHost, TimerId};
use crate::{EditorConfig, Frame};
use dom::{Document, NodeRef};
use layout::{FlowLayout, Rect};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Default)]
pub(crate) struct HostLog {
    next_timer: u64,
    pub live_timers: Vec<TimerId>,
    pub intervals: Vec<Duration>,
    pub updates: Vec<Rect>,
    pub repaints: Vec<Rect>,
    pub caret_moves: usize,
    pub activated: Vec<NodeRef>,
    pub selection_clears: usize,
}

/// Host that records every request. Clones share one log.
#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
    pub without_view: bool,
}

impl RecordingHost {
    pub fn log(&self) -> Ref<'_, HostLog> {
        self.log.borrow()
    }
}

impl FrameHost for RecordingHost {
    fn start_timer(&mut self, interval: Duration) -> TimerId {
        let mut log = self.log.borrow_mut();
        log.next_timer += 1;
        let id = TimerId::from_raw(log.next_timer);
        log.live_timers.push(id);
        log.intervals.push(interval);
        id
    }

    fn kill_timer(&mut self, id: TimerId) {
        self.log.borrow_mut().live_timers.retain(|t| *t != id);
    }

    fn update_contents(&mut self, rect: Rect) {
        self.log.borrow_mut().updates.push(rect);
    }

    fn repaint_contents(&mut self, rect: Rect) {
        self.log.borrow_mut().repaints.push(rect);
    }

    fn has_view(&self) -> bool {
        !self.without_view
    }

    fn caret_position_changed(&mut self) {
        self.log.borrow_mut().caret_moves += 1;
    }

    fn node_activated(&mut self, node: &NodeRef) {
        self.log.borrow_mut().activated.push(node.clone());
    }

    fn selection_cleared(&mut self) {
        self.log.borrow_mut().selection_clears += 1;
    }
}

/// `#document > body > p` with the given children appended to `p`.
pub(crate) fn paragraph(doc: &Document, children: &[&NodeRef]) -> NodeRef {
    let body = doc.create_element("body");
    let p = doc.create_element("p");
    doc.root().append_child(&body).unwrap();
    body.append_child(&p).unwrap();
    for child in children {
        p.append_child(child).unwrap();
    }
    p
}

pub(crate) type TestFrame = Frame<RecordingHost, FlowLayout>;

/// Frame over `doc` plus a handle onto its host's log.
pub(crate) fn frame(doc: Document) -> (TestFrame, RecordingHost) {
    let host = RecordingHost::default();
    let frame = Frame::new(doc, FlowLayout::new(), host.clone(), EditorConfig::default());
    (frame, host)
}
