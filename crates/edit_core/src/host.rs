//! Host-side capabilities consumed by the editing core.
//!
//! The core never owns a thread or an event loop. It asks the host to
//! schedule and cancel a recurring blink timer, to repaint rectangles, and
//! tells it about caret, focus and selection changes. The host delivers
//! timer ticks back through [`Frame::timer_fired`](crate::Frame::timer_fired).

use dom::NodeRef;
use layout::Rect;
use std::time::Duration;

/// Opaque handle to a recurring timer scheduled by the host.
///
/// The value has no meaning to the core; it is only compared against the
/// handle returned by [`FrameHost::start_timer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// Trait implemented by whatever window or view hosts a [`Frame`](crate::Frame).
pub trait FrameHost {
    /// Schedule a recurring timer firing every `interval`.
    fn start_timer(&mut self, interval: Duration) -> TimerId;

    /// Cancel a timer returned by [`start_timer`](Self::start_timer).
    fn kill_timer(&mut self, id: TimerId);

    /// Request a deferred, coalesced redraw of `rect`.
    fn update_contents(&mut self, rect: Rect);

    /// Request an immediate redraw of `rect`.
    fn repaint_contents(&mut self, rect: Rect);

    /// Whether a document view is attached. Edit commands refuse to run
    /// without one.
    fn has_view(&self) -> bool {
        true
    }

    fn caret_position_changed(&mut self) {}

    /// `node` became the document's focus target.
    fn node_activated(&mut self, _node: &NodeRef) {}

    fn selection_cleared(&mut self) {}
}
