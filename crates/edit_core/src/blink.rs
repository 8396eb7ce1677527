use crate::context::EditContext;
use crate::host::{FrameHost, TimerId};
use dom::NodeRef;
use layout::Rect;
use std::time::Duration;

/// Timer and paint state shared by everything that draws a blinking caret.
///
/// `painted` tracks whether the caret is currently drawn; `rect` is where it
/// was drawn last, so it can be erased when it moves.
#[derive(Debug)]
pub struct BlinkState {
    interval: Duration,
    blinks: bool,
    visible: bool,
    painted: bool,
    rect: Rect,
    timer: Option<TimerId>,
}

impl BlinkState {
    pub fn new(interval: Duration, blinks: bool, visible: bool) -> Self {
        Self {
            interval,
            blinks,
            visible,
            painted: false,
            rect: Rect::default(),
            timer: None,
        }
    }

    /// Same settings, nothing painted, no timer.
    pub(crate) fn fresh(&self) -> Self {
        Self::new(self.interval, self.blinks, self.visible)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_painted(&self) -> bool {
        self.painted
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Recompute geometry for `target` and schedule the repaints needed to
    /// move the drawn caret there. `None` means nothing should be drawn.
    pub(crate) fn invalidate(
        &mut self,
        cx: &mut EditContext<'_>,
        target: Option<(&NodeRef, usize)>,
    ) {
        self.release_timer(cx.host);

        let target = match target {
            Some(target) if self.visible => target,
            _ => {
                self.erase(cx.host);
                return;
            }
        };

        if self.blinks {
            self.timer = Some(cx.host.start_timer(self.interval));
        }

        let (node, offset) = target;
        let rect = cx.layout.caret_rect(node, offset).unwrap_or_default();
        if rect != self.rect && self.painted {
            cx.host.update_contents(self.rect);
        }
        self.rect = rect;
        if rect.height > 0.0 {
            self.painted = true;
            cx.host.update_contents(rect);
        } else {
            self.painted = false;
        }
    }

    /// Toggle the drawn state if `id` is our timer.
    pub(crate) fn tick(&mut self, host: &mut dyn FrameHost, id: TimerId) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        self.painted = !self.painted;
        host.repaint_contents(self.rect);
        true
    }

    pub(crate) fn release_timer(&mut self, host: &mut dyn FrameHost) {
        if let Some(id) = self.timer.take() {
            host.kill_timer(id);
        }
    }

    fn erase(&mut self, host: &mut dyn FrameHost) {
        if self.painted {
            host.update_contents(self.rect);
            self.painted = false;
        }
    }
}
