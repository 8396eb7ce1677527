//! # caretkit
//!
//! Facade over the workspace crates:
//!
//! - [`dom`]: the shared node tree and its mutation primitives
//! - [`layout`]: the geometry seam ([`layout::LayoutQuery`]) and a flow
//!   layout that implements it
//! - [`edit_core`]: caret, selection and edit commands
//!
//! ```
//! use caretkit::dom::Document;
//! use caretkit::edit_core::{EditCommand, EditorConfig, Frame, FrameHost, TimerId};
//! use caretkit::layout::{FlowLayout, Rect};
//! use std::time::Duration;
//!
//! struct Host;
//! impl FrameHost for Host {
//!     fn start_timer(&mut self, _: Duration) -> TimerId { TimerId::from_raw(1) }
//!     fn kill_timer(&mut self, _: TimerId) {}
//!     fn update_contents(&mut self, _: Rect) {}
//!     fn repaint_contents(&mut self, _: Rect) {}
//! }
//!
//! let doc = Document::new();
//! let p = doc.create_element("p");
//! let text = doc.create_text("ab");
//! doc.root().append_child(&p).unwrap();
//! p.append_child(&text).unwrap();
//!
//! let mut frame = Frame::new(doc, FlowLayout::new(), Host, EditorConfig::default());
//! frame.move_caret_to(Some(&text), 1, true);
//! EditCommand::input_text(&frame, "X").apply(&mut frame).unwrap();
//! assert_eq!(text.text().as_deref(), Some("aXb"));
//! ```

pub use dom;
pub use edit_core;
pub use layout;
