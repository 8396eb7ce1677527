//! # edit_core
//!
//! Caret, selection and text editing over a [`dom`] tree.
//!
//! A [`Frame`] owns a document together with its layout and host, plus one
//! [`Caret`] and one [`Selection`]. Everything that changes on screen goes
//! through the [`FrameHost`] trait: blink timers, repaint requests and focus
//! notifications. Text edits are [`EditCommand`]s, applied against a
//! snapshot of the selection taken when they were created.
//!
//! ## Offsets
//!
//! Offsets into text nodes are UTF-8 byte offsets and always sit on a
//! character boundary. Non-text nodes only accept offset 0.

mod blink;
mod caret;
mod command;
mod config;
mod context;
pub mod document_order;
mod error;
mod frame;
mod host;
mod key;
mod position;
mod selection;
mod text;

#[cfg(test)]
pub(crate) mod test_utils;

pub use blink::BlinkState;
pub use caret::{Caret, ensure_node_has_focus};
pub use command::{CommandId, EditCommand, EditCommandKind};
pub use config::{CARET_BLINK_INTERVAL, CaretConfig, DEFAULT_BLINK_INTERVAL_MS, EditorConfig};
pub use context::EditContext;
pub use document_order::{TreeOrder, position_precedes, precedes, tree_order};
pub use error::{ConfigError, EditError};
pub use frame::Frame;
pub use host::{FrameHost, TimerId};
pub use key::EditKey;
pub use position::Position;
pub use selection::{Selection, SelectionState};
pub use text::{clamp_to_char_boundary, next_cursor_boundary, prev_cursor_boundary};
