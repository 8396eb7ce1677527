//! # dom
//!
//! Shared-ownership node tree used by the editing core.
//!
//! Nodes are handed out as [`NodeRef`] strong handles: the [`Document`] holds
//! its tree through them, and so does every caret or selection endpoint that
//! points into it. Removing a node from the tree never invalidates a handle;
//! it only detaches the subtree.
//!
//! Offsets into text nodes are UTF-8 byte offsets and must sit on character
//! boundaries.

pub mod dom_utils;
pub mod range;

mod document;
mod error;
mod node;
mod traverse;

pub use document::Document;
pub use error::DomError;
pub use node::{Id, NodeId, NodeKind, NodeRef};
pub use range::{delete_range, range_text};
