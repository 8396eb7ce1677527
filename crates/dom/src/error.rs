use crate::Id;

/// Errors raised by DOM primitives.
///
/// Every primitive validates its arguments before touching the tree, so an
/// `Err` always means nothing was mutated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("offset {offset} is past the end of data of length {len}")]
    IndexSize { offset: usize, len: usize },
    #[error("offset {0} does not fall on a character boundary")]
    NotCharBoundary(usize),
    #[error("node {0:?} is not a text node")]
    NotText(Id),
    #[error("node {0:?} cannot have children")]
    InvalidParent(Id),
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: Id, child: Id },
    #[error("inserting {child:?} under {parent:?} would create a cycle")]
    CycleDetected { parent: Id, child: Id },
    #[error("range end {end:?} does not follow start {start:?} in the same tree")]
    InvalidRange { start: Id, end: Id },
}
