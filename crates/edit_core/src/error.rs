use dom::DomError;
use std::path::PathBuf;

/// Why an edit command did not apply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("no document view is attached")]
    NoView,
    #[error("insertion point is not inside a text node")]
    NotInTextNode,
    #[error("insertion point is not attached to a parent")]
    Detached,
    #[error("nothing before the caret to delete")]
    NothingToDelete,
    #[error(transparent)]
    Dom(#[from] DomError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid editor config: {0}")]
    Parse(#[from] toml::de::Error),
}
