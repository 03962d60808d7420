//! Orbit model error types.

/// Errors raised while building or querying the orbit model.
#[derive(Debug, thiserror::Error)]
pub enum OrbitError {
    /// A body name with no entry in the settings table.
    #[error("unknown body '{0}'")]
    UnknownBody(String),

    /// Two settings entries share a name.
    #[error("body '{0}' is defined more than once")]
    DuplicateBody(String),

    /// A `parent` reference that names no body.
    #[error("body '{body}' has unknown parent '{parent}'")]
    UnknownParent { body: String, parent: String },

    /// An `alias_of` reference that names no concrete body.
    #[error("alias '{alias}' points at '{target}', which is not a concrete body")]
    BadAlias { alias: String, target: String },

    /// The parent chain loops back on itself.
    #[error("parent chain of '{0}' contains a cycle")]
    ParentCycle(String),

    /// Failed to read a body table from disk.
    #[error("failed to read body table: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write a body table to disk.
    #[error("failed to write body table: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse body table: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize a body table.
    #[error("failed to serialize body table: {0}")]
    SerializeError(#[source] ron::Error),
}
