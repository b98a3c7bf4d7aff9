use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Argument '{name}' is null")]
    InvalidArgument { name: &'static str },

    #[error("An element with the same key has already been added (source index {index})")]
    DuplicateKey { index: usize },

    #[error("Keys at source indices {left} and {right} cannot be compared")]
    Comparison { left: usize, right: usize },
}

impl SequenceError {
    pub(crate) fn missing(name: &'static str) -> Self {
        SequenceError::InvalidArgument { name }
    }
}

pub type Result<T> = std::result::Result<T, SequenceError>;

/// Unwraps a required argument or reports it by name.
pub(crate) fn require<T>(arg: Option<T>, name: &'static str) -> Result<T> {
    arg.ok_or_else(|| SequenceError::missing(name))
}
