use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("invalid configuration: max group size must be at least 1 (got {0})")]
    InvalidMaxSize(usize),

    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

impl SplitError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }

    /// True for errors caused by caller-supplied settings rather than a bug.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidMaxSize(_))
    }
}
