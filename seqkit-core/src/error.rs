//! Error types for sequence operations

/// Errors that can occur during sequence operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeqError {
    /// Extremum requested over an empty sequence
    EmptySequence,
    /// Chunk size must be at least one
    InvalidChunkSize,
}

/// Broad classification of a [`SeqError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// The caller violated a documented precondition on the input sequence
    Precondition,
    /// An argument other than the sequence itself was out of range
    InvalidArgument,
}

impl SeqError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SeqError::EmptySequence => ErrorCategory::Precondition,
            SeqError::InvalidChunkSize => ErrorCategory::InvalidArgument,
        }
    }
}

impl core::fmt::Display for SeqError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SeqError::EmptySequence => "Sequence must not be empty",
            SeqError::InvalidChunkSize => "Chunk size must be greater than zero",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for SeqError {}

/// Result type for sequence operations
pub type Result<T> = core::result::Result<T, SeqError>;
