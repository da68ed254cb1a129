//! Error types for Concord

use thiserror::Error;

/// Main error type for Concord operations
#[derive(Debug, Error)]
pub enum ConcordError {
    /// A generator could not be resumed
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Writing demo output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Demo configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Terminal conditions reported by [`Generator::resume`](crate::Generator::resume).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Resumed after the producer already completed
    #[error("generator is exhausted")]
    Exhausted,

    /// The producer panicked; the generator is now done
    #[error("producer panicked: {0}")]
    ProducerPanicked(String),
}

/// Result type alias for Concord operations
pub type Result<T> = std::result::Result<T, ConcordError>;
