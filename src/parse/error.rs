use thiserror::Error;

/// Errors produced when parsing a rule string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is neither split by a connective nor a valid condition.
    /// Carries the trimmed text of the innermost segment that failed.
    #[error("invalid rule: {0}")]
    InvalidRule(String),
}
