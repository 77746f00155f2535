use thiserror::Error;

use crate::parse::ParseError;
use crate::{CombineError, ServiceError, StoreError};

/// Unified error type for callers that drive several parts of the crate and
/// want a single error to propagate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Combine(#[from] CombineError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}
