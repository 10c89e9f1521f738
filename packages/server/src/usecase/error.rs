//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// Errors returned by every use case
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    /// The store failed; the action was aborted
    #[error(transparent)]
    Store(#[from] RepositoryError),

    /// Input was rejected for a reason other than being blank
    #[error(transparent)]
    InvalidInput(#[from] ValueObjectError),
}
