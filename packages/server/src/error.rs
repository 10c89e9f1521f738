//! Errors that stop the server from starting or running.

use thiserror::Error;

use crate::domain::RepositoryError;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The message store could not be opened
    #[error("failed to open message store: {0}")]
    Store(#[from] RepositoryError),

    /// Binding or serving failed
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
