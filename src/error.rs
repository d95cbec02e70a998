// ABOUTME: Application-wide error types for cntnr.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::runtime::RuntimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Process exit code for this error. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Runtime(e) => e.exit_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
