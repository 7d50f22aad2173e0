use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("docker-compose binary not found")]
    BinaryNotFound,

    #[error("failed to run docker-compose: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("docker-compose failed ({status}): {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::BinaryNotFound => "BINARY_NOT_FOUND",
            Error::Spawn(_) => "SPAWN_ERROR",
            Error::Failed { .. } => "EXECUTION_FAILED",
        }
    }

    /// Captured stderr from a failed invocation, if any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Error::Failed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
