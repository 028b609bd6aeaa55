use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaddyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    StoreError(String),
}
