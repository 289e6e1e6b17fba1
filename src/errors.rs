use thiserror::Error;

/// Error type covering client-core configuration and remote failures.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Request(#[from] crate::api::RequestError),
}
