use thiserror::Error;

/// Why a reply from the remote feedback service was rejected.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote feedback service unavailable: {0}")]
    Unavailable(String),

    #[error("no JSON object found in remote reply")]
    NoJson,

    #[error("malformed remote reply: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("remote reply contained no feedback")]
    Empty,
}
