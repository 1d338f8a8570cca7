use thiserror::Error;

#[derive(Error, Debug)]
pub enum FanrpcError {
    #[error("malformed request: {0}")]
    MalformedInput(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("call timed out after {0}s")]
    Timeout(u64),

    #[error("remote call failed: {0}")]
    RemoteCall(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FanrpcError {
    /// Process exit code communicating this failure.
    ///
    /// Codes 1-3 cover local failures (unusable argument, undecodable input,
    /// missing required field); everything remote or environmental exits 4.
    pub fn exit_code(&self) -> i32 {
        match self {
            FanrpcError::Io(_) => 1,
            FanrpcError::MalformedInput(_) => 2,
            FanrpcError::MissingField(_) => 3,
            FanrpcError::Transport(_)
            | FanrpcError::Timeout(_)
            | FanrpcError::RemoteCall(_)
            | FanrpcError::InvalidResponse(_)
            | FanrpcError::JsonSerialization(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, FanrpcError>;
