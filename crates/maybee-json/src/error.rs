use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed JSON, a value of the wrong shape, or an I/O failure underneath.
    #[error("json codec error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CodecError> = core::result::Result<T, E>;
