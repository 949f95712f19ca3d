use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invocation error: {0}")]
    InvocationError(String),
    #[error("Logger error: {0}")]
    LoggerError(String),
}

/// Raised when the partner metadata stored on a payment cannot be decoded.
///
/// Never crosses the override rule's boundary: the rule recovers from it by
/// returning the payment request untouched.
#[derive(Error, Debug)]
#[error("unable to unserialize partner metadata: {reason}")]
pub struct MetadataDecodeError {
    pub reason: String,
}

impl From<serde_json::Error> for MetadataDecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PluginError>;
