// web_app/error.rs - Directory load failure
//
// There is one failure kind: the directory could not be loaded. The variants
// only keep the reason for the console diagnostic; every variant is handled
// the same way by the widget.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The response status was outside the success range
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not a `{"mentors": [...]}` document
    #[error("malformed response: {0}")]
    Decode(String),

    /// No browser to issue the request from (server render)
    #[error("directory can only be loaded in the browser")]
    Unavailable,
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Decode(err.to_string())
    }
}
