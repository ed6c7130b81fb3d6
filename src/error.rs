use thiserror::Error;

pub type RegistrarResult<T> = Result<T, RegistrarError>;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistrarError {
    /// Status code of a non-200 response, if that is what this error is
    pub fn status(&self) -> Option<u16> {
        match self {
            RegistrarError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RegistrarError {
    fn from(err: reqwest::Error) -> Self {
        RegistrarError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for RegistrarError {
    fn from(err: serde_json::Error) -> Self {
        RegistrarError::Parse(err.to_string())
    }
}
