use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response, with the message the server supplied (or its raw body).
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
        }
    }
}
