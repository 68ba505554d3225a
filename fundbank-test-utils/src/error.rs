use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error("Unexpected test state: {0}")]
    Unexpected(String),
}
