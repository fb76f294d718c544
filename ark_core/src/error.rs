use thiserror::Error;

/// The request could not be turned into a `LogRecord`.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("location must not be empty")]
    EmptyLocation,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to write log: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
