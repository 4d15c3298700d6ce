use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("form field `{0}` not found")]
    MissingField(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
