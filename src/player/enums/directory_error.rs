use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Unknown identity: {0}")]
    UnknownIdentity(String),

    #[error("Directory error: {0}")]
    Backend(String),
}
