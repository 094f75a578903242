use crate::model::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsersError {
    #[error("Wrong data! {0}")]
    InvalidUser(#[from] ValidationError),

    #[error("User not found...")]
    UserNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl UsersError {
    /// Errors the prompt loop reports to the operator and then carries on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UsersError::InvalidUser(_) | UsersError::UserNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, UsersError>;
