use thiserror::Error;

/// Bad user input. Always recoverable: nothing changed, the user fixes the
/// input and tries again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a todo item")]
    EmptyTodoText,

    #[error("Name is required")]
    MissingName,

    #[error("Email is required")]
    MissingEmail,

    #[error("Profile is not in edit mode")]
    NotEditing,

    #[error("Unknown profile field: {0}")]
    UnknownField(String),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("No todo at index {0}")]
    IndexNotFound(usize),
}

#[derive(Error, Debug)]
pub enum PocketError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Media error: {0}")]
    Media(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Config error: {0}")]
    ConfigFormat(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PocketError>;
