use thiserror::Error;

/// User-input validation failures at submit time.
///
/// Both are handled entirely at the submission site: the only observable
/// effect is a transient notification, and list state is left unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One or both of title/image URL were empty
    #[error("missing field: title and image URL are both required")]
    MissingField,

    /// A recipe with the identical (title, image URL) pair already exists
    #[error("duplicate entry: recipe already exists in the list")]
    DuplicateEntry,
}

/// Errors that can abort the hosting terminal application
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Terminal I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
