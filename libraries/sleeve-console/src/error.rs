use thiserror::Error;

/// Errors that can occur during console operations
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Service error: {0}")]
    Client(#[from] sleeve_client::ClientError),

    #[error("Invalid input: {0}")]
    Invalid(#[from] sleeve_core::SleeveError),

    #[error("Invalid form data: {0}")]
    Form(String),

    #[error("No album selected")]
    NoAlbumSelected,

    #[error("Nothing selected")]
    NothingSelected,

    #[error("Row not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
