use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Service error: {0}")]
    Client(#[from] sleeve_client::ClientError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
