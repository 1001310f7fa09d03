use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CleanerError>;
