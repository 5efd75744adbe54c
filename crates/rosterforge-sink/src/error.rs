use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("workbook error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] rosterforge_core::Error),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SinkError>;
