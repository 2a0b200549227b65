use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComPriceError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Unknown unit: {0} (expected one of pcs, kg, g, L, ml)")]
    UnknownUnit(String),

    #[error("You can only add up to {0} items")]
    TooManyItems(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ComPriceError>;
