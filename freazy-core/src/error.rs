use thiserror::Error;

/// Errors raised while normalising or validating an invoice record.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// A quantity, price, rate or term could not be read as a number.
    #[error("invalid amount {value:?}")]
    InvalidAmount { value: String },

    /// A date field is neither empty nor an ISO-8601 date.
    #[error("invalid date {0:?}")]
    InvalidDate(String),

    /// The record is not complete enough to be submitted.
    #[error("invoice is incomplete: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Errors raised by the preview and PDF renderers.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("preview template failed: {0}")]
    Template(#[from] askama::Error),

    #[error("pdf generation failed: {0}")]
    Pdf(String),

    #[error("render task aborted: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<printpdf::Error> for RenderError {
    fn from(err: printpdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

/// Errors raised by the document history and its exports.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history storage failed: {0}")]
    Storage(#[from] std::io::Error),

    #[error("history serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    /// An imported backup is not a list of documents.
    #[error("invalid backup format: {0}")]
    InvalidFormat(String),

    #[error("no history entry at index {0}")]
    IndexOutOfRange(usize),
}

/// Errors raised by the saved clients and items store.
#[derive(Debug, Error)]
pub enum SmartDataError {
    #[error("saved data storage failed: {0}")]
    Storage(#[from] std::io::Error),

    #[error("saved data serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
