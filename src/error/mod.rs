use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Hosted completion endpoint errors
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Completion contained no text")]
    EmptyCompletion,

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors raised by operations on a research session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No account plan has been generated yet")]
    NoPlan,

    #[error("Unknown section: {key}")]
    UnknownSection { key: String },

    #[error("Error enhancing section: {0}")]
    Enhance(#[source] CompletionError),
}

/// Errors writing account plan exports
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize plan: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for completion calls
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Result type alias for exports
pub type ExportResult<T> = Result<T, ExportError>;
