use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Transport or protocol failure talking to the media API
    #[error("API error: {0}")]
    ApiError(String),

    /// The media API answered with a non-success status other than 429
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The search session owning the request was closed or replaced
    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Message shown to the user. Keeps the wording short and hides
    /// internals such as SQL errors.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ApiError(_) | AppError::HttpStatus { .. } => {
                "Search failed. Check your connection and try again.".to_string()
            }
            AppError::RateLimitError(_) => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            AppError::NotFound(what) => format!("{} not found", what),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::DatabaseError(_) => "Could not access saved favorites.".to_string(),
            AppError::Cancelled(_) => "Search was cancelled.".to_string(),
            AppError::SerializationError(_) => {
                "Received an unexpected response from the server.".to_string()
            }
            AppError::ConfigurationError(msg) => format!("App is misconfigured: {}", msg),
            AppError::InternalError(_) => "Something went wrong.".to_string(),
        }
    }

    /// Whether the error came from the network side (used for offline fallbacks).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::ApiError(_) | AppError::HttpStatus { .. } | AppError::RateLimitError(_)
        )
    }

    pub fn is_http_status(&self, code: u16) -> bool {
        matches!(self, AppError::HttpStatus { status, .. } if *status == code)
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<diesel::ConnectionError> for AppError {
    fn from(err: diesel::ConnectionError) -> Self {
        AppError::DatabaseError(format!("Database connection error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ApiError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ApiError("Failed to connect to media service".to_string())
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimitError("Too many requests".to_string()),
                code => AppError::HttpStatus {
                    status: code,
                    message: err.to_string(),
                },
            }
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Background task failed: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Error mapper for command handlers: logs the failure and returns the user-facing text
pub fn command_error(command: &'static str) -> impl Fn(AppError) -> String {
    move |err| {
        match &err {
            AppError::Cancelled(_) | AppError::NotFound(_) | AppError::InvalidInput(_) => {
                log::info!("{} rejected: {}", command, err)
            }
            _ => log::error!("{} failed: {}", command, err),
        }
        err.user_message()
    }
}
