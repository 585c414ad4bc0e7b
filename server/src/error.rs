use ntex::http::StatusCode;
use ntex::web::{HttpRequest, HttpResponse, WebResponseError};
use survivor_common::{ApiResponse, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("Malformed query string: {0}")]
    MalformedQuery(#[from] serde_urlencoded::de::Error),
    #[error("Database error: {0}")]
    Persistence(#[from] rusqlite::Error),
}

impl WebResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedBody(_) | AppError::MalformedQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self, _: &HttpRequest) -> HttpResponse {
        let message = match self {
            AppError::Validation(e) => e.to_string(),
            AppError::MalformedBody(_) | AppError::MalformedQuery(_) => self.to_string(),
            AppError::Persistence(e) => {
                tracing::error!(error = %e, "leaderboard write failed");
                "Failed to submit score".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(&ApiResponse::<()>::failure(message))
    }
}
