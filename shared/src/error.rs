use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0} is already registered")]
    DuplicateUserError(String),
    #[error("{0}")]
    ReferentialIntegrityError(String),
    #[error("an error occurred while running a database query")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("failed to hash the credential")]
    HashingError(#[from] bcrypt::BcryptError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Stable, machine-readable failure kind carried in every error response.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation",
            AppError::DuplicateUserError(_) => "duplicate_user",
            AppError::ReferentialIntegrityError(_) => "referential_integrity",
            AppError::SpecificOperationError(_) | AppError::NoRowsAffectedError(_) => "storage",
            AppError::HashingError(_) => "hashing",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateUserError(_) => StatusCode::CONFLICT,
            AppError::ReferentialIntegrityError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            e @ (AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::HashingError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e, error.message = %e,
                    "unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));

        (status_code, body).into_response()
    }
}
