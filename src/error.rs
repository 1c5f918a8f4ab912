use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cache::CacheError;
use crate::utils::{error_codes, error_to_api_response};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, i32) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::DATABASE_ERROR),
            AppError::Cache(CacheError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, error_codes::NOT_FOUND)
            }
            AppError::Cache(_) => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::CACHE_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 5xx 由 log_errors 中间件统一记录
        let (status, code) = self.status_and_code();
        (status, error_to_api_response::<()>(code, self.to_string())).into_response()
    }
}
