use axum::Json;
use serde::Serialize;

use crate::result::ApiResponse;

pub fn success_to_api_response<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

pub fn error_to_api_response<T: Serialize>(code: i32, msg: String) -> Json<ApiResponse<T>> {
    Json(ApiResponse::error(code, msg))
}

pub mod error_codes {
    pub const SUCCESS: i32 = 0;
    pub const VALIDATION_ERROR: i32 = 1000;
    pub const NOT_FOUND: i32 = 1004;
    pub const DATABASE_ERROR: i32 = 5001;
    pub const CACHE_ERROR: i32 = 5002;
}
