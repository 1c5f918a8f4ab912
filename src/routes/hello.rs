use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, database::UserRepository, error::AppError, utils::success_to_api_response,
};

pub const GREETING: &str = "Hello Axum";

#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
}

pub async fn hello() -> &'static str {
    GREETING
}

/// 原样返回请求参数中的 name
pub async fn info(Query(query): Query<InfoQuery>) -> Json<InfoResponse> {
    Json(InfoResponse { name: query.name })
}

/// 用户列表
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserRepository::list_all(&state.db).await?;
    tracing::debug!("Listed {} users", users.len());
    Ok(success_to_api_response(users))
}
