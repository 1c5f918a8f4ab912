use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::{AppState, middleware::log_errors, routes};

// 问候与页面相关的路由
pub fn hello_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(routes::hello::hello))
        .route("/hello/info", get(routes::hello::info))
        .route("/hello/list", get(routes::hello::list))
}

// 用户 REST 路由
pub fn user_api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/tests",
            get(routes::user::list_users).post(routes::user::create_user),
        )
        .route(
            "/api/tests/{id}",
            get(routes::user::get_user)
                .put(routes::user::update_user)
                .delete(routes::user::delete_user),
        )
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(routes::ping::ping))
        .merge(hello_routes())
        .merge(user_api_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
