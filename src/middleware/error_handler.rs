use axum::{
    body::{Body, to_bytes},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use tracing::error;

/// 日志中记录的响应体长度上限，超出部分截断
const MAX_LOGGED_BODY: usize = 4096;

/// 记录所有 5xx 响应的请求与响应体
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            error!("{} {} failed, unreadable body: {}", method, uri, e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    error!(
        "{} {} failed - Status: {}, Body: {}",
        method,
        uri,
        parts.status,
        String::from_utf8_lossy(&bytes[..bytes.len().min(MAX_LOGGED_BODY)])
    );

    // 重置body以便重新构建响应
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
