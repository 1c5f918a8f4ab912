use redis::{ErrorKind, RedisError};
use thiserror::Error;

/// 缓存操作错误
#[derive(Debug, Error)]
pub enum CacheError {
    /// 命令要求的键或元素不存在
    #[error("key not found: {0}")]
    NotFound(String),

    /// 连接失败（IO、拒绝连接、断开、超时、认证）
    #[error("redis connection failure: {0}")]
    ConnectionFailure(#[source] RedisError),

    /// 返回值无法转换为目标类型，或 JSON 序列化失败
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// 服务端返回的其他错误，例如 WRONGTYPE
    #[error("redis command failed: {0}")]
    Command(#[source] RedisError),
}

pub type CacheResult<T> = Result<T, CacheError>;

impl From<RedisError> for CacheError {
    fn from(e: RedisError) -> Self {
        if e.is_io_error()
            || e.is_connection_refusal()
            || e.is_connection_dropped()
            || e.is_timeout()
            || matches!(e.kind(), ErrorKind::IoError | ErrorKind::AuthenticationFailed)
        {
            CacheError::ConnectionFailure(e)
        } else if e.kind() == ErrorKind::TypeError {
            CacheError::SerializationError(e.to_string())
        } else {
            CacheError::Command(e)
        }
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        CacheError::SerializationError(e.to_string())
    }
}

/// 服务端对缺失键返回 `ERR no such key`（如 LSET）
pub(crate) fn is_no_such_key(e: &RedisError) -> bool {
    e.kind() == ErrorKind::ResponseError && e.detail().is_some_and(|d| d.contains("no such key"))
}
