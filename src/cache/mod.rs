// 缓存模块
// 对 Redis 命令的一对一封装，每个方法从连接池借出一个连接并执行一条命令

pub mod error;
pub mod models;
pub mod operations;

use std::sync::Arc;
use std::time::Duration;

use deadpool_redis::{Config as PoolSettings, Connection, Pool, PoolConfig, PoolError, Runtime};
use redis::{ErrorKind, RedisError};

pub use error::{CacheError, CacheResult};
pub use models::{InsertPosition, KeyType, ScoredMember, SortOptions, Ttl};

/// 长超时时间：60分钟（秒）
pub const TIME_OUT_LONG: u64 = 60 * 60;
/// 短超时时间：30分钟（秒）
pub const TIME_OUT_SHORT: u64 = 30 * 60;

/// 连接池默认大小
pub const DEFAULT_POOL_SIZE: usize = 16;
/// 等待空闲连接的最长时间
const POOL_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Redis 缓存门面
///
/// 不持有任何业务状态，只持有连接池句柄。各命令族的方法分布在
/// `operations` 的子模块中。
#[derive(Clone)]
pub struct RedisCache {
    pool: Arc<Pool>,
}

impl RedisCache {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    pub fn open(redis_url: &str) -> CacheResult<Self> {
        Self::open_with_size(redis_url, DEFAULT_POOL_SIZE)
    }

    /// 创建连接池，连接在首次使用时才建立
    pub fn open_with_size(redis_url: &str, max_size: usize) -> CacheResult<Self> {
        // 先校验 URL，错误信息比连接池的更具体
        redis::Client::open(redis_url)?;

        let mut settings = PoolSettings::from_url(redis_url);
        let mut pool_config = PoolConfig::new(max_size.max(1));
        pool_config.timeouts.wait = Some(POOL_WAIT_TIMEOUT);
        settings.pool = Some(pool_config);

        let pool = settings.create_pool(Some(Runtime::Tokio1)).map_err(|e| {
            CacheError::from(RedisError::from((
                ErrorKind::InvalidClientConfig,
                "Failed to create Redis pool",
                e.to_string(),
            )))
        })?;
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &Arc<Pool> {
        &self.pool
    }

    /// 从连接池借出一个连接，作用域结束时归还
    pub(crate) async fn connection(&self) -> CacheResult<Connection> {
        self.pool.get().await.map_err(pool_failure)
    }
}

fn pool_failure(e: PoolError) -> CacheError {
    match e {
        PoolError::Backend(e) => CacheError::ConnectionFailure(e),
        other => CacheError::ConnectionFailure(RedisError::from((
            ErrorKind::IoError,
            "Redis pool unavailable",
            other.to_string(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_invalid_url() {
        assert!(RedisCache::open("not a url").is_err());
    }

    #[test]
    fn test_pool_size_is_at_least_one() {
        let cache = RedisCache::open_with_size("redis://127.0.0.1:1/", 0).unwrap();
        assert_eq!(cache.pool().status().max_size, 1);
    }

    #[test]
    fn test_closed_pool_is_connection_failure() {
        let err = pool_failure(PoolError::Closed);
        assert!(matches!(err, CacheError::ConnectionFailure(_)));
    }
}
