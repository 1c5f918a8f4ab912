use redis::AsyncCommands;

use crate::cache::{CacheError, CacheResult, KeyType, RedisCache, SortOptions, Ttl};

impl RedisCache {
    /// 删除 key，返回 key 是否存在并被删除
    pub async fn remove(&self, key: &str) -> CacheResult<bool> {
        Ok(self.remove_count(key).await? > 0)
    }

    /// 批量删除，返回删除成功的个数
    pub async fn remove_many(&self, keys: &[&str]) -> CacheResult<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.connection().await?;
        let removed: u64 = conn.del(keys.to_vec()).await?;
        Ok(removed)
    }

    /// 根据 key 删除，返回删除成功的个数
    pub async fn remove_count(&self, key: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let removed: u64 = conn.del(key).await?;
        Ok(removed)
    }

    /// 按模式批量删除 key
    ///
    /// KEYS 与 DEL 是两条命令，中间可能被其他客户端插入写入。KEYS 会扫描全部键，
    /// 生产环境慎用。
    pub async fn remove_pattern(&self, pattern: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let keys: Vec<String> = conn.keys(pattern).await?;
        if keys.is_empty() {
            return Ok(0);
        }
        tracing::debug!("Removing {} keys matching {}", keys.len(), pattern);
        let removed: u64 = conn.del(keys).await?;
        Ok(removed)
    }

    /// 判断 key 是否存在
    pub async fn exists(&self, key: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let exists: bool = conn.exists(key).await?;
        Ok(exists)
    }

    /// 设置过期时间（秒），key 不存在时返回 false
    pub async fn expire(&self, key: &str, seconds: i64) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let applied: bool = conn.expire(key, seconds).await?;
        Ok(applied)
    }

    /// 设置过期的 Unix 时间戳（秒）
    pub async fn expire_at(&self, key: &str, timestamp: i64) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let applied: bool = conn.expire_at(key, timestamp).await?;
        Ok(applied)
    }

    /// 查询剩余时间
    pub async fn ttl(&self, key: &str) -> CacheResult<Ttl> {
        let mut conn = self.connection().await?;
        let reply: i64 = conn.ttl(key).await?;
        Ttl::from_reply(reply).ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    /// 返回 key 所储存的值的类型
    pub async fn key_type(&self, key: &str) -> CacheResult<KeyType> {
        let mut conn = self.connection().await?;
        let reply: String = redis::cmd("TYPE").arg(key).query_async(&mut conn).await?;
        Ok(KeyType::from(reply.as_str()))
    }

    /// 对列表、集合或有序集合排序；GET 引用的键不存在时对应位置为 None
    pub async fn sort(&self, key: &str, options: &SortOptions) -> CacheResult<Vec<Option<String>>> {
        let mut conn = self.connection().await?;
        let sorted: Vec<Option<String>> = options.to_cmd(key).query_async(&mut conn).await?;
        Ok(sorted)
    }
}
