use std::collections::{HashMap, HashSet};

use redis::AsyncCommands;

use crate::cache::{CacheResult, RedisCache};

impl RedisCache {
    /// 设置哈希字段，字段为新建时返回 true，覆盖时返回 false
    pub async fn h_set(&self, key: &str, field: &str, value: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let created: bool = conn.hset(key, field, value).await?;
        Ok(created)
    }

    pub async fn h_get(&self, key: &str, field: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.hget(key, field).await?;
        Ok(value)
    }

    /// 字段不存在时才设置
    pub async fn h_set_nx(&self, key: &str, field: &str, value: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let written: bool = conn.hset_nx(key, field, value).await?;
        Ok(written)
    }

    /// 同时设置多个字段
    pub async fn h_mset(&self, key: &str, fields: &[(&str, &str)]) -> CacheResult<()> {
        if fields.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection().await?;
        let _: () = conn.hset_multiple(key, fields).await?;
        Ok(())
    }

    /// 按顺序返回多个字段的值，不存在的字段为 None
    pub async fn h_mget(&self, key: &str, fields: &[&str]) -> CacheResult<Vec<Option<String>>> {
        if fields.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.connection().await?;
        let mut cmd = redis::cmd("HMGET");
        cmd.arg(key);
        for field in fields {
            cmd.arg(*field);
        }
        let values: Vec<Option<String>> = cmd.query_async(&mut conn).await?;
        Ok(values)
    }

    pub async fn h_incr_by(&self, key: &str, field: &str, delta: i64) -> CacheResult<i64> {
        let mut conn = self.connection().await?;
        let value: i64 = conn.hincr(key, field, delta).await?;
        Ok(value)
    }

    pub async fn h_exists(&self, key: &str, field: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let exists: bool = conn.hexists(key, field).await?;
        Ok(exists)
    }

    /// 删除字段，返回删除的个数
    pub async fn h_del(&self, key: &str, fields: &[&str]) -> CacheResult<u64> {
        if fields.is_empty() {
            return Ok(0);
        }
        let mut conn = self.connection().await?;
        let removed: u64 = conn.hdel(key, fields.to_vec()).await?;
        Ok(removed)
    }

    pub async fn h_len(&self, key: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let len: u64 = conn.hlen(key).await?;
        Ok(len)
    }

    pub async fn h_keys(&self, key: &str) -> CacheResult<HashSet<String>> {
        let mut conn = self.connection().await?;
        let fields: HashSet<String> = conn.hkeys(key).await?;
        Ok(fields)
    }

    pub async fn h_vals(&self, key: &str) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let values: Vec<String> = conn.hvals(key).await?;
        Ok(values)
    }

    pub async fn h_get_all(&self, key: &str) -> CacheResult<HashMap<String, String>> {
        let mut conn = self.connection().await?;
        let hash: HashMap<String, String> = conn.hgetall(key).await?;
        Ok(hash)
    }
}
