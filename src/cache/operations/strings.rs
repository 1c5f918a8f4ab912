use std::time::Duration;

use redis::AsyncCommands;
use serde::{Serialize, de::DeserializeOwned};

use crate::cache::{CacheError, CacheResult, RedisCache};

impl RedisCache {
    /// 根据 key 获取字符串，key 不存在时返回 None
    pub async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// 根据 key 获取原始字节
    pub async fn get_bytes(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;
        let value: Option<Vec<u8>> = conn.get(key).await?;
        Ok(value)
    }

    /// 写入缓存
    pub async fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    /// 写入字节
    pub async fn set_bytes(&self, key: &str, value: &[u8]) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(key, value.to_vec()).await?;
        Ok(())
    }

    /// 写入缓存并设置超时时间（秒）
    pub async fn set_ex(&self, key: &str, value: &str, seconds: u64) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        let _: () = conn.set_ex(key, value, seconds).await?;
        Ok(())
    }

    /// 写入缓存并设置超时时间，精度为毫秒；零时长由服务端拒绝
    pub async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        let _: () = redis::cmd("PSETEX")
            .arg(key)
            .arg(ttl.as_millis() as u64)
            .arg(value)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// key 不存在时才写入，返回是否写入
    pub async fn set_nx(&self, key: &str, value: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let written: bool = conn.set_nx(key, value).await?;
        Ok(written)
    }

    /// 设置新值并返回旧值，key 不存在时返回 None
    pub async fn get_set(&self, key: &str, value: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let old: Option<String> = redis::cmd("GETSET")
            .arg(key)
            .arg(value)
            .query_async(&mut conn)
            .await?;
        Ok(old)
    }

    /// 从 offset 开始覆盖写入，返回修改后的字符串长度
    pub async fn set_range(&self, key: &str, offset: u64, value: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let len: u64 = redis::cmd("SETRANGE")
            .arg(key)
            .arg(offset)
            .arg(value)
            .query_async(&mut conn)
            .await?;
        Ok(len)
    }

    /// 获取子字符串，偏移量包含两端，支持负数
    pub async fn get_range(&self, key: &str, start: i64, end: i64) -> CacheResult<String> {
        let mut conn = self.connection().await?;
        let value: String = redis::cmd("GETRANGE")
            .arg(key)
            .arg(start)
            .arg(end)
            .query_async(&mut conn)
            .await?;
        Ok(value)
    }

    pub async fn incr(&self, key: &str) -> CacheResult<i64> {
        self.incr_by(key, 1).await
    }

    /// 增加指定整数，key 不存在时视为 0
    pub async fn incr_by(&self, key: &str, delta: i64) -> CacheResult<i64> {
        let mut conn = self.connection().await?;
        let value: i64 = conn.incr(key, delta).await?;
        Ok(value)
    }

    pub async fn decr(&self, key: &str) -> CacheResult<i64> {
        self.decr_by(key, 1).await
    }

    pub async fn decr_by(&self, key: &str, delta: i64) -> CacheResult<i64> {
        let mut conn = self.connection().await?;
        let value: i64 = conn.decr(key, delta).await?;
        Ok(value)
    }

    /// 追加到末尾，返回追加后的长度
    pub async fn append(&self, key: &str, value: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let len: u64 = conn.append(key, value).await?;
        Ok(len)
    }

    /// 设置或清除指定偏移量上的位，返回原来的位
    pub async fn set_bit(&self, key: &str, offset: u64, value: bool) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let previous: u8 = redis::cmd("SETBIT")
            .arg(key)
            .arg(offset)
            .arg(u8::from(value))
            .query_async(&mut conn)
            .await?;
        Ok(previous == 1)
    }

    /// 获取指定偏移量上的位
    pub async fn get_bit(&self, key: &str, offset: u64) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let bit: u8 = redis::cmd("GETBIT")
            .arg(key)
            .arg(offset)
            .query_async(&mut conn)
            .await?;
        Ok(bit == 1)
    }

    /// 以 JSON 写入对象
    pub async fn set_object<T: Serialize>(&self, key: &str, value: &T) -> CacheResult<()> {
        let json = serde_json::to_string(value)?;
        self.set(key, &json).await
    }

    /// 以 JSON 写入对象并设置超时时间（秒）
    pub async fn set_object_ex<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: u64,
    ) -> CacheResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_ex(key, &json, seconds).await
    }

    /// 读取 JSON 对象，key 不存在时返回 NotFound
    pub async fn get_object<T: DeserializeOwned>(&self, key: &str) -> CacheResult<T> {
        let json = self
            .get(key)
            .await?
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;
        Ok(serde_json::from_str(&json)?)
    }
}
