use std::collections::HashSet;

use redis::AsyncCommands;

use crate::cache::{CacheResult, RedisCache};

impl RedisCache {
    /// 添加成员，返回新增的个数（已存在的成员不计）
    pub async fn s_add(&self, key: &str, member: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let added: u64 = conn.sadd(key, member).await?;
        Ok(added)
    }

    pub async fn s_members(&self, key: &str) -> CacheResult<HashSet<String>> {
        let mut conn = self.connection().await?;
        let members: HashSet<String> = conn.smembers(key).await?;
        Ok(members)
    }

    pub async fn s_rem(&self, key: &str, member: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let removed: u64 = conn.srem(key, member).await?;
        Ok(removed)
    }

    /// 随机移除并返回一个成员
    pub async fn s_pop(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let member: Option<String> = redis::cmd("SPOP").arg(key).query_async(&mut conn).await?;
        Ok(member)
    }

    pub async fn s_card(&self, key: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let card: u64 = conn.scard(key).await?;
        Ok(card)
    }

    pub async fn s_is_member(&self, key: &str, member: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let is_member: bool = conn.sismember(key, member).await?;
        Ok(is_member)
    }

    /// 随机返回一个成员，不移除
    pub async fn s_rand_member(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let member: Option<String> = redis::cmd("SRANDMEMBER")
            .arg(key)
            .query_async(&mut conn)
            .await?;
        Ok(member)
    }
}
