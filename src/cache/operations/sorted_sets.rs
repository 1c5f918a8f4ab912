use redis::AsyncCommands;

use crate::cache::{CacheResult, RedisCache, ScoredMember};

fn scored(pairs: Vec<(String, f64)>) -> Vec<ScoredMember> {
    pairs.into_iter().map(ScoredMember::from).collect()
}

impl RedisCache {
    /// 添加成员或更新分数，成员为新建时返回 true
    pub async fn z_add(&self, key: &str, score: f64, member: &str) -> CacheResult<bool> {
        let mut conn = self.connection().await?;
        let added: bool = conn.zadd(key, member, score).await?;
        Ok(added)
    }

    pub async fn z_rem(&self, key: &str, member: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let removed: u64 = conn.zrem(key, member).await?;
        Ok(removed)
    }

    /// 增加成员分数，返回新分数；成员不存在时以 delta 为初始分数
    pub async fn z_incr_by(&self, key: &str, delta: f64, member: &str) -> CacheResult<f64> {
        let mut conn = self.connection().await?;
        let score: f64 = conn.zincr(key, member, delta).await?;
        Ok(score)
    }

    /// 按分数从小到大的排名（从 0 开始），成员不存在时返回 None
    pub async fn z_rank(&self, key: &str, member: &str) -> CacheResult<Option<i64>> {
        let mut conn = self.connection().await?;
        let rank: Option<i64> = conn.zrank(key, member).await?;
        Ok(rank)
    }

    /// 按分数从大到小的排名
    pub async fn z_rev_rank(&self, key: &str, member: &str) -> CacheResult<Option<i64>> {
        let mut conn = self.connection().await?;
        let rank: Option<i64> = conn.zrevrank(key, member).await?;
        Ok(rank)
    }

    /// 按下标区间返回成员，分数从小到大
    pub async fn z_range(&self, key: &str, start: i64, end: i64) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let members: Vec<String> = conn.zrange(key, start as isize, end as isize).await?;
        Ok(members)
    }

    /// 按下标区间返回成员，分数从大到小
    pub async fn z_rev_range(&self, key: &str, start: i64, end: i64) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let members: Vec<String> = conn.zrevrange(key, start as isize, end as isize).await?;
        Ok(members)
    }

    pub async fn z_range_with_scores(
        &self,
        key: &str,
        start: i64,
        end: i64,
    ) -> CacheResult<Vec<ScoredMember>> {
        let mut conn = self.connection().await?;
        let pairs: Vec<(String, f64)> = conn
            .zrange_withscores(key, start as isize, end as isize)
            .await?;
        Ok(scored(pairs))
    }

    pub async fn z_rev_range_with_scores(
        &self,
        key: &str,
        start: i64,
        end: i64,
    ) -> CacheResult<Vec<ScoredMember>> {
        let mut conn = self.connection().await?;
        let pairs: Vec<(String, f64)> = conn
            .zrevrange_withscores(key, start as isize, end as isize)
            .await?;
        Ok(scored(pairs))
    }

    pub async fn z_card(&self, key: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let card: u64 = conn.zcard(key).await?;
        Ok(card)
    }

    pub async fn z_score(&self, key: &str, member: &str) -> CacheResult<Option<f64>> {
        let mut conn = self.connection().await?;
        let score: Option<f64> = conn.zscore(key, member).await?;
        Ok(score)
    }

    /// 分数在 [min, max] 之间的成员个数
    pub async fn z_count(&self, key: &str, min: f64, max: f64) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let count: u64 = conn.zcount(key, min, max).await?;
        Ok(count)
    }

    pub async fn z_range_by_score(&self, key: &str, min: f64, max: f64) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let members: Vec<String> = conn.zrangebyscore(key, min, max).await?;
        Ok(members)
    }

    pub async fn z_range_by_score_limit(
        &self,
        key: &str,
        min: f64,
        max: f64,
        offset: i64,
        count: i64,
    ) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let members: Vec<String> = conn
            .zrangebyscore_limit(key, min, max, offset as isize, count as isize)
            .await?;
        Ok(members)
    }

    pub async fn z_range_by_score_with_scores(
        &self,
        key: &str,
        min: f64,
        max: f64,
    ) -> CacheResult<Vec<ScoredMember>> {
        let mut conn = self.connection().await?;
        let pairs: Vec<(String, f64)> = conn.zrangebyscore_withscores(key, min, max).await?;
        Ok(scored(pairs))
    }

    pub async fn z_range_by_score_with_scores_limit(
        &self,
        key: &str,
        min: f64,
        max: f64,
        offset: i64,
        count: i64,
    ) -> CacheResult<Vec<ScoredMember>> {
        let mut conn = self.connection().await?;
        let pairs: Vec<(String, f64)> = conn
            .zrangebyscore_limit_withscores(key, min, max, offset as isize, count as isize)
            .await?;
        Ok(scored(pairs))
    }

    /// 分数在 [min, max] 之间的成员，分数从大到小；注意参数顺序为 max 在前
    pub async fn z_rev_range_by_score(
        &self,
        key: &str,
        max: f64,
        min: f64,
    ) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let members: Vec<String> = conn.zrevrangebyscore(key, max, min).await?;
        Ok(members)
    }

    pub async fn z_rev_range_by_score_limit(
        &self,
        key: &str,
        max: f64,
        min: f64,
        offset: i64,
        count: i64,
    ) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let members: Vec<String> = conn
            .zrevrangebyscore_limit(key, max, min, offset as isize, count as isize)
            .await?;
        Ok(members)
    }

    pub async fn z_rev_range_by_score_with_scores(
        &self,
        key: &str,
        max: f64,
        min: f64,
    ) -> CacheResult<Vec<ScoredMember>> {
        let mut conn = self.connection().await?;
        let pairs: Vec<(String, f64)> = conn.zrevrangebyscore_withscores(key, max, min).await?;
        Ok(scored(pairs))
    }

    pub async fn z_rev_range_by_score_with_scores_limit(
        &self,
        key: &str,
        max: f64,
        min: f64,
        offset: i64,
        count: i64,
    ) -> CacheResult<Vec<ScoredMember>> {
        let mut conn = self.connection().await?;
        let pairs: Vec<(String, f64)> = conn
            .zrevrangebyscore_limit_withscores(key, max, min, offset as isize, count as isize)
            .await?;
        Ok(scored(pairs))
    }

    /// 删除分数在 [min, max] 之间的成员，返回删除个数
    pub async fn z_rem_range_by_score(&self, key: &str, min: f64, max: f64) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let removed: u64 = conn.zrembyscore(key, min, max).await?;
        Ok(removed)
    }
}
