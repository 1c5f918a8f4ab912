use redis::{AsyncCommands, ErrorKind};

use crate::cache::error::is_no_such_key;
use crate::cache::{CacheError, CacheResult, InsertPosition, RedisCache};

impl RedisCache {
    /// 追加到列表尾部，返回列表长度
    pub async fn r_push(&self, key: &str, value: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let len: u64 = conn.rpush(key, value).await?;
        Ok(len)
    }

    /// 插入到列表头部，返回列表长度
    pub async fn l_push(&self, key: &str, value: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let len: u64 = conn.lpush(key, value).await?;
        Ok(len)
    }

    pub async fn l_len(&self, key: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let len: u64 = conn.llen(key).await?;
        Ok(len)
    }

    /// 删除与 value 相等的元素
    ///
    /// count > 0 从头开始删除 count 个，count < 0 从尾开始，count = 0 删除全部。
    pub async fn l_rem(&self, key: &str, count: i64, value: &str) -> CacheResult<u64> {
        let mut conn = self.connection().await?;
        let removed: u64 = conn.lrem(key, count as isize, value).await?;
        Ok(removed)
    }

    /// 返回区间内的元素，区间包含两端，-1 表示最后一个元素
    pub async fn l_range(&self, key: &str, start: i64, end: i64) -> CacheResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let values: Vec<String> = conn.lrange(key, start as isize, end as isize).await?;
        Ok(values)
    }

    /// 只保留区间内的元素
    pub async fn l_trim(&self, key: &str, start: i64, end: i64) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        let _: () = conn.ltrim(key, start as isize, end as isize).await?;
        Ok(())
    }

    pub async fn l_index(&self, key: &str, index: i64) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.lindex(key, index as isize).await?;
        Ok(value)
    }

    /// 设置下标处的值；key 不存在或下标越界时返回 NotFound
    pub async fn l_set(&self, key: &str, index: i64, value: &str) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        let result: redis::RedisResult<()> = redis::cmd("LSET")
            .arg(key)
            .arg(index)
            .arg(value)
            .query_async(&mut conn)
            .await;
        match result {
            Ok(()) => Ok(()),
            Err(e) if is_no_such_key(&e) => Err(CacheError::NotFound(key.to_string())),
            Err(e)
                if e.kind() == ErrorKind::ResponseError
                    && e.detail().is_some_and(|d| d.contains("out of range")) =>
            {
                Err(CacheError::NotFound(format!("{}[{}]", key, index)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 在 pivot 前或后插入，返回列表长度；pivot 不存在时返回 -1，key 不存在时返回 0
    pub async fn l_insert(
        &self,
        key: &str,
        position: InsertPosition,
        pivot: &str,
        value: &str,
    ) -> CacheResult<i64> {
        let mut conn = self.connection().await?;
        let where_ = match position {
            InsertPosition::Before => "BEFORE",
            InsertPosition::After => "AFTER",
        };
        let len: i64 = redis::cmd("LINSERT")
            .arg(key)
            .arg(where_)
            .arg(pivot)
            .arg(value)
            .query_async(&mut conn)
            .await?;
        Ok(len)
    }

    pub async fn l_pop(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = redis::cmd("LPOP").arg(key).query_async(&mut conn).await?;
        Ok(value)
    }

    pub async fn r_pop(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = redis::cmd("RPOP").arg(key).query_async(&mut conn).await?;
        Ok(value)
    }
}
