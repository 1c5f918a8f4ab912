// 通用 SQL 模板
// 按 SQL 字符串与目标类型执行查询，行到对象的映射由目标类型的 FromRow 实现负责

use sqlx::mysql::{MySqlArguments, MySqlPool, MySqlRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{Error as SqlxError, FromRow, MySql};

/// 绑定参数
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Int(v)
    }
}

impl From<i32> for SqlParam {
    fn from(v: i32) -> Self {
        SqlParam::Int(v as i64)
    }
}

impl From<f64> for SqlParam {
    fn from(v: f64) -> Self {
        SqlParam::Float(v)
    }
}

impl From<bool> for SqlParam {
    fn from(v: bool) -> Self {
        SqlParam::Bool(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

impl<T: Into<SqlParam>> From<Option<T>> for SqlParam {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(SqlParam::Null)
    }
}

fn bind_query<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &[SqlParam],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.clone()),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Null => query.bind(None::<String>),
        };
    }
    query
}

fn bind_query_as<'q, T>(
    mut query: QueryAs<'q, MySql, T, MySqlArguments>,
    params: &[SqlParam],
) -> QueryAs<'q, MySql, T, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.clone()),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Null => query.bind(None::<String>),
        };
    }
    query
}

/// SQL 模板，持有连接池
#[derive(Clone)]
pub struct SqlTemplate {
    pool: MySqlPool,
}

impl SqlTemplate {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// 查询全部结果
    pub async fn find<T>(&self, sql: &str) -> Result<Vec<T>, SqlxError>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        self.find_with(sql, &[]).await
    }

    /// 带参数查询全部结果
    pub async fn find_with<T>(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<T>, SqlxError>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        tracing::debug!("find: {}", sql);
        bind_query_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_all(&self.pool)
            .await
    }

    /// 查询第一条结果
    pub async fn find_one<T>(&self, sql: &str, params: &[SqlParam]) -> Result<Option<T>, SqlxError>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        tracing::debug!("find_one: {}", sql);
        bind_query_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_optional(&self.pool)
            .await
    }

    /// 执行 UPDATE/DELETE 等语句，返回影响行数
    pub async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<u64, SqlxError> {
        tracing::debug!("execute: {}", sql);
        let result = bind_query(sqlx::query(sql), params)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// 执行 INSERT，返回自增主键
    pub async fn insert(&self, sql: &str, params: &[SqlParam]) -> Result<u64, SqlxError> {
        tracing::debug!("insert: {}", sql);
        let result = bind_query(sqlx::query(sql), params)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }
}
