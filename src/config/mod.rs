use std::env;

use crate::cache::DEFAULT_POOL_SIZE;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub db_max_connections: u32,
    pub redis_pool_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            redis_url: env::var("REDIS_URL")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: parse_or(env::var("SERVER_PORT").ok(), 8080),
            db_max_connections: parse_or(env::var("DB_MAX_CONNECTIONS").ok(), 10),
            redis_pool_size: parse_or(env::var("REDIS_POOL_SIZE").ok(), DEFAULT_POOL_SIZE),
        })
    }
}

/// 解析可选的环境变量，缺失或格式错误时使用默认值
fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
