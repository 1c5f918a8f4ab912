use cache::RedisCache;
use config::Config;
use database::SqlTemplate;

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod result;
pub mod router;
pub mod routes;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlTemplate,
    pub config: Config,
    pub cache: RedisCache,
}
