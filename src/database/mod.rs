// 数据库模块
// 包含通用 SQL 模板、实体定义和存储库操作

pub mod models; // 数据库实体定义
pub mod repositories; // 数据库操作实现
pub mod template; // 通用 SQL 模板

// 重新导出常用类型，方便其他模块使用
pub use models::user::{User, UserForm};
pub use repositories::user::UserRepository;
pub use template::{SqlParam, SqlTemplate};
