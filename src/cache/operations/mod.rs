/// 缓存操作
/// 按 Redis 数据类型划分，全部实现在 `RedisCache` 上

// 键操作与过期
pub mod keys;

// 字符串、位操作与对象序列化
pub mod strings;

// 哈希
pub mod hashes;

// 列表
pub mod lists;

// 集合
pub mod sets;

// 有序集合
pub mod sorted_sets;
