use serde::{Deserialize, Serialize};

/// 有序集合成员及其分数（WITHSCORES 返回的元组）
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScoredMember {
    pub member: String,
    pub score: f64,
}

impl From<(String, f64)> for ScoredMember {
    fn from((member, score): (String, f64)) -> Self {
        Self { member, score }
    }
}

/// 键的剩余生存时间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// 键存在但没有过期时间
    Persistent,
    /// 剩余秒数
    Expires(u64),
}

impl Ttl {
    /// TTL 返回值：-1 无过期时间，-2 键不存在
    pub(crate) fn from_reply(reply: i64) -> Option<Self> {
        match reply {
            -2 => None,
            n if n < 0 => Some(Ttl::Persistent),
            n => Some(Ttl::Expires(n as u64)),
        }
    }
}

/// TYPE 命令返回的值类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyType {
    String,
    List,
    Set,
    ZSet,
    Hash,
    Stream,
    None,
    Other(String),
}

impl From<&str> for KeyType {
    fn from(s: &str) -> Self {
        match s {
            "string" => KeyType::String,
            "list" => KeyType::List,
            "set" => KeyType::Set,
            "zset" => KeyType::ZSet,
            "hash" => KeyType::Hash,
            "stream" => KeyType::Stream,
            "none" => KeyType::None,
            other => KeyType::Other(other.to_string()),
        }
    }
}

/// LINSERT 插入位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Before,
    After,
}

/// SORT 命令参数
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    pub by: Option<String>,
    pub limit: Option<(i64, i64)>,
    pub get: Vec<String>,
    pub desc: bool,
    pub alpha: bool,
}

impl SortOptions {
    pub fn by(mut self, pattern: &str) -> Self {
        self.by = Some(pattern.to_string());
        self
    }

    pub fn limit(mut self, offset: i64, count: i64) -> Self {
        self.limit = Some((offset, count));
        self
    }

    pub fn get(mut self, pattern: &str) -> Self {
        self.get.push(pattern.to_string());
        self
    }

    pub fn desc(mut self) -> Self {
        self.desc = true;
        self
    }

    pub fn alpha(mut self) -> Self {
        self.alpha = true;
        self
    }

    /// 构造 SORT 命令
    pub(crate) fn to_cmd(&self, key: &str) -> redis::Cmd {
        let mut cmd = redis::cmd("SORT");
        cmd.arg(key);
        if let Some(by) = &self.by {
            cmd.arg("BY").arg(by);
        }
        if let Some((offset, count)) = self.limit {
            cmd.arg("LIMIT").arg(offset).arg(count);
        }
        for pattern in &self.get {
            cmd.arg("GET").arg(pattern);
        }
        if self.desc {
            cmd.arg("DESC");
        }
        if self.alpha {
            cmd.arg("ALPHA");
        }
        cmd
    }
}
