use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, Row};

/// 用户表 `user` 的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: Option<i32>,
    pub email: Option<String>,
}

/// 按列名逐个映射
impl<'r> FromRow<'r, MySqlRow> for User {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(User {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            email: row.try_get("email")?,
        })
    }
}

/// 新增或更新用户时提交的字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub age: Option<i32>,
    pub email: Option<String>,
}

impl UserForm {
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}
