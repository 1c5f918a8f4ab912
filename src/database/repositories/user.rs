use sqlx::Error as SqlxError;

use crate::database::models::user::{User, UserForm};
use crate::database::template::{SqlParam, SqlTemplate};

/// 用户存储库实现
pub struct UserRepository;

impl UserRepository {
    /// 获取所有用户信息
    pub async fn list_all(db: &SqlTemplate) -> Result<Vec<User>, SqlxError> {
        db.find::<User>("SELECT * FROM user").await
    }

    /// 根据ID查找用户
    pub async fn find_by_id(db: &SqlTemplate, id: i64) -> Result<Option<User>, SqlxError> {
        db.find_one::<User>("SELECT * FROM user WHERE id = ?", &[SqlParam::Int(id)])
            .await
    }

    /// 表中当前的行数
    pub async fn count(db: &SqlTemplate) -> Result<i64, SqlxError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user")
            .fetch_one(db.pool())
            .await
    }

    /// 新增用户，返回带自增ID的记录
    pub async fn save(db: &SqlTemplate, form: UserForm) -> Result<User, SqlxError> {
        let id = db
            .insert(
                "INSERT INTO user (name, age, email) VALUES (?, ?, ?)",
                &[
                    SqlParam::from(form.name.as_str()),
                    SqlParam::from(form.age),
                    SqlParam::from(form.email.clone()),
                ],
            )
            .await?;

        tracing::info!("Saved user: {}", id);
        Ok(form.into_user(id as i64))
    }

    /// 更新用户，用户不存在时返回 None
    pub async fn update(
        db: &SqlTemplate,
        id: i64,
        form: UserForm,
    ) -> Result<Option<User>, SqlxError> {
        db.execute(
            "UPDATE user SET name = ?, age = ?, email = ? WHERE id = ?",
            &[
                SqlParam::from(form.name),
                SqlParam::from(form.age),
                SqlParam::from(form.email),
                SqlParam::Int(id),
            ],
        )
        .await?;

        // MySQL 对未改变的行返回 0，因此以查询结果判断是否存在
        Self::find_by_id(db, id).await
    }

    /// 删除用户，返回是否删除了记录
    pub async fn delete(db: &SqlTemplate, id: i64) -> Result<bool, SqlxError> {
        let affected = db
            .execute("DELETE FROM user WHERE id = ?", &[SqlParam::Int(id)])
            .await?;
        Ok(affected > 0)
    }
}
