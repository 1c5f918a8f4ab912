use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    AppState,
    database::{User, UserForm, UserRepository},
    error::AppError,
    utils::success_to_api_response,
};

fn validate(form: &UserForm) -> Result<(), AppError> {
    let name = form.name.trim();
    if name.is_empty() || name.chars().count() > 64 {
        return Err(AppError::BadRequest(
            "用户名长度必须在1到64个字符之间".to_string(),
        ));
    }
    Ok(())
}

/// 获取所有用户
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserRepository::list_all(&state.db).await?;
    Ok(Json(users))
}

/// 获取单个用户
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("用户不存在: {}", id)))?;
    Ok(success_to_api_response(user))
}

/// 新增用户
pub async fn create_user(
    State(state): State<AppState>,
    Json(form): Json<UserForm>,
) -> Result<impl IntoResponse, AppError> {
    validate(&form)?;
    let user = UserRepository::save(&state.db, form).await?;
    Ok(success_to_api_response(user))
}

/// 编辑用户
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<UserForm>,
) -> Result<impl IntoResponse, AppError> {
    validate(&form)?;
    let user = UserRepository::update(&state.db, id, form)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("用户不存在: {}", id)))?;
    Ok(success_to_api_response(user))
}

/// 删除用户
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !UserRepository::delete(&state.db, id).await? {
        return Err(AppError::NotFound(format!("用户不存在: {}", id)));
    }
    tracing::info!("Deleted user: {}", id);
    Ok(success_to_api_response(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> UserForm {
        UserForm {
            name: name.to_string(),
            age: None,
            email: None,
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate(&form("lxq")).is_ok());
        assert!(matches!(validate(&form("   ")), Err(AppError::BadRequest(_))));
        assert!(matches!(validate(&form(&"x".repeat(65))), Err(AppError::BadRequest(_))));
    }
}
