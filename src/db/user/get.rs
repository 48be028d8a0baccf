use sqlx::PgPool;

use crate::{errors::AppError, models::User};

pub(crate) const USER_COLUMNS: &str = "id, email, roles, password, created_at";

pub async fn get_user(id: i32, postgres: PgPool) -> Result<User, AppError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM app_user WHERE id = $1");
    sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
}

/// Emails are stored lower-cased.
pub async fn find_user_by_email(email: &str, postgres: PgPool) -> Result<Option<User>, AppError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM app_user WHERE email = $1");
    sqlx::query_as::<_, User>(&sql)
        .bind(email.trim().to_lowercase())
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user by email: {}", e)))
}

pub async fn list_users(postgres: PgPool) -> Result<Vec<User>, AppError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM app_user ORDER BY email ASC");
    sqlx::query_as::<_, User>(&sql)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch users: {}", e)))
}
