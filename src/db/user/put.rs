use sqlx::PgPool;

use crate::{
    db::user::get::USER_COLUMNS,
    errors::AppError,
    models::{User, user::normalize_roles},
};

/// `password_hash` of `None` keeps the current password.
pub async fn update_user(
    id: i32,
    email: &str,
    roles: &[String],
    password_hash: Option<&str>,
    postgres: PgPool,
) -> Result<User, AppError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("A valid email is required".into()));
    }

    let sql = format!(
        "UPDATE app_user
            SET email = $2, roles = $3, password = COALESCE($4, password)
            WHERE id = $1
            RETURNING {USER_COLUMNS}"
    );
    sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .bind(&email)
        .bind(normalize_roles(roles))
        .bind(password_hash)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::BadRequest(format!("Email {} is already used", email))
            }
            other => AppError::DatabaseError(format!("Failed to update user: {}", other)),
        })?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
}
