use sqlx::PgPool;

use crate::{
    db::user::get::{USER_COLUMNS, find_user_by_email},
    errors::AppError,
    models::{User, user::normalize_roles},
};

/// `password_hash` must already be hashed.
pub async fn create_user(
    email: &str,
    roles: &[String],
    password_hash: &str,
    postgres: PgPool,
) -> Result<User, AppError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("A valid email is required".into()));
    }

    if find_user_by_email(&email, postgres.clone()).await?.is_some() {
        return Err(AppError::BadRequest(format!("User {} already exists", email)));
    }

    let sql = format!(
        "INSERT INTO app_user (email, roles, password)
            VALUES ($1, $2, $3)
            RETURNING {USER_COLUMNS}"
    );
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(&email)
        .bind(normalize_roles(roles))
        .bind(password_hash)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create user: {}", e)))?;

    tracing::info!("Created user {}", user.email);
    Ok(user)
}
