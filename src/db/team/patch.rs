use sqlx::PgPool;

use crate::errors::AppError;

pub async fn set_team_slug(id: i32, slug: &str, postgres: PgPool) -> Result<(), AppError> {
    sqlx::query("UPDATE team SET slug = $2, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .bind(slug)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to set team slug: {}", e)))?;
    Ok(())
}
