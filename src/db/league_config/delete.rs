use sqlx::PgPool;

use crate::errors::AppError;

pub async fn delete_league_config(id: i32, postgres: PgPool) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM league_config WHERE id = $1")
        .bind(id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete league config: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("League config {} not found", id)));
    }

    tracing::info!("Deleted league config {}", id);
    Ok(())
}
