use sqlx::PgPool;

use crate::{errors::AppError, models::fixture::MatchStatus};

/// Sets the status and whichever scores are given; `None` keeps the stored score.
pub async fn update_fixture_result(
    id: i32,
    status: MatchStatus,
    home_score: Option<i16>,
    away_score: Option<i16>,
    postgres: PgPool,
) -> Result<(), AppError> {
    sqlx::query(
        "UPDATE matches
            SET status = $2,
                home_score = COALESCE($3, home_score),
                away_score = COALESCE($4, away_score),
                updated_at = NOW()
            WHERE id = $1",
    )
    .bind(id)
    .bind(status.as_str())
    .bind(home_score)
    .bind(away_score)
    .execute(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update match {}: {}", id, e)))?;
    Ok(())
}

pub async fn update_fixture_status(
    id: i32,
    status: MatchStatus,
    postgres: PgPool,
) -> Result<(), AppError> {
    sqlx::query("UPDATE matches SET status = $2, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .bind(status.as_str())
        .execute(&postgres)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to update match {} status: {}", id, e))
        })?;
    Ok(())
}
