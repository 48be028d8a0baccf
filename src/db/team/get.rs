use sqlx::PgPool;

use crate::{errors::AppError, models::team::Team};

pub(crate) const TEAM_COLUMNS: &str =
    "id, country_id, external_id, name, short_name, logo, slug, created_at, updated_at";

pub async fn find_team_by_external_id(
    external_id: i32,
    postgres: PgPool,
) -> Result<Option<Team>, AppError> {
    let sql = format!("SELECT {TEAM_COLUMNS} FROM team WHERE external_id = $1");
    sqlx::query_as::<_, Team>(&sql)
        .bind(external_id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team by external id: {}", e)))
}

pub async fn find_team_by_slug(slug: &str, postgres: PgPool) -> Result<Option<Team>, AppError> {
    let sql = format!("SELECT {TEAM_COLUMNS} FROM team WHERE slug = $1");
    sqlx::query_as::<_, Team>(&sql)
        .bind(slug)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team '{}': {}", slug, e)))
}

pub async fn teams_missing_slug(postgres: PgPool) -> Result<Vec<Team>, AppError> {
    let sql =
        format!("SELECT {TEAM_COLUMNS} FROM team WHERE slug IS NULL OR slug = '' ORDER BY id");
    sqlx::query_as::<_, Team>(&sql)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch teams without slug: {}", e)))
}

pub async fn count_teams(postgres: PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM team")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count teams: {}", e)))
}
