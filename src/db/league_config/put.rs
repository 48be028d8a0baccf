use sqlx::PgPool;

use crate::{
    db::{
        league_config::get::LEAGUE_CONFIG_COLUMNS,
        slug::{SlugTable, slug_source, unique_slug},
    },
    errors::AppError,
    models::league_config::{LeagueConfig, LeagueConfigInput},
};

/// The slug follows the name, staying unique against every other config.
pub async fn update_league_config(
    id: i32,
    input: &LeagueConfigInput,
    postgres: PgPool,
) -> Result<LeagueConfig, AppError> {
    let ext = input.provider_league_id;
    let source = slug_source(&input.name, || format!("league-{ext}"));
    let slug = unique_slug(postgres.clone(), SlugTable::LeagueConfig, &source, Some(id)).await?;

    let sql = format!(
        "UPDATE league_config
            SET provider_league_id = $2, name = $3, country = $4, seasons_active = $5,
                enabled = $6, sort_order = $7, slug = $8
            WHERE id = $1
            RETURNING {LEAGUE_CONFIG_COLUMNS}"
    );
    sqlx::query_as::<_, LeagueConfig>(&sql)
        .bind(id)
        .bind(ext)
        .bind(input.name.trim())
        .bind(input.country.as_deref())
        .bind(&input.seasons_active)
        .bind(input.enabled)
        .bind(input.sort_order)
        .bind(slug)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to update league config: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("League config {} not found", id)))
}
