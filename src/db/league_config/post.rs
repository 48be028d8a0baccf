use sqlx::PgPool;

use crate::{
    db::{
        league_config::get::LEAGUE_CONFIG_COLUMNS,
        slug::{SlugTable, slug_source, unique_slug},
    },
    errors::AppError,
    models::league_config::{LeagueConfig, LeagueConfigInput},
};

pub async fn create_league_config(
    input: &LeagueConfigInput,
    postgres: PgPool,
) -> Result<LeagueConfig, AppError> {
    let ext = input.provider_league_id;
    let source = slug_source(&input.name, || format!("league-{ext}"));
    let slug = unique_slug(postgres.clone(), SlugTable::LeagueConfig, &source, None).await?;

    let sql = format!(
        "INSERT INTO league_config
                (provider_league_id, name, country, seasons_active, enabled, sort_order, slug)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {LEAGUE_CONFIG_COLUMNS}"
    );
    let config = sqlx::query_as::<_, LeagueConfig>(&sql)
        .bind(ext)
        .bind(input.name.trim())
        .bind(input.country.as_deref())
        .bind(&input.seasons_active)
        .bind(input.enabled)
        .bind(input.sort_order)
        .bind(slug)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create league config: {}", e)))?;

    tracing::info!("Created league config {} ({})", config.name, config.slug);
    Ok(config)
}
