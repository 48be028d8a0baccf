use sqlx::PgPool;

use crate::{
    db::{
        league::get::{LEAGUE_COLUMNS, find_league_by_external_id},
        slug::{SlugTable, slug_source, unique_slug},
    },
    errors::AppError,
    models::{league::League, provider::ProviderLeague},
};

/// Insert or update a league keyed on its external id. The slug is only chosen on
/// insert and the home settings are never touched.
pub async fn upsert_league(
    country_id: i32,
    league: &ProviderLeague,
    postgres: PgPool,
) -> Result<(League, bool), AppError> {
    if let Some(existing) = find_league_by_external_id(league.external_id, postgres.clone()).await? {
        let sql = format!(
            "UPDATE league
                SET country_id = $2, name = $3, type = $4, season_current = $5, logo = $6,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING {LEAGUE_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, League>(&sql)
            .bind(existing.id)
            .bind(country_id)
            .bind(&league.name)
            .bind(&league.kind)
            .bind(league.season)
            .bind(league.logo.as_deref())
            .fetch_one(&postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to update league: {}", e)))?;
        return Ok((updated, false));
    }

    let ext = league.external_id;
    let source = slug_source(&league.name, || format!("league-{ext}"));
    let slug = unique_slug(postgres.clone(), SlugTable::League, &source, None).await?;

    let sql = format!(
        "INSERT INTO league (country_id, external_id, name, type, season_current, logo, slug)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {LEAGUE_COLUMNS}"
    );
    let created = sqlx::query_as::<_, League>(&sql)
        .bind(country_id)
        .bind(ext)
        .bind(&league.name)
        .bind(&league.kind)
        .bind(league.season)
        .bind(league.logo.as_deref())
        .bind(slug)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create league: {}", e)))?;

    Ok((created, true))
}

/// Placeholder `League {ext}` so teams can be attached before the league import ran.
pub async fn insert_minimal_league(
    external_id: i32,
    country_id: i32,
    season: i32,
    postgres: PgPool,
) -> Result<League, AppError> {
    let slug = unique_slug(
        postgres.clone(),
        SlugTable::League,
        &format!("league-{external_id}"),
        None,
    )
    .await?;

    let sql = format!(
        "INSERT INTO league (country_id, external_id, name, type, season_current, slug)
            VALUES ($1, $2, $3, 'league', $4, $5)
            RETURNING {LEAGUE_COLUMNS}"
    );
    sqlx::query_as::<_, League>(&sql)
        .bind(country_id)
        .bind(external_id)
        .bind(format!("League {external_id}"))
        .bind(season)
        .bind(slug)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create league: {}", e)))
}
