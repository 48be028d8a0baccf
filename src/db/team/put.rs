use sqlx::PgPool;

use crate::{
    db::{
        slug::{SlugTable, slug_source, unique_slug},
        team::get::{TEAM_COLUMNS, find_team_by_external_id},
    },
    errors::AppError,
    models::{provider::ProviderTeam, team::Team},
};

/// Insert or update a team keyed on its external id. The slug is only chosen on insert.
pub async fn upsert_team(
    country_id: i32,
    team: &ProviderTeam,
    postgres: PgPool,
) -> Result<(Team, bool), AppError> {
    let Some(existing) = find_team_by_external_id(team.external_id, postgres.clone()).await? else {
        let created = insert_team(
            Some(team.external_id),
            &team.name,
            team.short_name.as_deref(),
            team.logo.as_deref(),
            country_id,
            postgres,
        )
        .await?;
        return Ok((created, true));
    };

    let sql = format!(
        "UPDATE team
            SET country_id = $2, name = $3, short_name = $4, logo = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {TEAM_COLUMNS}"
    );
    let updated = sqlx::query_as::<_, Team>(&sql)
        .bind(existing.id)
        .bind(country_id)
        .bind(&team.name)
        .bind(team.short_name.as_deref())
        .bind(team.logo.as_deref())
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to update team: {}", e)))?;

    Ok((updated, false))
}

pub async fn insert_team(
    external_id: Option<i32>,
    name: &str,
    short_name: Option<&str>,
    logo: Option<&str>,
    country_id: i32,
    postgres: PgPool,
) -> Result<Team, AppError> {
    let source = slug_source(name, || match external_id {
        Some(ext) => format!("team-{ext}"),
        None => "team".to_string(),
    });
    let slug = unique_slug(postgres.clone(), SlugTable::Team, &source, None).await?;

    let sql = format!(
        "INSERT INTO team (country_id, external_id, name, short_name, logo, slug)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {TEAM_COLUMNS}"
    );
    sqlx::query_as::<_, Team>(&sql)
        .bind(country_id)
        .bind(external_id)
        .bind(name)
        .bind(short_name)
        .bind(logo)
        .bind(slug)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create team: {}", e)))
}
