use serde::Serialize;
use sqlx::PgPool;
use std::fmt;

use crate::{
    db::{
        country::{ensure_country, find_country_by_name, first_country},
        league::{find_league_by_external_id, insert_minimal_league},
        team::upsert_team,
    },
    errors::AppError,
    jobs::{current_year, ensure_fallback_country},
    models::{country::Country, league::League},
    provider::FootballProvider,
    util::iso2::sanitize_iso2,
};

#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportTeamsSummary {
    pub league_external_id: i32,
    pub season: i32,
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl fmt::Display for ImportTeamsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Teams[league={}, season={}]: +{} / ~{}",
            self.league_external_id, self.season, self.created, self.updated
        )?;
        if self.skipped > 0 {
            write!(f, " (skipped={})", self.skipped)?;
        }
        Ok(())
    }
}

pub async fn import_teams(
    league_external_id: i32,
    season: Option<i32>,
    postgres: PgPool,
    provider: &dyn FootballProvider,
) -> Result<ImportTeamsSummary, AppError> {
    if league_external_id <= 0 {
        return Err(AppError::BadRequest(
            "--league=<externalId> is required".into(),
        ));
    }
    let season = season.unwrap_or_else(current_year);

    ensure_league(league_external_id, season, postgres.clone()).await?;

    let rows = provider
        .teams_by_league_season(league_external_id, season)
        .await?;
    tracing::info!(
        "Provider returned {} teams for league {} season {}",
        rows.len(),
        league_external_id,
        season
    );

    let mut summary = ImportTeamsSummary {
        league_external_id,
        season,
        ..Default::default()
    };

    for team in rows {
        if team.external_id <= 0 || team.name.trim().is_empty() {
            tracing::warn!("Skipping team without id or name: {:?}", team);
            summary.skipped += 1;
            continue;
        }

        let country = resolve_country(team.country.as_deref(), postgres.clone()).await?;
        let (_, created) = upsert_team(country.id, &team, postgres.clone()).await?;
        if created {
            summary.created += 1;
        } else {
            summary.updated += 1;
        }
    }

    tracing::info!("{}", summary);
    Ok(summary)
}

/// The stored league, or a placeholder created in the first known country.
async fn ensure_league(external_id: i32, season: i32, postgres: PgPool) -> Result<League, AppError> {
    if let Some(league) = find_league_by_external_id(external_id, postgres.clone()).await? {
        return Ok(league);
    }

    let country = match first_country(postgres.clone()).await? {
        Some(country) => country,
        None => ensure_fallback_country(postgres.clone()).await?,
    };

    let league = insert_minimal_league(external_id, country.id, season, postgres).await?;
    tracing::warn!(
        "League {} was missing, created placeholder '{}'",
        external_id,
        league.name
    );
    Ok(league)
}

/// By name first, then by the ISO2 code derived from it.
async fn resolve_country(name: Option<&str>, postgres: PgPool) -> Result<Country, AppError> {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return ensure_fallback_country(postgres).await;
    };

    if let Some(country) = find_country_by_name(name, postgres.clone()).await? {
        return Ok(country);
    }

    let code = sanitize_iso2("", name);
    ensure_country(&code, name, postgres).await
}
