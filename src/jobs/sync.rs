use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;
use std::{fmt, time::Duration};

use crate::{
    db::league::list_sync_leagues,
    errors::AppError,
    jobs::{
        leagues::parse_country_code,
        matches::{ImportMatchesParams, import_matches},
    },
    provider::FootballProvider,
};

#[derive(Debug, Clone)]
pub struct SyncDailyParams {
    pub country: Option<String>,
    pub leagues: Vec<i32>,
    pub date: NaiveDate,
    /// Overrides every league's current season.
    pub season: Option<i32>,
    pub sleep: Duration,
    pub dry_run: bool,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct SyncDailySummary {
    pub date: String,
    pub selected: usize,
    pub ok: usize,
    pub failed: usize,
    pub dry_run: bool,
}

impl SyncDailySummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for SyncDailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Daily sync {}: {} leagues, OK={}, FAIL={}",
            self.date, self.selected, self.ok, self.failed
        )?;
        if self.dry_run {
            write!(f, " (dry run)")?;
        }
        Ok(())
    }
}

/// "61, 39,,x" -> [61, 39]
pub fn parse_league_ids(csv: &str) -> Vec<i32> {
    csv.split(',')
        .map(str::trim)
        .filter_map(|s| s.parse::<i32>().ok())
        .filter(|id| *id > 0)
        .collect()
}

pub async fn sync_daily(
    params: &SyncDailyParams,
    postgres: PgPool,
    provider: &dyn FootballProvider,
) -> Result<SyncDailySummary, AppError> {
    let country = params
        .country
        .as_deref()
        .map(parse_country_code)
        .transpose()?;
    let date = params.date.format("%Y-%m-%d").to_string();

    let leagues = list_sync_leagues(country.as_deref(), &params.leagues, postgres.clone()).await?;

    let mut summary = SyncDailySummary {
        date: date.clone(),
        selected: leagues.len(),
        dry_run: params.dry_run,
        ..Default::default()
    };

    if leagues.is_empty() {
        tracing::warn!("No leagues matched the filters");
        return Ok(summary);
    }

    tracing::info!("Daily sync for {} (UTC), {} leagues", date, leagues.len());

    for league in leagues {
        let season = params.season.unwrap_or(league.season_current);
        tracing::info!(
            "[{}] import matches --league={} --season={} --date={}  # {}",
            league.country_code,
            league.external_id,
            season,
            date,
            league.name
        );

        if params.dry_run {
            summary.ok += 1;
            continue;
        }

        let import = ImportMatchesParams {
            league_external_id: league.external_id,
            season: Some(season),
            date: Some(date.clone()),
            ..Default::default()
        };
        match import_matches(&import, postgres.clone(), provider).await {
            Ok(_) => summary.ok += 1,
            Err(e) => {
                tracing::error!("Import for league {} failed: {}", league.external_id, e);
                summary.failed += 1;
            }
        }

        if !params.sleep.is_zero() {
            tokio::time::sleep(params.sleep).await;
        }
    }

    tracing::info!("{}", summary);
    Ok(summary)
}
