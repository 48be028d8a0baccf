use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;

use crate::{
    db::fixture::get_match_view,
    errors::AppError,
    jobs::date_window,
    models::provider::{ProviderMatch, ProviderSide, SeasonParam},
    provider::FootballProvider,
};

const DEBUG_RADIUS_DAYS: u64 = 3;

#[derive(Debug, Clone, Default)]
pub struct DebugMatchParams {
    pub fixture_id: i32,
    /// Overrides the stored external id.
    pub external_id: Option<i32>,
    /// Overrides the stored kickoff day for the fallback.
    pub date: Option<NaiveDate>,
}

/// The payload fields that matter when chasing a wrong score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub status: String,
    pub date_utc: String,
    pub home: ProviderSide,
    pub away: ProviderSide,
}

impl From<ProviderMatch> for MatchSnapshot {
    fn from(m: ProviderMatch) -> Self {
        Self {
            status: m.status.to_string(),
            date_utc: m.date_utc,
            home: m.home,
            away: m.away,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugMatchReport {
    pub fixture_id: i32,
    pub external_id: i32,
    pub date: String,
    /// `fixture id` or `league season date`, `None` when nothing matched.
    pub found_via: Option<String>,
    pub snapshot: Option<MatchSnapshot>,
}

pub async fn debug_match(
    params: &DebugMatchParams,
    postgres: PgPool,
    provider: &dyn FootballProvider,
) -> Result<DebugMatchReport, AppError> {
    if params.fixture_id <= 0 {
        return Err(AppError::BadRequest("--fixture=<id> required".into()));
    }

    let fixture = get_match_view(params.fixture_id, postgres)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Fixture {} not found", params.fixture_id)))?;

    let external_id = params.external_id.unwrap_or(fixture.external_id);
    let date = params.date.unwrap_or_else(|| fixture.date_utc.date_naive());

    let mut report = DebugMatchReport {
        fixture_id: fixture.id,
        external_id,
        date: date.format("%Y-%m-%d").to_string(),
        found_via: None,
        snapshot: None,
    };

    match provider.match_by_external_id(external_id).await {
        Ok(Some(found)) => {
            tracing::info!("Lookup by fixture id returned data");
            report.found_via = Some("fixture id".into());
            report.snapshot = Some(found.into());
            return Ok(report);
        }
        Ok(None) => tracing::info!("Lookup by fixture id returned nothing"),
        Err(e) => tracing::warn!("Lookup by fixture id failed: {}", e),
    }

    tracing::info!(
        "Fallback via league season date: leagueExt={} season={} date~{}",
        fixture.league_external_id,
        fixture.season,
        report.date
    );

    for day in date_window(date, DEBUG_RADIUS_DAYS) {
        match provider
            .matches_by_league_season(
                fixture.league_external_id,
                SeasonParam::Year(fixture.season),
                Some(&day),
            )
            .await
        {
            Ok(list) => {
                tracing::info!("  {} -> {} rows", day, list.len());
                if let Some(found) = list.into_iter().find(|m| m.external_id == external_id) {
                    report.found_via = Some("league season date".into());
                    report.snapshot = Some(found.into());
                    return Ok(report);
                }
            }
            Err(e) => tracing::warn!("  {} failed: {}", day, e),
        }
    }

    tracing::warn!("No payload found for fixture {}", fixture.id);
    Ok(report)
}
