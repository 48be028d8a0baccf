use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::{
    errors::AppError,
    jobs::{current_year, leagues::parse_country_code, parse_date},
    models::provider::SeasonParam,
    provider::FootballProvider,
};

const SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct SmokeTestParams {
    pub country: String,
    /// Defaults to the first league returned for the country.
    pub league: Option<i32>,
    pub season: Option<i32>,
    pub date: Option<String>,
}

impl Default for SmokeTestParams {
    fn default() -> Self {
        Self {
            country: "FR".into(),
            league: None,
            season: None,
            date: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SmokeSection {
    pub label: String,
    pub count: usize,
    pub sample: Value,
}

impl SmokeSection {
    fn new<T: Serialize>(label: String, rows: &[T]) -> Result<Self, AppError> {
        let sample = &rows[..rows.len().min(SAMPLE_SIZE)];
        Ok(Self {
            label,
            count: rows.len(),
            sample: serde_json::to_value(sample)
                .map_err(|e| AppError::Serialization(e.to_string()))?,
        })
    }
}

impl fmt::Display for SmokeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.label)?;
        writeln!(f, "Total: {}", self.count)?;
        if self.count == 0 {
            return write!(f, "Nothing to show.");
        }
        let pretty = serde_json::to_string_pretty(&self.sample).map_err(|_| fmt::Error)?;
        write!(f, "Sample (first {}):\n{}", self.count.min(SAMPLE_SIZE), pretty)
    }
}

/// Calls every provider endpoint once and reports counts with a small sample.
pub async fn smoke_test_provider(
    params: &SmokeTestParams,
    provider: &dyn FootballProvider,
) -> Result<Vec<SmokeSection>, AppError> {
    let country = parse_country_code(&params.country)?;
    let season = params.season.unwrap_or_else(current_year);
    if let Some(date) = &params.date {
        parse_date(date)?;
    }

    let mut sections = Vec::new();

    let countries = provider.countries().await?;
    sections.push(SmokeSection::new("1) Countries".into(), &countries)?);

    let leagues = provider.leagues_by_country(&country).await?;
    sections.push(SmokeSection::new(
        format!("2) Leagues for country {}", country),
        &leagues,
    )?);

    let league = match params.league {
        Some(id) => id,
        None => match leagues.first().map(|l| l.external_id).filter(|id| *id > 0) {
            Some(id) => {
                tracing::info!("Using league externalId {}", id);
                id
            }
            None => {
                tracing::warn!("No league to test with; pass --league explicitly");
                return Ok(sections);
            }
        },
    };

    let teams = provider.teams_by_league_season(league, season).await?;
    sections.push(SmokeSection::new(
        format!("3) Teams for league={}, season={}", league, season),
        &teams,
    )?);

    let matches = provider
        .matches_by_league_season(league, SeasonParam::Year(season), params.date.as_deref())
        .await?;
    let label = match &params.date {
        Some(date) => format!("4) Matches for league={}, season={}, date={}", league, season, date),
        None => format!("4) Matches for league={}, season={}", league, season),
    };
    sections.push(SmokeSection::new(label, &matches)?);

    Ok(sections)
}
