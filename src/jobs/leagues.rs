use serde::Serialize;
use sqlx::PgPool;
use std::fmt;

use crate::{
    db::{country::ensure_country, league::upsert_league},
    errors::AppError,
    provider::FootballProvider,
};

#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportLeaguesSummary {
    pub country: String,
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl fmt::Display for ImportLeaguesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Leagues[{}]: +{} / ~{}",
            self.country, self.created, self.updated
        )?;
        if self.skipped > 0 {
            write!(f, " (skipped={})", self.skipped)?;
        }
        Ok(())
    }
}

/// Upper-cased two-letter code, or a bad request.
pub fn parse_country_code(raw: &str) -> Result<String, AppError> {
    let code = raw.trim().to_ascii_uppercase();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(code)
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid country '{}', expected an ISO2 code like FR",
            raw
        )))
    }
}

pub async fn import_leagues(
    country: &str,
    postgres: PgPool,
    provider: &dyn FootballProvider,
) -> Result<ImportLeaguesSummary, AppError> {
    let code = parse_country_code(country)?;
    let country = ensure_country(&code, &code, postgres.clone()).await?;

    let rows = provider.leagues_by_country(&code).await?;
    tracing::info!("Provider returned {} leagues for {}", rows.len(), code);

    let mut summary = ImportLeaguesSummary {
        country: code,
        ..Default::default()
    };

    for league in rows {
        if league.external_id <= 0 || league.name.trim().is_empty() {
            tracing::warn!("Skipping league without id or name: {:?}", league);
            summary.skipped += 1;
            continue;
        }

        let (_, created) = upsert_league(country.id, &league, postgres.clone()).await?;
        if created {
            summary.created += 1;
        } else {
            summary.updated += 1;
        }
    }

    tracing::info!("{}", summary);
    Ok(summary)
}
