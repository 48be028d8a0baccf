use serde::Serialize;
use sqlx::PgPool;
use std::fmt;

use crate::{
    db::country::upsert_country, errors::AppError, provider::FootballProvider,
    util::iso2::sanitize_iso2,
};

#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportCountriesSummary {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl fmt::Display for ImportCountriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Countries: +{} / ~{}", self.created, self.updated)?;
        if self.skipped > 0 {
            write!(f, " (skipped={})", self.skipped)?;
        }
        Ok(())
    }
}

pub async fn import_countries(
    postgres: PgPool,
    provider: &dyn FootballProvider,
) -> Result<ImportCountriesSummary, AppError> {
    let rows = provider.countries().await?;
    tracing::info!("Provider returned {} countries", rows.len());

    let mut summary = ImportCountriesSummary::default();

    for row in rows {
        let raw_code = row.code.trim();
        let name = row.name.trim();
        if raw_code.is_empty() && name.is_empty() {
            summary.skipped += 1;
            continue;
        }

        let code = sanitize_iso2(raw_code, name);
        let (_, created) = upsert_country(
            &code,
            name,
            row.flag.as_deref(),
            raw_code.is_empty(),
            postgres.clone(),
        )
        .await?;

        if created {
            summary.created += 1;
        } else {
            summary.updated += 1;
        }
    }

    tracing::info!("{}", summary);
    Ok(summary)
}
