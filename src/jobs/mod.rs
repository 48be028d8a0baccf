//! Import and maintenance jobs run from the CLI.
//!
//! Each job takes its params, the pool and a [`FootballProvider`], and returns a
//! summary whose `Display` is what the CLI prints.
//!
//! [`FootballProvider`]: crate::provider::FootballProvider

pub mod countries;
pub mod debug;
pub mod leagues;
pub mod matches;
pub mod repair;
pub mod slugify;
pub mod smoke;
pub mod sync;
pub mod teams;
pub mod users;

use chrono::{Datelike, Days, NaiveDate, Utc};
use sqlx::PgPool;

use crate::{
    db::country::ensure_country,
    errors::AppError,
    models::country::{Country, FALLBACK_COUNTRY_CODE, FALLBACK_COUNTRY_NAME},
};

/// The `XX` / `Unknown` country rows without a usable country land in.
pub async fn ensure_fallback_country(postgres: PgPool) -> Result<Country, AppError> {
    ensure_country(FALLBACK_COUNTRY_CODE, FALLBACK_COUNTRY_NAME, postgres).await
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
}

/// `center` plus `radius` days either side, as `YYYY-MM-DD`, oldest first.
pub fn date_window(center: NaiveDate, radius: u64) -> Vec<String> {
    let first = center.checked_sub_days(Days::new(radius)).unwrap_or(center);
    first
        .iter_days()
        .take((radius * 2 + 1) as usize)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect()
}
