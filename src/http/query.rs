//! Query-string parsing shared by the JSON handlers.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{errors::AppError, models::fixture::MatchStatus};

pub const MATCH_LIMIT_DEFAULT: i64 = 10;
pub const MATCH_LIMIT_MAX: i64 = 50;
pub const LIVE_LIMIT_DEFAULT: i64 = 20;
pub const LIVE_LIMIT_MAX: i64 = 100;

/// A league given either by internal id or by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueRef {
    Id(i32),
    Slug(String),
}

impl LeagueRef {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<i32>() {
            Ok(id) => Some(LeagueRef::Id(id)),
            Err(_) => Some(LeagueRef::Slug(raw.to_string())),
        }
    }
}

/// Raw `/api/matches` query. Everything is optional text so bad values get our own errors.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MatchQueryParams {
    pub league: Option<String>,
    pub league_slug: Option<String>,
    pub season: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    pub league: Option<LeagueRef>,
    pub season: Option<i32>,
    pub date: Option<NaiveDate>,
    pub status: Option<MatchStatus>,
    pub limit: i64,
    pub offset: i64,
}

impl MatchQueryParams {
    pub fn parse(&self) -> Result<MatchQuery, AppError> {
        let league = self
            .league
            .as_deref()
            .and_then(LeagueRef::parse)
            .or_else(|| {
                self.league_slug
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| LeagueRef::Slug(s.to_string()))
            });

        let date = match non_empty(&self.date) {
            Some(raw) => Some(parse_day(raw)?),
            None => None,
        };

        let status = match non_empty(&self.status) {
            Some(raw) => Some(
                raw.parse::<MatchStatus>()
                    .map_err(|e| AppError::BadRequest(e.to_string()))?,
            ),
            None => None,
        };

        Ok(MatchQuery {
            league,
            season: parse_int(&self.season),
            date,
            status,
            limit: clamp_limit(parse_int(&self.limit), MATCH_LIMIT_DEFAULT, MATCH_LIMIT_MAX),
            offset: parse_int::<i64>(&self.offset).unwrap_or(0).max(0),
        })
    }
}

/// `None` falls back to `default`; anything else is kept within `1..=max`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

pub fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date. Expected YYYY-MM-DD (UTC).".into()))
}

/// `today` (or nothing) is `today`; otherwise a `YYYY-MM-DD` day.
pub fn parse_fixture_date(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(today),
        Some(s) if s.eq_ignore_ascii_case("today") => Ok(today),
        Some(s) => parse_day(s),
    }
}

/// Explicit season, else the year of `date`, else `current_year`.
pub fn resolve_public_season(
    season: Option<i32>,
    date: Option<NaiveDate>,
    current_year: i32,
) -> i32 {
    use chrono::Datelike;
    season
        .filter(|s| *s > 0)
        .or_else(|| date.map(|d| d.year()))
        .unwrap_or(current_year)
}

pub fn parse_int<T: std::str::FromStr>(raw: &Option<String>) -> Option<T> {
    non_empty(raw).and_then(|s| s.parse::<T>().ok())
}

fn non_empty(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
