use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::fixture::{FixtureView, MatchFilters},
};

const FIXTURE_VIEW_SELECT: &str = "SELECT m.id, m.external_id, m.season, m.round, m.stage, m.venue,
        m.minute, m.date_utc, m.status, m.home_score, m.away_score,
        l.id AS league_id, l.external_id AS league_external_id,
        l.name AS league_name, l.slug AS league_slug,
        th.id AS home_id, th.external_id AS home_external_id, th.slug AS home_slug,
        th.name AS home_name, th.logo AS home_logo,
        ta.id AS away_id, ta.external_id AS away_external_id, ta.slug AS away_slug,
        ta.name AS away_name, ta.logo AS away_logo
    FROM matches m
    JOIN league l ON l.id = m.league_id
    JOIN team th ON th.id = m.home_team_id
    JOIN team ta ON ta.id = m.away_team_id";

/// Fixtures scanned by the score repair job.
#[derive(Debug, Clone)]
pub struct RepairScan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub league_id: Option<i32>,
    /// Only rows with a missing score or a 0-0.
    pub only_missing: bool,
    pub limit: Option<i64>,
}

pub async fn list_matches(
    filters: &MatchFilters,
    postgres: PgPool,
) -> Result<Vec<FixtureView>, AppError> {
    let day_start = filters
        .date
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc());

    let sql = format!(
        "{FIXTURE_VIEW_SELECT}
            WHERE ($1::INT IS NULL OR m.league_id = $1)
              AND ($2::INT IS NULL OR m.season = $2)
              AND ($3::TIMESTAMPTZ IS NULL
                   OR (m.date_utc >= $3 AND m.date_utc < $3 + INTERVAL '1 day'))
              AND ($4::TEXT IS NULL OR m.status = $4)
            ORDER BY m.date_utc ASC, m.id ASC
            LIMIT $5 OFFSET $6"
    );

    sqlx::query_as::<_, FixtureView>(&sql)
        .bind(filters.league_id)
        .bind(filters.season)
        .bind(day_start)
        .bind(filters.status.map(|s| s.as_str()))
        .bind(filters.limit)
        .bind(filters.offset)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch matches: {}", e)))
}

pub async fn get_match_view(id: i32, postgres: PgPool) -> Result<Option<FixtureView>, AppError> {
    let sql = format!("{FIXTURE_VIEW_SELECT} WHERE m.id = $1");
    sqlx::query_as::<_, FixtureView>(&sql)
        .bind(id)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch match {}: {}", id, e)))
}

pub async fn list_live_matches(
    league_id: Option<i32>,
    season: Option<i32>,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<FixtureView>, AppError> {
    let sql = format!(
        "{FIXTURE_VIEW_SELECT}
            WHERE m.status = 'live'
              AND ($1::INT IS NULL OR m.league_id = $1)
              AND ($2::INT IS NULL OR m.season = $2)
            ORDER BY m.date_utc ASC, m.id ASC
            LIMIT $3"
    );
    sqlx::query_as::<_, FixtureView>(&sql)
        .bind(league_id)
        .bind(season)
        .bind(limit)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch live matches: {}", e)))
}

/// Most recent first.
pub async fn league_past(
    league_id: i32,
    season: i32,
    before: DateTime<Utc>,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<FixtureView>, AppError> {
    let sql = format!(
        "{FIXTURE_VIEW_SELECT}
            WHERE m.league_id = $1 AND m.season = $2 AND m.date_utc < $3
            ORDER BY m.date_utc DESC, m.id DESC
            LIMIT $4"
    );
    sqlx::query_as::<_, FixtureView>(&sql)
        .bind(league_id)
        .bind(season)
        .bind(before)
        .bind(limit)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch past league matches: {}", e)))
}

pub async fn league_upcoming(
    league_id: i32,
    season: i32,
    from: DateTime<Utc>,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<FixtureView>, AppError> {
    let sql = format!(
        "{FIXTURE_VIEW_SELECT}
            WHERE m.league_id = $1 AND m.season = $2 AND m.date_utc >= $3
            ORDER BY m.date_utc ASC, m.id ASC
            LIMIT $4"
    );
    sqlx::query_as::<_, FixtureView>(&sql)
        .bind(league_id)
        .bind(season)
        .bind(from)
        .bind(limit)
        .fetch_all(&postgres)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to fetch upcoming league matches: {}", e))
        })
}

pub async fn team_past(
    team_id: i32,
    season: i32,
    before: DateTime<Utc>,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<FixtureView>, AppError> {
    let sql = format!(
        "{FIXTURE_VIEW_SELECT}
            WHERE (m.home_team_id = $1 OR m.away_team_id = $1)
              AND m.season = $2 AND m.date_utc < $3
            ORDER BY m.date_utc DESC, m.id DESC
            LIMIT $4"
    );
    sqlx::query_as::<_, FixtureView>(&sql)
        .bind(team_id)
        .bind(season)
        .bind(before)
        .bind(limit)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch past team matches: {}", e)))
}

pub async fn team_upcoming(
    team_id: i32,
    season: i32,
    from: DateTime<Utc>,
    limit: i64,
    postgres: PgPool,
) -> Result<Vec<FixtureView>, AppError> {
    let sql = format!(
        "{FIXTURE_VIEW_SELECT}
            WHERE (m.home_team_id = $1 OR m.away_team_id = $1)
              AND m.season = $2 AND m.date_utc >= $3
            ORDER BY m.date_utc ASC, m.id ASC
            LIMIT $4"
    );
    sqlx::query_as::<_, FixtureView>(&sql)
        .bind(team_id)
        .bind(season)
        .bind(from)
        .bind(limit)
        .fetch_all(&postgres)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to fetch upcoming team matches: {}", e))
        })
}

/// Oldest first.
pub async fn list_repair_candidates(
    scan: &RepairScan,
    postgres: PgPool,
) -> Result<Vec<FixtureView>, AppError> {
    let sql = format!(
        "{FIXTURE_VIEW_SELECT}
            WHERE m.date_utc >= $1 AND m.date_utc < $2
              AND ($3::INT IS NULL OR m.league_id = $3)
              AND (NOT $4
                   OR m.home_score IS NULL OR m.away_score IS NULL
                   OR (m.home_score = 0 AND m.away_score = 0))
            ORDER BY m.date_utc ASC, m.id ASC
            LIMIT $5"
    );
    sqlx::query_as::<_, FixtureView>(&sql)
        .bind(scan.start)
        .bind(scan.end)
        .bind(scan.league_id)
        .bind(scan.only_missing)
        .bind(scan.limit)
        .fetch_all(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch matches to repair: {}", e)))
}

pub async fn count_live_matches(postgres: PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM matches WHERE status = 'live'")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count live matches: {}", e)))
}

pub async fn count_matches_between(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    postgres: PgPool,
) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM matches WHERE date_utc >= $1 AND date_utc < $2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to count matches: {}", e)))
}
