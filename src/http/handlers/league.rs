use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    db::{
        fixture::{league_past, league_upcoming},
        standings::get_standings,
    },
    errors::AppError,
    http::{
        handlers::{ApiError, api_error, find_league},
        query::{LeagueRef, parse_int},
    },
    models::{fixture::MatchOut, league::League, standings::StandingRow},
    state::AppState,
};

const LEAGUE_MATCHES_LIMIT: i64 = 10;

#[derive(Deserialize)]
pub struct SeasonQuery {
    pub season: Option<String>,
}

#[derive(Serialize)]
pub struct LeaguePage {
    pub league: League,
    pub season: i32,
    pub past: Vec<MatchOut>,
    pub upcoming: Vec<MatchOut>,
}

fn league_not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "League not found" })))
}

/// League by id or slug, with the latest results and next fixtures around today.
pub async fn league_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<LeaguePage>, ApiError> {
    let league_ref = LeagueRef::parse(&key).ok_or_else(league_not_found)?;
    let league = find_league(&league_ref, state.postgres.clone())
        .await
        .map_err(|e| api_error("Error fetching league", e))?
        .ok_or_else(league_not_found)?;

    let season = parse_int(&query.season).unwrap_or(league.season_current);
    let today = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();

    let past = league_past(
        league.id,
        season,
        today,
        LEAGUE_MATCHES_LIMIT,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| api_error("Error fetching league results", e))?;
    let upcoming = league_upcoming(
        league.id,
        season,
        today,
        LEAGUE_MATCHES_LIMIT,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| api_error("Error fetching league fixtures", e))?;

    Ok(Json(LeaguePage {
        league,
        season,
        past: past.into_iter().map(|m| m.into_out(true)).collect(),
        upcoming: upcoming.into_iter().map(|m| m.into_out(true)).collect(),
    }))
}

#[derive(Deserialize)]
pub struct StandingsQuery {
    pub league: Option<String>,
    pub season: Option<String>,
}

pub async fn standings_handler(
    State(state): State<AppState>,
    Query(query): Query<StandingsQuery>,
) -> Result<Json<Vec<StandingRow>>, ApiError> {
    let (Some(league_ref), Some(season)) = (
        query.league.as_deref().and_then(LeagueRef::parse),
        parse_int::<i32>(&query.season),
    ) else {
        return Err(api_error(
            "Invalid standings query",
            AppError::BadRequest("league and season are required".into()),
        ));
    };

    let league = find_league(&league_ref, state.postgres.clone())
        .await
        .map_err(|e| api_error("Error fetching league", e))?
        .ok_or_else(league_not_found)?;

    get_standings(league.id, season, state.postgres.clone())
        .await
        .map(Json)
        .map_err(|e| api_error("Error computing standings", e))
}
