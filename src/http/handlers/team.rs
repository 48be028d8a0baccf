use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{NaiveTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::{
    db::{
        fixture::{team_past, team_upcoming},
        team::find_team_by_slug,
    },
    http::{
        handlers::{ApiError, api_error, league::SeasonQuery},
        query::parse_int,
    },
    jobs::current_year,
    models::{fixture::MatchOut, team::Team},
    state::AppState,
};

const TEAM_PAST_LIMIT: i64 = 50;
const TEAM_UPCOMING_LIMIT: i64 = 10;

#[derive(Serialize)]
pub struct TeamPage {
    pub team: Team,
    pub season: i32,
    pub past: Vec<MatchOut>,
    pub upcoming: Vec<MatchOut>,
}

pub async fn team_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<TeamPage>, ApiError> {
    let team = find_team_by_slug(slug.trim(), state.postgres.clone())
        .await
        .map_err(|e| api_error("Error fetching team", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, Json(json!({ "error": "Team not found" }))))?;

    let season = parse_int(&query.season).unwrap_or_else(current_year);
    let today = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();

    let past = team_past(team.id, season, today, TEAM_PAST_LIMIT, state.postgres.clone())
        .await
        .map_err(|e| api_error("Error fetching team results", e))?;
    let upcoming = team_upcoming(
        team.id,
        season,
        today,
        TEAM_UPCOMING_LIMIT,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| api_error("Error fetching team fixtures", e))?;

    Ok(Json(TeamPage {
        team,
        season,
        past: past.into_iter().map(|m| m.into_out(true)).collect(),
        upcoming: upcoming.into_iter().map(|m| m.into_out(true)).collect(),
    }))
}
