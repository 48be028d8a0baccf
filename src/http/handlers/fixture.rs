use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::{
    db::fixture::{get_match_view, list_live_matches, list_matches},
    errors::AppError,
    http::{
        handlers::{ApiError, api_error, find_league},
        query::{
            LIVE_LIMIT_DEFAULT, LIVE_LIMIT_MAX, LeagueRef, MatchQueryParams, clamp_limit,
            parse_day, parse_fixture_date, parse_int, resolve_public_season,
        },
    },
    jobs::current_year,
    models::{
        fixture::{MatchFilters, MatchOut},
        provider::{CompactFixture, ProviderMatch, SeasonParam},
    },
    state::AppState,
};

pub async fn matches_handler(
    State(state): State<AppState>,
    Query(params): Query<MatchQueryParams>,
) -> Result<Json<Vec<MatchOut>>, ApiError> {
    let query = params
        .parse()
        .map_err(|e| api_error("Invalid match query", e))?;

    let league_id = match &query.league {
        None => None,
        Some(LeagueRef::Id(id)) => Some(*id),
        Some(slug) => match find_league(slug, state.postgres.clone())
            .await
            .map_err(|e| api_error("Error resolving league", e))?
        {
            Some(league) => Some(league.id),
            None => return Ok(Json(Vec::new())),
        },
    };

    let filters = MatchFilters {
        league_id,
        season: query.season,
        date: query.date,
        status: query.status,
        limit: query.limit,
        offset: query.offset,
    };

    let rows = list_matches(&filters, state.postgres.clone())
        .await
        .map_err(|e| api_error("Error fetching matches", e))?;

    Ok(Json(rows.into_iter().map(|m| m.into_out(true)).collect()))
}

pub async fn match_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let view = get_match_view(id, state.postgres.clone())
        .await
        .map_err(|e| api_error("Error fetching match", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, Json(json!({ "error": "Match not found" }))))?;

    let mut response = Json(view.into_out(false)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=30"),
    );
    Ok(response)
}

#[derive(Deserialize)]
pub struct LiveQuery {
    pub league: Option<String>,
    pub season: Option<String>,
    pub limit: Option<String>,
}

pub async fn live_handler(
    State(state): State<AppState>,
    Query(query): Query<LiveQuery>,
) -> Result<Json<Vec<MatchOut>>, ApiError> {
    let league_id = match query.league.as_deref().and_then(LeagueRef::parse) {
        None => None,
        Some(league) => match find_league(&league, state.postgres.clone())
            .await
            .map_err(|e| api_error("Error resolving league", e))?
        {
            Some(league) => Some(league.id),
            None => return Ok(Json(Vec::new())),
        },
    };
    let limit = clamp_limit(parse_int(&query.limit), LIVE_LIMIT_DEFAULT, LIVE_LIMIT_MAX);

    let rows = list_live_matches(
        league_id,
        parse_int(&query.season),
        limit,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| api_error("Error fetching live matches", e))?;

    Ok(Json(rows.into_iter().map(|m| m.into_out(false)).collect()))
}

#[derive(Deserialize)]
pub struct FixturesQuery {
    pub date: Option<String>,
}

/// Provider fixtures for a day, straight from the API.
pub async fn fixtures_handler(
    State(state): State<AppState>,
    Query(query): Query<FixturesQuery>,
) -> Result<Json<Vec<CompactFixture>>, ApiError> {
    let day = parse_fixture_date(query.date.as_deref(), Utc::now().date_naive())
        .map_err(|e| api_error("Invalid fixtures date", e))?;

    let rows = state
        .provider
        .matches_by_date(&day.format("%Y-%m-%d").to_string())
        .await
        .map_err(|e| api_error("Error fetching provider fixtures", e))?;

    Ok(Json(rows.into_iter().map(CompactFixture::from).collect()))
}

#[derive(Deserialize)]
pub struct PublicMatchesQuery {
    #[serde(rename = "leagueExt")]
    pub league_ext: Option<String>,
    pub date: Option<String>,
    pub season: Option<String>,
}

pub async fn public_matches_handler(
    State(state): State<AppState>,
    Query(query): Query<PublicMatchesQuery>,
) -> Result<Json<Vec<ProviderMatch>>, ApiError> {
    let league_ext = parse_int::<i32>(&query.league_ext)
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            api_error(
                "Invalid public matches query",
                AppError::BadRequest("leagueExt is required".into()),
            )
        })?;

    let date = match query.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => Some(parse_day(raw).map_err(|e| api_error("Invalid public matches date", e))?),
        None => None,
    };
    let season = resolve_public_season(parse_int(&query.season), date, current_year());
    let date = date.map(|d| d.format("%Y-%m-%d").to_string());

    state
        .provider
        .matches_by_league_season(league_ext, SeasonParam::Year(season), date.as_deref())
        .await
        .map(Json)
        .map_err(|e| api_error("Error fetching provider matches", e))
}
