use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    db::{
        country::list_home_countries,
        league::{list_home_leagues, list_leagues_for_country, list_public_home_leagues},
    },
    http::handlers::{ApiError, api_error},
    models::{
        country::CountrySummary,
        league::{HomeLeague, LeagueListItem, PublicHomeLeague},
    },
    state::AppState,
};

#[derive(Deserialize)]
pub struct CountryQuery {
    pub country: Option<String>,
}

pub async fn countries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountrySummary>>, ApiError> {
    list_home_countries(state.postgres.clone())
        .await
        .map(Json)
        .map_err(|e| api_error("Error fetching countries", e))
}

/// Empty without a `country`.
pub async fn leagues_handler(
    State(state): State<AppState>,
    Query(query): Query<CountryQuery>,
) -> Result<Json<Vec<LeagueListItem>>, ApiError> {
    let Some(code) = query
        .country
        .as_deref()
        .map(|c| c.trim().to_ascii_uppercase())
        .filter(|c| !c.is_empty())
    else {
        return Ok(Json(Vec::new()));
    };

    list_leagues_for_country(&code, state.postgres.clone())
        .await
        .map(Json)
        .map_err(|e| api_error("Error fetching leagues", e))
}

pub async fn home_leagues_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<HomeLeague>>, ApiError> {
    list_home_leagues(state.postgres.clone())
        .await
        .map(Json)
        .map_err(|e| api_error("Error fetching home leagues", e))
}

pub async fn public_home_leagues_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicHomeLeague>>, ApiError> {
    list_public_home_leagues(state.postgres.clone())
        .await
        .map(Json)
        .map_err(|e| api_error("Error fetching public home leagues", e))
}
