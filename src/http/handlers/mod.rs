pub mod auth;
pub mod catalog;
pub mod fixture;
pub mod health;
pub mod league;
pub mod team;

use axum::{Json, http::StatusCode};
use serde_json::Value;
use sqlx::PgPool;

use crate::{
    db::league::find_league_by_key,
    errors::AppError,
    http::query::LeagueRef,
    models::league::League,
};

pub use auth::login_handler;
pub use catalog::{
    countries_handler, home_leagues_handler, leagues_handler, public_home_leagues_handler,
};
pub use fixture::{
    fixtures_handler, live_handler, match_detail_handler, matches_handler, public_matches_handler,
};
pub use health::health_handler;
pub use league::{league_handler, standings_handler};
pub use team::team_handler;

pub type ApiError = (StatusCode, Json<Value>);

pub(crate) fn api_error(context: &str, err: AppError) -> ApiError {
    tracing::error!("{}: {}", context, err);
    err.to_json_response()
}

pub(crate) async fn find_league(
    league: &LeagueRef,
    postgres: PgPool,
) -> Result<Option<League>, AppError> {
    match league {
        LeagueRef::Id(id) => find_league_by_key(&id.to_string(), postgres).await,
        LeagueRef::Slug(slug) => find_league_by_key(slug, postgres).await,
    }
}
