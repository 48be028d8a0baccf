use axum::{extract::State, response::Html};
use chrono::{Days, NaiveTime, Utc};

use crate::{
    auth::AdminSession,
    db::{
        country::count_countries,
        fixture::{count_live_matches, count_matches_between},
        league::count_leagues,
        team::count_teams,
    },
    http::admin::{AdminError, admin_error, render, templates::DashboardTemplate},
    state::AppState,
};

pub async fn dashboard(
    AdminSession(claims): AdminSession,
    State(state): State<AppState>,
) -> Result<Html<String>, AdminError> {
    let today = Utc::now().date_naive();
    let start = today.and_time(NaiveTime::MIN).and_utc();
    let end = today
        .checked_add_days(Days::new(1))
        .unwrap_or(today)
        .and_time(NaiveTime::MIN)
        .and_utc();

    let postgres = state.postgres.clone();
    let (live, matches_today, countries, leagues, teams) = tokio::try_join!(
        count_live_matches(postgres.clone()),
        count_matches_between(start, end, postgres.clone()),
        count_countries(postgres.clone()),
        count_leagues(postgres.clone()),
        count_teams(postgres.clone()),
    )
    .map_err(|e| admin_error("Error loading dashboard", e))?;

    render(&DashboardTemplate {
        email: claims.email,
        live,
        today: matches_today,
        countries,
        leagues,
        teams,
    })
}
