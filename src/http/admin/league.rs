use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    auth::AdminSession,
    db::league::{get_league, list_leagues_admin, update_league_home},
    http::admin::{
        AdminError, FlashQuery, admin_error,
        forms::{HomeForm, checkbox, parse_optional_int},
        render,
        templates::{LeagueEditTemplate, LeagueIndexTemplate, LeagueRow},
    },
    state::AppState,
};

#[derive(Deserialize)]
pub struct LeagueIndexQuery {
    pub country: Option<String>,
    pub flash: Option<String>,
}

pub async fn league_index(
    _admin: AdminSession,
    State(state): State<AppState>,
    Query(query): Query<LeagueIndexQuery>,
) -> Result<Html<String>, AdminError> {
    let country = query
        .country
        .as_deref()
        .map(|c| c.trim().to_ascii_uppercase())
        .filter(|c| !c.is_empty());

    let leagues = list_leagues_admin(country.as_deref(), state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error fetching leagues", e))?;

    let flash = FlashQuery { flash: query.flash };
    render(&LeagueIndexTemplate {
        leagues: leagues.into_iter().map(LeagueRow::from).collect(),
        country: country.unwrap_or_default(),
        flash: flash.message(),
    })
}

pub async fn league_edit_page(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AdminError> {
    let league = get_league(id, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error fetching league", e))?;

    render(&LeagueEditTemplate::new(league, None))
}

pub async fn league_edit_submit(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<HomeForm>,
) -> Result<Response, AdminError> {
    let home_sort = match parse_optional_int(&form.home_sort) {
        Ok(sort) => sort,
        Err(message) => {
            let league = get_league(id, state.postgres.clone())
                .await
                .map_err(|e| admin_error("Error fetching league", e))?;
            let page = LeagueEditTemplate::new(league, Some(message));
            return Ok((StatusCode::BAD_REQUEST, render(&page)?).into_response());
        }
    };

    update_league_home(id, checkbox(&form.show_on_home), home_sort, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error updating league", e))?;

    tracing::info!("League {} home settings saved", id);
    Ok(Redirect::to("/admin/league?flash=saved").into_response())
}
