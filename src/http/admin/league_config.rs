use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    auth::AdminSession,
    db::league_config::{
        create_league_config, delete_league_config, get_league_config, list_league_configs,
        update_league_config,
    },
    http::admin::{
        AdminError, FlashQuery, admin_error,
        forms::{LeagueConfigForm, checkbox},
        render,
        templates::{
            LeagueConfigFormTemplate, LeagueConfigIndexTemplate, LeagueConfigRow,
            LeagueConfigShowTemplate,
        },
    },
    state::AppState,
};

fn invalid_form(
    title: String,
    action: String,
    form: &LeagueConfigForm,
    error: String,
) -> Result<Response, AdminError> {
    let page = LeagueConfigFormTemplate {
        title,
        action,
        provider_league_id: form.provider_league_id.trim().to_string(),
        name: form.name.trim().to_string(),
        country: form.country.trim().to_string(),
        seasons: form.seasons.trim().to_string(),
        enabled: checkbox(&form.enabled),
        sort_order: form.sort_order.trim().to_string(),
        error: Some(error),
    };
    Ok((StatusCode::BAD_REQUEST, render(&page)?).into_response())
}

pub async fn league_config_index(
    _admin: AdminSession,
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>, AdminError> {
    let configs = list_league_configs(state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error fetching league configs", e))?;

    render(&LeagueConfigIndexTemplate {
        configs: configs.into_iter().map(LeagueConfigRow::from).collect(),
        flash: flash.message(),
    })
}

pub async fn league_config_show(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>, AdminError> {
    let config = get_league_config(id, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error fetching league config", e))?;

    render(&LeagueConfigShowTemplate {
        config: config.into(),
        flash: flash.message(),
    })
}

pub async fn league_config_new_page(_admin: AdminSession) -> Result<Html<String>, AdminError> {
    render(&LeagueConfigFormTemplate::blank())
}

pub async fn league_config_new_submit(
    _admin: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<LeagueConfigForm>,
) -> Result<Response, AdminError> {
    let input = match form.to_input() {
        Ok(input) => input,
        Err(message) => {
            let blank = LeagueConfigFormTemplate::blank();
            return invalid_form(blank.title, blank.action, &form, message);
        }
    };

    let config = create_league_config(&input, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error creating league config", e))?;

    Ok(Redirect::to(&format!("/admin/league-config/{}?flash=created", config.id)).into_response())
}

pub async fn league_config_edit_page(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AdminError> {
    let config = get_league_config(id, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error fetching league config", e))?;

    render(&LeagueConfigFormTemplate::for_config(config.into()))
}

pub async fn league_config_edit_submit(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<LeagueConfigForm>,
) -> Result<Response, AdminError> {
    let input = match form.to_input() {
        Ok(input) => input,
        Err(message) => {
            let title = format!("Edit {}", form.name.trim());
            let action = format!("/admin/league-config/{}/edit", id);
            return invalid_form(title, action, &form, message);
        }
    };

    update_league_config(id, &input, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error updating league config", e))?;

    tracing::info!("League config {} saved", id);
    Ok(Redirect::to(&format!("/admin/league-config/{}?flash=saved", id)).into_response())
}

pub async fn league_config_delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AdminError> {
    delete_league_config(id, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error deleting league config", e))?;

    Ok(Redirect::to("/admin/league-config?flash=deleted").into_response())
}
