use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    auth::AdminSession,
    db::country::{get_country, list_countries_admin, update_country_home},
    http::admin::{
        AdminError, FlashQuery, admin_error,
        forms::{HomeForm, checkbox, parse_optional_int},
        render,
        templates::{CountryEditTemplate, CountryIndexTemplate, CountryRow},
    },
    state::AppState,
};

pub async fn country_index(
    _admin: AdminSession,
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>, AdminError> {
    let countries = list_countries_admin(state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error fetching countries", e))?;

    render(&CountryIndexTemplate {
        countries: countries.into_iter().map(CountryRow::from).collect(),
        flash: flash.message(),
    })
}

pub async fn country_edit_page(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AdminError> {
    let country = get_country(id, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error fetching country", e))?;

    render(&CountryEditTemplate {
        country: country.into(),
        error: None,
    })
}

pub async fn country_edit_submit(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<HomeForm>,
) -> Result<Response, AdminError> {
    let home_sort = match parse_optional_int(&form.home_sort) {
        Ok(sort) => sort,
        Err(message) => {
            let country = get_country(id, state.postgres.clone())
                .await
                .map_err(|e| admin_error("Error fetching country", e))?;
            let page = CountryEditTemplate {
                country: country.into(),
                error: Some(message),
            };
            return Ok((StatusCode::BAD_REQUEST, render(&page)?).into_response());
        }
    };

    update_country_home(id, checkbox(&form.show_on_home), home_sort, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error updating country", e))?;

    tracing::info!("Country {} home settings saved", id);
    Ok(Redirect::to("/admin/country?flash=saved").into_response())
}
