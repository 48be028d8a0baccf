use axum::{
    Form,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    auth::{clear_session_cookie, generate_jwt, session_cookie, verify_password},
    db::user::find_user_by_email,
    http::admin::{AdminError, admin_error, forms::LoginForm, render, templates::LoginTemplate},
    state::AppState,
};

pub async fn login_page() -> Result<Response, AdminError> {
    let page = LoginTemplate {
        email: String::new(),
        error: None,
    };
    Ok(render(&page)?.into_response())
}

pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AdminError> {
    let user = find_user_by_email(&form.email, state.postgres.clone())
        .await
        .map_err(|e| admin_error("Error fetching user", e))?
        .filter(|u| verify_password(&form.password, &u.password));

    let Some(user) = user.filter(|u| u.is_admin()) else {
        tracing::warn!("Failed back-office login for {}", form.email.trim());
        let page = LoginTemplate {
            email: form.email.trim().to_string(),
            error: Some("Invalid credentials.".into()),
        };
        return Ok((StatusCode::UNAUTHORIZED, render(&page)?).into_response());
    };

    let token = generate_jwt(&user, &state.config.jwt_secret)
        .map_err(|e| admin_error("Error issuing session", e))?;

    tracing::info!("Admin {} logged in", user.email);
    Ok((
        [(header::SET_COOKIE, session_cookie(&token))],
        Redirect::to("/admin"),
    )
        .into_response())
}

pub async fn logout() -> Response {
    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Redirect::to("/admin/login"),
    )
        .into_response()
}
