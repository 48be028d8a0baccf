use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{generate_jwt, verify_password},
    db::user::find_user_by_email,
    errors::AppError,
    http::handlers::{ApiError, api_error},
    state::AppState,
};

#[derive(Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    pub roles: Vec<String>,
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = find_user_by_email(&payload.email, state.postgres.clone())
        .await
        .map_err(|e| api_error("Error fetching user", e))?
        .filter(|u| verify_password(&payload.password, &u.password))
        .ok_or_else(|| {
            api_error(
                "Failed login",
                AppError::Unauthorized("Invalid credentials".into()),
            )
        })?;

    let token = generate_jwt(&user, &state.config.jwt_secret)
        .map_err(|e| api_error("Error issuing token", e))?;

    tracing::info!("User {} logged in", user.email);
    Ok(Json(LoginResponse {
        token,
        email: user.email,
        roles: user.roles,
    }))
}
