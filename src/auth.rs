use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::TypedHeader;
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{Duration, Utc};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sha2::Sha256;

use crate::{
    errors::AppError,
    models::{User, user::Claims},
    state::AppState,
};

pub const SESSION_COOKIE: &str = "admin_token";
const SESSION_HOURS: i64 = 24;
const PBKDF2_ROUNDS: u32 = 120_000;
const PBKDF2_PREFIX: &str = "pbkdf2_sha256";

/// Claims from a bearer token or the admin session cookie.
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
        {
            Ok(TypedHeader(Authorization(bearer))) => bearer.token().to_string(),
            Err(_) => cookie_token(parts).ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    "Missing or invalid Authorization header".to_string(),
                )
            })?,
        };

        AuthClaims::from_token(&token, &state.config.jwt_secret)
    }
}

impl AuthClaims {
    pub fn from_token(token: &str, secret: &str) -> Result<Self, (StatusCode, String)> {
        decode_jwt(token, secret)
            .map(Self)
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid or expired token".into()))
    }
}

/// Back-office guard: an admin session, or a redirect to the login page.
pub struct AdminSession(pub Claims);

pub struct LoginRedirect;

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/admin/login").into_response()
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = LoginRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthClaims(claims) = AuthClaims::from_request_parts(parts, state)
            .await
            .map_err(|_| LoginRedirect)?;

        if !claims.is_admin() {
            tracing::warn!("Non-admin {} tried to reach the back office", claims.email);
            return Err(LoginRedirect);
        }

        Ok(Self(claims))
    }
}

fn cookie_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|c| c.get(SESSION_COOKIE).map(str::to_string))
        .filter(|t| !t.is_empty())
}

pub fn generate_jwt(user: &User, secret: &str) -> Result<String, AppError> {
    let expiration = (Utc::now() + Duration::hours(SESSION_HOURS)).timestamp() as usize;
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        roles: user.roles.clone(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AppError::JwtError)
}

pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}

pub fn session_cookie(token: &str) -> String {
    format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Strict; Path=/; Max-Age={}",
        SESSION_HOURS * 3600
    )
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Strict; Path=/; Max-Age=0")
}

/// `pbkdf2_sha256$rounds$salt$hash`, salt and hash in standard base64.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let hash = derive(password, &salt, PBKDF2_ROUNDS);
    format!(
        "{PBKDF2_PREFIX}${PBKDF2_ROUNDS}${}${}",
        STANDARD.encode(salt),
        STANDARD.encode(hash)
    )
}

/// `false` for a wrong password and for any malformed stored hash.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let parts: Vec<&str> = stored.split('$').collect();
    let [prefix, rounds, salt, hash] = parts.as_slice() else {
        return false;
    };
    if *prefix != PBKDF2_PREFIX {
        return false;
    }

    let (Ok(rounds), Ok(salt), Ok(expected)) = (
        rounds.parse::<u32>(),
        STANDARD.decode(salt),
        STANDARD.decode(hash),
    ) else {
        return false;
    };
    if rounds == 0 || expected.len() != 32 {
        return false;
    }

    constant_time_eq(&derive(password, &salt, rounds), &expected)
}

fn derive(password: &str, salt: &[u8], rounds: u32) -> [u8; 32] {
    let mut out = [0u8; 32];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, rounds, &mut out);
    out
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
