use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, post},
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    http::{admin, handlers},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .nest("/api", api_routes())
        .nest("/admin", admin_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(handlers::countries_handler))
        .route("/leagues", get(handlers::leagues_handler))
        .route("/home-leagues", get(handlers::home_leagues_handler))
        .route("/matches", get(handlers::matches_handler))
        .route("/match/{id}", get(handlers::match_detail_handler))
        .route("/live", get(handlers::live_handler))
        .route("/standings", get(handlers::standings_handler))
        .route("/fixtures", get(handlers::fixtures_handler))
        .route("/league/{key}", get(handlers::league_handler))
        .route("/team/{slug}", get(handlers::team_handler))
        .route(
            "/public/home-leagues",
            get(handlers::public_home_leagues_handler),
        )
        .route("/public/matches", get(handlers::public_matches_handler))
        .route("/auth/login", post(handlers::login_handler))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route("/login", get(admin::login_page).post(admin::login_submit))
        .route("/logout", post(admin::logout))
        .route("/country", get(admin::country_index))
        .route(
            "/country/{id}/edit",
            get(admin::country_edit_page).post(admin::country_edit_submit),
        )
        .route("/league", get(admin::league_index))
        .route(
            "/league/{id}/edit",
            get(admin::league_edit_page).post(admin::league_edit_submit),
        )
        .route("/user", get(admin::user_index))
        .route(
            "/user/new",
            get(admin::user_new_page).post(admin::user_new_submit),
        )
        .route(
            "/user/{id}/edit",
            get(admin::user_edit_page).post(admin::user_edit_submit),
        )
        .route("/league-config", get(admin::league_config_index))
        .route(
            "/league-config/new",
            get(admin::league_config_new_page).post(admin::league_config_new_submit),
        )
        .route("/league-config/{id}", get(admin::league_config_show))
        .route(
            "/league-config/{id}/edit",
            get(admin::league_config_edit_page).post(admin::league_config_edit_submit),
        )
        .route(
            "/league-config/{id}/delete",
            post(admin::league_config_delete),
        )
}
