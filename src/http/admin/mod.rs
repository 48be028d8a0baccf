//! Server-rendered back office under `/admin`, guarded by [`AdminSession`].
//!
//! [`AdminSession`]: crate::auth::AdminSession

pub mod country;
pub mod dashboard;
pub mod forms;
pub mod league;
pub mod league_config;
pub mod session;
pub mod templates;
pub mod user;

use askama::Template;
use axum::{http::StatusCode, response::Html};
use serde::Deserialize;

use crate::errors::AppError;

pub use country::{country_edit_page, country_edit_submit, country_index};
pub use dashboard::dashboard;
pub use league::{league_edit_page, league_edit_submit, league_index};
pub use league_config::{
    league_config_delete, league_config_edit_page, league_config_edit_submit,
    league_config_index, league_config_new_page, league_config_new_submit, league_config_show,
};
pub use session::{login_page, login_submit, logout};
pub use user::{user_edit_page, user_edit_submit, user_index, user_new_page, user_new_submit};

pub type AdminError = (StatusCode, String);

pub(crate) fn admin_error(context: &str, err: AppError) -> AdminError {
    tracing::error!("{}: {}", context, err);
    err.to_response()
}

pub(crate) fn render<T: Template>(template: &T) -> Result<Html<String>, AdminError> {
    template
        .render()
        .map(Html)
        .map_err(|e| admin_error("Error rendering template", e.into()))
}

/// `?flash=saved` after a redirect.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub flash: Option<String>,
}

impl FlashQuery {
    pub fn message(&self) -> Option<String> {
        let text = match self.flash.as_deref()? {
            "saved" => "Changes saved.",
            "created" => "Created.",
            "deleted" => "Deleted.",
            _ => return None,
        };
        Some(text.to_string())
    }
}
