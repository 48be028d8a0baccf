use serde::Deserialize;

use crate::models::league_config::{LeagueConfigInput, parse_seasons_csv};

/// HTML checkboxes only send a value when ticked.
pub fn checkbox(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty() && v != "0" && v != "off")
}

/// Blank is `None`; anything else must be an integer.
pub fn parse_optional_int(raw: &str) -> Result<Option<i32>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>()
        .map(Some)
        .map_err(|_| format!("'{}' is not a number", raw))
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HomeForm {
    pub show_on_home: Option<String>,
    #[serde(default)]
    pub home_sort: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserForm {
    pub email: String,
    pub admin: Option<String>,
    /// Blank keeps the current password on edit.
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct LeagueConfigForm {
    #[serde(default)]
    pub provider_league_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    /// Comma separated.
    #[serde(default)]
    pub seasons: String,
    pub enabled: Option<String>,
    #[serde(default)]
    pub sort_order: String,
}

impl LeagueConfigForm {
    pub fn to_input(&self) -> Result<LeagueConfigInput, String> {
        let provider_league_id = self
            .provider_league_id
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| "Provider league id must be a positive number".to_string())?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".into());
        }
        if name.chars().count() > 100 {
            return Err("Name must be at most 100 characters".into());
        }

        let country = self.country.trim();
        if country.chars().count() > 60 {
            return Err("Country must be at most 60 characters".into());
        }
        let country = Some(country)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(LeagueConfigInput {
            provider_league_id,
            name: name.to_string(),
            country,
            seasons_active: parse_seasons_csv(&self.seasons),
            enabled: checkbox(&self.enabled),
            sort_order: parse_optional_int(&self.sort_order)?.unwrap_or(0),
        })
    }
}
