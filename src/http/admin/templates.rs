use askama::Template;

use crate::models::{
    User,
    country::Country,
    league::{League, LeagueWithCountry},
    league_config::{LeagueConfig, seasons_to_csv},
};

fn sort_text(sort: Option<i32>) -> String {
    sort.map(|s| s.to_string()).unwrap_or_default()
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub email: String,
    pub live: i64,
    pub today: i64,
    pub countries: i64,
    pub leagues: i64,
    pub teams: i64,
}

pub struct CountryRow {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub slug: String,
    pub flag: String,
    pub show_on_home: bool,
    pub home_sort: String,
}

impl From<Country> for CountryRow {
    fn from(c: Country) -> Self {
        Self {
            id: c.id,
            name: c.name,
            code: c.code,
            slug: c.slug,
            flag: c.flag.unwrap_or_default(),
            show_on_home: c.show_on_home,
            home_sort: sort_text(c.home_sort),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/country_index.html")]
pub struct CountryIndexTemplate {
    pub countries: Vec<CountryRow>,
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/country_edit.html")]
pub struct CountryEditTemplate {
    pub country: CountryRow,
    pub error: Option<String>,
}

pub struct LeagueRow {
    pub id: i32,
    pub external_id: i32,
    pub name: String,
    pub kind: String,
    pub season: i32,
    pub logo: String,
    pub slug: String,
    pub country_name: String,
    pub country_code: String,
    pub show_on_home: bool,
    pub home_sort: String,
}

impl From<LeagueWithCountry> for LeagueRow {
    fn from(l: LeagueWithCountry) -> Self {
        Self {
            id: l.id,
            external_id: l.external_id,
            name: l.name,
            kind: l.kind,
            season: l.season_current,
            logo: l.logo.unwrap_or_default(),
            slug: l.slug,
            country_name: l.country_name,
            country_code: l.country_code,
            show_on_home: l.show_on_home,
            home_sort: sort_text(l.home_sort),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/league_index.html")]
pub struct LeagueIndexTemplate {
    pub leagues: Vec<LeagueRow>,
    pub country: String,
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/league_edit.html")]
pub struct LeagueEditTemplate {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub show_on_home: bool,
    pub home_sort: String,
    pub error: Option<String>,
}

impl LeagueEditTemplate {
    pub fn new(league: League, error: Option<String>) -> Self {
        Self {
            id: league.id,
            name: league.name,
            slug: league.slug,
            show_on_home: league.show_on_home,
            home_sort: sort_text(league.home_sort),
            error,
        }
    }
}

pub struct UserRow {
    pub id: i32,
    pub email: String,
    pub roles: String,
    pub created_at: String,
}

impl From<User> for UserRow {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            roles: u.roles.join(", "),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/user_index.html")]
pub struct UserIndexTemplate {
    pub users: Vec<UserRow>,
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/user_form.html")]
pub struct UserFormTemplate {
    pub title: String,
    pub action: String,
    pub email: String,
    pub is_admin: bool,
    pub is_new: bool,
    pub error: Option<String>,
}

pub struct LeagueConfigRow {
    pub id: i32,
    pub provider_league_id: i32,
    pub name: String,
    pub country: String,
    pub seasons: String,
    pub enabled: bool,
    pub sort_order: i32,
    pub slug: String,
}

impl From<LeagueConfig> for LeagueConfigRow {
    fn from(c: LeagueConfig) -> Self {
        Self {
            id: c.id,
            provider_league_id: c.provider_league_id,
            name: c.name,
            country: c.country.unwrap_or_default(),
            seasons: seasons_to_csv(&c.seasons_active),
            enabled: c.enabled,
            sort_order: c.sort_order,
            slug: c.slug,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/league_config_index.html")]
pub struct LeagueConfigIndexTemplate {
    pub configs: Vec<LeagueConfigRow>,
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/league_config_show.html")]
pub struct LeagueConfigShowTemplate {
    pub config: LeagueConfigRow,
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/league_config_form.html")]
pub struct LeagueConfigFormTemplate {
    pub title: String,
    pub action: String,
    pub provider_league_id: String,
    pub name: String,
    pub country: String,
    pub seasons: String,
    pub enabled: bool,
    pub sort_order: String,
    pub error: Option<String>,
}

impl LeagueConfigFormTemplate {
    pub fn blank() -> Self {
        Self {
            title: "New league config".into(),
            action: "/admin/league-config/new".into(),
            provider_league_id: String::new(),
            name: String::new(),
            country: String::new(),
            seasons: String::new(),
            enabled: true,
            sort_order: "0".into(),
            error: None,
        }
    }

    pub fn for_config(config: LeagueConfigRow) -> Self {
        Self {
            title: format!("Edit {}", config.name),
            action: format!("/admin/league-config/{}/edit", config.id),
            provider_league_id: config.provider_league_id.to_string(),
            name: config.name,
            country: config.country,
            seasons: config.seasons,
            enabled: config.enabled,
            sort_order: config.sort_order.to_string(),
            error: None,
        }
    }
}
