use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: i32,
    pub external_id: i32,
    pub country_id: i32,
    pub name: String,
    /// `league` or `cup`
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub season_current: i32,
    pub logo: Option<String>,
    pub slug: String,
    pub show_on_home: bool,
    pub home_sort: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// League joined with its country, as listed in the back office.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeagueWithCountry {
    pub id: i32,
    pub external_id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub season_current: i32,
    pub logo: Option<String>,
    pub slug: String,
    pub show_on_home: bool,
    pub home_sort: Option<i32>,
    pub country_name: String,
    pub country_code: String,
    pub country_slug: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeagueListItem {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub logo: Option<String>,
    pub season: i32,
    pub country_slug: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HomeLeague {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub logo: Option<String>,
    pub country_slug: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublicHomeLeague {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub logo: Option<String>,
    pub external_id: i32,
}

/// League row selected for the daily sync.
#[derive(Debug, Clone, FromRow)]
pub struct SyncLeague {
    pub id: i32,
    pub external_id: i32,
    pub season_current: i32,
    pub name: String,
    pub country_code: String,
}
