use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i32,
    pub name: String,
    /// ISO2, or `XX` when the provider gave nothing usable.
    pub code: String,
    pub flag: Option<String>,
    pub slug: String,
    pub show_on_home: bool,
    pub home_sort: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub slug: String,
    pub flag: Option<String>,
}

pub const FALLBACK_COUNTRY_CODE: &str = "XX";
pub const FALLBACK_COUNTRY_NAME: &str = "Unknown";
