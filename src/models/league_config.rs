use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeagueConfig {
    pub id: i32,
    /// API-Football league id.
    pub provider_league_id: i32,
    pub name: String,
    pub country: Option<String>,
    pub seasons_active: Vec<String>,
    pub enabled: bool,
    pub sort_order: i32,
    pub slug: String,
}

#[derive(Debug, Clone, Default)]
pub struct LeagueConfigInput {
    pub provider_league_id: i32,
    pub name: String,
    pub country: Option<String>,
    pub seasons_active: Vec<String>,
    pub enabled: bool,
    pub sort_order: i32,
}

/// "2023, 2024,,2023" -> ["2023", "2024"]: trimmed, empties dropped, first occurrence kept.
pub fn parse_seasons_csv(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !out.iter().any(|seen| seen == part) {
            out.push(part.to_string());
        }
    }
    out
}

pub fn seasons_to_csv(seasons: &[String]) -> String {
    seasons
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(",")
}
