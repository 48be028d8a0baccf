use serde::Serialize;
use std::fmt;

use crate::models::fixture::MatchStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCountry {
    pub code: String,
    pub name: String,
    pub flag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLeague {
    pub external_id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub logo: Option<String>,
    pub season: i32,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderTeam {
    pub external_id: i32,
    pub name: String,
    pub short_name: Option<String>,
    pub logo: Option<String>,
    /// API-Football gives a country name here, not a code.
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSide {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub goals: Option<i16>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMatch {
    pub external_id: i32,
    pub date_utc: String,
    pub status: MatchStatus,
    pub round: Option<String>,
    pub stage: Option<String>,
    pub venue: Option<String>,
    pub minute: Option<i16>,
    pub league_external_id: i32,
    pub league_name: Option<String>,
    pub home: ProviderSide,
    pub away: ProviderSide,
}

impl ProviderMatch {
    pub fn has_both_goals(&self) -> bool {
        self.home.goals.is_some() && self.away.goals.is_some()
    }
}

/// Season as sent to the provider: `2024`, or the `2024-2025` span some competitions use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonParam {
    Year(i32),
    Span(i32),
}

impl fmt::Display for SeasonParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonParam::Year(y) => write!(f, "{y}"),
            SeasonParam::Span(y) => write!(f, "{}-{}", y, y + 1),
        }
    }
}

impl From<i32> for SeasonParam {
    fn from(year: i32) -> Self {
        SeasonParam::Year(year)
    }
}

/// Compact provider fixture served by the fixtures-by-date endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompactFixture {
    pub id: i32,
    pub league: Option<String>,
    pub kickoff: String,
    pub status: MatchStatus,
    pub home: ProviderSide,
    pub away: ProviderSide,
}

impl From<ProviderMatch> for CompactFixture {
    fn from(m: ProviderMatch) -> Self {
        Self {
            id: m.external_id,
            league: m.league_name,
            kickoff: m.date_utc,
            status: m.status,
            home: m.home,
            away: m.away,
        }
    }
}
