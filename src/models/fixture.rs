use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
}

#[derive(Debug, Error)]
#[error("Invalid status. Allowed: scheduled | live | finished.")]
pub struct ParseMatchStatusError;

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
        }
    }

    /// Scores are persisted for finished matches, and for live ones only when asked to.
    pub fn allows_score_write(&self, include_live: bool) -> bool {
        match self {
            MatchStatus::Finished => true,
            MatchStatus::Live => include_live,
            MatchStatus::Scheduled => false,
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = ParseMatchStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "live" => Ok(MatchStatus::Live),
            "finished" => Ok(MatchStatus::Finished),
            _ => Err(ParseMatchStatusError),
        }
    }
}

impl TryFrom<String> for MatchStatus {
    type Error = ParseMatchStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Fixture joined with its league and both teams.
#[derive(Debug, Clone, FromRow)]
pub struct FixtureView {
    pub id: i32,
    pub external_id: i32,
    pub season: i32,
    pub round: Option<String>,
    pub stage: Option<String>,
    pub venue: Option<String>,
    pub minute: Option<i16>,
    pub date_utc: DateTime<Utc>,
    #[sqlx(try_from = "String")]
    pub status: MatchStatus,
    pub home_score: Option<i16>,
    pub away_score: Option<i16>,
    pub league_id: i32,
    pub league_external_id: i32,
    pub league_name: String,
    pub league_slug: String,
    pub home_id: i32,
    pub home_external_id: Option<i32>,
    pub home_slug: String,
    pub home_name: String,
    pub home_logo: Option<String>,
    pub away_id: i32,
    pub away_external_id: Option<i32>,
    pub away_slug: String,
    pub away_name: String,
    pub away_logo: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOut {
    pub id: i32,
    pub date_utc: String,
    pub status: MatchStatus,
    pub season: i32,
    pub round: Option<String>,
    pub stage: Option<String>,
    pub venue: Option<String>,
    pub minute: Option<i16>,
    pub league: MatchLeague,
    pub home: MatchSide,
    pub away: MatchSide,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchLeague {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchSide {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub logo: Option<String>,
    pub goals: Option<i16>,
}

impl FixtureView {
    /// `finished_goals_only` hides running or stale scores on listings.
    pub fn into_out(self, finished_goals_only: bool) -> MatchOut {
        let show_goals = !finished_goals_only || self.status == MatchStatus::Finished;
        let minute = if self.status == MatchStatus::Live {
            self.minute
        } else {
            None
        };

        MatchOut {
            id: self.id,
            date_utc: self.date_utc.to_rfc3339(),
            status: self.status,
            season: self.season,
            round: self.round,
            stage: self.stage,
            venue: self.venue,
            minute,
            league: MatchLeague {
                id: self.league_id,
                name: self.league_name,
                slug: self.league_slug,
            },
            home: MatchSide {
                id: self.home_id,
                slug: self.home_slug,
                name: self.home_name,
                logo: self.home_logo,
                goals: self.home_score.filter(|_| show_goals),
            },
            away: MatchSide {
                id: self.away_id,
                slug: self.away_slug,
                name: self.away_name,
                logo: self.away_logo,
                goals: self.away_score.filter(|_| show_goals),
            },
        }
    }
}

/// Filters accepted by the match listing.
#[derive(Debug, Clone, Default)]
pub struct MatchFilters {
    pub league_id: Option<i32>,
    pub season: Option<i32>,
    pub date: Option<chrono::NaiveDate>,
    pub status: Option<MatchStatus>,
    pub limit: i64,
    pub offset: i64,
}

/// Row written by the match import, keyed on `external_id`.
#[derive(Debug, Clone)]
pub struct FixtureUpsert {
    pub external_id: i32,
    pub league_id: i32,
    pub season: i32,
    pub round: Option<String>,
    pub stage: Option<String>,
    pub venue: Option<String>,
    /// `None` keeps the stored kickoff, or uses now for a new row.
    pub date_utc: Option<DateTime<Utc>>,
    pub status: MatchStatus,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: Option<i16>,
    pub away_score: Option<i16>,
    pub minute: Option<i16>,
}
