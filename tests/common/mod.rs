#![allow(dead_code)]

use async_trait::async_trait;
use football_data_be::{
    errors::AppError,
    models::{
        fixture::MatchStatus,
        provider::{
            ProviderCountry, ProviderLeague, ProviderMatch, ProviderSide, ProviderTeam,
            SeasonParam,
        },
    },
    provider::FootballProvider,
};
use std::collections::HashMap;

/// Paris (85) vs Lille (79), Ligue 1 (61).
pub fn provider_match(
    external_id: i32,
    status: MatchStatus,
    home: Option<i16>,
    away: Option<i16>,
) -> ProviderMatch {
    ProviderMatch {
        external_id,
        date_utc: "2024-05-10T19:00:00+00:00".into(),
        status,
        league_external_id: 61,
        home: ProviderSide {
            id: 85,
            name: "Paris".into(),
            logo: None,
            goals: home,
        },
        away: ProviderSide {
            id: 79,
            name: "Lille".into(),
            logo: None,
            goals: away,
        },
        ..Default::default()
    }
}

#[derive(Default)]
pub struct FakeProvider {
    pub countries: Vec<ProviderCountry>,
    pub leagues: Vec<ProviderLeague>,
    pub teams: Vec<ProviderTeam>,
    pub by_id: HashMap<i32, ProviderMatch>,
    pub by_id_fails: bool,
    /// Keyed on (season, day).
    pub by_league: HashMap<(String, String), Vec<ProviderMatch>>,
    pub by_date: HashMap<String, Vec<ProviderMatch>>,
}

#[async_trait]
impl FootballProvider for FakeProvider {
    async fn countries(&self) -> Result<Vec<ProviderCountry>, AppError> {
        Ok(self.countries.clone())
    }

    async fn leagues_by_country(&self, _code: &str) -> Result<Vec<ProviderLeague>, AppError> {
        Ok(self.leagues.clone())
    }

    async fn teams_by_league_season(
        &self,
        _league_external_id: i32,
        _season: i32,
    ) -> Result<Vec<ProviderTeam>, AppError> {
        Ok(self.teams.clone())
    }

    async fn matches_by_league_season(
        &self,
        _league_external_id: i32,
        season: SeasonParam,
        date: Option<&str>,
    ) -> Result<Vec<ProviderMatch>, AppError> {
        let key = (season.to_string(), date.unwrap_or_default().to_string());
        Ok(self.by_league.get(&key).cloned().unwrap_or_default())
    }

    async fn match_by_external_id(
        &self,
        fixture_id: i32,
    ) -> Result<Option<ProviderMatch>, AppError> {
        if self.by_id_fails {
            return Err(AppError::ProviderError("API error 500: boom".into()));
        }
        Ok(self.by_id.get(&fixture_id).cloned())
    }

    async fn matches_by_date(&self, date: &str) -> Result<Vec<ProviderMatch>, AppError> {
        Ok(self.by_date.get(date).cloned().unwrap_or_default())
    }
}
