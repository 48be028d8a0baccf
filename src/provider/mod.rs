//! Upstream sports-data provider (API-Football v3).

pub mod client;
pub mod mapping;

use async_trait::async_trait;

use crate::{
    errors::AppError,
    models::provider::{ProviderCountry, ProviderLeague, ProviderMatch, ProviderTeam, SeasonParam},
};

pub use client::ApiFootballClient;

#[async_trait]
pub trait FootballProvider: Send + Sync {
    async fn countries(&self) -> Result<Vec<ProviderCountry>, AppError>;

    async fn leagues_by_country(&self, code: &str) -> Result<Vec<ProviderLeague>, AppError>;

    async fn teams_by_league_season(
        &self,
        league_external_id: i32,
        season: i32,
    ) -> Result<Vec<ProviderTeam>, AppError>;

    /// `date` is a UTC `YYYY-MM-DD`.
    async fn matches_by_league_season(
        &self,
        league_external_id: i32,
        season: SeasonParam,
        date: Option<&str>,
    ) -> Result<Vec<ProviderMatch>, AppError>;

    async fn match_by_external_id(&self, fixture_id: i32)
    -> Result<Option<ProviderMatch>, AppError>;

    async fn matches_by_date(&self, date: &str) -> Result<Vec<ProviderMatch>, AppError>;
}
