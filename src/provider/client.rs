use async_trait::async_trait;
use chrono::{Datelike, Utc};
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

use crate::{
    errors::AppError,
    models::provider::{ProviderCountry, ProviderLeague, ProviderMatch, ProviderTeam, SeasonParam},
    provider::{
        FootballProvider,
        mapping::{
            map_country_row, map_fixture_row, map_league_row, map_team_row, preview,
            response_rows,
        },
    },
};

const DEFAULT_HOST: &str = "api-football-v1.p.rapidapi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone)]
pub struct ApiFootballClient {
    http: reqwest::Client,
    base: String,
    host: String,
    api_key: String,
}

impl ApiFootballClient {
    pub fn new(base_url: &str, api_key: String) -> Result<Self, AppError> {
        let base = normalize_base(base_url);
        let host = Url::parse(&base)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AppError::HttpClientError)?;

        Ok(Self {
            http,
            base,
            host,
            api_key,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// GET `path` and return the `response` rows.
    async fn get_rows(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<Value>, AppError> {
        let url = format!("{}{}", self.base, path);
        let query: Vec<(&str, &str)> = query
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (*k, v.as_str()))
            .collect();

        tracing::debug!("GET {} {:?}", url, query);

        let res = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .header("x-apisports-key", &self.api_key)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::ProviderError(format!("Failed to call {}: {}", path, e)))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| AppError::ProviderError(format!("Failed to read {} body: {}", path, e)))?;

        if status.as_u16() >= 400 {
            return Err(AppError::ProviderError(format!(
                "API error {}: {}",
                status.as_u16(),
                preview(&body)
            )));
        }

        let json: Value = serde_json::from_str(&body).map_err(|e| {
            AppError::Deserialization(format!("Invalid JSON response from {}: {}", path, e))
        })?;

        response_rows(json)
    }
}

/// Trims trailing slashes and makes sure the base ends with `/v3`.
pub fn normalize_base(base_url: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    if base.ends_with("/v3") {
        base.to_string()
    } else {
        format!("{base}/v3")
    }
}

#[async_trait]
impl FootballProvider for ApiFootballClient {
    async fn countries(&self) -> Result<Vec<ProviderCountry>, AppError> {
        let rows = self.get_rows("/countries", &[]).await?;
        Ok(rows.iter().filter_map(map_country_row).collect())
    }

    async fn leagues_by_country(&self, code: &str) -> Result<Vec<ProviderLeague>, AppError> {
        let rows = self
            .get_rows("/leagues", &[("code", code.trim().to_ascii_uppercase())])
            .await?;
        let current_year = Utc::now().year();
        Ok(rows
            .iter()
            .map(|row| map_league_row(row, current_year))
            .collect())
    }

    async fn teams_by_league_season(
        &self,
        league_external_id: i32,
        season: i32,
    ) -> Result<Vec<ProviderTeam>, AppError> {
        let rows = self
            .get_rows(
                "/teams",
                &[
                    ("league", league_external_id.to_string()),
                    ("season", season.to_string()),
                ],
            )
            .await?;
        Ok(rows.iter().map(map_team_row).collect())
    }

    async fn matches_by_league_season(
        &self,
        league_external_id: i32,
        season: SeasonParam,
        date: Option<&str>,
    ) -> Result<Vec<ProviderMatch>, AppError> {
        let rows = self
            .get_rows(
                "/fixtures",
                &[
                    ("league", league_external_id.to_string()),
                    ("season", season.to_string()),
                    ("date", date.unwrap_or_default().to_string()),
                ],
            )
            .await?;
        Ok(rows.iter().map(map_fixture_row).collect())
    }

    async fn match_by_external_id(
        &self,
        fixture_id: i32,
    ) -> Result<Option<ProviderMatch>, AppError> {
        let rows = self
            .get_rows("/fixtures", &[("id", fixture_id.to_string())])
            .await?;
        Ok(rows.first().map(map_fixture_row))
    }

    async fn matches_by_date(&self, date: &str) -> Result<Vec<ProviderMatch>, AppError> {
        let rows = self
            .get_rows("/fixtures", &[("date", date.to_string())])
            .await?;
        Ok(rows.iter().map(map_fixture_row).collect())
    }
}
