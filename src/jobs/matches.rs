use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use std::{collections::HashMap, fmt};

use crate::{
    db::{
        fixture::upsert_fixture,
        league::find_league_by_external_id,
        team::{find_team_by_external_id, insert_team},
    },
    errors::AppError,
    jobs::{current_year, ensure_fallback_country, parse_date},
    models::{
        fixture::{FixtureUpsert, MatchStatus},
        provider::{ProviderMatch, ProviderSide, SeasonParam},
    },
    provider::FootballProvider,
};

#[derive(Debug, Clone, Default)]
pub struct ImportMatchesParams {
    pub league_external_id: i32,
    /// Defaults to the current UTC year.
    pub season: Option<i32>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    pub include_live: bool,
    pub patch_finished: bool,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportMatchesSummary {
    pub league_external_id: i32,
    pub season: i32,
    pub date: Option<String>,
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub patched: usize,
    pub patch_finished: bool,
}

impl fmt::Display for ImportMatchesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matches[league={}, season={}",
            self.league_external_id, self.season
        )?;
        if let Some(date) = &self.date {
            write!(f, ", date={}", date)?;
        }
        write!(f, "]: +{} / ~{}", self.created, self.updated)?;
        if self.patch_finished {
            write!(f, " (patched={})", self.patched)?;
        }
        if self.skipped > 0 {
            write!(f, " (skipped={})", self.skipped)?;
        }
        Ok(())
    }
}

pub async fn import_matches(
    params: &ImportMatchesParams,
    postgres: PgPool,
    provider: &dyn FootballProvider,
) -> Result<ImportMatchesSummary, AppError> {
    let league_ext = params.league_external_id;
    if league_ext <= 0 {
        return Err(AppError::BadRequest(
            "--league=<externalId> is required".into(),
        ));
    }
    if let Some(date) = &params.date {
        parse_date(date)?;
    }
    let season = params.season.unwrap_or_else(current_year);

    let league = find_league_by_external_id(league_ext, postgres.clone())
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "League {} not found locally. Run `import leagues` first.",
                league_ext
            ))
        })?;

    let fallback_country = ensure_fallback_country(postgres.clone()).await?;

    let rows = provider
        .matches_by_league_season(league_ext, SeasonParam::Year(season), params.date.as_deref())
        .await?;
    tracing::info!(
        "Provider returned {} matches for league {} season {}",
        rows.len(),
        league_ext,
        season
    );

    let mut teams = TeamResolver::new(fallback_country.id);
    let mut summary = ImportMatchesSummary {
        league_external_id: league_ext,
        season,
        date: params.date.clone(),
        patch_finished: params.patch_finished,
        ..Default::default()
    };

    for mut row in rows {
        if row.external_id <= 0 {
            continue;
        }

        let home = teams.resolve(&row.home, postgres.clone()).await?;
        let away = teams.resolve(&row.away, postgres.clone()).await?;
        let (Some(home_team_id), Some(away_team_id)) = (home, away) else {
            tracing::warn!("Skipping match {}: a team has neither id nor name", row.external_id);
            summary.skipped += 1;
            continue;
        };

        if needs_patch(&row, params.patch_finished)
            && patch_finished_scores(&mut row, provider).await
        {
            summary.patched += 1;
        }

        let fixture = to_upsert(
            &row,
            league.id,
            season,
            home_team_id,
            away_team_id,
            params.include_live,
        );

        if upsert_fixture(&fixture, postgres.clone()).await? {
            summary.created += 1;
        } else {
            summary.updated += 1;
        }
    }

    tracing::info!("{}", summary);
    Ok(summary)
}

/// Scores to store for a provider row. No fake 0-0: both sides stay NULL unless the
/// match is finished, or live and `include_live` is set.
pub fn score_policy(row: &ProviderMatch, include_live: bool) -> (Option<i16>, Option<i16>) {
    if row.status.allows_score_write(include_live) {
        (row.home.goals, row.away.goals)
    } else {
        (None, None)
    }
}

/// A finished row with a missing side is refetched under `--patch-finished`.
pub fn needs_patch(row: &ProviderMatch, patch_finished: bool) -> bool {
    patch_finished && row.status == MatchStatus::Finished && !row.has_both_goals()
}

/// Fills only the sides the listing left empty.
pub fn merge_patched(row: &mut ProviderMatch, fetched: &ProviderMatch) {
    if row.home.goals.is_none() {
        row.home.goals = fetched.home.goals;
    }
    if row.away.goals.is_none() {
        row.away.goals = fetched.away.goals;
    }
}

/// Refetches one fixture by id and merges its scores. Returns whether a payload came back.
pub async fn patch_finished_scores(
    row: &mut ProviderMatch,
    provider: &dyn FootballProvider,
) -> bool {
    match provider.match_by_external_id(row.external_id).await {
        Ok(Some(fetched)) => {
            merge_patched(row, &fetched);
            true
        }
        Ok(None) => false,
        Err(e) => {
            tracing::debug!("Patch lookup for {} failed: {}", row.external_id, e);
            false
        }
    }
}

/// `minute` is kept for live rows only.
pub fn to_upsert(
    row: &ProviderMatch,
    league_id: i32,
    season: i32,
    home_team_id: i32,
    away_team_id: i32,
    include_live: bool,
) -> FixtureUpsert {
    let (home_score, away_score) = score_policy(row, include_live);
    FixtureUpsert {
        external_id: row.external_id,
        league_id,
        season,
        round: row.round.clone(),
        stage: row.stage.clone(),
        venue: row.venue.clone(),
        date_utc: parse_kickoff(&row.date_utc),
        status: row.status,
        home_team_id,
        away_team_id,
        home_score,
        away_score,
        minute: row.minute.filter(|_| row.status == MatchStatus::Live),
    }
}

/// RFC 3339 kickoff converted to UTC; `None` when absent or unparsable.
pub fn parse_kickoff(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Maps provider team ids to stored teams for one run, creating missing teams.
struct TeamResolver {
    fallback_country_id: i32,
    by_external_id: HashMap<i32, i32>,
}

impl TeamResolver {
    fn new(fallback_country_id: i32) -> Self {
        Self {
            fallback_country_id,
            by_external_id: HashMap::new(),
        }
    }

    async fn resolve(
        &mut self,
        side: &ProviderSide,
        postgres: PgPool,
    ) -> Result<Option<i32>, AppError> {
        let name = side.name.trim();
        if side.id <= 0 && name.is_empty() {
            return Ok(None);
        }

        if side.id > 0 {
            if let Some(id) = self.by_external_id.get(&side.id) {
                return Ok(Some(*id));
            }
            if let Some(team) = find_team_by_external_id(side.id, postgres.clone()).await? {
                self.by_external_id.insert(side.id, team.id);
                return Ok(Some(team.id));
            }
        }

        let name = if name.is_empty() {
            format!("Team {}", side.id)
        } else {
            name.to_string()
        };
        let external_id = (side.id > 0).then_some(side.id);
        let team = insert_team(
            external_id,
            &name,
            None,
            side.logo.as_deref(),
            self.fallback_country_id,
            postgres,
        )
        .await?;
        tracing::info!("Created team {} ({})", team.name, team.slug);

        if let Some(ext) = external_id {
            self.by_external_id.insert(ext, team.id);
        }
        Ok(Some(team.id))
    }
}
