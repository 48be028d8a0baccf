use chrono::{DateTime, Days, Utc};
use serde::Serialize;
use sqlx::PgPool;
use std::fmt;

use crate::{
    db::fixture::{
        RepairScan, list_repair_candidates, update_fixture_result, update_fixture_status,
    },
    errors::AppError,
    jobs::{date_window, matches::parse_kickoff},
    models::{
        fixture::{FixtureView, MatchStatus},
        provider::{ProviderMatch, SeasonParam},
    },
    provider::FootballProvider,
};

const FALLBACK_RADIUS_DAYS: u64 = 7;

#[derive(Debug, Clone)]
pub struct RepairParams {
    pub days: u64,
    /// Internal league id.
    pub league_id: Option<i32>,
    pub only_missing: bool,
    pub include_live: bool,
    pub limit: Option<i64>,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for RepairParams {
    fn default() -> Self {
        Self {
            days: 180,
            league_id: None,
            only_missing: false,
            include_live: false,
            limit: None,
            dry_run: false,
            verbose: false,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RepairSummary {
    pub processed: usize,
    pub updated: usize,
    pub no_change: usize,
    pub no_external_id: usize,
    pub no_payload: usize,
    pub no_scores: usize,
    pub not_allowed: usize,
}

impl fmt::Display for RepairSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processed:    {}", self.processed)?;
        writeln!(f, "Updated:      {}", self.updated)?;
        writeln!(f, "No change:    {}", self.no_change)?;
        writeln!(f, "No extId:     {}", self.no_external_id)?;
        writeln!(f, "No payload:   {}", self.no_payload)?;
        writeln!(f, "No FT scores: {}", self.no_scores)?;
        write!(f, "Not allowed:  {}", self.not_allowed)
    }
}

/// Outcome for one stored fixture once the provider payload is known.
///
/// `status` is `Some` only when it differs from the stored one; scores are `Some`
/// only when the payload has a value that differs from the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairAction {
    /// Not finished, or live without `include_live`.
    NotAllowed { status: Option<MatchStatus> },
    /// Finished but the payload lacks a side's score.
    MissingScores { status: Option<MatchStatus> },
    Update {
        status: Option<MatchStatus>,
        home: Option<i16>,
        away: Option<i16>,
    },
    NoChange,
}

impl RepairAction {
    /// Whether applying the action writes anything.
    pub fn changes(&self) -> bool {
        match self {
            RepairAction::NotAllowed { status } | RepairAction::MissingScores { status } => {
                status.is_some()
            }
            RepairAction::Update { .. } => true,
            RepairAction::NoChange => false,
        }
    }
}

pub fn plan_repair(
    current_status: MatchStatus,
    current_home: Option<i16>,
    current_away: Option<i16>,
    payload: &ProviderMatch,
    include_live: bool,
) -> RepairAction {
    let new_status = payload.status;
    let status = (new_status != current_status).then_some(new_status);

    if !new_status.allows_score_write(include_live) {
        return RepairAction::NotAllowed { status };
    }

    if new_status == MatchStatus::Finished && !payload.has_both_goals() {
        return RepairAction::MissingScores { status };
    }

    let home = payload.home.goals.filter(|g| Some(*g) != current_home);
    let away = payload.away.goals.filter(|g| Some(*g) != current_away);

    if status.is_none() && home.is_none() && away.is_none() {
        RepairAction::NoChange
    } else {
        RepairAction::Update { status, home, away }
    }
}

/// What the lookup chain needs to know about a stored fixture.
#[derive(Debug, Clone)]
pub struct RepairTarget {
    pub external_id: i32,
    pub league_external_id: i32,
    pub season: i32,
    pub kickoff: DateTime<Utc>,
    pub home_external_id: Option<i32>,
    pub away_external_id: Option<i32>,
}

impl From<&FixtureView> for RepairTarget {
    fn from(view: &FixtureView) -> Self {
        Self {
            external_id: view.external_id,
            league_external_id: view.league_external_id,
            season: view.season,
            kickoff: view.date_utc,
            home_external_id: view.home_external_id,
            away_external_id: view.away_external_id,
        }
    }
}

/// Provider payload for `target`, trying in order: the fixture id, the league's
/// season (`YYYY` then `YYYY-YYYY+1`) day by day over a ±7 day window, the by-date
/// lists over the same window, then the same lists matched on both team ids with
/// the nearest kickoff. Provider errors only skip the failing step.
pub async fn find_payload(
    provider: &dyn FootballProvider,
    target: &RepairTarget,
) -> Option<ProviderMatch> {
    match provider.match_by_external_id(target.external_id).await {
        Ok(Some(found)) => return Some(found),
        Ok(None) => {}
        Err(e) => tracing::debug!("Lookup of fixture {} failed: {}", target.external_id, e),
    }

    let days = date_window(target.kickoff.date_naive(), FALLBACK_RADIUS_DAYS);

    if target.league_external_id > 0 {
        for season in [SeasonParam::Year(target.season), SeasonParam::Span(target.season)] {
            for day in &days {
                let Ok(list) = provider
                    .matches_by_league_season(target.league_external_id, season, Some(day))
                    .await
                else {
                    continue;
                };
                if let Some(found) = list.into_iter().find(|m| m.external_id == target.external_id)
                {
                    return Some(found);
                }
            }
        }
    }

    let mut by_date: Vec<ProviderMatch> = Vec::new();
    for day in &days {
        if let Ok(list) = provider.matches_by_date(day).await {
            by_date.extend(list);
        }
    }

    if let Some(index) = by_date
        .iter()
        .position(|m| m.external_id == target.external_id)
    {
        return Some(by_date.swap_remove(index));
    }

    match (target.home_external_id, target.away_external_id) {
        (Some(home), Some(away)) if home > 0 && away > 0 => {
            nearest_by_teams(&by_date, home, away, target.kickoff).cloned()
        }
        _ => None,
    }
}

/// Row with the same home and away team ids whose kickoff is closest to `target`.
pub fn nearest_by_teams(
    list: &[ProviderMatch],
    home_external_id: i32,
    away_external_id: i32,
    target: DateTime<Utc>,
) -> Option<&ProviderMatch> {
    list.iter()
        .filter(|m| m.home.id == home_external_id && m.away.id == away_external_id)
        .filter_map(|m| {
            parse_kickoff(&m.date_utc).map(|k| ((k - target).num_seconds().abs(), m))
        })
        .min_by_key(|(diff, _)| *diff)
        .map(|(_, m)| m)
}

pub async fn repair_match_scores(
    params: &RepairParams,
    postgres: PgPool,
    provider: &dyn FootballProvider,
) -> Result<RepairSummary, AppError> {
    let today = Utc::now().date_naive();
    let start = today
        .checked_sub_days(Days::new(params.days))
        .unwrap_or(today);
    let end = today.checked_add_days(Days::new(1)).unwrap_or(today);

    let scan = RepairScan {
        start: start.and_time(chrono::NaiveTime::MIN).and_utc(),
        end: end.and_time(chrono::NaiveTime::MIN).and_utc(),
        league_id: params.league_id,
        only_missing: params.only_missing,
        limit: params.limit.filter(|l| *l > 0),
    };

    let rows = list_repair_candidates(&scan, postgres.clone()).await?;
    let mut summary = RepairSummary::default();

    if rows.is_empty() {
        tracing::info!("No matches found for the given window/filters");
        return Ok(summary);
    }

    tracing::info!(
        "Scanning {} rows (days={}, league={}, only-missing={}, include-live={}, dry-run={})",
        rows.len(),
        params.days,
        params
            .league_id
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".into()),
        params.only_missing,
        params.include_live,
        params.dry_run
    );

    for row in rows {
        summary.processed += 1;
        let tag = format!("[{}:{}]", row.id, row.external_id);

        if row.external_id <= 0 {
            summary.no_external_id += 1;
            if params.verbose {
                tracing::info!("{} SKIP no externalId", tag);
            }
            continue;
        }

        let Some(payload) = find_payload(provider, &RepairTarget::from(&row)).await else {
            summary.no_payload += 1;
            if params.verbose {
                tracing::info!("{} SKIP no payload from provider", tag);
            }
            continue;
        };

        let action = plan_repair(
            row.status,
            row.home_score,
            row.away_score,
            &payload,
            params.include_live,
        );

        match &action {
            RepairAction::NotAllowed { .. } => summary.not_allowed += 1,
            RepairAction::MissingScores { .. } => summary.no_scores += 1,
            RepairAction::NoChange => summary.no_change += 1,
            RepairAction::Update { .. } => {}
        }
        if action.changes() {
            summary.updated += 1;
        }

        if params.verbose {
            tracing::info!("{} {:?}", tag, action);
        }

        if !params.dry_run {
            apply(row.id, row.status, &action, postgres.clone()).await?;
        }
    }

    tracing::info!("Repair finished: {:?}", summary);
    Ok(summary)
}

async fn apply(
    id: i32,
    current_status: MatchStatus,
    action: &RepairAction,
    postgres: PgPool,
) -> Result<(), AppError> {
    match *action {
        RepairAction::NotAllowed {
            status: Some(status),
        }
        | RepairAction::MissingScores {
            status: Some(status),
        } => update_fixture_status(id, status, postgres).await,
        RepairAction::Update { status, home, away } => {
            let status = status.unwrap_or(current_status);
            update_fixture_result(id, status, home, away, postgres).await
        }
        _ => Ok(()),
    }
}
