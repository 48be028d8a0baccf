use serde::Serialize;
use sqlx::PgPool;
use std::fmt;

use crate::{
    db::{
        country::{countries_missing_slug, set_country_slug},
        league::{leagues_missing_slug, set_league_slug},
        slug::{SlugTable, slug_source, unique_slug},
        team::{set_team_slug, teams_missing_slug},
    },
    errors::AppError,
};

#[derive(Debug, Default, Clone, Serialize)]
pub struct SlugifySummary {
    pub countries: usize,
    pub leagues: usize,
    pub teams: usize,
}

impl fmt::Display for SlugifySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Slugs filled: countries={}, leagues={}, teams={}",
            self.countries, self.leagues, self.teams
        )
    }
}

/// Gives every country, league and team with an empty slug a unique one.
pub async fn fill_missing_slugs(postgres: PgPool) -> Result<SlugifySummary, AppError> {
    let mut summary = SlugifySummary::default();

    for country in countries_missing_slug(postgres.clone()).await? {
        let source = slug_source(&country.name, || "country".to_string());
        let slug =
            unique_slug(postgres.clone(), SlugTable::Country, &source, Some(country.id)).await?;
        set_country_slug(country.id, &slug, postgres.clone()).await?;
        summary.countries += 1;
    }

    for league in leagues_missing_slug(postgres.clone()).await? {
        let ext = league.external_id;
        let source = slug_source(&league.name, || format!("league-{ext}"));
        let slug =
            unique_slug(postgres.clone(), SlugTable::League, &source, Some(league.id)).await?;
        set_league_slug(league.id, &slug, postgres.clone()).await?;
        summary.leagues += 1;
    }

    for team in teams_missing_slug(postgres.clone()).await? {
        let ext = team.external_id;
        let source = slug_source(&team.name, || match ext {
            Some(ext) => format!("team-{ext}"),
            None => "team".to_string(),
        });
        let slug = unique_slug(postgres.clone(), SlugTable::Team, &source, Some(team.id)).await?;
        set_team_slug(team.id, &slug, postgres.clone()).await?;
        summary.teams += 1;
    }

    tracing::info!("{}", summary);
    Ok(summary)
}
