mod common;

use common::{FakeProvider, provider_match};
use football_data_be::{
    jobs::{
        matches::{merge_patched, needs_patch, patch_finished_scores, score_policy, to_upsert},
        smoke::{SmokeTestParams, smoke_test_provider},
    },
    models::{
        fixture::MatchStatus,
        provider::{ProviderCountry, ProviderLeague, ProviderTeam},
    },
};

#[test]
fn test_score_policy_finished_writes_scores() {
    let row = provider_match(1, MatchStatus::Finished, Some(2), Some(1));
    assert_eq!(score_policy(&row, false), (Some(2), Some(1)));
    assert_eq!(score_policy(&row, true), (Some(2), Some(1)));
}

#[test]
fn test_score_policy_live_needs_flag() {
    let row = provider_match(1, MatchStatus::Live, Some(1), Some(0));
    assert_eq!(score_policy(&row, false), (None, None));
    assert_eq!(score_policy(&row, true), (Some(1), Some(0)));
}

#[test]
fn test_score_policy_scheduled_never_writes() {
    let row = provider_match(1, MatchStatus::Scheduled, Some(0), Some(0));
    assert_eq!(score_policy(&row, false), (None, None));
    assert_eq!(score_policy(&row, true), (None, None));
}

#[test]
fn test_needs_patch() {
    let missing = provider_match(1, MatchStatus::Finished, Some(1), None);
    assert!(needs_patch(&missing, true));
    assert!(!needs_patch(&missing, false));

    let complete = provider_match(1, MatchStatus::Finished, Some(1), Some(1));
    assert!(!needs_patch(&complete, true));

    let live = provider_match(1, MatchStatus::Live, None, None);
    assert!(!needs_patch(&live, true));
}

#[test]
fn test_merge_patched_fills_missing_sides_only() {
    let mut row = provider_match(1, MatchStatus::Finished, Some(3), None);
    let fetched = provider_match(1, MatchStatus::Finished, Some(0), Some(2));
    merge_patched(&mut row, &fetched);
    assert_eq!(row.home.goals, Some(3));
    assert_eq!(row.away.goals, Some(2));

    let mut row = provider_match(1, MatchStatus::Finished, None, None);
    let fetched = provider_match(1, MatchStatus::Finished, Some(1), None);
    merge_patched(&mut row, &fetched);
    assert_eq!(row.home.goals, Some(1));
    assert_eq!(row.away.goals, None);
}

#[tokio::test]
async fn test_patch_finished_scores_found() {
    let mut provider = FakeProvider::default();
    provider
        .by_id
        .insert(42, provider_match(42, MatchStatus::Finished, Some(2), Some(2)));

    let mut row = provider_match(42, MatchStatus::Finished, None, Some(2));
    assert!(patch_finished_scores(&mut row, &provider).await);
    assert_eq!(row.home.goals, Some(2));
    assert_eq!(row.away.goals, Some(2));
}

#[tokio::test]
async fn test_patch_finished_scores_missing_or_failing() {
    let provider = FakeProvider::default();
    let mut row = provider_match(42, MatchStatus::Finished, None, None);
    assert!(!patch_finished_scores(&mut row, &provider).await);
    assert_eq!(row.home.goals, None);

    let failing = FakeProvider {
        by_id_fails: true,
        ..Default::default()
    };
    assert!(!patch_finished_scores(&mut row, &failing).await);
    assert_eq!(row.away.goals, None);
}

#[test]
fn test_to_upsert_live_row() {
    let mut row = provider_match(7, MatchStatus::Live, Some(1), Some(1));
    row.minute = Some(67);
    row.round = Some("Regular Season - 34".into());

    let hidden = to_upsert(&row, 3, 2024, 10, 11, false);
    assert_eq!(hidden.minute, Some(67));
    assert_eq!(hidden.home_score, None);
    assert_eq!(hidden.away_score, None);

    let shown = to_upsert(&row, 3, 2024, 10, 11, true);
    assert_eq!(shown.home_score, Some(1));
    assert_eq!(shown.away_score, Some(1));
    assert_eq!(shown.external_id, 7);
    assert_eq!(shown.league_id, 3);
    assert_eq!(shown.home_team_id, 10);
    assert_eq!(shown.away_team_id, 11);
    assert_eq!(shown.round.as_deref(), Some("Regular Season - 34"));
    assert!(shown.date_utc.is_some());
}

#[test]
fn test_to_upsert_drops_minute_unless_live() {
    let mut row = provider_match(7, MatchStatus::Finished, Some(2), Some(0));
    row.minute = Some(90);
    row.date_utc = "not a date".into();

    let fixture = to_upsert(&row, 3, 2024, 10, 11, false);
    assert_eq!(fixture.minute, None);
    assert_eq!(fixture.status, MatchStatus::Finished);
    assert_eq!(fixture.home_score, Some(2));
    assert_eq!(fixture.away_score, Some(0));
    assert!(fixture.date_utc.is_none());
}

fn country(code: &str) -> ProviderCountry {
    ProviderCountry {
        code: code.into(),
        name: format!("Country {}", code),
        flag: None,
    }
}

fn league(external_id: i32) -> ProviderLeague {
    ProviderLeague {
        external_id,
        name: format!("League {}", external_id),
        kind: "League".into(),
        logo: None,
        season: 2024,
        country_code: Some("FR".into()),
    }
}

fn team(external_id: i32) -> ProviderTeam {
    ProviderTeam {
        external_id,
        name: format!("Team {}", external_id),
        short_name: None,
        logo: None,
        country: Some("France".into()),
    }
}

#[tokio::test]
async fn test_smoke_test_provider_all_sections() {
    let mut provider = FakeProvider {
        countries: ["FR", "DE", "ES", "IT", "PT", "NL", "BE"]
            .into_iter()
            .map(country)
            .collect(),
        leagues: vec![league(61), league(62)],
        teams: (1..=3).map(team).collect(),
        ..Default::default()
    };
    provider.by_league.insert(
        ("2024".into(), String::new()),
        (1..=6)
            .map(|id| provider_match(id, MatchStatus::Finished, Some(1), Some(0)))
            .collect(),
    );

    let params = SmokeTestParams {
        season: Some(2024),
        ..Default::default()
    };
    let sections = smoke_test_provider(&params, &provider).await.unwrap();

    assert_eq!(sections.len(), 4);
    assert_eq!(sections[0].label, "1) Countries");
    assert_eq!(sections[0].count, 7);
    assert_eq!(sections[0].sample.as_array().unwrap().len(), 5);
    assert_eq!(sections[1].label, "2) Leagues for country FR");
    assert_eq!(sections[1].count, 2);
    assert_eq!(sections[1].sample.as_array().unwrap().len(), 2);
    assert_eq!(sections[2].label, "3) Teams for league=61, season=2024");
    assert_eq!(sections[2].count, 3);
    assert_eq!(sections[3].label, "4) Matches for league=61, season=2024");
    assert_eq!(sections[3].count, 6);
    assert_eq!(sections[3].sample.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_smoke_test_provider_stops_without_league() {
    let provider = FakeProvider {
        countries: vec![country("FR")],
        ..Default::default()
    };

    let sections = smoke_test_provider(&SmokeTestParams::default(), &provider)
        .await
        .unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1].count, 0);
    assert!(sections[1].to_string().ends_with("Nothing to show."));
}

#[tokio::test]
async fn test_smoke_test_provider_explicit_league() {
    let provider = FakeProvider::default();
    let params = SmokeTestParams {
        country: "de".into(),
        league: Some(78),
        season: Some(2023),
        date: Some("2023-09-02".into()),
    };

    let sections = smoke_test_provider(&params, &provider).await.unwrap();
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[1].label, "2) Leagues for country DE");
    assert_eq!(
        sections[3].label,
        "4) Matches for league=78, season=2023, date=2023-09-02"
    );
}

#[tokio::test]
async fn test_smoke_test_provider_rejects_bad_country() {
    let params = SmokeTestParams {
        country: "FRA".into(),
        ..Default::default()
    };
    assert!(smoke_test_provider(&params, &FakeProvider::default()).await.is_err());
}
