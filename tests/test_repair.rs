mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::{FakeProvider, provider_match};
use football_data_be::{
    jobs::repair::{RepairAction, RepairSummary, RepairTarget, find_payload, nearest_by_teams, plan_repair},
    models::fixture::MatchStatus,
};

fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 19, 0, 0).unwrap()
}

fn target(external_id: i32) -> RepairTarget {
    RepairTarget {
        external_id,
        league_external_id: 61,
        season: 2024,
        kickoff: kickoff(),
        home_external_id: Some(85),
        away_external_id: Some(79),
    }
}

#[test]
fn test_plan_repair_writes_finished_scores() {
    let payload = provider_match(1, MatchStatus::Finished, Some(2), Some(1));
    let action = plan_repair(MatchStatus::Scheduled, None, None, &payload, false);
    assert_eq!(
        action,
        RepairAction::Update {
            status: Some(MatchStatus::Finished),
            home: Some(2),
            away: Some(1),
        }
    );
    assert!(action.changes());
}

#[test]
fn test_plan_repair_only_changed_scores() {
    let payload = provider_match(1, MatchStatus::Finished, Some(0), Some(1));
    let action = plan_repair(MatchStatus::Finished, Some(0), Some(0), &payload, false);
    assert_eq!(
        action,
        RepairAction::Update {
            status: None,
            home: None,
            away: Some(1),
        }
    );
}

#[test]
fn test_plan_repair_no_change() {
    let payload = provider_match(1, MatchStatus::Finished, Some(2), Some(1));
    let action = plan_repair(MatchStatus::Finished, Some(2), Some(1), &payload, false);
    assert_eq!(action, RepairAction::NoChange);
    assert!(!action.changes());
}

#[test]
fn test_plan_repair_live_needs_flag() {
    let payload = provider_match(1, MatchStatus::Live, Some(1), Some(0));

    let action = plan_repair(MatchStatus::Scheduled, None, None, &payload, false);
    assert_eq!(
        action,
        RepairAction::NotAllowed {
            status: Some(MatchStatus::Live)
        }
    );
    assert!(action.changes());

    let action = plan_repair(MatchStatus::Live, None, None, &payload, true);
    assert_eq!(
        action,
        RepairAction::Update {
            status: None,
            home: Some(1),
            away: Some(0),
        }
    );
}

#[test]
fn test_plan_repair_scheduled_is_not_allowed() {
    let payload = provider_match(1, MatchStatus::Scheduled, None, None);
    let action = plan_repair(MatchStatus::Scheduled, None, None, &payload, true);
    assert_eq!(action, RepairAction::NotAllowed { status: None });
    assert!(!action.changes());
}

#[test]
fn test_plan_repair_finished_missing_score() {
    let payload = provider_match(1, MatchStatus::Finished, Some(1), None);

    let action = plan_repair(MatchStatus::Live, Some(1), Some(0), &payload, false);
    assert_eq!(
        action,
        RepairAction::MissingScores {
            status: Some(MatchStatus::Finished)
        }
    );

    let action = plan_repair(MatchStatus::Finished, None, None, &payload, false);
    assert_eq!(action, RepairAction::MissingScores { status: None });
}

#[test]
fn test_nearest_by_teams() {
    let mut early = provider_match(10, MatchStatus::Finished, Some(1), Some(1));
    early.date_utc = "2024-05-08T19:00:00+00:00".into();
    let mut close = provider_match(11, MatchStatus::Finished, Some(3), Some(0));
    close.date_utc = "2024-05-10T21:00:00+02:00".into();
    let mut other_teams = provider_match(12, MatchStatus::Finished, Some(0), Some(0));
    other_teams.date_utc = "2024-05-10T19:00:00+00:00".into();
    other_teams.away.id = 1;
    let mut no_date = provider_match(13, MatchStatus::Finished, Some(0), Some(0));
    no_date.date_utc = String::new();

    let list = vec![early, close, other_teams, no_date];
    let found = nearest_by_teams(&list, 85, 79, kickoff()).unwrap();
    assert_eq!(found.external_id, 11);

    assert!(nearest_by_teams(&list, 79, 85, kickoff()).is_none());
}

#[tokio::test]
async fn test_find_payload_direct_lookup() {
    let mut provider = FakeProvider::default();
    provider
        .by_id
        .insert(500, provider_match(500, MatchStatus::Finished, Some(2), Some(2)));

    let found = find_payload(&provider, &target(500)).await.unwrap();
    assert_eq!(found.external_id, 500);
}

#[tokio::test]
async fn test_find_payload_split_season_after_lookup_error() {
    let mut provider = FakeProvider {
        by_id_fails: true,
        ..Default::default()
    };
    provider.by_league.insert(
        ("2024-2025".into(), "2024-05-12".into()),
        vec![
            provider_match(499, MatchStatus::Finished, Some(0), Some(0)),
            provider_match(500, MatchStatus::Finished, Some(1), Some(0)),
        ],
    );

    let found = find_payload(&provider, &target(500)).await.unwrap();
    assert_eq!(found.external_id, 500);
    assert_eq!(found.home.goals, Some(1));
}

#[tokio::test]
async fn test_find_payload_by_date_list() {
    let mut provider = FakeProvider::default();
    provider.by_date.insert(
        "2024-05-04".into(),
        vec![provider_match(500, MatchStatus::Finished, Some(4), Some(4))],
    );

    let found = find_payload(&provider, &target(500)).await.unwrap();
    assert_eq!(found.home.goals, Some(4));
}

#[tokio::test]
async fn test_find_payload_falls_back_to_teams() {
    let mut provider = FakeProvider::default();
    let mut renumbered = provider_match(9000, MatchStatus::Finished, Some(1), Some(2));
    renumbered.date_utc = "2024-05-11T19:00:00+00:00".into();
    provider
        .by_date
        .insert("2024-05-11".into(), vec![renumbered]);

    let found = find_payload(&provider, &target(500)).await.unwrap();
    assert_eq!(found.external_id, 9000);

    let mut unknown_teams = target(500);
    unknown_teams.home_external_id = None;
    assert!(find_payload(&provider, &unknown_teams).await.is_none());
}

#[tokio::test]
async fn test_find_payload_outside_window() {
    let mut provider = FakeProvider::default();
    provider.by_date.insert(
        "2024-05-30".into(),
        vec![provider_match(500, MatchStatus::Finished, Some(1), Some(0))],
    );

    assert!(find_payload(&provider, &target(500)).await.is_none());
}

#[test]
fn test_repair_summary_display() {
    let summary = RepairSummary {
        processed: 12,
        updated: 3,
        no_change: 7,
        no_external_id: 0,
        no_payload: 1,
        no_scores: 1,
        not_allowed: 0,
    };
    let text = summary.to_string();
    assert!(text.starts_with("Processed:    12\n"));
    assert!(text.contains("Updated:      3"));
    assert!(text.ends_with("Not allowed:  0"));
    assert_eq!(text.lines().count(), 7);
}
