use chrono::{NaiveDate, TimeZone, Utc};
use football_data_be::{
    jobs::{
        countries::ImportCountriesSummary,
        date_window,
        leagues::ImportLeaguesSummary,
        matches::{ImportMatchesSummary, parse_kickoff},
        parse_date,
        slugify::SlugifySummary,
        smoke::SmokeTestParams,
        sync::{SyncDailySummary, parse_league_ids},
        repair::RepairParams,
    },
    models::fixture::MatchStatus,
};

#[test]
fn test_parse_league_ids() {
    assert_eq!(parse_league_ids("61, 39,,x,-3"), vec![61, 39]);
    assert!(parse_league_ids("").is_empty());
}

#[test]
fn test_date_window() {
    let center = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(
        date_window(center, 2),
        vec!["2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02", "2024-03-03"]
    );
    assert_eq!(date_window(center, 0), vec!["2024-03-01"]);
    assert_eq!(date_window(center, 7).len(), 15);
}

#[test]
fn test_parse_date() {
    assert_eq!(
        parse_date(" 2024-05-10 ").unwrap(),
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    );
    assert!(parse_date("2024-5-32").is_err());
    assert!(parse_date("today").is_err());
}

#[test]
fn test_parse_kickoff_converts_to_utc() {
    assert_eq!(
        parse_kickoff("2024-05-10T21:00:00+02:00"),
        Some(Utc.with_ymd_and_hms(2024, 5, 10, 19, 0, 0).unwrap())
    );
    assert_eq!(parse_kickoff(""), None);
    assert_eq!(parse_kickoff("2024-05-10"), None);
}

#[test]
fn test_status_score_policy() {
    assert!(MatchStatus::Finished.allows_score_write(false));
    assert!(!MatchStatus::Live.allows_score_write(false));
    assert!(MatchStatus::Live.allows_score_write(true));
    assert!(!MatchStatus::Scheduled.allows_score_write(true));
    assert_eq!("Finished".parse::<MatchStatus>().unwrap(), MatchStatus::Finished);
    assert!("ft".parse::<MatchStatus>().is_err());
}

#[test]
fn test_import_summaries_display() {
    let countries = ImportCountriesSummary {
        created: 3,
        updated: 200,
        skipped: 0,
    };
    assert_eq!(countries.to_string(), "Countries: +3 / ~200");

    let leagues = ImportLeaguesSummary {
        country: "FR".into(),
        created: 2,
        updated: 5,
        skipped: 1,
    };
    assert_eq!(leagues.to_string(), "Leagues[FR]: +2 / ~5 (skipped=1)");

    let matches = ImportMatchesSummary {
        league_external_id: 61,
        season: 2024,
        date: Some("2024-05-10".into()),
        created: 1,
        updated: 8,
        patch_finished: true,
        patched: 2,
        ..Default::default()
    };
    assert_eq!(
        matches.to_string(),
        "Matches[league=61, season=2024, date=2024-05-10]: +1 / ~8 (patched=2)"
    );

    let plain = ImportMatchesSummary {
        league_external_id: 61,
        season: 2024,
        ..Default::default()
    };
    assert_eq!(plain.to_string(), "Matches[league=61, season=2024]: +0 / ~0");

    let dropped = ImportMatchesSummary {
        league_external_id: 61,
        season: 2024,
        created: 3,
        skipped: 2,
        ..Default::default()
    };
    assert_eq!(
        dropped.to_string(),
        "Matches[league=61, season=2024]: +3 / ~0 (skipped=2)"
    );
}

#[test]
fn test_sync_summary() {
    let summary = SyncDailySummary {
        date: "2024-05-10".into(),
        selected: 3,
        ok: 2,
        failed: 1,
        dry_run: false,
    };
    assert!(!summary.is_success());
    assert_eq!(
        summary.to_string(),
        "Daily sync 2024-05-10: 3 leagues, OK=2, FAIL=1"
    );

    let dry = SyncDailySummary {
        selected: 2,
        ok: 2,
        dry_run: true,
        ..summary
    };
    assert!(dry.is_success());
    assert!(dry.to_string().ends_with("(dry run)"));
}

#[test]
fn test_slugify_summary_display() {
    let summary = SlugifySummary {
        countries: 1,
        leagues: 0,
        teams: 12,
    };
    assert_eq!(
        summary.to_string(),
        "Slugs filled: countries=1, leagues=0, teams=12"
    );
}

#[test]
fn test_job_defaults() {
    let repair = RepairParams::default();
    assert_eq!(repair.days, 180);
    assert!(!repair.dry_run);
    assert_eq!(repair.limit, None);

    let smoke = SmokeTestParams::default();
    assert_eq!(smoke.country, "FR");
    assert_eq!(smoke.league, None);
}
