use chrono::NaiveDate;
use football_data_be::{
    errors::AppError,
    http::query::{
        LIVE_LIMIT_DEFAULT, LIVE_LIMIT_MAX, LeagueRef, MatchQueryParams, clamp_limit,
        parse_day, parse_fixture_date, parse_int, resolve_public_season,
    },
    models::fixture::MatchStatus,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn params() -> MatchQueryParams {
    MatchQueryParams::default()
}

#[test]
fn test_match_query_defaults() {
    let query = params().parse().unwrap();
    assert_eq!(query.league, None);
    assert_eq!(query.season, None);
    assert_eq!(query.date, None);
    assert_eq!(query.status, None);
    assert_eq!(query.limit, 10);
    assert_eq!(query.offset, 0);
}

#[test]
fn test_match_query_limit_and_offset() {
    let mut p = params();
    p.limit = Some("500".into());
    p.offset = Some("-5".into());
    let query = p.parse().unwrap();
    assert_eq!(query.limit, 50);
    assert_eq!(query.offset, 0);

    p.limit = Some("0".into());
    assert_eq!(p.parse().unwrap().limit, 1);

    p.limit = Some("abc".into());
    p.offset = Some("20".into());
    let query = p.parse().unwrap();
    assert_eq!(query.limit, 10);
    assert_eq!(query.offset, 20);
}

#[test]
fn test_match_query_league() {
    let mut p = params();
    p.league = Some("12".into());
    assert_eq!(p.parse().unwrap().league, Some(LeagueRef::Id(12)));

    p.league = Some(" ligue-1 ".into());
    assert_eq!(
        p.parse().unwrap().league,
        Some(LeagueRef::Slug("ligue-1".into()))
    );

    p.league = Some("".into());
    p.league_slug = Some("premier-league".into());
    assert_eq!(
        p.parse().unwrap().league,
        Some(LeagueRef::Slug("premier-league".into()))
    );
}

#[test]
fn test_match_query_date_and_status() {
    let mut p = params();
    p.date = Some("2024-05-10".into());
    p.status = Some("LIVE".into());
    p.season = Some("2023".into());
    let query = p.parse().unwrap();
    assert_eq!(query.date, Some(day(2024, 5, 10)));
    assert_eq!(query.status, Some(MatchStatus::Live));
    assert_eq!(query.season, Some(2023));

    p.date = Some("2024-13-01".into());
    assert!(matches!(p.parse(), Err(AppError::BadRequest(_))));

    p.date = None;
    p.status = Some("postponed".into());
    let err = p.parse().unwrap_err();
    assert!(err.to_string().contains("Allowed: scheduled | live | finished"));
}

#[test]
fn test_parse_day_message() {
    let err = parse_day("10/05/2024").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Bad request: Invalid date. Expected YYYY-MM-DD (UTC)."
    );
}

#[test]
fn test_parse_fixture_date() {
    let today = day(2024, 5, 10);
    assert_eq!(parse_fixture_date(None, today).unwrap(), today);
    assert_eq!(parse_fixture_date(Some(""), today).unwrap(), today);
    assert_eq!(parse_fixture_date(Some("TODAY"), today).unwrap(), today);
    assert_eq!(
        parse_fixture_date(Some("2024-02-29"), today).unwrap(),
        day(2024, 2, 29)
    );
    assert!(parse_fixture_date(Some("2023-02-29"), today).is_err());
}

#[test]
fn test_resolve_public_season() {
    assert_eq!(resolve_public_season(Some(2023), Some(day(2024, 8, 1)), 2026), 2023);
    assert_eq!(resolve_public_season(None, Some(day(2024, 8, 1)), 2026), 2024);
    assert_eq!(resolve_public_season(Some(0), Some(day(2024, 8, 1)), 2026), 2024);
    assert_eq!(resolve_public_season(None, None, 2026), 2026);
}

#[test]
fn test_live_limit() {
    assert_eq!(
        clamp_limit(None, LIVE_LIMIT_DEFAULT, LIVE_LIMIT_MAX),
        LIVE_LIMIT_DEFAULT
    );
    assert_eq!(clamp_limit(Some(1000), LIVE_LIMIT_DEFAULT, LIVE_LIMIT_MAX), 100);
    assert_eq!(clamp_limit(Some(-3), LIVE_LIMIT_DEFAULT, LIVE_LIMIT_MAX), 1);
}

#[test]
fn test_parse_int() {
    assert_eq!(parse_int::<i32>(&Some(" 61 ".into())), Some(61));
    assert_eq!(parse_int::<i32>(&Some("x".into())), None);
    assert_eq!(parse_int::<i32>(&None), None);
}

#[test]
fn test_league_ref_parse() {
    assert_eq!(LeagueRef::parse("  "), None);
    assert_eq!(LeagueRef::parse("-4"), Some(LeagueRef::Id(-4)));
}
