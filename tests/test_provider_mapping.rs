use football_data_be::{
    models::{
        fixture::MatchStatus,
        provider::{CompactFixture, SeasonParam},
    },
    provider::{
        client::normalize_base,
        mapping::{
            extract_scores, map_country_row, map_fixture_row, map_league_row, map_status,
            map_team_row, response_rows,
        },
    },
};
use serde_json::json;

#[test]
fn test_map_status() {
    for short in ["FT", "AET", "PEN", "ft"] {
        assert_eq!(map_status(Some(short), None), MatchStatus::Finished);
    }
    for short in ["NS", "PST", "TBD", "CANC"] {
        assert_eq!(map_status(Some(short), None), MatchStatus::Scheduled);
    }
    for short in ["1H", "2H", "HT", "ET", "P", "BT", "LIVE"] {
        assert_eq!(map_status(Some(short), None), MatchStatus::Live);
    }
    assert_eq!(map_status(Some("INT"), Some("Match Live")), MatchStatus::Live);
    assert_eq!(map_status(Some("SUSP"), Some("Suspended")), MatchStatus::Scheduled);
    assert_eq!(map_status(None, None), MatchStatus::Scheduled);
}

#[test]
fn test_extract_scores_null_is_unknown() {
    let row = json!({ "goals": { "home": null, "away": null } });
    assert_eq!(extract_scores(&row), (None, None));

    let row = json!({ "goals": { "home": 0, "away": 0 } });
    assert_eq!(extract_scores(&row), (Some(0), Some(0)));
}

#[test]
fn test_extract_scores_fallback_paths() {
    let row = json!({
        "goals": { "home": null, "away": null },
        "score": { "fulltime": { "home": 2, "away": 1 } }
    });
    assert_eq!(extract_scores(&row), (Some(2), Some(1)));

    let row = json!({ "home_score": "3", "away_score": "0" });
    assert_eq!(extract_scores(&row), (Some(3), Some(0)));

    let row = json!({ "goals": { "home": 1, "away": null } });
    assert_eq!(extract_scores(&row), (Some(1), None));
}

#[test]
fn test_map_fixture_row() {
    let row = json!({
        "fixture": {
            "id": 1035,
            "date": "2024-05-10T19:00:00+00:00",
            "venue": { "name": "Parc des Princes" },
            "status": { "short": "2H", "long": "Second Half", "elapsed": 67 }
        },
        "league": { "id": 61, "name": "Ligue 1", "round": "Regular Season - 33" },
        "teams": {
            "home": { "id": 85, "name": "Paris Saint Germain", "logo": "https://img/85.png" },
            "away": { "id": 79, "name": "Lille", "logo": "" }
        },
        "goals": { "home": 2, "away": 1 }
    });

    let m = map_fixture_row(&row);
    assert_eq!(m.external_id, 1035);
    assert_eq!(m.status, MatchStatus::Live);
    assert_eq!(m.minute, Some(67));
    assert_eq!(m.league_external_id, 61);
    assert_eq!(m.league_name.as_deref(), Some("Ligue 1"));
    assert_eq!(m.stage.as_deref(), Some("Regular Season - 33"));
    assert_eq!(m.venue.as_deref(), Some("Parc des Princes"));
    assert_eq!(m.home.id, 85);
    assert_eq!(m.home.goals, Some(2));
    assert_eq!(m.away.logo, None);
    assert!(m.has_both_goals());

    let compact = CompactFixture::from(m);
    assert_eq!(compact.id, 1035);
    assert_eq!(compact.kickoff, "2024-05-10T19:00:00+00:00");
}

#[test]
fn test_map_fixture_row_missing_fields() {
    let m = map_fixture_row(&json!({}));
    assert_eq!(m.external_id, 0);
    assert_eq!(m.status, MatchStatus::Scheduled);
    assert_eq!(m.home.name, "");
    assert!(!m.has_both_goals());
}

#[test]
fn test_response_rows() {
    let rows = response_rows(json!({ "response": [{ "a": 1 }, { "a": 2 }] })).unwrap();
    assert_eq!(rows.len(), 2);

    assert!(response_rows(json!({ "errors": { "token": "bad" } })).is_err());
    assert!(response_rows(json!({ "response": "nope" })).is_err());
    assert!(response_rows(json!([1, 2])).is_err());
}

#[test]
fn test_map_country_row() {
    let c = map_country_row(&json!({ "code": "FR", "name": "France", "flag": "f.svg" })).unwrap();
    assert_eq!(c.code, "FR");
    assert_eq!(c.flag.as_deref(), Some("f.svg"));

    let world = map_country_row(&json!({ "code": null, "name": "World" })).unwrap();
    assert_eq!(world.code, "");

    assert!(map_country_row(&json!({ "code": "", "name": " " })).is_none());
}

#[test]
fn test_map_league_row_latest_season() {
    let row = json!({
        "league": { "id": 61, "name": "Ligue 1", "type": "League", "logo": "l.png" },
        "country": { "code": "FR" },
        "seasons": [{ "year": 2022 }, { "year": 2024 }, { "year": 2023 }]
    });
    let l = map_league_row(&row, 2030);
    assert_eq!(l.external_id, 61);
    assert_eq!(l.kind, "league");
    assert_eq!(l.season, 2024);
    assert_eq!(l.country_code.as_deref(), Some("FR"));

    let cup = map_league_row(&json!({ "league": { "id": 66, "name": "Coupe de France", "type": "Cup" } }), 2030);
    assert_eq!(cup.kind, "cup");
    assert_eq!(cup.season, 2030);

    let untyped = map_league_row(&json!({ "league": { "id": 1, "name": "X" } }), 2030);
    assert_eq!(untyped.kind, "league");
}

#[test]
fn test_map_team_row() {
    let t = map_team_row(&json!({
        "team": { "id": 85, "name": "Paris Saint Germain", "code": "PAR", "country": "France", "logo": "p.png" }
    }));
    assert_eq!(t.external_id, 85);
    assert_eq!(t.short_name.as_deref(), Some("PAR"));
    assert_eq!(t.country.as_deref(), Some("France"));
}

#[test]
fn test_season_param_display() {
    assert_eq!(SeasonParam::Year(2024).to_string(), "2024");
    assert_eq!(SeasonParam::Span(2024).to_string(), "2024-2025");
}

#[test]
fn test_normalize_base() {
    assert_eq!(
        normalize_base("https://v3.football.api-sports.io/"),
        "https://v3.football.api-sports.io/v3"
    );
    assert_eq!(
        normalize_base("https://api-football-v1.p.rapidapi.com/v3/"),
        "https://api-football-v1.p.rapidapi.com/v3"
    );
}
