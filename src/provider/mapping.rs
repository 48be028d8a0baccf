use serde_json::Value;

use crate::{
    errors::AppError,
    models::{
        fixture::MatchStatus,
        provider::{ProviderCountry, ProviderLeague, ProviderMatch, ProviderSide, ProviderTeam},
    },
};

const PREVIEW_LEN: usize = 400;

/// Score locations seen across provider payload shapes, tried in order.
const SCORE_PATHS: [(&str, &str); 5] = [
    ("/goals/home", "/goals/away"),
    ("/score/fulltime/home", "/score/fulltime/away"),
    ("/home_score", "/away_score"),
    ("/home/goals", "/away/goals"),
    ("/full_time/home", "/full_time/away"),
];

/// Pulls the `response` array out of an API-Football body.
pub fn response_rows(body: Value) -> Result<Vec<Value>, AppError> {
    match body {
        Value::Object(mut map) => match map.remove("response") {
            Some(Value::Array(rows)) => Ok(rows),
            other => {
                if let Some(v) = other {
                    map.insert("response".into(), v);
                }
                Err(unexpected_shape(&Value::Object(map)))
            }
        },
        other => Err(unexpected_shape(&other)),
    }
}

fn unexpected_shape(body: &Value) -> AppError {
    AppError::ProviderError(format!(
        "Unexpected API shape (missing 'response'). Body preview: {}",
        preview(&body.to_string())
    ))
}

pub fn preview(s: &str) -> String {
    if s.chars().count() > PREVIEW_LEN {
        let cut: String = s.chars().take(PREVIEW_LEN).collect();
        format!("{cut}…")
    } else {
        s.to_string()
    }
}

/// Trimmed string, `None` when missing or blank.
pub fn norm(v: Option<&Value>) -> Option<String> {
    v.and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn text(v: Option<&Value>) -> String {
    norm(v).unwrap_or_default()
}

fn int(v: Option<&Value>) -> Option<i64> {
    match v? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn id(v: Option<&Value>) -> i32 {
    int(v).and_then(|n| i32::try_from(n).ok()).unwrap_or(0)
}

/// JSON null or a missing key is an unknown score; 0 is a real one.
fn goals(v: Option<&Value>) -> Option<i16> {
    int(v).and_then(|n| i16::try_from(n).ok())
}

/// Maps `fixture.status.short` / `.long` onto the stored status.
pub fn map_status(short: Option<&str>, long: Option<&str>) -> MatchStatus {
    let s = short.unwrap_or_default().trim().to_ascii_uppercase();
    match s.as_str() {
        "FT" | "AET" | "PEN" => MatchStatus::Finished,
        "NS" | "PST" | "TBD" | "CANC" => MatchStatus::Scheduled,
        "1H" | "2H" | "ET" | "HT" | "P" | "BT" | "LIVE" => MatchStatus::Live,
        _ => match long {
            Some(l) if l.to_ascii_lowercase().contains("live") => MatchStatus::Live,
            _ => MatchStatus::Scheduled,
        },
    }
}

/// First score pair with at least one known side.
pub fn extract_scores(row: &Value) -> (Option<i16>, Option<i16>) {
    for (home_path, away_path) in SCORE_PATHS {
        let home = goals(row.pointer(home_path));
        let away = goals(row.pointer(away_path));
        if home.is_some() || away.is_some() {
            return (home, away);
        }
    }
    (None, None)
}

fn side(row: &Value, key: &str, goals: Option<i16>) -> ProviderSide {
    let team = row.pointer(&format!("/teams/{key}"));
    ProviderSide {
        id: id(team.and_then(|t| t.get("id"))),
        name: text(team.and_then(|t| t.get("name"))),
        logo: norm(team.and_then(|t| t.get("logo"))),
        goals,
    }
}

pub fn map_fixture_row(row: &Value) -> ProviderMatch {
    let status = map_status(
        row.pointer("/fixture/status/short").and_then(|v| v.as_str()),
        row.pointer("/fixture/status/long").and_then(|v| v.as_str()),
    );
    let (home_goals, away_goals) = extract_scores(row);

    ProviderMatch {
        external_id: id(row.pointer("/fixture/id")),
        date_utc: text(row.pointer("/fixture/date")),
        status,
        round: norm(row.pointer("/fixture/round")),
        stage: norm(row.pointer("/league/round")),
        venue: norm(row.pointer("/fixture/venue/name")),
        minute: goals(row.pointer("/fixture/status/elapsed")),
        league_external_id: id(row.pointer("/league/id")),
        league_name: norm(row.pointer("/league/name")),
        home: side(row, "home", home_goals),
        away: side(row, "away", away_goals),
    }
}

/// `None` when the row has neither a code nor a name.
pub fn map_country_row(row: &Value) -> Option<ProviderCountry> {
    let country = ProviderCountry {
        code: text(row.get("code")),
        name: text(row.get("name")),
        flag: norm(row.get("flag")),
    };
    if country.code.is_empty() && country.name.is_empty() {
        None
    } else {
        Some(country)
    }
}

/// The league's season is the latest one the provider lists, else `current_year`.
pub fn map_league_row(row: &Value, current_year: i32) -> ProviderLeague {
    let season = row
        .get("seasons")
        .and_then(|s| s.as_array())
        .and_then(|seasons| seasons.iter().map(|s| id(s.get("year"))).max())
        .filter(|year| *year > 0)
        .unwrap_or(current_year);

    ProviderLeague {
        external_id: id(row.pointer("/league/id")),
        name: text(row.pointer("/league/name")),
        kind: norm(row.pointer("/league/type"))
            .map(|t| t.to_ascii_lowercase())
            .unwrap_or_else(|| "league".to_string()),
        logo: norm(row.pointer("/league/logo")),
        season,
        country_code: norm(row.pointer("/country/code")),
    }
}

pub fn map_team_row(row: &Value) -> ProviderTeam {
    ProviderTeam {
        external_id: id(row.pointer("/team/id")),
        name: text(row.pointer("/team/name")),
        short_name: norm(row.pointer("/team/code")),
        logo: norm(row.pointer("/team/logo")),
        country: norm(row.pointer("/team/country")),
    }
}
