use football_data_be::{
    http::admin::{
        FlashQuery,
        forms::{LeagueConfigForm, checkbox, parse_optional_int},
    },
    models::league_config::{parse_seasons_csv, seasons_to_csv},
};

fn config_form() -> LeagueConfigForm {
    LeagueConfigForm {
        provider_league_id: "61".into(),
        name: " Ligue 1 ".into(),
        country: "France".into(),
        seasons: "2024, 2023,,2024".into(),
        enabled: Some("1".into()),
        sort_order: "".into(),
    }
}

#[test]
fn test_checkbox() {
    assert!(checkbox(&Some("1".into())));
    assert!(checkbox(&Some("on".into())));
    assert!(!checkbox(&Some("0".into())));
    assert!(!checkbox(&Some("off".into())));
    assert!(!checkbox(&Some("".into())));
    assert!(!checkbox(&None));
}

#[test]
fn test_parse_optional_int() {
    assert_eq!(parse_optional_int(""), Ok(None));
    assert_eq!(parse_optional_int(" 3 "), Ok(Some(3)));
    assert_eq!(parse_optional_int("-1"), Ok(Some(-1)));
    assert!(parse_optional_int("first").is_err());
}

#[test]
fn test_seasons_csv() {
    assert_eq!(parse_seasons_csv("2024, 2023,,2024 , "), vec!["2024", "2023"]);
    assert!(parse_seasons_csv("").is_empty());
    assert!(parse_seasons_csv(" , ,").is_empty());
    assert_eq!(
        parse_seasons_csv("2023-2024,2024"),
        vec!["2023-2024", "2024"]
    );

    let seasons = vec!["2024".to_string(), String::new(), "2023".to_string()];
    assert_eq!(seasons_to_csv(&seasons), "2024,2023");
}

#[test]
fn test_league_config_form_to_input() {
    let input = config_form().to_input().unwrap();
    assert_eq!(input.provider_league_id, 61);
    assert_eq!(input.name, "Ligue 1");
    assert_eq!(input.country.as_deref(), Some("France"));
    assert_eq!(input.seasons_active, vec!["2024", "2023"]);
    assert!(input.enabled);
    assert_eq!(input.sort_order, 0);
}

#[test]
fn test_league_config_form_validation() {
    let mut form = config_form();
    form.provider_league_id = "0".into();
    assert!(form.to_input().is_err());

    let mut form = config_form();
    form.provider_league_id = "abc".into();
    assert!(form.to_input().is_err());

    let mut form = config_form();
    form.name = "   ".into();
    assert_eq!(form.to_input().unwrap_err(), "Name is required");

    let mut form = config_form();
    form.name = "x".repeat(101);
    assert!(form.to_input().is_err());

    let mut form = config_form();
    form.country = "é".repeat(61);
    assert_eq!(
        form.to_input().unwrap_err(),
        "Country must be at most 60 characters"
    );

    let mut form = config_form();
    form.country = format!("  {}  ", "é".repeat(60));
    assert_eq!(form.to_input().unwrap().country, Some("é".repeat(60)));

    let mut form = config_form();
    form.sort_order = "top".into();
    assert!(form.to_input().is_err());

    let mut form = config_form();
    form.country = "  ".into();
    form.enabled = None;
    form.sort_order = "5".into();
    let input = form.to_input().unwrap();
    assert_eq!(input.country, None);
    assert!(!input.enabled);
    assert_eq!(input.sort_order, 5);
}

#[test]
fn test_flash_messages() {
    let flash = |code: &str| FlashQuery {
        flash: Some(code.into()),
    };
    assert_eq!(flash("saved").message().as_deref(), Some("Changes saved."));
    assert_eq!(flash("created").message().as_deref(), Some("Created."));
    assert_eq!(flash("deleted").message().as_deref(), Some("Deleted."));
    assert_eq!(flash("<script>").message(), None);
    assert_eq!(FlashQuery::default().message(), None);
}
