use football_data_be::{jobs::leagues::parse_country_code, util::iso2::sanitize_iso2};

#[test]
fn test_valid_codes_are_upper_cased() {
    assert_eq!(sanitize_iso2("fr", "France"), "FR");
    assert_eq!(sanitize_iso2(" de ", "Germany"), "DE");
}

#[test]
fn test_special_cases() {
    assert_eq!(sanitize_iso2("XKX", "Kosovo"), "XK");
    assert_eq!(sanitize_iso2("xk", "Kosovo"), "XK");
    assert_eq!(sanitize_iso2("UK", "United Kingdom"), "GB");
}

#[test]
fn test_subdivisions_keep_country_part() {
    assert_eq!(sanitize_iso2("GB-ENG", "England"), "GB");
    assert_eq!(sanitize_iso2("gb-sct", "Scotland"), "GB");
}

#[test]
fn test_falls_back_to_name_letters() {
    assert_eq!(sanitize_iso2("", "World"), "WO");
    assert_eq!(sanitize_iso2("FRA", "France"), "FR");
    assert_eq!(sanitize_iso2("", "Côte d'Ivoire"), "CO");
}

#[test]
fn test_unknown_is_xx() {
    assert_eq!(sanitize_iso2("123", ""), "XX");
    assert_eq!(sanitize_iso2("", "1"), "XX");
}

#[test]
fn test_parse_country_code() {
    assert_eq!(parse_country_code(" fr ").unwrap(), "FR");
    assert!(parse_country_code("").is_err());
    assert!(parse_country_code("FRA").is_err());
    assert!(parse_country_code("F1").is_err());
}
