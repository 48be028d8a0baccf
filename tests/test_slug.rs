use football_data_be::util::slug::{
    RESERVED_SLUGS, candidate, generate_unique, sanitize_base, slugify, truncate,
};
use std::collections::HashSet;

#[test]
fn test_slugify_folds_accents() {
    assert_eq!(slugify("Ligue 1 Française"), "ligue-1-francaise");
    assert_eq!(slugify("Ça va"), "ca-va");
    assert_eq!(slugify("Übersee"), "ubersee");
    assert_eq!(slugify("Straße"), "strasse");
    assert_eq!(slugify("Łódź"), "lodz");
}

#[test]
fn test_slugify_drops_combining_marks() {
    assert_eq!(slugify("İstanbulspor"), "istanbulspor");
    assert_eq!(slugify("İstanbul Başakşehir"), "istanbul-basaksehir");
    assert_eq!(slugify("Cafe\u{0301} Crème"), "cafe-creme");
}

#[test]
fn test_slugify_folds_stroked_letters() {
    assert_eq!(slugify("Ħamrun Spartans"), "hamrun-spartans");
    assert_eq!(slugify("Ħal Qormi"), "hal-qormi");
    assert_eq!(slugify("Ŧest Ŋ"), "test-ng");
}

#[test]
fn test_slugify_collapses_separators() {
    assert_eq!(slugify("  Hello, World!  "), "hello-world");
    assert_eq!(slugify("Paris Saint-Germain"), "paris-saint-germain");
    assert_eq!(slugify("A -- B"), "a-b");
    assert_eq!(slugify("日本"), "");
    assert_eq!(slugify(""), "");
}

#[test]
fn test_sanitize_base_replaces_empty_and_reserved() {
    assert_eq!(sanitize_base(""), "item");
    assert_eq!(sanitize_base("---"), "item");
    for reserved in RESERVED_SLUGS {
        assert_eq!(sanitize_base(reserved), "item");
    }
    assert_eq!(sanitize_base("a--b-"), "a-b");
    assert_eq!(sanitize_base("matches-today"), "matches-today");
}

#[test]
fn test_truncate_drops_trailing_dash() {
    assert_eq!(truncate("abcdef", 4), "abcd");
    assert_eq!(truncate("ab-cd", 3), "ab");
    assert_eq!(truncate("short", 10), "short");
}

#[test]
fn test_candidate_leaves_room_for_suffix() {
    assert_eq!(candidate("abcdef", 4, 1), "abcd");
    assert_eq!(candidate("abcdef", 5, 2), "abc-2");
    assert_eq!(candidate("ab-cd", 5, 3), "ab-3");
    assert_eq!(candidate("paris", 96, 12), "paris-12");
}

#[tokio::test]
async fn test_generate_unique_skips_taken_slugs() {
    let taken: HashSet<String> = ["paris".to_string(), "paris-2".to_string()].into();

    let slug = generate_unique("Paris", 96, |slug| {
        let hit = taken.contains(&slug);
        async move { Ok(hit) }
    })
    .await
    .unwrap();

    assert_eq!(slug, "paris-3");
}

#[tokio::test]
async fn test_generate_unique_reserved_name() {
    let slug = generate_unique("Admin", 128, |_| async { Ok(false) })
        .await
        .unwrap();
    assert_eq!(slug, "item");
}
