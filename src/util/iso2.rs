use crate::util::slug::slugify;

/// Normalizes a provider country code to two ASCII letters.
///
/// `XKX` -> `XK`, `UK` -> `GB`, subdivisions like `GB-ENG` -> `GB`. Anything else
/// that is not exactly two letters is derived from the first letters of `name`,
/// falling back to `XX`.
pub fn sanitize_iso2(raw_code: &str, name: &str) -> String {
    let code = raw_code.trim().to_ascii_uppercase();

    match code.as_str() {
        "XKX" | "XK" => return "XK".to_string(),
        "UK" => return "GB".to_string(),
        _ => {}
    }

    if is_subdivision(&code) {
        return code[..2].to_string();
    }

    if code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase()) {
        return code;
    }

    from_name(name)
}

fn is_subdivision(code: &str) -> bool {
    let Some((country, region)) = code.split_once('-') else {
        return false;
    };
    country.len() == 2
        && country.chars().all(|c| c.is_ascii_uppercase())
        && region.len() >= 2
        && region.chars().all(|c| c.is_ascii_uppercase() || c == '-')
}

fn from_name(name: &str) -> String {
    let letters: String = slugify(name)
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .take(2)
        .collect();

    if letters.len() == 2 {
        letters.to_ascii_uppercase()
    } else {
        "XX".to_string()
    }
}
