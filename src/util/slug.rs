use std::future::Future;

use crate::errors::AppError;

/// Slugs that would collide with routes.
pub const RESERVED_SLUGS: [&str; 8] = [
    "new", "edit", "api", "admin", "login", "logout", "match", "matches",
];

pub const COUNTRY_SLUG_MAX: usize = 96;
pub const LEAGUE_SLUG_MAX: usize = 128;
pub const TEAM_SLUG_MAX: usize = 128;
pub const LEAGUE_CONFIG_SLUG_MAX: usize = 120;

/// "Ligue 1 Française" -> "ligue-1-francaise"
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_dash = true;

    for ch in text.chars().flat_map(char::to_lowercase) {
        // Combining marks belong to the previous letter ("İ" lowercases to "i" + U+0307).
        if ('\u{0300}'..='\u{036F}').contains(&ch) {
            continue;
        }
        let folded = fold_char(ch);
        let pieces: &str = match folded {
            Some(s) => s,
            None if ch.is_ascii_alphanumeric() => {
                slug.push(ch);
                last_dash = false;
                continue;
            }
            None => "",
        };

        if pieces.is_empty() {
            if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        } else {
            slug.push_str(pieces);
            last_dash = false;
        }
    }

    slug.trim_matches('-').to_string()
}

/// Latin letters with diacritics folded to ASCII. `None` for anything else.
fn fold_char(ch: char) -> Option<&'static str> {
    let s = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' | 'ĝ' | 'ġ' | 'ģ' => "g",
        'ħ' | 'ĥ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' | 'ĩ' | 'ĭ' => "i",
        'ĳ' => "ij",
        'ĵ' => "j",
        'ķ' | 'ĸ' => "k",
        'ł' | 'ľ' | 'ļ' | 'ĺ' | 'ŀ' => "l",
        'ñ' | 'ń' | 'ň' | 'ņ' | 'ŉ' => "n",
        'ŋ' => "ng",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' | 'ŏ' | 'ơ' => "o",
        'œ' => "oe",
        'ŕ' | 'ř' | 'ŗ' => "r",
        'ś' | 'š' | 'ş' | 'ș' | 'ŝ' | 'ſ' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' | 'ŧ' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' | 'ũ' | 'ŭ' | 'ư' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(s)
}

/// Collapses dash runs and trims dashes; an empty or reserved result becomes `item`.
pub fn sanitize_base(base: &str) -> String {
    let mut out = String::with_capacity(base.len());
    let mut last_dash = false;
    for ch in base.chars() {
        if ch == '-' {
            if !last_dash {
                out.push('-');
            }
            last_dash = true;
        } else {
            out.push(ch);
            last_dash = false;
        }
    }
    let out = out.trim_matches('-').to_string();

    if out.is_empty() || RESERVED_SLUGS.contains(&out.as_str()) {
        "item".to_string()
    } else {
        out
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    let cut: String = s.chars().take(max).collect();
    let trimmed = cut.trim_end_matches('-');
    if trimmed.is_empty() {
        cut
    } else {
        trimmed.to_string()
    }
}

/// Slug for the given attempt: attempt 1 is the bare base, then `-2`, `-3`, ...
pub fn candidate(base: &str, max_len: usize, attempt: u32) -> String {
    if attempt <= 1 {
        return truncate(base, max_len);
    }
    let suffix = format!("-{attempt}");
    let room = max_len.saturating_sub(suffix.len());
    format!("{}{}", truncate(base, room), suffix)
}

/// Finds the first free candidate for `text`. `is_taken` decides whether a slug is already used.
pub async fn generate_unique<F, Fut>(
    text: &str,
    max_len: usize,
    mut is_taken: F,
) -> Result<String, AppError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, AppError>>,
{
    let base = sanitize_base(&slugify(text));
    let mut attempt = 1;

    loop {
        let slug = candidate(&base, max_len, attempt);
        if !is_taken(slug.clone()).await? {
            return Ok(slug);
        }
        attempt += 1;
    }
}
