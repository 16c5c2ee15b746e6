// src/core/sanitize.rs
use once_cell::sync::Lazy;
use regex::Regex;

use super::langmap::CHAR_MAP;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_\-]+").unwrap());
static NUMERIC_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#([xX]?)([0-9a-fA-F]+);").unwrap());

/// Decode the handful of entities the mapping tables actually use.
pub fn normalize_entities(s: &str) -> String {
    let named = s
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">");
    let numeric = NUMERIC_ENTITY.replace_all(&named, |caps: &regex::Captures| {
        let radix = if caps[1].is_empty() { 10 } else { 16 };
        u32::from_str_radix(&caps[2], radix)
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| s!(&caps[0]), |c| c.to_string())
    });
    // last, so "&amp;lt;" stays "&lt;"
    numeric.replace("&amp;", "&")
}

/// Collapse every whitespace run to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Strip line breaks and tabs; used for the on-disk page cache.
pub fn minify_html(html: &str) -> String {
    html.chars().filter(|c| !matches!(c, '\n' | '\r' | '\t')).collect()
}

/// Guess a Trakt-style slug from a title.
///
/// `None` when the title is empty, made only of digits, or has nothing left
/// after dropping symbols.
pub fn slugify(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut lower = trimmed.to_lowercase();
    for (from, to) in CHAR_MAP {
        if lower.contains(*from) {
            lower = lower.replace(*from, to);
        }
    }

    let alpha = NON_WORD.replace_all(&lower, "-");
    let dashed = SEPARATORS.replace_all(&alpha, "-");
    let slug = dashed.trim_matches('-');
    if slug.is_empty() { None } else { Some(s!(slug)) }
}
