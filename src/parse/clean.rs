use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;
use scraper::ElementRef;

pub fn collapse_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s, " ")
}

/// Joins the element's text nodes and applies the cleanup every directory
/// field gets: whitespace collapsed, surrounding whitespace trimmed, the
/// Unicode right single quote normalized to an apostrophe, and the visible
/// field label (`"Name "`, `"Phone "`, `"Office "`) stripped off the front.
pub fn clean_text(element: ElementRef, label: &str) -> String {
    let raw: String = element.text().collect();
    let text = collapse_whitespace(raw.trim()).replace('’', "'");
    match text.strip_prefix(label) {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
