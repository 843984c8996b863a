use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;
use scraper::ElementRef;

/// Replaces every run of whitespace with a single space.
pub fn collapse_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s{2,}|[\t\r\n\u{a0}]").expect("regex should be valid"));
    re.replace_all(s, " ")
}

/// All text below `element`, trimmed, whitespace collapsed.
pub fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    collapse_whitespace(raw.trim()).into_owned()
}
