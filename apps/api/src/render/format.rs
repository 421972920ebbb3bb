//! Formatting helpers shared by every template renderer.
//!
//! Each renderer must produce identical dates and bullets for the same view model,
//! so none of this logic lives inside an individual template.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::PRESENT;

/// Short month names, indexed by 0-based month.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DATE_RANGE_SEPARATOR: &str = " — ";

static LINKEDIN_PROFILE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?linkedin\.com/in/").expect("valid LinkedIn URL pattern")
});

/// Formats a stored date for display.
///
/// - `""` → `""`
/// - a bare year (exactly four characters) → unchanged
/// - `YYYY-MM[-...]` → `"<Mon> <YYYY>"`, e.g. `"2023-08"` → `"Aug 2023"`
/// - anything that is not a valid calendar month → unchanged
pub fn format_display_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if raw.chars().count() == 4 {
        return raw.to_string();
    }
    parse_year_month(raw).unwrap_or_else(|| raw.to_string())
}

fn parse_year_month(raw: &str) -> Option<String> {
    let mut parts = raw.split('-');
    let year = parse_digits(parts.next()?)?;
    let month = parse_digits(parts.next()?)?;

    // Stored months are 1-based; the name table is 0-based.
    let month0 = usize::try_from(month).ok()?.checked_sub(1)?;
    let name = MONTH_ABBREVIATIONS.get(month0)?;

    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, u32::try_from(month0 + 1).ok()?, 1)?;

    Some(format!("{name} {year}"))
}

fn parse_digits(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Splits a normalized description into bullet items: one per line, trimmed,
/// with blank lines discarded.
pub fn split_bullets(description: &str) -> Vec<String> {
    description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Date line for an experience entry, start and end joined by the range separator.
/// A current role always ends in `Present`. `None` when there is nothing to show.
pub fn date_range(start: &str, end: &str, is_current: bool) -> Option<String> {
    let start = format_display_date(start);
    let end = if is_current {
        PRESENT.to_string()
    } else {
        format_display_date(end)
    };

    match (start.is_empty(), end.is_empty()) {
        (true, true) => None,
        (false, true) => Some(start),
        (true, false) => Some(end),
        (false, false) => Some(format!("{start}{DATE_RANGE_SEPARATOR}{end}")),
    }
}

/// `"<degree> in <field>"`, degrading to whichever half is present.
pub fn degree_line(degree: &str, field: &str) -> String {
    match (degree.trim(), field.trim()) {
        ("", "") => String::new(),
        (degree, "") => degree.to_string(),
        ("", field) => field.to_string(),
        (degree, field) => format!("{degree} in {field}"),
    }
}

/// LinkedIn handle without the profile URL prefix.
pub fn linkedin_handle(linkedin: &str) -> String {
    LINKEDIN_PROFILE_URL.replace(linkedin.trim(), "").into_owned()
}

/// Absolute profile URL for a stored LinkedIn value (handle or URL).
pub fn linkedin_href(linkedin: &str) -> String {
    let linkedin = linkedin.trim();
    if has_scheme(linkedin) {
        linkedin.to_string()
    } else {
        format!("https://www.linkedin.com/in/{linkedin}")
    }
}

/// Absolute URL for a stored website value.
pub fn website_href(website: &str) -> String {
    let website = website.trim();
    if has_scheme(website) {
        website.to_string()
    } else {
        format!("https://{website}")
    }
}

fn has_scheme(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
