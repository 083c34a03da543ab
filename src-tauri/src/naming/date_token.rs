// Date input parsing and the YYMMDD token

use std::sync::OnceLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::config::naming;

fn compact_date_regex() -> Option<&'static Regex> {
    static COMPACT: OnceLock<Option<Regex>> = OnceLock::new();
    COMPACT
        .get_or_init(|| Regex::new(naming::COMPACT_DATE_PATTERN).ok())
        .as_ref()
}

/// Parses the raw date field into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYYMMDD` and `DD.MM.YYYY`. Returns `None` for
/// blank input and for anything that is not a real calendar day.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(captures) = compact_date_regex().and_then(|re| re.captures(raw)) {
        let year = captures[1].parse().ok()?;
        let month = captures[2].parse().ok()?;
        let day = captures[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    std::iter::once(naming::DATE_INPUT_FORMAT)
        .chain(naming::ALTERNATE_DATE_INPUT_FORMATS.iter().copied())
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Two-digit year, zero-padded month and day
pub fn format_date_token(date: NaiveDate) -> String {
    date.format(naming::DATE_TOKEN_FORMAT).to_string()
}

/// Today's local date in the format the date field expects
pub fn today_input() -> String {
    Local::now()
        .date_naive()
        .format(naming::DATE_INPUT_FORMAT)
        .to_string()
}
