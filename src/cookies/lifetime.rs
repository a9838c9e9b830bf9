//! Cookie lifetime classification.
//!
//! Decides whether a `Set-Cookie` value outlives a minimum retention
//! threshold. Lifetimes are judged against the capture's reference time,
//! not the wall clock, so reruns over the same capture stay reproducible.

use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time};

use crate::cookies::attributes::CookieAttributes;

/// True if the cookie's effective lifetime is at least `min_age_days`.
///
/// `Max-Age` wins when it qualifies: its second count (0 when absent or
/// unparsable) is converted to whole days and compared against the
/// threshold. Otherwise the `Expires` date is measured against
/// `reference_time`. A cookie with neither a qualifying `Max-Age` nor a
/// parsable `Expires` is not long-lived.
pub fn is_long_lived(raw_value: &str, min_age_days: i64, reference_time: OffsetDateTime) -> bool {
    let attrs = CookieAttributes::parse(raw_value);

    let max_age_secs = attrs.max_age().unwrap_or(0);
    if Duration::seconds(max_age_secs).whole_days() >= min_age_days {
        return true;
    }

    match attrs.expires().and_then(parse_http_date) {
        Some(expires) => (expires - reference_time).whole_days() >= min_age_days,
        None => false,
    }
}

/// Recognize an HTTP-date (IMF-fixdate, RFC 850, or asctime layout).
///
/// Tokenizing recognizer rather than a fixed format string: attribute
/// values arrive lower-cased, and servers emit all three layouts, so the
/// parser scans tokens for a clock, a day, a month name, and a year in
/// any order. The zone is taken as GMT, which is what HTTP dates carry.
pub(crate) fn parse_http_date(value: &str) -> Option<OffsetDateTime> {
    let mut clock: Option<Time> = None;
    let mut day: Option<u8> = None;
    let mut month: Option<Month> = None;
    let mut year: Option<i32> = None;

    for token in value.split(|c: char| !(c.is_ascii_alphanumeric() || c == ':')) {
        if token.is_empty() {
            continue;
        }

        if token.contains(':') {
            if clock.is_none() {
                clock = parse_clock(token);
            }
            continue;
        }

        if token.chars().all(|c| c.is_ascii_digit()) {
            if day.is_none() && token.len() <= 2 {
                if let Ok(d @ 1..=31) = token.parse::<u8>() {
                    day = Some(d);
                    continue;
                }
            }
            if year.is_none() {
                year = parse_year(token);
            }
            continue;
        }

        if month.is_none() {
            month = parse_month(token);
        }
    }

    let date = Date::from_calendar_date(year?, month?, day?).ok()?;
    Some(PrimitiveDateTime::new(date, clock?).assume_utc())
}

fn parse_clock(token: &str) -> Option<Time> {
    let mut parts = token.split(':');
    let hour = parts.next()?.parse().ok()?;
    let minute = parts.next()?.parse().ok()?;
    let second = parts.next().map_or(Some(0), |s| s.parse().ok())?;
    if parts.next().is_some() {
        return None;
    }
    Time::from_hms(hour, minute, second).ok()
}

fn parse_year(token: &str) -> Option<i32> {
    let number: i32 = token.parse().ok()?;
    match token.len() {
        // RFC 850 two-digit years: 70-99 are 19xx, 00-69 are 20xx.
        2 if number >= 70 => Some(1900 + number),
        2 => Some(2000 + number),
        4 => Some(number),
        _ => None,
    }
}

fn parse_month(token: &str) -> Option<Month> {
    let prefix: String = token.chars().take(3).map(|c| c.to_ascii_lowercase()).collect();
    let month = match prefix.as_str() {
        "jan" => Month::January,
        "feb" => Month::February,
        "mar" => Month::March,
        "apr" => Month::April,
        "may" => Month::May,
        "jun" => Month::June,
        "jul" => Month::July,
        "aug" => Month::August,
        "sep" => Month::September,
        "oct" => Month::October,
        "nov" => Month::November,
        "dec" => Month::December,
        _ => return None,
    };
    Some(month)
}
