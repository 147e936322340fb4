use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;
use std::sync::OnceLock;

// The calendar export does not guarantee one canonical start-time format
// (it varies with the exporting machine's regional settings), so resolution
// is an ordered list of strategies tried until one succeeds. A string no
// strategy recognizes still resolves to `now` rather than dropping the
// meeting; the caller keeps the raw text for display in that case.

pub struct ResolvedStart {
    pub instant: DateTime<Local>,
    pub recognized: bool,
}

type Strategy = fn(&str, DateTime<Local>) -> Option<DateTime<Local>>;

const STRATEGIES: &[Strategy] = &[parse_generic, parse_commas_as_slashes, parse_day_month_year];

pub fn resolve(raw: &str, now: DateTime<Local>) -> ResolvedStart {
    for strategy in STRATEGIES {
        if let Some(instant) = strategy(raw, now) {
            return ResolvedStart {
                instant,
                recognized: true,
            };
        }
    }
    ResolvedStart {
        instant: now,
        recognized: false,
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

fn parse_generic(raw: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Local));
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return to_local(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return to_local(parsed.and_hms_opt(0, 0, 0)?);
        }
    }

    // A bare time of day means "today at that time".
    for format in TIME_FORMATS {
        if let Ok(parsed) = NaiveTime::parse_from_str(trimmed, format) {
            return to_local(now.date_naive().and_time(parsed));
        }
    }

    None
}

fn parse_commas_as_slashes(raw: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    if !raw.contains(',') {
        return None;
    }
    parse_generic(&raw.replace(',', "/"), now)
}

fn day_month_year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{1,2})\s*[,/]\s*(\d{1,2})\s*[,/]\s*(\d{4})(?:\s+(\d{1,2}):(\d{2}))?$")
            .expect("day/month/year pattern is valid")
    })
}

// Last recognizing tier: pull day, month, year and an optional hour:minute
// out of `D[,/]M[,/]Y[ H:MM]` shapes, time defaulting to 0:00. The source
// always writes the day before the month; that order is kept even where the
// digits would also read as month/day.
fn parse_day_month_year(raw: &str, _now: DateTime<Local>) -> Option<DateTime<Local>> {
    let captures = day_month_year_pattern().captures(raw.trim())?;
    let day: u32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;
    let hour: u32 = captures
        .get(4)
        .map_or(Some(0), |h| h.as_str().parse().ok())?;
    let minute: u32 = captures
        .get(5)
        .map_or(Some(0), |m| m.as_str().parse().ok())?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    to_local(date.and_hms_opt(hour, minute, 0)?)
}

fn to_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}
