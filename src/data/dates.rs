use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date-only layouts with a four-digit year, most common first.
/// Slash dates are month-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// Two-digit years: 00-69 land in 20xx, 70-99 in 19xx
const SHORT_YEAR_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%d-%b-%y",
    "%d %b %y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse a `Date` cell. Date-only values land on midnight.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(date) = parse_compact(value) {
        return date.and_hms_opt(0, 0, 0);
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            if has_full_year(value, date.year()) {
                return date.and_hms_opt(0, 0, 0);
            }
        }
    }

    for format in SHORT_YEAR_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            if has_full_year(value, datetime.year()) {
                return Some(datetime);
            }
        }
    }

    // Offsets are normalised to UTC before the timezone is dropped
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// `%Y` also accepts one or two digits, so `1/5/24` would otherwise become year 1
fn has_full_year(value: &str, year: i32) -> bool {
    let year = format!("{:04}", year);
    value
        .split(|c: char| !c.is_ascii_digit())
        .any(|run| run == year)
}

/// `YYYYMMDD`, which `%Y` would otherwise swallow whole
fn parse_compact(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
