use crate::entity_tag::compile;
use chrono::{DateTime, Datelike, Days, NaiveDate, SecondsFormat, TimeDelta, Utc};
use once_cell::sync::Lazy;
use regex_automata::meta::Regex;

const HTTP_DATE_GRAMMAR: &str = concat!(
    r"^(?:",
    r"(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun), \d\d (?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) \d{4} \d\d:\d\d:\d\d GMT",
    r"|(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun) (?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) [\d ]\d \d\d:\d\d:\d\d \d{4}",
    r"|(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday), \d\d-(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)-\d\d \d\d:\d\d:\d\d GMT",
    r")$"
);

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const IMF_FIXDATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// RFC 850 two-digit years below this pivot belong to the 2000s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

static HTTP_DATE_REGEX: Lazy<Regex> = Lazy::new(|| compile(HTTP_DATE_GRAMMAR));

/// Matches the three HTTP-date forms of RFC 7231 section 7.1.1.1:
/// IMF-fixdate, obsolete RFC 850 and ANSI C `asctime()`.
pub fn is_http_date(value: &str) -> bool {
    HTTP_DATE_REGEX.is_match(value.as_bytes())
}

/// Parses an HTTP-date as UTC.
///
/// Returns `None` when the grammar does not match or a field is out of
/// range: day outside `1-31`, minute or second above 59, hour above 24, or
/// hour 24 with a non-zero minute or second. Days past the end of the month
/// roll into the next one (`31 Feb 2020` is `02 Mar 2020`) and `24:00:00` is
/// midnight of the next day. The weekday is not cross-checked against the
/// date.
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    if !is_http_date(value) {
        return None;
    }

    let bytes = value.as_bytes();
    let (day, month, year, time) = match bytes[3] {
        // Sun, 06 Nov 1994 08:49:37 GMT
        b',' => (&value[5..7], &value[8..11], full_year(&value[12..16])?, &value[17..25]),
        // Sun Nov  6 08:49:37 1994
        b' ' => (&value[8..10], &value[4..7], full_year(&value[20..24])?, &value[11..19]),
        // Sunday, 06-Nov-94 08:49:37 GMT
        _ => {
            let rest = &value[value.find(", ")? + 2..];
            (&rest[0..2], &rest[3..6], two_digit_year(&rest[7..9])?, &rest[10..18])
        }
    };

    let day: u32 = day.trim_start().parse().ok()?;
    let month = MONTHS.iter().position(|name| *name == month)? as u32 + 1;
    let hour: u32 = time[0..2].parse().ok()?;
    let minute: u32 = time[3..5].parse().ok()?;
    let second: u32 = time[6..8].parse().ok()?;

    if !(1..=31).contains(&day) || minute > 59 || second > 59 {
        return None;
    }
    if hour > 24 || (hour == 24 && (minute, second) != (0, 0)) {
        return None;
    }

    let midnight = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day - 1)))?
        .and_hms_opt(0, 0, 0)?;
    let offset = TimeDelta::try_seconds(i64::from(hour * 3600 + minute * 60 + second))?;
    midnight
        .checked_add_signed(offset)
        .map(|naive| naive.and_utc())
}

fn full_year(digits: &str) -> Option<i32> {
    digits.parse().ok()
}

fn two_digit_year(digits: &str) -> Option<i32> {
    let short: i32 = digits.parse().ok()?;
    Some(if short < TWO_DIGIT_YEAR_PIVOT {
        2000 + short
    } else {
        1900 + short
    })
}

/// Renders `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn format_gmt(instant: &DateTime<Utc>) -> String {
    instant.format(IMF_FIXDATE).to_string()
}

/// Renders `1994-11-06T08:49:37.000Z`.
pub fn format_iso(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// IMF-fixdate only has room for a four digit year.
pub fn is_representable(instant: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&instant.year())
}

#[cfg(test)]
#[path = "http_date_test.rs"]
mod http_date_test;
