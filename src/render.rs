//! Token-based rendering of the fields that carry no locale names.
//!
//! Pattern letters follow the CLDR date field symbols:
//! https://unicode.org/reports/tr35/tr35-dates.html#Date_Field_Symbol_Table

use std::iter::Peekable;
use std::str::Chars;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::consts::{QUOTE, SHORT_NAME_RUN};

/// Expands a pattern for a date already shifted into its display zone.
pub trait PatternRenderer {
    fn render(&self, pattern: &str, date: &DateTime<FixedOffset>) -> String;
}

/// Locale-free renderer for numeric fields, eras, AM/PM and offsets.
///
/// It has no name tables of its own: month and weekday runs of three or more
/// letters come out verbatim, `E` and `EE` fall back to English abbreviations.
/// Letters it does not know are copied as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenFormatter;

impl PatternRenderer for TokenFormatter {
    fn render(&self, pattern: &str, date: &DateTime<FixedOffset>) -> String {
        let mut result = String::with_capacity(pattern.len() * 2);
        let mut chars = pattern.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    result.push(QUOTE);
                } else {
                    push_quoted(&mut result, &mut chars);
                }
            } else if ch.is_ascii_alphabetic() {
                let width = 1 + consume_same(&mut chars, ch);
                format_field(&mut result, date, ch, width);
            } else {
                result.push(ch);
            }
        }

        result
    }
}

fn format_field(result: &mut String, dt: &DateTime<FixedOffset>, ch: char, width: usize) {
    match ch {
        'G' => result.push_str(if dt.year() > 0 { "AD" } else { "BC" }),
        'y' => format_year(result, dt.year(), width),
        'M' if width < SHORT_NAME_RUN => format_number(result, dt.month(), width),
        'E' if width < SHORT_NAME_RUN => result.push_str(&dt.weekday().to_string()),
        'd' => format_number(result, dt.day(), width),
        'D' => format_number(result, dt.ordinal(), width),
        'a' => result.push_str(if dt.hour12().0 { "PM" } else { "AM" }),
        'h' => format_number(result, dt.hour12().1, width),
        'H' => format_number(result, dt.hour(), width),
        'k' => format_number(result, if dt.hour() == 0 { 24 } else { dt.hour() }, width),
        'K' => format_number(result, dt.hour() % 12, width),
        'm' => format_number(result, dt.minute(), width),
        's' => format_number(result, dt.second(), width),
        'S' => format_fraction(result, dt.nanosecond(), width),
        'Z' => format_offset(result, dt.offset().local_minus_utc(), width),
        _ => result.extend(std::iter::repeat_n(ch, width)),
    }
}

/// Copies a quoted segment, reading `''` as an apostrophe.
/// An unterminated segment runs to the end of the pattern.
fn push_quoted(result: &mut String, chars: &mut Peekable<Chars<'_>>) {
    while let Some(c) = chars.next() {
        if c != QUOTE {
            result.push(c);
        } else if chars.peek() == Some(&QUOTE) {
            chars.next();
            result.push(QUOTE);
        } else {
            return;
        }
    }
}

/// Consume consecutive identical characters, returning count of additional chars
fn consume_same(chars: &mut Peekable<Chars<'_>>, ch: char) -> usize {
    let mut count = 0;
    while chars.next_if_eq(&ch).is_some() {
        count += 1;
    }
    count
}

fn format_year(result: &mut String, year: i32, width: usize) {
    if width == 2 {
        format_number(result, year.rem_euclid(100).unsigned_abs(), 2);
        return;
    }
    if year < 0 {
        result.push('-');
    }
    format_number(result, year.unsigned_abs(), width);
}

fn format_number(result: &mut String, value: u32, min_width: usize) {
    result.push_str(&format!("{value:0min_width$}"));
}

/// Fractional seconds truncated (or zero-extended) to `width` digits.
fn format_fraction(result: &mut String, nanos: u32, width: usize) {
    // Leap seconds report nanoseconds past one billion
    let digits = format!("{:09}", nanos % 1_000_000_000);
    if width <= digits.len() {
        result.push_str(&digits[..width]);
    } else {
        result.push_str(&digits);
        result.extend(std::iter::repeat_n('0', width - digits.len()));
    }
}

/// `Z`-`ZZZ`: `+0200`, `ZZZZ`: `GMT+02:00`, `ZZZZZ`: `+02:00` or `Z`.
fn format_offset(result: &mut String, seconds: i32, width: usize) {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    match width {
        1..=3 => result.push_str(&format!("{sign}{hours:02}{minutes:02}")),
        4 if seconds == 0 => result.push_str("GMT"),
        4 => result.push_str(&format!("GMT{sign}{hours:02}:{minutes:02}")),
        _ if seconds == 0 => result.push('Z'),
        _ => result.push_str(&format!("{sign}{hours:02}:{minutes:02}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_dt(offset_hours: i32, ymd: (i32, u32, u32), hms: (u32, u32, u32)) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(ymd.0, ymd.1, ymd.2, hms.0, hms.1, hms.2)
            .unwrap()
    }

    fn render(pattern: &str, dt: &DateTime<FixedOffset>) -> String {
        TokenFormatter.render(pattern, dt)
    }

    #[test]
    fn test_numeric_date_fields() {
        let dt = make_dt(0, (2015, 1, 5), (9, 7, 3));
        assert_eq!(render("d.M.", &dt), "5.1.");
        assert_eq!(render("dd.MM.yyyy", &dt), "05.01.2015");
        assert_eq!(render("y", &dt), "2015");
        assert_eq!(render("yy", &dt), "15");
        assert_eq!(render("D", &dt), "5");
        assert_eq!(render("G y", &dt), "AD 2015");
    }

    #[test]
    fn test_time_fields() {
        let dt = make_dt(0, (2024, 3, 15), (14, 5, 9));
        assert_eq!(render("H:mm:ss", &dt), "14:05:09");
        assert_eq!(render("h:mm a", &dt), "2:05 PM");
        assert_eq!(render("hh", &dt), "02");
        assert_eq!(render("K", &dt), "2");

        let midnight = make_dt(0, (2024, 3, 15), (0, 0, 0));
        assert_eq!(render("h a", &midnight), "12 AM");
        assert_eq!(render("k", &midnight), "24");
        assert_eq!(render("HH", &midnight), "00");
    }

    #[test]
    fn test_fraction() {
        let dt = make_dt(0, (2024, 3, 15), (14, 5, 9))
            .with_nanosecond(123_456_789)
            .unwrap();
        assert_eq!(render("ss.SSS", &dt), "09.123");
        assert_eq!(render("S", &dt), "1");
        assert_eq!(render("SSSSSSSSSSS", &dt), "12345678900");
    }

    #[test]
    fn test_offsets() {
        let helsinki = make_dt(2, (2024, 3, 15), (14, 5, 9));
        assert_eq!(render("Z", &helsinki), "+0200");
        assert_eq!(render("ZZZZ", &helsinki), "GMT+02:00");
        assert_eq!(render("ZZZZZ", &helsinki), "+02:00");

        let utc = make_dt(0, (2024, 3, 15), (14, 5, 9));
        assert_eq!(render("Z", &utc), "+0000");
        assert_eq!(render("ZZZZ", &utc), "GMT");
        assert_eq!(render("ZZZZZ", &utc), "Z");

        let offset = FixedOffset::west_opt(3 * 3600 + 30 * 60).unwrap();
        let newfoundland = offset.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        assert_eq!(render("Z", &newfoundland), "-0330");
    }

    #[test]
    fn test_quoted_literals() {
        let dt = make_dt(0, (2024, 3, 15), (10, 30, 45));
        assert_eq!(render("d 'de' M", &dt), "15 de 3");
        assert_eq!(render("'d M y'", &dt), "d M y");
        assert_eq!(render("h 'o''clock'", &dt), "10 o'clock");
        assert_eq!(render("''d''", &dt), "'15'");
        assert_eq!(render("'unterminated d", &dt), "unterminated d");
    }

    #[test]
    fn test_name_runs_left_verbatim() {
        let dt = make_dt(0, (2024, 3, 15), (10, 30, 45));
        assert_eq!(render("EEEE", &dt), "EEEE");
        assert_eq!(render("EEE d MMM", &dt), "EEE 15 MMM");
        assert_eq!(render("MMMM", &dt), "MMMM");
    }

    #[test]
    fn test_short_weekday_fallback() {
        // 2024-03-15 is a Friday
        let dt = make_dt(0, (2024, 3, 15), (10, 30, 45));
        assert_eq!(render("E", &dt), "Fri");
        assert_eq!(render("EE d", &dt), "Fri 15");
    }

    #[test]
    fn test_unknown_letters_and_symbols() {
        let dt = make_dt(0, (2024, 3, 15), (10, 30, 45));
        assert_eq!(render("qq w", &dt), "qq w");
        assert_eq!(render("[d]/{M}", &dt), "[15]/{3}");
    }

    #[test]
    fn test_negative_year() {
        let dt = make_dt(0, (-44, 3, 15), (12, 0, 0));
        assert_eq!(render("y G", &dt), "-44 BC");
        assert_eq!(render("yy", &dt), "56");
    }
}
