use std::ops::Index;

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses the calendar date of a header `date` value.
///
/// Accepts `2024-01-10`, `2024-01-10 10:42:32.123` and RFC 3339 date-times
/// such as `2024-01-10T10:42:32Z`. Only the date part is kept.
pub fn parse_date(buf: &str) -> Result<NaiveDate, String> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[ T]\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?\s*(?:Z|[+-]\d{2}:?\d{2})?)?$"
        ).unwrap();
    }

    let buf = buf.trim();
    let Some(caps) = DATE_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date {}", buf));
    };

    let y: i32 = to_int(caps.index(1), buf)?;
    let m: u32 = to_int(caps.index(2), buf)?;
    let d: u32 = to_int(caps.index(3), buf)?;

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| format!("Date out of range {}", buf))
}

pub fn year_label(date: &NaiveDate) -> String {
    format!("{}年", date.year())
}

pub fn month_day_label(date: &NaiveDate) -> String {
    date.format("%m月%d日").to_string()
}

pub fn full_date_label(date: &NaiveDate) -> String {
    date.format("%Y年%m月%d日").to_string()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes needed to read `text`, never less than one.
pub fn read_time(text: &str, words_per_minute: u32) -> u32 {
    let words = word_count(text) as f64;
    let minutes = (words / words_per_minute.max(1) as f64).round() as u32;
    minutes.max(1)
}

/// First `max_chars` characters of `text`, counted as chars rather than bytes.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Turns a free-form title into a URL-safe slug, e.g. `Hello, World!` -> `hello-world`.
pub fn slugify(title: &str) -> String {
    let ascii = unidecode::unidecode(title);

    let mut slug = String::with_capacity(ascii.len());
    let mut prev_dash = true;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
