//! Schedule builder: parse a meeting start time and expand the template
//! items into rows with computed start times. Pure functions, no I/O.

use crate::errors::{AppError, AppResult};
use crate::models::item::{AgendaItem, ScheduledItem};
use chrono::{Duration, NaiveTime};

/// Parse a free-form time-of-day string.
///
/// Accepts "7:00 PM", "19:00", "7 pm", "7pm". With a meridian the hour is
/// read as 12-hour (12am → 0, 7pm → 19, 12pm → 12); without one it is
/// taken literally as 24-hour. Minutes default to 0 when omitted.
pub fn parse_time_of_day(text: &str) -> AppResult<NaiveTime> {
    let invalid = || AppError::InvalidTime(text.to_string());

    let lower = text.trim().to_ascii_lowercase();
    let (body, meridian) = match lower.strip_suffix("am") {
        Some(rest) => (rest.trim_end(), Some(false)),
        None => match lower.strip_suffix("pm") {
            Some(rest) => (rest.trim_end(), Some(true)),
            None => (lower.as_str(), None),
        },
    };

    let (hour_part, minute_part) = match body.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (body, None),
    };

    let mut hour = parse_digits(hour_part, 1, 2).ok_or_else(invalid)?;
    let minute = match minute_part {
        Some(m) => parse_digits(m, 2, 2).ok_or_else(invalid)?,
        None => 0,
    };
    if minute > 59 {
        return Err(invalid());
    }

    match meridian {
        Some(pm) => {
            // 12-hour reading: hour must sit in 1..=12 before conversion.
            if !(1..=12).contains(&hour) {
                return Err(invalid());
            }
            if pm && hour < 12 {
                hour += 12;
            }
            if !pm && hour == 12 {
                hour = 0;
            }
        }
        None => {
            if hour > 23 {
                return Err(invalid());
            }
        }
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

fn parse_digits(s: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if s.len() < min_len || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Expand the ordered item list into scheduled rows: each item starts at
/// the running clock, which then advances by the item's duration. NaiveTime
/// arithmetic wraps at midnight, so a late meeting rolls into 12:xx AM
/// without any date bookkeeping.
pub fn build_schedule(start: NaiveTime, items: &[AgendaItem]) -> Vec<ScheduledItem> {
    let mut clock = start;
    items
        .iter()
        .map(|item| {
            let row = ScheduledItem {
                item: item.clone(),
                start: clock,
            };
            clock = clock + Duration::minutes(i64::from(item.duration_minutes));
            row
        })
        .collect()
}
