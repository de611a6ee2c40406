// ABOUTME: Calendar windowing for progress analytics
// ABOUTME: Monday-start weeks, validated date ranges, default windows, date parsing, and local day bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily totals are keyed by local calendar day. Writes and reads must map instants to days
//! in the same time zone, so both go through [`local_day`] and [`day_bounds`] with one
//! `TimeZone` supplied by the composition root.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Accepted textual day format
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Monday of the ISO week containing `date`
///
/// Sunday maps back six days; any other weekday maps back `weekday - 1` days.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Parse a `YYYY-MM-DD` day
///
/// # Errors
///
/// Returns `InvalidFormat` when the input is not a valid `YYYY-MM-DD` date
pub fn parse_day(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DAY_FORMAT).map_err(|e| {
        AppError::invalid_format(format!("Invalid date '{input}', expected YYYY-MM-DD"))
            .with_source(e)
    })
}

/// Local calendar day of an instant, in the instant's own time zone
#[must_use]
pub fn local_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Half-open `[start, next_start)` interval covering `date` in `tz`
///
/// # Errors
///
/// Returns `InvalidInput` if local midnight does not exist in `tz` (a DST gap at
/// midnight) or the date has no successor
pub fn day_bounds<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> AppResult<(DateTime<Tz>, DateTime<Tz>)> {
    let next = date
        .succ_opt()
        .ok_or_else(|| AppError::invalid_input(format!("No day follows {date}")))?;
    Ok((local_midnight(date, tz)?, local_midnight(next, tz)?))
}

fn local_midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> AppResult<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or_else(|| AppError::invalid_input(format!("Local midnight of {date} does not exist")))
}

/// Inclusive calendar date range with `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day
    pub from: NaiveDate,
    /// Last day (inclusive)
    pub to: NaiveDate,
}

impl DateRange {
    /// Validated range
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `to` is before `from`
    pub fn new(from: NaiveDate, to: NaiveDate) -> AppResult<Self> {
        if to < from {
            return Err(AppError::invalid_input(format!(
                "Invalid date range: 'to' ({to}) is before 'from' ({from})"
            )));
        }
        Ok(Self { from, to })
    }

    /// First to last day of the month containing `today`
    #[must_use]
    pub fn current_month(today: NaiveDate) -> Self {
        let from = today.with_day(1).unwrap_or(today);
        let to = from
            .checked_add_months(Months::new(1))
            .and_then(|last| last.pred_opt())
            .unwrap_or(today);
        Self { from, to }
    }

    /// Monday to Sunday of the week containing `today`
    #[must_use]
    pub fn current_week(today: NaiveDate) -> Self {
        let from = week_start(today);
        Self {
            from,
            to: from + Duration::days(6),
        }
    }

    /// Whether `date` lies within the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Number of calendar days in the range (at least 1)
    #[must_use]
    pub fn day_count(&self) -> u32 {
        u32::try_from((self.to - self.from).num_days() + 1).unwrap_or(u32::MAX)
    }

    /// Every calendar day in the range, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}
