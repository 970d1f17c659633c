//! Validated birth date.
//!
//! # Responsibility
//! - Parse the two date shapes accepted at the boundary (`DD/MM/YYYY` and
//!   ISO `YYYY-MM-DD`).
//! - Reject impossible calendar dates and dates after the reference day.
//! - Provide the calendar arithmetic (age, birthday reached) charts need.
//!
//! # Invariants
//! - A `BirthDate` always wraps a real calendar date with year >= 1.
//! - A `BirthDate` built by [`BirthDate::parse`] is never after `as_of`.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DAY_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid day-first date regex")
});
static ISO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid iso date regex"));

/// Birth date validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Input is blank.
    Empty,
    /// Input matches neither `DD/MM/YYYY` nor `YYYY-MM-DD`.
    Unrecognized(String),
    /// Components do not name a real calendar day (e.g. 30/02).
    Impossible { day: u32, month: u32, year: i32 },
    /// Date lies after the reference day.
    InFuture { date: NaiveDate, as_of: NaiveDate },
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "birth date is empty"),
            Self::Unrecognized(value) => write!(
                f,
                "birth date `{value}` is not in DD/MM/YYYY or YYYY-MM-DD format"
            ),
            Self::Impossible { day, month, year } => {
                write!(f, "birth date {day:02}/{month:02}/{year:04} does not exist")
            }
            Self::InFuture { date, as_of } => {
                write!(f, "birth date {date} is after reference date {as_of}")
            }
        }
    }
}

impl Error for DateError {}

/// Calendar birth date used by every date-derived chart number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parses `DD/MM/YYYY` or `YYYY-MM-DD` and validates against `as_of`.
    ///
    /// # Errors
    /// - [`DateError::Empty`] / [`DateError::Unrecognized`] for bad shapes.
    /// - [`DateError::Impossible`] for dates like 31/04 or 29/02 on
    ///   non-leap years.
    /// - [`DateError::InFuture`] when the date is after `as_of`.
    pub fn parse(input: &str, as_of: NaiveDate) -> Result<Self, DateError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DateError::Empty);
        }

        let (day, month, year) = if let Some(caps) = DAY_FIRST_RE.captures(trimmed) {
            parse_components(&caps[1], &caps[2], &caps[3])
                .ok_or_else(|| DateError::Unrecognized(trimmed.to_string()))?
        } else if let Some(caps) = ISO_RE.captures(trimmed) {
            parse_components(&caps[3], &caps[2], &caps[1])
                .ok_or_else(|| DateError::Unrecognized(trimmed.to_string()))?
        } else {
            return Err(DateError::Unrecognized(trimmed.to_string()));
        };

        Self::from_ymd(year, month, day, as_of)
    }

    /// Builds a birth date from numeric components.
    pub fn from_ymd(year: i32, month: u32, day: u32, as_of: NaiveDate) -> Result<Self, DateError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .filter(|_| year >= 1)
            .ok_or(DateError::Impossible { day, month, year })?;
        if date > as_of {
            return Err(DateError::InFuture { date, as_of });
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Year as an unsigned value for digit arithmetic.
    pub fn year_digits(&self) -> u32 {
        self.0.year().unsigned_abs()
    }

    /// Whether `(today.month, today.day) >= (month, day)`.
    pub fn birthday_reached(&self, today: NaiveDate) -> bool {
        (today.month(), today.day()) >= (self.month(), self.day())
    }

    /// Completed years of life on `today`; 0 when `today` precedes the birth.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let mut years = today.year() - self.year();
        if !self.birthday_reached(today) {
            years -= 1;
        }
        years.max(0).unsigned_abs()
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y"))
    }
}

fn parse_components(day: &str, month: &str, year: &str) -> Option<(u32, u32, i32)> {
    Some((day.parse().ok()?, month.parse().ok()?, year.parse().ok()?))
}
