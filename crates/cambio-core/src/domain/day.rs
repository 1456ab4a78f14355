use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::error::ValidationError;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar day in the provider's `YYYY-MM-DD` wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Day(Date);

impl Day {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn today_utc() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(Duration::days(1)))
    }

    pub fn minus_days(self, days: i64) -> Self {
        Self(self.0.saturating_sub(Duration::days(days)))
    }

    /// Every calendar day from `self` through `end`, inclusive. Empty when
    /// `self` is after `end`.
    pub fn until_inclusive(self, end: Day) -> DayRange {
        DayRange {
            cursor: (self <= end).then_some(self),
            end,
        }
    }

    pub fn as_date(self) -> Date {
        self.0
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month() as u8,
            self.0.day()
        )
    }
}

impl TryFrom<String> for Day {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Day {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Day> for String {
    fn from(value: Day) -> Self {
        value.to_string()
    }
}

/// Inclusive forward iterator over calendar days.
#[derive(Debug, Clone)]
pub struct DayRange {
    cursor: Option<Day>,
    end: Day,
}

impl Iterator for DayRange {
    type Item = Day;

    fn next(&mut self) -> Option<Day> {
        let current = self.cursor?;
        self.cursor = (current < self.end).then(|| current.next());
        Some(current)
    }
}
