use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time grain selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grain {
    Day,
    Week,
    Month,
}

impl Grain {
    /// Get grain code
    pub fn code(&self) -> &'static str {
        match self {
            Grain::Day => "day",
            Grain::Week => "week",
            Grain::Month => "month",
        }
    }

    /// Get all grains
    pub fn all() -> Vec<Grain> {
        vec![Grain::Day, Grain::Week, Grain::Month]
    }
}

/// A calendar period a transaction date falls into.
///
/// Carries numeric year/period fields so ordering is structural; the string
/// form exists only at the wire boundary via [`TimeBucket::label`]. Derived
/// `Ord` compares `Week { week: 9 }` before `Week { week: 10 }` without any
/// label parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeBucket {
    Day(NaiveDate),
    /// ISO week: the year field is the ISO week-year, which near January 1st
    /// can differ from the calendar year of the date. Weeks start Monday and
    /// week 1 contains the year's first Thursday.
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl TimeBucket {
    /// Bucket a date at the given grain. Pure: same inputs, same bucket.
    pub fn of(date: NaiveDate, grain: Grain) -> Self {
        match grain {
            Grain::Day => TimeBucket::Day(date),
            Grain::Week => {
                let iso = date.iso_week();
                TimeBucket::Week {
                    year: iso.year(),
                    week: iso.week(),
                }
            }
            Grain::Month => TimeBucket::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }

    /// Wire key: `YYYY-MM-DD`, `YYYY-Www` or `YYYY-MM`
    pub fn label(&self) -> String {
        match self {
            TimeBucket::Day(date) => date.format("%Y-%m-%d").to_string(),
            TimeBucket::Week { year, week } => format!("{}-W{:02}", year, week),
            TimeBucket::Month { year, month } => format!("{}-{:02}", year, month),
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
