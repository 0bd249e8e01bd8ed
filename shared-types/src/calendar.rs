use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid calendar date {input:?}, expected YYYY-MM-DD")]
pub struct DateParseError {
    pub input: String,
}

/// A plain calendar date. Field order gives chronological `Ord`, so range
/// checks like `date >= min_date` are direct comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Builds a date, rejecting out-of-range months and days (leap years
    /// accounted for).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        let days = YearMonth { year, month }.days_in_month();
        if !(1..=days).contains(&day) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn year_month(self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DateParseError {
            input: s.to_string(),
        };
        let mut parts = s.splitn(3, '-');
        let year = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let month = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let day = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        CalendarDate::from_ymd(year, month, day).ok_or_else(err)
    }
}

/// The month a calendar view is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: CalendarDate) -> Self {
        date.year_month()
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn days_in_month(self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if (self.year % 4 == 0 && self.year % 100 != 0) || (self.year % 400 == 0) {
                    29
                } else {
                    28
                }
            }
            _ => 30,
        }
    }

    /// Weekday of the first of the month via Zeller's congruence,
    /// 0 = Sunday through 6 = Saturday.
    pub fn first_weekday(self) -> usize {
        let mut year = self.year;
        let mut month = self.month as i32;

        if month < 3 {
            month += 12;
            year -= 1;
        }

        let k = year % 100;
        let j = year / 100;
        let h = (1 + 13 * (month + 1) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);

        // Zeller counts from Saturday; shift to 0 = Sunday
        ((h + 6) % 7) as usize
    }

    /// The date for a day number of this month. Day must be within the
    /// month; cells produced by `day_cells` always are.
    pub fn date(self, day: u32) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day,
        }
    }

    /// Month laid out for a Sunday-first grid: leading `None` placeholders
    /// for the days before the first of the month, then every date in order.
    pub fn day_cells(self) -> Vec<Option<CalendarDate>> {
        let mut cells = Vec::new();

        for _ in 0..self.first_weekday() {
            cells.push(None);
        }

        for day in 1..=self.days_in_month() {
            cells.push(Some(self.date(day)));
        }

        cells
    }

    pub fn name(self) -> &'static str {
        match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}
