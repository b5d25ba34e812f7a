use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DEFAULT_MONTH, DEFAULT_YEAR, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR,
};
use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ValidationError::YearOutOfRange` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        let non_zero = NonZeroU16::new(value).ok_or(ValidationError::YearOutOfRange(value))?;
        if value > MAX_YEAR {
            return Err(ValidationError::YearOutOfRange(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ValidationError::MonthOutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::MonthOutOfRange(value))?;
        if value > MAX_MONTH {
            return Err(ValidationError::MonthOutOfRange(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to fit the month it falls in.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the month it falls in.
    /// An unknown year or month falls back to `DEFAULT_YEAR` / `DEFAULT_MONTH`
    /// for the bound, so `Day::new(29, None, Some(february))` is accepted.
    ///
    /// # Errors
    /// Returns `ValidationError::DayOutOfRange` if the value is 0 or exceeds
    /// the days in the resolved month. The error carries the resolved year
    /// and month the bound was computed from.
    pub fn new(value: u8, year: Option<Year>, month: Option<Month>) -> Result<Self, ValidationError> {
        let resolved_year = year.map_or(DEFAULT_YEAR, Year::get);
        let resolved_month = month.map_or(DEFAULT_MONTH, Month::get);

        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::DayOutOfRange {
            year: resolved_year,
            month: resolved_month,
            day: value,
        })?;

        let max_day = days_in_month(resolved_year, resolved_month);
        if value > max_day {
            return Err(ValidationError::DayOutOfRange {
                year: resolved_year,
                month: resolved_month,
                day: value,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No year/month context, so bound by the longest month
        if value > MAX_DAY {
            return Err(ValidationError::DayOutOfRange {
                year: DEFAULT_YEAR,
                month: DEFAULT_MONTH,
                day: value,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::DayOutOfRange {
            year: DEFAULT_YEAR,
            month: DEFAULT_MONTH,
            day: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
