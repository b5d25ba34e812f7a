mod consts;
mod prelude;
mod types;

pub use consts::*;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Represents a calendar date whose year, month, and day may be individually
/// unknown, without fabricating missing data. Any known component is
/// guaranteed valid against the rest, and at least one component is always
/// known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartialDate {
    year: Option<Year>,
    month: Option<Month>,
    day: Option<Day>,
}

/// Error type for constructing a `PartialDate` from raw components.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "At least one of year, month or day must have a value")]
    EmptyDate,
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    YearOutOfRange(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    MonthOutOfRange(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    DayOutOfRange { year: u16, month: u8, day: u8 },
}

impl std::error::Error for ValidationError {}

/// Error type for converting a `PartialDate` to a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Not every component is known.
    #[error("Cannot convert to a full date while components are unknown")]
    IncompleteDate,
}

/// Error type for parsing a `PartialDate` from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input is not in the expected `YYYY[-MM[-DD]]` shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Empty date string.
    #[error("Empty date string")]
    EmptyInput,

    /// Components parsed but failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PartialDate {
    /// Creates a new `PartialDate` from independently optional components.
    ///
    /// Checks run in a fixed order and the first violated one decides the
    /// error: all components unknown, then the year range, then the month
    /// range, then the day against the days in its month. An unknown year or
    /// month resolves to `DEFAULT_YEAR` / `DEFAULT_MONTH` for the day bound,
    /// so `(None, Some(2), Some(29))` is accepted.
    ///
    /// Successful construction stores the values untouched; nothing is
    /// normalized or clamped.
    ///
    /// # Errors
    /// Returns `ValidationError` if all components are `None` or a supplied
    /// component is out of range.
    pub fn new(
        year: Option<u16>,
        month: Option<u8>,
        day: Option<u8>,
    ) -> Result<Self, ValidationError> {
        if year.is_none() && month.is_none() && day.is_none() {
            return Err(ValidationError::EmptyDate);
        }

        let year = year.map(Year::new).transpose()?;
        let month = month.map(Month::new).transpose()?;
        let day = day.map(|value| Day::new(value, year, month)).transpose()?;

        Ok(Self { year, month, day })
    }

    /// Returns the year component if known (as u16 for convenience)
    pub fn year(&self) -> Option<u16> {
        self.year.map(Year::get)
    }

    /// Returns the month component if known (as u8 for convenience)
    pub fn month(&self) -> Option<u8> {
        self.month.map(Month::get)
    }

    /// Returns the day component if known (as u8 for convenience)
    pub fn day(&self) -> Option<u8> {
        self.day.map(Day::get)
    }

    /// Returns the Year type if known
    pub const fn year_typed(&self) -> Option<Year> {
        self.year
    }

    /// Returns the Month type if known
    pub const fn month_typed(&self) -> Option<Month> {
        self.month
    }

    /// Returns the Day type if known
    pub const fn day_typed(&self) -> Option<Day> {
        self.day
    }

    /// Returns true when year, month, and day are all known.
    pub const fn is_complete_date(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// Returns the raw components: (year, month, day)
    pub fn components(&self) -> (Option<u16>, Option<u8>, Option<u8>) {
        (self.year(), self.month(), self.day())
    }

    /// Converts a complete date to a `chrono::NaiveDate`.
    ///
    /// # Errors
    /// Returns `ConversionError::IncompleteDate` when any component is
    /// unknown. Check `is_complete_date` first to avoid the error path.
    pub fn to_naive_date(&self) -> Result<NaiveDate, ConversionError> {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => {
                // SAFETY: construction validated the components against the
                // same Gregorian rules chrono applies, so the lookup cannot fail
                NaiveDate::from_ymd_opt(
                    i32::from(year.get()),
                    u32::from(month.get()),
                    u32::from(day.get()),
                )
                .ok_or(ConversionError::IncompleteDate)
            }
            _ => Err(ConversionError::IncompleteDate),
        }
    }
}

impl TryFrom<(Option<u16>, Option<u8>, Option<u8>)> for PartialDate {
    type Error = ValidationError;

    fn try_from(value: (Option<u16>, Option<u8>, Option<u8>)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl fmt::Display for PartialDate {
    /// Renders `YYYY[-MM[-DD]]` with `????` / `??` for unknown components.
    /// Trailing unknown components are omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{:04}", year.get())?,
            None => f.write_str(UNKNOWN_YEAR)?,
        }

        if self.month.is_none() && self.day.is_none() {
            return Ok(());
        }
        match self.month {
            Some(month) => write!(f, "{}{:02}", DATE_SEPARATOR, month.get())?,
            None => write!(f, "{DATE_SEPARATOR}{UNKNOWN_COMPONENT}")?,
        }

        if let Some(day) = self.day {
            write!(f, "{}{:02}", DATE_SEPARATOR, day.get())?;
        }
        Ok(())
    }
}

/// Parses one date component: the placeholder run means unknown, anything
/// else must be numeric.
fn parse_component<T: FromStr>(part: &str, placeholder: &str) -> Result<Option<T>, ParseError> {
    if part == placeholder {
        return Ok(None);
    }
    part.parse::<T>()
        .map(Some)
        .map_err(|_| ParseError::InvalidFormat(part.to_owned()))
}

impl FromStr for PartialDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Strict ISO-like shape: YYYY or YYYY-MM or YYYY-MM-DD, with `????`
        // (year) and `??` (month/day) marking unknown components
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() > 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Too many {} separators: expected 0-2, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            )));
        }

        let year = parse_component::<u16>(parts[0], UNKNOWN_YEAR)?;
        let month = match parts.get(1) {
            Some(part) => parse_component::<u8>(part, UNKNOWN_COMPONENT)?,
            None => None,
        };
        let day = match parts.get(2) {
            Some(part) => parse_component::<u8>(part, UNKNOWN_COMPONENT)?,
            None => None,
        };

        Ok(Self::new(year, month, day)?)
    }
}

impl serde::Serialize for PartialDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PartialDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
