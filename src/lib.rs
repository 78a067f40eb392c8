mod arith;
mod calendar;
mod consts;
mod parse;
mod prelude;
#[cfg(test)]
mod test_utils;

pub use calendar::{days_in_month, is_leap_year, is_valid_date};
pub use consts::*;
pub use parse::ParseError;

use crate::prelude::*;
use calendar::month_length;

/// A single day of the Gregorian calendar.
///
/// The triple always names a real day: every constructor and setter
/// re-validates it, and the arithmetic only ever steps onto valid days.
/// Ordering is chronological (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month:02}-{day:02}")]
pub struct CalendarDate {
    year:  i32,
    month: u8,
    day:   u8,
}

/// A month/day/year triple that does not name a Gregorian day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "Invalid date: {month}/{day}/{year}")]
pub struct InvalidDate {
    pub month: i32,
    pub day:   i32,
    pub year:  i32,
}

impl std::error::Error for InvalidDate {}

impl CalendarDate {
    /// Creates a date from a month, day and year.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the triple fails [`is_valid_date`].
    pub fn new(month: i32, day: i32, year: i32) -> Result<Self, InvalidDate> {
        let invalid = InvalidDate { month, day, year };
        if !is_valid_date(month, day, year) {
            #[cfg(feature = "log")]
            log::debug!("Rejected {invalid}");
            return Err(invalid);
        }

        // Both fit: is_valid_date bounds them to 1..=12 and 1..=31.
        let month = u8::try_from(month).map_err(|_| invalid)?;
        let day = u8::try_from(day).map_err(|_| invalid)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date from parts already known to be valid.
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(day >= MIN_DAY && day <= month_length(month, year));
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns true if this date falls in a leap year
    pub const fn in_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        month_length(self.month, self.year)
    }

    /// Returns a copy with the day replaced.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the day does not exist in this month.
    pub fn with_day(self, day: i32) -> Result<Self, InvalidDate> {
        Self::new(i32::from(self.month), day, self.year)
    }

    /// Returns a copy with the month replaced.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is out of range or the current
    /// day does not exist in it.
    pub fn with_month(self, month: i32) -> Result<Self, InvalidDate> {
        Self::new(month, i32::from(self.day), self.year)
    }

    /// Returns a copy with the year replaced.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the year is negative, or if the date is
    /// February 29th and the new year is not a leap year.
    pub fn with_year(self, year: i32) -> Result<Self, InvalidDate> {
        Self::new(i32::from(self.month), i32::from(self.day), year)
    }

    /// Replaces the day in place.
    ///
    /// # Errors
    /// See [`CalendarDate::with_day`]. The date is unchanged on error.
    pub fn set_day(&mut self, day: i32) -> Result<(), InvalidDate> {
        *self = self.with_day(day)?;
        Ok(())
    }

    /// Replaces the month in place.
    ///
    /// # Errors
    /// See [`CalendarDate::with_month`]. The date is unchanged on error.
    pub fn set_month(&mut self, month: i32) -> Result<(), InvalidDate> {
        *self = self.with_month(month)?;
        Ok(())
    }

    /// Replaces the year in place.
    ///
    /// # Errors
    /// See [`CalendarDate::with_year`]. The date is unchanged on error.
    pub fn set_year(&mut self, year: i32) -> Result<(), InvalidDate> {
        *self = self.with_year(year)?;
        Ok(())
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
