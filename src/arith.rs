//! Day arithmetic for [`CalendarDate`].
//!
//! Every operation carries overflow month by month exactly like stepping one
//! day at a time, so `d.checked_add_days(n)` always equals `n` calls to
//! [`CalendarDate::next_day`]. The checked forms return `None` when the
//! result would fall before year 0 or past year `i32::MAX`; the operator
//! forms panic in that case.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::calendar::month_length;
use crate::consts::{DAYS_PER_GREGORIAN_CYCLE, DECEMBER, GREGORIAN_CYCLE, JANUARY, MIN_DAY, MIN_YEAR};
use crate::CalendarDate;

// --- month stepping ---
fn next_month(year: i32, month: u8) -> Option<(i32, u8)> {
    if month == DECEMBER {
        year.checked_add(1).map(|ny| (ny, JANUARY))
    } else {
        Some((year, month + 1))
    }
}

fn previous_month(year: i32, month: u8) -> Option<(i32, u8)> {
    if month == JANUARY {
        if year > MIN_YEAR {
            Some((year - 1, DECEMBER))
        } else {
            None
        }
    } else {
        Some((year, month - 1))
    }
}

/// Years spanned by `days / DAYS_PER_GREGORIAN_CYCLE` whole cycles, plus the
/// leftover days. Shifting a date by 400 years moves it exactly one cycle.
fn split_cycles(days: u32) -> Option<(i32, u32)> {
    let cycles = i32::try_from(days / DAYS_PER_GREGORIAN_CYCLE).ok()?;
    Some((cycles.checked_mul(GREGORIAN_CYCLE)?, days % DAYS_PER_GREGORIAN_CYCLE))
}

impl CalendarDate {
    /// The following day, or `None` past the last representable year.
    pub fn next_day(self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        if day < month_length(month, year) {
            Some(Self::from_parts(year, month, day + 1))
        } else {
            // roll to first of next month
            next_month(year, month).map(|(ny, nm)| Self::from_parts(ny, nm, MIN_DAY))
        }
    }

    /// The preceding day, or `None` before January 1st of year 0.
    pub fn previous_day(self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        if day > MIN_DAY {
            Some(Self::from_parts(year, month, day - 1))
        } else {
            // roll to last of previous month
            previous_month(year, month).map(|(py, pm)| Self::from_parts(py, pm, month_length(pm, py)))
        }
    }

    /// Returns the date `days` days later.
    pub fn checked_add_days(self, days: u32) -> Option<Self> {
        let (cycle_years, rest) = split_cycles(days)?;
        let mut year = self.year().checked_add(cycle_years)?;
        let mut month = self.month();
        let mut day = u32::from(self.day()) + rest;

        loop {
            let length = u32::from(month_length(month, year));
            if day <= length {
                break;
            }
            day -= length;
            (year, month) = next_month(year, month)?;
        }

        Some(Self::from_parts(year, month, u8::try_from(day).ok()?))
    }

    /// Returns the date `days` days earlier.
    pub fn checked_sub_days(self, days: u32) -> Option<Self> {
        let (cycle_years, rest) = split_cycles(days)?;
        let mut year = self.year().checked_sub(cycle_years)?;
        if year < MIN_YEAR {
            return None;
        }
        let mut month = self.month();
        let mut day = i64::from(self.day()) - i64::from(rest);

        while day < i64::from(MIN_DAY) {
            (year, month) = previous_month(year, month)?;
            day += i64::from(month_length(month, year));
        }

        Some(Self::from_parts(year, month, u8::try_from(day).ok()?))
    }

    /// Returns the date `days` days later.
    ///
    /// # Panics
    /// Panics if the result is past the last representable year.
    #[allow(clippy::expect_used)]
    pub fn add_days(self, days: u32) -> Self {
        self.checked_add_days(days)
            .expect("adding days to date overflowed")
    }

    /// Returns the date `days` days earlier.
    ///
    /// # Panics
    /// Panics if the result is before January 1st of year 0.
    #[allow(clippy::expect_used)]
    pub fn sub_days(self, days: u32) -> Self {
        self.checked_sub_days(days)
            .expect("subtracting days from date overflowed")
    }

    /// Advances by one day and returns the new value.
    ///
    /// # Panics
    /// Panics past the last representable year.
    pub fn increment(&mut self) -> Self {
        *self += 1;
        *self
    }

    /// Advances by one day and returns the value from before the step.
    ///
    /// # Panics
    /// Panics past the last representable year.
    pub fn post_increment(&mut self) -> Self {
        let before = *self;
        *self += 1;
        before
    }

    /// Steps back one day and returns the new value.
    ///
    /// # Panics
    /// Panics before January 1st of year 0.
    pub fn decrement(&mut self) -> Self {
        *self -= 1;
        *self
    }

    /// Steps back one day and returns the value from before the step.
    ///
    /// # Panics
    /// Panics before January 1st of year 0.
    pub fn post_decrement(&mut self) -> Self {
        let before = *self;
        *self -= 1;
        before
    }
}

impl Add<u32> for CalendarDate {
    type Output = Self;

    fn add(self, days: u32) -> Self {
        self.add_days(days)
    }
}

impl AddAssign<u32> for CalendarDate {
    fn add_assign(&mut self, days: u32) {
        *self = self.add_days(days);
    }
}

impl Sub<u32> for CalendarDate {
    type Output = Self;

    fn sub(self, days: u32) -> Self {
        self.sub_days(days)
    }
}

impl SubAssign<u32> for CalendarDate {
    fn sub_assign(&mut self, days: u32) {
        *self = self.sub_days(days);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_utils::{step_backward, step_forward};
    use proptest::prelude::*;

    fn any_date() -> impl Strategy<Value = CalendarDate> {
        (0i32..4000, 1u8..=12, 1u8..=31).prop_map(|(year, month, day)| {
            CalendarDate::from_parts(year, month, day.min(month_length(month, year)))
        })
    }

    proptest! {
        /// Property: adding n days equals n single-day steps forward
        #[test]
        fn test_add_days_equals_repeated_next_day(d in any_date(), n in 0u32..1500) {
            prop_assert_eq!(d.checked_add_days(n), step_forward(d, n));
        }

        /// Property: subtracting n days equals n single-day steps backward
        #[test]
        fn test_sub_days_equals_repeated_previous_day(d in any_date(), n in 0u32..1500) {
            prop_assert_eq!(d.checked_sub_days(n), step_backward(d, n));
        }

        /// Property: subtraction undoes addition
        #[test]
        fn test_add_then_sub_roundtrip(d in any_date(), n in 0u32..=u32::MAX) {
            let later = d.checked_add_days(n);
            prop_assert!(later.is_some());
            if let Some(later) = later {
                prop_assert!(later >= d);
                prop_assert_eq!(later.checked_sub_days(n), Some(d));
            }
        }

        /// Property: stepping forward always moves to a strictly later date
        #[test]
        fn test_next_day_is_later(d in any_date()) {
            let next = d.next_day();
            prop_assert!(next.is_some_and(|next| next > d));
            prop_assert_eq!(next.and_then(CalendarDate::previous_day), Some(d));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// Property: the cycle shortcut agrees with stepping just past a full cycle
        #[test]
        fn test_add_days_across_cycle_boundary(d in any_date(), n in 146_000u32..146_200) {
            prop_assert_eq!(d.checked_add_days(n), step_forward(d, n));
        }
    }
}
