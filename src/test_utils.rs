//! Constructors shared by the unit tests.

use crate::CalendarDate;

/// Builds a date that the calling test knows to be valid.
pub fn date(month: i32, day: i32, year: i32) -> CalendarDate {
    CalendarDate::new(month, day, year)
        .unwrap_or_else(|err| panic!("test date {month}/{day}/{year} should be valid: {err}"))
}

/// Applies `next_day` `n` times.
pub fn step_forward(mut d: CalendarDate, n: u32) -> Option<CalendarDate> {
    for _ in 0..n {
        d = d.next_day()?;
    }
    Some(d)
}

/// Applies `previous_day` `n` times.
pub fn step_backward(mut d: CalendarDate, n: u32) -> Option<CalendarDate> {
    for _ in 0..n {
        d = d.previous_day()?;
    }
    Some(d)
}
