use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_DAY, MIN_YEAR,
};

/// Returns true for Gregorian leap years.
/// Total over all integers, including the negative years no date can hold.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// Returns `None` when `month` is outside `1..=12`.
pub fn days_in_month(month: i32, year: i32) -> Option<u8> {
    let month = u8::try_from(month).ok()?;
    if month == 0 || month > MAX_MONTH {
        return None;
    }
    Some(month_length(month, year))
}

/// Returns true iff `(month, day, year)` names a real Gregorian day.
///
/// Rejects negative years, months outside `1..=12`, and days outside
/// `1..=days_in_month(month, year)`.
pub fn is_valid_date(month: i32, day: i32, year: i32) -> bool {
    if year < MIN_YEAR || day < i32::from(MIN_DAY) {
        return false;
    }
    days_in_month(month, year).is_some_and(|max| day <= i32::from(max))
}

/// Month length for a month already known to be in `1..=12`.
pub(crate) const fn month_length(month: u8, year: i32) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
