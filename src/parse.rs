use std::str::FromStr;

use crate::{CalendarDate, DATE_SEPARATOR, InvalidDate};

/// Error type for reading a [`CalendarDate`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was empty or whitespace only.
    #[error("Empty date string")]
    EmptyInput,

    /// Wrong number of components, or a component that is not an integer.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Well-formed input naming a day that does not exist.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
}

/// Accepts two layouts:
/// - `M D Y`: three whitespace-separated integers (`"3 5 2024"`)
/// - `YYYY-MM-DD`: the `Display` form (`"2024-03-05"`)
impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Whitespace wins so that a negative year in "M D Y" is not mistaken for ISO
        let result = if trimmed.contains(char::is_whitespace) {
            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            parse_month_day_year(&parts)
        } else if trimmed.contains(DATE_SEPARATOR) {
            let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
            parse_iso(&parts)
        } else {
            Err(ParseError::InvalidFormat(format!(
                "Expected \"M D Y\" or \"YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD\": {trimmed}"
            )))
        };

        #[cfg(feature = "log")]
        if let Err(ParseError::InvalidFormat(reason)) = &result {
            log::debug!("Rejected date input {s:?}: {reason}");
        }

        result
    }
}

/// Helper to parse one component with a useful error message
fn parse_component(s: &str) -> Result<i32, ParseError> {
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(format!("Not an integer: {s:?}")))
}

fn parse_month_day_year(parts: &[&str]) -> Result<CalendarDate, ParseError> {
    let [month, day, year] = parts else {
        return Err(ParseError::InvalidFormat(format!(
            "Expected 3 whitespace-separated components, found {}",
            parts.len()
        )));
    };

    let month = parse_component(month)?;
    let day = parse_component(day)?;
    let year = parse_component(year)?;

    Ok(CalendarDate::new(month, day, year)?)
}

fn parse_iso(parts: &[&str]) -> Result<CalendarDate, ParseError> {
    let [year, month, day] = parts else {
        return Err(ParseError::InvalidFormat(format!(
            "Expected 2 {DATE_SEPARATOR} separators, found {}",
            parts.len() - 1
        )));
    };

    let year = parse_component(year)?;
    let month = parse_component(month)?;
    let day = parse_component(day)?;

    Ok(CalendarDate::new(month, day, year)?)
}
