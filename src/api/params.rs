//! Argument checks run before any request is issued.

use crate::error::ChessError;

/// Highest year that still fits the four-digit archive path segment
const MAX_ARCHIVE_YEAR: u32 = 9999;

/// Checks a value used as one URL path segment (username, club slug, ids).
pub fn validate_identifier(parameter: &str, value: &str) -> Result<(), ChessError> {
    if value.is_empty() {
        return Err(ChessError::invalid_parameter(parameter, "must not be empty"));
    }
    if value.contains('/') {
        return Err(ChessError::invalid_parameter(
            parameter,
            format!("{value:?} must not contain '/'"),
        ));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ChessError::invalid_parameter(
            parameter,
            format!("{value:?} must not contain whitespace"),
        ));
    }
    Ok(())
}

/// Checks an ISO-3166 country code and returns it upper-cased.
pub fn validate_country_code(code: &str) -> Result<String, ChessError> {
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ChessError::invalid_parameter(
            "country_code",
            format!("{code:?} is not a two-letter country code"),
        ));
    }
    Ok(code.to_ascii_uppercase())
}

pub fn validate_year(year: u32) -> Result<(), ChessError> {
    if year > MAX_ARCHIVE_YEAR {
        return Err(ChessError::invalid_parameter(
            "year",
            format!("{year} does not fit four digits"),
        ));
    }
    Ok(())
}

pub fn validate_month(month: u32) -> Result<(), ChessError> {
    if !(1..=12).contains(&month) {
        return Err(ChessError::invalid_parameter(
            "month",
            format!("{month} is not between 1 and 12"),
        ));
    }
    Ok(())
}

/// Checks a one-based number (board, round, group).
pub fn validate_ordinal(parameter: &str, value: u32) -> Result<(), ChessError> {
    if value == 0 {
        return Err(ChessError::invalid_parameter(parameter, "must be at least 1"));
    }
    Ok(())
}
