use calrelay_models::reminder::{DATE_FORMAT, ReminderRequest, TIME_FORMAT};
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date format. Please use YYYY-MM-DD (e.g., 2026-01-15)")]
    InvalidDate,

    #[error("Invalid time format. Please use HH:MM in 24-hour format (e.g., 14:30)")]
    InvalidTime,
}

/// Checks the date and both times. The order of start and end is not checked.
pub fn validate_reminder(request: &ReminderRequest) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(&request.date, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate)?;

    for time in [&request.start_time, &request.end_time] {
        NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|_| ValidationError::InvalidTime)?;
    }

    Ok(())
}
